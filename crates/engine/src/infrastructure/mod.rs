//! Infrastructure implementations.
//!
//! Contains the port trait implementation for the external LLM provider and
//! the process configuration.

pub mod openai;
pub mod ports;
pub mod settings;
