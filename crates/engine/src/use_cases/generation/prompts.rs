//! Prompt construction for quest generation.
//!
//! Pure functions: deterministic for a given input, no I/O. The speaker-role
//! constraint appears in both the schema description and the task
//! instructions on purpose; putting a character name in `speaker` is the
//! deviation LLMs make most often, so the prompt hammers on it.

use questsmith_domain::{DesignBrief, RegenerateSectionRequest};

/// Persona and output contract, sent as the system message.
pub const SYSTEM_PROMPT: &str = r#"You are an experienced game narrative designer and systems designer.
You design quests for modern online games with clear objectives,
strong thematic coherence, and concise, production-ready text.

Your task is to produce STRICT JSON that conforms exactly to the schema
described by the user. Do not include any extra commentary, markdown,
or explanations. Only output JSON."#;

/// Textual description of the Quest JSON shape, embedded in every user prompt.
pub const QUEST_SCHEMA_DESCRIPTION: &str = r#"The JSON object must have the following structure:

{
  "title": string,
  "summary": string,
  "zone": string,
  "faction": string,
  "tone": string,
  "player_level_min": integer,
  "player_level_max": integer,
  "steps": [
    {
      "step_number": integer,
      "description": string,
      "objective": string,
      "npc_dialogue": [
        {
          "speaker": must be exactly "NPC" or "PLAYER" (not a character name),
          "text": string
        },
        ...
      ]
    },
    ...
  ],
  "rewards": [
    {
      "type": "xp" | "gold" | "item" | "cosmetic" | "other",
      "description": string,
      "amount": integer or null
    },
    ...
  ]
}

CRITICAL: In npc_dialogue entries:
- "speaker" MUST be exactly the literal string "NPC" (when an NPC is speaking) or "PLAYER" (when the player is speaking).
- Do NOT use character names like "Jora", "Guard", "Swamp Guardian" - these belong in the dialogue text, not as the speaker field.
- Each dialogue line must indicate WHO is speaking using only "NPC" or "PLAYER"."#;

/// Render the user prompt for full quest generation.
///
/// Embeds the brief verbatim as pretty-printed JSON so every brief field
/// reaches the model, then restates the hard requirements.
pub fn generation_prompt(brief: &DesignBrief) -> String {
    let brief_json = serde_json::to_string_pretty(brief).expect("design brief serializes to JSON");

    let forbidden_line = match brief.forbidden_elements.as_deref() {
        Some(elements) if !elements.is_empty() => format!(
            "\n- The quest must NOT contain any of these forbidden elements: {}.",
            elements.join(", ")
        ),
        _ => String::new(),
    };

    format!(
        r#"Design a quest according to the following design brief and output
a JSON object following the schema described below.

DESIGN BRIEF (JSON):
{brief_json}

SCHEMA DESCRIPTION:
{schema}

Additional requirements:
- The quest should be thematically consistent with the zone and faction.
- The tone field should be reflected in the writing style.
- The quest must contain exactly {steps} steps.
- Keep text concise and production-ready.
- Ensure all required fields are present and valid.
- IMPORTANT: In dialogue exchanges, the "speaker" field must ONLY be "NPC" or "PLAYER" - never use character names or NPC identities as the speaker value. Character names and descriptions should appear in the dialogue text itself, not in the speaker field.{forbidden_line}"#,
        schema = QUEST_SCHEMA_DESCRIPTION,
        steps = brief.number_of_steps,
    )
}

/// Render the user prompt for regenerating one section of an existing quest.
///
/// The model sees the brief, the full current quest, and which section (or
/// step) to redo, and is told to return the complete quest with everything
/// else untouched.
pub fn regeneration_prompt(request: &RegenerateSectionRequest) -> String {
    let payload = serde_json::json!({
        "brief": request.brief,
        "current_quest": request.quest,
        "section": request.section,
        "step_index": request.step_index,
    });
    let payload_json =
        serde_json::to_string_pretty(&payload).expect("regeneration payload serializes to JSON");

    format!(
        r#"You are updating part of an existing quest specification.

CURRENT DATA (JSON):
{payload_json}

SCHEMA DESCRIPTION:
{schema}

TASK:
- Regenerate ONLY the requested section of the quest ("title", "summary", or "steps").
- For "title" or "summary": keep the quest structure but update that field to be stronger and more engaging.
- For "steps": regenerate the step at the given step_index (0-based index), keeping the rest of the quest intact.
- Always return the FULL updated quest JSON object (not just the changed field).
- Keep every "speaker" field strictly "NPC" or "PLAYER".
- Ensure the JSON still follows the schema exactly."#,
        schema = QUEST_SCHEMA_DESCRIPTION,
    )
}
