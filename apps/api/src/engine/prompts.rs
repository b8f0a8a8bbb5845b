// All LLM prompt constants for the query engine.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::engine::intent::Intent;

/// Fixed sampling parameters for one intent. Not user-configurable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub temperature: f64,
    pub max_tokens: u32,
}

pub fn params_for(intent: Intent) -> GenerationParams {
    match intent {
        Intent::GeneralProfile => GenerationParams {
            temperature: 0.3,
            max_tokens: 400,
        },
        Intent::IdentityLookup => GenerationParams {
            temperature: 0.5,
            max_tokens: 400,
        },
        Intent::PlaceRecommendation => GenerationParams {
            temperature: 0.7,
            max_tokens: 900,
        },
    }
}

/// Fills `{name}` placeholders in one left-to-right pass. Substituted values are never
/// re-scanned, so record text or a question containing `{question}` stays literal.
/// Unknown placeholders are left as written.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let filled = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });
        match filled {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// System prompt for profile questions.
pub const PROFILE_SYSTEM: &str = "You are a friendly kiosk assistant introducing one person \
    to visitors. You only know what the supplied profile and career tables say about them.";

/// Profile answer template.
/// Replace: {grounding_instruction}, {context}, {question}
pub const PROFILE_PROMPT_TEMPLATE: &str = r#"{grounding_instruction}

CONTEXT (source of truth — ONLY use facts from here):
{context}

VISITOR QUESTION:
{question}"#;

/// System prompt for MBTI elaboration.
pub const MBTI_SYSTEM: &str = "You are a friendly kiosk assistant. You explain a personality \
    type record in plain, warm language for a general audience.";

/// MBTI elaboration template. The record fields are the only content the model sees.
/// Replace: {grounding_instruction}, {record}, {question}
pub const MBTI_PROMPT_TEMPLATE: &str = r#"{grounding_instruction}

PERSONALITY TYPE RECORD (describe THIS record only — never another type):
{record}

VISITOR QUESTION:
{question}

Explain in plain language what this record says about how the person works with others."#;

/// System prompt for place recommendations.
pub const PLACE_SYSTEM: &str = "You are a local guide recommending real places. \
    You MUST answer with the requested line format only. \
    Do NOT add a preamble, headings, markdown, or closing remarks.";

/// Place recommendation template.
/// Replace: {count}, {kind}, {location}
pub const PLACE_PROMPT_TEMPLATE: &str = r#"Recommend {count} {kind} near {location}.

Return EXACTLY {count} lines, one place per line, in this format:
1. name | category | one-line description | signature menu item or attraction | street address

HARD RULES:
1. Use the pipe character `|` between the five fields — never dashes
2. Number every line (`1.`, `2.`, ...)
3. Write every field in Korean except proper nouns
4. Do NOT leave any field empty; write `정보 없음` if unknown"#;
