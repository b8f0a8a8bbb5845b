// Shared prompt constants and prompt-building utilities.
// Each strategy's own templates live in engine/prompts.rs.
// This file contains cross-cutting prompt fragments.

/// Provenance marker the generator must append to answers drawn from the profile tables.
pub const PROFILE_PROVENANCE: &str = "(출처: 프로필·경력 표)";

/// Provenance marker appended to MBTI elaborations.
pub const MBTI_PROVENANCE: &str = "(출처: MBTI 표)";

/// Maximum number of sentences a grounded answer may use.
pub const SENTENCE_BUDGET: usize = 3;

/// Common instruction that keeps every grounded answer inside the supplied context.
/// Replace `{sentence_budget}` and `{provenance}` before sending.
pub const GROUNDING_INSTRUCTION: &str = "\
    CRITICAL: Answer ONLY from the context provided below. \
    Do NOT infer, interpolate, or invent details that the context does not state. \
    If the context does not contain the answer, say that the information is not available. \
    Answer in Korean, in at most {sentence_budget} sentences. \
    End the answer with the marker {provenance} on its own line.";

/// Renders [`GROUNDING_INSTRUCTION`] for the given provenance marker.
pub fn grounding_instruction(provenance: &str) -> String {
    GROUNDING_INSTRUCTION
        .replace("{sentence_budget}", &SENTENCE_BUDGET.to_string())
        .replace("{provenance}", provenance)
}
