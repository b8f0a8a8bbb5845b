//! Intent Classifier — keyword routing of free-text questions.
//!
//! Typed questions only ever split into personality lookups and general profile questions;
//! place recommendations have their own request and never pass through here.

use serde::{Deserialize, Serialize};

/// Answer strategy for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Personality/MBTI lookup against the structured table.
    IdentityLookup,
    /// Anything else about the person, answered from the grounding context.
    GeneralProfile,
    /// Local place recommendations. Reached through its own entry point, never classified.
    PlaceRecommendation,
}

/// The subset of [`Intent`] a submitted question can classify into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionIntent {
    IdentityLookup,
    GeneralProfile,
}

impl From<QuestionIntent> for Intent {
    fn from(intent: QuestionIntent) -> Self {
        match intent {
            QuestionIntent::IdentityLookup => Intent::IdentityLookup,
            QuestionIntent::GeneralProfile => Intent::GeneralProfile,
        }
    }
}

/// Lower-cased substrings that route a question to [`QuestionIntent::IdentityLookup`].
pub const MBTI_KEYWORDS: &[&str] = &["mbti", "성격", "유형", "personality"];

pub fn classify_question(question: &str) -> QuestionIntent {
    let lowered = question.to_lowercase();
    if MBTI_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        QuestionIntent::IdentityLookup
    } else {
        QuestionIntent::GeneralProfile
    }
}
