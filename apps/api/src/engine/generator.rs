//! Generation Client — builds the per-intent request and converts every failure of the
//! external call into a `GenerationFailure` carrying its cause.
//!
//! Nothing past this boundary sees an `LlmError`; callers get `Ok(text)` or a failure they
//! can render inline.

use thiserror::Error;
use tracing::{info, warn};

use crate::engine::intent::Intent;
use crate::engine::prompts::{
    fill_template, params_for, MBTI_PROMPT_TEMPLATE, MBTI_SYSTEM, PLACE_PROMPT_TEMPLATE, PLACE_SYSTEM,
    PROFILE_PROMPT_TEMPLATE, PROFILE_SYSTEM,
};
use crate::engine::recommendation::PlaceQuery;
use crate::llm_client::prompts::{grounding_instruction, MBTI_PROVENANCE, PROFILE_PROVENANCE};
use crate::llm_client::{ChatMessage, GenerationRequest, TextGenerator};
use crate::models::profile::MbtiRecord;
use crate::models::session::ConversationExchange;

/// Prefix of the inline message shown when generation fails.
pub const GENERATION_FAILURE_PREFIX: &str = "답변을 생성하지 못했습니다. 원인: ";
const EMPTY_RESPONSE_CAUSE: &str = "empty response";

#[derive(Debug, Clone, PartialEq, Error)]
#[error("{intent:?} generation failed: {cause}")]
pub struct GenerationFailure {
    pub intent: Intent,
    pub cause: String,
}

impl GenerationFailure {
    /// Text shown to the visitor in place of an answer.
    pub fn user_message(&self) -> String {
        format!("{GENERATION_FAILURE_PREFIX}{}", self.cause)
    }

    /// The service answered, but with nothing but whitespace.
    pub fn is_empty_response(&self) -> bool {
        self.cause == EMPTY_RESPONSE_CAUSE
    }
}

pub struct GenerationClient<'a> {
    generator: &'a dyn TextGenerator,
}

impl<'a> GenerationClient<'a> {
    pub fn new(generator: &'a dyn TextGenerator) -> Self {
        Self { generator }
    }

    pub async fn answer_profile(
        &self,
        context: &str,
        history: &[ConversationExchange],
        question: &str,
    ) -> Result<String, GenerationFailure> {
        self.run(
            Intent::GeneralProfile,
            build_profile_request(context, history, question),
        )
        .await
    }

    pub async fn elaborate_mbti(
        &self,
        record: &MbtiRecord,
        question: &str,
    ) -> Result<String, GenerationFailure> {
        self.run(Intent::IdentityLookup, build_mbti_request(record, question))
            .await
    }

    pub async fn recommend_places(&self, query: &PlaceQuery) -> Result<String, GenerationFailure> {
        self.run(Intent::PlaceRecommendation, build_place_request(query))
            .await
    }

    async fn run(
        &self,
        intent: Intent,
        request: GenerationRequest,
    ) -> Result<String, GenerationFailure> {
        info!(
            "Generation call: intent={:?} temperature={} max_tokens={}",
            intent, request.temperature, request.max_tokens
        );
        match self.generator.generate(&request).await {
            Ok(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            Ok(_) => {
                warn!("Generation for {:?} returned empty text", intent);
                Err(GenerationFailure {
                    intent,
                    cause: EMPTY_RESPONSE_CAUSE.to_string(),
                })
            }
            Err(e) => {
                warn!("Generation for {:?} failed: {e}", intent);
                Err(GenerationFailure {
                    intent,
                    cause: e.to_string(),
                })
            }
        }
    }
}

/// Prior exchanges go first as user/assistant turns, then the grounded prompt.
pub fn build_profile_request(
    context: &str,
    history: &[ConversationExchange],
    question: &str,
) -> GenerationRequest {
    let params = params_for(Intent::GeneralProfile);
    let mut messages = Vec::with_capacity(history.len() * 2 + 1);
    for exchange in history {
        messages.push(ChatMessage::user(exchange.question.clone()));
        messages.push(ChatMessage::assistant(exchange.answer.clone()));
    }
    messages.push(ChatMessage::user(fill_template(
        PROFILE_PROMPT_TEMPLATE,
        &[
            (
                "grounding_instruction",
                grounding_instruction(PROFILE_PROVENANCE).as_str(),
            ),
            ("context", context),
            ("question", question),
        ],
    )));

    GenerationRequest {
        system: PROFILE_SYSTEM.to_string(),
        messages,
        temperature: params.temperature,
        max_tokens: params.max_tokens,
    }
}

pub fn build_mbti_request(record: &MbtiRecord, question: &str) -> GenerationRequest {
    let params = params_for(Intent::IdentityLookup);
    let prompt = fill_template(
        MBTI_PROMPT_TEMPLATE,
        &[
            (
                "grounding_instruction",
                grounding_instruction(MBTI_PROVENANCE).as_str(),
            ),
            ("record", mbti_summary(record).as_str()),
            ("question", question),
        ],
    );

    GenerationRequest {
        system: MBTI_SYSTEM.to_string(),
        messages: vec![ChatMessage::user(prompt)],
        temperature: params.temperature,
        max_tokens: params.max_tokens,
    }
}

pub fn build_place_request(query: &PlaceQuery) -> GenerationRequest {
    let params = params_for(Intent::PlaceRecommendation);
    let prompt = fill_template(
        PLACE_PROMPT_TEMPLATE,
        &[
            ("count", query.count.to_string().as_str()),
            ("kind", query.kind.prompt_label()),
            ("location", query.location.as_str()),
        ],
    );

    GenerationRequest {
        system: PLACE_SYSTEM.to_string(),
        messages: vec![ChatMessage::user(prompt)],
        temperature: params.temperature,
        max_tokens: params.max_tokens,
    }
}

/// Structured summary of the looked-up row, used both for display and as prompt input.
pub fn mbti_summary(record: &MbtiRecord) -> String {
    format!(
        "유형: {}\n별칭: {}\n특징: {}\n강점: {}\n약점: {}\n어울리는 분야: {}",
        record.code.trim().to_uppercase(),
        record.nickname,
        record.traits,
        record.strengths,
        record.weaknesses,
        record.fit_domains
    )
}
