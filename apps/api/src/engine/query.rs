//! Query pipeline — one full pass per visitor action.
//!
//! Flow (submit): governor admit → consume → classify → grounding / MBTI lookup →
//!                generation → governor record.
//! Flow (recommend): build query → generation → parse → notice when empty.

use serde::Serialize;
use tracing::info;

use crate::engine::generator::{mbti_summary, GenerationClient};
use crate::engine::governor::{self, Admission, CAP_WARNING};
use crate::engine::grounding::build_grounding_context;
use crate::engine::intent::{classify_question, Intent, QuestionIntent};
use crate::engine::recommendation::{parse_recommendations, PlaceQuery, NO_RESULTS_NOTICE};
use crate::llm_client::TextGenerator;
use crate::models::place::PlaceRecommendation;
use crate::models::profile::MbtiRecord;
use crate::models::session::SessionState;
use crate::records::Records;

/// Profile field holding the subject's own type code.
pub const MBTI_PROFILE_KEY: &str = "mbti";
pub const NO_MBTI_NOTICE: &str = "등록된 MBTI 정보가 없습니다.";

/// Renderable outcome of a submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reply {
    Answer {
        intent: Intent,
        text: String,
        /// Structured row shown verbatim beside the prose for MBTI answers.
        #[serde(skip_serializing_if = "Option::is_none")]
        mbti: Option<MbtiRecord>,
        /// True when `text` is a generation-failure message.
        failed: bool,
    },
    CapReached {
        notice: String,
    },
    Ignored,
}

/// Handles one submitted question against the locked session state.
///
/// The question is spent on `state` before generation is awaited, so dropping this future
/// mid-generation still leaves the budget reduced. The answer is appended once it arrives.
pub async fn ask(
    state: &mut SessionState,
    question: &str,
    records: &Records,
    generator: &dyn TextGenerator,
) -> Reply {
    let question = match governor::admit(state, question) {
        Admission::Accepted(question) => question,
        Admission::Empty => return Reply::Ignored,
        Admission::Capped => {
            info!("Question rejected: session cap reached");
            return Reply::CapReached {
                notice: CAP_WARNING.to_string(),
            };
        }
    };
    *state = governor::consume(std::mem::take(state));

    let intent = classify_question(&question);
    let client = GenerationClient::new(generator);

    let reply = match intent {
        QuestionIntent::IdentityLookup => answer_mbti(&client, records, &question).await,
        QuestionIntent::GeneralProfile => {
            let context = build_grounding_context(&records.profile, &records.careers);
            let (text, failed) = match client
                .answer_profile(&context, &state.history, &question)
                .await
            {
                Ok(text) => (text, false),
                Err(failure) => (failure.user_message(), true),
            };
            Reply::Answer {
                intent: Intent::GeneralProfile,
                text,
                mbti: None,
                failed,
            }
        }
    };

    if let Reply::Answer { text, .. } = &reply {
        *state = governor::record(std::mem::take(state), &question, text);
    }
    info!(
        "Question answered: intent={:?} count={}/{}",
        intent,
        state.question_count,
        governor::QUESTION_CAP
    );
    reply
}

/// Looks up the subject's own type; the generator only elaborates a row that was found.
async fn answer_mbti(client: &GenerationClient<'_>, records: &Records, question: &str) -> Reply {
    let record = records
        .profile
        .lookup(MBTI_PROFILE_KEY)
        .and_then(|code| records.mbti.lookup(code));

    let Some(record) = record else {
        return Reply::Answer {
            intent: Intent::IdentityLookup,
            text: NO_MBTI_NOTICE.to_string(),
            mbti: None,
            failed: false,
        };
    };

    let summary = mbti_summary(record);
    let (elaboration, failed) = match client.elaborate_mbti(record, question).await {
        Ok(text) => (text, false),
        Err(failure) => (failure.user_message(), true),
    };

    Reply::Answer {
        intent: Intent::IdentityLookup,
        text: format!("{summary}\n\n{elaboration}"),
        mbti: Some(record.clone()),
        failed,
    }
}

/// Renderable outcome of a recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationOutcome {
    pub places: Vec<PlaceRecommendation>,
    /// Set instead of an empty list: the no-results notice or the failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

pub async fn recommend(query: &PlaceQuery, generator: &dyn TextGenerator) -> RecommendationOutcome {
    let client = GenerationClient::new(generator);
    match client.recommend_places(query).await {
        Ok(raw) => {
            let places = parse_recommendations(&raw);
            info!(
                "Recommendations for {:?} near '{}': {} places",
                query.kind,
                query.location,
                places.len()
            );
            let notice = places.is_empty().then(|| NO_RESULTS_NOTICE.to_string());
            RecommendationOutcome { places, notice }
        }
        Err(failure) if failure.is_empty_response() => RecommendationOutcome {
            places: Vec::new(),
            notice: Some(NO_RESULTS_NOTICE.to_string()),
        },
        Err(failure) => RecommendationOutcome {
            places: Vec::new(),
            notice: Some(failure.user_message()),
        },
    }
}
