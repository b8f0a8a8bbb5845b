//! Session Interaction Governor — the per-session question budget.
//!
//! Every operation takes the `SessionState` by value and returns the next one; there is no
//! ambient store here. The phase is derived from the state, never stored beside it:
//!
//! ```text
//! Idle --open--> AwaitingInput --consume (count < cap)--> AwaitingInput
//!                AwaitingInput --consume (count == cap)--> Capped --reset--> AwaitingInput
//! ```
//!
//! An accepted question is consumed before generation starts and its answer is recorded
//! afterwards, so an interrupted generation still spends the question.

use serde::{Deserialize, Serialize};

use crate::models::session::{ConversationExchange, SessionState};

/// Generation-backed questions allowed per session.
pub const QUESTION_CAP: u32 = 3;

pub const CAP_WARNING: &str =
    "질문은 세션당 3회까지 가능합니다. 새로 시작하려면 대화를 초기화해 주세요.";

/// Quick-pick questions offered as buttons. Picking one fills the draft only.
pub const FAQ_QUESTIONS: &[&str] = &[
    "어떤 일을 하시나요?",
    "주요 경력을 알려주세요.",
    "MBTI가 뭐예요?",
    "어디에 살고 계신가요?",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    AwaitingInput,
    Capped,
}

/// Outcome of the pre-generation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// Question (trimmed) may go to generation.
    Accepted(String),
    /// Blank submission: nothing happens.
    Empty,
    /// Budget exhausted: show [`CAP_WARNING`], no generation.
    Capped,
}

pub fn phase(state: &SessionState) -> Phase {
    if state.question_count >= QUESTION_CAP {
        Phase::Capped
    } else if state.opened {
        Phase::AwaitingInput
    } else {
        Phase::Idle
    }
}

pub fn remaining(state: &SessionState) -> u32 {
    QUESTION_CAP.saturating_sub(state.question_count)
}

pub fn faq_question(index: usize) -> Option<&'static str> {
    FAQ_QUESTIONS.get(index).copied()
}

/// First render of the interactive view. Idempotent.
pub fn open(mut state: SessionState) -> SessionState {
    state.opened = true;
    state
}

pub fn update_draft(mut state: SessionState, text: &str) -> SessionState {
    state.draft = text.to_string();
    state
}

/// Fills the draft with a quick-pick question. Does not count as a submission.
pub fn quick_pick(state: SessionState, question: &str) -> SessionState {
    update_draft(open(state), question)
}

/// Decides whether a submission may reach generation. Never mutates.
pub fn admit(state: &SessionState, question: &str) -> Admission {
    let question = question.trim();
    if question.is_empty() {
        Admission::Empty
    } else if phase(state) == Phase::Capped {
        Admission::Capped
    } else {
        Admission::Accepted(question.to_string())
    }
}

/// Spends one question from the budget and clears the draft. Call right after `Accepted`,
/// before any generation is awaited.
pub fn consume(mut state: SessionState) -> SessionState {
    state.opened = true;
    state.question_count = state.question_count.saturating_add(1);
    state.draft.clear();
    state
}

/// Appends the finished exchange to history. Does not touch the budget.
pub fn record(mut state: SessionState, question: &str, answer: &str) -> SessionState {
    state.history.push(ConversationExchange {
        question: question.to_string(),
        answer: answer.to_string(),
    });
    state
}

/// Clears history, count and draft in one step; the session stays open.
pub fn reset(_state: SessionState) -> SessionState {
    SessionState {
        opened: true,
        ..SessionState::default()
    }
}
