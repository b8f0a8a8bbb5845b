use serde::{Deserialize, Serialize};

/// One question/answer pair shown in the session's conversation log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationExchange {
    pub question: String,
    pub answer: String,
}

/// Everything a single visit remembers. Only the governor mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub history: Vec<ConversationExchange>,
    pub question_count: u32,
    pub draft: String,
    /// Set once the interactive view has been rendered for this session.
    pub opened: bool,
}
