//! Test doubles shared by the engine and handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm_client::{GenerationRequest, LlmError, TextGenerator};

/// Scripted `TextGenerator` that records every request it receives.
pub struct StubGenerator {
    reply: Result<String, String>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl StubGenerator {
    pub fn replying(text: &str) -> Self {
        Self::with_reply(Ok(text.to_string()))
    }

    pub fn failing(cause: &str) -> Self {
        Self::with_reply(Err(cause.to_string()))
    }

    fn with_reply(reply: Result<String, String>) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone().map_err(|message| LlmError::Api {
            status: 503,
            message,
        })
    }
}

/// `TextGenerator` whose calls never complete, for interrupting a request mid-generation.
#[derive(Default)]
pub struct PendingGenerator {
    calls: AtomicUsize,
}

impl PendingGenerator {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for PendingGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::future::pending().await
    }
}
