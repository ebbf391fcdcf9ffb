use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

use crate::error::ExamlensError;

use super::{ChatBackend, CompletionRequest};

/// Test backend that replays queued raw replies in order.
#[derive(Clone, Default)]
pub struct MockBackend {
    replies: Arc<Mutex<VecDeque<String>>>,
}

impl MockBackend {
    pub fn push_reply(&self, raw: impl Into<String>) {
        self.replies.lock().push_back(raw.into());
    }
}

impl ChatBackend for MockBackend {
    fn complete(&self, _: &CompletionRequest) -> Result<String, ExamlensError> {
        self.replies
            .lock()
            .pop_front()
            .ok_or_else(|| ExamlensError::Response("empty response: no queued reply".to_string()))
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
