// Test dependencies - mock reorder sink
//
// Records every payload it receives and can be primed to fail, so commit flows
// can be exercised without a backend.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::BaseReorderSink;
use crate::domains::reserves::data::ReorderPayload;

/// Arguments captured from a reorder call
#[derive(Debug, Clone)]
pub struct ReorderCall {
    pub course_id: String,
    pub payload: ReorderPayload,
}

#[derive(Debug, Clone, Default)]
pub struct MockReorderSink {
    calls: Arc<Mutex<Vec<ReorderCall>>>,
    failures: Arc<Mutex<VecDeque<String>>>,
}

impl MockReorderSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the next call with `message`. Queued failures are used in order.
    pub fn with_failure(self, message: &str) -> Self {
        self.failures.lock().unwrap().push_back(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<ReorderCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_payload(&self) -> Option<ReorderPayload> {
        self.calls.lock().unwrap().last().map(|c| c.payload.clone())
    }
}

#[async_trait]
impl BaseReorderSink for MockReorderSink {
    async fn reorder(&self, course_id: &str, payload: &ReorderPayload) -> Result<()> {
        self.calls.lock().unwrap().push(ReorderCall {
            course_id: course_id.to_string(),
            payload: payload.clone(),
        });

        match self.failures.lock().unwrap().pop_front() {
            Some(message) => Err(anyhow!(message)),
            None => Ok(()),
        }
    }
}
