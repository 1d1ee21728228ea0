//! Scripted classifier for tests and examples.
//!
//! Returns queued replies in order; a queued failure surfaces as a
//! `ClassifierRequest` error. The call counter lets tests assert how far a
//! workflow got before aborting.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use futures::future::BoxFuture;

use deskflow_core::error::{DeskflowError, Result};
use deskflow_core::traits::Classifier;

enum ScriptedReply {
    Text(String),
    Failure(String),
}

/// Mock classifier: replies with a fixed script, one entry per call.
pub struct MockClassifier {
    replies: Mutex<VecDeque<ScriptedReply>>,
    calls: AtomicUsize,
}

impl MockClassifier {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Queue a reply (builder).
    pub fn reply(self, text: impl Into<String>) -> Self {
        self.replies
            .lock()
            .expect("mock replies lock")
            .push_back(ScriptedReply::Text(text.into()));
        self
    }

    /// Queue a failure (builder).
    pub fn failure(self, message: impl Into<String>) -> Self {
        self.replies
            .lock()
            .expect("mock replies lock")
            .push_back(ScriptedReply::Failure(message.into()));
        self
    }

    /// Number of classify calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for MockClassifier {
    fn classify(&self, _prompt: String) -> BoxFuture<'_, Result<String>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let next = self
                .replies
                .lock()
                .expect("mock replies lock")
                .pop_front();
            match next {
                Some(ScriptedReply::Text(text)) => Ok(text),
                Some(ScriptedReply::Failure(message)) => {
                    Err(DeskflowError::ClassifierRequest(message))
                }
                None => Err(DeskflowError::ClassifierRequest(
                    "mock classifier script exhausted".into(),
                )),
            }
        })
    }
}
