use futures::future::BoxFuture;

use crate::error::Result;

/// Classifier port — the external language-model capability consumed by
/// workflow nodes.
///
/// One narrow method: given a rendered prompt, return the model's text
/// (a label or a full response). The exchange is a single request-response;
/// any failure is fatal to the invocation. Implementations must not retry
/// or substitute fallback labels.
pub trait Classifier: Send + Sync + 'static {
    fn classify(&self, prompt: String) -> BoxFuture<'_, Result<String>>;
}
