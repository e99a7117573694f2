//! Adapters for emitting free text through `tracing` with PII removed.
//!
//! The library never installs a subscriber. It only offers a way to turn
//! arbitrary text into a redacted field value at the call site:
//!
//! ```ignore
//! use piiscrub::tracing::TracingRedactedExt;
//!
//! tracing::info!(message = %request_body.tracing_redacted(), "received");
//! ```

use tracing::field::{DisplayValue, display};

use crate::engine::Redactor;

/// Extension trait for logging text as a redacted `tracing` display value.
///
/// The original text is never captured by the returned value; redaction runs
/// eagerly when the wrapper is built.
pub trait TracingRedactedExt {
    /// Redacts every supported category with the default placeholder.
    fn tracing_redacted(&self) -> DisplayValue<String> {
        self.tracing_redacted_with(&Redactor::new())
    }

    /// Redacts with a caller-configured [`Redactor`].
    fn tracing_redacted_with(&self, redactor: &Redactor) -> DisplayValue<String>;
}

impl<T> TracingRedactedExt for T
where
    T: AsRef<str> + ?Sized,
{
    fn tracing_redacted_with(&self, redactor: &Redactor) -> DisplayValue<String> {
        display(redactor.redact(self.as_ref()))
    }
}
