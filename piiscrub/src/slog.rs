//! Adapters for emitting scan results and free text through `slog`.
//!
//! This module is responsible for:
//! - Ensuring logged text is the output of [`Redactor::redact`], never the
//!   original input.
//! - Exposing categories and category sets as structured values via `slog`'s
//!   nested-value support.
//!
//! It does not configure `slog`.

use std::fmt;

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{
    engine::Redactor,
    pattern::{Category, CategorySet},
};

/// Marker trait for values whose `slog` representation contains no raw PII.
///
/// ```compile_fail
/// use piiscrub::slog::SlogRedacted;
///
/// fn assert_slog_redacted<T: SlogRedacted>() {}
///
/// assert_slog_redacted::<String>();
/// ```
pub trait SlogRedacted: SlogValue {}

impl<T: SlogRedacted + ?Sized> SlogRedacted for &T {}

/// Text that has already been passed through a [`Redactor`].
///
/// Only constructible from this module's extension trait, so holding one is
/// proof the contents were redacted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedactedText(String);

impl RedactedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RedactedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl SlogValue for RedactedText {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, &self.0)
    }
}

impl SlogRedacted for RedactedText {}

/// Extension trait for ergonomic slog logging of redacted text.
///
/// ## Example
/// ```ignore
/// use piiscrub::slog::SlogRedactedExt;
///
/// info!(logger, "received"; "body" => body.slog_redacted());
/// ```
pub trait SlogRedactedExt {
    /// Redacts every supported category with the default placeholder.
    fn slog_redacted(&self) -> RedactedText {
        self.slog_redacted_with(&Redactor::new())
    }

    /// Redacts with a caller-configured [`Redactor`].
    fn slog_redacted_with(&self, redactor: &Redactor) -> RedactedText;
}

impl<T> SlogRedactedExt for T
where
    T: AsRef<str> + ?Sized,
{
    fn slog_redacted_with(&self, redactor: &Redactor) -> RedactedText {
        RedactedText(redactor.redact(self.as_ref()))
    }
}

impl SlogValue for Category {
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, self.as_str())
    }
}

impl SlogRedacted for Category {}

// Emitted as a nested list, e.g. `["SSN","PHONE"]`.
impl SlogValue for CategorySet {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(*self);
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl SlogRedacted for CategorySet {}
