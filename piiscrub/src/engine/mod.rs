//! Classification and redaction over the pattern registry.
//!
//! - **Classification** ([`classify`]): which categories a whole token matches.
//! - **Redaction** ([`Redactor`], [`redact`], [`redact_only`]): substring search
//!   over free text, interval merge across categories, and replacement of each
//!   merged span.
//! - **Configuration** ([`RedactorConfig`]): serializable redactor settings.

mod config;
mod redactor;
mod span;

pub use config::RedactorConfig;
pub use redactor::Redactor;
pub use span::Detection;

use crate::{
    error::Result,
    pattern::{self, Category, CategorySet},
};

/// Returns every category whose pattern matches the whole of `token`.
///
/// Leading and trailing whitespace is ignored; internal spaces are significant
/// because several shapes use them as separators. The result is inclusive: an
/// ambiguous token lands in every category it satisfies. An empty token yields
/// an empty set.
///
/// ```rust
/// use piiscrub::{Category, classify};
///
/// assert!(classify("575 42-8931").contains(Category::Ssn));
/// assert!(classify("(555)5555555").contains(Category::Phone));
/// assert!(classify("not pii").is_empty());
/// ```
pub fn classify(token: &str) -> CategorySet {
    let token = token.trim();
    if token.is_empty() {
        return CategorySet::empty();
    }
    pattern::patterns()
        .filter(|pattern| pattern.is_match(token))
        .map(pattern::Pattern::category)
        .collect()
}

/// Every category the engine can classify or redact, in registry order.
pub fn supported_categories() -> &'static [Category] {
    pattern::categories()
}

/// Redacts every supported category in `text` with
/// [`REDACTED_PLACEHOLDER`](crate::REDACTED_PLACEHOLDER).
///
/// ```rust
/// assert_eq!(
///     piiscrub::redact("Hello world (123)456-7890"),
///     "Hello world [REDACTED]"
/// );
/// ```
pub fn redact(text: &str) -> String {
    Redactor::new().redact(text)
}

/// Redacts only the given categories; text matching any other category is
/// left untouched.
///
/// ```rust
/// use piiscrub::{Category, redact_only};
///
/// assert_eq!(
///     redact_only("call 1234567890 or hello@world.com", [Category::Email]),
///     "call 1234567890 or [REDACTED]"
/// );
/// ```
pub fn redact_only(text: &str, categories: impl Into<CategorySet>) -> String {
    Redactor::new().only(categories).redact(text)
}

/// Like [`redact_only`], with categories named by their identifiers.
///
/// # Errors
///
/// Returns [`Error::UnknownCategory`](crate::Error::UnknownCategory) if any
/// name is not a registered category; nothing is redacted in that case.
pub fn redact_named<S: AsRef<str>>(text: &str, names: &[S]) -> Result<String> {
    Ok(Redactor::new().only_named(names)?.redact(text))
}

/// Detections for every supported category in `text`.
pub fn scan(text: &str) -> Vec<Detection> {
    Redactor::new().scan(text)
}
