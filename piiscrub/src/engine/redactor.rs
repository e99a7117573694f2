//! The configurable redaction engine.

use super::span::{Detection, merge};
use crate::{
    error::Result,
    pattern::{self, CategorySet},
    policy::ReplacementPolicy,
};

/// Scans free text for PII and rewrites every detected span.
///
/// A `Redactor` holds the categories eligible for redaction and the policy
/// applied to each detected span. It is immutable once built and can be
/// shared freely across threads.
///
/// ```rust
/// use piiscrub::{Category, Redactor, ReplacementPolicy};
///
/// let redactor = Redactor::new()
///     .only([Category::Phone])
///     .with_policy(ReplacementPolicy::keep_last(4));
///
/// assert_eq!(
///     redactor.redact("call 555-555-5555 or mail me@example.com"),
///     "call ********5555 or mail me@example.com"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redactor {
    categories: CategorySet,
    policy: ReplacementPolicy,
}

impl Redactor {
    /// Redacts every supported category with [`REDACTED_PLACEHOLDER`](crate::REDACTED_PLACEHOLDER).
    #[must_use]
    pub fn new() -> Self {
        Self {
            categories: CategorySet::all(),
            policy: ReplacementPolicy::default(),
        }
    }

    /// Restricts redaction to `categories`.
    ///
    /// Text matching any other category is left untouched. An empty set
    /// disables redaction entirely.
    #[must_use]
    pub fn only(mut self, categories: impl Into<CategorySet>) -> Self {
        self.categories = categories.into();
        self
    }

    /// Restricts redaction to categories named by text.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnknownCategory`](crate::Error::UnknownCategory) on
    /// the first name that is not registered.
    pub fn only_named<S: AsRef<str>>(self, names: &[S]) -> Result<Self> {
        Ok(self.only(CategorySet::parse(names)?))
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ReplacementPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Shorthand for `with_policy(ReplacementPolicy::placeholder(..))`.
    #[must_use]
    pub fn with_placeholder<P>(self, placeholder: P) -> Self
    where
        P: Into<std::borrow::Cow<'static, str>>,
    {
        self.with_policy(ReplacementPolicy::placeholder(placeholder))
    }

    /// Categories this redactor scans for.
    pub fn categories(&self) -> CategorySet {
        self.categories
    }

    pub fn policy(&self) -> &ReplacementPolicy {
        &self.policy
    }

    /// Finds every PII occurrence in `text`.
    ///
    /// Matches from different categories that overlap or touch are merged, so
    /// each returned detection is one occurrence. Detections are disjoint and
    /// ordered by offset.
    pub fn scan(&self, text: &str) -> Vec<Detection> {
        if text.is_empty() || self.categories.is_empty() {
            return Vec::new();
        }

        let matches = self
            .categories
            .iter()
            .flat_map(|category| {
                pattern::pattern(category)
                    .find_iter(text)
                    .map(move |range| (range, category))
            })
            .collect();
        merge(matches)
    }

    /// Returns a copy of `text` with every detection rewritten by the policy.
    ///
    /// Text outside detections, including whitespace, is copied verbatim.
    pub fn redact(&self, text: &str) -> String {
        let detections = self.scan(text);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            detections = detections.len(),
            categories = %self.categories,
            "redacted text"
        );

        if detections.is_empty() {
            return text.to_string();
        }

        let mut redacted = String::with_capacity(text.len());
        let mut cursor = 0;
        for detection in &detections {
            redacted.push_str(&text[cursor..detection.start]);
            redacted.push_str(&self.policy.apply_to(detection.text(text)));
            cursor = detection.end;
        }
        redacted.push_str(&text[cursor..]);
        redacted
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new()
    }
}
