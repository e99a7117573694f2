//! Replacement policies: what a detected span turns into.
//!
//! A policy is a pure string transformation applied to each merged span. It
//! does not decide what is sensitive; the pattern registry does that.
//!
//! # Example
//!
//! ```rust
//! use piiscrub::ReplacementPolicy;
//!
//! let policy = ReplacementPolicy::default();
//! assert_eq!(policy.apply_to("555-555-5555"), "[REDACTED]");
//!
//! let policy = ReplacementPolicy::keep_last(4).with_mask_char('#');
//! assert_eq!(policy.apply_to("555-555-5555"), "########5555");
//! ```

use std::borrow::Cow;

/// Placeholder substituted for every redacted span by default.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

/// Default character used by masking policies.
pub const MASK_CHAR: char = '*';

/// How a redacted span is rewritten.
///
/// All variants operate on Unicode scalar values and return an owned `String`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ReplacementPolicy {
    /// Replace the whole span with fixed text.
    Placeholder(Cow<'static, str>),
    /// Replace each character with `mask_char`, keeping the last
    /// `visible_suffix` characters in clear text.
    Mask {
        mask_char: char,
        visible_suffix: usize,
    },
}

impl ReplacementPolicy {
    /// Replaces spans with a custom placeholder.
    #[must_use]
    pub fn placeholder<P>(placeholder: P) -> Self
    where
        P: Into<Cow<'static, str>>,
    {
        Self::Placeholder(placeholder.into())
    }

    /// Masks every character of the span with [`MASK_CHAR`].
    #[must_use]
    pub fn mask() -> Self {
        Self::keep_last(0)
    }

    /// Masks the span except for its last `visible_suffix` characters.
    #[must_use]
    pub fn keep_last(visible_suffix: usize) -> Self {
        Self::Mask {
            mask_char: MASK_CHAR,
            visible_suffix,
        }
    }

    /// Overrides the masking character. Has no effect on placeholders.
    #[must_use]
    pub fn with_mask_char(mut self, mask: char) -> Self {
        if let Self::Mask { mask_char, .. } = &mut self {
            *mask_char = mask;
        }
        self
    }

    /// Applies the policy to one span.
    ///
    /// This method is total. If `visible_suffix` covers the whole span it is
    /// still fully masked, so a detected value never passes through unchanged.
    #[must_use]
    pub fn apply_to(&self, span: &str) -> String {
        match self {
            Self::Placeholder(placeholder) => placeholder.to_string(),
            Self::Mask {
                mask_char,
                visible_suffix,
            } => {
                let total = span.chars().count();
                let masked = if *visible_suffix >= total {
                    total
                } else {
                    total - visible_suffix
                };
                span.chars()
                    .enumerate()
                    .map(|(i, ch)| if i < masked { *mask_char } else { ch })
                    .collect()
            }
        }
    }
}

impl Default for ReplacementPolicy {
    fn default() -> Self {
        Self::Placeholder(Cow::Borrowed(REDACTED_PLACEHOLDER))
    }
}
