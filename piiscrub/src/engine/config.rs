//! Declarative redactor settings for host applications that load them from
//! their own configuration files.

use super::redactor::Redactor;
use crate::{pattern::CategorySet, policy::ReplacementPolicy};

/// Serializable settings for a [`Redactor`].
///
/// With the `json` feature this deserializes from e.g.
/// `{"categories": ["SSN", "EMAIL"], "policy": {"placeholder": "<pii>"}}`.
/// Missing fields fall back to the defaults: every category, full
/// [`REDACTED_PLACEHOLDER`](crate::REDACTED_PLACEHOLDER) replacement.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "json",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct RedactorConfig {
    /// Categories eligible for redaction; `None` means all of them.
    pub categories: Option<CategorySet>,
    pub policy: ReplacementPolicy,
}

impl From<RedactorConfig> for Redactor {
    fn from(config: RedactorConfig) -> Self {
        let redactor = Redactor::new().with_policy(config.policy);
        match config.categories {
            Some(categories) => redactor.only(categories),
            None => redactor,
        }
    }
}
