//! Pattern registry: the canonical textual shape of every PII category.
//!
//! This module provides:
//!
//! - **Categories** (`category`): the closed [`Category`] enum and the
//!   [`CategorySet`] bit set used for inclusive classification results.
//!
//! - **Registry** (`registry`): one compiled [`Pattern`] per category, built
//!   once on first use and read-only afterwards.
//!
//! # Example
//!
//! ```rust
//! use piiscrub::{Category, pattern};
//!
//! let ssn = pattern::pattern(Category::Ssn);
//! assert!(ssn.is_match("575 42-8931"));
//! assert_eq!(pattern::categories().len(), 5);
//! ```

pub mod category;
pub mod registry;

pub use category::{Category, CategorySet, Iter};
pub use registry::{Pattern, categories, pattern, pattern_named, patterns};
