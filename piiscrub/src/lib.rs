//! Classification and redaction of PII in short tokens and free text.
//!
//! This crate separates:
//! - **The pattern registry**: the canonical textual shape of each supported
//!   category (SSN, phone number, date, email address, VIN).
//! - **The engine**: whole-token classification against every pattern, and
//!   substring redaction that merges overlapping matches into one
//!   `[REDACTED]` placeholder per occurrence.
//!
//! What this crate does:
//! - classify a token into the (possibly several) categories it matches
//! - redact free text, optionally restricted to a subset of categories
//! - provide logging adapters behind feature flags (`tracing`, `slog`)
//!
//! What it does not do:
//! - perform I/O or configure logging
//! - validate checksums or calendars; shapes are purely textual
//!
//! # Example
//!
//! ```rust
//! use piiscrub::{Category, classify, redact, redact_only};
//!
//! assert!(classify("123-45-6789").contains(Category::Ssn));
//!
//! let text = "Hello world 1234567890 and my email is hello@world.com";
//! assert_eq!(
//!     redact(text),
//!     "Hello world [REDACTED] and my email is [REDACTED]"
//! );
//! assert_eq!(
//!     redact_only(text, [Category::Email]),
//!     "Hello world 1234567890 and my email is [REDACTED]"
//! );
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::option_if_let_else,
    clippy::cargo_common_metadata
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

mod engine;
mod error;
pub mod pattern;
pub mod policy;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;

// Re-exports from engine module
pub use engine::{
    Detection, Redactor, RedactorConfig, classify, redact, redact_named, redact_only, scan,
    supported_categories,
};
pub use error::{Error, Result};
// Re-exports from pattern module
pub use pattern::{Category, CategorySet, Pattern};
// Re-exports from policy module
pub use policy::{MASK_CHAR, REDACTED_PLACEHOLDER, ReplacementPolicy};
#[cfg(feature = "slog")]
pub use self::slog::{RedactedText, SlogRedactedExt};
#[cfg(feature = "tracing")]
pub use self::tracing::TracingRedactedExt;
