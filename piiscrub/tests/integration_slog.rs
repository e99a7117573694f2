//! Integration tests for the slog module.
//!
//! These tests verify that:
//! - `slog_redacted()` emits the redacted text, never the original
//! - categories and category sets serialize through slog's nested values

#![cfg(feature = "slog")]

use std::{cell::RefCell, collections::HashMap, fmt::Arguments};

use piiscrub::{
    Category, CategorySet, Redactor,
    slog::{RedactedText, SlogRedacted, SlogRedactedExt},
};
use serde_json::{Value as JsonValue, json};

// A test serializer that captures serialized key-value pairs
struct CapturingSerializer {
    captured: RefCell<HashMap<String, CapturedValue>>,
}

#[derive(Debug, Clone, PartialEq)]
enum CapturedValue {
    Str(String),
    Serde(JsonValue),
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<CapturedValue> {
        self.captured.borrow().get(key).cloned()
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.to_string()));
        Ok(())
    }

    fn emit_str(&mut self, key: slog::Key, val: &str) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.into()));
        Ok(())
    }

    fn emit_serde(&mut self, key: slog::Key, val: &dyn slog::SerdeValue) -> slog::Result {
        let json = serde_json::to_value(val.as_serde()).unwrap_or(JsonValue::Null);
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Serde(json));
        Ok(())
    }
}

fn serialize_to_capture<V: slog::Value>(value: &V, key: &'static str) -> CapturingSerializer {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let mut serializer = CapturingSerializer::new();
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    value
        .serialize(&record, key, &mut serializer)
        .expect("serialization succeeds");
    serializer
}

fn assert_slog_redacted<T: SlogRedacted>(_: &T) {}

mod text {
    use super::*;

    #[test]
    fn emits_redacted_text() {
        let value = "call 555-555-5555 now".slog_redacted();
        assert_slog_redacted(&value);

        let captured = serialize_to_capture(&value, "body");
        assert_eq!(
            captured.get("body"),
            Some(CapturedValue::Str("call [REDACTED] now".into()))
        );
    }

    #[test]
    fn honours_configured_redactor() {
        let redactor = Redactor::new().only([Category::Phone]);
        let body = String::from("call 555-555-5555, mail hello@world.com");
        let value = body.slog_redacted_with(&redactor);

        let captured = serialize_to_capture(&value, "body");
        assert_eq!(
            captured.get("body"),
            Some(CapturedValue::Str("call [REDACTED], mail hello@world.com".into()))
        );
    }

    #[test]
    fn redacted_text_exposes_contents() {
        let value: RedactedText = "ssn 123-45-6789".slog_redacted();
        assert_eq!(value.as_str(), "ssn [REDACTED]");
        assert_eq!(value.to_string(), "ssn [REDACTED]");
        assert_eq!(value.into_inner(), "ssn [REDACTED]");
    }
}

mod categories {
    use super::*;

    #[test]
    fn category_emits_identifier() {
        let captured = serialize_to_capture(&Category::Vin, "category");
        assert_eq!(captured.get("category"), Some(CapturedValue::Str("VIN".into())));
    }

    #[test]
    fn category_set_emits_nested_list() {
        let set = CategorySet::from([Category::Email, Category::Ssn]);
        assert_slog_redacted(&set);

        let captured = serialize_to_capture(&set, "categories");
        assert_eq!(
            captured.get("categories"),
            Some(CapturedValue::Serde(json!(["SSN", "EMAIL"])))
        );
    }
}
