//! Integration tests for the slog module.
//!
//! These tests verify that:
//! - `into_revealed_json()` produces JSON taken after revealing the face
//! - The `slog::Value` implementation works with slog's serialization API
//! - Nested structures are revealed before they are logged

#![cfg(feature = "slog")]

use std::{cell::RefCell, collections::HashMap, fmt::Arguments};

use faces::{
    slog::{IntoRevealedJson, SERIALIZATION_FAILED},
    Face, Faces,
};
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;

// A test serializer that captures serialized key-value pairs
struct CapturingSerializer {
    captured: RefCell<HashMap<String, CapturedValue>>,
}

#[derive(Debug, Clone, PartialEq)]
enum CapturedValue {
    Str(String),
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    Unit,
    None,
    // For nested serde values, we capture the JSON representation
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

    fn emit_bool(&mut self, key: slog::Key, val: bool) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Bool(val));
        Ok(())
    }

    fn emit_i64(&mut self, key: slog::Key, val: i64) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::I64(val));
        Ok(())
    }

    fn emit_u64(&mut self, key: slog::Key, val: u64) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::U64(val));
        Ok(())
    }

    fn emit_f64(&mut self, key: slog::Key, val: f64) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::F64(val));
        Ok(())
    }

    fn emit_unit(&mut self, key: slog::Key) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Unit);
        Ok(())
    }

    fn emit_none(&mut self, key: slog::Key) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::None);
        Ok(())
    }

    fn emit_serde(&mut self, key: slog::Key, val: &dyn slog::SerdeValue) -> slog::Result {
        // Serialize the value to JSON to capture it
        let json = serde_json::to_value(val.as_serde()).unwrap_or(JsonValue::Null);
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Serde(json));
        Ok(())
    }
}

/// Helper function to serialize a slog::Value into any Serializer.
fn serialize_to_capture<V: slog::Value, S: slog::Serializer>(
    value: &V,
    key: &'static str,
    serializer: &mut S,
) {
    // The record is created and used in a single expression to avoid lifetime issues
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    // We need to ensure format_args! result lives long enough
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    value.serialize(&record, key, serializer).unwrap();
}

// ============================================================================
// Basic functionality tests
// ============================================================================

#[derive(Clone, Faces, Serialize)]
struct User {
    pub username: String,
    #[faces("private")]
    pub email: String,
}

fn user() -> User {
    User {
        username: "alice".into(),
        email: "alice@example.com".into(),
    }
}

#[test]
fn test_into_revealed_json_simple_struct() {
    let revealed = user().into_revealed_json(["public"]);

    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&revealed, "user", &mut serializer);

    if let Some(CapturedValue::Serde(json)) = serializer.get("user") {
        assert_eq!(json["username"], "alice");
        assert_eq!(json["email"], "");
    } else {
        panic!("Expected Serde value for 'user' key");
    }
}

#[test]
fn test_matching_face_logs_field() {
    let revealed = user().into_revealed_json(["private"]);
    assert_eq!(revealed.as_json()["email"], "alice@example.com");
}

#[test]
fn test_no_tags_logs_value_unchanged() {
    let revealed = user().into_revealed_json(std::iter::empty::<&str>());
    assert_eq!(revealed.as_json()["email"], "alice@example.com");
}

#[test]
fn test_to_revealed_json_leaves_original_untouched() {
    let original = user();
    let revealed = original.to_revealed_json(["public"]);

    assert_eq!(revealed.as_json()["email"], "");
    assert_eq!(original.email, "alice@example.com");
}

#[test]
fn test_face_variants_match_tag_variants() {
    let face = Face::new(["public"]);
    let borrowed = user().to_revealed_json_face(&face);
    let owned = user().into_revealed_json_face(&face);
    let from_tags = user().into_revealed_json(["public"]);

    assert_eq!(borrowed.as_json(), from_tags.as_json());
    assert_eq!(owned.as_json(), from_tags.as_json());
    assert_eq!(owned.as_json()["email"], "");
}

#[test]
fn test_nested_structures_are_revealed_before_logging() {
    #[derive(Clone, Faces, Serialize)]
    struct Team {
        pub name: String,
        pub members: Vec<User>,
        #[faces("internal")]
        pub budget: u64,
    }

    let team = Team {
        name: "core".into(),
        members: vec![user(), user()],
        budget: 10_000,
    };
    let revealed = team.into_revealed_json(["public"]);

    let mut serializer = CapturingSerializer::new();
    serialize_to_capture(&revealed, "team", &mut serializer);

    let Some(CapturedValue::Serde(json)) = serializer.get("team") else {
        panic!("Expected Serde value for 'team' key");
    };
    assert_eq!(json["name"], "core");
    assert_eq!(json["budget"], 0);
    for member in json["members"].as_array().unwrap() {
        assert_eq!(member["username"], "alice");
        assert_eq!(member["email"], "");
    }
}

#[test]
fn test_map_values_are_revealed_before_logging() {
    let mut users = HashMap::new();
    users.insert("alice".to_string(), user());

    let revealed = users.into_revealed_json(["public"]);
    assert_eq!(revealed.as_json()["alice"]["email"], "");
}

#[test]
fn test_serialization_failure_logs_placeholder() {
    #[derive(Clone, Faces)]
    struct Broken {
        #[faces("private")]
        pub value: String,
    }

    impl Serialize for Broken {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("not serializable"))
        }
    }

    let revealed = Broken {
        value: "secret".into(),
    }
    .into_revealed_json(["public"]);

    assert_eq!(
        revealed.as_json(),
        &JsonValue::String(SERIALIZATION_FAILED.to_string())
    );
}
