// src/domain/note.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A note as returned by the remote service.
///
/// The server owns the schema, so the body is kept as opaque JSON and
/// serialized back exactly as received, whatever its shape. `id`, `title`
/// and `content` are expected on object bodies but not enforced.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Note(Value);

impl Note {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Identifier rendered as text; the server may use strings or numbers
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    pub fn content(&self) -> Option<&str> {
        self.0.get("content").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for Note {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<Map<String, Value>> for Note {
    fn from(fields: Map<String, Value>) -> Self {
        Self(Value::Object(fields))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn given_numeric_id_when_reading_id_then_returns_text() {
        let note: Note = serde_json::from_value(json!({"id": 3, "title": "T"})).unwrap();
        assert_eq!(note.id().as_deref(), Some("3"));
    }

    #[test]
    fn given_missing_fields_when_reading_accessors_then_returns_none() {
        let note = Note::default();
        assert_eq!(note.id(), None);
        assert_eq!(note.title(), None);
        assert_eq!(note.content(), None);
    }

    #[test]
    fn given_extra_fields_when_roundtripping_then_preserves_them() {
        let raw = json!({"id": "1", "title": "T", "content": "C", "pinned": true});
        let note: Note = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(note.get("pinned"), Some(&json!(true)));
        assert_eq!(serde_json::to_value(&note).unwrap(), raw);
    }

    #[test]
    fn given_non_object_body_when_deserializing_then_keeps_it_and_accessors_are_empty() {
        let note: Note = serde_json::from_value(json!("created")).unwrap();
        assert_eq!(note.as_value(), &json!("created"));
        assert_eq!(note.id(), None);
        assert_eq!(note.title(), None);
    }
}
