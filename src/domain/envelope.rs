//! Response envelopes
//!
//! List endpoints answer either with a bare array or with an object that
//! wraps the array under a named field. The shape is resolved once, right
//! after the call, so views only ever see a plain sequence.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// Top-level array.
    List(Vec<Value>),
    /// Object carrying the array under `field`.
    Wrapped { field: String, items: Vec<Value> },
}

impl Envelope {
    /// Resolve `payload` into an envelope, looking for `field` when the
    /// payload is an object. Anything else yields an empty `Wrapped`.
    pub fn resolve(payload: &Value, field: &str) -> Self {
        match payload {
            Value::Array(items) => Envelope::List(items.clone()),
            Value::Object(map) => {
                let items = match map.get(field) {
                    Some(Value::Array(items)) => items.clone(),
                    _ => Vec::new(),
                };
                Envelope::Wrapped {
                    field: field.to_string(),
                    items,
                }
            }
            _ => Envelope::Wrapped {
                field: field.to_string(),
                items: Vec::new(),
            },
        }
    }

    pub fn items(&self) -> &[Value] {
        match self {
            Envelope::List(items) => items,
            Envelope::Wrapped { items, .. } => items,
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn given_bare_array_when_resolving_then_list() {
        let env = Envelope::resolve(&json!([{"a": 1}, {"a": 2}]), "events");
        assert!(matches!(env, Envelope::List(_)));
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn given_wrapped_object_when_resolving_then_items_from_field() {
        let env = Envelope::resolve(&json!({"deployments": [{"uid": "d1"}], "pagination": {}}), "deployments");
        assert_eq!(env.items(), &[json!({"uid": "d1"})]);
        assert!(matches!(env, Envelope::Wrapped { ref field, .. } if field == "deployments"));
    }

    #[test]
    fn given_object_without_field_when_resolving_then_empty() {
        let env = Envelope::resolve(&json!({"other": []}), "projects");
        assert!(env.is_empty());
    }

    #[test]
    fn given_null_payload_when_resolving_then_empty() {
        assert!(Envelope::resolve(&Value::Null, "events").is_empty());
    }
}
