//! Record and value model.
//!
//! Records are schemaless: a key-ordered mapping from field name to a closed
//! JSON-like [`Value`].

pub use serde_json::Value;

/// One document in a collection.
pub type Record = serde_json::Map<String, Value>;

/// Name of the primary key attribute every collection is keyed on.
pub const ID_FIELD: &str = "id";

/// Returns the record's identifier, if it carries a string `id`.
pub fn record_id(record: &Record) -> Option<&str> {
    record.get(ID_FIELD).and_then(Value::as_str)
}

/// Merges `id` into `attributes`, replacing any identifier the caller supplied.
pub fn with_id(mut attributes: Record, id: impl Into<String>) -> Record {
    attributes.insert(ID_FIELD.to_string(), Value::String(id.into()));
    attributes
}

/// Applies `changes` on top of `record`; fields in `changes` win.
pub fn merge(record: &mut Record, changes: &Record) {
    for (field, value) in changes {
        record.insert(field.clone(), value.clone());
    }
}

/// Returns true when every `(field, value)` in `params` is present and equal in `record`.
pub fn matches(record: &Record, params: &Record) -> bool {
    params
        .iter()
        .all(|(field, value)| {
            record
                .get(field)
                .is_some_and(|stored| values_equal(stored, value))
        })
}

/// Structural equality where numbers compare by value, so `1` equals `1.0`.
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => {
            if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
                a == b
            } else if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
                a == b
            } else {
                a.as_f64() == b.as_f64()
            }
        }
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| values_equal(a, b))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(field, a)| b.get(field).is_some_and(|b| values_equal(a, b)))
        }
        (a, b) => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_with_id_adds_identifier() {
        let merged = with_id(record(json!({"name": "Alice"})), "use_abc");
        assert_eq!(Value::Object(merged), json!({"name": "Alice", "id": "use_abc"}));
    }

    #[test]
    fn test_with_id_overwrites_caller_identifier() {
        let merged = with_id(record(json!({"id": "mine"})), "use_abc");
        assert_eq!(record_id(&merged), Some("use_abc"));
    }

    #[test]
    fn test_record_id_ignores_non_string() {
        assert_eq!(record_id(&record(json!({"id": 7}))), None);
        assert_eq!(record_id(&Record::new()), None);
    }

    #[test]
    fn test_merge_changes_take_precedence() {
        let mut base = record(json!({"name": "Alice", "age": 30, "id": "use_abc"}));
        merge(&mut base, &record(json!({"name": "Bob", "city": "Paris"})));
        assert_eq!(
            Value::Object(base),
            json!({"name": "Bob", "age": 30, "city": "Paris", "id": "use_abc"})
        );
    }

    #[test]
    fn test_matches() {
        let rec = record(json!({"name": "Alice", "tags": ["a", "b"]}));
        assert!(matches(&rec, &Record::new()));
        assert!(matches(&rec, &record(json!({"name": "Alice"}))));
        assert!(matches(&rec, &record(json!({"tags": ["a", "b"]}))));
        assert!(!matches(&rec, &record(json!({"name": "Bob"}))));
        assert!(!matches(&rec, &record(json!({"missing": null}))));
    }

    #[test]
    fn test_matches_compares_numbers_by_value() {
        let rec = record(json!({"n": 1.0, "big": u64::MAX, "neg": -3}));
        assert!(matches(&rec, &record(json!({"n": 1}))));
        assert!(matches(&rec, &record(json!({"big": u64::MAX}))));
        assert!(matches(&rec, &record(json!({"neg": -3.0}))));
        assert!(!matches(&rec, &record(json!({"n": 1.5}))));
        assert!(!matches(&rec, &record(json!({"n": "1"}))));
    }

    #[test]
    fn test_values_equal_recurses_into_containers() {
        assert!(values_equal(&json!([1, {"a": 2.0}]), &json!([1.0, {"a": 2}])));
        assert!(!values_equal(&json!([1, 2]), &json!([1])));
        assert!(!values_equal(&json!({"a": 1}), &json!({"a": 1, "b": 2})));
        assert!(!values_equal(&json!({"a": 1}), &json!({"b": 1})));
    }
}
