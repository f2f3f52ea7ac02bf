//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps and
//! records. These are testable in isolation without DynamoDB access.

use std::collections::{BTreeMap, HashMap};

use aws_sdk_dynamodb::types::AttributeValue;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use dynacrud_core::storage::RepositoryError;
use dynacrud_core::{Record, Value};
use serde_json::Number;

/// A DynamoDB item as the SDK represents it.
pub type Item = HashMap<String, AttributeValue>;

/// Convert a record to a DynamoDB item.
pub fn record_to_item(record: &Record) -> Item {
    record
        .iter()
        .map(|(field, value)| (field.clone(), value_to_attribute(value)))
        .collect()
}

/// Convert a DynamoDB item to a record.
pub fn item_to_record(item: &Item) -> Result<Record, RepositoryError> {
    item.iter()
        .map(|(field, attribute)| {
            Ok::<_, RepositoryError>((field.clone(), attribute_to_value(attribute)?))
        })
        .collect()
}

/// Convert expression value aliases to the map the SDK expects.
pub fn expression_values(values: &BTreeMap<String, Value>) -> Item {
    values
        .iter()
        .map(|(alias, value)| (alias.clone(), value_to_attribute(value)))
        .collect()
}

pub fn value_to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(items) => AttributeValue::L(items.iter().map(value_to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(record_to_item(map)),
    }
}

pub fn attribute_to_value(attribute: &AttributeValue) -> Result<Value, RepositoryError> {
    match attribute {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::N(n) => parse_number(n).map(Value::Number),
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::L(items) => items
            .iter()
            .map(attribute_to_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(map) => item_to_record(map).map(Value::Object),
        // Sets have no JSON counterpart; surface them as lists.
        AttributeValue::Ss(strings) => Ok(Value::Array(
            strings.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(numbers) => numbers
            .iter()
            .map(|n| parse_number(n).map(Value::Number))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::B(blob) => Ok(Value::String(STANDARD.encode(blob.as_ref()))),
        AttributeValue::Bs(blobs) => Ok(Value::Array(
            blobs
                .iter()
                .map(|blob| Value::String(STANDARD.encode(blob.as_ref())))
                .collect(),
        )),
        other => Err(RepositoryError::Serialization(format!(
            "Unsupported attribute value: {:?}",
            other
        ))),
    }
}

/// Parse a DynamoDB number string, preferring integer representations.
fn parse_number(raw: &str) -> Result<Number, RepositoryError> {
    if let Ok(n) = raw.parse::<i64>() {
        return Ok(n.into());
    }
    if let Ok(n) = raw.parse::<u64>() {
        return Ok(n.into());
    }
    raw.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| RepositoryError::Serialization(format!("Invalid number: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::primitives::Blob;
    use serde_json::json;

    fn sample_record() -> Record {
        match json!({
            "id": "use_V1StGXR8_Z5jdHi6B-myT",
            "name": "Alice",
            "age": 30,
            "score": 9.5,
            "active": true,
            "nickname": null,
            "tags": ["admin", "ops"],
            "address": {"city": "Montevideo", "zip": 11000}
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_record_round_trip() {
        let record = sample_record();
        let item = record_to_item(&record);
        let parsed = item_to_record(&item).unwrap();

        assert_eq!(record, parsed);
    }

    #[test]
    fn test_record_item_attribute_types() {
        let item = record_to_item(&sample_record());

        assert_eq!(item.get("name").unwrap().as_s().unwrap(), "Alice");
        assert_eq!(item.get("age").unwrap().as_n().unwrap(), "30");
        assert_eq!(item.get("score").unwrap().as_n().unwrap(), "9.5");
        assert!(*item.get("active").unwrap().as_bool().unwrap());
        assert!(item.get("nickname").unwrap().is_null());
        assert_eq!(item.get("tags").unwrap().as_l().unwrap().len(), 2);
        let address = item.get("address").unwrap().as_m().unwrap();
        assert_eq!(address.get("city").unwrap().as_s().unwrap(), "Montevideo");
    }

    #[test]
    fn test_number_parsing_prefers_integers() {
        assert_eq!(
            attribute_to_value(&AttributeValue::N("42".to_string())).unwrap(),
            json!(42)
        );
        assert_eq!(
            attribute_to_value(&AttributeValue::N("18446744073709551615".to_string())).unwrap(),
            json!(u64::MAX)
        );
        assert_eq!(
            attribute_to_value(&AttributeValue::N("-0.25".to_string())).unwrap(),
            json!(-0.25)
        );
    }

    #[test]
    fn test_invalid_number_is_serialization_error() {
        for raw in ["abc", "inf", "NaN", ""] {
            assert!(matches!(
                attribute_to_value(&AttributeValue::N(raw.to_string())),
                Err(RepositoryError::Serialization(_))
            ));
        }
    }

    #[test]
    fn test_sets_become_lists() {
        let strings = AttributeValue::Ss(vec!["a".to_string(), "b".to_string()]);
        let numbers = AttributeValue::Ns(vec!["1".to_string(), "2.5".to_string()]);

        assert_eq!(attribute_to_value(&strings).unwrap(), json!(["a", "b"]));
        assert_eq!(attribute_to_value(&numbers).unwrap(), json!([1, 2.5]));
    }

    #[test]
    fn test_binary_becomes_base64() {
        let blob = AttributeValue::B(Blob::new(b"hello".to_vec()));
        let blobs = AttributeValue::Bs(vec![Blob::new(b"hi".to_vec())]);

        assert_eq!(attribute_to_value(&blob).unwrap(), json!("aGVsbG8="));
        assert_eq!(attribute_to_value(&blobs).unwrap(), json!(["aGk="]));
    }

    #[test]
    fn test_nested_invalid_number_fails_whole_item() {
        let mut item = Item::new();
        item.insert(
            "nested".to_string(),
            AttributeValue::L(vec![AttributeValue::N("bogus".to_string())]),
        );
        assert!(item_to_record(&item).is_err());
    }

    #[test]
    fn test_expression_values() {
        let mut values = BTreeMap::new();
        values.insert(":v0".to_string(), json!("Alice"));
        values.insert(":v1".to_string(), json!(3));

        let converted = expression_values(&values);

        assert_eq!(converted.get(":v0").unwrap().as_s().unwrap(), "Alice");
        assert_eq!(converted.get(":v1").unwrap().as_n().unwrap(), "3");
    }
}
