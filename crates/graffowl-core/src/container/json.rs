//! JSON encoding of diagram property lists.
//!
//! A JSON document with the same key structure as the XML property list is
//! accepted, which is convenient for hand-written and generated diagrams.

use serde_json::Value;

use crate::container::{ContainerError, PlistValue, value::Dict};

/// Decodes a JSON document into a property-list value.
///
/// `null` is not a property-list value. Dictionary entries holding `null`
/// are dropped; `null` anywhere else is malformed.
///
/// # Errors
///
/// Returns [`ContainerError::Json`] when the input is not valid JSON.
pub fn parse_json(bytes: &[u8]) -> Result<PlistValue, ContainerError> {
    let value: Value = serde_json::from_slice(bytes)?;
    convert(value, "document")
}

fn convert(value: Value, path: &str) -> Result<PlistValue, ContainerError> {
    Ok(match value {
        Value::Object(map) => {
            let mut dict = Dict::with_capacity(map.len());
            for (key, value) in map {
                if value.is_null() {
                    continue;
                }
                let entry_path = format!("{path}/{key}");
                let converted = convert(value, &entry_path)?;
                dict.insert(key, converted);
            }
            PlistValue::Dict(dict)
        }
        Value::Array(items) => PlistValue::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(index, item)| convert(item, &format!("{path}[{index}]")))
                .collect::<Result<_, _>>()?,
        ),
        Value::String(s) => PlistValue::String(s),
        Value::Bool(b) => PlistValue::Bool(b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => PlistValue::Integer(i),
            None => PlistValue::Real(
                n.as_f64()
                    .ok_or_else(|| ContainerError::malformed(path, "a finite number"))?,
            ),
        },
        Value::Null => return Err(ContainerError::malformed(path, "a non-null value")),
    })
}
