use super::types::WorkflowDocument;
use crate::error::{LoadError, ParseError, SchemaError};
use serde_json::Value;

/// Top-level fields every workflow document must carry. Checked before the
/// typed deserialization so a missing field is reported by name instead of
/// as an opaque serde message.
const REQUIRED_FIELDS: [&str; 5] = ["Id", "Version", "ReleaseVersion", "DataType", "Steps"];

impl WorkflowDocument {
    /// Loads a workflow document from raw bytes.
    ///
    /// Fails with [`ParseError`] if the bytes are not well-formed JSON and
    /// with [`SchemaError`] if a required top-level field is absent or
    /// `Steps` is not a sequence. No graph work happens here.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| ParseError::Json(e.to_string()))?;
        Self::from_value(value)
    }

    /// Loads a workflow document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Self::from_bytes(json.as_bytes())
    }

    fn from_value(value: Value) -> Result<Self, LoadError> {
        validate_shape(&value)?;
        let document = serde_json::from_value(value)
            .map_err(|e| SchemaError::Malformed(e.to_string()))?;
        Ok(document)
    }
}

/// Checks the structural requirements of the DSL format: a JSON object
/// carrying all of [`REQUIRED_FIELDS`], with `Steps` as a sequence.
fn validate_shape(value: &Value) -> Result<(), SchemaError> {
    let object = value
        .as_object()
        .ok_or_else(|| SchemaError::Malformed("top-level value must be an object".to_string()))?;

    for field in REQUIRED_FIELDS {
        if !object.contains_key(field) && !object.contains_key(&snake_case(field)) {
            return Err(SchemaError::MissingField(field));
        }
    }

    let steps = object.get("Steps").or_else(|| object.get("steps"));
    match steps {
        Some(Value::Array(_)) => Ok(()),
        _ => Err(SchemaError::StepsNotASequence),
    }
}

/// The snake_case alias of a PascalCase DSL field name, matching the serde
/// `alias` attributes on the typed model.
fn snake_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 2);
    for (i, c) in field.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
