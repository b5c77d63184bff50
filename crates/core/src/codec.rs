//! Spec codec for workflow job declarations
//!
//! A job's spec travels inside the workflow template as an untyped
//! [`serde_json::Value`]. Every lifecycle operation re-validates the shape it
//! receives by decoding that slot into the typed declaration for the job's
//! kind, and writes the normalized typed form back. Two decode paths exist:
//! the JSON round-trip used between operations, and a YAML-mediated decode
//! used where the spec arrives in its raw authored form.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::DecodeError;

/// Decode an untyped spec slot into the typed declaration `T`.
///
/// This is the round-trip form used by operations that re-validate an
/// already-normalized spec; decode failures carry the serde path into the
/// offending field.
pub fn decode_spec<T: DeserializeOwned>(spec: &Value) -> Result<T, DecodeError> {
    serde_path_to_error::deserialize(spec.clone())
        .map_err(|err| DecodeError::new(err.path().to_string(), err.inner().to_string()))
}

/// Decode an untyped spec slot through its YAML rendering.
///
/// Used for raw authored specs: the slot is rendered to YAML and parsed back
/// into `T`, so authored scalar forms (block strings, quoted numbers) pass
/// through the same parser that reads workflow files.
pub fn decode_yaml_spec<T: DeserializeOwned>(spec: &Value) -> Result<T, DecodeError> {
    let text = serde_yaml::to_string(spec)
        .map_err(|err| DecodeError::new(".", err.to_string()))?;
    let de = serde_yaml::Deserializer::from_str(&text);
    serde_path_to_error::deserialize(de)
        .map_err(|err| DecodeError::new(err.path().to_string(), err.inner().to_string()))
}

/// Encode a typed declaration back into the untyped spec slot.
pub fn encode_spec<T: Serialize>(value: &T) -> Result<Value, DecodeError> {
    serde_json::to_value(value).map_err(|err| DecodeError::new(".", err.to_string()))
}
