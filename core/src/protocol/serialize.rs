// Serialization layer - Convert operations to/from their wire records
//!
//! The record shape is the JSON object exchanged with other sites and the
//! sequencing server:
//!
//! ```json
//! {
//!   "id": "1234",
//!   "baseRevision": 3,
//!   "baseLength": 4,
//!   "targetLength": 5,
//!   "ops": [{ "retain": 2 }, { "delete": "ab" }, { "insert": "cde" }]
//! }
//! ```
//!
//! Decoding is a single validating step. A record is replayed through the
//! operation builder and its declared lengths must match what the replay
//! computes; nothing is repaired.

use crate::error::{OtError, Result};
use crate::operation::{Component, Operation};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire form of an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OperationRecord {
    pub id: String,
    pub base_revision: u64,
    pub base_length: u64,
    pub target_length: u64,
    pub ops: Vec<ComponentRecord>,
}

/// Wire form of a component: a single-key object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentRecord {
    Retain(u64),
    Insert(String),
    Delete(String),
}

/// Convert an operation to its wire record
pub fn to_external(op: &Operation) -> OperationRecord {
    OperationRecord {
        id: op.id().to_string(),
        base_revision: op.base_revision(),
        base_length: op.base_length() as u64,
        target_length: op.target_length() as u64,
        ops: op
            .components()
            .iter()
            .map(|component| match component {
                Component::Retain(n) => ComponentRecord::Retain(*n as u64),
                Component::Insert(text) => ComponentRecord::Insert(text.clone()),
                Component::Delete(text) => ComponentRecord::Delete(text.clone()),
            })
            .collect(),
    }
}

/// Validate a wire record and build the operation it describes
pub fn from_external(record: OperationRecord) -> Result<Operation> {
    let mut op = Operation::with_id(record.id, record.base_revision)
        .map_err(|e| invalid(format!("bad id: {}", e)))?;

    for (index, entry) in record.ops.iter().enumerate() {
        let appended = match entry {
            ComponentRecord::Retain(n) => {
                let n = usize::try_from(*n)
                    .map_err(|_| invalid(format!("op {}: retain count {} too large", index, n)))?;
                op.retain(n)
            }
            ComponentRecord::Insert(text) => op.insert(text),
            ComponentRecord::Delete(text) => op.delete(text),
        };
        appended.map_err(|e| invalid(format!("op {}: {}", index, e)))?;
    }

    if op.base_length() as u64 != record.base_length {
        return Err(invalid(format!(
            "declared baseLength {} but ops consume {}",
            record.base_length,
            op.base_length()
        )));
    }
    if op.target_length() as u64 != record.target_length {
        return Err(invalid(format!(
            "declared targetLength {} but ops produce {}",
            record.target_length,
            op.target_length()
        )));
    }

    Ok(op)
}

/// Decode and validate an operation from JSON text
pub fn from_json(json: &str) -> Result<Operation> {
    let record: OperationRecord = serde_json::from_str(json).map_err(|e| {
        tracing::debug!(error = %e, "rejected malformed operation record");
        OtError::from(e)
    })?;
    from_external(record)
}

/// Decode and validate an operation from a parsed JSON value
pub fn from_json_value(value: serde_json::Value) -> Result<Operation> {
    let record: OperationRecord = serde_json::from_value(value)?;
    from_external(record)
}

/// Encode an operation as JSON text
pub fn to_json(op: &Operation) -> Result<String> {
    Ok(serde_json::to_string(&to_external(op))?)
}

fn invalid(message: String) -> OtError {
    tracing::debug!(reason = %message, "rejected operation record");
    OtError::Validation(message)
}

impl From<&Operation> for OperationRecord {
    fn from(op: &Operation) -> Self {
        to_external(op)
    }
}

impl TryFrom<OperationRecord> for Operation {
    type Error = OtError;

    fn try_from(record: OperationRecord) -> Result<Self> {
        from_external(record)
    }
}

impl Serialize for Operation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        to_external(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Operation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let record = OperationRecord::deserialize(deserializer)?;
        from_external(record).map_err(serde::de::Error::custom)
    }
}
