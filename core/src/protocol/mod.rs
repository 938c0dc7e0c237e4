//! Wire protocol for operations
//!
//! Operations cross the engine boundary only as [`OperationRecord`]s. The
//! only way to turn untrusted data into an [`Operation`](crate::Operation)
//! is [`from_external`] (or the JSON helpers and serde impls built on it),
//! which validates the whole record before returning anything.

pub mod serialize;

pub use serialize::{
    from_external, from_json, from_json_value, to_external, to_json, ComponentRecord,
    OperationRecord,
};
