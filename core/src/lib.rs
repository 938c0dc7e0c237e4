//! OTKit Core - Operational transformation for collaborative text
//!
//! This is the Rust core of OTKit, compiled to both native and WASM.
//! It implements:
//! - Operations: retain/insert/delete component lists with length metadata
//! - Apply: project an operation onto a string
//! - Compose: collapse two sequential operations into one
//! - Transform: reconcile two concurrent operations so replicas converge
//! - Validating wire records for operations received from other sites
//!
//! Network transport, revision sequencing, and persistence live outside
//! this crate.
//!
//! # Examples
//!
//! ```rust
//! use otkit_core::{apply, compose, transform, Operation};
//!
//! let doc = "hello";
//!
//! let mut a = Operation::with_id("alice-1", 0)?;
//! a.retain(5)?.insert(" world")?;
//!
//! let mut b = Operation::with_id("bob-1", 0)?;
//! b.delete("h")?.insert("j")?.retain(4)?;
//!
//! let (a_prime, b_prime) = transform(&a, &b)?;
//! let at_alice = apply(&apply(doc, &a)?, &b_prime)?;
//! let at_bob = apply(&apply(doc, &b)?, &a_prime)?;
//!
//! assert_eq!(at_alice, "jello world");
//! assert_eq!(at_alice, at_bob);
//! assert_eq!(apply(doc, &compose(&a, &b_prime)?)?, at_alice);
//! # Ok::<(), otkit_core::OtError>(())
//! ```

pub mod error;
pub mod operation;
pub mod ot;
pub mod protocol;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use error::{OtError, Result};
pub use operation::{Component, Operation};
pub use ot::{apply, compose, transform, transform_with_priority, InsertPriority};
pub use protocol::{from_external, to_external, OperationRecord};

#[cfg(all(feature = "wee_alloc", target_arch = "wasm32"))]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Operation identifier type
pub type OperationId = String;

/// Document revision number
pub type Revision = u64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_import() {
        // Smoke test that the public surface is reachable from the root
        let op = Operation::new(0);
        assert_eq!(apply("", &op).unwrap(), "");
        assert_eq!(to_external(&op).ops.len(), 0);
    }
}
