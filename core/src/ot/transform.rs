//! Transform: Reconcile two concurrent operations
//!
//! Given `a` and `b` built against the same document, `transform` returns
//! `(a', b')` where `a'` applies after `b` and `b'` applies after `a`, and
//! both orders produce the same document:
//!
//! ```text
//! apply(s, compose(a, b')) == apply(s, compose(b, a'))
//! ```
//!
//! # Tie-break
//!
//! When both sides insert at the same position, one insert must land first
//! in both outputs. [`transform`] picks the side whose operation id orders
//! first, so `transform(a, b)` and `transform(b, a)` always agree.
//! [`transform_with_priority`] pins the order explicitly.

use crate::error::{OtError, Result};
use crate::operation::{Operation, Piece, PieceCursor};
use crate::Revision;

/// Which side's insert goes first when both insert at the same position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertPriority {
    /// Inserts from the first argument go first
    Left,
    /// Inserts from the second argument go first
    Right,
}

impl InsertPriority {
    /// Deterministic priority from operation ids (smaller id first, `a` on ties)
    pub fn by_id(a: &Operation, b: &Operation) -> Self {
        if a.id() <= b.id() {
            InsertPriority::Left
        } else {
            InsertPriority::Right
        }
    }
}

/// Transform concurrent `a` and `b`, breaking insert ties by operation id.
///
/// # Example
///
/// ```
/// use otkit_core::{apply, compose, transform, Operation};
///
/// let mut a = Operation::with_id("site-a", 0)?;
/// a.retain(3)?.insert("X")?;
/// let mut b = Operation::with_id("site-b", 0)?;
/// b.delete("a")?.retain(2)?;
///
/// let (a_prime, b_prime) = transform(&a, &b)?;
/// let left = apply("abc", &compose(&a, &b_prime)?)?;
/// let right = apply("abc", &compose(&b, &a_prime)?)?;
/// assert_eq!(left, "bcX");
/// assert_eq!(left, right);
/// # Ok::<(), otkit_core::OtError>(())
/// ```
pub fn transform(a: &Operation, b: &Operation) -> Result<(Operation, Operation)> {
    transform_with_priority(a, b, InsertPriority::by_id(a, b))
}

/// Transform concurrent `a` and `b` with an explicit insert priority.
///
/// Requires `a.base_length() == b.base_length()`. `a'` keeps the id of `a`
/// and is based on the revision after `b`; `b'` keeps the id of `b` and is
/// based on the revision after `a`. Fails with [`OtError::InvalidArgument`]
/// if either base revision is `u64::MAX`.
pub fn transform_with_priority(
    a: &Operation,
    b: &Operation,
    priority: InsertPriority,
) -> Result<(Operation, Operation)> {
    if a.base_length() != b.base_length() {
        tracing::debug!(
            a_id = a.id(),
            b_id = b.id(),
            a_base = a.base_length(),
            b_base = b.base_length(),
            "transform rejected: operations are not concurrent"
        );
        return Err(OtError::length_mismatch(a.base_length(), b.base_length()));
    }

    let mut a_prime = Operation::derived(a.id(), next_revision(b)?);
    let mut b_prime = Operation::derived(b.id(), next_revision(a)?);
    let mut left = PieceCursor::new(a.components());
    let mut right = PieceCursor::new(b.components());

    loop {
        match (left.peek(), right.peek()) {
            (None, None) => break,

            (Some(ins_a @ Piece::Insert { .. }), Some(ins_b @ Piece::Insert { .. })) => {
                match priority {
                    InsertPriority::Left => {
                        a_prime.push_piece(ins_a)?;
                        b_prime.retain(ins_a.len())?;
                        left.advance();
                    }
                    InsertPriority::Right => {
                        b_prime.push_piece(ins_b)?;
                        a_prime.retain(ins_b.len())?;
                        right.advance();
                    }
                }
            }

            // `b'` must skip over text it never saw
            (Some(ins @ Piece::Insert { .. }), _) => {
                a_prime.push_piece(ins)?;
                b_prime.retain(ins.len())?;
                left.advance();
            }

            (_, Some(ins @ Piece::Insert { .. })) => {
                b_prime.push_piece(ins)?;
                a_prime.retain(ins.len())?;
                right.advance();
            }

            (Some(Piece::Retain(x)), Some(Piece::Retain(y))) => {
                let n = x.min(y);
                left.take(n);
                right.take(n);
                a_prime.retain(n)?;
                b_prime.retain(n)?;
            }

            // Both removed the same text
            (Some(del_a @ Piece::Delete { .. }), Some(del_b @ Piece::Delete { .. })) => {
                let n = del_a.len().min(del_b.len());
                left.take(n);
                right.take(n);
            }

            (Some(del @ Piece::Delete { .. }), Some(Piece::Retain(y))) => {
                let n = del.len().min(y);
                right.take(n);
                if let Some(del) = left.take(n) {
                    a_prime.push_piece(del)?;
                }
            }

            (Some(Piece::Retain(x)), Some(del @ Piece::Delete { .. })) => {
                let n = x.min(del.len());
                left.take(n);
                if let Some(del) = right.take(n) {
                    b_prime.push_piece(del)?;
                }
            }

            (None, Some(_)) | (Some(_), None) => {
                return Err(OtError::length_mismatch(a.base_length(), b.base_length()));
            }
        }
    }

    tracing::trace!(
        a_prime_base = a_prime.base_length(),
        b_prime_base = b_prime.base_length(),
        ?priority,
        "transformed concurrent operations"
    );
    Ok((a_prime, b_prime))
}

/// Revision produced by applying `op`
fn next_revision(op: &Operation) -> Result<Revision> {
    op.base_revision().checked_add(1).ok_or_else(|| {
        tracing::debug!(op_id = op.id(), "transform rejected: revision overflow");
        OtError::InvalidArgument(format!(
            "base revision {} of operation {} has no successor",
            op.base_revision(),
            op.id()
        ))
    })
}
