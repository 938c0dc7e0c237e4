//! Compose: Collapse two sequential operations into one
//!
//! `compose(a, b)` walks the output of `a` and the input of `b` together,
//! one run of the intermediate document at a time. Runs are split
//! wherever one side ends before the other.

use crate::error::{OtError, Result};
use crate::operation::{Operation, Piece, PieceCursor};

/// Combine `a` followed by `b` into one operation with the same effect.
///
/// Requires `a.target_length() == b.base_length()`. The result keeps the
/// id and base revision of `a`, so that
/// `apply(s, compose(a, b)) == apply(apply(s, a), b)`.
///
/// # Example
///
/// ```
/// use otkit_core::{apply, compose, Operation};
///
/// let mut a = Operation::new(0);
/// a.retain(5)?.insert(" world")?;
/// let mut b = Operation::new(1);
/// b.delete("hello")?.insert("goodbye")?.retain(6)?;
///
/// let ab = compose(&a, &b)?;
/// assert_eq!(apply("hello", &ab)?, "goodbye world");
/// # Ok::<(), otkit_core::OtError>(())
/// ```
pub fn compose(a: &Operation, b: &Operation) -> Result<Operation> {
    if a.target_length() != b.base_length() {
        tracing::debug!(
            a_id = a.id(),
            b_id = b.id(),
            a_target = a.target_length(),
            b_base = b.base_length(),
            "compose rejected: operations are not sequential"
        );
        return Err(OtError::length_mismatch(a.target_length(), b.base_length()));
    }

    let mut composed = Operation::derived(a.id(), a.base_revision());
    let mut first = PieceCursor::new(a.components());
    let mut second = PieceCursor::new(b.components());

    loop {
        match (first.peek(), second.peek()) {
            (None, None) => break,

            // Deleted text never reaches `b`
            (Some(del @ Piece::Delete { .. }), _) => {
                composed.push_piece(del)?;
                first.advance();
            }

            // New text from `b` consumes nothing from `a`
            (_, Some(ins @ Piece::Insert { .. })) => {
                composed.push_piece(ins)?;
                second.advance();
            }

            (Some(Piece::Retain(x)), Some(Piece::Retain(y))) => {
                let n = x.min(y);
                first.take(n);
                second.take(n);
                composed.retain(n)?;
            }

            (Some(Piece::Retain(x)), Some(del @ Piece::Delete { .. })) => {
                let n = x.min(del.len());
                first.take(n);
                if let Some(del) = second.take(n) {
                    composed.push_piece(del)?;
                }
            }

            (Some(ins @ Piece::Insert { .. }), Some(Piece::Retain(y))) => {
                let n = ins.len().min(y);
                second.take(n);
                if let Some(ins) = first.take(n) {
                    composed.push_piece(ins)?;
                }
            }

            // `b` removes text that `a` just inserted
            (Some(ins @ Piece::Insert { .. }), Some(del @ Piece::Delete { .. })) => {
                let n = ins.len().min(del.len());
                first.take(n);
                second.take(n);
            }

            (None, Some(_)) | (Some(_), None) => {
                return Err(OtError::length_mismatch(
                    a.target_length(),
                    b.base_length(),
                ));
            }
        }
    }

    tracing::trace!(
        base_length = composed.base_length(),
        target_length = composed.target_length(),
        "composed operations"
    );
    Ok(composed)
}
