//! Operation: One edit to a plain-text document
//!
//! An operation is an ordered list of [`Component`]s plus the id and base
//! revision that tie it to the document state it was built against.
//!
//! # Invariants
//!
//! - No component has an empty payload (`Retain(0)`, `Insert("")`, `Delete("")`)
//! - No two adjacent components are of the same kind
//! - `base_length` is the sum of retain and delete lengths
//! - `target_length` is the sum of retain and insert lengths
//!
//! The builder methods are the only mutators and each of them updates the
//! component list and both lengths in one step. A failed builder call has
//! no effect.
//!
//! # Example
//!
//! ```
//! use otkit_core::Operation;
//!
//! let mut op = Operation::new(0);
//! op.retain(2)?.insert("lorem")?.delete("ipsum")?.retain(5)?;
//!
//! assert_eq!(op.base_length(), 12);
//! assert_eq!(op.target_length(), 12);
//! assert_eq!(op.to_string(), "retain 2, insert 'lorem', delete 'ipsum', retain 5");
//! # Ok::<(), otkit_core::OtError>(())
//! ```

mod component;

pub use component::Component;
pub(crate) use component::{char_len, Piece, PieceCursor};

use crate::error::{OtError, Result};
use crate::{OperationId, Revision};
use std::fmt;

/// An edit to a document, built against a specific revision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// Correlates the operation with its origin
    id: OperationId,

    /// Revision of the document this operation was built against
    base_revision: Revision,

    /// Edit steps, in document order
    components: Vec<Component>,

    /// Required input length
    base_length: usize,

    /// Guaranteed output length
    target_length: usize,
}

impl Operation {
    /// Create an empty operation with a fresh random id
    pub fn new(base_revision: Revision) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            base_revision,
            components: Vec::new(),
            base_length: 0,
            target_length: 0,
        }
    }

    /// Create an empty operation with the given id
    ///
    /// Fails with [`OtError::InvalidArgument`] if `id` is empty.
    pub fn with_id(id: impl Into<OperationId>, base_revision: Revision) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(OtError::InvalidArgument(
                "operation id must not be empty".to_string(),
            ));
        }
        Ok(Self {
            id,
            base_revision,
            components: Vec::new(),
            base_length: 0,
            target_length: 0,
        })
    }

    /// Empty operation for a result derived from operations that already
    /// passed id validation
    pub(crate) fn derived(id: &str, base_revision: Revision) -> Self {
        Self {
            id: id.to_string(),
            base_revision,
            components: Vec::new(),
            base_length: 0,
            target_length: 0,
        }
    }

    /// Skip over `n` characters, leaving them unchanged
    ///
    /// Merges into a trailing retain. Fails if `n` is zero.
    pub fn retain(&mut self, n: usize) -> Result<&mut Self> {
        if n == 0 {
            return Err(OtError::InvalidArgument(
                "retain count must be positive".to_string(),
            ));
        }
        let base_length = grow(self.base_length, n)?;
        let target_length = grow(self.target_length, n)?;
        match self.components.last_mut() {
            Some(Component::Retain(m)) => *m = grow(*m, n)?,
            _ => self.components.push(Component::Retain(n)),
        }
        self.base_length = base_length;
        self.target_length = target_length;
        Ok(self)
    }

    /// Insert `text` at the current position
    ///
    /// Merges into a trailing insert. Fails if `text` is empty.
    pub fn insert(&mut self, text: &str) -> Result<&mut Self> {
        if text.is_empty() {
            return Err(OtError::InvalidArgument(
                "inserted text must not be empty".to_string(),
            ));
        }
        self.target_length = grow(self.target_length, char_len(text))?;
        match self.components.last_mut() {
            Some(Component::Insert(existing)) => existing.push_str(text),
            _ => self.components.push(Component::Insert(text.to_string())),
        }
        Ok(self)
    }

    /// Delete `text` at the current position
    ///
    /// Merges into a trailing delete. Fails if `text` is empty.
    pub fn delete(&mut self, text: &str) -> Result<&mut Self> {
        if text.is_empty() {
            return Err(OtError::InvalidArgument(
                "deleted text must not be empty".to_string(),
            ));
        }
        self.base_length = grow(self.base_length, char_len(text))?;
        match self.components.last_mut() {
            Some(Component::Delete(existing)) => existing.push_str(text),
            _ => self.components.push(Component::Delete(text.to_string())),
        }
        Ok(self)
    }

    /// Append a piece produced while walking another operation
    pub(crate) fn push_piece(&mut self, piece: Piece<'_>) -> Result<&mut Self> {
        match piece {
            Piece::Retain(n) => self.retain(n),
            Piece::Insert { text, .. } => self.insert(text),
            Piece::Delete { text, .. } => self.delete(text),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn base_revision(&self) -> Revision {
        self.base_revision
    }

    /// Length a document must have for this operation to apply
    pub fn base_length(&self) -> usize {
        self.base_length
    }

    /// Length of the document after this operation applies
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Number of components
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// True if applying this operation leaves any document unchanged
    pub fn is_noop(&self) -> bool {
        self.components.iter().all(Component::is_retain)
    }
}

/// Add `n` to a length, failing instead of wrapping
fn grow(length: usize, n: usize) -> Result<usize> {
    length
        .checked_add(n)
        .ok_or_else(|| OtError::InvalidArgument(format!("length overflow adding {}", n)))
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", component)?;
        }
        Ok(())
    }
}
