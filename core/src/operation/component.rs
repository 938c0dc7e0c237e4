//! Component: One atomic step of an operation
//!
//! A component either copies characters from the input (`Retain`),
//! introduces new characters (`Insert`), or removes characters (`Delete`).
//! Deletes carry the removed text so apply can check it against the input.
//!
//! All lengths count `char`s, never bytes.

use std::fmt;

/// A single edit step
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Component {
    /// Copy the next `n` characters unchanged
    Retain(usize),

    /// Introduce text into the output
    Insert(String),

    /// Remove exactly this text from the input
    Delete(String),
}

impl Component {
    /// Characters this component consumes from the input
    pub fn base_len(&self) -> usize {
        match self {
            Component::Retain(n) => *n,
            Component::Insert(_) => 0,
            Component::Delete(s) => char_len(s),
        }
    }

    /// Characters this component produces in the output
    pub fn target_len(&self) -> usize {
        match self {
            Component::Retain(n) => *n,
            Component::Insert(s) => char_len(s),
            Component::Delete(_) => 0,
        }
    }

    pub fn is_retain(&self) -> bool {
        matches!(self, Component::Retain(_))
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Retain(n) => write!(f, "retain {}", n),
            Component::Insert(s) => write!(f, "insert '{}'", s),
            Component::Delete(s) => write!(f, "delete '{}'", s),
        }
    }
}

/// Number of characters in `s`
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Split `s` after its first `n` characters.
///
/// `n` past the end yields `(s, "")`.
pub(crate) fn split_chars(s: &str, n: usize) -> (&str, &str) {
    match s.char_indices().nth(n) {
        Some((idx, _)) => s.split_at(idx),
        None => (s, ""),
    }
}

/// A borrowed, possibly partial view of a component.
///
/// Compose and transform walk two component lists at once and often
/// consume only a prefix of the current component. A piece remembers
/// what is left of it together with its character length so that
/// repeated splitting does not recount the whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Piece<'a> {
    Retain(usize),
    Insert { text: &'a str, len: usize },
    Delete { text: &'a str, len: usize },
}

impl<'a> Piece<'a> {
    pub(crate) fn of(component: &'a Component) -> Self {
        match component {
            Component::Retain(n) => Piece::Retain(*n),
            Component::Insert(s) => Piece::Insert {
                text: s,
                len: char_len(s),
            },
            Component::Delete(s) => Piece::Delete {
                text: s,
                len: char_len(s),
            },
        }
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Piece::Retain(n) => *n,
            Piece::Insert { len, .. } | Piece::Delete { len, .. } => *len,
        }
    }

    /// Split into the first `n` characters and the remainder.
    ///
    /// The remainder is `None` when `n` covers the whole piece.
    pub(crate) fn split(self, n: usize) -> (Piece<'a>, Option<Piece<'a>>) {
        let len = self.len();
        if n >= len {
            return (self, None);
        }
        match self {
            Piece::Retain(_) => (Piece::Retain(n), Some(Piece::Retain(len - n))),
            Piece::Insert { text, .. } => {
                let (head, tail) = split_chars(text, n);
                (
                    Piece::Insert { text: head, len: n },
                    Some(Piece::Insert {
                        text: tail,
                        len: len - n,
                    }),
                )
            }
            Piece::Delete { text, .. } => {
                let (head, tail) = split_chars(text, n);
                (
                    Piece::Delete { text: head, len: n },
                    Some(Piece::Delete {
                        text: tail,
                        len: len - n,
                    }),
                )
            }
        }
    }
}

/// Walks a component list one piece at a time.
pub(crate) struct PieceCursor<'a> {
    components: std::slice::Iter<'a, Component>,
    current: Option<Piece<'a>>,
}

impl<'a> PieceCursor<'a> {
    pub(crate) fn new(components: &'a [Component]) -> Self {
        let mut components = components.iter();
        let current = components.next().map(Piece::of);
        Self {
            components,
            current,
        }
    }

    /// The piece currently under the cursor
    pub(crate) fn peek(&self) -> Option<Piece<'a>> {
        self.current
    }

    /// Drop the current piece and move to the next component
    pub(crate) fn advance(&mut self) {
        self.current = self.components.next().map(Piece::of);
    }

    /// Take at most `n` characters of the current piece.
    pub(crate) fn take(&mut self, n: usize) -> Option<Piece<'a>> {
        let piece = self.current?;
        let (head, rest) = piece.split(n);
        match rest {
            Some(rest) => self.current = Some(rest),
            None => self.advance(),
        }
        Some(head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_lengths() {
        assert_eq!(Component::Retain(4).base_len(), 4);
        assert_eq!(Component::Retain(4).target_len(), 4);
        assert_eq!(Component::Insert("abc".into()).base_len(), 0);
        assert_eq!(Component::Insert("abc".into()).target_len(), 3);
        assert_eq!(Component::Delete("ab".into()).base_len(), 2);
        assert_eq!(Component::Delete("ab".into()).target_len(), 0);
    }

    #[test]
    fn test_lengths_count_chars() {
        let c = Component::Insert("héllo✓".into());
        assert_eq!(c.target_len(), 6);
    }

    #[test]
    fn test_split_chars() {
        assert_eq!(split_chars("abcdef", 2), ("ab", "cdef"));
        assert_eq!(split_chars("abc", 0), ("", "abc"));
        assert_eq!(split_chars("abc", 3), ("abc", ""));
        assert_eq!(split_chars("abc", 10), ("abc", ""));
        assert_eq!(split_chars("ü✓x", 2), ("ü✓", "x"));
    }

    #[test]
    fn test_piece_split() {
        let c = Component::Delete("hello".into());
        let (head, rest) = Piece::of(&c).split(2);
        assert_eq!(head, Piece::Delete { text: "he", len: 2 });
        assert_eq!(rest, Some(Piece::Delete { text: "llo", len: 3 }));

        let (head, rest) = Piece::Retain(3).split(5);
        assert_eq!(head, Piece::Retain(3));
        assert_eq!(rest, None);
    }

    #[test]
    fn test_cursor_take() {
        let comps = vec![Component::Retain(3), Component::Insert("xy".into())];
        let mut cursor = PieceCursor::new(&comps);

        assert_eq!(cursor.take(2), Some(Piece::Retain(2)));
        assert_eq!(cursor.peek(), Some(Piece::Retain(1)));
        assert_eq!(cursor.take(4), Some(Piece::Retain(1)));
        assert_eq!(cursor.peek(), Some(Piece::Insert { text: "xy", len: 2 }));
        cursor.advance();
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.take(1), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Component::Retain(2).to_string(), "retain 2");
        assert_eq!(Component::Insert("a b".into()).to_string(), "insert 'a b'");
        assert_eq!(Component::Delete("x".into()).to_string(), "delete 'x'");
    }
}
