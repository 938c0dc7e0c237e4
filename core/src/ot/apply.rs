//! Apply: Project an operation onto a string

use crate::error::{OtError, Result};
use crate::operation::{char_len, Component, Operation};

/// Apply `op` to `input` and return the edited text.
///
/// Fails with [`OtError::LengthMismatch`] if `input` does not have
/// `op.base_length()` characters, and with [`OtError::ContentMismatch`] if
/// the text under a delete is not the text the delete recorded. On failure
/// no output is produced.
///
/// # Example
///
/// ```
/// use otkit_core::{apply, Operation};
///
/// let mut op = Operation::new(0);
/// op.retain(6)?.delete("world")?.insert("there")?;
///
/// assert_eq!(apply("hello world", &op)?, "hello there");
/// # Ok::<(), otkit_core::OtError>(())
/// ```
pub fn apply(input: &str, op: &Operation) -> Result<String> {
    let input_len = char_len(input);
    if input_len != op.base_length() {
        tracing::debug!(
            op_id = op.id(),
            expected = op.base_length(),
            actual = input_len,
            "apply rejected: input length mismatch"
        );
        return Err(OtError::length_mismatch(op.base_length(), input_len));
    }

    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars();
    let mut position = 0;

    for component in op.components() {
        match component {
            Component::Retain(n) => {
                output.extend(chars.by_ref().take(*n));
                position += n;
            }
            Component::Insert(text) => output.push_str(text),
            Component::Delete(text) => {
                let found: String = chars.by_ref().take(char_len(text)).collect();
                if found != *text {
                    tracing::debug!(
                        op_id = op.id(),
                        position,
                        "apply rejected: deleted text does not match input"
                    );
                    return Err(OtError::ContentMismatch {
                        position,
                        expected: text.clone(),
                        found,
                    });
                }
                position += char_len(text);
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_insert_delete_retain() {
        let mut op = Operation::new(0);
        op.retain(2)
            .unwrap()
            .insert("lorem")
            .unwrap()
            .delete("cd")
            .unwrap()
            .retain(1)
            .unwrap();

        let out = apply("abcde", &op).unwrap();
        assert_eq!(out, "abloreme");
        assert_eq!(char_len(&out), op.target_length());
    }

    #[test]
    fn test_apply_empty() {
        let op = Operation::new(0);
        assert_eq!(apply("", &op).unwrap(), "");
    }

    #[test]
    fn test_apply_insert_into_empty_document() {
        let mut op = Operation::new(0);
        op.insert("hello").unwrap();
        assert_eq!(apply("", &op).unwrap(), "hello");
    }

    #[test]
    fn test_apply_length_mismatch() {
        let mut op = Operation::new(0);
        op.retain(3).unwrap();

        assert_eq!(
            apply("ab", &op),
            Err(OtError::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert!(apply("abcd", &op).is_err());
    }

    #[test]
    fn test_apply_content_mismatch() {
        let mut op = Operation::new(0);
        op.retain(1).unwrap().delete("xy").unwrap();

        assert_eq!(
            apply("abc", &op),
            Err(OtError::ContentMismatch {
                position: 1,
                expected: "xy".to_string(),
                found: "bc".to_string(),
            })
        );
    }

    #[test]
    fn test_apply_multibyte() {
        let mut op = Operation::new(0);
        op.retain(1)
            .unwrap()
            .delete("ü")
            .unwrap()
            .insert("✓✓")
            .unwrap()
            .retain(1)
            .unwrap();
        assert_eq!(apply("aüb", &op).unwrap(), "a✓✓b");
    }
}
