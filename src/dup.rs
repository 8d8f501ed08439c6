//! Fallible string duplication shared by both tables.

use crate::TableError;

/// Makes an independently owned copy of `text`.
///
/// The caller's buffer can be freed or reused afterwards without affecting
/// stored keys or tokens. The copy is reserved fallibly, so memory
/// exhaustion surfaces as [`TableError::OutOfMemory`] instead of aborting;
/// call sites propagate the failure rather than storing an empty value.
pub(crate) fn dup_str(text: &str) -> Result<String, TableError> {
    let mut owned = String::new();
    owned.try_reserve_exact(text.len())?;
    owned.push_str(text);
    Ok(owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_is_equal_and_independent() {
        let original = String::from("atom");
        let copy = dup_str(&original).unwrap();
        drop(original);
        assert_eq!(copy, "atom");
    }

    #[test]
    fn empty_string_duplicates_to_empty() {
        assert_eq!(dup_str("").unwrap(), "");
    }
}
