//! # Table Error Type
//!
//! This module defines [`TableError`], the error enum shared by the token
//! interner and the binding dictionary. Both structures allocate owned
//! storage for the strings handed to them, and every such allocation is
//! performed fallibly; the only failure either table can report is memory
//! exhaustion.
//!
//! The conversion from [`std::collections::TryReserveError`] is derived with
//! `#[from]`, enabling ergonomic propagation via the `?` operator in
//! functions that return `Result<T, TableError>`.
//!
//! Absence of an entry is *not* an error: lookups return [`Option`] and the
//! caller decides whether "not found" is fatal.
use thiserror::Error;

/// Errors produced by the interner and the binding dictionary.
///
/// # Example
/// ```rust
/// # use lexitab::TableError;
/// fn grow(buf: &mut Vec<u8>) -> Result<(), TableError> {
///     buf.try_reserve(16)?; // TryReserveError -> TableError via #[from]
///     Ok(())
/// }
/// ```
#[derive(Debug, Error)]
pub enum TableError {
    /// Owned storage for an entry could not be allocated.
    ///
    /// A failed install or insert never links a partially constructed entry;
    /// the table is left exactly as it was before the call.
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] std::collections::TryReserveError),
}
