//! # lexitab
//!
//! Token interning and identifier binding tables for a small language
//! frontend.
//!
//! This crate provides the two bookkeeping structures a lexer and a
//! semantic phase share:
//!
//! - [`Interner`] — an append-only table of distinct token texts. Each text
//!   receives a stable integer key (1, 2, 3, …) on first installation;
//!   installing the same text again returns the original entry. The table
//!   can be dumped in a fixed columnar format for diagnostics.
//! - [`Bindings`] — a fixed 101-bucket chained hash table mapping identifier
//!   strings to integer values, with insert-or-update semantics and
//!   `Option`-returning lookup.
//!
//! A lexer installs every recognized token text into the [`Interner`] and
//! carries the returned key downstream; a semantic or evaluation phase
//! records assignments in a [`Bindings`] table and resolves references
//! through it. The two structures are independent; both duplicate the
//! strings handed to them into owned storage, and both surface allocation
//! exhaustion as [`TableError::OutOfMemory`] without ever linking a
//! half-constructed entry.
//!
//! Both tables are designed for single-threaded, synchronous use within one
//! compilation pass.
//!
//! ## Example
//!
//! ```rust
//! use lexitab::{Bindings, Interner};
//!
//! // The lexer side: intern every recognized token text.
//! let mut interner = Interner::new();
//! for text in ["answer", "=", "42", "answer"] {
//!     interner.install(text).unwrap();
//! }
//! assert_eq!(interner.len(), 3); // "answer" interned once
//! assert_eq!(interner.lookup("answer").unwrap().key(), 1);
//!
//! // The semantic side: bind and resolve identifier values.
//! let mut bindings = Bindings::new();
//! bindings.insert("answer", 42).unwrap();
//! assert_eq!(bindings.get("answer"), Some(42));
//! ```
//!
//! ## Modules
//!
//! - [`interner`] — the token interning table
//! - [`bindings`] — the identifier binding dictionary
//! - [`token`] — token-kind codes and payloads for the lexer
//! - [`error`] — the shared error type
//!
//! ## Re-exports
//!
//! The main entry points are re-exported at the crate root:
//!
//! ```text
//! Interner, TokenEntry, Bindings, Binding, bucket_index,
//! Token, TokenKind, TokenValue, TableError
//! ```
pub mod bindings;
mod dup;
pub mod error;
pub mod interner;
pub mod token;

pub use bindings::{bucket_index, Binding, Bindings, BUCKET_COUNT};
pub use error::TableError;
pub use interner::{Interner, TokenEntry};
pub use token::{Token, TokenKind, TokenValue};
