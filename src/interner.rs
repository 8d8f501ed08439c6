//! # interner
//!
//! An append-only token interning table.
//!
//! The table assigns each distinct token text a stable integer key, starting
//! at 1 and counting up in order of first installation. Installing a text
//! that is already present is idempotent: the original entry is returned and
//! no key is consumed. Entries are never removed or mutated once installed.
//!
//! Lookups are a linear scan over the installed entries. That is deliberate:
//! the table targets the small vocabularies a lexer produces for a single
//! source file, and the scan keeps the structure trivial to reason about.
//!
//! ## Example
//! ```rust
//! # use lexitab::Interner;
//! let mut interner = Interner::new();
//! let key = interner.install("foo").unwrap().key(); // first install, key 1
//! assert_eq!(key, 1);
//! assert_eq!(interner.install("bar").unwrap().key(), 2);
//! assert_eq!(interner.install("foo").unwrap().key(), key); // same key, not reinstalled
//! assert_eq!(interner.len(), 2);
//! ```

use crate::dup::dup_str;
use crate::TableError;
use std::io::{self, Write};

/// One interned token: its text and the key it was assigned.
///
/// Entries are created only by [`Interner::install`] and never change
/// afterwards, so both fields are exposed read-only.
#[derive(Debug)]
pub struct TokenEntry {
    token: String,
    key: u32,
}

impl TokenEntry {
    /// The interned token text.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The key assigned on first installation (1-based, never reused).
    pub fn key(&self) -> u32 {
        self.key
    }
}

/// An append-only table of distinct token texts with stable integer keys.
///
/// A lexer installs every recognized token text and carries the returned key
/// downstream in place of the text itself. Enumeration order (in [`iter`] and
/// [`dump`]) is newest-first: the most recently installed token comes first.
///
/// [`iter`]: Interner::iter
/// [`dump`]: Interner::dump
#[derive(Debug)]
pub struct Interner {
    entries: Vec<TokenEntry>,
    next_key: u32,
}

impl Interner {
    /// Creates a new, empty interner. The first installed token gets key 1.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_key: 1,
        }
    }

    /// Returns the number of distinct tokens installed so far.
    ///
    /// # Example
    /// ```rust
    /// # use lexitab::Interner;
    /// let mut interner = Interner::new();
    /// assert_eq!(interner.len(), 0);
    /// interner.install("foo").unwrap();
    /// interner.install("baz").unwrap();
    /// interner.install("foo").unwrap();
    /// assert_eq!(interner.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no token has been installed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the entry whose token equals `text` exactly (case-sensitive).
    ///
    /// Returns `None` if the text has never been installed. Side-effect free;
    /// scans newest-first in time proportional to the number of entries.
    pub fn lookup(&self, text: &str) -> Option<&TokenEntry> {
        self.entries.iter().rev().find(|entry| entry.token == text)
    }

    /// Installs `text` if it is not already present and returns its entry.
    ///
    /// Repeated installs of the same text are idempotent: the original entry
    /// is returned unchanged and the key counter does not advance. A new
    /// entry receives the next key in sequence and becomes the head of the
    /// enumeration order. The empty string is a valid token like any other.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::OutOfMemory`] if the entry or the owned copy of
    /// `text` cannot be allocated. Nothing is linked into the table on
    /// failure, but callers should treat the failure as fatal for the current
    /// compilation unit since subsequent keys would be inconsistent.
    ///
    /// # Examples
    /// ```
    /// # use lexitab::Interner;
    /// let mut interner = Interner::new();
    /// let entry = interner.install("a").unwrap();
    /// assert_eq!((entry.key(), entry.token()), (1, "a"));
    /// assert_eq!(interner.install("a").unwrap().key(), 1); // existing entry
    /// ```
    pub fn install(&mut self, text: &str) -> Result<&TokenEntry, TableError> {
        // don't add duplicates
        if let Some(pos) = self.entries.iter().rposition(|entry| entry.token == text) {
            return Ok(&self.entries[pos]);
        }

        self.entries.try_reserve(1)?;
        let token = dup_str(text)?;
        let key = self.next_key;
        self.next_key += 1;
        log::trace!("INSTALL: key: {}, token: {:?}", key, token);
        self.entries.push(TokenEntry { token, key });
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Enumerates entries newest-first (reverse order of first installation).
    pub fn iter(&self) -> impl Iterator<Item = &TokenEntry> {
        self.entries.iter().rev()
    }

    /// Writes the diagnostic listing to `out`.
    ///
    /// A blank line and a ` === label === ` header, then one line per entry,
    /// newest-first: the key right-justified to at least three columns, a
    /// colon, and the token text. The format is for humans, not for parsing.
    ///
    /// # Example
    /// ```rust
    /// # use lexitab::Interner;
    /// let mut interner = Interner::new();
    /// for text in ["a", "b", "a", "c"] {
    ///     interner.install(text).unwrap();
    /// }
    /// let mut out = Vec::new();
    /// interner.write_dump(&mut out, "tokens").unwrap();
    /// assert_eq!(
    ///     String::from_utf8(out).unwrap(),
    ///     "\n === tokens === \n  3 : c\n  2 : b\n  1 : a\n",
    /// );
    /// ```
    pub fn write_dump(&self, out: &mut impl Write, label: &str) -> io::Result<()> {
        writeln!(out, "\n === {} === ", label)?;
        for entry in self.iter() {
            writeln!(out, "{:>3} : {}", entry.key, entry.token)?;
        }
        Ok(())
    }

    /// Writes the diagnostic listing to standard output. See [`write_dump`].
    ///
    /// [`write_dump`]: Interner::write_dump
    pub fn dump(&self, label: &str) -> io::Result<()> {
        self.write_dump(&mut io::stdout().lock(), label)
    }
}
