// SPDX-License-Identifier: MIT OR Apache-2.0

//! # In-Memory Printer
//!
//! This module provides an in-memory printer for testing and debugging purposes.
//! The `InMemoryPrinter` records every write the logger performs rather than sending it
//! to a terminal or a response body, making it ideal for:
//!
//! - Unit testing code that logs through a [`crate::Logger`]
//! - Asserting on the `display` decision the logger made for each write
//! - Programmatically examining output in hosts without a usable stdout
//!
//! ## Architecture
//!
//! The printer stores [`PrintedEntry`] values in a `Mutex<Vec<_>>`. Share it through an
//! `Arc`: hand one clone to the logger and keep one to inspect.

use crate::level::Level;
use crate::printer::Printer;
use std::io;
use std::sync::{Mutex, PoisonError};

/// One call to [`Printer::write`], as seen by an [`InMemoryPrinter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintedEntry {
    pub data: String,
    pub display: bool,
    pub level: Level,
}

/// A printer that stores every write in memory.
///
/// # Example
///
/// ```rust
/// use hooklog::{InMemoryPrinter, Level, Printer};
/// use std::sync::Arc;
///
/// let printer = Arc::new(InMemoryPrinter::new());
/// printer.write("ERROR: boom", true, Level::Error).unwrap();
///
/// let writes = printer.drain();
/// assert_eq!(writes.len(), 1);
/// assert_eq!(writes[0].data, "ERROR: boom");
/// assert!(writes[0].display);
///
/// // Buffer is now empty
/// assert!(printer.is_empty());
/// ```
#[derive(Debug)]
pub struct InMemoryPrinter {
    entries: Mutex<Vec<PrintedEntry>>,
}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// - Debug: Derived for diagnostic purposes and required by Printer trait
// - Default: Implemented with obvious zero-value (empty buffer)
// - Clone: NOT implemented - share through Arc instead, so the logger and the test
//   observe the same buffer
// - PartialEq/Eq: NOT implemented - mutex state comparison is problematic
// - Send/Sync: Automatically implemented due to Mutex usage (required for Printer trait)

impl Default for InMemoryPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPrinter {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Returns all recorded writes, clearing the internal buffer.
    pub fn drain(&self) -> Vec<PrintedEntry> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *entries)
    }

    /// Returns a copy of all recorded writes, leaving the buffer intact.
    pub fn writes(&self) -> Vec<PrintedEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drains all recorded writes into a single newline-joined string.
    pub fn drain_text(&self) -> String {
        self.drain()
            .into_iter()
            .map(|entry| entry.data)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Printer for InMemoryPrinter {
    fn write(&self, data: &str, display: bool, level: Level) -> io::Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.push(PrintedEntry {
            data: data.to_string(),
            display,
            level,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_clears() {
        let printer = InMemoryPrinter::new();
        printer.write("one", false, Level::Info).unwrap();
        printer.write("two", true, Level::Error).unwrap();
        assert_eq!(printer.len(), 2);
        assert_eq!(printer.writes().len(), 2);
        assert_eq!(printer.drain_text(), "one\ntwo");
        assert!(printer.is_empty());
        assert_eq!(printer.drain_text(), "");
    }
}
