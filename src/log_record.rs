// SPDX-License-Identifier: MIT OR Apache-2.0

//! Captured log records.
//!
//! While the logger is suppressed (see [`crate::Logger::disable`]), every call to
//! [`crate::Logger::log`] and its level helpers is recorded as a [`LogRecord`] in the
//! capture frame on top of the stack instead of being emitted. [`crate::Logger::enable`]
//! hands the frame back to the caller, typically a test asserting on what would have
//! been logged.
//!
//! # Example
//!
//! ```rust
//! use hooklog::{Level, LogRecord, Rank};
//!
//! let record = LogRecord::new("disk almost full", Level::Warning);
//! assert_eq!(record.message(), "disk almost full");
//! assert_eq!(record.level(), Rank(300));
//! assert_eq!(record.to_string(), "WARNING: disk almost full");
//! ```

use crate::level::Rank;
use std::fmt::Display;

/**
A log call that was captured rather than emitted.

The level is kept as a raw [`Rank`] because capture happens before any validation:
a call made with a rank that names no level is still recorded.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogRecord {
    pub message: String,
    pub level: Rank,
}

impl LogRecord {
    pub fn new(message: impl Into<String>, level: impl Into<Rank>) -> Self {
        Self {
            message: message.into(),
            level: level.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn level(&self) -> Rank {
        self.level
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.level, self.message)
    }
}
/*
Boilerplate notes for LogRecord:

IMPLEMENTED:
- Debug: Derived - essential for diagnostics and assertion output
- Clone: Derived - tests routinely keep a copy of a captured frame
- PartialEq/Eq: Derived - captured frames are compared wholesale in tests
- Hash: Derived - consistent with Eq
- Display: Implemented - renders the same "<NAME>: <message>" form the logger emits

NOT IMPLEMENTED:
- Copy: String is heap-allocated
- Default: a record without a level makes no sense
- Ord/PartialOrd: capture order is the only meaningful order, and Vec keeps it
- From/Into: (message, level) tuples are not clearer than LogRecord::new

AUTOMATIC:
- Send/Sync: String and Rank are both
*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Level;

    #[test]
    fn display_uses_level_name() {
        let record = LogRecord::new("x", Level::Error);
        assert_eq!(record.to_string(), "ERROR: x");
    }

    #[test]
    fn display_falls_back_to_raw_rank() {
        let record = LogRecord::new("odd", Rank(123));
        assert_eq!(record.to_string(), "123: odd");
        assert_eq!(record.level().level(), None);
    }
}
