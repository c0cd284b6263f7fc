// SPDX-License-Identifier: MIT OR Apache-2.0

//! Severity levels for the hooklog logger.
//!
//! Every level carries a numeric rank and a symbolic name. Ranks are totally ordered,
//! higher meaning more severe. [`Level::Off`] is a sentinel: a logger set to `Off`
//! never emits anything, and no message is ever logged "at" `Off`.
//!
//! | Name    | Rank |
//! |---------|------|
//! | OFF     | 0    |
//! | INFO    | 200  |
//! | NOTICE  | 250  |
//! | WARNING | 300  |
//! | ERROR   | 400  |
//!
//! Calling code does not always hand us a well-typed [`Level`]. Hosts configure the
//! logger from strings, numbers, or an empty value meaning "off", and call sites may
//! pass raw ranks. [`Rank`] and [`LevelArg`] model those inputs so that validation
//! happens inside the logger rather than at every call site.

use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Nothing is emitted
    Off,
    /// Routine information, never shown to end users
    Info,
    /// Noteworthy but normal, never shown to end users
    Notice,
    /// Suspicious condition
    Warning,
    /// Runtime error
    Error,
}

impl Level {
    /// Every level, `Off` included, in ascending rank order.
    pub const ALL: [Level; 5] = [
        Level::Off,
        Level::Info,
        Level::Notice,
        Level::Warning,
        Level::Error,
    ];

    pub const fn rank(self) -> u16 {
        match self {
            Level::Off => 0,
            Level::Info => 200,
            Level::Notice => 250,
            Level::Warning => 300,
            Level::Error => 400,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Level::Off => "OFF",
            Level::Info => "INFO",
            Level::Notice => "NOTICE",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }

    /// Looks up the level with exactly this rank.
    pub fn from_rank(rank: u16) -> Option<Level> {
        Level::ALL.into_iter().find(|level| level.rank() == rank)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors produced when converting untyped input into a [`Level`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error("unknown level name {0:?}")]
    UnknownName(String),
    #[error("unknown level rank {0}")]
    UnknownRank(i64),
}

impl FromStr for Level {
    type Err = LevelError;

    /// Case-insensitive lookup by name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Level::ALL
            .into_iter()
            .find(|level| level.name() == upper)
            .ok_or_else(|| LevelError::UnknownName(s.to_string()))
    }
}

impl TryFrom<i64> for Level {
    type Error = LevelError;

    fn try_from(value: i64) -> Result<Self, LevelError> {
        u16::try_from(value)
            .ok()
            .and_then(Level::from_rank)
            .ok_or(LevelError::UnknownRank(value))
    }
}

impl TryFrom<Rank> for Level {
    type Error = LevelError;

    fn try_from(value: Rank) -> Result<Self, LevelError> {
        Level::from_rank(value.0).ok_or(LevelError::UnknownRank(i64::from(value.0)))
    }
}

/**
A raw severity rank, as passed to [`crate::Logger::log`].

A rank need not name a defined [`Level`]; the logger rejects unrecognized ranks at
emission time, but still records them while capturing.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(pub u16);

impl Rank {
    /// The level this rank names, if any.
    pub fn level(self) -> Option<Level> {
        Level::from_rank(self.0)
    }
}

impl From<Level> for Rank {
    fn from(level: Level) -> Self {
        Rank(level.rank())
    }
}

impl From<u16> for Rank {
    fn from(rank: u16) -> Self {
        Rank(rank)
    }
}

impl PartialEq<Level> for Rank {
    fn eq(&self, other: &Level) -> bool {
        self.0 == other.rank()
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.level() {
            Some(level) => write!(f, "{level}"),
            None => write!(f, "{}", self.0),
        }
    }
}

/**
Anything [`crate::Logger::set_level`] accepts.

Hosts historically configured the level either by name or by number, and used an
empty value to mean "off". The conversions below collapse every falsy input
(`0`, `""`, `"0"`, `false`, `None`) into [`LevelArg::Unset`].
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelArg {
    Level(Level),
    Rank(i64),
    Name(String),
    Unset,
}

impl LevelArg {
    /// Resolves the argument into a level. `Unset` resolves to [`Level::Off`].
    pub fn resolve(&self) -> Result<Level, LevelError> {
        match self {
            LevelArg::Unset => Ok(Level::Off),
            LevelArg::Level(level) => Ok(*level),
            LevelArg::Rank(rank) => Level::try_from(*rank),
            LevelArg::Name(name) => name.parse(),
        }
    }
}

impl From<Level> for LevelArg {
    fn from(level: Level) -> Self {
        LevelArg::Level(level)
    }
}

impl From<i64> for LevelArg {
    fn from(rank: i64) -> Self {
        if rank == 0 {
            LevelArg::Unset
        } else {
            LevelArg::Rank(rank)
        }
    }
}

impl From<i32> for LevelArg {
    fn from(rank: i32) -> Self {
        LevelArg::from(i64::from(rank))
    }
}

impl From<u16> for LevelArg {
    fn from(rank: u16) -> Self {
        LevelArg::from(i64::from(rank))
    }
}

impl From<&str> for LevelArg {
    fn from(name: &str) -> Self {
        match name {
            "" | "0" => LevelArg::Unset,
            other => LevelArg::Name(other.to_string()),
        }
    }
}

impl From<String> for LevelArg {
    fn from(name: String) -> Self {
        LevelArg::from(name.as_str())
    }
}

impl From<bool> for LevelArg {
    /// `false` is falsy. `true` is truthy but names no level (rank 1).
    fn from(flag: bool) -> Self {
        if flag {
            LevelArg::Rank(1)
        } else {
            LevelArg::Unset
        }
    }
}

impl<T: Into<LevelArg>> From<Option<T>> for LevelArg {
    fn from(value: Option<T>) -> Self {
        value.map_or(LevelArg::Unset, Into::into)
    }
}
