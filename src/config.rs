// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host configuration consumed by the logger.
//!
//! Nothing here reads the environment. The bootstrap layer builds these values, from
//! whatever source it likes, and hands them to [`crate::Logger`].

use crate::level::Level;
use std::sync::atomic::{AtomicBool, Ordering};

/// Site-wide settings shared between the host and the logger.
#[derive(Debug)]
pub struct Config {
    site_url: String,
    boot_complete: AtomicBool,
}

impl Config {
    /// A configuration for the site rooted at `site_url`. Boot is not yet complete.
    pub fn new(site_url: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
            boot_complete: AtomicBool::new(false),
        }
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// Whether the application has finished its boot sequence.
    pub fn boot_complete(&self) -> bool {
        self.boot_complete.load(Ordering::Relaxed)
    }

    pub fn set_boot_complete(&self, complete: bool) {
        self.boot_complete.store(complete, Ordering::Relaxed);
    }
}

/**
Which classes of runtime diagnostics the host reports.

The logger derives its initial level from this at construction:

| Reported             | Initial level |
|----------------------|---------------|
| everything           | INFO          |
| notices              | NOTICE        |
| warnings             | WARNING       |
| errors               | ERROR         |
| nothing              | ERROR         |

The first matching row wins.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ErrorReporting {
    pub errors: bool,
    pub warnings: bool,
    pub notices: bool,
    pub all: bool,
}

impl ErrorReporting {
    pub const fn everything() -> Self {
        Self {
            errors: true,
            warnings: true,
            notices: true,
            all: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            errors: false,
            warnings: false,
            notices: false,
            all: false,
        }
    }

    pub fn initial_level(&self) -> Level {
        if self.all {
            Level::Info
        } else if self.notices {
            Level::Notice
        } else if self.warnings {
            Level::Warning
        } else {
            Level::Error
        }
    }
}

/**
Logger settings as they appear in a host configuration file.

`level` accepts any level name (case-insensitive), or an empty string / `"0"` for off.
Apply with [`crate::Logger::apply_settings`].
*/
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerSettings {
    pub level: Option<String>,
    pub display: bool,
    pub reporting: ErrorReporting,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reporting_precedence() {
        assert_eq!(ErrorReporting::everything().initial_level(), Level::Info);
        assert_eq!(ErrorReporting::none().initial_level(), Level::Error);

        let notices = ErrorReporting {
            notices: true,
            warnings: true,
            ..ErrorReporting::none()
        };
        assert_eq!(notices.initial_level(), Level::Notice);

        let warnings = ErrorReporting {
            warnings: true,
            errors: true,
            ..ErrorReporting::none()
        };
        assert_eq!(warnings.initial_level(), Level::Warning);

        let errors = ErrorReporting {
            errors: true,
            ..ErrorReporting::none()
        };
        assert_eq!(errors.initial_level(), Level::Error);
    }

    #[test]
    fn boot_flag() {
        let config = Config::new("https://example.org/");
        assert!(!config.boot_complete());
        config.set_boot_complete(true);
        assert!(config.boot_complete());
        assert_eq!(config.site_url(), "https://example.org/");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn settings_from_json() {
        let settings: LoggerSettings = serde_json::from_str(
            r#"{"level": "warning", "display": true, "reporting": {"notices": true}}"#,
        )
        .unwrap();
        assert_eq!(settings.level.as_deref(), Some("warning"));
        assert!(settings.display);
        assert_eq!(settings.reporting.initial_level(), Level::Notice);

        let empty: LoggerSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, LoggerSettings::default());
    }
}
