// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::level::Level;
use crate::printer::Printer;
use std::io;

/**
A printer for command-line hosts.

Displayed data goes to stdout, everything else to stderr, each line prefixed with a
level tag such as `[warning]`. In the browser, levels are mapped onto the matching
console methods instead.
 */
#[derive(Debug, Clone)]
pub struct CliPrinter {}

// ============================================================================
// BOILERPLATE TRAIT IMPLEMENTATIONS
// ============================================================================
//
// Design decisions for CliPrinter trait implementations:
//
// - Debug/Clone: Already derived - appropriate for zero-sized struct
// - Copy: Implemented - safe for zero-sized struct with no heap allocation
// - PartialEq/Eq: Implemented - all instances are equivalent (zero-sized)
// - Default: Implemented - provides convenient zero-argument constructor
// - Display: NOT implemented - no meaningful string representation for a console sink
// - Send/Sync: Automatically implemented - zero-sized struct is always thread-safe

impl Copy for CliPrinter {}

impl PartialEq for CliPrinter {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for CliPrinter {}

impl Default for CliPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl CliPrinter {
    pub const fn new() -> Self {
        Self {}
    }
}

/// The tag a level is rendered with on the console.
fn tag(level: Level) -> &'static str {
    match level {
        Level::Error => "error",
        Level::Warning => "warning",
        Level::Notice => "notice",
        Level::Info => "info",
        Level::Off => "log",
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(data: &str, display: bool, level: Level) -> io::Result<()> {
    use std::io::Write;
    let line = format!("[{}] {}\n", tag(level), data);
    if display {
        io::stdout().lock().write_all(line.as_bytes())
    } else {
        io::stderr().lock().write_all(line.as_bytes())
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(data: &str, _display: bool, level: Level) -> io::Result<()> {
    let msg = format!("[{}] {}", tag(level), data);
    match level {
        Level::Error => web_sys::console::error_1(&msg.into()),
        Level::Warning => web_sys::console::warn_1(&msg.into()),
        Level::Notice | Level::Info => web_sys::console::info_1(&msg.into()),
        Level::Off => web_sys::console::log_1(&msg.into()),
    }
    Ok(())
}

impl Printer for CliPrinter {
    fn write(&self, data: &str, display: bool, level: Level) -> io::Result<()> {
        emit(data, display, level)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn flush(&self) -> io::Result<()> {
        use std::io::Write;
        io::stdout().flush()?;
        io::stderr().flush()
    }

    //console is unbuffered, so wasm keeps the default no-op flush
}
