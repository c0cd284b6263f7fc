// SPDX-License-Identifier: MIT OR Apache-2.0

//! The leveled logger.
//!
//! A [`Logger`] lives for one request or process. It filters messages by level, lets
//! hook handlers observe or veto each emission, keeps log output out of responses that
//! must stay pristine, and hands whatever survives to a [`Printer`].
//!
//! # States
//!
//! The logger is either *active* or *capturing*. [`Logger::disable`] pushes a capture
//! frame and [`Logger::enable`] pops it again; while any frame is on the stack, log calls
//! are recorded into the top frame instead of being printed. Frames nest, and every
//! `disable` must be paired with an `enable` on the same control path.
//! [`Logger::capture`] does the pairing for you.
//!
//! # Example
//!
//! ```rust
//! use hooklog::{Level, Logger, Services, ErrorReporting, InMemoryPrinter};
//! use std::sync::Arc;
//!
//! let printer = Arc::new(InMemoryPrinter::new());
//! let mut logger = Logger::with_printer(
//!     Services::standalone("https://example.org/"),
//!     ErrorReporting::none(),
//!     printer.clone(),
//! );
//!
//! assert_eq!(logger.level(), Level::Error);
//! assert!(!logger.warn("not severe enough"));
//! assert!(logger.error("disk on fire"));
//! assert_eq!(printer.drain_text(), "ERROR: disk on fire");
//!
//! let (_, captured) = logger.capture(|logger| logger.error("quiet please"));
//! assert_eq!(captured[0].message(), "quiet please");
//! assert!(printer.is_empty());
//! ```

use crate::config::{Config, ErrorReporting, LoggerSettings};
use crate::context::{ContextStack, ExecutionContext};
use crate::hooks::{HookRegistry, HookTrigger, LogEvent};
use crate::html_printer::HtmlPrinter;
use crate::level::{Level, LevelArg, Rank};
use crate::log_record::LogRecord;
use crate::printer::Printer;
use crate::request::{self, CurrentRequest, RequestPath};
use std::fmt::{Debug, Display};
use std::sync::Arc;

/// Hook name triggered before every emission.
pub const LOG_HOOK_NAME: &str = "debug";
/// Hook kind triggered before every emission.
pub const LOG_HOOK_KIND: &str = "log";

/// Context tags whose output must never contain log data.
const NON_HTML_CONTEXTS: [&str; 2] = ["js", "css"];

/**
The collaborators a [`Logger`] consults while emitting.

All of them are shared: the host keeps its own handles to push context tags, flip the
boot flag, or register hook handlers while the logger is alive.
*/
#[derive(Debug, Clone)]
pub struct Services {
    /// Triggered with `("debug", "log")` before every write.
    pub hooks: Arc<dyn HookTrigger>,
    /// Consulted for the `js` and `css` tags.
    pub context: Arc<dyn ExecutionContext>,
    /// Supplies the boot flag and the site URL.
    pub config: Arc<Config>,
    /// Supplies the URL of the request being served.
    pub request: Arc<dyn RequestPath>,
}

impl Services {
    /// Fresh, empty collaborators for a site rooted at `site_url`.
    ///
    /// Useful for command-line hosts and tests, which have no other hook bus or
    /// context stack to share.
    pub fn standalone(site_url: impl Into<String>) -> Self {
        let site_url = site_url.into();
        Self {
            hooks: Arc::new(HookRegistry::new()),
            context: Arc::new(ContextStack::new()),
            request: Arc::new(CurrentRequest::new(site_url.clone())),
            config: Arc::new(Config::new(site_url)),
        }
    }
}

/**
A leveled, hookable logger with a nestable capture stack.

Construct one per application bootstrap with [`Logger::new`] (which prints through an
[`HtmlPrinter`]) or [`Logger::with_printer`].
*/
#[derive(Debug)]
pub struct Logger {
    level: Level,
    display: bool,
    hooks: Arc<dyn HookTrigger>,
    context: Arc<dyn ExecutionContext>,
    config: Arc<Config>,
    request: Arc<dyn RequestPath>,
    printer: Arc<dyn Printer>,
    disabled_stack: Vec<Vec<LogRecord>>,
}

impl Logger {
    /// Creates a logger printing through the default [`HtmlPrinter`].
    ///
    /// The initial level comes from `reporting`; see [`ErrorReporting::initial_level`].
    pub fn new(services: Services, reporting: ErrorReporting) -> Self {
        Self::with_printer(services, reporting, Arc::new(HtmlPrinter::new()))
    }

    pub fn with_printer(
        services: Services,
        reporting: ErrorReporting,
        printer: Arc<dyn Printer>,
    ) -> Self {
        let Services {
            hooks,
            context,
            config,
            request,
        } = services;
        Self {
            level: reporting.initial_level(),
            display: false,
            hooks,
            context,
            config,
            request,
            printer,
            disabled_stack: Vec::new(),
        }
    }

    /**
    Sets the minimum level that will be emitted.

    Accepts a [`Level`], a numeric rank, or a level name in any case. Falsy values
    (`0`, `""`, `"0"`, `false`, `None`) turn logging off. Anything else that does not
    name a level is ignored, and a warning saying so is logged.

    ```rust
    use hooklog::{Level, Logger, Services, ErrorReporting};

    let mut logger = Logger::new(Services::standalone("/"), ErrorReporting::none());
    logger.set_level("notice");
    assert_eq!(logger.level(), Level::Notice);
    logger.set_level(400);
    assert_eq!(logger.level(), Level::Error);
    logger.set_level(0);
    assert_eq!(logger.level(), Level::Off);
    ```
    */
    pub fn set_level(&mut self, level: impl Into<LevelArg>) {
        match level.into().resolve() {
            Ok(level) => self.level = level,
            Err(_) => {
                // warn() never re-enters set_level
                self.warn("Logger::set_level: invalid level ignored.");
            }
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Sets whether future emissions may be shown to the end user.
    ///
    /// Whether a given message actually is displayed also depends on its level and on
    /// the response being generated.
    pub fn set_display(&mut self, display: bool) {
        self.display = display;
    }

    pub fn display(&self) -> bool {
        self.display
    }

    pub fn set_printer(&mut self, printer: Arc<dyn Printer>) {
        self.printer = printer;
    }

    /// Re-points the logger at a different hook bus.
    pub fn set_hooks(&mut self, hooks: Arc<dyn HookTrigger>) {
        self.hooks = hooks;
    }

    /// Applies host configuration: the level when one is given, and the display flag.
    ///
    /// `settings.reporting` only matters at construction and is not reapplied here.
    pub fn apply_settings(&mut self, settings: &LoggerSettings) {
        if let Some(level) = &settings.level {
            self.set_level(level.as_str());
        }
        self.set_display(settings.display);
    }

    /**
    Logs `message` at `level`. Returns whether the message passed the level checks.

    While capturing, the call is recorded in the top capture frame before any check,
    and nothing is printed. The return value is the same either way: `false` when the
    logger is off, when `level` is below the current level, or when `level` names no
    level; `true` otherwise.

    Notices and below are never displayed to the end user, whatever [`Self::display`]
    says.
    */
    pub fn log(&mut self, message: impl Display, level: impl Into<Rank>) -> bool {
        let rank = level.into();
        let message = message.to_string();

        if let Some(frame) = self.disabled_stack.last_mut() {
            frame.push(LogRecord::new(message.clone(), rank));
        }

        if self.level == Level::Off || rank < Rank::from(self.level) {
            return false;
        }

        let Some(level) = rank.level() else {
            return false;
        };

        if self.is_capturing() {
            return true;
        }

        let display = self.display && level > Level::Notice;
        self.process(&format!("{level}: {message}"), display, level);
        true
    }

    pub fn error(&mut self, message: impl Display) -> bool {
        self.log(message, Level::Error)
    }

    pub fn warn(&mut self, message: impl Display) -> bool {
        self.log(message, Level::Warning)
    }

    pub fn notice(&mut self, message: impl Display) -> bool {
        self.log(message, Level::Notice)
    }

    pub fn info(&mut self, message: impl Display) -> bool {
        self.log(message, Level::Info)
    }

    /**
    Dumps `data` at ERROR, bypassing the level filter and the capture stack.

    The value is rendered with its alternate `Debug` form. Hooks, context, and request
    checks still apply, so a dump can be vetoed or kept off the screen.
    */
    pub fn dump<D: Debug + ?Sized>(&self, data: &D, display: bool) {
        self.process(&format!("{data:#?}"), display, Level::Error);
    }

    /// Like [`Self::dump`], for text that should be written verbatim.
    pub fn dump_str(&self, data: &str, display: bool) {
        self.process(data, display, Level::Error);
    }

    fn process(&self, data: &str, display: bool, level: Level) {
        let event = LogEvent::new(level, data, display);
        if !self
            .hooks
            .trigger(LOG_HOOK_NAME, LOG_HOOK_KIND, &event, true)
        {
            return;
        }

        let display = display && !self.in_non_html_context() && !self.serving_infrastructure();

        // sink failures are not reported back to the caller
        let _ = self.printer.write(data, display, level);
    }

    fn in_non_html_context(&self) -> bool {
        NON_HTML_CONTEXTS
            .iter()
            .any(|tag| self.context.contains(tag))
    }

    fn serving_infrastructure(&self) -> bool {
        if !self.config.boot_complete() {
            return false;
        }
        let url = self.request.current_url();
        request::is_infrastructure_path(request::relative_path(&url, self.config.site_url()))
    }

    /// Starts capturing: pushes an empty capture frame. Calls nest.
    pub fn disable(&mut self) {
        self.disabled_stack.push(Vec::new());
    }

    /**
    Stops capturing at the current depth, returning what the top frame recorded.

    Returns `None` if there was no matching [`Self::disable`].
    */
    pub fn enable(&mut self) -> Option<Vec<LogRecord>> {
        self.disabled_stack.pop()
    }

    /// Runs `f` with a capture frame pushed, returning its result and the frame.
    ///
    /// The stack is back at its starting depth afterwards, even if `f` leaves frames
    /// open or pops more frames than it pushed.
    pub fn capture<F, R>(&mut self, f: F) -> (R, Vec<LogRecord>)
    where
        F: FnOnce(&mut Logger) -> R,
    {
        self.disable();
        let depth = self.disabled_stack.len();
        let result = f(self);
        // frames `f` left open are discarded; if `f` popped ours, there is nothing to return
        let records = if self.disabled_stack.len() >= depth {
            self.disabled_stack.truncate(depth);
            self.enable().unwrap_or_default()
        } else {
            Vec::new()
        };
        (result, records)
    }

    pub fn is_capturing(&self) -> bool {
        !self.disabled_stack.is_empty()
    }

    pub fn capture_depth(&self) -> usize {
        self.disabled_stack.len()
    }

    /// Flushes the printer. Call before the host exits.
    pub fn flush(&self) -> std::io::Result<()> {
        self.printer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inmemory_printer::InMemoryPrinter;

    fn logger() -> (Logger, Arc<InMemoryPrinter>) {
        let printer = Arc::new(InMemoryPrinter::new());
        let logger = Logger::with_printer(
            Services::standalone("https://example.org/"),
            ErrorReporting::everything(),
            printer.clone(),
        );
        (logger, printer)
    }

    #[test]
    fn initial_level_follows_reporting() {
        let (logger, _) = logger();
        assert_eq!(logger.level(), Level::Info);
        assert!(!logger.display());

        let logger = Logger::new(
            Services::standalone("/"),
            ErrorReporting {
                warnings: true,
                ..ErrorReporting::none()
            },
        );
        assert_eq!(logger.level(), Level::Warning);
    }

    #[test]
    fn formats_with_level_name() {
        let (mut logger, printer) = logger();
        assert!(logger.info("hello"));
        let writes = printer.drain();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].data, "INFO: hello");
        assert_eq!(writes[0].level, Level::Info);
    }

    #[test]
    fn unknown_rank_is_rejected() {
        let (mut logger, printer) = logger();
        assert!(!logger.log("odd", 275_u16));
        assert!(printer.is_empty());
    }

    #[test]
    fn capture_restores_depth() {
        let (mut logger, printer) = logger();
        logger.disable();
        let (accepted, records) = logger.capture(|logger| logger.error("inner"));
        assert!(accepted);
        assert_eq!(records, vec![LogRecord::new("inner", Level::Error)]);
        assert_eq!(logger.capture_depth(), 1);
        assert_eq!(logger.enable(), Some(Vec::new()));
        assert!(!logger.is_capturing());
        assert!(printer.is_empty());
    }

    #[test]
    fn capture_discards_frames_left_open() {
        let (mut logger, printer) = logger();
        logger.disable();
        logger.warn("outer");

        let (_, records) = logger.capture(|logger| {
            logger.error("mine");
            logger.disable();
            logger.error("left open");
        });

        assert_eq!(records, vec![LogRecord::new("mine", Level::Error)]);
        assert_eq!(logger.capture_depth(), 1);
        assert_eq!(
            logger.enable(),
            Some(vec![LogRecord::new("outer", Level::Warning)])
        );
        assert!(printer.is_empty());
    }

    #[test]
    fn capture_survives_extra_enable() {
        let (mut logger, _) = logger();
        logger.disable();
        logger.warn("outer");

        let (popped, records) = logger.capture(|logger| {
            logger.error("mine");
            logger.enable()
        });

        assert_eq!(popped, Some(vec![LogRecord::new("mine", Level::Error)]));
        assert!(records.is_empty());
        assert_eq!(logger.capture_depth(), 1);
        assert_eq!(
            logger.enable(),
            Some(vec![LogRecord::new("outer", Level::Warning)])
        );
    }

    #[test]
    fn apply_settings() {
        let (mut logger, _) = logger();
        logger.apply_settings(&LoggerSettings {
            level: Some("Warning".to_string()),
            display: true,
            reporting: ErrorReporting::none(),
        });
        assert_eq!(logger.level(), Level::Warning);
        assert!(logger.display());

        logger.apply_settings(&LoggerSettings::default());
        assert_eq!(logger.level(), Level::Warning);
        assert!(!logger.display());
    }

    #[test]
    fn dump_str_is_verbatim() {
        let (logger, printer) = logger();
        logger.dump_str("raw \"text\"", false);
        assert_eq!(printer.drain_text(), "raw \"text\"");
        logger.flush().unwrap();
    }
}
