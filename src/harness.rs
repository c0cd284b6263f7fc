// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bootstrap context for test suites.
//!
//! A test run needs a logger that prints nowhere, collaborators it can poke at, and a
//! record of how chatty the run's reporters should be. [`TestHarness`] bundles all of
//! that, and is passed explicitly to whatever needs it.
//!
//! ```rust
//! use hooklog::harness::{TestHarness, Verbosity};
//! use hooklog::Level;
//!
//! let harness = TestHarness::bootstrap(["test-runner", "--verbose"]);
//! assert_eq!(harness.verbosity, Verbosity::VeryVerbose);
//!
//! let mut logger = harness.logger();
//! assert_eq!(logger.level(), Level::Info);
//! logger.notice("hello");
//! assert_eq!(harness.printer.drain_text(), "NOTICE: hello");
//! ```

use crate::config::{Config, ErrorReporting};
use crate::context::ContextStack;
use crate::hooks::HookRegistry;
use crate::inmemory_printer::InMemoryPrinter;
use crate::logger::{Logger, Services};
use crate::request::CurrentRequest;
use std::sync::Arc;

/// Site URL used by harness-built configurations.
pub const TEST_SITE_URL: &str = "http://localhost/";

/// How much detail test reporters should print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    VeryVerbose,
    Debug,
}

impl Verbosity {
    /// `VeryVerbose` when `--verbose` is among the arguments, `Normal` otherwise.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if args.into_iter().any(|arg| arg.as_ref() == "--verbose") {
            Verbosity::VeryVerbose
        } else {
            Verbosity::Normal
        }
    }

    pub fn is_verbose(self) -> bool {
        self >= Verbosity::Verbose
    }
}

/**
Collaborators and settings for one test run.

Boot is left incomplete, as it is for unit tests that never serve a real request. All
collaborators are public so tests can register hooks, push context tags, or flip the
boot flag while a logger built by [`TestHarness::logger`] is alive.
*/
#[derive(Debug, Clone)]
pub struct TestHarness {
    pub verbosity: Verbosity,
    pub config: Arc<Config>,
    pub hooks: Arc<HookRegistry>,
    pub context: Arc<ContextStack>,
    pub request: Arc<CurrentRequest>,
    pub printer: Arc<InMemoryPrinter>,
}

impl TestHarness {
    pub fn bootstrap<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            verbosity: Verbosity::from_args(args),
            config: Arc::new(Config::new(TEST_SITE_URL)),
            hooks: Arc::new(HookRegistry::new()),
            context: Arc::new(ContextStack::new()),
            request: Arc::new(CurrentRequest::new(TEST_SITE_URL)),
            printer: Arc::new(InMemoryPrinter::new()),
        }
    }

    pub fn services(&self) -> Services {
        Services {
            hooks: self.hooks.clone(),
            context: self.context.clone(),
            config: self.config.clone(),
            request: self.request.clone(),
        }
    }

    /// A logger wired to this harness, reporting everything and printing into
    /// [`Self::printer`].
    pub fn logger(&self) -> Logger {
        Logger::with_printer(
            self.services(),
            ErrorReporting::everything(),
            self.printer.clone(),
        )
    }
}
