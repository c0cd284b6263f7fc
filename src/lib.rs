//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# hooklog

hooklog is a leveled logger for request-scoped web hosts.

# The problem

A web application logs from everywhere: request handlers, plugins, framework internals.
Some of that output is useful to the developer looking at the page, most of it belongs
in a background log, and some responses (scripts, stylesheets, cached assets, file
downloads) must never contain a stray byte of it.  Test suites, meanwhile, want to
assert on what *would* have been logged without anything being printed.

# The levels

| Name    | Rank | Shown to end users?  |
|---------|------|----------------------|
| OFF     | 0    | nothing is logged    |
| INFO    | 200  | never                |
| NOTICE  | 250  | never                |
| WARNING | 300  | if display is on     |
| ERROR   | 400  | if display is on     |

The logger emits messages at or above its current level.  Its initial level is derived
from the host's [`ErrorReporting`] settings.

# The pipeline

Every emission passes through the same steps:

1. The `("debug", "log")` hook is triggered.  Any handler may observe the event, or veto
   it by returning `false`.
2. If the execution context contains `js` or `css`, the display channel is dropped.
3. If boot is complete and the request path starts with `cache/`, `action/` or
   `serve-file/`, the display channel is dropped.
4. The [`Printer`] writes the data, to the screen or to the background log.

# Capturing

[`Logger::disable`] pushes a capture frame, [`Logger::enable`] pops it and returns what
was recorded.  While capturing nothing is printed.  Frames nest.

```rust
use hooklog::{ErrorReporting, InMemoryPrinter, Level, Logger, Services};
use std::sync::Arc;

let printer = Arc::new(InMemoryPrinter::new());
let mut logger = Logger::with_printer(
    Services::standalone("https://example.org/"),
    ErrorReporting::everything(),
    printer.clone(),
);

logger.disable();
logger.warn("a");
logger.error("b");
let captured = logger.enable().unwrap();
assert_eq!(captured.len(), 2);
assert_eq!(captured[1].level(), Level::Error);
assert!(printer.is_empty());
```

# Collaborators

The logger reaches its host through small traits: [`hooks::HookTrigger`],
[`context::ExecutionContext`], [`request::RequestPath`], plus a shared [`Config`].
Minimal implementations of each ship with the crate; [`harness::TestHarness`] wires them
together for test suites.
*/

mod cli_printer;
pub mod config;
pub mod context;
pub mod harness;
pub mod hooks;
mod html_printer;
mod inmemory_printer;
mod level;
mod log_record;
mod logger;
mod printer;
pub mod request;

pub use cli_printer::CliPrinter;
pub use config::{Config, ErrorReporting, LoggerSettings};
pub use html_printer::HtmlPrinter;
pub use inmemory_printer::{InMemoryPrinter, PrintedEntry};
pub use level::{Level, LevelArg, LevelError, Rank};
pub use log_record::LogRecord;
pub use logger::{LOG_HOOK_KIND, LOG_HOOK_NAME, Logger, Services};
pub use printer::Printer;
