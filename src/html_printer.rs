// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::level::Level;
use crate::printer::Printer;
use std::fmt::Debug;
use std::io::{self, Stderr, Stdout, Write};
use std::sync::{Mutex, PoisonError};

/**
The default printer for web responses.

Displayed data is HTML-escaped and wrapped in a `<pre class="log-data">` block on the
screen sink, so it can sit inside a page without breaking markup. Everything else goes
to the error-log sink as plain text, one entry per line.

```rust
use hooklog::{HtmlPrinter, Level, Printer};

let printer = HtmlPrinter::with_sinks(Vec::<u8>::new(), Vec::<u8>::new());
printer.write("a < b", true, Level::Error).unwrap();
printer.write("in the log", false, Level::Error).unwrap();

let (screen, error_log) = printer.into_sinks();
assert_eq!(screen, b"<pre class=\"log-data\">a &lt; b</pre>\n");
assert_eq!(error_log, b"in the log\n");
```
*/
#[derive(Debug)]
pub struct HtmlPrinter<W = Stdout, E = Stderr> {
    screen: Mutex<W>,
    error_log: Mutex<E>,
}

impl HtmlPrinter {
    /// Writes displayed data to stdout and everything else to stderr.
    pub fn new() -> Self {
        Self::with_sinks(io::stdout(), io::stderr())
    }
}

impl Default for HtmlPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W, E> HtmlPrinter<W, E> {
    pub fn with_sinks(screen: W, error_log: E) -> Self {
        Self {
            screen: Mutex::new(screen),
            error_log: Mutex::new(error_log),
        }
    }

    pub fn into_sinks(self) -> (W, E) {
        (
            self.screen.into_inner().unwrap_or_else(PoisonError::into_inner),
            self.error_log
                .into_inner()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }
}

impl<W, E> Printer for HtmlPrinter<W, E>
where
    W: Write + Debug + Send,
    E: Write + Debug + Send,
{
    fn write(&self, data: &str, display: bool, _level: Level) -> io::Result<()> {
        if display {
            let mut screen = self.screen.lock().unwrap_or_else(PoisonError::into_inner);
            writeln!(screen, "<pre class=\"log-data\">{}</pre>", escape_html(data))
        } else {
            let mut log = self
                .error_log
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            writeln!(log, "{data}")
        }
    }

    fn flush(&self) -> io::Result<()> {
        self.screen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()?;
        self.error_log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }
}

/// Escapes the five characters that are significant in HTML text and attributes.
fn escape_html(data: &str) -> String {
    let mut escaped = String::with_capacity(data.len());
    for c in data.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}
