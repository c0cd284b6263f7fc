//SPDX-License-Identifier: MIT OR Apache-2.0
use crate::level::Level;
use std::fmt::Debug;
use std::io;

/**
An output sink for the logger.

The logger decides *whether* something is written and *where it may go*; the printer
decides *how* it is rendered. `display` selects the channel: `true` means the data
may be rendered into the response the end user sees, `false` means it belongs in a
background log only.
*/
pub trait Printer: Debug + Send + Sync {
    /**
        Writes `data` to the display channel or the background log.
    */
    fn write(&self, data: &str, display: bool, level: Level) -> io::Result<()>;

    /**
    The application may imminently exit.  Ensure all buffers are flushed and up to date.
    */
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

/*
Boilerplate notes.

# Printer

Printers are shared behind Arc and swapped at runtime, so Clone on the trait is not needed.
PartialEq/Eq would mean comparing sinks, which is not meaningful.
Default is not sensible at the trait level; HtmlPrinter is the default the Logger picks.
Send/Sync are required since collaborators are shared through Arc.
*/
