// SPDX-License-Identifier: MIT OR Apache-2.0
use hooklog::harness::TestHarness;
use hooklog::{ErrorReporting, HtmlPrinter, Level, Logger, Services};
use std::sync::Arc;

#[derive(Debug)]
#[allow(dead_code)]
struct Session {
    user: &'static str,
    visits: u32,
}

#[test]
fn dump_ignores_level_and_off() {
    let harness = TestHarness::bootstrap(["test"]);
    let mut logger = harness.logger();
    logger.set_level(0);

    logger.dump(&42, false);
    logger.set_level(Level::Error);
    logger.dump(&"text", true);

    let writes = harness.printer.drain();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0].data, "42");
    assert!(!writes[0].display);
    assert_eq!(writes[0].level, Level::Error);
    assert_eq!(writes[1].data, "\"text\"");
    assert!(writes[1].display);
}

#[test]
fn dump_is_not_captured() {
    let harness = TestHarness::bootstrap(["test"]);
    let mut logger = harness.logger();

    logger.disable();
    logger.dump_str("visible", false);
    let captured = logger.enable().unwrap();

    assert!(captured.is_empty());
    assert_eq!(harness.printer.drain_text(), "visible");
}

#[test]
fn dump_uses_pretty_debug() {
    let harness = TestHarness::bootstrap(["test"]);
    let logger = harness.logger();

    logger.dump(
        &Session {
            user: "ada",
            visits: 3,
        },
        false,
    );

    assert_eq!(
        harness.printer.drain_text(),
        "Session {\n    user: \"ada\",\n    visits: 3,\n}"
    );
}

#[test]
fn dump_display_respects_script_context() {
    let harness = TestHarness::bootstrap(["test"]);
    let logger = harness.logger();
    harness.context.push("js");

    logger.dump(&[1, 2], true);
    assert!(!harness.printer.drain()[0].display);
}

#[test]
fn default_html_printer_wraps_displayed_dumps() {
    let printer = Arc::new(HtmlPrinter::with_sinks(Vec::<u8>::new(), Vec::<u8>::new()));
    let logger = Logger::with_printer(
        Services::standalone("https://example.org/"),
        ErrorReporting::none(),
        printer.clone(),
    );
    logger.dump_str("<script>", true);
    logger.dump_str("background", false);
    drop(logger);

    let printer = Arc::try_unwrap(printer).unwrap();
    let (screen, error_log) = printer.into_sinks();
    assert_eq!(
        String::from_utf8(screen).unwrap(),
        "<pre class=\"log-data\">&lt;script&gt;</pre>\n"
    );
    assert_eq!(String::from_utf8(error_log).unwrap(), "background\n");
}
