// SPDX-License-Identifier: MIT OR Apache-2.0

//! Suppressing emission with `disable`/`enable`.

use hooklog::harness::TestHarness;
use hooklog::{Level, LogRecord, Rank};

#[test]
fn disabled_window_captures_in_order() {
    let harness = TestHarness::bootstrap(["test"]);
    let mut logger = harness.logger();

    logger.disable();
    assert!(logger.log("a", Level::Warning));
    assert!(logger.log("b", Level::Error));
    let captured = logger.enable();

    assert_eq!(
        captured,
        Some(vec![
            LogRecord::new("a", Level::Warning),
            LogRecord::new("b", Level::Error),
        ])
    );
    assert!(harness.printer.is_empty());
}

#[test]
fn nested_frames_capture_into_the_top_only() {
    let harness = TestHarness::bootstrap(["test"]);
    let mut logger = harness.logger();

    logger.disable();
    logger.disable();
    assert_eq!(logger.capture_depth(), 2);
    logger.log("x", Level::Error);

    assert_eq!(logger.enable(), Some(vec![LogRecord::new("x", Level::Error)]));
    assert_eq!(logger.enable(), Some(vec![]));
    assert!(!logger.is_capturing());
    assert!(harness.printer.is_empty());
}

#[test]
fn outer_frame_keeps_its_own_records() {
    let harness = TestHarness::bootstrap(["test"]);
    let mut logger = harness.logger();

    logger.disable();
    logger.info("outer before");
    logger.disable();
    logger.info("inner");
    let inner = logger.enable().unwrap();
    logger.info("outer after");
    let outer = logger.enable().unwrap();

    assert_eq!(inner, vec![LogRecord::new("inner", Level::Info)]);
    assert_eq!(
        outer,
        vec![
            LogRecord::new("outer before", Level::Info),
            LogRecord::new("outer after", Level::Info),
        ]
    );
}

#[test]
fn logging_resumes_after_enable() {
    let harness = TestHarness::bootstrap(["test"]);
    let mut logger = harness.logger();

    logger.disable();
    logger.error("swallowed");
    logger.enable();
    logger.error("printed");

    assert_eq!(harness.printer.drain_text(), "ERROR: printed");
}

#[test]
fn filtered_calls_are_still_captured() {
    let harness = TestHarness::bootstrap(["test"]);
    let mut logger = harness.logger();
    logger.set_level(Level::Error);

    logger.disable();
    assert!(!logger.info("below the level"));
    assert!(!logger.log("unknown rank", 999_u16));
    logger.set_level(0);
    assert!(!logger.error("while off"));
    let captured = logger.enable().unwrap();

    assert_eq!(
        captured,
        vec![
            LogRecord::new("below the level", Level::Info),
            LogRecord::new("unknown rank", Rank(999)),
            LogRecord::new("while off", Level::Error),
        ]
    );
}

#[test]
fn unbalanced_enable_returns_none() {
    let harness = TestHarness::bootstrap(["test"]);
    let mut logger = harness.logger();
    assert_eq!(logger.enable(), None);

    logger.disable();
    assert!(logger.enable().is_some());
    assert_eq!(logger.enable(), None);
}

#[test]
fn capture_is_balanced() {
    let harness = TestHarness::bootstrap(["test"]);
    let mut logger = harness.logger();

    let (count, records) = logger.capture(|logger| {
        logger.warn("one");
        logger.notice("two");
        2
    });

    assert_eq!(count, 2);
    assert_eq!(records.len(), 2);
    assert_eq!(records[1], LogRecord::new("two", Level::Notice));
    assert_eq!(logger.capture_depth(), 0);
    assert!(harness.printer.is_empty());
}
