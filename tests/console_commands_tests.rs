//! Console command handler tests

use rtt_trace::console::{execute, parse_line, ConsoleError, COMMANDS};
use rtt_trace::{Level, Trace, UpChannel};

#[test]
fn test_command_registry_has_all_commands() {
    let expected = ["help", "debug", "stats"];

    for name in expected {
        assert!(
            COMMANDS.iter().any(|c| c.name == name),
            "Command '{}' should be in registry",
            name
        );
    }
}

#[test]
fn test_execute_unknown_command() {
    let ch = UpChannel::<64>::new();
    let trace = Trace::new(&ch);

    let cmd = parse_line("foobar");
    let result = execute(&cmd, &trace, &mut TestOutput::new());

    assert_eq!(result, Err(ConsoleError::UnknownCommand));
}

#[test]
fn test_execute_empty_line_is_noop() {
    let ch = UpChannel::<64>::new();
    let trace = Trace::new(&ch);

    let cmd = parse_line("");
    assert!(execute(&cmd, &trace, &mut TestOutput::new()).is_ok());
}

#[test]
fn test_execute_help() {
    let ch = UpChannel::<64>::new();
    let trace = Trace::new(&ch);

    let cmd = parse_line("help");
    let mut output = TestOutput::new();
    let result = execute(&cmd, &trace, &mut output);

    assert!(result.is_ok());
    assert!(output.contains("debug"));
    assert!(output.contains("stats"));
}

#[test]
fn test_debug_shows_current_level() {
    let ch = UpChannel::<64>::new();
    let trace = Trace::new(&ch);
    trace.set_level(Level::Error);

    let cmd = parse_line("debug");
    let mut output = TestOutput::new();
    execute(&cmd, &trace, &mut output).unwrap();

    assert!(output.contains("ERROR"));
}

#[test]
fn test_debug_sets_level_by_name() {
    let ch = UpChannel::<64>::new();
    let trace = Trace::new(&ch);

    let cmd = parse_line("debug CRITICAL");
    let mut output = TestOutput::new();
    execute(&cmd, &trace, &mut output).unwrap();

    assert_eq!(trace.level(), Level::Critical);
    assert!(output.contains("CRITICAL"));
}

#[test]
fn test_debug_rejects_unknown_level() {
    let ch = UpChannel::<64>::new();
    let trace = Trace::new(&ch);
    trace.set_level(Level::Info);

    let cmd = parse_line("debug verbose");
    let result = execute(&cmd, &trace, &mut TestOutput::new());

    assert_eq!(result, Err(ConsoleError::UnknownLevel));
    assert_eq!(trace.level(), Level::Info); // unchanged
}

#[test]
fn test_debug_list_enumerates_all_levels() {
    let ch = UpChannel::<64>::new();
    let trace = Trace::new(&ch);

    let cmd = parse_line("debug list");
    let mut output = TestOutput::new();
    execute(&cmd, &trace, &mut output).unwrap();

    for name in ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"] {
        assert!(output.contains(name), "missing level name {}", name);
    }
}

#[test]
fn test_stats_reports_facility_state() {
    let ch = UpChannel::<64>::new();
    let trace = Trace::new(&ch);

    let cmd = parse_line("stats");
    let mut output = TestOutput::new();
    execute(&cmd, &trace, &mut output).unwrap();

    assert!(output.contains("inactive"));
    assert!(output.contains("DEBUG"));

    trace.init();
    let mut output = TestOutput::new();
    execute(&cmd, &trace, &mut output).unwrap();
    assert!(output.contains("(active)"));
}

#[test]
fn test_stats_reports_channel_dropped_bytes() {
    let ch = UpChannel::<64>::new();
    let trace = Trace::new(&ch);

    let cmd = parse_line("stats");
    let mut output = TestOutput::new();
    execute(&cmd, &trace, &mut output).unwrap();

    // Nothing in this process writes to channel 0, so the counter is 0.
    assert!(output.contains("dropped: 0 bytes"));
}

// Test output buffer
struct TestOutput {
    buf: [u8; 1024],
    len: usize,
}

impl TestOutput {
    fn new() -> Self {
        Self { buf: [0u8; 1024], len: 0 }
    }

    fn contains(&self, s: &str) -> bool {
        if let Ok(content) = core::str::from_utf8(&self.buf[..self.len]) {
            content.contains(s)
        } else {
            false
        }
    }
}

impl core::fmt::Write for TestOutput {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let bytes = s.as_bytes();
        let available = self.buf.len() - self.len;
        let to_copy = bytes.len().min(available);
        self.buf[self.len..self.len + to_copy].copy_from_slice(&bytes[..to_copy]);
        self.len += to_copy;
        Ok(())
    }
}
