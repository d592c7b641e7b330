//! Command handlers

use core::fmt::Write;

use super::parser::ParsedCommand;
use super::ConsoleError;
use crate::level::Level;
use crate::port;
use crate::trace::Trace;

/// Command descriptor
pub struct CommandDescriptor {
    pub name: &'static str,
    pub brief: &'static str,
    pub handler: fn(&ParsedCommand<'_>, &Trace<'_>, &mut dyn Write) -> Result<(), ConsoleError>,
}

/// All available commands
pub static COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor { name: "help", brief: "List commands", handler: cmd_help },
    CommandDescriptor { name: "debug", brief: "Show or set trace level", handler: cmd_debug },
    CommandDescriptor { name: "stats", brief: "Trace facility statistics", handler: cmd_stats },
];

/// Execute a parsed command against a trace facility
pub fn execute(
    cmd: &ParsedCommand<'_>,
    trace: &Trace<'_>,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    if cmd.command.is_empty() {
        return Ok(()); // Empty line, do nothing
    }

    let handler = COMMANDS
        .iter()
        .find(|c| c.name == cmd.command)
        .ok_or(ConsoleError::UnknownCommand)?;

    (handler.handler)(cmd, trace, out)
}

/// Get all command names
pub fn command_names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|c| c.name)
}

// --- Command Implementations ---

fn cmd_help(
    cmd: &ParsedCommand<'_>,
    _trace: &Trace<'_>,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    if let Some(name) = cmd.arg(0) {
        // Help for specific command
        if let Some(c) = COMMANDS.iter().find(|c| c.name == name) {
            let _ = writeln!(out, "{}: {}", c.name, c.brief);
        } else {
            return Err(ConsoleError::UnknownCommand);
        }
    } else {
        // List all commands
        for c in COMMANDS {
            let _ = writeln!(out, "  {:<8} {}", c.name, c.brief);
        }
    }
    Ok(())
}

/// `debug` shows the level, `debug list` enumerates valid names,
/// `debug <NAME>` sets the threshold.
fn cmd_debug(
    cmd: &ParsedCommand<'_>,
    trace: &Trace<'_>,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    match cmd.arg(0) {
        None => {
            let _ = writeln!(out, "level: {}", trace.level_name());
        }
        Some("list") => {
            let mut index = 0;
            while let Some(name) = Level::name_at(index) {
                let _ = writeln!(out, "  {}", name);
                index += 1;
            }
        }
        Some(name) => {
            if !trace.set_level_by_name(name) {
                return Err(ConsoleError::UnknownLevel);
            }
            let _ = writeln!(out, "level: {}", trace.level_name());
        }
    }
    Ok(())
}

fn cmd_stats(
    _cmd: &ParsedCommand<'_>,
    trace: &Trace<'_>,
    out: &mut dyn Write,
) -> Result<(), ConsoleError> {
    let _ = writeln!(out, "version: {}", env!("VERSION_STRING"));
    let _ = writeln!(out, "ticks:   {}", port::tick_count());
    let _ = writeln!(
        out,
        "trace:   {} ({})",
        trace.level_name(),
        if trace.is_active() { "active" } else { "inactive" }
    );
    let _ = writeln!(out, "dropped: {} bytes", crate::CHANNEL0.dropped_bytes());
    Ok(())
}
