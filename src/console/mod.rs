//! Serial console for trace diagnostics
//!
//! Zero heap allocation - command dispatch over static descriptors.

pub mod commands;
pub mod error;
pub mod parser;

pub use commands::{command_names, execute, COMMANDS};
pub use error::ConsoleError;
pub use parser::{parse_line, ParsedCommand};
