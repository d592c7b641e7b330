//! # rtt-trace
//!
//! Level-filtered trace facility for FreeRTOS-based firmware, writing
//! line-oriented records to an RTT-style up channel.
//!
//! ## Architecture
//!
//! ```text
//! Task A ──┐
//! Task B ──┼─▶ Trace ──mutex──▶ up channel 0 ──▶ debug probe / UART drain
//! Task C ──┘   (filter)          (byte ring)
//! ```
//!
//! - Producers call [`Trace::log`] / dump entry points from any task
//! - A threshold filter plus the init flag gate emission; ineligible calls
//!   do no formatting work
//! - One blocking mutex serializes whole records, so lines never interleave
//!
//! The default build is hardware-free and runs on the host. Enable the
//! `esp32` feature for the FreeRTOS port, UART drain and firmware binary.

#![cfg_attr(not(test), no_std)]

pub mod channel;
pub mod console;
pub mod level;
pub mod port;
pub mod sink;
pub mod trace;

mod globals;

#[cfg(feature = "esp32")]
pub mod uart_drain;

pub use channel::UpChannel;
pub use globals::{CHANNEL0, TRACE};
pub use level::Level;
pub use sink::Sink;
pub use trace::Trace;
