//! The trace facility: level filter, lifecycle, record emission.
//!
//! One instance owns the sink for its lifetime. All entry points may be
//! called concurrently from any task; a single blocking mutex serializes
//! whole records so output never interleaves on the wire.
//!
//! # Record format
//!
//! ```text
//! [00001234] [INFO] message text
//! ```
//!
//! Tick count zero-padded to 8 decimal digits, then the canonical level
//! name, then the message. Dump variants append hex (and ASCII) payload.
//!
//! # Lifecycle
//!
//! `init` and `deinit` are idempotent. They must not be called concurrently
//! with each other; logging entry points may race them freely (a record near
//! the transition is either emitted or dropped, never torn).

use core::fmt;
use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::level::Level;
use crate::port::{self, TraceMutex};
use crate::sink::Sink;

/// Bytes per row in the tabular dump.
const TABLE_ROW_LEN: usize = 16;

/// Level-filtered, mutex-guarded trace facility.
pub struct Trace<'a> {
    sink: &'a (dyn Sink + Sync),
    threshold: AtomicU8,
    inited: AtomicBool,
    mutex: TraceMutex,
}

impl<'a> Trace<'a> {
    /// Create an inactive facility over `sink`.
    ///
    /// The default threshold is [`Level::Debug`] (most verbose). Nothing is
    /// emitted until [`init`](Self::init) succeeds.
    pub const fn new(sink: &'a (dyn Sink + Sync)) -> Self {
        Self {
            sink,
            threshold: AtomicU8::new(Level::Debug as u8),
            inited: AtomicBool::new(false),
            mutex: TraceMutex::new(),
        }
    }

    /// Bring the facility up: sink transport first, then the mutex.
    ///
    /// No-op when already initialized. On mutex-creation failure a single
    /// best-effort, unsynchronized notice goes to the sink and the facility
    /// stays inactive; every later logging call is then a cheap no-op until
    /// `init` is invoked again.
    pub fn init(&self) {
        if self.inited.load(Ordering::Acquire) {
            return;
        }
        self.sink.init();
        if self.mutex.create() {
            self.inited.store(true, Ordering::Release);
        } else {
            self.sink.write_str("can't create mutex. logger is inactive.\n");
        }
    }

    /// Tear the facility down, releasing the mutex. No-op when not
    /// initialized.
    pub fn deinit(&self) {
        if self.inited.load(Ordering::Acquire) {
            self.inited.store(false, Ordering::Release);
            self.mutex.destroy();
        }
    }

    /// Whether `init` has succeeded and `deinit` has not run since.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.inited.load(Ordering::Acquire)
    }

    /// Set the emission threshold.
    #[inline]
    pub fn set_level(&self, level: Level) {
        self.threshold.store(level as u8, Ordering::Relaxed);
    }

    /// Current emission threshold.
    #[inline]
    pub fn level(&self) -> Level {
        Level::from_rank(self.threshold.load(Ordering::Relaxed))
    }

    /// Set the threshold by canonical name. Returns `false` and leaves the
    /// threshold unchanged when the name is unknown.
    pub fn set_level_by_name(&self, name: &str) -> bool {
        match Level::from_name(name) {
            Some(level) => {
                self.set_level(level);
                true
            }
            None => false,
        }
    }

    /// Canonical name of the current threshold.
    #[inline]
    pub fn level_name(&self) -> &'static str {
        self.level().as_str()
    }

    #[inline]
    fn eligible(&self, level: Level) -> bool {
        self.inited.load(Ordering::Acquire)
            && level as u8 >= self.threshold.load(Ordering::Relaxed)
    }

    /// `[tick] [LEVEL] ` record prefix. Caller holds the mutex.
    fn write_prefix(&self, level: Level) {
        self.sink
            .write_fmt(format_args!("[{:08}]", port::tick_count()));
        self.sink.write_str(" [");
        self.sink.write_str(level.as_str());
        self.sink.write_str("] ");
    }

    /// Emit one scalar record.
    ///
    /// Ineligible calls return before any formatting work. Blocks only on
    /// the mutex; never retries or queues.
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        if !self.eligible(level) {
            return;
        }
        let Some(_guard) = self.mutex.lock() else {
            return;
        };
        self.write_prefix(level);
        self.sink.write_fmt(args);
        self.sink.write_byte(b'\n');
    }

    /// Emit one record with a flat hex rendering of `data` appended.
    ///
    /// Each byte renders as ` XX` after the formatted comment; an empty
    /// slice produces only the comment line.
    pub fn dump_buffer(&self, level: Level, data: &[u8], comment: fmt::Arguments<'_>) {
        if !self.eligible(level) {
            return;
        }
        let Some(_guard) = self.mutex.lock() else {
            return;
        };
        self.write_prefix(level);
        self.sink.write_fmt(comment);
        for byte in data {
            self.sink.write_fmt(format_args!(" {:02X}", byte));
        }
        self.sink.write_byte(b'\n');
    }

    /// Emit one record with a 16-byte-per-row hex+ASCII table of `data`.
    ///
    /// The comment line is followed by `ceil(len/16)` rows; positions past
    /// the end of `data` render as alignment padding. The whole table is a
    /// single atomic emission.
    pub fn dump_buffer_table(&self, level: Level, data: &[u8], comment: fmt::Arguments<'_>) {
        if !self.eligible(level) {
            return;
        }
        let Some(_guard) = self.mutex.lock() else {
            return;
        };
        self.write_prefix(level);
        self.sink.write_fmt(comment);
        self.sink.write_byte(b'\n');

        let rows = data.len().div_ceil(TABLE_ROW_LEN);
        for row in 0..rows {
            let base = row * TABLE_ROW_LEN;
            self.sink.write_fmt(format_args!("\t{:08X}  ", base));
            for i in 0..TABLE_ROW_LEN / 2 {
                self.write_table_byte(data, base + i);
            }
            self.sink.write_str(" ");
            for i in TABLE_ROW_LEN / 2..TABLE_ROW_LEN {
                self.write_table_byte(data, base + i);
            }
            self.sink.write_str(" ");
            for i in 0..TABLE_ROW_LEN {
                let cell = match data.get(base + i) {
                    Some(&b) if b == b' ' || b.is_ascii_graphic() => b,
                    _ => b' ',
                };
                self.sink.write_byte(cell);
            }
            self.sink.write_byte(b'\n');
        }
    }

    /// One hex cell: `XX ` in range, three-space placeholder past the end.
    fn write_table_byte(&self, data: &[u8], index: usize) {
        match data.get(index) {
            Some(byte) => self.sink.write_fmt(format_args!("{:02X} ", byte)),
            None => self.sink.write_str("   "),
        }
    }
}

/// Log a formatted record at an explicit level.
///
/// # Example
///
/// ```ignore
/// trace_log!(TRACE, Level::Warning, "lag {} ticks", lag);
/// ```
#[macro_export]
macro_rules! trace_log {
    ($trace:expr, $level:expr, $($arg:tt)*) => {
        $trace.log($level, format_args!($($arg)*))
    };
}

/// Log at DEBUG.
#[macro_export]
macro_rules! trace_debug {
    ($trace:expr, $($arg:tt)*) => {
        $crate::trace_log!($trace, $crate::Level::Debug, $($arg)*)
    };
}

/// Log at INFO.
#[macro_export]
macro_rules! trace_info {
    ($trace:expr, $($arg:tt)*) => {
        $crate::trace_log!($trace, $crate::Level::Info, $($arg)*)
    };
}

/// Log at WARNING.
#[macro_export]
macro_rules! trace_warn {
    ($trace:expr, $($arg:tt)*) => {
        $crate::trace_log!($trace, $crate::Level::Warning, $($arg)*)
    };
}

/// Log at ERROR.
#[macro_export]
macro_rules! trace_error {
    ($trace:expr, $($arg:tt)*) => {
        $crate::trace_log!($trace, $crate::Level::Error, $($arg)*)
    };
}

/// Log at CRITICAL.
#[macro_export]
macro_rules! trace_critical {
    ($trace:expr, $($arg:tt)*) => {
        $crate::trace_log!($trace, $crate::Level::Critical, $($arg)*)
    };
}

/// Flat hex dump of a byte slice with a formatted comment.
#[macro_export]
macro_rules! trace_dump {
    ($trace:expr, $level:expr, $data:expr, $($arg:tt)*) => {
        $trace.dump_buffer($level, $data, format_args!($($arg)*))
    };
}

/// Tabular hex+ASCII dump of a byte slice with a formatted comment.
#[macro_export]
macro_rules! trace_dump_table {
    ($trace:expr, $level:expr, $data:expr, $($arg:tt)*) => {
        $trace.dump_buffer_table($level, $data, format_args!($($arg)*))
    };
}
