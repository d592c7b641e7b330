//! Sink transport boundary.
//!
//! The facility renders records onto a byte sink it does not own. The sink
//! is not assumed to be thread-safe; the facility's mutex serializes every
//! call made while a record is being emitted.

use core::fmt;

/// A byte sink the trace facility writes rendered records to.
///
/// Methods take `&self`: implementations are expected to use interior
/// mutability and rely on the facility for exclusion.
pub trait Sink {
    /// One-time transport bring-up, called from `Trace::init`.
    fn init(&self) {}

    /// Write a string verbatim.
    fn write_str(&self, s: &str);

    /// Write a single raw byte.
    fn write_byte(&self, byte: u8);

    /// Write a formatted message.
    fn write_fmt(&self, args: fmt::Arguments<'_>) {
        struct Adapter<'a, S: ?Sized>(&'a S);

        impl<S: Sink + ?Sized> fmt::Write for Adapter<'_, S> {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                self.0.write_str(s);
                Ok(())
            }
        }

        let _ = fmt::write(&mut Adapter(self), args);
    }
}
