//! RTT-style up channel: a single-writer byte ring buffer.
//!
//! Channel 0 is the trace facility's transport. The writer side is only ever
//! driven while the facility holds its mutex; the reader side is the debug
//! probe or the UART drain task. When a write does not fit, the whole write
//! is skipped and accounted in a dropped-bytes counter (RTT "no-block skip"
//! behaviour) — records are sized well below the buffer, so this only
//! happens when the reader has stalled.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicU32, Ordering};

use crate::sink::Sink;

/// Default channel buffer size in bytes.
pub const CHANNEL_BUFFER_SIZE: usize = 1024;

/// Up-channel byte ring buffer (single producer, single consumer).
pub struct UpChannel<const N: usize = CHANNEL_BUFFER_SIZE> {
    buf: UnsafeCell<[u8; N]>,
    write_idx: AtomicU32,
    read_idx: AtomicU32,
    dropped: AtomicU32,
}

// SAFETY: one writer (the trace facility, serialized by its mutex), one
// reader (probe/drain task). Index handoff via Acquire/Release atomics.
unsafe impl<const N: usize> Sync for UpChannel<N> {}
unsafe impl<const N: usize> Send for UpChannel<N> {}

impl<const N: usize> UpChannel<N> {
    const MASK: usize = N - 1;

    /// Create a new empty channel.
    pub const fn new() -> Self {
        assert!(N.is_power_of_two(), "Channel buffer size must be power of 2");

        Self {
            buf: UnsafeCell::new([0u8; N]),
            write_idx: AtomicU32::new(0),
            read_idx: AtomicU32::new(0),
            dropped: AtomicU32::new(0),
        }
    }

    /// Write `bytes` to the channel (producer side).
    ///
    /// Returns `false` and drops the whole write if it does not fit.
    pub fn write_bytes(&self, bytes: &[u8]) -> bool {
        let len = bytes.len();
        if len == 0 {
            return true;
        }

        let write = self.write_idx.load(Ordering::Relaxed);
        let read = self.read_idx.load(Ordering::Acquire);
        let used = write.wrapping_sub(read) as usize;

        if len > N - used {
            self.dropped.fetch_add(len as u32, Ordering::Relaxed);
            return false;
        }

        // SAFETY: single producer; the region [write, write+len) is unused
        // per the check above, so the reader never touches it concurrently.
        unsafe {
            let buf = &mut *self.buf.get();
            let start = (write as usize) & Self::MASK;
            let first = len.min(N - start);
            buf[start..start + first].copy_from_slice(&bytes[..first]);
            buf[..len - first].copy_from_slice(&bytes[first..]);
        }

        self.write_idx.store(write.wrapping_add(len as u32), Ordering::Release);
        true
    }

    /// Read pending bytes into `out` (consumer side).
    ///
    /// Returns the number of bytes copied, 0 when the channel is empty.
    pub fn read(&self, out: &mut [u8]) -> usize {
        let read = self.read_idx.load(Ordering::Relaxed);
        let write = self.write_idx.load(Ordering::Acquire);
        let len = (write.wrapping_sub(read) as usize).min(out.len());
        if len == 0 {
            return 0;
        }

        // SAFETY: single consumer; [read, read+len) is fully written per the
        // Acquire load of write_idx.
        unsafe {
            let buf = &*self.buf.get();
            let start = (read as usize) & Self::MASK;
            let first = len.min(N - start);
            out[..first].copy_from_slice(&buf[start..start + first]);
            out[first..len].copy_from_slice(&buf[..len - first]);
        }

        self.read_idx.store(read.wrapping_add(len as u32), Ordering::Release);
        len
    }

    /// Number of bytes waiting to be read.
    #[inline]
    pub fn pending(&self) -> usize {
        let read = self.read_idx.load(Ordering::Relaxed);
        let write = self.write_idx.load(Ordering::Acquire);
        write.wrapping_sub(read) as usize
    }

    /// Total bytes dropped because the channel was full.
    #[inline]
    pub fn dropped_bytes(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Reset the dropped counter (e.g. after reporting).
    #[inline]
    pub fn reset_dropped(&self) {
        self.dropped.store(0, Ordering::Relaxed);
    }
}

impl<const N: usize> Default for UpChannel<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Sink for UpChannel<N> {
    fn write_str(&self, s: &str) {
        self.write_bytes(s.as_bytes());
    }

    fn write_byte(&self, byte: u8) {
        self.write_bytes(&[byte]);
    }
}
