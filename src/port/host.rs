//! Host port: settable tick counter and a spin mutex.
//!
//! Used by host tests and emulator builds. The tick counter stands in for
//! the scheduler tick; the embedder (or a test) advances it explicitly.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

static TICKS: AtomicU32 = AtomicU32::new(0);

/// Current tick count.
#[inline]
pub fn tick_count() -> u32 {
    TICKS.load(Ordering::Relaxed)
}

/// Set the tick count (host/emulator hook).
#[inline]
pub fn set_tick_count(ticks: u32) {
    TICKS.store(ticks, Ordering::Relaxed);
}

/// Blocking mutex with runtime create/destroy.
///
/// Spin-based: lock waits indefinitely, matching the unbounded FreeRTOS
/// semaphore take on the target. Creation cannot fail on the host.
pub struct TraceMutex {
    created: AtomicBool,
    locked: AtomicBool,
}

impl TraceMutex {
    pub const fn new() -> Self {
        Self {
            created: AtomicBool::new(false),
            locked: AtomicBool::new(false),
        }
    }

    /// Create the mutex. Returns `true` when the mutex exists afterwards.
    pub fn create(&self) -> bool {
        self.locked.store(false, Ordering::Release);
        self.created.store(true, Ordering::Release);
        true
    }

    /// Destroy the mutex. Must not be called while a guard is live.
    pub fn destroy(&self) {
        self.created.store(false, Ordering::Release);
    }

    /// Acquire the mutex, blocking indefinitely.
    ///
    /// Returns `None` when the mutex has not been created.
    pub fn lock(&self) -> Option<TraceMutexGuard<'_>> {
        if !self.created.load(Ordering::Acquire) {
            return None;
        }
        while self
            .locked
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            core::hint::spin_loop();
        }
        Some(TraceMutexGuard { mutex: self })
    }
}

/// Guard releasing the mutex on drop.
pub struct TraceMutexGuard<'a> {
    mutex: &'a TraceMutex,
}

impl Drop for TraceMutexGuard<'_> {
    fn drop(&mut self) {
        self.mutex.locked.store(false, Ordering::Release);
    }
}
