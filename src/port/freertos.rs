//! FreeRTOS port via ESP-IDF.
//!
//! The mutex is a FreeRTOS queue-type mutex so a blocked waiter benefits
//! from the kernel's priority inheritance. Handles are created at `init`
//! and deleted at `deinit`; the handle slot is an atomic pointer so the
//! create/destroy lifecycle needs no extra locking.

use core::ffi::c_void;
use core::ptr;
use core::sync::atomic::{AtomicPtr, Ordering};

use esp_idf_svc::sys;

// FreeRTOS macro constants not carried through bindgen.
const QUEUE_TYPE_MUTEX: u8 = 1; // queueQUEUE_TYPE_MUTEX
const QUEUE_SEND_TO_BACK: i32 = 0; // queueSEND_TO_BACK
const PORT_MAX_DELAY: u32 = 0xFFFF_FFFF; // portMAX_DELAY

/// Current scheduler tick count.
#[inline]
pub fn tick_count() -> u32 {
    // SAFETY: xTaskGetTickCount is always safe to call
    unsafe { sys::xTaskGetTickCount() }
}

/// Blocking mutex with runtime create/destroy, backed by a FreeRTOS mutex.
pub struct TraceMutex {
    handle: AtomicPtr<c_void>,
}

impl TraceMutex {
    pub const fn new() -> Self {
        Self {
            handle: AtomicPtr::new(ptr::null_mut()),
        }
    }

    /// Create the kernel mutex. Returns `true` when the mutex exists
    /// afterwards, `false` when the kernel could not allocate one.
    pub fn create(&self) -> bool {
        if !self.handle.load(Ordering::Acquire).is_null() {
            return true;
        }
        // SAFETY: plain FreeRTOS object creation; NULL signals failure.
        let handle = unsafe { sys::xQueueCreateMutex(QUEUE_TYPE_MUTEX) };
        if handle.is_null() {
            return false;
        }
        self.handle.store(handle.cast(), Ordering::Release);
        true
    }

    /// Delete the kernel mutex. Must not be called while a guard is live.
    pub fn destroy(&self) {
        let handle = self.handle.swap(ptr::null_mut(), Ordering::AcqRel);
        if !handle.is_null() {
            // SAFETY: handle came from xQueueCreateMutex and was detached
            // from the slot above, so no new lock can race the delete.
            unsafe { sys::vQueueDelete(handle.cast()) };
        }
    }

    /// Acquire the mutex, blocking indefinitely.
    ///
    /// Returns `None` when the mutex has not been created.
    pub fn lock(&self) -> Option<TraceMutexGuard<'_>> {
        let handle = self.handle.load(Ordering::Acquire);
        if handle.is_null() {
            return None;
        }
        // SAFETY: valid handle; unbounded wait always returns with the
        // mutex held.
        unsafe { sys::xQueueSemaphoreTake(handle.cast(), PORT_MAX_DELAY) };
        Some(TraceMutexGuard {
            handle,
            _mutex: core::marker::PhantomData,
        })
    }
}

/// Guard releasing the mutex on drop.
pub struct TraceMutexGuard<'a> {
    handle: *mut c_void,
    _mutex: core::marker::PhantomData<&'a TraceMutex>,
}

impl Drop for TraceMutexGuard<'_> {
    fn drop(&mut self) {
        // SAFETY: the guard holds the mutex taken in `lock`.
        unsafe {
            sys::xQueueGenericSend(
                self.handle.cast(),
                ptr::null(),
                0,
                QUEUE_SEND_TO_BACK,
            );
        }
    }
}
