//! RTOS services the facility depends on: the scheduler tick count and a
//! blocking mutex with runtime create/destroy.
//!
//! Two ports exist. The FreeRTOS port (feature `esp32`) maps onto ESP-IDF
//! primitives; the host port backs tests and emulator runs with a settable
//! tick counter and a spin mutex.

#[cfg(feature = "esp32")]
mod freertos;
#[cfg(feature = "esp32")]
pub use freertos::{tick_count, TraceMutex, TraceMutexGuard};

#[cfg(not(feature = "esp32"))]
mod host;
#[cfg(not(feature = "esp32"))]
pub use host::{set_tick_count, tick_count, TraceMutex, TraceMutexGuard};
