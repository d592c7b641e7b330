//! trace-fw - firmware demo for the trace facility
//!
//! Brings the facility up, spawns two periodic demo tasks logging at
//! different rates, then drains channel 0 to UART from the main task.

#![no_std]
#![no_main]

use core::ffi::c_void;
use core::ptr;

use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::sys as esp_idf_sys;

use rtt_trace::uart_drain::{self, UartDrainConfig};
use rtt_trace::{trace_debug, trace_error, trace_info, Level, TRACE};

const DEMO_TASK_STACK: u32 = 4096;
const DEMO_TASK_PRIO: u32 = 1;

#[no_mangle]
fn main() {
    // Initialize ESP-IDF
    esp_idf_sys::link_patches();

    TRACE.init();
    TRACE.set_level(Level::Debug);
    trace_info!(TRACE, "main start, {}", env!("VERSION_STRING"));

    // SAFETY: task entries are plain fns with no captured state
    unsafe {
        let ok = esp_idf_sys::xTaskCreate(
            Some(slow_task),
            b"slow\0".as_ptr().cast(),
            DEMO_TASK_STACK,
            ptr::null_mut(),
            DEMO_TASK_PRIO,
            ptr::null_mut(),
        );
        if ok != 1 {
            // != pdPASS
            trace_error!(TRACE, "slow task create failed");
        }
        let ok = esp_idf_sys::xTaskCreate(
            Some(fast_task),
            b"fast\0".as_ptr().cast(),
            DEMO_TASK_STACK,
            ptr::null_mut(),
            DEMO_TASK_PRIO,
            ptr::null_mut(),
        );
        if ok != 1 {
            trace_error!(TRACE, "fast task create failed");
        }
    }

    // Main task becomes the channel 0 -> UART drain.
    let peripherals = match Peripherals::take() {
        Ok(p) => p,
        Err(_) => {
            trace_error!(TRACE, "peripherals unavailable, idling");
            loop {
                // SAFETY: plain task delay
                unsafe { esp_idf_sys::vTaskDelay(1000) };
            }
        }
    };

    match uart_drain::init_uart(
        peripherals.uart1,
        peripherals.pins.gpio6,
        &UartDrainConfig::default(),
    ) {
        Ok(mut uart) => uart_drain::drain_task(&mut uart),
        Err(_) => {
            trace_error!(TRACE, "uart init failed, probe-only output");
            loop {
                // SAFETY: plain task delay
                unsafe { esp_idf_sys::vTaskDelay(1000) };
            }
        }
    }
}

/// Demo producer, 500-tick period.
extern "C" fn slow_task(_arg: *mut c_void) {
    trace_info!(TRACE, "slow task start");

    let mut value = false;
    loop {
        trace_info!(TRACE, "slow tick, value={}", value);
        value = !value;
        // SAFETY: plain task delay
        unsafe { esp_idf_sys::vTaskDelay(500) };
    }
}

/// Demo producer, 100-tick period, exercises the dump entry points.
extern "C" fn fast_task(_arg: *mut c_void) {
    trace_info!(TRACE, "fast task start");

    let mut counter: u32 = 0;
    loop {
        trace_debug!(TRACE, "fast tick {}", counter);
        if counter % 50 == 0 {
            let snapshot = counter.to_be_bytes();
            rtt_trace::trace_dump!(TRACE, Level::Debug, &snapshot, "counter bytes");
        }
        counter = counter.wrapping_add(1);
        // SAFETY: plain task delay
        unsafe { esp_idf_sys::vTaskDelay(100) };
    }
}
