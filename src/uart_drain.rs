//! UART drain for up channel 0.
//!
//! When no debug probe is attached, a low-priority task moves channel-0
//! bytes out over a TX-only UART so trace output still reaches a serial
//! monitor via an external USB-UART adapter (CH340, CP2102, etc).

use esp_idf_svc::hal::gpio;
use esp_idf_svc::hal::peripheral::Peripheral;
use esp_idf_svc::hal::uart::{self, UartTxDriver};

use crate::CHANNEL0;

/// UART configuration for the drain.
pub struct UartDrainConfig {
    pub baud_rate: u32,
}

impl Default for UartDrainConfig {
    fn default() -> Self {
        Self { baud_rate: 115_200 }
    }
}

/// Initialize a TX-only UART for draining channel 0.
pub fn init_uart<'d>(
    uart: impl Peripheral<P = esp_idf_svc::hal::uart::UART1> + 'd,
    tx_pin: impl Peripheral<P = impl gpio::OutputPin> + 'd,
    config: &UartDrainConfig,
) -> Result<UartTxDriver<'d>, esp_idf_svc::sys::EspError> {
    let uart_config = uart::config::Config::default()
        .baudrate(esp_idf_svc::hal::units::Hertz(config.baud_rate));

    UartTxDriver::new(
        uart,
        tx_pin,
        Option::<gpio::AnyIOPin>::None, // CTS
        Option::<gpio::AnyIOPin>::None, // RTS
        &uart_config,
    )
}

/// Drain task body: channel 0 -> UART, forever.
///
/// Reports the dropped-byte counter roughly every 10 seconds.
pub fn drain_task(uart: &mut UartTxDriver<'_>) -> ! {
    const REPORT_INTERVAL_US: i64 = 10_000_000;

    let mut chunk = [0u8; 128];
    let mut last_report = 0i64;

    loop {
        let mut work_done = false;

        loop {
            let n = CHANNEL0.read(&mut chunk);
            if n == 0 {
                break;
            }
            let _ = uart.write(&chunk[..n]);
            work_done = true;
        }

        // SAFETY: esp_timer_get_time is always safe to call
        let now = unsafe { esp_idf_svc::sys::esp_timer_get_time() };
        if now - last_report > REPORT_INTERVAL_US {
            let dropped = CHANNEL0.dropped_bytes();
            if dropped > 0 {
                use core::fmt::Write;

                struct ChunkWriter<'a> {
                    buf: &'a mut [u8],
                    pos: usize,
                }
                impl Write for ChunkWriter<'_> {
                    fn write_str(&mut self, s: &str) -> core::fmt::Result {
                        let bytes = s.as_bytes();
                        let to_write = bytes.len().min(self.buf.len() - self.pos);
                        self.buf[self.pos..self.pos + to_write]
                            .copy_from_slice(&bytes[..to_write]);
                        self.pos += to_write;
                        Ok(())
                    }
                }

                let mut msg = [0u8; 64];
                let len = {
                    let mut w = ChunkWriter { buf: &mut msg, pos: 0 };
                    let _ = writeln!(w, "[WARN] channel 0 dropped {} bytes", dropped);
                    w.pos
                };
                let _ = uart.write(&msg[..len]);
                CHANNEL0.reset_dropped();
            }
            last_report = now;
        }

        // If no work, wait before checking again
        if !work_done {
            // SAFETY: plain task delay
            unsafe {
                esp_idf_svc::sys::vTaskDelay(10);
            }
        }
    }
}
