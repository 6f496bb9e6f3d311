//! Sweep task
//!
//! One task owns the whole scanner: it pumps the scan engine one event
//! per iteration, reports every distance reading on the defmt log (the
//! scanner's diagnostic output), flushes the frame to the panel and
//! paces the servo.

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_rp::peripherals::SPI0;
use embassy_rp::pwm::PwmOutput;
use embassy_rp::spi::{Async, Spi};
use embassy_time::{Delay, Instant, Timer};

use sonarscope_core::scanner::ScanEngine;
use sonarscope_drivers::canvas::EgCanvas;
use sonarscope_drivers::hcsr04::{Hcsr04, MicrosClock};
use sonarscope_drivers::servo::PwmServo;

use crate::st7735::St7735;

/// Pause between sweep steps in milliseconds
///
/// Gives the servo time to cover one degree before the next ranging
/// pulse fires.
pub const STEP_INTERVAL_MS: u64 = 10;

/// Microsecond clock backed by the embassy time driver
pub struct UptimeClock;

impl MicrosClock for UptimeClock {
    fn now_us(&mut self) -> u64 {
        Instant::now().as_micros()
    }
}

/// The board's concrete sensor/servo/display stack
pub type Sensor = Hcsr04<Output<'static>, Input<'static>, UptimeClock, Delay>;
pub type Servo = PwmServo<PwmOutput<'static>>;
pub type Display = St7735<Spi<'static, SPI0, Async>>;
pub type Engine = ScanEngine<Sensor, Servo, EgCanvas<Display>>;

/// Sweep task - runs the eternal measure/move/draw cycle
#[embassy_executor::task]
pub async fn sweep_task(mut engine: Engine) -> ! {
    info!("Sweep task started");

    loop {
        match engine.tick() {
            Ok(Some(reading)) => match reading.distance_cm {
                Some(cm) => info!("distance: {} cm at {} deg", cm, reading.display_deg),
                None => warn!("echo timeout at {} deg", reading.display_deg),
            },
            Ok(None) => {
                // Half-sweep boundary; the background was just redrawn.
            }
            Err(e) => {
                error!("scan failed: {}", e);
                halt().await;
            }
        }

        if engine.canvas_mut().target_mut().flush().await.is_err() {
            error!("display flush failed");
            halt().await;
        }

        Timer::after_millis(STEP_INTERVAL_MS).await;
    }
}

/// Park the task after a fatal hardware error
///
/// The servo stops receiving new commands and the display keeps its
/// last frame.
async fn halt() -> ! {
    loop {
        Timer::after_secs(1).await;
    }
}
