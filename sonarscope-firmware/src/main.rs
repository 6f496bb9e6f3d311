//! Sonarscope - Ultrasonic Radar Firmware
//!
//! Main firmware binary for the RP2040-based sweep scanner. A hobby
//! servo pans an HC-SR04 ultrasonic sensor back and forth while a
//! 160x128 ST7735 panel draws the classic radar picture: range arcs,
//! a green sweep line and a red echo line wherever something sits
//! inside the detection threshold.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_time::{Delay, Timer};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use sonarscope_core::scanner::ScanEngine;
use sonarscope_core::sweep::SWEEP_MAX_DEG;
use sonarscope_core::traits::SweepActuator;
use sonarscope_drivers::canvas::EgCanvas;
use sonarscope_drivers::hcsr04::Hcsr04;
use sonarscope_drivers::servo::{PwmServo, PERIOD_US};

mod st7735;
mod tasks;

use st7735::{St7735, FRAME_BYTES};
use tasks::UptimeClock;

// Static cell for the display framebuffer (must live forever)
static FRAME: StaticCell<[u8; FRAME_BYTES]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Sonarscope firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Let the sensor and the panel settle after power-up
    Timer::after_secs(1).await;

    // Servo PWM: divide the 125 MHz system clock down to a 1 MHz tick
    // and wrap every 20000 ticks, giving a 50 Hz frame where one duty
    // count equals one microsecond of pulse width.
    let mut pwm_config = PwmConfig::default();
    pwm_config.divider = 125.into();
    pwm_config.top = (PERIOD_US - 1) as u16;
    let pwm = Pwm::new_output_a(p.PWM_SLICE1, p.PIN_2, pwm_config);
    let (pwm_a, _) = pwm.split();
    let mut servo = PwmServo::new(unwrap!(pwm_a, "PWM channel A missing"));

    // Park the horn at the sweep start so the first half-sweep begins
    // from a known position
    unwrap!(servo.set_angle(SWEEP_MAX_DEG));
    info!("Servo initialized");

    // HC-SR04 on GPIO6 (trigger) and GPIO5 (echo)
    let trig = Output::new(p.PIN_6, Level::Low);
    let echo = Input::new(p.PIN_5, Pull::None);
    let sensor = Hcsr04::new(trig, echo, UptimeClock, Delay);
    info!("Ultrasonic sensor initialized");

    // ST7735 on SPI0: CLK=GPIO18, MOSI=GPIO19, DC=GPIO9, CS=GPIO10,
    // RST=GPIO8. The panel is write-only so MISO stays free.
    let mut spi_config = SpiConfig::default();
    spi_config.frequency = 32_000_000;
    let spi = Spi::new_txonly(p.SPI0, p.PIN_18, p.PIN_19, p.DMA_CH0, spi_config);

    let dc = Output::new(p.PIN_9, Level::Low);
    let cs = Output::new(p.PIN_10, Level::High);
    let rst = Output::new(p.PIN_8, Level::High);

    let frame = FRAME.init([0u8; FRAME_BYTES]);
    let mut display = St7735::new(spi, dc, cs, rst, frame);
    unwrap!(display.init().await);
    info!("Display initialized");

    let engine = ScanEngine::new(sensor, servo, EgCanvas::new(display));

    spawner.spawn(tasks::sweep_task(engine)).unwrap();
    info!("Scanner running");
}
