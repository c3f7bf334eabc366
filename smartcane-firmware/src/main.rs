//! Smart Cane - Wearable Assistive Monitor Firmware
//!
//! Main firmware binary for RP2040-based canes. Samples the ranger,
//! climate, motion and light sensors twice a second and raises an
//! LED/buzzer/display/serial alert whenever a reading leaves its safe band
//! or the wearer presses the alert button.

#![no_std]
#![no_main]

use core::cell::RefCell;

use defmt::*;
use embassy_embedded_hal::shared_bus::blocking::i2c::I2cDevice;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Input, Level, Output, OutputOpenDrain, Pull};
use embassy_rp::i2c::{self, Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_rp::pwm::{self, Pwm};
use embassy_rp::uart::{self, UartTx};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use ssd1306::I2CDisplayInterface;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use smartcane_core::alert::AlertPresenter;
use smartcane_core::config::{Thresholds, Timing};
use smartcane_core::monitor::{Monitor, StepOutcome};
use smartcane_core::sensor::Sensors;
use smartcane_drivers::display::OledDisplay;
use smartcane_drivers::environment::Dht;
use smartcane_drivers::light::AdcLightSensor;
use smartcane_drivers::motion::Mpu6050;
use smartcane_drivers::output::{ActiveLowButton, GpioIndicator};
use smartcane_drivers::ranging::Hcsr04;
use smartcane_hal_rp2040::{AdcInput, EmbassyClock, PwmTone, SerialConsole};

mod board;

type I2cBus = Mutex<NoopRawMutex, RefCell<I2c<'static, I2C0, Blocking>>>;

// Display and IMU share I2C0 for the life of the program
static I2C_BUS: StaticCell<I2cBus> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Smart cane firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Diagnostic console
    let mut uart_config = uart::Config::default();
    uart_config.baudrate = board::CONSOLE_BAUD;
    let console = SerialConsole::new(UartTx::new_blocking(p.UART0, p.PIN_0, uart_config));

    // Shared I2C bus
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = board::I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_5, p.PIN_4, i2c_config);
    let i2c_bus = I2C_BUS.init(Mutex::new(RefCell::new(i2c)));

    // Sensors
    let ranger = Hcsr04::new(
        Output::new(p.PIN_14, Level::Low),
        Input::new(p.PIN_15, Pull::None),
        EmbassyClock::new(),
    );
    let climate = Dht::new(
        OutputOpenDrain::new(p.PIN_16, Level::High),
        EmbassyClock::new(),
        board::DHT_KIND,
    );
    let motion = Mpu6050::with_address(I2cDevice::new(i2c_bus), board::MPU6050_ADDRESS);
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let light = AdcLightSensor::new(AdcInput::new(adc, Channel::new_pin(p.PIN_26, Pull::None)));
    let sensors = Sensors::new(ranger, climate, motion, light);

    // Outputs
    let indicator = GpioIndicator::new(
        Output::new(p.PIN_18, Level::Low),
        board::INDICATOR_ACTIVE_LOW,
    );
    let tone = PwmTone::new(Pwm::new_output_a(
        p.PWM_SLICE2,
        p.PIN_20,
        pwm::Config::default(),
    ));
    let display = OledDisplay::new(I2CDisplayInterface::new(I2cDevice::new(i2c_bus)));
    let presenter = AlertPresenter::new(indicator, tone, display, console, Timing::DEFAULT);

    let button = ActiveLowButton::new(Input::new(p.PIN_17, Pull::Up));

    let mut monitor = Monitor::new(
        sensors,
        button,
        presenter,
        EmbassyClock::new(),
        Thresholds::DEFAULT,
        Timing::DEFAULT,
    );

    match monitor.startup() {
        Ok(true) => info!("Motion sensor connected"),
        Ok(false) => warn!("Motion sensor not responding, continuing without it"),
        Err(e) => {
            error!("Startup failed: {:?}", e);
            halt();
        }
    }

    info!("Monitoring");
    loop {
        match monitor.step() {
            StepOutcome::Skipped => {}
            StepOutcome::Clear => trace!("All readings in range"),
            StepOutcome::Alerted {
                reasons,
                display_error,
            } => {
                info!("Alert raised: {}", reasons);
                if let Some(e) = display_error {
                    warn!("Display error during alert: {:?}", e);
                }
            }
        }
    }
}

/// Stop for good; only a reset recovers
fn halt() -> ! {
    loop {
        cortex_m::asm::wfi();
    }
}
