//! Board wiring
//!
//! | Function              | Pin   | Peripheral     |
//! |-----------------------|-------|----------------|
//! | Diagnostic console TX | GP0   | UART0          |
//! | I2C SDA (OLED, IMU)   | GP4   | I2C0           |
//! | I2C SCL (OLED, IMU)   | GP5   | I2C0           |
//! | Ranger trigger        | GP14  | GPIO out       |
//! | Ranger echo           | GP15  | GPIO in        |
//! | DHT data              | GP16  | GPIO open-drain|
//! | Alert button          | GP17  | GPIO in, pull-up |
//! | Alert LED             | GP18  | GPIO out       |
//! | Buzzer                | GP20  | PWM slice 2 A  |
//! | Light sensor          | GP26  | ADC0           |
//!
//! Pins are claimed by name from `embassy_rp::Peripherals` in `main`; the
//! constants below cover everything else that differs between builds.

use smartcane_drivers::environment::DhtKind;

/// Shared I2C bus clock (Hz)
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// MPU6050 address (AD0 tied low)
pub const MPU6050_ADDRESS: u8 = smartcane_drivers::motion::mpu6050::DEFAULT_ADDRESS;

/// Fitted climate sensor
pub const DHT_KIND: DhtKind = DhtKind::Dht11;

/// LED is wired between the pin and ground
pub const INDICATOR_ACTIVE_LOW: bool = false;

/// Diagnostic console baud rate
pub const CONSOLE_BAUD: u32 = 9_600;
