//! MPU6050 accelerometer over I2C
//!
//! Only the accelerometer is used. The device is configured for its most
//! sensitive range (±2 g, 16384 LSB/g) and read as raw counts.

use embedded_hal::i2c::I2c;
use smartcane_core::sensor::Acceleration;
use smartcane_core::traits::{MotionSensor, SensorError};

/// Default address (AD0 low)
pub const DEFAULT_ADDRESS: u8 = 0x68;
/// Alternate address (AD0 high)
pub const ALTERNATE_ADDRESS: u8 = 0x69;

/// Register map (subset)
mod reg {
    pub const GYRO_CONFIG: u8 = 0x1B;
    pub const ACCEL_CONFIG: u8 = 0x1C;
    pub const ACCEL_XOUT_H: u8 = 0x3B;
    pub const PWR_MGMT_1: u8 = 0x6B;
    pub const WHO_AM_I: u8 = 0x75;
}

/// PWR_MGMT_1: awake, clocked from the X gyro PLL
const CLOCK_PLL_XGYRO: u8 = 0x01;
/// ACCEL_CONFIG: ±2 g
const ACCEL_FS_2G: u8 = 0x00;
/// GYRO_CONFIG: ±250 °/s
const GYRO_FS_250: u8 = 0x00;
/// WHO_AM_I value, independent of AD0
const DEVICE_ID: u8 = 0x68;

/// MPU6050 driver
pub struct Mpu6050<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Mpu6050<I2C> {
    /// Create a driver at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    /// Create a driver at a specific address
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), SensorError> {
        self.i2c
            .write(self.address, &[register, value])
            .map_err(|_| SensorError::Bus)
    }

    fn read_registers(&mut self, start: u8, buf: &mut [u8]) -> Result<(), SensorError> {
        self.i2c
            .write_read(self.address, &[start], buf)
            .map_err(|_| SensorError::Bus)
    }
}

impl<I2C: I2c> MotionSensor for Mpu6050<I2C> {
    fn initialize(&mut self) -> Result<(), SensorError> {
        self.write_register(reg::PWR_MGMT_1, CLOCK_PLL_XGYRO)?;
        self.write_register(reg::ACCEL_CONFIG, ACCEL_FS_2G)?;
        self.write_register(reg::GYRO_CONFIG, GYRO_FS_250)
    }

    fn test_connection(&mut self) -> bool {
        let mut id = [0u8; 1];
        self.read_registers(reg::WHO_AM_I, &mut id).is_ok() && id[0] == DEVICE_ID
    }

    fn read_acceleration(&mut self) -> Result<Acceleration, SensorError> {
        let mut buf = [0u8; 6];
        self.read_registers(reg::ACCEL_XOUT_H, &mut buf)?;

        Ok(Acceleration::new(
            i16::from_be_bytes([buf[0], buf[1]]),
            i16::from_be_bytes([buf[2], buf[3]]),
            i16::from_be_bytes([buf[4], buf[5]]),
        ))
    }
}
