//! DHT11 / DHT22 single-wire temperature and humidity sensor
//!
//! The host pulls the open-drain line low to request a reading, releases it,
//! and the sensor answers with a low/high handshake followed by 40 bits.
//! Each bit is a ~50 µs low followed by a high pulse whose width encodes
//! the value: ~27 µs for a zero, ~70 µs for a one.
//!
//! Data bytes: humidity high, humidity low, temperature high, temperature
//! low, checksum (low 8 bits of the sum of the first four).
//!
//! The sensors cannot be sampled faster than once per second (DHT11) or
//! every two seconds (DHT22). A transaction's result, success or failure,
//! is cached for that long so the separate temperature and humidity reads
//! of one cycle share a single transaction.

use embedded_hal::digital::{InputPin, OutputPin};
use smartcane_core::traits::{EnvironmentSensor, SensorError};
use smartcane_hal::Timebase;

/// Line release before the sensor responds (µs)
const RELEASE_US: u32 = 40;

/// Longest any single level may last before the transaction is abandoned (µs)
const EDGE_TIMEOUT_US: u64 = 1_000;

/// High pulses longer than this are a one bit (µs)
const ONE_THRESHOLD_US: u64 = 40;

/// Sensor variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DhtKind {
    /// DHT11: integer-ish readings, 0-50 °C
    Dht11,
    /// DHT22 / AM2302: 0.1 resolution, -40-80 °C
    Dht22,
}

impl DhtKind {
    /// Start signal low time (µs)
    pub const fn start_low_us(self) -> u32 {
        match self {
            DhtKind::Dht11 => 20_000,
            DhtKind::Dht22 => 1_100,
        }
    }

    /// Minimum time between transactions (ms)
    pub const fn min_interval_ms(self) -> u64 {
        match self {
            DhtKind::Dht11 => 1_000,
            DhtKind::Dht22 => 2_000,
        }
    }

    /// Decode a checksummed 5-byte frame
    pub fn decode(self, data: [u8; 5]) -> Result<DhtReading, SensorError> {
        let sum = data[..4].iter().fold(0u8, |acc, b| acc.wrapping_add(*b));
        if sum != data[4] {
            return Err(SensorError::InvalidReading);
        }

        let reading = match self {
            DhtKind::Dht11 => {
                let humidity_pct = f32::from(data[0]) + f32::from(data[1]) * 0.1;
                let mut temperature_c = f32::from(data[2]) + f32::from(data[3] & 0x0F) * 0.1;
                if data[3] & 0x80 != 0 {
                    temperature_c = -temperature_c;
                }
                DhtReading {
                    temperature_c,
                    humidity_pct,
                }
            }
            DhtKind::Dht22 => {
                let humidity_pct = f32::from(u16::from_be_bytes([data[0], data[1]])) / 10.0;
                let raw = u16::from_be_bytes([data[2] & 0x7F, data[3]]);
                let mut temperature_c = f32::from(raw) / 10.0;
                // Sign-magnitude, not two's complement
                if data[2] & 0x80 != 0 {
                    temperature_c = -temperature_c;
                }
                DhtReading {
                    temperature_c,
                    humidity_pct,
                }
            }
        };

        Ok(reading)
    }
}

/// One decoded measurement
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DhtReading {
    pub temperature_c: f32,
    pub humidity_pct: f32,
}

/// DHT driver on an open-drain pin
pub struct Dht<P, T> {
    pin: P,
    timebase: T,
    kind: DhtKind,
    /// Last transaction and when it finished (ms)
    cache: Option<(u64, Result<DhtReading, SensorError>)>,
}

impl<P, T> Dht<P, T>
where
    P: InputPin + OutputPin,
    T: Timebase,
{
    /// Create a new driver; the line is released (idle high)
    pub fn new(mut pin: P, timebase: T, kind: DhtKind) -> Self {
        let _ = pin.set_high();
        Self {
            pin,
            timebase,
            kind,
            cache: None,
        }
    }

    /// Get the sensor variant
    pub fn kind(&self) -> DhtKind {
        self.kind
    }

    /// Latest reading, running a new transaction only when the cache is stale
    pub fn reading(&mut self) -> Result<DhtReading, SensorError> {
        let now_ms = self.timebase.now_ms();
        if let Some((at_ms, result)) = self.cache {
            if now_ms.saturating_sub(at_ms) < self.kind.min_interval_ms() {
                return result;
            }
        }

        let result = self.transact();
        self.cache = Some((self.timebase.now_ms(), result));
        result
    }

    fn transact(&mut self) -> Result<DhtReading, SensorError> {
        self.send_start()?;

        // Handshake: sensor pulls low, then high, then low for the first bit
        self.wait_for(false)?;
        self.wait_for(true)?;
        self.wait_for(false)?;

        let mut data = [0u8; 5];
        for bit in 0..40 {
            self.wait_for(true)?;
            let rise = self.timebase.now_us();
            self.wait_for(false)?;

            if self.timebase.elapsed_us(rise) > ONE_THRESHOLD_US {
                data[bit / 8] |= 0x80 >> (bit % 8);
            }
        }

        self.kind.decode(data)
    }

    fn send_start(&mut self) -> Result<(), SensorError> {
        self.pin.set_low().map_err(|_| SensorError::Bus)?;
        self.timebase.delay_us(self.kind.start_low_us());
        self.pin.set_high().map_err(|_| SensorError::Bus)?;
        self.timebase.delay_us(RELEASE_US);
        Ok(())
    }

    fn wait_for(&mut self, high: bool) -> Result<(), SensorError> {
        let start = self.timebase.now_us();
        loop {
            if self.pin.is_high().map_err(|_| SensorError::Bus)? == high {
                return Ok(());
            }
            if self.timebase.elapsed_us(start) > EDGE_TIMEOUT_US {
                return Err(SensorError::Timeout);
            }
        }
    }
}

impl<P, T> EnvironmentSensor for Dht<P, T>
where
    P: InputPin + OutputPin,
    T: Timebase,
{
    fn read_temperature(&mut self) -> Result<f32, SensorError> {
        self.reading().map(|r| r.temperature_c)
    }

    fn read_humidity(&mut self) -> Result<f32, SensorError> {
        self.reading().map(|r| r.humidity_pct)
    }
}
