//! Photoresistor light sensor
//!
//! A voltage divider on an ADC channel. The raw conversion is rescaled to
//! the 10-bit range (0-1023) the light threshold is expressed in, whatever
//! the converter's native resolution.

use smartcane_core::traits::{LightSensor, SensorError};
use smartcane_hal::AnalogInput;

/// Output resolution of [`LightSensor::read_light_level`]
const LEVEL_BITS: u8 = 10;

/// Light sensor on an analog input
pub struct AdcLightSensor<A> {
    adc: A,
}

impl<A: AnalogInput> AdcLightSensor<A> {
    pub fn new(adc: A) -> Self {
        Self { adc }
    }

    /// Rescale a raw sample to 10 bits
    fn scale(raw: u16) -> u16 {
        if A::RESOLUTION_BITS >= LEVEL_BITS {
            raw >> (A::RESOLUTION_BITS - LEVEL_BITS)
        } else {
            raw << (LEVEL_BITS - A::RESOLUTION_BITS)
        }
    }
}

impl<A: AnalogInput> LightSensor for AdcLightSensor<A> {
    fn read_light_level(&mut self) -> Result<u16, SensorError> {
        let raw = self.adc.read_raw().map_err(|_| SensorError::Bus)?;
        Ok(Self::scale(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartcane_hal::AdcError;

    struct MockAdc<const BITS: u8> {
        value: Result<u16, AdcError>,
    }

    impl<const BITS: u8> AnalogInput for MockAdc<BITS> {
        const RESOLUTION_BITS: u8 = BITS;

        fn read_raw(&mut self) -> Result<u16, AdcError> {
            self.value
        }
    }

    #[test]
    fn test_twelve_bit_scaled_down() {
        let mut sensor = AdcLightSensor::new(MockAdc::<12> { value: Ok(4095) });
        assert_eq!(sensor.read_light_level(), Ok(1023));

        sensor.adc.value = Ok(1600);
        assert_eq!(sensor.read_light_level(), Ok(400));

        sensor.adc.value = Ok(0);
        assert_eq!(sensor.read_light_level(), Ok(0));
    }

    #[test]
    fn test_ten_bit_passthrough() {
        let mut sensor = AdcLightSensor::new(MockAdc::<10> { value: Ok(600) });
        assert_eq!(sensor.read_light_level(), Ok(600));
    }

    #[test]
    fn test_eight_bit_scaled_up() {
        let mut sensor = AdcLightSensor::new(MockAdc::<8> { value: Ok(255) });
        assert_eq!(sensor.read_light_level(), Ok(1020));
    }

    #[test]
    fn test_conversion_error() {
        let mut sensor = AdcLightSensor::new(MockAdc::<12> {
            value: Err(AdcError::Conversion),
        });
        assert_eq!(sensor.read_light_level(), Err(SensorError::Bus));
    }
}
