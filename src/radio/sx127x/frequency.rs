use super::{registers, Sx127x, Sx127xError};
use crate::radio::prelude::LoraFrequency;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

/// Synthesizer step in Hz: 32 MHz crystal over a 2^19 divider.
pub(crate) const FREQ_STEP: f64 = 61.03515625;

impl<SPI, DO, DELAY> LoraFrequency for Sx127x<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type FrequencyErrorType = Sx127xError<SPI::Error, DO::Error>;

    /// The FRF value is `floor(mhz * 1e6 / 61.03515625)`, split MSB-first
    /// across the three frequency registers.
    ///
    /// The configured frequency is also cached to select the band-dependent
    /// offset used by [`packet_rssi()`](
    /// fn@crate::radio::prelude::LoraQuality::packet_rssi).
    fn set_frequency(&mut self, mhz: f32) -> Result<(), Self::FrequencyErrorType> {
        let frf = ((mhz as f64) * 1e6 / FREQ_STEP) as u32;
        self.spi_write_byte(registers::FRF_MSB, (frf >> 16) as u8)?;
        self.spi_write_byte(registers::FRF_MID, (frf >> 8) as u8)?;
        self.spi_write_byte(registers::FRF_LSB, frf as u8)?;
        self._frequency = mhz;
        Ok(())
    }

    fn get_frequency(&mut self) -> Result<f32, Self::FrequencyErrorType> {
        self.spi_read(1, registers::FRF_MSB)?;
        let mut frf = (self._buf[1] as u32) << 16;
        self.spi_read(1, registers::FRF_MID)?;
        frf |= (self._buf[1] as u32) << 8;
        self.spi_read(1, registers::FRF_LSB)?;
        frf |= self._buf[1] as u32;
        Ok(((frf as f64) * FREQ_STEP / 1e6) as f32)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{registers, LoraFrequency};
    use crate::{spi_test_expects, test::mk_radio};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn set_frequency() {
        // floor(915e6 / 61.03515625) = 915 * 16384 = 0xE4C000
        let spi_expectations = spi_test_expects![
            (vec![registers::FRF_MSB | 0x80u8, 0xE4u8], vec![0u8, 0u8]),
            (vec![registers::FRF_MID | 0x80u8, 0xC0u8], vec![0u8, 0u8]),
            (vec![registers::FRF_LSB | 0x80u8, 0x00u8], vec![0u8, 0u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut reset_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_frequency(915.0).unwrap();
        spi.done();
        reset_pin.done();
    }

    #[test]
    pub fn get_frequency() {
        let spi_expectations = spi_test_expects![
            // read back the 24-bit FRF split for 433.0 MHz
            (vec![registers::FRF_MSB, 0u8], vec![0u8, 0x6Cu8]),
            (vec![registers::FRF_MID, 0u8], vec![0u8, 0x40u8]),
            (vec![registers::FRF_LSB, 0u8], vec![0u8, 0x00u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut reset_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.get_frequency().unwrap(), 433.0);
        spi.done();
        reset_pin.done();
    }
}
