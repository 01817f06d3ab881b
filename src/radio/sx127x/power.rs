use super::{bit_fields::PaConfig, registers, Sx127x, Sx127xError};
use crate::{radio::prelude::LoraPower, types::OperatingMode};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> LoraPower for Sx127x<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PowerErrorType = Sx127xError<SPI::Error, DO::Error>;

    /// The specified `dbm` is clamped to the range [2, 17] encodable on the
    /// PA_BOOST output pin. The high-power +20 dBm option lives in the
    /// PA_DAC register and is not driven by this driver.
    fn set_tx_power(&mut self, dbm: u8) -> Result<(), Self::PowerErrorType> {
        let level = dbm.clamp(2, 17);
        let pa = PaConfig::new()
            .with_pa_boost(true)
            .with_output_power(level - 2);
        self.spi_write_byte(registers::PA_CONFIG, pa.into_bits())
    }

    fn standby(&mut self) -> Result<(), Self::PowerErrorType> {
        self.set_mode(OperatingMode::Standby)
    }

    fn sleep(&mut self) -> Result<(), Self::PowerErrorType> {
        self.set_mode(OperatingMode::Sleep)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{registers, LoraPower};
    use crate::{spi_test_expects, test::mk_radio, types::OperatingMode};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn set_tx_power() {
        let spi_expectations = spi_test_expects![
            // 17 dBm -> PA_BOOST | 15
            (vec![registers::PA_CONFIG | 0x80u8, 0x8Fu8], vec![0u8, 0u8]),
            // 20 dBm clamps to the 17 dBm encoding
            (vec![registers::PA_CONFIG | 0x80u8, 0x8Fu8], vec![0u8, 0u8]),
            // 0 dBm clamps to 2 dBm -> PA_BOOST | 0
            (vec![registers::PA_CONFIG | 0x80u8, 0x80u8], vec![0u8, 0u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut reset_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_tx_power(17).unwrap();
        radio.set_tx_power(20).unwrap();
        radio.set_tx_power(0).unwrap();
        spi.done();
        reset_pin.done();
    }

    #[test]
    pub fn standby_and_sleep() {
        let spi_expectations = spi_test_expects![
            (vec![registers::OP_MODE | 0x80u8, 0x81u8], vec![0u8, 0u8]),
            (vec![registers::OP_MODE | 0x80u8, 0x80u8], vec![0u8, 0u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut reset_pin) = (mocks.0, mocks.1, mocks.2);
        radio.standby().unwrap();
        assert_eq!(radio.mode(), OperatingMode::Standby);
        radio.sleep().unwrap();
        assert_eq!(radio.mode(), OperatingMode::Sleep);
        spi.done();
        reset_pin.done();
    }
}
