use super::{mnemonics, registers, Sx127x, Sx127xError};
use crate::{
    radio::{
        prelude::{LoraFrequency, LoraInit, LoraPower},
        LoraConfig,
    },
    types::OperatingMode,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> Sx127x<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Pulse the radio's RESET line: low, settle, high, settle.
    ///
    /// Must complete before any register access. The 50 ms holds are a
    /// generous margin over the datasheet minimums.
    pub fn reset(&mut self) -> Result<(), Sx127xError<SPI::Error, DO::Error>> {
        self.reset_pin.set_low().map_err(Sx127xError::Gpo)?;
        self._delay_impl.delay_ms(50);
        self.reset_pin.set_high().map_err(Sx127xError::Gpo)?;
        self._delay_impl.delay_ms(50);
        Ok(())
    }

    /// Verify chip identity by reading the VERSION register.
    ///
    /// Any other silicon (or a wiring fault reading as 0x00/0xFF) fails with
    /// [`Sx127xError::ChipNotDetected`] carrying the observed value.
    pub fn probe(&mut self) -> Result<(), Sx127xError<SPI::Error, DO::Error>> {
        self.spi_read(1, registers::VERSION)?;
        if self._buf[1] != mnemonics::VERSION_ID {
            return Err(Sx127xError::ChipNotDetected(self._buf[1]));
        }
        Ok(())
    }
}

impl<SPI, DO, DELAY> LoraInit for Sx127x<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type InitErrorType = Sx127xError<SPI::Error, DO::Error>;

    /// Initialize the radio's hardware using the [`SpiDevice`] and
    /// [`OutputPin`] given to [`Sx127x::new()`].
    fn init(&mut self) -> Result<(), Self::InitErrorType> {
        self.reset()?;
        self.probe()?;
        self.with_config(&LoraConfig::default())
    }

    fn with_config(&mut self, config: &LoraConfig) -> Result<(), Self::InitErrorType> {
        // The LoRa modem selection only latches while the radio sleeps.
        self.set_mode(OperatingMode::Sleep)?;

        // TX and RX stage from the same FIFO, both from offset 0. An unread
        // received packet does not survive a subsequent send().
        self.spi_write_byte(registers::FIFO_TX_BASE_ADDR, 0)?;
        self.spi_write_byte(registers::FIFO_RX_BASE_ADDR, 0)?;

        // The LNA register also holds the gain selection, so OR the boost
        // bits into whatever is there.
        self.spi_read(1, registers::LNA)?;
        let lna = self._buf[1] | mnemonics::LNA_BOOST_HF;
        self.spi_write_byte(registers::LNA, lna)?;

        self.spi_write_byte(registers::MODEM_CONFIG_3, mnemonics::AGC_AUTO_ON)?;

        self.set_frequency(config.frequency())?;
        self.set_tx_power(config.tx_power())?;
        self.tx_timeout = config.tx_timeout();

        self.set_mode(OperatingMode::Standby)
    }
}
