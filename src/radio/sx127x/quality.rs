use super::{registers, Sx127x, Sx127xError};
use crate::radio::prelude::LoraQuality;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> LoraQuality for Sx127x<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type QualityErrorType = Sx127xError<SPI::Error, DO::Error>;

    /// The register holds the SNR in two's complement, in units of 0.25 dB.
    fn packet_snr(&mut self) -> Result<f32, Self::QualityErrorType> {
        self.spi_read(1, registers::PKT_SNR_VALUE)?;
        Ok((self._buf[1] as i8) as f32 / 4.0)
    }

    /// The raw register value is offset by 164 below 868 MHz and by 157 at
    /// and above it. The band is taken from the configured frequency.
    fn packet_rssi(&mut self) -> Result<i16, Self::QualityErrorType> {
        self.spi_read(1, registers::PKT_RSSI_VALUE)?;
        let offset = if self._frequency < 868.0 { 164 } else { 157 };
        Ok(self._buf[1] as i16 - offset)
    }
}
