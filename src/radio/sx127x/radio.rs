use super::{bit_fields::IrqFlags, registers, Sx127x, Sx127xError};
use crate::{
    radio::prelude::{LoraPower, LoraRadio},
    types::OperatingMode,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

/// Interval between IRQ-flag polls while waiting for transmit completion.
const TX_POLL_INTERVAL_MS: u32 = 10;

impl<SPI, DO, DELAY> LoraRadio for Sx127x<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type RadioErrorType = Sx127xError<SPI::Error, DO::Error>;

    /// See [`LoraRadio::send()`] for implementation-agnostic detail.
    ///
    /// The payload is staged at FIFO offset 0, which is also the receive
    /// base offset. An unread received packet is overwritten by this call;
    /// drain pending receptions with [`Sx127x::read()`] before sending.
    ///
    /// On success exactly the TxDone flag is cleared. If TxDone is not
    /// observed within [`Sx127x::tx_timeout`], returns
    /// [`Sx127xError::TxTimeout`] with the flag left uncleared.
    fn send(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType> {
        let len = buf.len().min(255);
        self.standby()?;
        self.spi_write_byte(registers::FIFO_ADDR_PTR, 0)?;
        self.spi_write_byte(registers::PAYLOAD_LENGTH, len as u8)?;
        self.spi_write_buf(registers::FIFO, &buf[..len])?;
        self.set_mode(OperatingMode::Tx)?;

        // The radio latches TxDone when the air time completes and falls
        // back to standby on its own.
        let mut remaining_ms = self.tx_timeout;
        loop {
            self.spi_read(1, registers::IRQ_FLAGS)?;
            if IrqFlags::from_bits(self._buf[1]).tx_done() {
                break;
            }
            if remaining_ms < TX_POLL_INTERVAL_MS {
                return Err(Sx127xError::TxTimeout);
            }
            remaining_ms -= TX_POLL_INTERVAL_MS;
            self._delay_impl.delay_ms(TX_POLL_INTERVAL_MS);
        }
        self.spi_write_byte(
            registers::IRQ_FLAGS,
            IrqFlags::new().with_tx_done(true).into_bits(),
        )
    }

    fn as_rx(&mut self) -> Result<(), Self::RadioErrorType> {
        self.set_mode(OperatingMode::RxContinuous)
    }

    fn is_rx(&self) -> bool {
        self._mode == OperatingMode::RxContinuous
    }

    /// See [`LoraRadio::available()`] for implementation-agnostic detail.
    ///
    /// Write-1-to-clear: echoing the observed value back clears RxDone,
    /// CrcError, and any other concurrently latched bits in one pass. A
    /// CRC failure reports `false`; its stale payload stays in the FIFO
    /// with no discard step and is clobbered by the next reception.
    fn available(&mut self) -> Result<bool, Self::RadioErrorType> {
        self.spi_read(1, registers::IRQ_FLAGS)?;
        let flags = IrqFlags::from_bits(self._buf[1]);
        self.spi_write_byte(registers::IRQ_FLAGS, flags.into_bits())?;
        Ok(flags.rx_done() && !flags.crc_error())
    }

    /// See [`LoraRadio::read()`] for implementation-agnostic detail.
    ///
    /// The FIFO pointer is first moved to the hardware-reported current
    /// receive address, then the whole payload is drained in one burst.
    fn read(&mut self, buf: &mut [u8]) -> Result<u8, Self::RadioErrorType> {
        self.spi_read(1, registers::FIFO_RX_CURRENT_ADDR)?;
        let current_addr = self._buf[1];
        self.spi_write_byte(registers::FIFO_ADDR_PTR, current_addr)?;
        self.spi_read(1, registers::RX_NB_BYTES)?;
        let len = (self._buf[1] as usize).min(buf.len());
        if len == 0 {
            return Ok(0);
        }
        self.spi_read(len as u8, registers::FIFO)?;
        buf[..len].copy_from_slice(&self._buf[1..=len]);
        Ok(len as u8)
    }
}
