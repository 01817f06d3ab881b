use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

pub(crate) mod bit_fields;
mod constants;
mod frequency;
mod init;
mod power;
mod quality;
mod radio;
pub use constants::{mnemonics, registers};

use crate::types::OperatingMode;

/// A collection of error types to describe hardware malfunctions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sx127xError<SPI, DO> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error.
    Gpo(DO),
    /// The VERSION register did not read back the chip's fixed identity.
    /// Carries the observed value for diagnostics.
    ChipNotDetected(u8),
    /// Transmit-done was not observed within [`Sx127x::tx_timeout`].
    TxTimeout,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl<SPI, DO> defmt::Format for Sx127xError<SPI, DO> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Sx127xError::Spi(_) => defmt::write!(fmt, "Spi"),
            Sx127xError::Gpo(_) => defmt::write!(fmt, "Gpo"),
            Sx127xError::ChipNotDetected(version) => {
                defmt::write!(fmt, "ChipNotDetected({=u8:#x})", version)
            }
            Sx127xError::TxTimeout => defmt::write!(fmt, "TxTimeout"),
        }
    }
}

/// This struct implements the [`Lora*` traits](mod@crate::radio::prelude)
/// for the SX127x transceiver.
///
/// The driver is synchronous and assumes it is the sole owner of the bus
/// device and the reset line. The chip-select line belongs to the
/// [`SpiDevice`] implementation; each register transaction maps to one
/// select/deselect bracket.
pub struct Sx127x<SPI, DO, DELAY> {
    /// Upper bound, in milliseconds, on the wait for transmit completion in
    /// [`send()`](fn@crate::radio::prelude::LoraRadio::send).
    ///
    /// Set this to at least the air time of the largest payload at the
    /// configured modem settings. [`with_config()`](
    /// fn@crate::radio::prelude::LoraInit::with_config) overwrites this with
    /// [`LoraConfig::tx_timeout()`](fn@crate::radio::LoraConfig::tx_timeout).
    pub tx_timeout: u32,
    _spi: SPI,
    /// The RESET pin for the radio.
    ///
    /// This is only exposed for advanced manipulation of the reset line.
    /// It is strongly recommended to use [`Sx127x::reset()`], which
    /// guarantees the required settling intervals.
    pub reset_pin: DO,
    _delay_impl: DELAY,
    _buf: [u8; 256],
    _mode: OperatingMode,
    _frequency: f32,
}

impl<SPI, DO, DELAY> Sx127x<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Instantiate an [`Sx127x`] object for use on the specified
    /// `spi` bus with the given `reset_pin`.
    ///
    /// The radio's NSS pin (aka Chip Select pin) shall be defined
    /// when instantiating the [`SpiDevice`](trait@embedded_hal::spi::SpiDevice)
    /// object (passed to the `spi` parameter). No bus traffic occurs until
    /// [`init()`](fn@crate::radio::prelude::LoraInit::init).
    pub fn new(reset_pin: DO, spi: SPI, delay_impl: DELAY) -> Sx127x<SPI, DO, DELAY> {
        Sx127x {
            tx_timeout: 1000,
            _spi: spi,
            reset_pin,
            _delay_impl: delay_impl,
            _buf: [0u8; 256],
            _mode: OperatingMode::Sleep,
            _frequency: 433.0,
        }
    }

    /// The operating mode last written by this driver.
    ///
    /// The radio leaves Tx mode on its own when a transmission completes;
    /// this cache tracks driver-commanded transitions only.
    pub fn mode(&self) -> OperatingMode {
        self._mode
    }

    fn spi_transfer(&mut self, len: usize) -> Result<(), Sx127xError<SPI::Error, DO::Error>> {
        self._spi
            .transfer_in_place(&mut self._buf[..len])
            .map_err(Sx127xError::Spi)
    }

    /// Read `len` bytes from `reg` into `self._buf[1..]`.
    ///
    /// The FIFO register does not auto-increment the address, so a multi-byte
    /// read drains `len` sequential FIFO bytes in one chip-select bracket.
    fn spi_read(&mut self, len: u8, reg: u8) -> Result<(), Sx127xError<SPI::Error, DO::Error>> {
        self._buf[0] = reg & !mnemonics::SPI_WNR;
        // deterministic dummy bytes on MOSI while the response clocks in
        self._buf[1..=len as usize].fill(0);
        self.spi_transfer(len as usize + 1)
    }

    fn spi_write_byte(
        &mut self,
        reg: u8,
        byte: u8,
    ) -> Result<(), Sx127xError<SPI::Error, DO::Error>> {
        self._buf[0] = reg | mnemonics::SPI_WNR;
        self._buf[1] = byte;
        self.spi_transfer(2)
    }

    fn spi_write_buf(
        &mut self,
        reg: u8,
        buf: &[u8],
    ) -> Result<(), Sx127xError<SPI::Error, DO::Error>> {
        self._buf[0] = reg | mnemonics::SPI_WNR;
        let buf_len = buf.len().min(255);
        self._buf[1..=buf_len].copy_from_slice(&buf[..buf_len]);
        self.spi_transfer(buf_len + 1)
    }

    /// Every mode write goes through here so the long-range bit is never
    /// dropped once the radio leaves reset.
    pub(crate) fn set_mode(
        &mut self,
        mode: OperatingMode,
    ) -> Result<(), Sx127xError<SPI::Error, DO::Error>> {
        self.spi_write_byte(
            registers::OP_MODE,
            mnemonics::LONG_RANGE_MODE | mode.into_bits(),
        )?;
        self._mode = mode;
        Ok(())
    }
}
