//! This module defines the generic traits that may
//! need to be imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```ignore
//! use sx127x::radio::prelude::*;
//! ```

use super::LoraConfig;

/// A trait to represent initialization and lifecycle management
/// of a LoRa transceiver.
pub trait LoraInit {
    type InitErrorType;

    /// Bring the radio out of reset, verify its identity, and apply the
    /// default [`LoraConfig`].
    ///
    /// Fails with a chip-not-detected condition when the version register
    /// does not read back the expected identity; no further register access
    /// is performed after that failure.
    fn init(&mut self) -> Result<(), Self::InitErrorType>;

    /// Apply a [`LoraConfig`], leaving the radio in standby.
    ///
    /// May be called again at any time to retune a running radio, but not
    /// while a transmission is in flight.
    fn with_config(&mut self, config: &LoraConfig) -> Result<(), Self::InitErrorType>;
}

/// A trait to represent packet I/O for a LoRa transceiver.
pub trait LoraRadio {
    type RadioErrorType;

    /// Transmit `buf` (up to 255 bytes; longer input is truncated) and block
    /// until the radio reports completion.
    ///
    /// The wait is bounded; see
    /// [`Sx127x::tx_timeout`](value@crate::radio::Sx127x::tx_timeout).
    fn send(&mut self, buf: &[u8]) -> Result<(), Self::RadioErrorType>;

    /// Enter continuous receive mode. The mode persists across receptions
    /// until explicitly changed.
    fn as_rx(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Is the radio in continuous receive mode (per the cached mode state)?
    fn is_rx(&self) -> bool;

    /// Did a packet arrive with a passing CRC?
    ///
    /// Reads the IRQ flags once and clears every bit that was observed set.
    /// A reception with a failing CRC reports `false` ("no packet").
    fn available(&mut self) -> Result<bool, Self::RadioErrorType>;

    /// Fetch the last received payload into `buf`, returning the number of
    /// bytes written (clamped to `buf.len()`).
    fn read(&mut self, buf: &mut [u8]) -> Result<u8, Self::RadioErrorType>;
}

/// A trait to represent carrier frequency selection
/// for a LoRa transceiver.
pub trait LoraFrequency {
    type FrequencyErrorType;

    /// Tune the carrier to `mhz`. Must not be called while a transmission
    /// is in flight.
    fn set_frequency(&mut self, mhz: f32) -> Result<(), Self::FrequencyErrorType>;

    /// Read the tuned carrier frequency back from the radio, in MHz.
    fn get_frequency(&mut self) -> Result<f32, Self::FrequencyErrorType>;
}

/// A trait to represent output power and power-state management
/// for a LoRa transceiver.
pub trait LoraPower {
    type PowerErrorType;

    /// Set the transmit power in dBm on the PA_BOOST output path.
    fn set_tx_power(&mut self, dbm: u8) -> Result<(), Self::PowerErrorType>;

    /// Idle the radio with oscillators running.
    fn standby(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Put the radio in its lowest power state.
    fn sleep(&mut self) -> Result<(), Self::PowerErrorType>;
}

/// A trait to represent link-quality telemetry captured with the last
/// received packet.
///
/// Both values are overwritten by the next reception.
pub trait LoraQuality {
    type QualityErrorType;

    /// Signal-to-noise ratio of the last received packet, in dB.
    fn packet_snr(&mut self) -> Result<f32, Self::QualityErrorType>;

    /// Received signal strength of the last received packet, in dBm.
    fn packet_rssi(&mut self) -> Result<i16, Self::QualityErrorType>;
}
