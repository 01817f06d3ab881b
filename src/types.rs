//! This module defines types used by various traits.
//! These types are meant to be agnostic of the trait implementation.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

/// The operating mode of the radio's state machine.
///
/// Every mode is entered with the chip's long-range (LoRa) modem selected;
/// the driver never writes a mode without that bit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OperatingMode {
    /// Lowest power state. Register access is still possible, but the
    /// oscillators are off. The LoRa modem selection only latches here.
    Sleep,
    /// Oscillators running, radio idle. Required for FIFO staging.
    Standby,
    /// Actively transmitting the staged FIFO contents.
    /// The radio falls back to [`OperatingMode::Standby`] when done.
    Tx,
    /// Continuously listening; stays in this mode across receptions
    /// until explicitly changed.
    RxContinuous,
    /// Listening for a single packet, then back to standby.
    RxSingle,
}

impl OperatingMode {
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            OperatingMode::Sleep => 0,
            OperatingMode::Standby => 1,
            OperatingMode::Tx => 3,
            OperatingMode::RxContinuous => 5,
            OperatingMode::RxSingle => 6,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for OperatingMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            OperatingMode::Sleep => defmt::write!(fmt, "Sleep"),
            OperatingMode::Standby => defmt::write!(fmt, "Standby"),
            OperatingMode::Tx => defmt::write!(fmt, "Tx"),
            OperatingMode::RxContinuous => defmt::write!(fmt, "RxContinuous"),
            OperatingMode::RxSingle => defmt::write!(fmt, "RxSingle"),
        }
    }
}

impl Display for OperatingMode {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            OperatingMode::Sleep => write!(f, "Sleep"),
            OperatingMode::Standby => write!(f, "Standby"),
            OperatingMode::Tx => write!(f, "Tx"),
            OperatingMode::RxContinuous => write!(f, "RxContinuous"),
            OperatingMode::RxSingle => write!(f, "RxSingle"),
        }
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::OperatingMode;
    use std::{format, string::String};

    #[test]
    fn mode_bits() {
        assert_eq!(OperatingMode::Sleep.into_bits(), 0);
        assert_eq!(OperatingMode::Standby.into_bits(), 1);
        assert_eq!(OperatingMode::Tx.into_bits(), 3);
        assert_eq!(OperatingMode::RxContinuous.into_bits(), 5);
        assert_eq!(OperatingMode::RxSingle.into_bits(), 6);
    }

    #[test]
    fn mode_display() {
        assert_eq!(
            format!("{}", OperatingMode::RxContinuous),
            String::from("RxContinuous")
        );
    }
}
