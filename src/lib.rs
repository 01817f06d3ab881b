#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`Sx127x::new()`](fn@crate::radio::Sx127x::new)
//! - [`Sx127x::init()`](radio/struct.Sx127x.html#method.init)
//! - [`Sx127x::with_config()`](radio/struct.Sx127x.html#method.with_config)
//! - [`Sx127x::send()`](radio/struct.Sx127x.html#method.send)
//! - [`Sx127x::as_rx()`](radio/struct.Sx127x.html#method.as_rx)
//! - [`Sx127x::is_rx()`](radio/struct.Sx127x.html#method.is_rx)
//! - [`Sx127x::available()`](radio/struct.Sx127x.html#method.available)
//! - [`Sx127x::read()`](radio/struct.Sx127x.html#method.read)
//!
//! ## Configuration API
//!
//! - [`Sx127x::set_frequency()`](radio/struct.Sx127x.html#method.set_frequency)
//! - [`Sx127x::get_frequency()`](radio/struct.Sx127x.html#method.get_frequency)
//! - [`Sx127x::set_tx_power()`](radio/struct.Sx127x.html#method.set_tx_power)
//! - [`Sx127x::standby()`](radio/struct.Sx127x.html#method.standby)
//! - [`Sx127x::sleep()`](radio/struct.Sx127x.html#method.sleep)
//! - [`Sx127x::tx_timeout`](value@crate::radio::Sx127x::tx_timeout)
//!
//! ## Telemetry API
//!
//! - [`Sx127x::packet_snr()`](radio/struct.Sx127x.html#method.packet_snr)
//! - [`Sx127x::packet_rssi()`](radio/struct.Sx127x.html#method.packet_rssi)
//!
#![no_std]

pub mod irq;
mod types;
pub use types::OperatingMode;
pub mod radio;

#[cfg(test)]
mod test {
    use crate::radio::Sx127x;
    use embedded_hal_mock::eh1::{
        delay::NoopDelay,
        digital::{Mock as PinMock, Transaction as PinTransaction},
        spi::{Mock as SpiMock, Transaction as SpiTransaction},
    };

    /// Takes an indefinite repetition of a tuple of 2 vectors: `(expected_data, response_data)`
    /// and generates an array of `SpiTransaction`s.
    ///
    /// NOTE: This macro is only used to generate code in unit tests (for this crate only).
    #[macro_export]
    macro_rules! spi_test_expects {
        ($( ($expected:expr , $response:expr $(,)? ) , ) + ) => {
            [
                $(
                    SpiTransaction::transaction_start(),
                    SpiTransaction::transfer_in_place($expected, $response),
                    SpiTransaction::transaction_end(),
                )*
            ]
        }
    }

    /// A tuple struct to encapsulate objects used to mock [`Sx127x`].
    pub struct MockRadio(
        pub Sx127x<SpiMock<u8>, PinMock, NoopDelay>,
        pub SpiMock<u8>,
        pub PinMock,
    );

    /// Create mock objects using the given expectations.
    ///
    /// The `reset_expectations` parameter describes the RESET pin activity;
    /// the `spi_expectations` parameter describes bus traffic (each
    /// transaction is one chip-select bracket).
    pub fn mk_radio(
        reset_expectations: &[PinTransaction],
        spi_expectations: &[SpiTransaction<u8>],
    ) -> MockRadio {
        let spi = SpiMock::new(spi_expectations);
        let reset_pin = PinMock::new(reset_expectations);
        let delay_impl = NoopDelay;
        let radio = Sx127x::new(reset_pin.clone(), spi.clone(), delay_impl);
        MockRadio(radio, spi, reset_pin)
    }
}
