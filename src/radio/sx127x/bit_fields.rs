use bitfield_struct::bitfield;

/// The IRQ_FLAGS register. Write-1-to-clear: writing back the bits last
/// read clears exactly those bits.
#[bitfield(u8, order = Msb)]
pub struct IrqFlags {
    pub rx_timeout: bool,
    pub rx_done: bool,
    pub crc_error: bool,
    pub valid_header: bool,
    pub tx_done: bool,
    pub cad_done: bool,
    pub fhss_change_channel: bool,
    pub cad_detected: bool,
}

/// The PA_CONFIG register. With `pa_boost` set, output power in dBm is
/// `output_power + 2` on the PA_BOOST pin.
#[bitfield(u8, order = Msb)]
pub struct PaConfig {
    pub pa_boost: bool,

    #[bits(3)]
    pub max_power: u8,

    #[bits(4)]
    pub output_power: u8,
}
