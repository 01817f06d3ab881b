/// A module encapsulating register offsets for the SX127x (LoRa page).
pub mod registers {
    pub const FIFO: u8 = 0x00;
    pub const OP_MODE: u8 = 0x01;
    pub const FRF_MSB: u8 = 0x06;
    pub const FRF_MID: u8 = 0x07;
    pub const FRF_LSB: u8 = 0x08;
    pub const PA_CONFIG: u8 = 0x09;
    pub const LNA: u8 = 0x0C;
    pub const FIFO_ADDR_PTR: u8 = 0x0D;
    pub const FIFO_TX_BASE_ADDR: u8 = 0x0E;
    pub const FIFO_RX_BASE_ADDR: u8 = 0x0F;
    pub const FIFO_RX_CURRENT_ADDR: u8 = 0x10;
    pub const IRQ_FLAGS: u8 = 0x12;
    pub const RX_NB_BYTES: u8 = 0x13;
    pub const PKT_SNR_VALUE: u8 = 0x19;
    pub const PKT_RSSI_VALUE: u8 = 0x1A;
    pub const PAYLOAD_LENGTH: u8 = 0x22;
    pub const MODEM_CONFIG_3: u8 = 0x26;
    pub const VERSION: u8 = 0x42;
}

/// A private module to encapsulate bit mnemonics.
pub mod mnemonics {
    /// Set on the address byte of a register write; clear for a read.
    pub const SPI_WNR: u8 = 0x80;

    /// OP_MODE bit 7: LoRa (long range) modem selection. Rides along on
    /// every mode write; only latches while the radio sleeps.
    pub const LONG_RANGE_MODE: u8 = 0x80;

    /// LNA register bits [1:0]: high-frequency LNA boost current.
    pub const LNA_BOOST_HF: u8 = 0x03;

    /// MODEM_CONFIG_3 bit 2: automatic gain control.
    pub const AGC_AUTO_ON: u8 = 0x04;

    /// Fixed silicon revision reported by the VERSION register.
    pub const VERSION_ID: u8 = 0x12;
}
