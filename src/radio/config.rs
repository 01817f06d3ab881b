/// An object to configure the radio.
///
/// This struct follows a builder pattern. Start from the
/// [`LoraConfig::default()`] constructor, then override fields accordingly.
/// ```ignore
/// let config = LoraConfig::new().with_frequency(868.1).with_tx_power(14);
/// ```
///
/// Both link partners must use the same frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoraConfig {
    frequency: f32,
    tx_power: u8,
    tx_timeout: u32,
}

impl Default for LoraConfig {
    /// Instantiate a [`LoraConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`LoraConfig::frequency()`] | `433.0` MHz |
    /// | [`LoraConfig::tx_power()`] | `17` dBm |
    /// | [`LoraConfig::tx_timeout()`] | `1000` ms |
    fn default() -> Self {
        Self::new()
    }
}

impl LoraConfig {
    /// Same defaults as [`LoraConfig::default()`], usable in `const` context.
    pub const fn new() -> Self {
        Self {
            frequency: 433.0,
            tx_power: 17,
            tx_timeout: 1000,
        }
    }

    /// Set the carrier frequency in MHz.
    pub fn with_frequency(mut self, mhz: f32) -> Self {
        self.frequency = mhz;
        self
    }

    /// The configured carrier frequency in MHz.
    pub const fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Set the transmit power in dBm (PA_BOOST output path).
    ///
    /// See [`set_tx_power()`](crate::radio::Sx127x::set_tx_power) for the
    /// supported domain.
    pub fn with_tx_power(mut self, dbm: u8) -> Self {
        self.tx_power = dbm;
        self
    }

    /// The configured transmit power in dBm.
    pub const fn tx_power(&self) -> u8 {
        self.tx_power
    }

    /// Set the upper bound, in milliseconds, on the wait for transmit
    /// completion in [`send()`](crate::radio::Sx127x::send).
    pub fn with_tx_timeout(mut self, ms: u32) -> Self {
        self.tx_timeout = ms;
        self
    }

    /// The configured transmit-completion timeout in milliseconds.
    pub const fn tx_timeout(&self) -> u32 {
        self.tx_timeout
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    use super::LoraConfig;

    #[test]
    fn builder() {
        let config = LoraConfig::default()
            .with_frequency(915.0)
            .with_tx_power(14)
            .with_tx_timeout(250);
        assert_eq!(config.frequency(), 915.0);
        assert_eq!(config.tx_power(), 14);
        assert_eq!(config.tx_timeout(), 250);
    }

    #[test]
    fn defaults() {
        let config = LoraConfig::new();
        assert_eq!(config, LoraConfig::default());
        assert_eq!(config.frequency(), 433.0);
        assert_eq!(config.tx_power(), 17);
        assert_eq!(config.tx_timeout(), 1000);
    }
}
