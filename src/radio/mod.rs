mod config;
pub mod prelude;
mod sx127x;

pub use config::LoraConfig;
pub use sx127x::{registers, Sx127x, Sx127xError};
