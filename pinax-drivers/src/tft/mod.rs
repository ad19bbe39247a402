//! TFT panel transports
//!
//! SPI-attached color panels implementing the core pixel transport.

pub mod st7796;

pub use st7796::{Rotation, St7796, TftError};
