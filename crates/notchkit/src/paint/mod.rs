//! Color model and hex string conversions.

pub mod color;
pub mod error;

pub use color::Color;
pub use error::HexColorError;
