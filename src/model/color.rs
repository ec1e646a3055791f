//! RGB color value with channel validation

use super::errors::AlbumError;
use std::fmt;

/// Lowest accepted channel value
pub const CHANNEL_MIN: f64 = 0.0;

/// Highest accepted channel value
pub const CHANNEL_MAX: f64 = 255.0;

/// An RGB color whose channels always lie in `[0, 255]`
///
/// Channels are stored as `f64` so that scripts may use fractional values;
/// renderers truncate them with [`Color::to_rgb8`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Color {
    /// Create a color, rejecting any channel outside `[0, 255]`
    pub fn new(r: f64, g: f64, b: f64) -> Result<Self, AlbumError> {
        validate_channels(r, g, b)?;
        Ok(Color { r, g, b })
    }

    /// Replace all three channels at once
    ///
    /// Nothing is written unless every channel is valid.
    pub fn set(&mut self, r: f64, g: f64, b: f64) -> Result<(), AlbumError> {
        validate_channels(r, g, b)?;
        self.r = r;
        self.g = g;
        self.b = b;
        Ok(())
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    /// Channels truncated to bytes, as drawn by the renderers
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (self.r as u8, self.g as u8, self.b as u8)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1}, {:.1})", self.r, self.g, self.b)
    }
}

fn validate_channels(r: f64, g: f64, b: f64) -> Result<(), AlbumError> {
    for (label, value) in [("red", r), ("green", g), ("blue", b)] {
        // NaN fails the range check too
        if !(CHANNEL_MIN..=CHANNEL_MAX).contains(&value) {
            return Err(AlbumError::validation(format!(
                "{} channel {} is outside [0, 255]",
                label, value
            )));
        }
    }
    Ok(())
}
