//! RGBA colors built from packed hex values, and flat darkening.

use serde::Serialize;

use crate::CoreError;

/// A color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

/// A color as stored by its color model. Grayscale colors carry a single
/// white level instead of three channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgb(Rgba),
    Gray { white: f64, alpha: f64 },
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Color::Rgb(rgba)
    }
}

impl Rgba {
    pub fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque color from `0xRRGGBB`. Bits above the low 24 are ignored.
    pub fn from_hex(value: u32) -> Self {
        Self {
            red: f64::from((value & 0xFF0000) >> 16) / 255.0,
            green: f64::from((value & 0x00FF00) >> 8) / 255.0,
            blue: f64::from(value & 0x0000FF) / 255.0,
            alpha: 1.0,
        }
    }

    /// Parses `RRGGBB`, `#RRGGBB` or `0xRRGGBB` (case-insensitive).
    pub fn parse_hex(text: &str) -> Result<Self, CoreError> {
        let trimmed = text.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CoreError::invalid_argument(
                "color",
                format!("'{}' is not a 6-digit hex color", text),
            ));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|e| CoreError::invalid_argument("color", e.to_string()))?;
        Ok(Self::from_hex(value))
    }

    /// `#rrggbb`, ignoring alpha.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel_byte(self.red),
            channel_byte(self.green),
            channel_byte(self.blue)
        )
    }
}

fn channel_byte(component: f64) -> u8 {
    (component.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn lower(component: f64, amount: f64) -> f64 {
    (component - amount).max(0.0)
}

/// Subtracts `amount` from every color channel, clamping at zero. Alpha is
/// kept as is. Gray colors come back as RGB with equal channels.
pub fn darken(color: impl Into<Color>, amount: f64) -> Rgba {
    match color.into() {
        Color::Rgb(rgba) => Rgba {
            red: lower(rgba.red, amount),
            green: lower(rgba.green, amount),
            blue: lower(rgba.blue, amount),
            alpha: rgba.alpha,
        },
        Color::Gray { white, alpha } => {
            let level = lower(white, amount);
            Rgba::new(level, level, level, alpha)
        }
    }
}
