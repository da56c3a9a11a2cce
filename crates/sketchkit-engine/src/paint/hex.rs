use std::fmt;
use std::str::FromStr;

use super::{Color, ColorMode};

/// Error returned when a packed hex color string is malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorParseError {
    pub input: String,
    pub message: String,
}

impl ColorParseError {
    fn new(input: &str, message: impl Into<String>) -> Self {
        Self { input: input.to_owned(), message: message.into() }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color {:?}: {}", self.input, self.message)
    }
}

impl std::error::Error for ColorParseError {}

impl Color {
    /// Parses `rrggbb` or `rrggbbaa`, with optional surrounding whitespace and an
    /// optional leading `#`. The result is an RGB-mode color; alpha defaults to 255.
    pub fn from_hex(input: &str) -> Result<Color, ColorParseError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::new(input, "expected only hex digits"));
        }
        if digits.len() != 6 && digits.len() != 8 {
            return Err(ColorParseError::new(
                input,
                format!("expected #rrggbb or #rrggbbaa, got {} digits", digits.len()),
            ));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map(f64::from)
                .map_err(|e| ColorParseError::new(input, e.to_string()))
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 255.0 };

        Ok(Color::new(channel(0)?, channel(2)?, channel(4)?, alpha, ColorMode::Rgb))
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        let a = Color::from_hex("#FF8000").unwrap();
        let b: Color = " ff8000 ".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_array_rgb(), [255.0, 128.0, 0.0, 255.0]);
    }

    #[test]
    fn parses_alpha_suffix() {
        let c = Color::from_hex("#00000080").unwrap();
        assert_eq!(c.alpha(), 128.0);
    }

    #[test]
    fn rejects_wrong_length() {
        let err = Color::from_hex("#fff").unwrap_err();
        assert!(err.message.contains("3 digits"));
    }

    #[test]
    fn rejects_non_hex() {
        assert!(Color::from_hex("#gg0000").is_err());
    }

    #[test]
    fn rejects_multibyte_input_without_panicking() {
        assert!(Color::from_hex("#ééé").is_err());
    }
}
