use std::fmt;
use std::fmt::Formatter;

/// Errors when decoding a hex color string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    /// A character that is not a hex digit.
    ///
    /// `position` counts from the first digit, after the optional `#`.
    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },

    /// Digit count is neither 6 (rgb) nor 8 (rgba).
    #[error("expected 6 or 8 hex digits, found {digits}")]
    UnsupportedLength { digits: usize },
}

impl HexError {
    /// Whether the value is well-formed hex that only has a length we do not emit code for.
    pub fn is_unsupported_length(&self) -> bool {
        matches!(self, Self::UnsupportedLength { .. })
    }
}

/// Normalized channel values decoded from a hex color, each in `0.0..=1.0`.
///
/// Values keep full precision, [`fmt::Display`] rounds them to two decimals the way they appear in
/// generated code.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChannelTuple {
    /// Opaque color, decoded from `#rrggbb`.
    Rgb(f64, f64, f64),

    /// Color with transparency, decoded from `#rrggbbaa`.
    Rgba(f64, f64, f64, f64),
}

impl ChannelTuple {
    /// Count of channels, 3 or 4.
    pub fn channel_count(&self) -> usize {
        match self {
            Self::Rgb(..) => 3,
            Self::Rgba(..) => 4,
        }
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::Rgba(..))
    }

    /// Channel values in red, green, blue, alpha order.
    pub fn values(&self) -> Vec<f64> {
        match *self {
            Self::Rgb(r, g, b) => vec![r, g, b],
            Self::Rgba(r, g, b, a) => vec![r, g, b, a],
        }
    }
}

impl fmt::Display for ChannelTuple {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (idx, value) in self.values().into_iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value:.2}")?;
        }
        Ok(())
    }
}

/// Decode hex color strings like the following:
/// - `#1e3319` (with leading hashtag),
/// - `94bc8a` (without),
/// - `#80808080` (with alpha).
///
/// Both lower and upper case is fine. Each byte pair is divided by 255.
pub fn decode_hex(hex: &str) -> Result<ChannelTuple, HexError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);

    let nibbles = digits
        .chars()
        .enumerate()
        .map(|(position, digit)| {
            digit
                .to_digit(16)
                .ok_or(HexError::InvalidDigit { digit, position })
        })
        .collect::<Result<Vec<u32>, _>>()?;

    if nibbles.len() % 2 != 0 {
        return Err(HexError::UnsupportedLength {
            digits: nibbles.len(),
        });
    }

    let channels = nibbles
        .chunks_exact(2)
        .map(|pair| f64::from(pair[0] * 16 + pair[1]) / 255.0)
        .collect::<Vec<_>>();

    match channels.as_slice() {
        &[r, g, b] => Ok(ChannelTuple::Rgb(r, g, b)),
        &[r, g, b, a] => Ok(ChannelTuple::Rgba(r, g, b, a)),
        _ => Err(HexError::UnsupportedLength {
            digits: nibbles.len(),
        }),
    }
}
