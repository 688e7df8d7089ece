//! Utility module with xterm256's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An out-of-bounds error.
///
/// This error indicates an index value that is out of bounds for some range.
/// The ranges used by this crate include:
///
///   * `0..=255` for index values of the entire palette;
///   * `0..=5` for coordinates of [`EmbeddedRgb`](crate::termco::EmbeddedRgb);
///   * `0..=15` for index values of [`AnsiColor`](crate::termco::AnsiColor);
///   * `0..=23` for the gray levels of [`GrayGradient`](crate::termco::GrayGradient);
///   * `16..=231` for index values of [`EmbeddedRgb`](crate::termco::EmbeddedRgb);
///   * `232..=255` for index values of [`GrayGradient`](crate::termco::GrayGradient).
///
/// The value is signed so that negative palette indices can be reported
/// faithfully.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: i64,
    pub expected: std::ops::RangeInclusive<i64>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new<V: Into<i64>>(value: V, expected: std::ops::RangeInclusive<i64>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl std::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

#[cfg(feature = "pyffi")]
impl From<OutOfBoundsError> for PyErr {
    fn from(value: OutOfBoundsError) -> Self {
        pyo3::exceptions::PyIndexError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An invalid color.
///
/// [`Rgb`](crate::termco::Rgb) stores its channels as unsigned bytes and
/// hence cannot hold an invalid color. This error arises when converting
/// wider channel values into an `Rgb` and when Python passes a color whose
/// channels are not all `int`s.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidColorError {
    /// A channel value below 0 or above 255. For example, `[256, 0, 0]` has
    /// an out-of-range red channel.
    OutOfRange,

    /// A channel value that is not an integer. For example, the Python tuple
    /// `(128.0, 0, 128)` has a float as red channel, even though its value is
    /// integral.
    NonIntegral,

    /// A color with more or fewer than three channels.
    WrongLength,
}

impl std::fmt::Display for InvalidColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use InvalidColorError::*;

        match self {
            OutOfRange => f.write_str("color channels should be in range 0..=255 but one is not"),
            NonIntegral => f.write_str("color channels should be integers but one is not"),
            WrongLength => f.write_str("color should have exactly 3 channels"),
        }
    }
}

impl std::error::Error for InvalidColorError {}

#[cfg(feature = "pyffi")]
impl From<InvalidColorError> for PyErr {
    fn from(value: InvalidColorError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::{InvalidColorError, OutOfBoundsError};

    #[test]
    fn test_display() {
        assert_eq!(
            OutOfBoundsError::new(-1, 0..=255).to_string(),
            "-1 does not fit into range 0..=255"
        );
        assert_eq!(
            OutOfBoundsError::new(24_u8, 0..=23).to_string(),
            "24 does not fit into range 0..=23"
        );
        assert_eq!(
            InvalidColorError::NonIntegral.to_string(),
            "color channels should be integers but one is not"
        );
    }
}
