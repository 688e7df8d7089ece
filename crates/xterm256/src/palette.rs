//! The xterm 256-color palette as a whole.
//!
//! The functions in this module are the crate's main entry points. They
//! resolve palette indices to [`Rgb`] colors, enumerate the palette, pick
//! contrasting foreground colors, and format colors as hexadecimal strings.
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::OutOfBoundsError;
use crate::termco::{EightBitColor, Rgb};

#[cfg(feature = "pyffi")]
use crate::error::InvalidColorError;

/// The number of colors in the palette.
pub const PALETTE_SIZE: usize = 256;

/// Resolve the palette index to its RGB color.
///
/// Indices `0..=15` are the ANSI colors with fixed xterm values, `16..=231`
/// the 6x6x6 RGB cube, and `232..=255` the 24-step gray gradient. Any other
/// index results in an [`OutOfBoundsError`].
///
/// ```
/// # use xterm256::{resolve, termco::Rgb};
/// # use xterm256::error::OutOfBoundsError;
/// assert_eq!(resolve(4)?, Rgb::new(0, 0, 238));
/// assert_eq!(resolve(21)?, Rgb::new(0, 0, 255));
/// assert_eq!(resolve(244)?, Rgb::new(128, 128, 128));
/// assert!(resolve(256).is_err());
/// assert!(resolve(-1).is_err());
/// # Ok::<(), OutOfBoundsError>(())
/// ```
pub fn resolve(index: i64) -> Result<Rgb, OutOfBoundsError> {
    EightBitColor::try_from(index).map(Rgb::from)
}

/// Get an iterator over the RGB colors of all 256 palette entries, in index
/// order.
///
/// The iterator is lazy and allocation-free. Calling this function again, or
/// cloning the iterator, restarts the enumeration.
///
/// ```
/// # use xterm256::{all_triplets, termco::Rgb};
/// let palette: Vec<Rgb> = all_triplets().collect();
/// assert_eq!(palette.len(), 256);
/// assert_eq!(palette[9], Rgb::new(255, 0, 0));
/// assert_eq!(all_triplets().last(), Some(Rgb::new(238, 238, 238)));
/// ```
pub fn all_triplets() -> TripletIterator {
    TripletIterator::new()
}

/// Determine a foreground color that stands out against the given background
/// color.
///
/// See [`Rgb::contrasting_foreground`]. Colors from unchecked channel values
/// are validated by [`Rgb`]'s `TryFrom` implementations first.
pub fn contrasting_foreground(background: &Rgb) -> Rgb {
    background.contrasting_foreground()
}

/// Format the color as `#rrggbb` with lower-case hexadecimal digits.
///
/// ```
/// # use xterm256::{to_hex, termco::Rgb};
/// assert_eq!(to_hex(&Rgb::new(0, 0, 0)), "#000000");
/// assert_eq!(to_hex(&Rgb::new(128, 0, 128)), "#800080");
/// ```
pub fn to_hex(color: &Rgb) -> String {
    color.to_hex_format()
}

// --------------------------------------------------------------------------------------------------------------------

/// A helper for iterating over the RGB colors of the palette.
///
/// This iterator is fused, i.e., after returning `None` once, it will keep
/// returning `None`. This iterator also is exact, i.e., its `size_hint()`
/// returns the exact number of remaining items. It can be consumed from both
/// ends.
#[cfg_attr(feature = "pyffi", pyclass(module = "xterm256"))]
#[derive(Clone, Debug)]
pub struct TripletIterator {
    front: usize,
    back: usize,
}

impl TripletIterator {
    fn new() -> Self {
        Self {
            front: 0,
            back: PALETTE_SIZE,
        }
    }

    fn color_at(index: usize) -> Rgb {
        Rgb::from(EightBitColor::from(index as u8))
    }
}

impl Iterator for TripletIterator {
    type Item = Rgb;

    fn next(&mut self) -> Option<Self::Item> {
        if self.back <= self.front {
            None
        } else {
            let index = self.front;
            self.front += 1;
            Some(Self::color_at(index))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl std::iter::DoubleEndedIterator for TripletIterator {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.back <= self.front {
            None
        } else {
            self.back -= 1;
            Some(Self::color_at(self.back))
        }
    }
}

impl std::iter::ExactSizeIterator for TripletIterator {
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl std::iter::FusedIterator for TripletIterator {}

#[cfg(feature = "pyffi")]
#[pymethods]
impl TripletIterator {
    /// Get the number of remaining colors. <i class=python-only>Python
    /// only!</i>
    pub fn __len__(&self) -> usize {
        self.len()
    }

    /// Return this iterator. <i class=python-only>Python only!</i>
    pub fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    /// Return the next color as a tuple. <i class=python-only>Python only!</i>
    pub fn __next__(mut slf: PyRefMut<'_, Self>) -> Option<(u8, u8, u8)> {
        slf.next().map(|rgb| {
            let [r, g, b] = *rgb.as_ref();
            (r, g, b)
        })
    }

    /// Get a debug representation for this iterator.
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color channel as passed from Python. <i class=python-only>Python
/// only!</i>
///
/// Python `int`s extract as [`Channel::Integer`]. Everything else that
/// converts to a float extracts as [`Channel::Number`], which is never a valid
/// channel, not even for integral values such as `128.0`.
#[cfg(feature = "pyffi")]
#[derive(Clone, Copy, Debug, PartialEq, FromPyObject)]
pub enum Channel {
    Integer(i64),
    Number(f64),
}

#[cfg(feature = "pyffi")]
impl TryFrom<Channel> for i64 {
    type Error = InvalidColorError;

    fn try_from(value: Channel) -> Result<Self, Self::Error> {
        match value {
            Channel::Integer(n) => Ok(n),
            // Python ints too large for i64 end up here.
            Channel::Number(x) if x.fract() == 0.0 && !(0.0..=255.0).contains(&x) => {
                Err(InvalidColorError::OutOfRange)
            }
            Channel::Number(_) => Err(InvalidColorError::NonIntegral),
        }
    }
}

#[cfg(feature = "pyffi")]
fn into_rgb(channels: &[Channel]) -> Result<Rgb, InvalidColorError> {
    let channels = channels
        .iter()
        .map(|c| i64::try_from(*c))
        .collect::<Result<Vec<_>, _>>()?;
    Rgb::try_from(channels.as_slice())
}

/// The xterm 256-color palette. <i class=python-only>Python only!</i>
///
/// This class exposes the palette to Python as a sequence of RGB tuples,
/// together with hexadecimal formatting and foreground selection. Both static
/// methods accept any sequence of exactly three `int`s in `0..=255` and raise
/// `ValueError` otherwise. Floats are rejected even if integral.
#[cfg(feature = "pyffi")]
#[pyclass(frozen, module = "xterm256")]
#[derive(Debug, Default)]
pub struct Xterm256Colors {}

#[cfg(feature = "pyffi")]
#[pymethods]
impl Xterm256Colors {
    /// Create a new palette.
    #[new]
    pub fn new() -> Self {
        Self {}
    }

    /// Get the number of colors, which is 256.
    pub fn __len__(&self) -> usize {
        PALETTE_SIZE
    }

    /// Resolve the index to an RGB tuple.
    pub fn __getitem__(&self, index: i64) -> Result<(u8, u8, u8), OutOfBoundsError> {
        let [r, g, b] = *resolve(index)?.as_ref();
        Ok((r, g, b))
    }

    /// Iterate over all RGB tuples in index order.
    pub fn __iter__(&self) -> TripletIterator {
        all_triplets()
    }

    /// Convert an RGB triplet to hashed hexadecimal format.
    #[staticmethod]
    pub fn triplet2hex(rgb: Vec<Channel>) -> Result<String, InvalidColorError> {
        into_rgb(&rgb).map(|color| to_hex(&color))
    }

    /// Determine a contrasting foreground color for the background color.
    #[staticmethod]
    pub fn adaptive_fg_color(bg: Vec<Channel>) -> Result<(u8, u8, u8), InvalidColorError> {
        let color = into_rgb(&bg)?;
        let [r, g, b] = *contrasting_foreground(&color).as_ref();
        Ok((r, g, b))
    }

    /// Get a debug representation for this palette.
    pub fn __repr__(&self) -> String {
        "Xterm256Colors()".to_string()
    }
}


#[cfg(all(test, feature = "pyffi"))]
mod pyffi_test {
    use super::{Channel, Xterm256Colors};
    use crate::error::{InvalidColorError, OutOfBoundsError};

    fn ints(channels: [i64; 3]) -> Vec<Channel> {
        channels.into_iter().map(Channel::Integer).collect()
    }

    #[test]
    fn test_getitem() {
        let colors = Xterm256Colors::new();
        assert_eq!(colors.__len__(), 256);
        assert_eq!(colors.__getitem__(208), Ok((255, 135, 0)));
        assert_eq!(colors.__getitem__(255), Ok((238, 238, 238)));
        assert_eq!(colors.__getitem__(256), Err(OutOfBoundsError::new(256, 0..=255)));
        assert_eq!(colors.__getitem__(-1), Err(OutOfBoundsError::new(-1, 0..=255)));
        assert_eq!(colors.__iter__().count(), 256);
    }

    #[test]
    fn test_triplet2hex() {
        assert_eq!(Xterm256Colors::triplet2hex(ints([128, 0, 128])), Ok("#800080".to_string()));
        assert_eq!(
            Xterm256Colors::triplet2hex(ints([256, 0, 0])),
            Err(InvalidColorError::OutOfRange)
        );
        assert_eq!(
            Xterm256Colors::triplet2hex(vec![Channel::Integer(1), Channel::Integer(2)]),
            Err(InvalidColorError::WrongLength)
        );

        // Integral floats are still floats.
        let floats = vec![Channel::Number(128.0), Channel::Integer(0), Channel::Integer(128)];
        assert_eq!(Xterm256Colors::triplet2hex(floats), Err(InvalidColorError::NonIntegral));
        let nan = vec![Channel::Number(f64::NAN), Channel::Integer(0), Channel::Integer(0)];
        assert_eq!(Xterm256Colors::triplet2hex(nan), Err(InvalidColorError::NonIntegral));
        let huge = vec![Channel::Number(1e30), Channel::Integer(0), Channel::Integer(0)];
        assert_eq!(Xterm256Colors::triplet2hex(huge), Err(InvalidColorError::OutOfRange));
    }

    #[test]
    fn test_adaptive_fg_color() {
        assert_eq!(Xterm256Colors::adaptive_fg_color(ints([0, 0, 0])), Ok((96, 96, 96)));
        assert_eq!(Xterm256Colors::adaptive_fg_color(ints([255, 135, 0])), Ok((159, 39, 0)));
        assert_eq!(
            Xterm256Colors::adaptive_fg_color(ints([0, -1, 0])),
            Err(InvalidColorError::OutOfRange)
        );

        let floats = vec![Channel::Number(0.0); 3];
        assert_eq!(
            Xterm256Colors::adaptive_fg_color(floats),
            Err(InvalidColorError::NonIntegral)
        );
    }
}
