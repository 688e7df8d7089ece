//! Terminal color representations.
//!
//! This module offers a choice of [`AnsiColor`], [`EmbeddedRgb`],
//! [`GrayGradient`], and [`Rgb`] as the color representations behind the
//! xterm 256-color palette.
//!
//! Taken together, the first three types are the 8-bit colors and can be
//! wrapped as [`EightBitColor`]s. Each of them partitions the palette: ANSI
//! colors cover indices `0..=15`, the embedded RGB cube covers `16..=231`, and
//! the gray gradient covers `232..=255`. All 8-bit colors convert to [`Rgb`].
use crate::contrast::adaptive_foreground;
use crate::error::{InvalidColorError, OutOfBoundsError};

/// The RGB values for the 16 ANSI colors, in index order.
///
/// These are xterm's conventional assignments. Notably, blue is `#0000ee` and
/// not `#000080`.
const NAMED_COLORS: [[u8; 3]; 16] = [
    [0, 0, 0],
    [128, 0, 0],
    [0, 128, 0],
    [128, 128, 0],
    [0, 0, 238],
    [128, 0, 128],
    [0, 128, 128],
    [192, 192, 192],
    [128, 128, 128],
    [255, 0, 0],
    [0, 255, 0],
    [255, 255, 0],
    [0, 0, 255],
    [255, 0, 255],
    [0, 255, 255],
    [255, 255, 255],
];

/// The channel intensities for the six levels of the embedded RGB cube.
const CUBE_STEPS: [u8; 6] = [0x00, 0x5F, 0x87, 0xAF, 0xD7, 0xFF];

// ====================================================================================================================
// Ansi Color
// ====================================================================================================================

/// The 16 extended ANSI colors.
///
/// Rust code converts between 8-bit color codes and enumeration variants with
/// [`AnsiColor as
/// TryFrom<u8>`](enum.AnsiColor.html#impl-TryFrom%3Cu8%3E-for-AnsiColor) and
/// [`u8 as
/// From<AnsiColor>`](enum.AnsiColor.html#impl-From%3CAnsiColor%3E-for-u8).
/// Unlike in a themed terminal, every ANSI color has a fixed RGB value here,
/// taken from xterm's defaults:
///
/// ```
/// # use xterm256::termco::{AnsiColor, Rgb};
/// assert_eq!(Rgb::from(AnsiColor::Blue), Rgb::new(0, 0, 238));
/// assert_eq!(Rgb::from(AnsiColor::White), Rgb::new(192, 192, 192));
/// ```
///
/// The ANSI colors are ordered because they are ordered as indexed colors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnsiColor {
    #[default]
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// All ANSI colors in index order.
const ANSI_COLORS: [AnsiColor; 16] = {
    use AnsiColor::*;
    [
        Black,
        Red,
        Green,
        Yellow,
        Blue,
        Magenta,
        Cyan,
        White,
        BrightBlack,
        BrightRed,
        BrightGreen,
        BrightYellow,
        BrightBlue,
        BrightMagenta,
        BrightCyan,
        BrightWhite,
    ]
};

impl AnsiColor {
    /// Get an iterator over all ANSI colors in order.
    pub fn all() -> AnsiColorIterator {
        AnsiColorIterator::new()
    }
}

impl TryFrom<u8> for AnsiColor {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ANSI_COLORS
            .get(value as usize)
            .copied()
            .ok_or_else(|| OutOfBoundsError::new(value, 0..=15))
    }
}

impl From<AnsiColor> for u8 {
    fn from(value: AnsiColor) -> u8 {
        value as u8
    }
}

impl From<AnsiColor> for [u8; 3] {
    fn from(value: AnsiColor) -> Self {
        NAMED_COLORS[value as usize]
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A helper for iterating over ANSI colors.
///
/// This iterator is fused, i.e., after returning `None` once, it will keep
/// returning `None`. This iterator also is exact, i.e., its `size_hint()`
/// returns the exact number of remaining items.
#[derive(Clone, Debug)]
pub struct AnsiColorIterator {
    index: usize,
}

impl AnsiColorIterator {
    fn new() -> Self {
        Self { index: 0 }
    }
}

impl Iterator for AnsiColorIterator {
    type Item = AnsiColor;

    fn next(&mut self) -> Option<Self::Item> {
        let color = ANSI_COLORS.get(self.index).copied()?;
        self.index += 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = 16 - self.index;
        (remaining, Some(remaining))
    }
}

impl std::iter::ExactSizeIterator for AnsiColorIterator {
    fn len(&self) -> usize {
        16 - self.index
    }
}

impl std::iter::FusedIterator for AnsiColorIterator {}

// ====================================================================================================================
// The Embedded 6x6x6 RGB Cube
// ====================================================================================================================

/// The 6x6x6 RGB cube embedded in 8-bit terminal colors.
///
///
/// # Examples
///
/// Rust code can create a new embedded RGB color with either
/// [`EmbeddedRgb::new`] or [`EmbeddedRgb as
/// TryFrom<u8>`](struct.EmbeddedRgb.html#impl-TryFrom%3Cu8%3E-for-EmbeddedRgb).
///
/// ```
/// # use xterm256::termco::EmbeddedRgb;
/// # use xterm256::error::OutOfBoundsError;
/// let orange = EmbeddedRgb::new(5, 2, 0)?;
/// let orange_too = EmbeddedRgb::try_from(208)?;
/// assert_eq!(orange, orange_too);
/// # Ok::<(), OutOfBoundsError>(())
/// ```
///
/// It can access the coordinates with [`EmbeddedRgb as AsRef<[u8;
/// 3]>`](struct.EmbeddedRgb.html#impl-AsRef%3C%5Bu8;+3%5D%3E-for-EmbeddedRgb)
/// or with [`EmbeddedRgb as
/// Index<usize>`](struct.EmbeddedRgb.html#impl-Index%3Cusize%3E-for-EmbeddedRgb).
/// ```
/// # use xterm256::termco::EmbeddedRgb;
/// # use xterm256::error::OutOfBoundsError;
/// let blue = EmbeddedRgb::try_from(75)?;
/// assert_eq!(blue.as_ref(), &[1_u8, 3, 5]);
/// assert_eq!(blue[1], 3);
/// # Ok::<(), OutOfBoundsError>(())
/// ```
///
/// Finally, it can convert an embedded RGB color to `u8` with [`u8 as
/// From<EmbeddedRgb>`](struct.EmbeddedRgb.html#impl-From%3CEmbeddedRgb%3E-for-u8)
/// or to a true color with [`Rgb as
/// From<EmbeddedRgb>`](struct.EmbeddedRgb.html#impl-From%3CEmbeddedRgb%3E-for-Rgb).
/// ```
/// # use xterm256::termco::{EmbeddedRgb, Rgb};
/// # use xterm256::error::OutOfBoundsError;
/// let rose = EmbeddedRgb::new(5, 4, 5)?;
/// assert_eq!(u8::from(rose), 225);
///
/// let also_rose = Rgb::from(rose);
/// assert_eq!(format!("{}", also_rose), "#ffd7ff");
/// # Ok::<(), OutOfBoundsError>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EmbeddedRgb([u8; 3]);

impl EmbeddedRgb {
    /// Create a new embedded RGB value from its coordinates.
    pub fn new(r: u8, g: u8, b: u8) -> Result<Self, OutOfBoundsError> {
        if 6 <= r {
            Err(OutOfBoundsError::new(r, 0..=5))
        } else if 6 <= g {
            Err(OutOfBoundsError::new(g, 0..=5))
        } else if 6 <= b {
            Err(OutOfBoundsError::new(b, 0..=5))
        } else {
            Ok(Self([r, g, b]))
        }
    }

    /// Create a new embedded RGB value from its offset `0..=215` into the
    /// cube. Red varies slowest and blue fastest.
    const fn from_offset(offset: u8) -> Self {
        Self([offset / 36 % 6, offset / 6 % 6, offset % 6])
    }
}

impl TryFrom<u8> for EmbeddedRgb {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if !(16..=231).contains(&value) {
            Err(OutOfBoundsError::new(value, 16..=231))
        } else {
            Ok(Self::from_offset(value - 16))
        }
    }
}

impl AsRef<[u8; 3]> for EmbeddedRgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for EmbeddedRgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<EmbeddedRgb> for u8 {
    fn from(value: EmbeddedRgb) -> u8 {
        let [r, g, b] = value.0;
        16 + 36 * r + 6 * g + b
    }
}

impl From<EmbeddedRgb> for [u8; 3] {
    fn from(value: EmbeddedRgb) -> Self {
        value.0.map(|level| CUBE_STEPS[level as usize])
    }
}

// ====================================================================================================================
// Gray Gradient
// ====================================================================================================================

/// The 24-step gray gradient embedded in 8-bit terminal colors.
///
/// The gradient runs from `#080808` to `#eeeeee` in steps of 10 and hence
/// includes neither black nor white. Both already are ANSI colors.
///
/// # Examples
///
/// Rust code can instantiate a new gray gradient color with either
/// [`GrayGradient::new`] or [`GrayGradient as
/// TryFrom<u8>`](struct.GrayGradient.html#impl-TryFrom%3Cu8%3E-for-GrayGradient).
///
/// ```
/// # use xterm256::termco::GrayGradient;
/// # use xterm256::error::OutOfBoundsError;
/// let almost_black = GrayGradient::new(4)?;
/// let almost_black_too = GrayGradient::try_from(236)?;
/// assert_eq!(almost_black, almost_black_too);
/// # Ok::<(), OutOfBoundsError>(())
/// ```
///
/// It can access the gray level with [`GrayGradient::level`] and convert to a
/// true color with [`Rgb as
/// From<GrayGradient>`](struct.GrayGradient.html#impl-From%3CGrayGradient%3E-for-Rgb).
/// ```
/// # use xterm256::termco::{GrayGradient, Rgb};
/// # use xterm256::error::OutOfBoundsError;
/// let light_gray = GrayGradient::new(20)?;
/// assert_eq!(u8::from(light_gray), 252);
/// assert_eq!(light_gray.level(), 20);
/// assert_eq!(format!("{}", Rgb::from(light_gray)), "#d0d0d0");
/// # Ok::<(), OutOfBoundsError>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GrayGradient(u8);

impl GrayGradient {
    /// Instantiate a new gray gradient from its level `0..=23`.
    pub fn new(value: u8) -> Result<Self, OutOfBoundsError> {
        if value <= 23 {
            Ok(Self(value))
        } else {
            Err(OutOfBoundsError::new(value, 0..=23))
        }
    }

    /// Access the gray level `0..=23`.
    pub const fn level(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for GrayGradient {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= 231 {
            Err(OutOfBoundsError::new(value, 232..=255))
        } else {
            Self::new(value - 232)
        }
    }
}

impl From<GrayGradient> for u8 {
    fn from(value: GrayGradient) -> u8 {
        232 + value.0
    }
}

impl From<GrayGradient> for [u8; 3] {
    fn from(value: GrayGradient) -> Self {
        let level = 8 + 10 * value.level();
        [level, level, level]
    }
}

// ====================================================================================================================
// Eight-Bit Color
// ====================================================================================================================

/// An 8-bit color.
///
/// This enumeration classifies an 8-bit index by palette region. Rust code
/// converts between `u8` and this type with [`EightBitColor as
/// From<u8>`](enum.EightBitColor.html#impl-From%3Cu8%3E-for-EightBitColor) and
/// [`u8 as
/// From<EightBitColor>`](enum.EightBitColor.html#impl-From%3CEightBitColor%3E-for-u8).
/// Since the three regions partition all 256 byte values, both conversions are
/// total.
///
/// ```
/// # use xterm256::termco::{AnsiColor, EightBitColor, GrayGradient};
/// # use xterm256::error::OutOfBoundsError;
/// assert_eq!(EightBitColor::from(9), EightBitColor::Ansi(AnsiColor::BrightRed));
/// assert_eq!(EightBitColor::from(244), EightBitColor::Gray(GrayGradient::new(12)?));
/// assert_eq!(u8::from(EightBitColor::from(100)), 100);
/// # Ok::<(), OutOfBoundsError>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EightBitColor {
    Ansi(AnsiColor),
    Embedded(EmbeddedRgb),
    Gray(GrayGradient),
}

impl From<AnsiColor> for EightBitColor {
    fn from(value: AnsiColor) -> Self {
        Self::Ansi(value)
    }
}

impl From<EmbeddedRgb> for EightBitColor {
    fn from(value: EmbeddedRgb) -> Self {
        Self::Embedded(value)
    }
}

impl From<GrayGradient> for EightBitColor {
    fn from(value: GrayGradient) -> Self {
        Self::Gray(value)
    }
}

impl From<u8> for EightBitColor {
    fn from(value: u8) -> Self {
        match value {
            0..=15 => Self::Ansi(ANSI_COLORS[value as usize]),
            16..=231 => Self::Embedded(EmbeddedRgb::from_offset(value - 16)),
            232..=255 => Self::Gray(GrayGradient(value - 232)),
        }
    }
}

impl TryFrom<i64> for EightBitColor {
    type Error = OutOfBoundsError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Self::from)
            .map_err(|_| OutOfBoundsError::new(value, 0..=255))
    }
}

impl From<EightBitColor> for u8 {
    fn from(value: EightBitColor) -> Self {
        match value {
            EightBitColor::Ansi(c) => c.into(),
            EightBitColor::Embedded(c) => c.into(),
            EightBitColor::Gray(c) => c.into(),
        }
    }
}

impl From<EightBitColor> for [u8; 3] {
    fn from(value: EightBitColor) -> Self {
        match value {
            EightBitColor::Ansi(c) => c.into(),
            EightBitColor::Embedded(c) => c.into(),
            EightBitColor::Gray(c) => c.into(),
        }
    }
}

// ====================================================================================================================
// Rgb ("True Color")
// ====================================================================================================================

/// A "true," 24-bit RGB color.
///
/// # Examples
///
/// Rust code can create a new true color with either [`Rgb::new`] or [`Rgb
/// as From<[u8; 3]>`](struct.Rgb.html#impl-From%3C%5Bu8;+3%5D%3E-for-Rgb).
/// Channel values from wider types go through the fallible `TryFrom`
/// implementations, which reject out-of-range channels and slices that do not
/// have exactly three channels.
///
/// ```
/// # use xterm256::termco::Rgb;
/// # use xterm256::error::InvalidColorError;
/// let purple = Rgb::new(128, 0, 128);
/// assert_eq!(Rgb::try_from([128_i64, 0, 128])?, purple);
/// assert_eq!(Rgb::try_from([128_i64, 0, 256]), Err(InvalidColorError::OutOfRange));
/// # Ok::<(), InvalidColorError>(())
/// ```
///
/// Its display is the hashed hexadecimal format, with lower-case digits.
///
/// ```
/// # use xterm256::termco::Rgb;
/// let purple = Rgb::new(128, 0, 128);
/// assert_eq!(format!("{}", purple), "#800080");
/// assert_eq!(purple.to_hex_format(), "#800080");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Create a new true color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Format this color in hashed hexadecimal notation, i.e., `#rrggbb`.
    pub fn to_hex_format(&self) -> String {
        format!("{}", self)
    }

    /// Determine a foreground color that stands out against this color as
    /// background.
    ///
    /// This method shifts all three channels by 96 towards white or, if the
    /// brightest channel exceeds 159, towards black. Channels saturate at 0
    /// and 255.
    ///
    /// ```
    /// # use xterm256::termco::Rgb;
    /// assert_eq!(Rgb::new(0, 0, 0).contrasting_foreground(), Rgb::new(96, 96, 96));
    /// assert_eq!(Rgb::new(255, 255, 255).contrasting_foreground(), Rgb::new(159, 159, 159));
    /// assert_eq!(Rgb::new(0, 95, 175).contrasting_foreground(), Rgb::new(0, 0, 79));
    /// ```
    pub fn contrasting_foreground(&self) -> Self {
        Self(adaptive_foreground(&self.0))
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the channel with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl From<AnsiColor> for Rgb {
    fn from(value: AnsiColor) -> Self {
        Self(value.into())
    }
}

impl From<EmbeddedRgb> for Rgb {
    fn from(value: EmbeddedRgb) -> Self {
        Self(value.into())
    }
}

impl From<GrayGradient> for Rgb {
    fn from(value: GrayGradient) -> Self {
        Self(value.into())
    }
}

impl From<EightBitColor> for Rgb {
    fn from(value: EightBitColor) -> Self {
        Self(value.into())
    }
}

impl TryFrom<[i64; 3]> for Rgb {
    type Error = InvalidColorError;

    fn try_from(value: [i64; 3]) -> Result<Self, Self::Error> {
        fn convert(channel: i64) -> Result<u8, InvalidColorError> {
            u8::try_from(channel).map_err(|_| InvalidColorError::OutOfRange)
        }

        let [r, g, b] = value;
        Ok(Self([convert(r)?, convert(g)?, convert(b)?]))
    }
}

impl TryFrom<&[i64]> for Rgb {
    type Error = InvalidColorError;

    fn try_from(value: &[i64]) -> Result<Self, Self::Error> {
        let channels =
            <[i64; 3]>::try_from(value).map_err(|_| InvalidColorError::WrongLength)?;
        Self::try_from(channels)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        f.write_fmt(format_args!("#{:02x}{:02x}{:02x}", r, g, b))
    }
}

#[cfg(test)]
mod test {
    use super::{
        AnsiColor, EightBitColor, EmbeddedRgb, GrayGradient, InvalidColorError, OutOfBoundsError,
        Rgb, CUBE_STEPS, NAMED_COLORS,
    };

    #[test]
    fn test_conversion() -> Result<(), OutOfBoundsError> {
        let magenta = AnsiColor::Magenta;
        assert_eq!(magenta as u8, 5);
        assert_eq!(Rgb::from(magenta), Rgb::new(128, 0, 128));

        let green = EmbeddedRgb::new(0, 4, 0)?;
        assert_eq!(green.as_ref(), &[0, 4, 0]);
        assert_eq!(Rgb::from(green), Rgb::new(0, 215, 0));

        let gray = GrayGradient::new(12)?;
        assert_eq!(gray.level(), 12);
        assert_eq!(Rgb::from(gray), Rgb::new(128, 128, 128));

        assert_eq!(EightBitColor::from(5), EightBitColor::Ansi(magenta));
        assert_eq!(EightBitColor::from(40), EightBitColor::Embedded(green));
        assert_eq!(EightBitColor::from(244), EightBitColor::Gray(gray));

        Ok(())
    }

    #[test]
    fn test_limits() -> Result<(), OutOfBoundsError> {
        let black_ansi = AnsiColor::try_from(0)?;
        assert_eq!(black_ansi, AnsiColor::Black);
        assert_eq!(u8::from(black_ansi), 0);
        let white_ansi = AnsiColor::try_from(15)?;
        assert_eq!(white_ansi, AnsiColor::BrightWhite);
        assert_eq!(u8::from(white_ansi), 15);
        assert_eq!(AnsiColor::try_from(16), Err(OutOfBoundsError::new(16_u8, 0..=15)));

        let black_rgb = EmbeddedRgb::try_from(16)?;
        assert_eq!(*black_rgb.as_ref(), [0_u8, 0_u8, 0_u8]);
        assert_eq!(u8::from(black_rgb), 16);
        let white_rgb = EmbeddedRgb::try_from(231)?;
        assert_eq!(*white_rgb.as_ref(), [5_u8, 5_u8, 5_u8]);
        assert_eq!(u8::from(white_rgb), 231);
        assert!(EmbeddedRgb::try_from(15).is_err());
        assert!(EmbeddedRgb::try_from(232).is_err());
        assert_eq!(EmbeddedRgb::new(0, 6, 0), Err(OutOfBoundsError::new(6_u8, 0..=5)));

        let black_gray = GrayGradient::try_from(232)?;
        assert_eq!(black_gray.level(), 0);
        assert_eq!(u8::from(black_gray), 232);
        assert_eq!(Rgb::from(black_gray), Rgb::new(8, 8, 8));
        let white_gray = GrayGradient::try_from(255)?;
        assert_eq!(white_gray.level(), 23);
        assert_eq!(u8::from(white_gray), 255);
        assert_eq!(Rgb::from(white_gray), Rgb::new(238, 238, 238));
        assert!(GrayGradient::try_from(231).is_err());
        assert!(GrayGradient::new(24).is_err());

        assert_eq!(
            EightBitColor::try_from(256_i64),
            Err(OutOfBoundsError::new(256, 0..=255))
        );
        assert_eq!(
            EightBitColor::try_from(-1_i64),
            Err(OutOfBoundsError::new(-1, 0..=255))
        );

        Ok(())
    }

    #[test]
    fn test_regions() {
        for index in 0..=255_u8 {
            let color = EightBitColor::from(index);
            assert_eq!(u8::from(color), index);

            match color {
                EightBitColor::Ansi(_) => assert!(index <= 15),
                EightBitColor::Embedded(_) => assert!((16..=231).contains(&index)),
                EightBitColor::Gray(_) => assert!(232 <= index),
            }
        }
    }

    #[test]
    fn test_ansi_colors() {
        let colors: Vec<_> = AnsiColor::all().collect();
        assert_eq!(colors.len(), 16);
        for (index, color) in colors.into_iter().enumerate() {
            assert_eq!(color as usize, index);
            assert_eq!(<[u8; 3]>::from(color), NAMED_COLORS[index]);
        }

        let mut iter = AnsiColor::all();
        assert_eq!(iter.len(), 16);
        assert_eq!(iter.nth(15), Some(AnsiColor::BrightWhite));
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_cube_steps() -> Result<(), OutOfBoundsError> {
        for (level, step) in CUBE_STEPS.into_iter().enumerate() {
            let level = level as u8;
            assert_eq!(Rgb::from(EmbeddedRgb::new(level, 0, 0)?), Rgb::new(step, 0, 0));
            assert_eq!(Rgb::from(EmbeddedRgb::new(0, level, 0)?), Rgb::new(0, step, 0));
            assert_eq!(Rgb::from(EmbeddedRgb::new(0, 0, level)?), Rgb::new(0, 0, step));
        }

        // Red is the slowest-varying axis.
        assert_eq!(Rgb::from(EmbeddedRgb::try_from(21)?), Rgb::new(0, 0, 255));
        assert_eq!(Rgb::from(EmbeddedRgb::try_from(196)?), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from(EmbeddedRgb::try_from(110)?), Rgb::new(135, 175, 215));
        Ok(())
    }

    #[test]
    fn test_rgb_validation() {
        assert_eq!(Rgb::try_from([0_i64, 0, 0]), Ok(Rgb::new(0, 0, 0)));
        assert_eq!(Rgb::try_from([255_i64, 255, 255]), Ok(Rgb::new(255, 255, 255)));
        assert_eq!(Rgb::try_from([256_i64, 0, 0]), Err(InvalidColorError::OutOfRange));
        assert_eq!(Rgb::try_from([0_i64, -1, 0]), Err(InvalidColorError::OutOfRange));

        let short: &[i64] = &[1, 2];
        assert_eq!(Rgb::try_from(short), Err(InvalidColorError::WrongLength));
        let long: &[i64] = &[1, 2, 3, 4];
        assert_eq!(Rgb::try_from(long), Err(InvalidColorError::WrongLength));
        let just_right: &[i64] = &[1, 2, 3];
        assert_eq!(Rgb::try_from(just_right), Ok(Rgb::new(1, 2, 3)));
    }

    #[test]
    fn test_hex_format() {
        assert_eq!(format!("{}", Rgb::new(0, 0, 0)), "#000000");
        assert_eq!(format!("{}", Rgb::new(255, 255, 255)), "#ffffff");
        assert_eq!(Rgb::new(128, 0, 128).to_hex_format(), "#800080");
        assert_eq!(Rgb::new(1, 10, 171).to_hex_format(), "#010aab");
    }
}
