//! # xterm256
//!
//! The xterm 256-color palette, resolved to RGB, with a matching foreground
//! color for every background.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. With the `pyffi` feature enabled, it also covers the Python
integration."
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**."
)]
//!
//!
//! ## 1. Overview
//!
//! Terminals that support 8-bit colors accept an index `0..=255` into a fixed
//! palette of 256 colors. The palette has three regions:
//!
//!   * **16 ANSI colors** at `0..=15`, represented by
//!     [`AnsiColor`](termco::AnsiColor). Their RGB values are xterm's
//!     defaults, a literal table.
//!   * **216 cube colors** at `16..=231`, represented by
//!     [`EmbeddedRgb`](termco::EmbeddedRgb). They form a 6x6x6 cube, with
//!     each channel drawn from the levels `0x00`, `0x5f`, `0x87`, `0xaf`,
//!     `0xd7`, and `0xff`.
//!   * **24 gray levels** at `232..=255`, represented by
//!     [`GrayGradient`](termco::GrayGradient). They step from `#080808` to
//!     `#eeeeee` in increments of 10.
//!
//! [`EightBitColor`](termco::EightBitColor) classifies any byte into one of
//! the three regions, and every region converts to a 24-bit
//! [`Rgb`](termco::Rgb).
//!
//!
//! ## 2. Resolving and Contrasting Colors
//!
//! [`resolve`] maps a palette index to its RGB color and rejects indices out
//! of range. [`all_triplets`] enumerates all 256 colors in index order.
//! [`contrasting_foreground`] picks a foreground color that remains legible
//! on a given background, and [`to_hex`] formats a color as `#rrggbb`.
//!
//! ```
//! # use xterm256::{all_triplets, contrasting_foreground, resolve, to_hex};
//! # use xterm256::error::OutOfBoundsError;
//! let orange = resolve(208)?;
//! assert_eq!(to_hex(&orange), "#ff8700");
//! assert_eq!(to_hex(&contrasting_foreground(&orange)), "#9f2700");
//!
//! for (index, color) in all_triplets().enumerate() {
//!     assert_eq!(resolve(index as i64)?, color);
//! }
//! # Ok::<(), OutOfBoundsError>(())
//! ```
//!
//! Channel values that are not already unsigned bytes go through
//! [`Rgb`](termco::Rgb)'s `TryFrom` implementations, which reject values out
//! of range and values that are not integers with an
//! [`InvalidColorError`](error::InvalidColorError).
//!
//!
//! ## 3. Optional Features
//!
//! xterm256 supports one feature flag:
//!
//!   - **`pyffi`** controls the Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!
//! Throughout the API documentation, items that are only available in Python
//! are decorated with <i class=python-only>Python only!</i>.

mod contrast;
pub mod error;
mod palette;
pub mod termco;

pub use palette::{
    all_triplets, contrasting_foreground, resolve, to_hex, TripletIterator, PALETTE_SIZE,
};

#[cfg(feature = "pyffi")]
pub use palette::{Channel, Xterm256Colors};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn xterm256(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Xterm256Colors>()?;
    m.add_class::<TripletIterator>()?;
    m.add("PALETTE_SIZE", PALETTE_SIZE)?;
    Ok(())
}
