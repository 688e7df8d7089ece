//! # xterm256-swatches
//!
//! Swatches for the xterm 256-color palette. This crate writes one SVG file
//! per palette color, each showing the color's channels in a contrasting
//! foreground color, and a README table that lists all 256 palette entries
//! with their swatches.
//!
//! ```no_run
//! # use xterm256_swatches::{opt::Options, readme::write_readme, svg::write_swatches};
//! # fn main() -> std::io::Result<()> {
//! let options = Options::with_log();
//! write_swatches(&options)?;
//! write_readme(&options)?;
//! # Ok(())
//! # }
//! ```
//!
//! Both writers log through [`tracing`]; the `xterm256-swatches` binary
//! installs a subscriber. Colors come from the [`xterm256`] crate.

pub mod opt;
pub mod readme;
pub mod svg;
