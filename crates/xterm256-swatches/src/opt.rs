//! Helper module with the options for generating swatches.
//!
//! This module provides the options for writing swatch files and the README
//! table referencing them, as well as the corresponding builder.
//!
//!
//! # Example
//!
//! ```
//! # use xterm256_swatches::opt::Options;
//! let options = Options::builder()
//!     .output_dir("swatches")
//!     .width(300)
//!     .build();
//!
//! assert_eq!(options.width(), 300);
//! assert_eq!(options.height(), 40);
//! ```

use std::path::{Path, PathBuf};

/// The diagnostic logging volume.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Volume {
    #[default]
    Silent,
    Regular,
    Detailed,
}

impl Volume {
    /// Get the corresponding log level as a filter directive.
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Silent => "warn",
            Self::Regular => "info",
            Self::Detailed => "debug",
        }
    }
}

#[derive(Clone, Debug)]
struct OptionData {
    volume: Volume,
    output_dir: PathBuf,
    readme_path: PathBuf,
    width: u16,
    height: u16,
    font_size: u16,
}

impl OptionData {
    fn new() -> Self {
        Self {
            volume: Volume::Silent,
            output_dir: PathBuf::from("imgs"),
            readme_path: PathBuf::from("README.md"),
            width: 600,
            height: 40,
            font_size: 20,
        }
    }
}

/// A builder of options objects.
#[derive(Debug)]
pub struct OptionBuilder(OptionData);

impl OptionBuilder {
    /// Set the volume.
    pub fn volume(&mut self, volume: Volume) -> &mut Self {
        self.0.volume = volume;
        self
    }

    /// Set the directory for swatch files.
    ///
    /// The README table references swatches relative to its own location, so
    /// a relative directory should be relative to the README's directory.
    pub fn output_dir<P: Into<PathBuf>>(&mut self, dir: P) -> &mut Self {
        self.0.output_dir = dir.into();
        self
    }

    /// Set the path of the README file.
    pub fn readme_path<P: Into<PathBuf>>(&mut self, path: P) -> &mut Self {
        self.0.readme_path = path.into();
        self
    }

    /// Set the swatch width in pixels.
    pub fn width(&mut self, width: u16) -> &mut Self {
        self.0.width = width;
        self
    }

    /// Set the swatch height in pixels.
    pub fn height(&mut self, height: u16) -> &mut Self {
        self.0.height = height;
        self
    }

    /// Set the font size for swatch labels.
    pub fn font_size(&mut self, size: u16) -> &mut Self {
        self.0.font_size = size;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> Options {
        Options(self.0.clone())
    }
}

/// An options object.
#[derive(Clone, Debug)]
pub struct Options(OptionData);

impl Default for Options {
    fn default() -> Self {
        Options(OptionData::new())
    }
}

impl Options {
    /// Create a new builder with the default option values.
    pub fn builder() -> OptionBuilder {
        OptionBuilder(OptionData::new())
    }

    /// Instantiate the default options but with regular logging output
    /// enabled.
    pub fn with_log() -> Options {
        Self::builder().volume(Volume::Regular).build()
    }

    /// Instantiate the default options but with detailed logging output
    /// enabled.
    pub fn with_detailed_log() -> Options {
        Self::builder().volume(Volume::Detailed).build()
    }

    /// Get the volume.
    pub fn volume(&self) -> Volume {
        self.0.volume
    }

    /// Get the directory for swatch files.
    pub fn output_dir(&self) -> &Path {
        &self.0.output_dir
    }

    /// Get the path of the README file.
    pub fn readme_path(&self) -> &Path {
        &self.0.readme_path
    }

    /// Get the swatch width in pixels.
    pub fn width(&self) -> u16 {
        self.0.width
    }

    /// Get the swatch height in pixels.
    pub fn height(&self) -> u16 {
        self.0.height
    }

    /// Get the font size for swatch labels.
    pub fn font_size(&self) -> u16 {
        self.0.font_size
    }
}
