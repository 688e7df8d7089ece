use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use xterm256_swatches::opt::{Options, Volume};
use xterm256_swatches::readme::write_readme;
use xterm256_swatches::svg::write_swatches;

#[derive(Parser)]
#[command(
    name = "xterm256-swatches",
    version,
    about = "Write SVG swatches and a README table for the xterm 256-color palette"
)]
struct Args {
    /// Directory for the SVG swatches.
    #[arg(short, long, default_value = "imgs")]
    output_dir: PathBuf,

    /// Path of the README table.
    #[arg(short, long, default_value = "README.md")]
    readme: PathBuf,

    /// Swatch width in pixels.
    #[arg(long, default_value_t = 600)]
    width: u16,

    /// Swatch height in pixels.
    #[arg(long, default_value_t = 40)]
    height: u16,

    /// Font size of swatch labels.
    #[arg(long, default_value_t = 20)]
    font_size: u16,

    /// Skip writing the swatches.
    #[arg(long)]
    no_swatches: bool,

    /// Skip writing the README table.
    #[arg(long)]
    no_readme: bool,

    /// Log more; repeat for even more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn options(&self) -> Options {
        let volume = match self.verbose {
            0 => Volume::Silent,
            1 => Volume::Regular,
            _ => Volume::Detailed,
        };

        Options::builder()
            .volume(volume)
            .output_dir(&self.output_dir)
            .readme_path(&self.readme)
            .width(self.width)
            .height(self.height)
            .font_size(self.font_size)
            .build()
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let options = args.options();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| options.volume().as_directive().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if !args.no_swatches {
        write_swatches(&options).with_context(|| {
            format!(
                "could not write swatches to {}",
                options.output_dir().display()
            )
        })?;
    }

    if !args.no_readme {
        write_readme(&options).with_context(|| {
            format!(
                "could not write README to {}",
                options.readme_path().display()
            )
        })?;
    }

    Ok(())
}
