//! Writing one SVG swatch per palette color.

use std::fs;
use std::io::Result;
use std::path::PathBuf;

use xterm256::termco::Rgb;
use xterm256::{all_triplets, contrasting_foreground, to_hex};

use crate::opt::Options;

/// Get the file name stem for the color's swatch, i.e., its hexadecimal
/// format without the leading `#`.
pub fn save_name(color: &Rgb) -> String {
    let [r, g, b] = *color.as_ref();
    format!("{:02x}{:02x}{:02x}", r, g, b)
}

/// Get the path of the color's swatch file.
pub fn swatch_path(color: &Rgb, options: &Options) -> PathBuf {
    options.output_dir().join(format!("{}.svg", save_name(color)))
}

/// Render the swatch for the color.
///
/// The swatch is a rectangle filled with the color as background, with the
/// color's channels as centered label in the contrasting foreground color.
///
/// ```
/// # use xterm256::termco::Rgb;
/// # use xterm256_swatches::opt::Options;
/// # use xterm256_swatches::svg::render_svg;
/// let svg = render_svg(&Rgb::new(255, 135, 0), &Options::default());
/// assert!(svg.contains(r##"fill="#ff8700""##));
/// assert!(svg.contains(r##"fill="#9f2700">(255, 135, 0)</text>"##));
/// ```
pub fn render_svg(color: &Rgb, options: &Options) -> String {
    let [r, g, b] = *color.as_ref();
    let background = to_hex(color);
    let foreground = to_hex(&contrasting_foreground(color));
    let (width, height) = (options.width(), options.height());

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}">
    <rect x="0" y="0" width="{width}" height="{height}" fill="{background}"/>
    <text x="50%" y="50%" dominant-baseline="middle" text-anchor="middle" font-size="{font_size}" fill="{foreground}">({r}, {g}, {b})</text>
</svg>
"#,
        font_size = options.font_size(),
    )
}

/// Write the swatches for all palette colors into the output directory.
///
/// This function creates the output directory if necessary. Since several
/// palette entries share the same color, e.g., black at indices 0 and 16,
/// later swatches overwrite earlier ones with identical content. The result is
/// the number of swatches written, i.e., 256.
pub fn write_swatches(options: &Options) -> Result<usize> {
    fs::create_dir_all(options.output_dir())?;

    let mut count = 0;
    for color in all_triplets() {
        let path = swatch_path(&color, options);
        fs::write(&path, render_svg(&color, options))?;
        tracing::debug!(path = %path.display(), color = %color, "wrote swatch");
        count += 1;
    }

    tracing::info!(
        count,
        dir = %options.output_dir().display(),
        "wrote swatches"
    );
    Ok(count)
}
