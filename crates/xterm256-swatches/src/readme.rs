//! Writing the README table that lists all palette colors.

use std::fs;
use std::io::Result;

use xterm256::termco::Rgb;
use xterm256::{all_triplets, to_hex};

use crate::opt::Options;
use crate::svg::save_name;

const HEADER: &str = r#"<table align="center" border="0">
<tr>
<td align="center"><b>Index</b></td>
<td align="center"><b>Hex</b></td>
<td align="center"><b>Display</b></td>
</tr>
"#;

const FOOTER: &str = "</table>\n";

/// Get the reference to the color's swatch as used in the README.
///
/// The reference always uses forward slashes, independent of platform.
pub fn swatch_reference(color: &Rgb, options: &Options) -> String {
    let dir = options.output_dir().to_string_lossy().replace('\\', "/");
    let dir = dir.trim_end_matches('/');

    if dir.is_empty() {
        format!("{}.svg", save_name(color))
    } else {
        format!("{}/{}.svg", dir, save_name(color))
    }
}

/// Render the README table.
///
/// The table has one row per palette index, in order, with the index, the
/// hexadecimal color, and the color's swatch.
pub fn render_readme(options: &Options) -> String {
    let mut readme = String::from(HEADER);

    for (index, color) in all_triplets().enumerate() {
        readme.push_str(&format!(
            r#"<tr>
<td align="center">{}</td>
<td align="center">

#### `{}`
</td>
<td align="center"><img src="{}"></td>
</tr>
"#,
            index,
            to_hex(&color),
            swatch_reference(&color, options)
        ));
    }

    readme.push_str(FOOTER);
    readme
}

/// Write the README table to the configured path.
pub fn write_readme(options: &Options) -> Result<()> {
    fs::write(options.readme_path(), render_readme(options))?;
    tracing::info!(path = %options.readme_path().display(), "wrote README");
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{render_readme, swatch_reference, write_readme, FOOTER, HEADER};
    use crate::opt::Options;
    use xterm256::termco::Rgb;

    #[test]
    fn test_reference() {
        let orange = Rgb::new(255, 135, 0);
        assert_eq!(
            swatch_reference(&orange, &Options::default()),
            "imgs/ff8700.svg",
            "default directory"
        );

        let options = Options::builder().output_dir("docs/imgs/").build();
        assert_eq!(
            swatch_reference(&orange, &options),
            "docs/imgs/ff8700.svg",
            "nested directory with trailing slash"
        );

        let options = Options::builder().output_dir("").build();
        assert_eq!(swatch_reference(&orange, &options), "ff8700.svg", "current directory");
    }

    #[test]
    fn test_render() {
        let readme = render_readme(&Options::default());

        assert!(readme.starts_with(HEADER), "header");
        assert!(readme.ends_with(FOOTER), "footer");
        assert_eq!(readme.matches("<tr>").count(), 257, "header row plus 256 rows");
        assert_eq!(readme.matches("<img ").count(), 256, "one swatch per row");

        let first = r#"<tr>
<td align="center">0</td>
<td align="center">

#### `#000000`
</td>
<td align="center"><img src="imgs/000000.svg"></td>
</tr>
"#;
        assert!(readme[HEADER.len()..].starts_with(first), "first row");

        let last = r#"<td align="center">255</td>
<td align="center">

#### `#eeeeee`
</td>
<td align="center"><img src="imgs/eeeeee.svg"></td>
</tr>
</table>
"#;
        assert!(readme.ends_with(last), "last row");

        // Rows appear in index order.
        let at_9 = readme.find(r#"<td align="center">9</td>"#);
        let at_10 = readme.find(r#"<td align="center">10</td>"#);
        assert!(at_9 < at_10, "ascending indices");
    }

    #[test]
    fn test_write() -> std::io::Result<()> {
        let tmp = tempfile::tempdir()?;
        let path = tmp.path().join("README.md");
        let options = Options::builder().readme_path(&path).build();

        write_readme(&options)?;
        let written = std::fs::read_to_string(&path)?;
        assert_eq!(written, render_readme(&options), "file content");
        Ok(())
    }
}
