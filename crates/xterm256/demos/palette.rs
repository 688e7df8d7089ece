use std::io::{stdout, Result, Write};

use xterm256::{all_triplets, contrasting_foreground};

fn main() -> Result<()> {
    let mut out = stdout().lock();

    for (index, background) in all_triplets().enumerate() {
        let [r, g, b] = *contrasting_foreground(&background).as_ref();

        // 8-bit background, 24-bit foreground
        write!(
            out,
            "\x1b[48;5;{};38;2;{};{};{}m {:>3} {} \x1b[m",
            index, r, g, b, index, background
        )?;

        if index < 16 {
            if index % 8 == 7 {
                writeln!(out)?;
            }
        } else if (index - 16) % 6 == 5 {
            writeln!(out)?;
        }
    }

    out.flush()
}
