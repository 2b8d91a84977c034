//! Terminal rendering.
//!
//! Every renderer writes to an `io::Write` so the binary can target stdout and
//! tests can capture into a buffer. Colors come from a fixed palette and carry
//! no meaning.

mod palette;
mod result;
mod screens;

use std::io::{self, Write};

pub use result::{display_fields, google_maps_url, render_result};
pub use screens::{render_banner, render_help};

/// Prints `Error: <message>` in red after a blank line.
pub fn render_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        palette::paint(&format!("Error: {message}"), palette::RED)
    )
}
