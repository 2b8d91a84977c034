//! Banner and help screens.

use std::io::{self, Write};

use super::palette::{Frame, GRN, LBLUE, RED, YLW};
use crate::config::PROGRAM_NAME;

const BOX_WIDTH: usize = 56;

/// Prints the decorative banner.
pub fn render_banner<W: Write>(out: &mut W) -> io::Result<()> {
    let frame = Frame::new(LBLUE, BOX_WIDTH);
    let version = env!("CARGO_PKG_VERSION");

    let rows = [
        frame.top(),
        frame.blank(),
        frame.row(&[
            ("   ██╗  ██████╗      ", RED),
            ("IP Location Finder", GRN),
        ]),
        frame.row(&[
            ("   ██║  ██╔══██╗     ", RED),
            ("Geolocation for ", GRN),
            ("IPv4 ", YLW),
            ("& ", RED),
            ("IPv6", YLW),
        ]),
        frame.row(&[
            ("   ██║  ██████╔╝     ", RED),
            ("Data ", GRN),
            (":: ", RED),
            ("ip-api.com", YLW),
        ]),
        frame.row(&[
            ("   ██║  ██╔═══╝      ", RED),
            ("Version ", YLW),
            (version, RED),
        ]),
        frame.row(&[("   ██║  ██║", RED)]),
        frame.row(&[("   ╚═╝  ╚═╝", RED)]),
        frame.blank(),
        frame.bottom(),
    ];

    writeln!(out)?;
    for row in rows {
        writeln!(out, "{row}")?;
    }
    writeln!(out)
}

/// Prints the banner followed by usage text.
pub fn render_help<W: Write>(out: &mut W) -> io::Result<()> {
    render_banner(out)?;

    let frame = Frame::new(RED, BOX_WIDTH);
    let usage = format!("{PROGRAM_NAME} [OPTION] ...");
    let example = format!(" {PROGRAM_NAME} ");

    let rows = [
        frame.top(),
        frame.row(&[(" Usage: ", YLW), (usage.as_str(), GRN)]),
        frame.row(&[(" To get IP information", YLW)]),
        frame.blank(),
        frame.row(&[(" Mandatory arguments:", GRN)]),
        frame.row(&[
            (" -h, --help ", RED),
            ("Display this help and exit", YLW),
        ]),
        frame.row(&[
            (" -I, --ip   ", RED),
            ("Get information for a specific IP", YLW),
        ]),
        frame.blank(),
        frame.row(&[(" Example:", YLW)]),
        frame.row(&[(example.as_str(), GRN), ("--ip ", RED), ("8.8.8.8", YLW)]),
        frame.bottom(),
    ];

    writeln!(out)?;
    for row in rows {
        writeln!(out, "{row}")?;
    }
    writeln!(out)
}
