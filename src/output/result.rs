//! Result table.

use std::io::{self, Write};

use super::palette::{paint, GRN, LBLUE, RED, YLW};
use crate::config::{DIVIDER_WIDTH, MAP_ZOOM, MISSING_VALUE};
use crate::locate::{value_text, LookupResult};

const TITLE: &str = " IP LOCATION INFORMATION ";

/// Label and display value for each field, in print order.
pub fn display_fields(result: &LookupResult) -> [(&'static str, String); 13] {
    fn text(value: &Option<serde_json::Value>) -> String {
        value
            .as_ref()
            .map_or_else(|| MISSING_VALUE.to_string(), value_text)
    }

    [
        ("COUNTRY", text(&result.country)),
        ("COUNTRY CODE", text(&result.country_code)),
        ("REGION", text(&result.region)),
        ("REGION NAME", text(&result.region_name)),
        ("CITY", text(&result.city)),
        ("ZIP", text(&result.zip)),
        ("LAT", text(&result.lat)),
        ("LON", text(&result.lon)),
        ("TIME ZONE", text(&result.timezone)),
        ("ISP", text(&result.isp)),
        ("ORG", text(&result.org)),
        ("AS", text(&result.asn)),
        ("IP", text(&result.query)),
    ]
}

/// Google Maps link centered on the result; a missing coordinate is left empty.
pub fn google_maps_url(result: &LookupResult) -> String {
    let coordinate =
        |value: &Option<serde_json::Value>| value.as_ref().map(value_text).unwrap_or_default();
    format!(
        "https://www.google.com/maps/@{},{},{}z",
        coordinate(&result.lat),
        coordinate(&result.lon),
        MAP_ZOOM
    )
}

fn entry<W: Write>(out: &mut W, label: &str, value: &str) -> io::Result<()> {
    writeln!(
        out,
        "    {}{}{} {} {} {}",
        paint("[", GRN),
        paint("+", RED),
        paint("]", GRN),
        paint(label, LBLUE),
        paint(":::", RED),
        paint(value, YLW)
    )
}

/// Prints the titled result table and the derived map link.
pub fn render_result<W: Write>(out: &mut W, result: &LookupResult) -> io::Result<()> {
    let title = format!("{TITLE:-^DIVIDER_WIDTH$}");
    writeln!(out, "\n{}\n", paint(&title, GRN))?;

    for (label, value) in display_fields(result) {
        entry(out, label, &value)?;
    }

    writeln!(out)?;
    entry(out, "GOOGLE MAP", &google_maps_url(result))?;

    writeln!(out, "\n{}\n", paint(&"-".repeat(DIVIDER_WIDTH), GRN))
}
