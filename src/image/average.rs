use std::fmt::Display;
use std::io::{self, Write};

use super::Image;

const REPORT_FRACTION_DIGITS: usize = 6;

/// Arithmetic mean of every color channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelAverages {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Image {
    /// Returns `None` for an image without pixels.
    pub fn channel_averages(&self) -> Option<ChannelAverages> {
        if self.is_empty() {
            return None;
        }
        let (red, green, blue) = self.pixels().iter().fold(
            (0.0_f64, 0.0_f64, 0.0_f64),
            |(red, green, blue), pixel| {
                (
                    red + f64::from(pixel.r),
                    green + f64::from(pixel.g),
                    blue + f64::from(pixel.b),
                )
            },
        );
        let count = self.len() as f64;
        Some(ChannelAverages {
            red: red / count,
            green: green / count,
            blue: blue / count,
        })
    }
}

impl Display for ChannelAverages {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = REPORT_FRACTION_DIGITS;
        writeln!(f, "Average R: {:.*}", precision, self.red)?;
        writeln!(f, "Average G: {:.*}", precision, self.green)?;
        write!(f, "Average B: {:.*}", precision, self.blue)
    }
}

pub fn write_average_report<W: Write>(
    writer: &mut W,
    averages: Option<&ChannelAverages>,
) -> io::Result<()> {
    match averages {
        Some(averages) => writeln!(writer, "{}", averages),
        None => writeln!(writer, "No pixels loaded."),
    }
}
