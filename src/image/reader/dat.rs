use std::fmt::Display;
use std::io::BufRead;
use std::str::{self, FromStr};

use log::{debug, info};

use super::super::{Image, ImageReader, Pixel};
use crate::Error;

const FIELD_DELIMITER: char = ',';
const FIELD_COUNT: usize = 5;
const LINE_TERMINATOR: u8 = b'\n';
const CARRIAGE_RETURN: u8 = b'\r';
/// 512 x 256 pixels
const EXPECTED_PIXEL_COUNT: usize = 131_072;

const X_FIELD_NAME: &str = "x";
const Y_FIELD_NAME: &str = "y";
const RED_FIELD_NAME: &str = "r";
const GREEN_FIELD_NAME: &str = "g";
const BLUE_FIELD_NAME: &str = "b";

/// Parses one `x,y,r,g,b` line. The line is accepted as a whole or not at all.
impl FromStr for Pixel {
    type Err = Error;

    fn from_str(line: &str) -> crate::Result<Self> {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        if fields.len() != FIELD_COUNT {
            return Err(Error::WrongNumberOfFields(fields.len()));
        }
        Ok(Pixel {
            x: parse_field(fields[0], X_FIELD_NAME)?,
            y: parse_field(fields[1], Y_FIELD_NAME)?,
            r: parse_channel_field(fields[2], RED_FIELD_NAME)?,
            g: parse_channel_field(fields[3], GREEN_FIELD_NAME)?,
            b: parse_channel_field(fields[4], BLUE_FIELD_NAME)?,
        })
    }
}

fn parse_field<T: FromStr>(field: &str, field_name: &'static str) -> crate::Result<T> {
    field
        .trim()
        .parse()
        .map_err(|_| Error::ParsingOfFieldFailed(field_name))
}

/// Like `parse_field`, but a value that does not fit into an `f32` is an error
/// instead of becoming infinity or zero.
fn parse_channel_field(field: &str, field_name: &'static str) -> crate::Result<f32> {
    let text = field.trim();
    let value: f32 = parse_field(text, field_name)?;
    if is_out_of_range(text, value) {
        return Err(Error::ParsingOfFieldFailed(field_name));
    }
    Ok(value)
}

fn is_out_of_range(text: &str, value: f32) -> bool {
    let unsigned = text.trim_start_matches(|c| c == '+' || c == '-');
    if value.is_infinite() {
        return !unsigned.to_ascii_lowercase().starts_with("inf");
    }
    let mantissa = unsigned.split(|c| c == 'e' || c == 'E').next().unwrap_or("");
    value == 0.0 && mantissa.bytes().any(|digit| (b'1'..=b'9').contains(&digit))
}

/// Line counts of the last read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub loaded: usize,
    pub malformed: usize,
}

impl Display for LoadSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Loaded {} pixels", self.loaded)?;
        if self.malformed > 0 {
            write!(f, " ({} malformed line(s) skipped)", self.malformed)?;
        }
        write!(f, ".")
    }
}

pub struct DatImageReader<R: BufRead> {
    reader: R,
    source_name: String,
    summary: LoadSummary,
}

impl<R: BufRead> DatImageReader<R> {
    pub fn new(reader: R, source_name: impl Into<String>) -> Self {
        Self {
            reader,
            source_name: source_name.into(),
            summary: LoadSummary::default(),
        }
    }

    pub fn summary(&self) -> LoadSummary {
        self.summary
    }

    fn read_error(&self, error: std::io::Error) -> Error {
        Error::FailedToReadInputFile(self.source_name.clone(), error)
    }

    fn parse_line(line: &[u8]) -> crate::Result<Pixel> {
        str::from_utf8(line)
            .map_err(|_| Error::LineIsNotValidUtf8)?
            .parse()
    }
}

impl<R: BufRead> ImageReader for DatImageReader<R> {
    fn read_image(&mut self) -> crate::Result<Image> {
        let mut pixels = Vec::with_capacity(EXPECTED_PIXEL_COUNT);
        let mut summary = LoadSummary::default();
        let mut line = Vec::new();
        let mut line_number = 0;

        loop {
            line.clear();
            let bytes_read = self
                .reader
                .read_until(LINE_TERMINATOR, &mut line)
                .map_err(|e| self.read_error(e))?;
            if bytes_read == 0 {
                break;
            }
            line_number += 1;

            if line.last() == Some(&LINE_TERMINATOR) {
                line.pop();
            }
            if line.last() == Some(&CARRIAGE_RETURN) {
                line.pop();
            }
            if line.is_empty() {
                continue;
            }

            match Self::parse_line(&line) {
                Ok(pixel) => {
                    pixels.push(pixel);
                    summary.loaded += 1;
                }
                Err(e) => {
                    debug!("Skipping malformed line {}: {}", line_number, e);
                    summary.malformed += 1;
                }
            }
        }

        self.summary = summary;
        info!(
            "Read {} lines from '{}': {} pixels, {} malformed",
            line_number, self.source_name, summary.loaded, summary.malformed
        );

        if pixels.is_empty() {
            return Err(Error::NoValidPixelsRead(self.source_name.clone()));
        }
        Ok(Image::new(pixels))
    }
}
