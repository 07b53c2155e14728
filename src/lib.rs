use std::{
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::info;

pub use cli::CLIParser;
pub use error::Error;
pub use image::{
    average::{write_average_report, ChannelAverages},
    reader::{DatImageReader, LoadSummary},
    writer::DatImageWriter,
    Image, ImageReader, ImageWriter, Pixel,
};

mod cli;
mod error;
mod image;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_file: PathBuf,
    output_file: PathBuf,
}

impl Arguments {
    pub fn new(input_file: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            output_file: output_file.into(),
        }
    }

    pub fn input_file(&self) -> &Path {
        &self.input_file
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.display().to_string(), e)
    })
}

fn open_output_file(file_path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(file_path)
        .map_err(|e| {
            Error::UnableToOpenOutputFileForWriting(file_path.display().to_string(), e)
        })
}

/// Loads the pixel file, reports counts and channel averages to `console`,
/// then writes the vertically flipped pixels. The output file is only
/// touched once everything before it succeeded.
pub fn flip_pixel_file<W: Write>(arguments: &Arguments, console: &mut W) -> Result<()> {
    let input_name = arguments.input_file.display().to_string();
    let output_name = arguments.output_file.display().to_string();

    let input_file = open_input_file(&arguments.input_file)?;
    let mut reader = DatImageReader::new(BufReader::new(input_file), input_name);
    let mut image = reader.read_image()?;

    writeln!(console, "{}", reader.summary()).map_err(Error::FailedToWriteReport)?;
    write_average_report(console, image.channel_averages().as_ref())
        .map_err(Error::FailedToWriteReport)?;

    image.flip_vertically();
    info!("Flipped {} pixels", image.len());

    let output_file = open_output_file(&arguments.output_file)?;
    let mut writer = DatImageWriter::new(BufWriter::new(output_file), &image, output_name.clone());
    writer.write_image()?;

    writeln!(console, "Wrote flipped pixels to '{}'.", output_name)
        .map_err(Error::FailedToWriteReport)?;
    Ok(())
}
