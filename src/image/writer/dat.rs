use std::io::{self, Write};

use super::super::{Image, ImageWriter, Pixel};
use crate::Error;

/// enough digits to carry every bit of a single precision channel
const COLOR_FRACTION_DIGITS: usize = 16;

pub struct DatImageWriter<'a, T: Write> {
    writer: T,
    image: &'a Image,
    destination_name: String,
}

impl<'a, T: Write> DatImageWriter<'a, T> {
    pub fn new(writer: T, image: &'a Image, destination_name: impl Into<String>) -> Self {
        Self {
            writer,
            image,
            destination_name: destination_name.into(),
        }
    }

    fn write_pixel(&mut self, pixel: &Pixel) -> io::Result<()> {
        let precision = COLOR_FRACTION_DIGITS;
        writeln!(
            self.writer,
            "{},{},{:.*},{:.*},{:.*}",
            pixel.x,
            pixel.y,
            precision,
            f64::from(pixel.r),
            precision,
            f64::from(pixel.g),
            precision,
            f64::from(pixel.b)
        )
    }

    fn write_pixels(&mut self) -> io::Result<()> {
        let image = self.image;
        for pixel in image.pixels() {
            self.write_pixel(pixel)?;
        }
        self.writer.flush()
    }
}

impl<T: Write> ImageWriter for DatImageWriter<'_, T> {
    fn write_image(&mut self) -> crate::Result<()> {
        self.write_pixels()
            .map_err(|e| Error::FailedToWriteOutputFile(self.destination_name.clone(), e))
    }
}
