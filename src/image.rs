pub mod average;
pub mod flip;
pub mod reader;
pub mod writer;

/// One image sample: grid position plus normalized color channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pixel {
    /// column
    pub x: i32,
    /// row
    pub y: i32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Pixel {
    pub fn new(x: i32, y: i32, r: f32, g: f32, b: f32) -> Self {
        Self { x, y, r, g, b }
    }
}

/// Pixels in the order they were read.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Image {
    pixels: Vec<Pixel>,
}

impl Image {
    pub fn new(pixels: Vec<Pixel>) -> Self {
        Self { pixels }
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<Image>;
}

pub trait ImageWriter {
    fn write_image(&mut self) -> crate::Result<()>;
}
