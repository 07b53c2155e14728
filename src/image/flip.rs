use log::debug;

use super::Image;

impl Image {
    /// Highest row index present, `None` without pixels.
    pub fn max_row(&self) -> Option<i32> {
        self.pixels.iter().map(|pixel| pixel.y).max()
    }

    /// Mirrors every row about the highest observed row, so row 0 and
    /// `max_row` trade places. Columns and colors stay as they are.
    pub fn flip_vertically(&mut self) {
        let Some(max_row) = self.max_row() else {
            return;
        };
        debug!("Flipping {} pixels about row {}", self.pixels.len(), max_row);
        for pixel in self.pixels.iter_mut() {
            // rows below zero may push the result past i32::MAX
            pixel.y = max_row.wrapping_sub(pixel.y);
        }
    }
}

#[cfg(test)]
mod test {
    use crate::image::{Image, Pixel};

    fn create_test_image() -> Image {
        Image::new(vec![
            Pixel::new(0, 0, 0.5, 0.5, 0.5),
            Pixel::new(1, 3, 1.0, 0.0, 0.0),
            Pixel::new(2, 1, 0.0, 1.0, 0.0),
            Pixel::new(3, 3, 0.0, 0.0, 1.0),
        ])
    }

    fn rows(image: &Image) -> Vec<i32> {
        image.pixels().iter().map(|pixel| pixel.y).collect()
    }

    #[test]
    fn flip_swaps_top_and_bottom_row() {
        let mut image = create_test_image();
        image.flip_vertically();
        assert_eq!(rows(&image), vec![3, 0, 2, 0]);
    }

    #[test]
    fn flip_keeps_columns_colors_and_order() {
        let original = create_test_image();
        let mut image = original.clone();
        image.flip_vertically();
        for (flipped, original) in image.pixels().iter().zip(original.pixels()) {
            assert_eq!(flipped.x, original.x);
            assert_eq!(flipped.r, original.r);
            assert_eq!(flipped.g, original.g);
            assert_eq!(flipped.b, original.b);
        }
    }

    #[test]
    fn flip_twice_restores_rows() {
        let original = create_test_image();
        let mut image = original.clone();
        image.flip_vertically();
        image.flip_vertically();
        assert_eq!(image, original);
    }

    #[test]
    fn flipped_rows_stay_in_range() {
        let mut image = create_test_image();
        let max_row = image.max_row().unwrap();
        image.flip_vertically();
        assert!(image.pixels().iter().all(|p| 0 <= p.y && p.y <= max_row));
        assert_eq!(image.max_row(), Some(max_row));
    }

    #[test]
    fn flip_sparse_rows_uses_observed_maximum() {
        let mut image = Image::new(vec![
            Pixel::new(0, 10, 0.0, 0.0, 0.0),
            Pixel::new(0, 250, 0.0, 0.0, 0.0),
            Pixel::new(0, 255, 0.0, 0.0, 0.0),
        ]);
        image.flip_vertically();
        assert_eq!(rows(&image), vec![245, 5, 0]);
    }

    #[test]
    fn flip_full_row_range() {
        let original = Image::new(vec![
            Pixel::new(0, 0, 0.0, 0.0, 0.0),
            Pixel::new(0, i32::MAX, 0.0, 0.0, 0.0),
        ]);
        let mut image = original.clone();
        image.flip_vertically();
        assert_eq!(rows(&image), vec![i32::MAX, 0]);
        image.flip_vertically();
        assert_eq!(image, original);
    }

    #[test]
    fn flip_rows_below_zero_does_not_panic() {
        let mut image = Image::new(vec![
            Pixel::new(0, i32::MIN, 0.0, 0.0, 0.0),
            Pixel::new(0, 1, 0.0, 0.0, 0.0),
        ]);
        image.flip_vertically();
        assert_eq!(rows(&image), vec![i32::MIN + 1, 0]);
    }

    #[test]
    fn flip_empty_image() {
        let mut image = Image::default();
        image.flip_vertically();
        assert!(image.is_empty());
        assert_eq!(image.max_row(), None);
    }
}
