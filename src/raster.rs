#![cfg(feature = "image")]

//! Raster form of color grids.

use crate::grid::{Grid, Rgb};
use image::RgbImage;

impl Grid<Rgb> {
    /// Renders the nominal extent as a pixel buffer, one pixel per
    /// cell.
    pub fn to_image(&self) -> RgbImage {
        let mut image = RgbImage::new(self.width() as u32, self.height() as u32);
        for y in 0..self.height() {
            for x in 0..self.width() {
                let Rgb(r, g, b) = self.get(x, y);
                image.put_pixel(x as u32, y as u32, image::Rgb([r, g, b]));
            }
        }
        image
    }

    /// Reads a pixel buffer back into a grid.
    ///
    /// Pixels equal to `default` stay unset; every other pixel becomes
    /// a stored cell.
    ///
    /// # Panics
    ///
    /// Panics if the buffer has no pixels.
    pub fn from_image(image: &RgbImage, default: Rgb) -> Self {
        let mut grid = Grid::new(image.width() as i32, image.height() as i32, default);
        for (x, y, pixel) in image.enumerate_pixels() {
            let value = Rgb(pixel[0], pixel[1], pixel[2]);
            if value != default {
                grid.set(x as i32, y as i32, value);
            }
        }
        grid
    }
}
