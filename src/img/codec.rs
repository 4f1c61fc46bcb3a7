use std::path::Path;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

use crate::my_err::MyError;

use super::{Matrix2D, Pixel, PixelPos};

/// Decodes the file at `path` into a grid of packed pixels.
///
/// Every supported container format is widened to 8-bit RGBA first, so the
/// grid always carries an alpha channel.
pub fn load(path: &Path) -> Result<Matrix2D, MyError> {
    let decoded = image::open(path).map_err(|source| MyError::Input {
        path: path.to_path_buf(),
        source,
    })?;

    let rgba: RgbaImage = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut grid = Matrix2D::empty_with_size(width as usize, height as usize);
    for (col, row, px) in rgba.enumerate_pixels() {
        grid[PixelPos::new(row as usize, col as usize)] =
            Pixel::from_channels(px[3], px[0], px[1], px[2]);
    }

    Ok(grid)
}

/// Encodes `grid` to the format implied by the extension of `path`.
pub fn save(grid: &Matrix2D, path: &Path) -> Result<(), MyError> {
    let mut rgba = RgbaImage::new(grid.w() as u32, grid.h() as u32);
    for (col, row, px) in rgba.enumerate_pixels_mut() {
        let pix = grid[PixelPos::new(row as usize, col as usize)];
        *px = Rgba([pix.r(), pix.g(), pix.b(), pix.a()]);
    }

    // jpeg carries no alpha channel, so it is dropped at encode time
    let result = match ImageFormat::from_path(path) {
        Ok(ImageFormat::Jpeg) => DynamicImage::ImageRgba8(rgba).to_rgb8().save(path),
        _ => rgba.save(path),
    };

    result.map_err(|source| MyError::Output {
        path: path.to_path_buf(),
        source,
    })
}
