mod codec;
mod matrix2d;
mod pixel;
mod pixel_pos;

pub use codec::{load, save};
pub use matrix2d::Matrix2D;
pub use pixel::Pixel;
pub use pixel_pos::PixelPos;
