use crate::img::Pixel;

use super::{WindowFilter, WindowSize};

/// Band width below which median bands are processed serially. Lower than
/// the mean threshold because selecting a median costs more per pixel.
pub const MEDIAN_SPLIT_THRESHOLD: usize = 300;

/// Rank filter: each color channel becomes the median of that channel over
/// the whole neighborhood.
#[derive(Debug, Clone)]
pub struct MedianFilter {
    size: WindowSize,
}

impl MedianFilter {
    pub fn new(size: WindowSize) -> Self {
        MedianFilter { size }
    }
}

fn median_of(values: &mut [u8]) -> u8 {
    let mid = values.len() / 2;
    *values.select_nth_unstable(mid).1
}

impl WindowFilter for MedianFilter {
    fn process_window(&self, window_buffer: &mut [Pixel]) -> Pixel {
        let mut reds = Vec::with_capacity(window_buffer.len());
        let mut greens = Vec::with_capacity(window_buffer.len());
        let mut blues = Vec::with_capacity(window_buffer.len());

        for pix in window_buffer.iter() {
            reds.push(pix.r());
            greens.push(pix.g());
            blues.push(pix.b());
        }

        let center = window_buffer[window_buffer.len() / 2];

        Pixel::from_channels(
            center.a(),
            median_of(&mut reds),
            median_of(&mut greens),
            median_of(&mut blues),
        )
    }

    fn size(&self) -> WindowSize {
        self.size
    }

    fn split_threshold(&self) -> usize {
        MEDIAN_SPLIT_THRESHOLD
    }
}
