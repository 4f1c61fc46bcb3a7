use crate::img::Pixel;

use super::{WindowFilter, WindowSize};

/// Band width below which mean bands are processed serially.
pub const MEAN_SPLIT_THRESHOLD: usize = 500;

/// Averaging filter: each color channel becomes the truncated integer mean
/// of that channel over the whole neighborhood.
#[derive(Debug, Clone)]
pub struct MeanFilter {
    size: WindowSize,
}

impl MeanFilter {
    pub fn new(size: WindowSize) -> Self {
        MeanFilter { size }
    }
}

impl WindowFilter for MeanFilter {
    fn process_window(&self, window_buffer: &mut [Pixel]) -> Pixel {
        let mut red_total = 0_u64;
        let mut green_total = 0_u64;
        let mut blue_total = 0_u64;

        for pix in window_buffer.iter() {
            red_total += pix.r() as u64;
            green_total += pix.g() as u64;
            blue_total += pix.b() as u64;
        }

        let cells = self.size.cells() as u64;
        let center = window_buffer[window_buffer.len() / 2];

        Pixel::from_channels(
            center.a(),
            (red_total / cells) as u8,
            (green_total / cells) as u8,
            (blue_total / cells) as u8,
        )
    }

    fn size(&self) -> WindowSize {
        self.size
    }

    fn split_threshold(&self) -> usize {
        MEAN_SPLIT_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_means_are_truncated() {
        let size = WindowSize::new(3).unwrap();
        let filter = MeanFilter::new(size);

        // blue sums to 10 over 9 cells, so the mean truncates to 1
        let mut buffer = vec![Pixel::from_channels(0, 0, 0, 1); 9];
        buffer[4] = Pixel::from_channels(0, 0, 0, 2);

        let result = filter.process_window(&mut buffer);
        assert_eq!(result, Pixel::from_channels(0, 0, 0, 1));
    }

    #[test]
    fn alpha_comes_from_the_center_cell() {
        let size = WindowSize::new(3).unwrap();
        let filter = MeanFilter::new(size);

        let mut buffer = vec![Pixel::from_channels(10, 90, 90, 90); 9];
        buffer[4] = Pixel::from_channels(200, 90, 90, 90);

        let result = filter.process_window(&mut buffer);
        assert_eq!(result, Pixel::from_channels(200, 90, 90, 90));
    }
}
