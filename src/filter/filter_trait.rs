use crate::img::Pixel;

use super::WindowSize;

/// One aggregation strategy of the window filter.
///
/// `process_window` gets the neighborhood cells in raster order, so for the
/// odd-sided windows `WindowSize` permits the center cell sits at index
/// `window_buffer.len() / 2`. The buffer is mutable because a strategy may
/// reorder it while selecting its result; the caller refills it completely
/// before every call.
pub trait WindowFilter: Sync {
    fn process_window(&self, window_buffer: &mut [Pixel]) -> Pixel;

    fn size(&self) -> WindowSize;

    /// Band width (in window origin columns) below which the engine
    /// processes serially instead of splitting further.
    fn split_threshold(&self) -> usize;
}
