mod filter_trait;
mod mean;
mod median;
mod window_size;

pub use filter_trait::WindowFilter;
pub use mean::{MeanFilter, MEAN_SPLIT_THRESHOLD};
pub use median::{MedianFilter, MEDIAN_SPLIT_THRESHOLD};
pub use window_size::WindowSize;
