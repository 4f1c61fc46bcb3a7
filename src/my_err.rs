use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MyError {
    #[error("bad window size {0}: must be a positive odd number")]
    Config(usize),

    #[error("failed to read input image '{}': {}", path.display(), source)]
    Input {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write output image '{}': {}", path.display(), source)]
    Output {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
