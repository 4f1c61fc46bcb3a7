use crate::filter::WindowFilter;
use crate::img::{Matrix2D, Pixel, PixelPos};

/// Runs `filter` over `src`, splitting the work across the rayon pool.
///
/// The returned grid starts as a copy of `src`; only interior pixels (those
/// whose whole neighborhood lies inside the grid) are overwritten, so the
/// border margins keep their original values. Every neighborhood is read
/// from `src` itself, never from partially written output.
pub fn process_with_window<F: WindowFilter>(src: &Matrix2D, filter: &F) -> Matrix2D {
    let mut res = src.clone();

    let origin_cols = origin_count(src.w(), filter.size().side());
    if origin_cols == 0 {
        return res;
    }

    let middle = filter.size().middle();
    let out = res.cols_mut(middle..middle + origin_cols);
    split_band(src, out, 0, origin_cols, filter);

    res
}

/// Same traversal as [`process_with_window`], executed on the calling
/// thread without any splitting.
pub fn process_with_window_serial<F: WindowFilter>(src: &Matrix2D, filter: &F) -> Matrix2D {
    let mut res = src.clone();

    let origin_cols = origin_count(src.w(), filter.size().side());
    if origin_cols == 0 {
        return res;
    }

    let middle = filter.size().middle();
    let out = res.cols_mut(middle..middle + origin_cols);
    process_band(src, out, 0, origin_cols, filter);

    res
}

/// Window origin positions along a dimension of length `dim`. Zero when the
/// window does not fit, which makes the whole run a no-op copy.
fn origin_count(dim: usize, side: usize) -> usize {
    dim.saturating_sub(side)
}

/// Fork-join recursion over a band of window origin columns.
///
/// `out` is the output slice for exactly the columns this band writes:
/// `[first_origin + middle, first_origin + middle + count)`. Splitting the
/// slice before forking keeps sibling write ranges disjoint; both siblings
/// read from the full shared `src`.
fn split_band<F: WindowFilter>(
    src: &Matrix2D,
    out: &mut [Pixel],
    first_origin: usize,
    count: usize,
    filter: &F,
) {
    if count <= 1 || count < filter.split_threshold() {
        process_band(src, out, first_origin, count, filter);
        return;
    }

    let left_count = count / 2;
    let (left, right) = out.split_at_mut(left_count * src.h());

    rayon::join(
        || split_band(src, left, first_origin, left_count, filter),
        || split_band(src, right, first_origin + left_count, count - left_count, filter),
    );
}

/// Serial traversal of one band, the leaf of the recursion.
fn process_band<F: WindowFilter>(
    src: &Matrix2D,
    out: &mut [Pixel],
    first_origin: usize,
    count: usize,
    filter: &F,
) {
    let side = filter.size().side();
    let middle = filter.size().middle();
    let height = src.h();
    let origin_rows = origin_count(height, side);

    let mut window_buf = vec![Pixel::default(); filter.size().cells()];

    for band_col in 0..count {
        let col = first_origin + band_col;

        for row in 0..origin_rows {
            let origin = PixelPos::new(row, col);
            for win_row in 0..side {
                for win_col in 0..side {
                    window_buf[win_row * side + win_col] =
                        src[origin + PixelPos::new(win_row, win_col)];
                }
            }

            out[band_col * height + row + middle] = filter.process_window(&mut window_buf);
        }
    }
}
