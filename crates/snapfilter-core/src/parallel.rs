//! Row-wise buffer construction, optionally on the rayon thread pool.
//!
//! Every stage in the pipeline writes each output row independently of the
//! others, so rows can be filled in any order. With the `parallel` feature
//! enabled the rows are distributed across rayon workers; otherwise they are
//! filled sequentially on the calling thread. Output is identical either way.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::raster::CHANNELS;

/// Allocate a `width x height` RGBA buffer and fill it one row at a time.
///
/// `fill_row` receives the row index and the row's mutable slice
/// (`width * 4` bytes). `width` and `height` must be non-zero.
pub(crate) fn build_rows<F>(width: u32, height: u32, fill_row: F) -> Vec<u8>
where
    F: Fn(usize, &mut [u8]) + Send + Sync,
{
    let row_len = width as usize * CHANNELS;
    let mut output = vec![0u8; row_len * height as usize];
    if row_len == 0 {
        return output;
    }

    #[cfg(feature = "parallel")]
    output
        .par_chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| fill_row(y, row));

    #[cfg(not(feature = "parallel"))]
    output
        .chunks_exact_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| fill_row(y, row));

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_receive_their_index() {
        let buf = build_rows(2, 3, |y, row| row.fill(y as u8));
        assert_eq!(buf.len(), 2 * 3 * 4);
        assert!(buf[0..8].iter().all(|&v| v == 0));
        assert!(buf[8..16].iter().all(|&v| v == 1));
        assert!(buf[16..24].iter().all(|&v| v == 2));
    }

    #[test]
    fn test_zero_width_is_empty() {
        let buf = build_rows(0, 4, |_, row| row.fill(9));
        assert!(buf.is_empty());
    }
}
