//! Neighborhood median engine.
//!
//! For every output position the engine gathers the kernel-sized window
//! centered on it, resolving each axis coordinate independently through the
//! active [`BoundaryMode`], then selects the median as the order statistic
//! at index `len / 2` (`select_nth_unstable_by`, average O(n)). Under
//! `shrink` a window loses its out-of-range neighbors, but never empties:
//! the center itself always resolves.
//!
//! The output starts as a copy of the input, so conditional filtering is a
//! pass-through by construction: positions whose median equals the input
//! value are simply never overwritten. The input view is never mutated.
//!
//! Every output position depends only on the read-only input, so the 2-D
//! loop parallelizes over output rows and the 1-D loop over fixed-size
//! chunks, with each worker owning a disjoint output slice.

use medfilt_core::{BoundaryMode, MedianElement};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rayon::prelude::*;

/// Work unit for the 1-D parallel loop.
const LANE_CHUNK: usize = 1024;

/// Filters a 2-D array with a validated `(height, width)` kernel.
pub(crate) fn filter2d<T: MedianElement>(
    input: ArrayView2<'_, T>,
    kernel: (usize, usize),
    conditional: bool,
    mode: BoundaryMode,
) -> Array2<T> {
    let (rows, cols) = input.dim();
    let mut output = input.to_owned();
    if rows == 0 || cols == 0 {
        return output;
    }

    let half = (kernel.0 / 2, kernel.1 / 2);
    output
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(row, mut out_row)| {
            let mut window = Vec::with_capacity(kernel.0 * kernel.1);
            for col in 0..cols {
                window.clear();
                for dy in 0..kernel.0 {
                    let y = row as isize + dy as isize - half.0 as isize;
                    let Some(ry) = mode.resolve(y, rows) else {
                        continue;
                    };
                    for dx in 0..kernel.1 {
                        let x = col as isize + dx as isize - half.1 as isize;
                        if let Some(rx) = mode.resolve(x, cols) {
                            window.push(input[[ry, rx]]);
                        }
                    }
                }
                let median = select_median(&mut window);
                if !conditional || median != input[[row, col]] {
                    out_row[col] = median;
                }
            }
        });
    output
}

/// Filters a 1-D array with a validated kernel extent.
pub(crate) fn filter1d<T: MedianElement>(
    input: ArrayView1<'_, T>,
    kernel: usize,
    conditional: bool,
    mode: BoundaryMode,
) -> Array1<T> {
    let len = input.len();
    // Contiguous copy of the input; the view itself may be strided.
    let src: Vec<T> = input.iter().copied().collect();
    let mut output = src.clone();

    let half = kernel / 2;
    output
        .par_chunks_mut(LANE_CHUNK)
        .enumerate()
        .for_each(|(chunk_index, chunk)| {
            let base = chunk_index * LANE_CHUNK;
            let mut window = Vec::with_capacity(kernel);
            for (offset, slot) in chunk.iter_mut().enumerate() {
                let pos = base + offset;
                window.clear();
                for k in 0..kernel {
                    let coord = pos as isize + k as isize - half as isize;
                    if let Some(idx) = mode.resolve(coord, len) {
                        window.push(src[idx]);
                    }
                }
                let median = select_median(&mut window);
                if !conditional || median != src[pos] {
                    *slot = median;
                }
            }
        });
    Array1::from_vec(output)
}

/// Selects the median order statistic from a non-empty window.
///
/// For even counts this is the upper of the two central order statistics,
/// matching scipy's `median_filter` convention.
fn select_median<T: MedianElement>(window: &mut [T]) -> T {
    let mid = window.len() / 2;
    *window.select_nth_unstable_by(mid, T::order).1
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    fn arange2d(rows: usize, cols: usize) -> Array2<i32> {
        Array2::from_shape_fn((rows, cols), |(y, x)| (y * cols + x) as i32)
    }

    #[test]
    fn test_nearest_3x3_on_arange_10x10() {
        let input = arange2d(10, 10);
        let out = filter2d(input.view(), (3, 3), false, BoundaryMode::Nearest);
        assert_eq!(out[[0, 0]], 1);
        assert_eq!(out[[9, 0]], 90);
        assert_eq!(out[[9, 9]], 98);
        assert_eq!(out[[0, 9]], 9);
        assert_eq!(out[[0, 4]], 5);
        assert_eq!(out[[9, 4]], 93);
        assert_eq!(out[[4, 4]], 44);
    }

    #[test]
    fn test_nearest_3x3_on_small_int16_matrix() {
        let input = array![[0_i16, -1, 1], [12, 6, -2], [100, 4, 12]];
        let out = filter2d(input.view(), (3, 3), false, BoundaryMode::Nearest);
        assert_eq!(out.dim(), input.dim());
        assert_eq!(out[[1, 1]], 4);
        assert_eq!(out[[0, 0]], 0);
        assert_eq!(out[[0, 1]], 0);
        assert_eq!(out[[1, 0]], 6);
    }

    #[test]
    fn test_reflect_3x3_on_arange_3x3() {
        let input = arange2d(3, 3);
        let out = filter2d(input.view(), (3, 3), false, BoundaryMode::Reflect);
        let flat: Vec<i32> = out.iter().copied().collect();
        assert_eq!(flat, vec![1, 2, 2, 3, 4, 5, 6, 6, 7]);
    }

    #[test]
    fn test_shrink_3x3_on_int_matrix() {
        let input = array![
            [0, 5, 2, 6, 1],
            [2, 3, 1, 7, 1],
            [9, 8, 6, 7, 8],
            [5, 6, 8, 2, 4],
        ];
        let expected = array![
            [3, 2, 5, 2, 6],
            [5, 3, 6, 6, 7],
            [6, 6, 6, 6, 7],
            [8, 8, 7, 7, 7],
        ];
        let out = filter2d(input.view(), (3, 3), false, BoundaryMode::Shrink);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_shrink_saturates_once_kernel_covers_all_columns() {
        let input = array![
            [0, 5, 2, 6, 1],
            [2, 3, 1, 7, 1],
            [9, 8, 6, 7, 8],
            [5, 6, 8, 2, 4],
        ];
        let expected = array![
            [2, 2, 2, 2, 2],
            [2, 2, 2, 2, 2],
            [8, 8, 8, 8, 8],
            [5, 5, 5, 5, 5],
        ];
        let out9 = filter2d(input.view(), (1, 9), false, BoundaryMode::Shrink);
        let out11 = filter2d(input.view(), (1, 11), false, BoundaryMode::Shrink);
        let out21 = filter2d(input.view(), (1, 21), false, BoundaryMode::Shrink);
        assert_eq!(out9, expected);
        assert_eq!(out11, out9);
        assert_eq!(out21, out9);
    }

    #[test]
    fn test_unit_kernel_is_identity_for_every_mode() {
        let input = arange2d(10, 10);
        for mode in BoundaryMode::ALL {
            let out = filter2d(input.view(), (1, 1), false, mode);
            assert_eq!(out, input);
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = arange2d(10, 10);
        let copy = input.clone();
        let _ = filter2d(input.view(), (3, 3), false, BoundaryMode::Nearest);
        assert_eq!(input, copy);
    }

    #[test]
    fn test_conditional_keeps_unchanged_interior() {
        let input = arange2d(10, 10);
        let out = filter2d(input.view(), (3, 3), true, BoundaryMode::Nearest);
        assert_eq!(out[[0, 0]], 1);
        assert_eq!(out[[0, 1]], 2);
        // The interior median of a row-major arange equals the center value.
        assert_eq!(out.slice(ndarray::s![1..8, 1..8]), input.slice(ndarray::s![1..8, 1..8]));
        assert_eq!(out[[9, 9]], 98);
    }

    #[test]
    fn test_conditional_matches_unconditional_values() {
        let input = array![
            [0, 5, 2, 6, 1],
            [2, 3, 1, 7, 1],
            [9, 8, 6, 7, 8],
            [5, 6, 8, 2, 4],
        ];
        for mode in BoundaryMode::ALL {
            let plain = filter2d(input.view(), (3, 3), false, mode);
            let cond = filter2d(input.view(), (3, 3), true, mode);
            assert_eq!(plain, cond, "mode {mode}");
        }
    }

    #[test]
    fn test_kernel_taller_than_array_keeps_resolving() {
        let input = arange2d(3, 3);
        for mode in [BoundaryMode::Nearest, BoundaryMode::Reflect, BoundaryMode::Mirror] {
            let out = filter2d(input.view(), (9, 9), false, mode);
            assert_eq!(out.dim(), input.dim());
            // The resolved window is value-symmetric around the center.
            assert_eq!(out[[1, 1]], 4, "mode {mode}");
        }
    }

    #[test]
    fn test_filter1d_nearest_on_arange() {
        let input: Vec<i32> = (0..100).collect();
        let input = Array1::from_vec(input);
        let out = filter1d(input.view(), 5, false, BoundaryMode::Nearest);
        assert_eq!(out[0], 0);
        assert_eq!(out[9], 9);
        assert_eq!(out[99], 99);
    }

    #[test]
    fn test_filter1d_shrink_edges() {
        let input = array![5_i32, 1, 4, 2, 3];
        let out = filter1d(input.view(), 3, false, BoundaryMode::Shrink);
        // Left edge window {5, 1} -> upper central value 5.
        assert_eq!(out[0], 5);
        assert_eq!(out[1], 4);
        assert_eq!(out[2], 2);
        assert_eq!(out[3], 3);
        // Right edge window {2, 3} -> 3.
        assert_eq!(out[4], 3);
    }

    #[test]
    fn test_select_median_even_count_takes_upper_central_value() {
        let mut window = [0, 2, 3, 5];
        assert_eq!(select_median(&mut window), 3);
        let mut window = [7, 1, 6, 1];
        assert_eq!(select_median(&mut window), 6);
    }

    #[test]
    fn test_bool_median_is_majority() {
        let input = array![
            [true, false, true],
            [false, true, false],
            [true, false, true],
        ];
        let out = filter2d(input.view(), (3, 3), false, BoundaryMode::Shrink);
        // Full 3x3 window holds five true / four false.
        assert!(out[[1, 1]]);
    }
}
