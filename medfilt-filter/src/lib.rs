//! medfilt-filter: Boundary-aware median filtering for 1-D and 2-D arrays.
//!
//! For every element of the input, the filter computes the median of a
//! kernel-sized neighborhood centered on it. Neighborhood coordinates that
//! fall outside the array are resolved by the selected [`BoundaryMode`]:
//! `nearest` clamps, `reflect` and `mirror` fold (without and with edge
//! repetition), and `shrink` drops them so the window contracts at the
//! edges. Under conditional filtering an element is only overwritten when
//! its median differs from the input value.
//!
//! ```
//! use medfilt_filter::{medfilt2d, BoundaryMode};
//! use ndarray::array;
//!
//! let image = array![[0, 5, 2], [2, 3, 1], [9, 8, 6]];
//! let filtered = medfilt2d(image.view(), 3, false, BoundaryMode::Shrink).unwrap();
//! assert_eq!(filtered.dim(), image.dim());
//! ```

mod engine;
pub mod image;

pub use image::ImageData;
pub use medfilt_core::{BoundaryMode, ElementType, Error, KernelSize, MedianElement, Result};

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Median-filters a 2-D array.
///
/// `kernel_size` is `(height, width)`; a bare scalar broadcasts to a square
/// kernel. The returned array has the same shape and element type as
/// `image` and shares no storage with it.
///
/// # Errors
///
/// Returns [`Error::InvalidKernelSize`] if any kernel dimension is zero or
/// even. Validation happens before any filtering work.
pub fn medfilt2d<T, K>(
    image: ArrayView2<'_, T>,
    kernel_size: K,
    conditional: bool,
    mode: BoundaryMode,
) -> Result<Array2<T>>
where
    T: MedianElement,
    K: Into<KernelSize>,
{
    let kernel = kernel_size.into().resolve_2d()?;
    Ok(engine::filter2d(image, kernel, conditional, mode))
}

/// Median-filters a 1-D array.
///
/// # Errors
///
/// Returns [`Error::InvalidKernelSize`] if `kernel_size` is zero, even, or
/// a 2-D pair (rank mismatch).
pub fn medfilt1d<T, K>(
    signal: ArrayView1<'_, T>,
    kernel_size: K,
    conditional: bool,
    mode: BoundaryMode,
) -> Result<Array1<T>>
where
    T: MedianElement,
    K: Into<KernelSize>,
{
    let kernel = kernel_size.into().resolve_1d()?;
    Ok(engine::filter1d(signal, kernel, conditional, mode))
}
