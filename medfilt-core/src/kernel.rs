//! Kernel-size validation and scalar-to-square broadcasting.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Neighborhood extent per axis.
///
/// A pair is `(height, width)`. A bare scalar passed to a 2-D call
/// broadcasts to a square kernel; a pair passed to a 1-D call is a rank
/// mismatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KernelSize {
    /// Single extent, usable for 1-D arrays or as a square 2-D kernel.
    Scalar(usize),
    /// Per-axis extents for a 2-D array, as `(height, width)`.
    Pair(usize, usize),
}

impl From<usize> for KernelSize {
    fn from(size: usize) -> Self {
        KernelSize::Scalar(size)
    }
}

impl From<(usize, usize)> for KernelSize {
    fn from((height, width): (usize, usize)) -> Self {
        KernelSize::Pair(height, width)
    }
}

impl KernelSize {
    /// Validates this kernel for a 1-D array and returns its extent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKernelSize`] for a 2-D pair (rank mismatch)
    /// or a non-positive/even extent.
    pub fn resolve_1d(self) -> Result<usize> {
        match self {
            KernelSize::Scalar(size) => ensure_odd(size),
            KernelSize::Pair(height, width) => Err(Error::InvalidKernelSize(format!(
                "2-D kernel ({height}, {width}) applied to a 1-D array"
            ))),
        }
    }

    /// Validates this kernel for a 2-D array and returns `(height, width)`,
    /// broadcasting a scalar to a square kernel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKernelSize`] for any non-positive or even
    /// dimension.
    pub fn resolve_2d(self) -> Result<(usize, usize)> {
        match self {
            KernelSize::Scalar(size) => {
                let size = ensure_odd(size)?;
                Ok((size, size))
            }
            KernelSize::Pair(height, width) => Ok((ensure_odd(height)?, ensure_odd(width)?)),
        }
    }
}

fn ensure_odd(dim: usize) -> Result<usize> {
    if dim == 0 {
        Err(Error::InvalidKernelSize(
            "kernel dimensions must be positive".to_string(),
        ))
    } else if dim % 2 == 0 {
        Err(Error::InvalidKernelSize(format!(
            "kernel dimension {dim} is even; only odd extents have a center"
        )))
    } else {
        Ok(dim)
    }
}
