//! Dynamically typed 2-D images.
//!
//! [`ImageData`] carries one owned array per supported element type so that
//! callers which only learn the element type at run time (bindings, format
//! readers handing over plain buffers) can still reach the generic engine.
//! Filtering preserves the variant.

use medfilt_core::{BoundaryMode, ElementType, Error, KernelSize, MedianElement, Result};
use ndarray::Array2;

use crate::medfilt2d;

/// A 2-D array of one of the supported element types.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageData {
    /// 32-bit float image.
    Float32(Array2<f32>),
    /// 64-bit float image.
    Float64(Array2<f64>),
    /// Signed 8-bit image.
    Int8(Array2<i8>),
    /// Signed 16-bit image.
    Int16(Array2<i16>),
    /// Signed 32-bit image.
    Int32(Array2<i32>),
    /// Signed 64-bit image.
    Int64(Array2<i64>),
    /// Unsigned 16-bit image.
    UInt16(Array2<u16>),
    /// Unsigned 64-bit image.
    UInt64(Array2<u64>),
    /// Boolean mask image.
    Bool(Array2<bool>),
}

macro_rules! impl_image_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Array2<$ty>> for ImageData {
                fn from(array: Array2<$ty>) -> Self {
                    ImageData::$variant(array)
                }
            }
        )*
    };
}

impl_image_from! {
    f32 => Float32,
    f64 => Float64,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u16 => UInt16,
    u64 => UInt64,
    bool => Bool,
}

impl ImageData {
    /// Builds an image from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] when `data.len()` is not
    /// `rows * cols`.
    pub fn from_shape_vec<T>(shape: (usize, usize), data: Vec<T>) -> Result<Self>
    where
        T: MedianElement,
        Array2<T>: Into<ImageData>,
    {
        let len = data.len();
        let array = Array2::from_shape_vec(shape, data).map_err(|_| Error::ShapeMismatch {
            rows: shape.0,
            cols: shape.1,
            len,
        })?;
        Ok(array.into())
    }

    /// The element type of this image.
    #[must_use]
    pub fn element_type(&self) -> ElementType {
        match self {
            ImageData::Float32(_) => ElementType::Float32,
            ImageData::Float64(_) => ElementType::Float64,
            ImageData::Int8(_) => ElementType::Int8,
            ImageData::Int16(_) => ElementType::Int16,
            ImageData::Int32(_) => ElementType::Int32,
            ImageData::Int64(_) => ElementType::Int64,
            ImageData::UInt16(_) => ElementType::UInt16,
            ImageData::UInt64(_) => ElementType::UInt64,
            ImageData::Bool(_) => ElementType::Bool,
        }
    }

    /// `(rows, cols)` of the underlying array.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        match self {
            ImageData::Float32(a) => a.dim(),
            ImageData::Float64(a) => a.dim(),
            ImageData::Int8(a) => a.dim(),
            ImageData::Int16(a) => a.dim(),
            ImageData::Int32(a) => a.dim(),
            ImageData::Int64(a) => a.dim(),
            ImageData::UInt16(a) => a.dim(),
            ImageData::UInt64(a) => a.dim(),
            ImageData::Bool(a) => a.dim(),
        }
    }

    /// Median-filters this image, preserving its element type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidKernelSize`] for an invalid kernel; see
    /// [`medfilt2d`].
    pub fn median_filter<K>(
        &self,
        kernel_size: K,
        conditional: bool,
        mode: BoundaryMode,
    ) -> Result<Self>
    where
        K: Into<KernelSize>,
    {
        let kernel = kernel_size.into();
        match self {
            ImageData::Float32(a) => Ok(medfilt2d(a.view(), kernel, conditional, mode)?.into()),
            ImageData::Float64(a) => Ok(medfilt2d(a.view(), kernel, conditional, mode)?.into()),
            ImageData::Int8(a) => Ok(medfilt2d(a.view(), kernel, conditional, mode)?.into()),
            ImageData::Int16(a) => Ok(medfilt2d(a.view(), kernel, conditional, mode)?.into()),
            ImageData::Int32(a) => Ok(medfilt2d(a.view(), kernel, conditional, mode)?.into()),
            ImageData::Int64(a) => Ok(medfilt2d(a.view(), kernel, conditional, mode)?.into()),
            ImageData::UInt16(a) => Ok(medfilt2d(a.view(), kernel, conditional, mode)?.into()),
            ImageData::UInt64(a) => Ok(medfilt2d(a.view(), kernel, conditional, mode)?.into()),
            ImageData::Bool(a) => Ok(medfilt2d(a.view(), kernel, conditional, mode)?.into()),
        }
    }
}
