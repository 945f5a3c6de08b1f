//! Element traits and the supported-type table.
//!
//! The engine is generic over [`MedianElement`] instead of carrying one code
//! path per numeric type. The trait only needs a total ordering: the median
//! is always a value *selected* from the window, never an arithmetic
//! combination, so output values stay exactly representable in the input
//! type.

use std::cmp::Ordering;

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An element type the median filter can operate on.
///
/// Floating-point implementations order through `total_cmp`, so windows
/// containing NaN still rank deterministically (NaN sorts above all other
/// values).
pub trait MedianElement: Copy + PartialEq + Send + Sync {
    /// Tag describing this type in the supported-type table.
    const ELEMENT_TYPE: ElementType;

    /// Total ordering used to rank neighborhood values.
    fn order(&self, other: &Self) -> Ordering;
}

macro_rules! impl_ordered_element {
    ($($ty:ty => $tag:expr),* $(,)?) => {
        $(
            impl MedianElement for $ty {
                const ELEMENT_TYPE: ElementType = $tag;

                fn order(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_ordered_element! {
    i8 => ElementType::Int8,
    i16 => ElementType::Int16,
    i32 => ElementType::Int32,
    i64 => ElementType::Int64,
    u16 => ElementType::UInt16,
    u64 => ElementType::UInt64,
    bool => ElementType::Bool,
}

impl MedianElement for f32 {
    const ELEMENT_TYPE: ElementType = ElementType::Float32;

    fn order(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }
}

impl MedianElement for f64 {
    const ELEMENT_TYPE: ElementType = ElementType::Float64;

    fn order(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }
}

/// Tag for each supported element type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ElementType {
    /// 32-bit IEEE float.
    Float32,
    /// 64-bit IEEE float.
    Float64,
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 16-bit integer.
    UInt16,
    /// Unsigned 64-bit integer.
    UInt64,
    /// Boolean flag.
    Bool,
}

/// Name table for the supported element types, keyed by the conventional
/// dtype-style names. Immutable process-wide configuration; dynamic callers
/// resolve names through [`ElementType::from_name`].
pub const SUPPORTED_ELEMENT_TYPES: &[(&str, ElementType)] = &[
    ("float32", ElementType::Float32),
    ("float64", ElementType::Float64),
    ("int8", ElementType::Int8),
    ("int16", ElementType::Int16),
    ("int32", ElementType::Int32),
    ("int64", ElementType::Int64),
    ("uint16", ElementType::UInt16),
    ("uint64", ElementType::UInt64),
    ("bool", ElementType::Bool),
];

impl ElementType {
    /// Looks up an element type by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedElementType`] when `name` is not in
    /// [`SUPPORTED_ELEMENT_TYPES`].
    pub fn from_name(name: &str) -> Result<Self> {
        SUPPORTED_ELEMENT_TYPES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|&(_, ty)| ty)
            .ok_or_else(|| Error::UnsupportedElementType(name.to_string()))
    }

    /// The conventional name of this element type.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ElementType::Float32 => "float32",
            ElementType::Float64 => "float64",
            ElementType::Int8 => "int8",
            ElementType::Int16 => "int16",
            ElementType::Int32 => "int32",
            ElementType::Int64 => "int64",
            ElementType::UInt16 => "uint16",
            ElementType::UInt64 => "uint64",
            ElementType::Bool => "bool",
        }
    }
}
