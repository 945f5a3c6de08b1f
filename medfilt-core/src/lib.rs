//! medfilt-core: Core types for boundary-aware median filtering.
//!
//! This crate provides the leaf building blocks shared by the filtering
//! engine: boundary-index resolvers, kernel-size validation, element traits,
//! and error types.
//!

pub mod boundary;
pub mod element;
pub mod error;
pub mod kernel;

pub use boundary::{mirror, nearest, reflect, shrink, BoundaryMode};
pub use element::{ElementType, MedianElement, SUPPORTED_ELEMENT_TYPES};
pub use error::{Error, Result};
pub use kernel::KernelSize;
