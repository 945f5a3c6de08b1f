//! Boundary-index resolution for neighborhood windows.
//!
//! Each resolver maps a requested axis coordinate (possibly negative or past
//! the axis extent) to an in-range index, or signals that the position
//! contributes no value. All resolvers are pure, O(1), and total over every
//! `isize` input: no assumption is made that the overshoot is smaller than
//! the extent.

use std::str::FromStr;

use crate::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Policy for resolving neighborhood coordinates outside `[0, extent)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoundaryMode {
    /// Clamp to the closest edge index.
    Nearest,
    /// Reflect about the boundary without repeating the edge sample.
    Reflect,
    /// Reflect about the boundary, repeating the edge sample.
    Mirror,
    /// Drop out-of-range positions; the window shrinks at the edges.
    Shrink,
}

impl BoundaryMode {
    /// All recognized modes, in parse order.
    pub const ALL: [BoundaryMode; 4] = [
        BoundaryMode::Nearest,
        BoundaryMode::Reflect,
        BoundaryMode::Mirror,
        BoundaryMode::Shrink,
    ];

    /// The lowercase literal naming this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BoundaryMode::Nearest => "nearest",
            BoundaryMode::Reflect => "reflect",
            BoundaryMode::Mirror => "mirror",
            BoundaryMode::Shrink => "shrink",
        }
    }

    /// Resolves coordinate `coord` against an axis of extent `extent`.
    ///
    /// Returns `None` only under [`BoundaryMode::Shrink`], for coordinates
    /// outside the axis.
    #[must_use]
    pub fn resolve(self, coord: isize, extent: usize) -> Option<usize> {
        match self {
            BoundaryMode::Nearest => Some(nearest(coord, extent)),
            BoundaryMode::Reflect => Some(reflect(coord, extent)),
            BoundaryMode::Mirror => Some(mirror(coord, extent)),
            BoundaryMode::Shrink => shrink(coord, extent),
        }
    }
}

impl FromStr for BoundaryMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest" => Ok(BoundaryMode::Nearest),
            "reflect" => Ok(BoundaryMode::Reflect),
            "mirror" => Ok(BoundaryMode::Mirror),
            "shrink" => Ok(BoundaryMode::Shrink),
            other => Err(Error::UnrecognizedBoundaryMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clamps `coord` into `[0, extent - 1]`.
#[must_use]
pub fn nearest(coord: isize, extent: usize) -> usize {
    debug_assert!(extent > 0);
    let max = (extent - 1) as isize;
    coord.clamp(0, max) as usize
}

/// Reflects `coord` about the axis boundaries without repeating the edge
/// sample (period `2 * extent`).
///
/// For extent 3: `3 -> 2`, `4 -> 1`, `5 -> 0`, `6 -> 0`, `-1 -> 0`,
/// `-2 -> 1`, `-3 -> 2`, `-4 -> 2`.
#[must_use]
pub fn reflect(coord: isize, extent: usize) -> usize {
    debug_assert!(extent > 0);
    let n = extent as isize;
    let folded = coord.rem_euclid(2 * n);
    if folded < n {
        folded as usize
    } else {
        (2 * n - 1 - folded) as usize
    }
}

/// Reflects `coord` about the axis boundaries, repeating the edge sample
/// (period `2 * extent - 2`).
///
/// For extent 4: `4 -> 2`, `5 -> 1`, `6 -> 0`, `7 -> 1`, `-1 -> 1`,
/// `-2 -> 2`, `-3 -> 3`, `-4 -> 2`.
#[must_use]
pub fn mirror(coord: isize, extent: usize) -> usize {
    debug_assert!(extent > 0);
    if extent == 1 {
        return 0;
    }
    let n = extent as isize;
    let folded = coord.rem_euclid(2 * n - 2);
    if folded < n {
        folded as usize
    } else {
        (2 * n - 2 - folded) as usize
    }
}

/// Keeps in-range coordinates and drops the rest: `Some(coord)` when
/// `coord` lies in `[0, extent)`, `None` otherwise.
#[must_use]
pub fn shrink(coord: isize, extent: usize) -> Option<usize> {
    if coord >= 0 && (coord as usize) < extent {
        Some(coord as usize)
    } else {
        None
    }
}
