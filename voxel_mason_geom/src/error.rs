// Errors raised by the geometry crate.
//
// Everything here is an input problem detected before or during point
// generation: a descriptor that fails `Shape::validate()`, an axis or
// direction string that does not parse, or a shape whose voxel count would
// exceed the configured ceiling. Degenerate-but-valid input is not an error;
// generators return an empty point set for it.

use crate::types::VoxelCoord;
use thiserror::Error;

/// Errors returned by shape validation, parsing, and materialization.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// A radius was zero, negative, or not finite.
    #[error("{name} must be a positive finite number, got {value}")]
    InvalidRadius { name: &'static str, value: f64 },

    /// A height or length parameter was zero.
    #[error("{name} must be at least 1, got {value}")]
    InvalidExtent { name: &'static str, value: i64 },

    /// A radius or height too large for lattice arithmetic.
    #[error("{name} of {value} exceeds the limit of {limit}")]
    ExtentTooLarge {
        name: &'static str,
        value: f64,
        limit: u32,
    },

    /// A descriptor coordinate too far from the origin.
    #[error("{name} {coord} is outside the addressable range")]
    CoordinateOutOfRange { name: &'static str, coord: VoxelCoord },

    /// A helix turn count was zero, negative, or not finite.
    #[error("turns must be a positive finite number, got {0}")]
    InvalidTurns(f64),

    /// Hyperboloid end radius smaller than its waist radius.
    #[error("end_radius ({end}) must be >= waist_radius ({waist})")]
    InvertedHyperboloid { waist: f64, end: f64 },

    /// Bézier curves take between 1 and 10 control points.
    #[error("bezier curves take 1..=10 control points, got {0}")]
    ControlPointCount(usize),

    /// An explicit Bézier segment count of zero.
    #[error("segments must be at least 1")]
    ZeroSegments,

    /// A rotation angle that is NaN or infinite.
    #[error("rotation angle must be finite, got {0}")]
    InvalidAngle(f64),

    /// An axis designator other than x, y, or z.
    #[error("unknown axis designator: {0:?}")]
    UnknownAxis(String),

    /// A direction name that is not one of the presets.
    #[error("unknown direction preset: {0:?}")]
    UnknownDirection(String),

    /// The shape would produce more voxels than the configured ceiling.
    #[error("shape exceeds the voxel limit of {limit}")]
    TooManyVoxels { limit: usize },
}
