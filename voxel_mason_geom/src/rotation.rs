// Rotation engine: reorients a voxel point set about a pivot.
//
// A single rotation turns points about one canonical axis by an angle in
// degrees. The 3x3 matrix comes from Rodrigues' formula,
// `R = I + sin(t) K + (1 - cos(t)) K^2`, where `K` is the cross-product
// matrix of the axis unit vector. Each point is rotated relative to the
// pivot, translated back, and rounded to the nearest lattice point.
//
// Sequences apply strictly in order, each step consuming the previous
// step's rounded output. Order matters (rotations do not commute) and
// rounding after every step means non-right angles accumulate error across
// a long sequence. Right angles are exact: the matrix entries differ from
// 0 and +-1 by less than 1e-16, far below what rounding can see at world
// coordinates.
//
// Steps without an explicit pivot share one default pivot: the rounded
// centroid of the point set handed to `rotate_points`, resolved before the
// first step runs.
//
// Named `Direction` presets describe where the shape's +y axis should point
// and expand to a fixed sequence of at most one rotation. `Orientation`
// wraps either a preset or a caller-supplied sequence.
//
// See also: `coords.rs` for `rounded_centroid()` and `dedup_points()`,
// `types.rs` for `Axis::unit()`.

use crate::coords::{dedup_points, rounded_centroid};
use crate::error::ShapeError;
use crate::types::{Axis, VoxelCoord};
use cgmath::{Deg, Matrix3, Rad, SquareMatrix, Vector3};
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use std::fmt;
use std::str::FromStr;

/// One rotation step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotationSpec {
    pub axis: Axis,
    #[serde(alias = "angle")]
    pub angle_degrees: f64,
    /// Defaults to the rounded centroid of the points being rotated.
    #[serde(default)]
    pub pivot: Option<VoxelCoord>,
}

impl RotationSpec {
    pub fn new(axis: Axis, angle_degrees: f64) -> Self {
        Self {
            axis,
            angle_degrees,
            pivot: None,
        }
    }

    pub fn with_pivot(mut self, pivot: VoxelCoord) -> Self {
        self.pivot = Some(pivot);
        self
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.angle_degrees.is_finite() {
            Ok(())
        } else {
            Err(ShapeError::InvalidAngle(self.angle_degrees))
        }
    }
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// Where the shape's default +y axis should end up pointing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "+x")]
    PosX,
    #[serde(rename = "-x")]
    NegX,
    #[default]
    #[serde(rename = "+y", alias = "up")]
    PosY,
    #[serde(rename = "-y", alias = "down")]
    NegY,
    #[serde(rename = "+z")]
    PosZ,
    #[serde(rename = "-z")]
    NegZ,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::PosX,
        Direction::NegX,
        Direction::PosY,
        Direction::NegY,
        Direction::PosZ,
        Direction::NegZ,
    ];

    /// The rotation sequence that carries +y onto this direction.
    pub fn rotations(self) -> SmallVec<[RotationSpec; 2]> {
        match self {
            Direction::PosY => SmallVec::new(),
            Direction::NegY => smallvec![RotationSpec::new(Axis::X, 180.0)],
            Direction::PosX => smallvec![RotationSpec::new(Axis::Z, -90.0)],
            Direction::NegX => smallvec![RotationSpec::new(Axis::Z, 90.0)],
            Direction::PosZ => smallvec![RotationSpec::new(Axis::X, 90.0)],
            Direction::NegZ => smallvec![RotationSpec::new(Axis::X, -90.0)],
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::PosX => "+x",
            Direction::NegX => "-x",
            Direction::PosY => "+y",
            Direction::NegY => "-y",
            Direction::PosZ => "+z",
            Direction::NegZ => "-z",
        };
        f.write_str(name)
    }
}

impl FromStr for Direction {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+x" => Ok(Direction::PosX),
            "-x" => Ok(Direction::NegX),
            "+y" | "up" => Ok(Direction::PosY),
            "-y" | "down" => Ok(Direction::NegY),
            "+z" => Ok(Direction::PosZ),
            "-z" => Ok(Direction::NegZ),
            _ => Err(ShapeError::UnknownDirection(s.to_string())),
        }
    }
}

/// A preset direction or an explicit rotation sequence. In JSON a preset
/// is a bare string (`"+x"`) and a custom sequence is an array of
/// `RotationSpec` objects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Orientation {
    Preset(Direction),
    Custom(Vec<RotationSpec>),
}

impl Orientation {
    pub fn rotations(&self) -> SmallVec<[RotationSpec; 2]> {
        match self {
            Orientation::Preset(d) => d.rotations(),
            Orientation::Custom(steps) => steps.iter().copied().collect(),
        }
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            Orientation::Preset(_) => Ok(()),
            Orientation::Custom(steps) => steps.iter().try_for_each(RotationSpec::validate),
        }
    }
}

// ---------------------------------------------------------------------------
// Math
// ---------------------------------------------------------------------------

/// Rodrigues rotation matrix for `angle_degrees` about a canonical axis.
pub fn rodrigues_matrix(axis: Axis, angle_degrees: f64) -> Matrix3<f64> {
    let [kx, ky, kz] = axis.unit();
    let theta = Rad::from(Deg(angle_degrees)).0;
    // Column-major: the columns of the cross-product matrix of k.
    let k = Matrix3::new(0.0, kz, -ky, -kz, 0.0, kx, ky, -kx, 0.0);
    Matrix3::identity() + k * theta.sin() + (k * k) * (1.0 - theta.cos())
}

/// Rotate one point about `pivot` and round to the lattice.
pub fn rotate_point(point: VoxelCoord, matrix: &Matrix3<f64>, pivot: VoxelCoord) -> VoxelCoord {
    let [px, py, pz] = pivot.to_f64();
    let [x, y, z] = point.to_f64();
    let r = *matrix * Vector3::new(x - px, y - py, z - pz);
    VoxelCoord::from_rounded([r.x + px, r.y + py, r.z + pz])
}

/// Apply `steps` in order to `points`. Collisions introduced by rounding
/// are merged, so the result holds distinct coordinates. An empty step list
/// returns the input unchanged apart from deduplication.
pub fn rotate_points(points: &[VoxelCoord], steps: &[RotationSpec]) -> Vec<VoxelCoord> {
    let Some(default_pivot) = rounded_centroid(points) else {
        return Vec::new();
    };
    let mut current = dedup_points(points.iter().copied());
    for step in steps {
        let matrix = rodrigues_matrix(step.axis, step.angle_degrees);
        let pivot = step.pivot.unwrap_or(default_pivot);
        current = dedup_points(current.iter().map(|&p| rotate_point(p, &matrix, pivot)));
    }
    current
}
