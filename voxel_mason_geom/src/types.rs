// Core types shared across the geometry crate.
//
// Defines lattice positions (`VoxelCoord`), the canonical axis designator
// (`Axis`), and the inclusive axis-aligned box (`VoxelBox`) that serves both
// as a bounding box and as the unit of work handed to the world's bulk fill
// call. All types derive `Serialize` and `Deserialize` so build requests and
// results can cross a JSON boundary unchanged.
//
// See also: `coords.rs` for the math helpers that operate on these types,
// `optimizer.rs` which emits `VoxelBox` lists, `shape.rs` for the
// descriptors that carry `VoxelCoord` and `Axis` fields.

use crate::error::ShapeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Spatial types
// ---------------------------------------------------------------------------

/// A position in the 3D voxel lattice. Each component is in voxel units.
///
/// Y is vertical. Ordering is lexicographic over (x, y, z), which is the
/// seed order the optimizer relies on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VoxelCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Component-wise offset.
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Manhattan distance between two coordinates.
    pub fn manhattan_distance(self, other: Self) -> u32 {
        ((self.x - other.x).unsigned_abs())
            + ((self.y - other.y).unsigned_abs())
            + ((self.z - other.z).unsigned_abs())
    }

    /// The component along `axis`.
    pub fn get(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn to_f64(self) -> [f64; 3] {
        [self.x as f64, self.y as f64, self.z as f64]
    }

    /// Round a floating-point position to the nearest lattice point.
    /// Ties round away from zero (`f64::round`), the single rounding rule
    /// used by every generator and by the rotation engine.
    pub fn from_rounded(p: [f64; 3]) -> Self {
        Self::new(p[0].round() as i32, p[1].round() as i32, p[2].round() as i32)
    }
}

impl fmt::Display for VoxelCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// One of the three canonical axes. Used as the rotational axis of
/// cylinders, tori, helices, paraboloids and hyperboloids, and as the axis
/// of a single rotation step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    #[default]
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Unit vector along this axis.
    pub fn unit(self) -> [f64; 3] {
        match self {
            Axis::X => [1.0, 0.0, 0.0],
            Axis::Y => [0.0, 1.0, 0.0],
            Axis::Z => [0.0, 0.0, 1.0],
        }
    }

    /// Map shape-local offsets to a world coordinate. `(u, v)` span the
    /// plane perpendicular to this axis and `w` runs along it. For `Y`,
    /// `u` is x and `v` is z, so a Y-axis cylinder stands upright.
    pub fn place(self, origin: VoxelCoord, u: i32, v: i32, w: i32) -> VoxelCoord {
        match self {
            Axis::X => origin.offset(w, u, v),
            Axis::Y => origin.offset(u, w, v),
            Axis::Z => origin.offset(u, v, w),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

impl FromStr for Axis {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(ShapeError::UnknownAxis(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Boxes
// ---------------------------------------------------------------------------

/// An inclusive axis-aligned box of lattice points, `from <= to`
/// component-wise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoxelBox {
    pub from: VoxelCoord,
    pub to: VoxelCoord,
}

impl VoxelBox {
    /// Build a box from any two opposite corners, normalizing so that
    /// `from` holds the minimum of each component.
    pub fn from_corners(a: VoxelCoord, b: VoxelCoord) -> Self {
        Self {
            from: VoxelCoord::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            to: VoxelCoord::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// A box covering exactly one lattice point.
    pub fn single(coord: VoxelCoord) -> Self {
        Self {
            from: coord,
            to: coord,
        }
    }

    pub fn is_single(&self) -> bool {
        self.from == self.to
    }

    /// Extent along each axis, in voxels (always >= 1).
    pub fn size(&self) -> [u64; 3] {
        [
            (self.to.x - self.from.x) as u64 + 1,
            (self.to.y - self.from.y) as u64 + 1,
            (self.to.z - self.from.z) as u64 + 1,
        ]
    }

    /// Number of lattice points covered.
    pub fn volume(&self) -> u64 {
        let [sx, sy, sz] = self.size();
        sx * sy * sz
    }

    pub fn contains(&self, coord: VoxelCoord) -> bool {
        (self.from.x..=self.to.x).contains(&coord.x)
            && (self.from.y..=self.to.y).contains(&coord.y)
            && (self.from.z..=self.to.z).contains(&coord.z)
    }

    /// Every lattice point in the box, x innermost, then z, then y.
    pub fn points(&self) -> impl Iterator<Item = VoxelCoord> + use<> {
        let (from, to) = (self.from, self.to);
        (from.y..=to.y).flat_map(move |y| {
            (from.z..=to.z)
                .flat_map(move |z| (from.x..=to.x).map(move |x| VoxelCoord::new(x, y, z)))
        })
    }
}

impl fmt::Display for VoxelBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.from, self.to)
    }
}
