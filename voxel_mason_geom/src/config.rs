// Data-driven geometry configuration.
//
// Every tunable number the generators read lives in `GeometryConfig`, which
// loads from JSON and falls back to defaults field-by-field. Parameters are
// grouped into nested structs: `ShellParams` holds the per-shape hollow
// banding thresholds, `BezierParams` the adaptive segmentation bounds.
// `WorldBounds` describes the buildable coordinate range that the build
// executor checks results against.
//
// Hollow thresholds are per shape and must not be merged into one value:
// spheres, cylinders and tori use an absolute shell thickness in voxels,
// ellipsoids a normalized-distance band. Paraboloids and
// hyperboloids use an exposed-face rule instead and have no threshold.
//
// See also: `solids.rs` and `curves.rs` which read these values,
// `shape.rs` where `generate()` enforces `max_voxels`.

use crate::coords::in_range;
use crate::types::VoxelCoord;
use serde::{Deserialize, Serialize};

/// Hollow-mode banding per shape family.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellParams {
    /// Sphere keeps points with `radius - sphere_thickness <= d <= radius`.
    pub sphere_thickness: f64,
    /// Cylinder keeps points whose radial distance lies within this many
    /// voxels of the radius. Caps are not part of the shell.
    pub cylinder_thickness: f64,
    /// Torus keeps points whose distance from the tube's center circle lies
    /// within this many voxels of the minor radius.
    pub torus_thickness: f64,
    /// Ellipsoid keeps points whose normalized distance is in
    /// `[ellipsoid_inner, 1.0]`.
    pub ellipsoid_inner: f64,
}

impl Default for ShellParams {
    fn default() -> Self {
        Self {
            sphere_thickness: 1.0,
            cylinder_thickness: 1.0,
            torus_thickness: 1.0,
            ellipsoid_inner: 0.8,
        }
    }
}

/// Segmentation for Bézier curves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BezierParams {
    /// Number of chords used to estimate arc length.
    pub coarse_samples: u32,
    /// Lower clamp for the adaptive segment count.
    pub min_segments: u32,
    /// Upper clamp for the adaptive or explicit segment count.
    pub max_segments: u32,
}

impl Default for BezierParams {
    fn default() -> Self {
        Self {
            coarse_samples: 10,
            min_segments: 50,
            max_segments: 1000,
        }
    }
}

/// All parameters the generators consult.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    pub shell: ShellParams,
    pub bezier: BezierParams,
    /// Ceiling on the number of voxels `generate()` will materialize.
    pub max_voxels: usize,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            shell: ShellParams::default(),
            bezier: BezierParams::default(),
            max_voxels: 2_000_000,
        }
    }
}

impl GeometryConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// The buildable region of the target world, inclusive on both ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldBounds {
    pub min_y: i32,
    pub max_y: i32,
    /// Horizontal limit: x and z must lie in `[-horizontal, horizontal]`.
    pub horizontal: i32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            min_y: -64,
            max_y: 320,
            horizontal: 30_000_000,
        }
    }
}

impl WorldBounds {
    pub fn contains(&self, coord: VoxelCoord) -> bool {
        in_range(coord.y, self.min_y, self.max_y)
            && in_range(coord.x, -self.horizontal, self.horizontal)
            && in_range(coord.z, -self.horizontal, self.horizontal)
    }
}
