// Shape descriptors and generator dispatch.
//
// `Shape` is a closed union over every buildable shape family. Each variant
// carries its own parameter struct; `voxels()` dispatches to the matching
// generator in `solids.rs` or `curves.rs` by exhaustive `match`, so there is
// no string comparison anywhere on the geometry path. On the wire a shape
// is a JSON object tagged by its `"shape"` field, e.g.
// `{"shape": "sphere", "center": {..}, "radius": 4.0, "hollow": true}`.
//
// Generators are lazy: `voxels()` returns an iterator and nothing is
// allocated until `generate()` materializes it, refusing to go past
// `GeometryConfig::max_voxels`.
//
// `Shape::validate()` rejects parameter values that would make a generator
// meaningless (non-positive radii, zero heights, too many control points)
// and extents or coordinates past `MAX_EXTENT`/`MAX_COORD`, which keeps all
// lattice arithmetic inside `i32`. `generate()` validates first; callers of
// the raw `voxels()` iterator must validate themselves. Generators never
// panic on valid input and return an empty sequence for degenerate-but-valid
// shapes.
//
// See also: `solids.rs` (implicit-surface shapes and cubes), `curves.rs`
// (line, helix, Bézier), `config.rs` (thresholds), `error.rs`.

use crate::config::GeometryConfig;
use crate::curves;
use crate::error::ShapeError;
use crate::solids;
use crate::types::{Axis, VoxelCoord};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Parameter structs
// ---------------------------------------------------------------------------

/// Inclusive box between two opposite corners.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubeParams {
    pub from: VoxelCoord,
    pub to: VoxelCoord,
    /// Keep only points on one of the six faces.
    #[serde(default)]
    pub hollow: bool,
}

/// Face-connected voxel line between two endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineParams {
    pub from: VoxelCoord,
    pub to: VoxelCoord,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereParams {
    pub center: VoxelCoord,
    pub radius: f64,
    #[serde(default)]
    pub hollow: bool,
}

/// Upright (along `axis`) cylinder whose first layer sits at `center`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CylinderParams {
    pub center: VoxelCoord,
    pub radius: f64,
    /// Number of layers along the axis.
    pub height: u32,
    #[serde(default)]
    pub axis: Axis,
    /// Open tube: side wall only, no caps.
    #[serde(default)]
    pub hollow: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EllipsoidParams {
    pub center: VoxelCoord,
    pub radius_x: f64,
    pub radius_y: f64,
    pub radius_z: f64,
    #[serde(default)]
    pub hollow: bool,
}

/// Ring torus lying in the plane perpendicular to `axis`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TorusParams {
    pub center: VoxelCoord,
    /// Distance from the center to the middle of the tube.
    pub major_radius: f64,
    /// Radius of the tube.
    pub minor_radius: f64,
    #[serde(default)]
    pub axis: Axis,
    #[serde(default)]
    pub hollow: bool,
}

/// Spiral rising along `axis` from `center`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HelixParams {
    pub center: VoxelCoord,
    pub radius: f64,
    /// Number of layers the spiral climbs through.
    pub height: u32,
    pub turns: f64,
    #[serde(default)]
    pub axis: Axis,
    #[serde(default)]
    pub clockwise: bool,
}

/// Paraboloid with its vertex at `center`, opening toward +`axis`, reaching
/// `radius` at its last layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParaboloidParams {
    pub center: VoxelCoord,
    pub radius: f64,
    pub height: u32,
    #[serde(default)]
    pub axis: Axis,
    #[serde(default)]
    pub hollow: bool,
}

/// Hyperboloid of one sheet. `center` is the first layer; the waist sits at
/// mid-height and the first and last layers reach `end_radius`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HyperboloidParams {
    pub center: VoxelCoord,
    pub waist_radius: f64,
    pub end_radius: f64,
    pub height: u32,
    #[serde(default)]
    pub axis: Axis,
    #[serde(default)]
    pub hollow: bool,
}

/// Bézier curve of degree `control_points.len() + 1`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BezierCurveParams {
    pub start: VoxelCoord,
    pub end: VoxelCoord,
    pub control_points: Vec<VoxelCoord>,
    /// Explicit sample count; adaptive from estimated arc length if absent.
    #[serde(default)]
    pub segments: Option<u32>,
}

/// Maximum number of Bézier control points (degree 11).
pub const MAX_CONTROL_POINTS: usize = 10;

/// Largest accepted radius or height. A shape at `MAX_COORD` with a torus
/// reach of two extents still stays inside `i32`.
pub const MAX_EXTENT: u32 = 1 << 28;

/// Largest accepted magnitude of any descriptor coordinate component.
pub const MAX_COORD: i32 = 1 << 29;

// ---------------------------------------------------------------------------
// Shape union
// ---------------------------------------------------------------------------

/// A shape to build. Exactly one family is active per descriptor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    Cube(CubeParams),
    Line(LineParams),
    Sphere(SphereParams),
    Cylinder(CylinderParams),
    Ellipsoid(EllipsoidParams),
    Torus(TorusParams),
    Helix(HelixParams),
    Paraboloid(ParaboloidParams),
    Hyperboloid(HyperboloidParams),
    Bezier(BezierCurveParams),
}

/// Discriminant of a `Shape`, for reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Cube,
    Line,
    Sphere,
    Cylinder,
    Ellipsoid,
    Torus,
    Helix,
    Paraboloid,
    Hyperboloid,
    Bezier,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Line => "line",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Ellipsoid => "ellipsoid",
            ShapeKind::Torus => "torus",
            ShapeKind::Helix => "helix",
            ShapeKind::Paraboloid => "paraboloid",
            ShapeKind::Hyperboloid => "hyperboloid",
            ShapeKind::Bezier => "bezier",
        };
        f.write_str(name)
    }
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Cube(_) => ShapeKind::Cube,
            Shape::Line(_) => ShapeKind::Line,
            Shape::Sphere(_) => ShapeKind::Sphere,
            Shape::Cylinder(_) => ShapeKind::Cylinder,
            Shape::Ellipsoid(_) => ShapeKind::Ellipsoid,
            Shape::Torus(_) => ShapeKind::Torus,
            Shape::Helix(_) => ShapeKind::Helix,
            Shape::Paraboloid(_) => ShapeKind::Paraboloid,
            Shape::Hyperboloid(_) => ShapeKind::Hyperboloid,
            Shape::Bezier(_) => ShapeKind::Bezier,
        }
    }

    /// Whether the shape was requested as a shell. Curves are one voxel
    /// thick and are never hollow.
    pub fn hollow(&self) -> bool {
        match self {
            Shape::Cube(p) => p.hollow,
            Shape::Sphere(p) => p.hollow,
            Shape::Cylinder(p) => p.hollow,
            Shape::Ellipsoid(p) => p.hollow,
            Shape::Torus(p) => p.hollow,
            Shape::Paraboloid(p) => p.hollow,
            Shape::Hyperboloid(p) => p.hollow,
            Shape::Line(_) | Shape::Helix(_) | Shape::Bezier(_) => false,
        }
    }

    /// Reject parameter values no generator can interpret, and extents or
    /// coordinates large enough to overflow lattice arithmetic.
    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            Shape::Cube(p) => {
                coord("from", p.from)?;
                coord("to", p.to)
            }
            Shape::Line(p) => {
                coord("from", p.from)?;
                coord("to", p.to)
            }
            Shape::Sphere(p) => {
                coord("center", p.center)?;
                radius("radius", p.radius)
            }
            Shape::Cylinder(p) => {
                coord("center", p.center)?;
                radius("radius", p.radius)?;
                height(p.height)
            }
            Shape::Ellipsoid(p) => {
                coord("center", p.center)?;
                radius("radius_x", p.radius_x)?;
                radius("radius_y", p.radius_y)?;
                radius("radius_z", p.radius_z)
            }
            Shape::Torus(p) => {
                coord("center", p.center)?;
                radius("major_radius", p.major_radius)?;
                radius("minor_radius", p.minor_radius)
            }
            Shape::Helix(p) => {
                coord("center", p.center)?;
                radius("radius", p.radius)?;
                height(p.height)?;
                if !(p.turns.is_finite() && p.turns > 0.0) {
                    return Err(ShapeError::InvalidTurns(p.turns));
                }
                Ok(())
            }
            Shape::Paraboloid(p) => {
                coord("center", p.center)?;
                radius("radius", p.radius)?;
                height(p.height)
            }
            Shape::Hyperboloid(p) => {
                coord("center", p.center)?;
                radius("waist_radius", p.waist_radius)?;
                radius("end_radius", p.end_radius)?;
                height(p.height)?;
                if p.end_radius < p.waist_radius {
                    return Err(ShapeError::InvertedHyperboloid {
                        waist: p.waist_radius,
                        end: p.end_radius,
                    });
                }
                Ok(())
            }
            Shape::Bezier(p) => {
                let n = p.control_points.len();
                if n == 0 || n > MAX_CONTROL_POINTS {
                    return Err(ShapeError::ControlPointCount(n));
                }
                if p.segments == Some(0) {
                    return Err(ShapeError::ZeroSegments);
                }
                coord("start", p.start)?;
                coord("end", p.end)?;
                p.control_points
                    .iter()
                    .try_for_each(|&c| coord("control_point", c))
            }
        }
    }
}

fn radius(name: &'static str, value: f64) -> Result<(), ShapeError> {
    if !(value.is_finite() && value > 0.0) {
        return Err(ShapeError::InvalidRadius { name, value });
    }
    if value > f64::from(MAX_EXTENT) {
        return Err(ShapeError::ExtentTooLarge {
            name,
            value,
            limit: MAX_EXTENT,
        });
    }
    Ok(())
}

fn height(value: u32) -> Result<(), ShapeError> {
    if value == 0 {
        return Err(ShapeError::InvalidExtent {
            name: "height",
            value: 0,
        });
    }
    if value > MAX_EXTENT {
        return Err(ShapeError::ExtentTooLarge {
            name: "height",
            value: f64::from(value),
            limit: MAX_EXTENT,
        });
    }
    Ok(())
}

fn coord(name: &'static str, c: VoxelCoord) -> Result<(), ShapeError> {
    let limit = MAX_COORD.unsigned_abs();
    if [c.x, c.y, c.z].iter().all(|v| v.unsigned_abs() <= limit) {
        Ok(())
    } else {
        Err(ShapeError::CoordinateOutOfRange { name, coord: c })
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Lazily enumerate the lattice points of `shape`.
///
/// Solids yield each point exactly once. Curves drop consecutive repeats
/// but may revisit a point later (a self-crossing Bézier, a tightly wound
/// helix); the optimizer treats its input as a set.
pub fn voxels(shape: &Shape, config: &GeometryConfig) -> Box<dyn Iterator<Item = VoxelCoord>> {
    let shell = &config.shell;
    match shape {
        Shape::Cube(p) => Box::new(solids::cube(*p)),
        Shape::Line(p) => Box::new(curves::line(*p)),
        Shape::Sphere(p) => Box::new(solids::sphere(*p, shell)),
        Shape::Cylinder(p) => Box::new(solids::cylinder(*p, shell)),
        Shape::Ellipsoid(p) => Box::new(solids::ellipsoid(*p, shell)),
        Shape::Torus(p) => Box::new(solids::torus(*p, shell)),
        Shape::Helix(p) => Box::new(curves::helix(*p)),
        Shape::Paraboloid(p) => Box::new(solids::paraboloid(*p)),
        Shape::Hyperboloid(p) => Box::new(solids::hyperboloid(*p)),
        Shape::Bezier(p) => Box::new(curves::bezier(p, &config.bezier)),
    }
}

/// Validate `shape` and materialize its points, failing once more than
/// `config.max_voxels` have been produced.
pub fn generate(shape: &Shape, config: &GeometryConfig) -> Result<Vec<VoxelCoord>, ShapeError> {
    shape.validate()?;
    let limit = config.max_voxels;
    let mut points = Vec::new();
    for p in voxels(shape, config) {
        if points.len() == limit {
            return Err(ShapeError::TooManyVoxels { limit });
        }
        points.push(p);
    }
    debug!("generated {} voxels for {}", points.len(), shape.kind());
    Ok(points)
}
