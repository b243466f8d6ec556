// voxel_mason_geom: pure voxel geometry library.
//
// Turns parametric shape descriptors into exact sets of integer lattice
// points, reorients point sets by axis rotations, and compresses point sets
// into short lists of axis-aligned boxes for bulk placement. Everything here
// is synchronous, single-threaded, and free of I/O; the companion crate
// `voxel_mason_build` drives it against a world mutation capability.
//
// Module overview:
// - `types.rs`:     VoxelCoord, Axis, VoxelBox.
// - `coords.rs`:    Distance, interpolation, Bernstein basis, bounding boxes, dedup.
// - `shape.rs`:     Shape descriptor union, validation, generator dispatch.
// - `solids.rs`:    Implicit-surface generators (sphere, cylinder, torus, ...) and cubes.
// - `curves.rs`:    Line walk, helix, and Bézier curve generators.
// - `rotation.rs`:  Rodrigues rotations, rotation sequences, direction presets.
// - `optimizer.rs`: Greedy maximal-box cover of a point set.
// - `config.rs`:    GeometryConfig (hollow thresholds, Bézier sampling, limits), WorldBounds.
// - `error.rs`:     ShapeError.
//
// **Coverage is exact.** The boxes the optimizer emits cover precisely the
// generated (and rotated) points, never more and never fewer. Every change
// to a generator or to the optimizer must keep that true.

pub mod config;
pub mod coords;
pub mod curves;
pub mod error;
pub mod optimizer;
pub mod rotation;
pub mod shape;
pub mod solids;
pub mod types;

pub use config::{GeometryConfig, WorldBounds};
pub use error::ShapeError;
pub use optimizer::{OptimizationResult, optimize};
pub use rotation::{Direction, Orientation, RotationSpec, rotate_points};
pub use shape::{Shape, ShapeKind, generate, voxels};
pub use types::{Axis, VoxelBox, VoxelCoord};
