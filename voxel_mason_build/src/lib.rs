// voxel_mason_build: drives voxel geometry against a world.
//
// Takes a shape request, plans it with `voxel_mason_geom` (generate, orient,
// optimize into boxes), then issues the boxes as sequential mutation calls
// against anything implementing `BlockMutator`.
//
// Module overview:
// - `executor.rs`: BuildExecutor, BuildRequest/BuildResult/BuildPlan, ShapeGenerator.
// - `mutator.rs`:  BlockMutator, the async world mutation capability.
// - `canvas.rs`:   VoxelCanvas, an in-memory BlockMutator with a call log.
// - `config.rs`:   BuildConfig (geometry tunables + world bounds).
// - `error.rs`:    BuildError, MutationError.
//
// The crate installs no logger; it emits through the `log` facade and
// leaves the backend to the host.

pub mod canvas;
pub mod config;
pub mod error;
pub mod executor;
pub mod mutator;

pub use canvas::VoxelCanvas;
pub use config::BuildConfig;
pub use error::{BuildError, MutationError};
pub use executor::{
    BuildExecutor, BuildOutcome, BuildPlan, BuildRequest, BuildResult, ShapeEcho, ShapeGenerator,
    StandardGenerators,
};
pub use mutator::BlockMutator;
