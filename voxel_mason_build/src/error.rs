// Errors raised by the build crate.
//
// `BuildError` covers requests rejected before any world mutation is
// issued. A failing mutation is not a `BuildError`: the executor reports it
// inside a `BuildResult` so the caller still learns how far the build got.
// `MutationError` is the opaque failure a `BlockMutator` hands back.

use thiserror::Error;
use voxel_mason_geom::{ShapeError, VoxelCoord};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("block id must not be empty")]
    EmptyBlockId,

    /// A generated or rotated point falls outside the buildable world.
    #[error("point {coord} lies outside the world bounds")]
    OutOfBounds { coord: VoxelCoord },
}

/// Failure reported by the world for a single mutation call. The message is
/// passed through to the build result verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct MutationError(pub String);

impl MutationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
