// The world mutation capability the executor drives.
//
// A `BlockMutator` is whatever actually changes blocks: a game connection,
// a remote API, or the in-memory `VoxelCanvas`. Each call may suspend (a
// round trip to the world) and may fail with a `MutationError`. The
// executor awaits calls one at a time, in order, and never retries.
//
// See also: `canvas.rs` for the in-memory implementation, `executor.rs`
// for the caller.

use crate::error::MutationError;
use std::future::Future;
use voxel_mason_geom::{VoxelBox, VoxelCoord};

pub trait BlockMutator {
    /// Place one block.
    fn set_block(
        &mut self,
        at: VoxelCoord,
        block_id: &str,
    ) -> impl Future<Output = Result<(), MutationError>>;

    /// Fill every position in `region` (inclusive) with one block type.
    /// Returns the number of blocks the world reports as changed.
    fn fill_blocks(
        &mut self,
        region: VoxelBox,
        block_id: &str,
    ) -> impl Future<Output = Result<u64, MutationError>>;
}
