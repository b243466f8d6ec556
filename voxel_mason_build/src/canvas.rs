// In-memory world used for dry runs and tests.
//
// `VoxelCanvas` implements `BlockMutator` by writing into a `BTreeMap` keyed
// by position, so iteration order is stable and two canvases compare equal
// exactly when they hold the same blocks. Every applied call is appended to
// a call log. A canvas can be armed to fail on its N-th call (1-based); the
// failing call changes nothing and is not logged, which mirrors a world
// that rejects a request outright.
//
// See also: `mutator.rs` for the trait, `executor.rs` which drives it.

use crate::error::MutationError;
use crate::mutator::BlockMutator;
use log::trace;
use std::collections::BTreeMap;
use voxel_mason_geom::{VoxelBox, VoxelCoord};

/// One mutation the canvas applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationCall {
    Set { at: VoxelCoord, block_id: String },
    Fill { region: VoxelBox, block_id: String },
}

#[derive(Clone, Debug, Default)]
pub struct VoxelCanvas {
    blocks: BTreeMap<VoxelCoord, String>,
    calls: Vec<MutationCall>,
    attempts: usize,
    failure: Option<(usize, String)>,
}

impl VoxelCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// A canvas whose `call`-th mutation (1-based) fails with `message`.
    pub fn failing_on(call: usize, message: impl Into<String>) -> Self {
        Self {
            failure: Some((call, message.into())),
            ..Self::default()
        }
    }

    pub fn block_at(&self, at: VoxelCoord) -> Option<&str> {
        self.blocks.get(&at).map(String::as_str)
    }

    pub fn blocks(&self) -> &BTreeMap<VoxelCoord, String> {
        &self.blocks
    }

    /// Applied calls, in order.
    pub fn calls(&self) -> &[MutationCall] {
        &self.calls
    }

    /// Calls attempted, including a failed one.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    fn attempt(&mut self) -> Result<(), MutationError> {
        self.attempts += 1;
        match &self.failure {
            Some((n, message)) if *n == self.attempts => Err(MutationError::new(message.clone())),
            _ => Ok(()),
        }
    }
}

impl BlockMutator for VoxelCanvas {
    async fn set_block(&mut self, at: VoxelCoord, block_id: &str) -> Result<(), MutationError> {
        self.attempt()?;
        trace!("set {at} to {block_id}");
        self.blocks.insert(at, block_id.to_string());
        self.calls.push(MutationCall::Set {
            at,
            block_id: block_id.to_string(),
        });
        Ok(())
    }

    async fn fill_blocks(&mut self, region: VoxelBox, block_id: &str) -> Result<u64, MutationError> {
        self.attempt()?;
        trace!("fill {region} with {block_id}");
        for p in region.points() {
            self.blocks.insert(p, block_id.to_string());
        }
        self.calls.push(MutationCall::Fill {
            region,
            block_id: block_id.to_string(),
        });
        Ok(region.volume())
    }
}
