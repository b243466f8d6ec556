// Build executor: shape request in, world mutations out.
//
// A build runs in two phases. `plan()` is pure: it validates the request,
// generates the shape's points, applies the requested orientation, checks
// the result against the world bounds, and runs the box optimizer. `build()`
// then walks the planned boxes in emission order and issues one mutation
// per box: `set_block` for a single-point box, `fill_blocks` otherwise.
// Calls are awaited one at a time; there is no batching or pipelining.
//
// Failure handling:
// - Invalid input (bad parameters, empty block id, out-of-bounds result) is
//   a `BuildError` and nothing is sent to the world.
// - A shape that yields no points is a successful no-op with outcome
//   `NothingToPlace` and zero calls.
// - The first failing mutation stops the build. Boxes already placed stay
//   placed. The result carries `success = false`, the world's error text,
//   and the box that failed.
//
// Point generation is injected through `ShapeGenerator` so a caller can
// swap or wrap the generators; `StandardGenerators` is the stock set.
//
// See also: `mutator.rs` for the world trait, `canvas.rs` for the
// in-memory world, `voxel_mason_geom::optimizer` for the box cover.

use crate::config::BuildConfig;
use crate::error::BuildError;
use crate::mutator::BlockMutator;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use voxel_mason_geom::coords::{bounding_box, dedup_points};
use voxel_mason_geom::{
    GeometryConfig, OptimizationResult, Orientation, Shape, ShapeError, ShapeKind, VoxelBox,
    VoxelCoord, optimize, rotate_points,
};

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Produces the point set for a validated shape.
pub trait ShapeGenerator {
    fn generate(&self, shape: &Shape, config: &GeometryConfig) -> Result<Vec<VoxelCoord>, ShapeError>;
}

/// The generators in `voxel_mason_geom`.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardGenerators;

impl ShapeGenerator for StandardGenerators {
    fn generate(&self, shape: &Shape, config: &GeometryConfig) -> Result<Vec<VoxelCoord>, ShapeError> {
        voxel_mason_geom::generate(shape, config)
    }
}

// ---------------------------------------------------------------------------
// Requests and results
// ---------------------------------------------------------------------------

/// One build. On the wire the shape's fields sit at the top level next to
/// `block_id`, e.g.
/// `{"shape": "cube", "from": {..}, "to": {..}, "block_id": "stone"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildRequest {
    #[serde(flatten)]
    pub shape: Shape,
    pub block_id: String,
    #[serde(default)]
    pub orientation: Option<Orientation>,
}

impl BuildRequest {
    pub fn new(shape: Shape, block_id: impl Into<String>) -> Self {
        Self {
            shape,
            block_id: block_id.into(),
            orientation: None,
        }
    }

    pub fn oriented(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }
}

/// Shape-specific data echoed back to the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeEcho {
    pub kind: ShapeKind,
    pub hollow: bool,
    /// Bounds of the points placed, after rotation. `None` when empty.
    pub bounding_box: Option<VoxelBox>,
    /// Number of rotation steps applied.
    pub rotations: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildOutcome {
    Completed,
    NothingToPlace,
    MutationFailed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildResult {
    pub success: bool,
    pub outcome: BuildOutcome,
    pub message: String,
    /// Voxels placed: the optimizer's distinct point count on success, the
    /// volume of the boxes that went through before a failure otherwise.
    pub voxel_count: u64,
    /// Mutation calls issued, counting a failed one.
    pub call_count: usize,
    /// Boxes in the plan.
    pub box_count: usize,
    pub compression_ratio: f64,
    pub echo: ShapeEcho,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_box: Option<VoxelBox>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Everything `build()` would do, computed without touching a world.
#[derive(Clone, Debug, PartialEq)]
pub struct BuildPlan {
    /// Distinct points to place, after rotation.
    pub points: Vec<VoxelCoord>,
    pub optimization: OptimizationResult,
    pub echo: ShapeEcho,
}

// ---------------------------------------------------------------------------
// Executor
// ---------------------------------------------------------------------------

pub struct BuildExecutor<G = StandardGenerators> {
    generator: G,
    config: BuildConfig,
}

impl BuildExecutor<StandardGenerators> {
    pub fn new(config: BuildConfig) -> Self {
        Self::with_generator(StandardGenerators, config)
    }
}

impl Default for BuildExecutor<StandardGenerators> {
    fn default() -> Self {
        Self::new(BuildConfig::default())
    }
}

impl<G: ShapeGenerator> BuildExecutor<G> {
    pub fn with_generator(generator: G, config: BuildConfig) -> Self {
        Self { generator, config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Validate, generate, orient, bounds-check and optimize.
    pub fn plan(&self, request: &BuildRequest) -> Result<BuildPlan, BuildError> {
        if request.block_id.trim().is_empty() {
            return Err(BuildError::EmptyBlockId);
        }
        request.shape.validate()?;
        if let Some(orientation) = &request.orientation {
            orientation.validate()?;
        }

        let kind = request.shape.kind();
        let raw = self.generator.generate(&request.shape, &self.config.geometry)?;

        let steps = request
            .orientation
            .as_ref()
            .map(Orientation::rotations)
            .unwrap_or_default();
        let points = if steps.is_empty() {
            dedup_points(raw)
        } else {
            rotate_points(&raw, &steps)
        };

        if let Some(&coord) = points.iter().find(|&&p| !self.config.bounds.contains(p)) {
            return Err(BuildError::OutOfBounds { coord });
        }

        let optimization = optimize(&points);
        let echo = ShapeEcho {
            kind,
            hollow: request.shape.hollow(),
            bounding_box: bounding_box(&points),
            rotations: steps.len(),
        };
        Ok(BuildPlan {
            points,
            optimization,
            echo,
        })
    }

    /// Plan the request and issue its mutations against `world`.
    pub async fn build<M: BlockMutator>(
        &self,
        world: &mut M,
        request: &BuildRequest,
    ) -> Result<BuildResult, BuildError> {
        let plan = self.plan(request)?;
        let kind = plan.echo.kind;
        let opt = &plan.optimization;

        if opt.original_count == 0 {
            info!("{kind}: nothing to place");
            return Ok(BuildResult {
                success: true,
                outcome: BuildOutcome::NothingToPlace,
                message: format!("{kind} produced no voxels; nothing to place"),
                voxel_count: 0,
                call_count: 0,
                box_count: 0,
                compression_ratio: opt.compression_ratio,
                echo: plan.echo,
                failed_box: None,
                error: None,
            });
        }

        let mut call_count = 0;
        let mut placed = 0u64;
        for &region in &opt.boxes {
            call_count += 1;
            let sent = if region.is_single() {
                world.set_block(region.from, &request.block_id).await
            } else {
                world
                    .fill_blocks(region, &request.block_id)
                    .await
                    .map(|_| ())
            };
            if let Err(e) = sent {
                warn!(
                    "{kind}: mutation {call_count}/{} failed at {region}: {e}",
                    opt.fill_operation_count
                );
                return Ok(BuildResult {
                    success: false,
                    outcome: BuildOutcome::MutationFailed,
                    message: format!(
                        "{kind} build stopped after {} of {} calls: {e}",
                        call_count - 1,
                        opt.fill_operation_count
                    ),
                    voxel_count: placed,
                    call_count,
                    box_count: opt.fill_operation_count,
                    compression_ratio: opt.compression_ratio,
                    echo: plan.echo,
                    failed_box: Some(region),
                    error: Some(e.to_string()),
                });
            }
            placed += region.volume();
        }

        let voxel_count = opt.original_count as u64;
        info!(
            "{kind}: placed {voxel_count} voxels in {call_count} calls ({:.2}x compression)",
            opt.compression_ratio
        );
        Ok(BuildResult {
            success: true,
            outcome: BuildOutcome::Completed,
            message: format!(
                "Built {kind} of {voxel_count} {} with {call_count} calls ({:.2}x compression)",
                request.block_id, opt.compression_ratio
            ),
            voxel_count,
            call_count,
            box_count: opt.fill_operation_count,
            compression_ratio: opt.compression_ratio,
            echo: plan.echo,
            failed_box: None,
            error: None,
        })
    }
}
