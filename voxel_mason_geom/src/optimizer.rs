// Block placement optimizer: covers a point set with axis-aligned boxes.
//
// Every box handed to the world costs one round trip, so the goal is to
// realize a point set with as few boxes as practical while covering exactly
// the input: no box may include a point that was not requested, and every
// requested point lands in exactly one box.
//
// The algorithm is a deterministic greedy growth:
//
// 1. Deduplicate the input, sort it lexicographically by (x, y, z), and
//    load it into a hash set of remaining points. The per-axis maxima
//    bound how far a box can grow.
// 2. Take the lexicographically first remaining point as a seed.
// 3. Extend the box one layer at a time along +X while every cell of the
//    new layer is still remaining, then along +Y, then along +Z.
// 4. Emit the box, remove its points, and go back to 2.
//
// The result is not a minimum cover (that problem is NP-hard) but it is
// exact, never uses more boxes than points, and collapses large solids and
// flat slabs into a handful of boxes.
//
// See also: `types.rs` for `VoxelBox`, `coords.rs` for `dedup_points()`.

use crate::coords::dedup_points;
use crate::types::{VoxelBox, VoxelCoord};
use log::debug;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Boxes covering a point set, with compression statistics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// In emission order.
    pub boxes: Vec<VoxelBox>,
    /// Number of distinct input points.
    pub original_count: usize,
    /// Number of boxes, i.e. world mutation calls needed.
    pub fill_operation_count: usize,
    /// `original_count / fill_operation_count`; 1.0 for empty input.
    pub compression_ratio: f64,
}

impl OptimizationResult {
    /// Every point covered by the boxes, in emission order.
    pub fn covered_points(&self) -> impl Iterator<Item = VoxelCoord> + '_ {
        self.boxes.iter().flat_map(VoxelBox::points)
    }
}

/// Per-axis maximum over `points`; `i32::MIN` on every axis when empty.
fn upper_corner(points: &[VoxelCoord]) -> VoxelCoord {
    points.iter().fold(
        VoxelCoord::new(i32::MIN, i32::MIN, i32::MIN),
        |acc, p| VoxelCoord::new(acc.x.max(p.x), acc.y.max(p.y), acc.z.max(p.z)),
    )
}

/// Greedy maximal-box state over the remaining points.
struct Cover {
    remaining: FxHashSet<VoxelCoord>,
    max: VoxelCoord,
}

impl Cover {
    /// Whether every point of `layer` is still uncovered.
    fn layer_present(&self, layer: VoxelBox) -> bool {
        layer.points().all(|p| self.remaining.contains(&p))
    }

    /// Grow a box from `seed` along X, then Y, then Z.
    fn grow(&self, seed: VoxelCoord) -> VoxelBox {
        let mut b = VoxelBox::single(seed);

        while b.to.x < self.max.x {
            let layer = VoxelBox {
                from: VoxelCoord::new(b.to.x + 1, b.from.y, b.from.z),
                to: VoxelCoord::new(b.to.x + 1, b.to.y, b.to.z),
            };
            if !self.layer_present(layer) {
                break;
            }
            b.to.x += 1;
        }

        while b.to.y < self.max.y {
            let layer = VoxelBox {
                from: VoxelCoord::new(b.from.x, b.to.y + 1, b.from.z),
                to: VoxelCoord::new(b.to.x, b.to.y + 1, b.to.z),
            };
            if !self.layer_present(layer) {
                break;
            }
            b.to.y += 1;
        }

        while b.to.z < self.max.z {
            let layer = VoxelBox {
                from: VoxelCoord::new(b.from.x, b.from.y, b.to.z + 1),
                to: VoxelCoord::new(b.to.x, b.to.y, b.to.z + 1),
            };
            if !self.layer_present(layer) {
                break;
            }
            b.to.z += 1;
        }

        b
    }
}

/// Cover `points` exactly with axis-aligned boxes. Duplicates in the input
/// are ignored.
pub fn optimize(points: &[VoxelCoord]) -> OptimizationResult {
    let mut seeds = dedup_points(points.iter().copied());
    seeds.sort_unstable();
    let original_count = seeds.len();

    let mut cover = Cover {
        remaining: seeds.iter().copied().collect(),
        max: upper_corner(&seeds),
    };
    let mut boxes = Vec::new();
    for seed in seeds {
        if !cover.remaining.contains(&seed) {
            continue;
        }
        let b = cover.grow(seed);
        for p in b.points() {
            cover.remaining.remove(&p);
        }
        boxes.push(b);
    }

    let fill_operation_count = boxes.len();
    let compression_ratio = if fill_operation_count == 0 {
        1.0
    } else {
        original_count as f64 / fill_operation_count as f64
    };
    debug!(
        "optimized {original_count} points into {fill_operation_count} boxes ({compression_ratio:.2}x)"
    );

    OptimizationResult {
        boxes,
        original_count,
        fill_operation_count,
        compression_ratio,
    }
}
