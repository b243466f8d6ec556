// Pure coordinate math shared by the generators and the rotation engine.
//
// Distances, interpolation, the Bernstein basis used by Bézier curves,
// bounding boxes, centroids, and point-set deduplication. Nothing here
// allocates except `dedup_points`, and nothing has side effects.
//
// See also: `curves.rs` (Bernstein evaluation, interpolation),
// `rotation.rs` (centroid pivot), `optimizer.rs` (deduplicated input).

use crate::types::{VoxelBox, VoxelCoord};
use rustc_hash::FxHashSet;

/// Euclidean distance between two points in 3D space.
pub fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Euclidean distance between two lattice points.
pub fn voxel_distance(a: VoxelCoord, b: VoxelCoord) -> f64 {
    distance(a.to_f64(), b.to_f64())
}

/// Linear interpolation: `a` at `t = 0`, `b` at `t = 1`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Component-wise linear interpolation between two points.
pub fn lerp3(a: [f64; 3], b: [f64; 3], t: f64) -> [f64; 3] {
    [lerp(a[0], b[0], t), lerp(a[1], b[1], t), lerp(a[2], b[2], t)]
}

/// `n!` for the small `n` that Bézier degrees need. Saturates at `u64::MAX`
/// past 20!, which no caller reaches (degree is capped at 11).
pub fn factorial(n: u32) -> u64 {
    (1..=u64::from(n)).fold(1u64, |acc, k| acc.saturating_mul(k))
}

/// Binomial coefficient `C(n, i)`.
pub fn binomial(n: u32, i: u32) -> f64 {
    if i > n {
        return 0.0;
    }
    factorial(n) as f64 / (factorial(i) as f64 * factorial(n - i) as f64)
}

/// Bernstein basis polynomial `b_{i,n}(t) = C(n, i) t^i (1 - t)^(n - i)`.
pub fn bernstein(n: u32, i: u32, t: f64) -> f64 {
    if i > n {
        return 0.0;
    }
    binomial(n, i) * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32)
}

/// Smallest box containing every point, or `None` for an empty slice.
pub fn bounding_box(points: &[VoxelCoord]) -> Option<VoxelBox> {
    let (first, rest) = points.split_first()?;
    let mut min = *first;
    let mut max = *first;
    for p in rest {
        min = VoxelCoord::new(min.x.min(p.x), min.y.min(p.y), min.z.min(p.z));
        max = VoxelCoord::new(max.x.max(p.x), max.y.max(p.y), max.z.max(p.z));
    }
    Some(VoxelBox { from: min, to: max })
}

/// Mean position of the points rounded to the nearest lattice point, or
/// `None` for an empty slice.
pub fn rounded_centroid(points: &[VoxelCoord]) -> Option<VoxelCoord> {
    if points.is_empty() {
        return None;
    }
    // i64 sums: 2M points at +-30M would overflow i32 many times over.
    let (sx, sy, sz) = points.iter().fold((0i64, 0i64, 0i64), |(sx, sy, sz), p| {
        (sx + i64::from(p.x), sy + i64::from(p.y), sz + i64::from(p.z))
    });
    let n = points.len() as f64;
    Some(VoxelCoord::from_rounded([
        sx as f64 / n,
        sy as f64 / n,
        sz as f64 / n,
    ]))
}

/// Remove repeated coordinates, keeping the first occurrence of each and
/// preserving order otherwise.
pub fn dedup_points(points: impl IntoIterator<Item = VoxelCoord>) -> Vec<VoxelCoord> {
    let iter = points.into_iter();
    let mut seen = FxHashSet::default();
    seen.reserve(iter.size_hint().0);
    iter.filter(|p| seen.insert(*p)).collect()
}

/// Whether `value` lies in the inclusive range `[min, max]`.
pub fn in_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    (min..=max).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance([0.0, 0.0, 0.0], [2.0, 3.0, 6.0]), 7.0);
        assert_eq!(
            voxel_distance(VoxelCoord::new(1, 1, 1), VoxelCoord::new(1, 1, 1)),
            0.0
        );
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp3([0.0, 0.0, 0.0], [2.0, 4.0, -8.0], 0.5), [1.0, 2.0, -4.0]);
    }

    #[test]
    fn factorial_small_values() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(11), 39_916_800);
    }

    #[test]
    fn bernstein_basis_partitions_unity() {
        for n in 1..=11 {
            for step in 0..=10 {
                let t = step as f64 / 10.0;
                let sum: f64 = (0..=n).map(|i| bernstein(n, i, t)).sum();
                assert!((sum - 1.0).abs() < 1e-9, "n={n} t={t} sum={sum}");
            }
        }
    }

    #[test]
    fn bernstein_endpoints() {
        assert_eq!(bernstein(3, 0, 0.0), 1.0);
        assert_eq!(bernstein(3, 3, 1.0), 1.0);
        assert_eq!(bernstein(3, 1, 0.0), 0.0);
        assert_eq!(bernstein(3, 4, 0.5), 0.0);
    }

    #[test]
    fn bounding_box_of_points() {
        assert_eq!(bounding_box(&[]), None);
        let b = bounding_box(&[
            VoxelCoord::new(1, 5, -2),
            VoxelCoord::new(-3, 0, 4),
            VoxelCoord::new(2, 2, 2),
        ])
        .unwrap();
        assert_eq!(b.from, VoxelCoord::new(-3, 0, -2));
        assert_eq!(b.to, VoxelCoord::new(2, 5, 4));
    }

    #[test]
    fn centroid_rounds_to_nearest() {
        assert_eq!(rounded_centroid(&[]), None);
        let c = rounded_centroid(&[VoxelCoord::new(0, 0, 0), VoxelCoord::new(3, 1, -3)]);
        // (1.5, 0.5, -1.5) rounds away from zero.
        assert_eq!(c, Some(VoxelCoord::new(2, 1, -2)));
    }

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let a = VoxelCoord::new(0, 0, 0);
        let b = VoxelCoord::new(1, 0, 0);
        let c = VoxelCoord::new(0, 1, 0);
        assert_eq!(dedup_points([a, b, a, c, b]), vec![a, b, c]);
    }

    #[test]
    fn in_range_is_inclusive() {
        assert!(in_range(-64, -64, 320));
        assert!(in_range(320, -64, 320));
        assert!(!in_range(321, -64, 320));
    }
}
