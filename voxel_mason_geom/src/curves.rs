// Generators for one-voxel-thick curves: line, helix, Bézier.
//
// Lines are walked exactly on the integer lattice. Helices and Bézier
// curves are sampled in f64 and rounded to the nearest lattice point
// (`VoxelCoord::from_rounded`); consecutive samples that land on the same
// voxel are collapsed by `DedupConsecutive`.
//
// ## Line walk
//
// `LineWalk` steps one axis at a time, so consecutive points always share a
// face (no diagonal gaps). At every step it advances the axis whose next
// voxel boundary is nearest along the ideal segment, compared with integer
// cross-multiplication: the boundary on axis `a` after `k` steps sits at
// parameter `(2k + 1) / (2 n_a)`. Ties go to the lower axis (x, then y,
// then z). A line from `a` to `b` yields exactly
// `|dx| + |dy| + |dz| + 1` points and ends on `b`.
//
// ## Sample density
//
// A helix takes one sample per voxel of estimated arc length, the
// Pythagorean combination of the unrolled circumference (times turns) and
// the rise. A Bézier curve without an explicit `segments` estimates its
// length from a coarse polyline and clamps that to
// `[min_segments, max_segments]`.
//
// See also: `coords.rs` for `bernstein()` and `distance()`, `shape.rs` for
// the parameter structs, `config.rs` for `BezierParams`.

use crate::config::BezierParams;
use crate::coords::{bernstein, distance};
use crate::shape::{BezierCurveParams, HelixParams, LineParams};
use crate::types::{Axis, VoxelCoord};
use std::f64::consts::TAU;

// ---------------------------------------------------------------------------
// Consecutive deduplication
// ---------------------------------------------------------------------------

/// Iterator adapter that drops an item equal to the one just yielded.
pub struct DedupConsecutive<I> {
    inner: I,
    last: Option<VoxelCoord>,
}

impl<I: Iterator<Item = VoxelCoord>> DedupConsecutive<I> {
    pub fn new(inner: I) -> Self {
        Self { inner, last: None }
    }
}

impl<I: Iterator<Item = VoxelCoord>> Iterator for DedupConsecutive<I> {
    type Item = VoxelCoord;

    fn next(&mut self) -> Option<VoxelCoord> {
        for p in self.inner.by_ref() {
            if self.last != Some(p) {
                self.last = Some(p);
                return Some(p);
            }
        }
        None
    }
}

// ---------------------------------------------------------------------------
// Line
// ---------------------------------------------------------------------------

/// Face-connected lattice walk between two points, inclusive of both.
pub struct LineWalk {
    current: VoxelCoord,
    /// Per-axis direction, -1, 0, or +1.
    step: [i32; 3],
    /// Per-axis total number of unit steps.
    total: [i64; 3],
    /// Per-axis unit steps taken so far.
    taken: [i64; 3],
    finished: bool,
}

impl LineWalk {
    pub fn new(from: VoxelCoord, to: VoxelCoord) -> Self {
        let delta = [
            i64::from(to.x) - i64::from(from.x),
            i64::from(to.y) - i64::from(from.y),
            i64::from(to.z) - i64::from(from.z),
        ];
        Self {
            current: from,
            step: delta.map(|d| d.signum() as i32),
            total: delta.map(i64::abs),
            taken: [0; 3],
            finished: false,
        }
    }

    /// The axis to advance next, or `None` once every axis is exhausted.
    fn next_axis(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for axis in 0..3 {
            if self.taken[axis] >= self.total[axis] {
                continue;
            }
            best = match best {
                None => Some(axis),
                Some(b) => {
                    // Compare (2 t_a + 1) / n_a < (2 t_b + 1) / n_b without
                    // division.
                    let lhs = (2 * self.taken[axis] + 1) * self.total[b];
                    let rhs = (2 * self.taken[b] + 1) * self.total[axis];
                    if lhs < rhs { Some(axis) } else { Some(b) }
                }
            };
        }
        best
    }

    fn remaining(&self) -> usize {
        if self.finished {
            return 0;
        }
        let steps: i64 = (0..3).map(|a| self.total[a] - self.taken[a]).sum();
        steps as usize + 1
    }
}

impl Iterator for LineWalk {
    type Item = VoxelCoord;

    fn next(&mut self) -> Option<VoxelCoord> {
        if self.finished {
            return None;
        }
        let out = self.current;
        match self.next_axis() {
            Some(axis) => {
                self.taken[axis] += 1;
                let s = self.step[axis];
                self.current = match axis {
                    0 => self.current.offset(s, 0, 0),
                    1 => self.current.offset(0, s, 0),
                    _ => self.current.offset(0, 0, s),
                };
            }
            None => self.finished = true,
        }
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

pub fn line(p: LineParams) -> LineWalk {
    LineWalk::new(p.from, p.to)
}

// ---------------------------------------------------------------------------
// Helix
// ---------------------------------------------------------------------------

/// Shape-local `(u, v, w)` around `origin` to world space, matching
/// `Axis::place` for floating-point positions.
fn place_f64(axis: Axis, origin: [f64; 3], u: f64, v: f64, w: f64) -> [f64; 3] {
    let [ox, oy, oz] = origin;
    match axis {
        Axis::X => [ox + w, oy + u, oz + v],
        Axis::Y => [ox + u, oy + w, oz + v],
        Axis::Z => [ox + u, oy + v, oz + w],
    }
}

pub fn helix(p: HelixParams) -> impl Iterator<Item = VoxelCoord> + use<> {
    let rise = f64::from(p.height.saturating_sub(1));
    let unrolled = TAU * p.radius * p.turns;
    let length = (unrolled * unrolled + rise * rise).sqrt();
    let samples = (length.ceil() as u64).max(1);
    let sign = if p.clockwise { -1.0 } else { 1.0 };
    let origin = p.center.to_f64();

    DedupConsecutive::new((0..=samples).map(move |i| {
        let t = i as f64 / samples as f64;
        let theta = sign * TAU * p.turns * t;
        let u = p.radius * theta.cos();
        let v = p.radius * theta.sin();
        VoxelCoord::from_rounded(place_f64(p.axis, origin, u, v, rise * t))
    }))
}

// ---------------------------------------------------------------------------
// Bézier
// ---------------------------------------------------------------------------

/// Evaluate the Bernstein form of the curve with control polygon `control`
/// at parameter `t`.
fn evaluate(control: &[[f64; 3]], t: f64) -> [f64; 3] {
    let degree = (control.len() - 1) as u32;
    let mut out = [0.0; 3];
    for (i, c) in control.iter().enumerate() {
        let b = bernstein(degree, i as u32, t);
        out[0] += b * c[0];
        out[1] += b * c[1];
        out[2] += b * c[2];
    }
    out
}

/// Segment count from the length of a coarse polyline through the curve.
fn adaptive_segments(control: &[[f64; 3]], params: &BezierParams) -> u32 {
    let coarse = params.coarse_samples.max(1);
    let mut length = 0.0;
    let mut prev = evaluate(control, 0.0);
    for k in 1..=coarse {
        let next = evaluate(control, f64::from(k) / f64::from(coarse));
        length += distance(prev, next);
        prev = next;
    }
    let estimate = length.ceil().min(f64::from(u32::MAX)) as u32;
    estimate
        .max(params.min_segments)
        .min(params.max_segments)
        .max(1)
}

/// Sample the curve at `segments + 1` evenly spaced parameters. A curve
/// whose start, end, and control points all coincide has no extent and
/// yields nothing.
pub fn bezier(p: &BezierCurveParams, params: &BezierParams) -> impl Iterator<Item = VoxelCoord> + use<> {
    let control: Vec<[f64; 3]> = std::iter::once(p.start)
        .chain(p.control_points.iter().copied())
        .chain(std::iter::once(p.end))
        .map(VoxelCoord::to_f64)
        .collect();
    let degenerate = control.iter().all(|c| *c == control[0]);
    let segments = match p.segments {
        Some(s) => s.min(params.max_segments).max(1),
        None => adaptive_segments(&control, params),
    };
    let count = if degenerate { 0 } else { u64::from(segments) + 1 };

    DedupConsecutive::new((0..count).map(move |i| {
        let t = i as f64 / f64::from(segments);
        VoxelCoord::from_rounded(evaluate(&control, t))
    }))
}
