// Generators for box and implicit-surface shapes.
//
// Every generator here walks integer offsets from the shape's integer
// center over a bounding range and keeps the offsets that pass a membership
// test, so no coordinate is ever rounded. Iteration order is y outer, z
// middle, x inner (shape-local `w`, `v`, `u` for axis-oriented shapes),
// and each point is produced exactly once.
//
// Hollow rules differ per family and are kept separate:
// - cube: a point on any face of the box (any coordinate at its min/max).
// - sphere, torus: `radius - thickness <= d <= radius`.
// - cylinder: radial band `radius - thickness <= d <= radius`, no caps.
// - ellipsoid: normalized distance in `[inner, 1.0]`.
// - paraboloid, hyperboloid: a solid point with at least one face neighbor
//   outside the unbounded implicit region. The height cut does not count
//   as "outside", so both ends stay open.
//
// Radii are compared in f64; offsets are widened to f64 before squaring so
// large radii cannot overflow i32.
//
// See also: `shape.rs` for the parameter structs and dispatch,
// `config.rs` for `ShellParams`, `curves.rs` for one-voxel-thick shapes.

use crate::config::ShellParams;
use crate::shape::{
    CubeParams, CylinderParams, EllipsoidParams, HyperboloidParams, ParaboloidParams,
    SphereParams, TorusParams,
};
use crate::types::{VoxelBox, VoxelCoord};

/// The six face-adjacent offsets (+-u, +-v, +-w).
const FACE_OFFSETS: [(i32, i32, i32); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

/// All integer offsets in `[-ru, ru] x [-rv, rv] x [-rw, rw]`, `w` outermost.
fn offsets(ru: i32, rv: i32, rw: i32) -> impl Iterator<Item = (i32, i32, i32)> {
    (-rw..=rw).flat_map(move |w| (-rv..=rv).flat_map(move |v| (-ru..=ru).map(move |u| (u, v, w))))
}

/// Integer reach of a floating-point radius.
fn reach(radius: f64) -> i32 {
    radius.ceil() as i32
}

/// Whether `(u, v, w)` is on the surface of the region described by
/// `inside`, i.e. some face neighbor is outside it.
fn exposed(inside: impl Fn(i32, i32, i32) -> bool, u: i32, v: i32, w: i32) -> bool {
    FACE_OFFSETS
        .iter()
        .any(|&(du, dv, dw)| !inside(u + du, v + dv, w + dw))
}

// ---------------------------------------------------------------------------
// Cube
// ---------------------------------------------------------------------------

pub fn cube(p: CubeParams) -> impl Iterator<Item = VoxelCoord> {
    let bounds = VoxelBox::from_corners(p.from, p.to);
    let (min, max) = (bounds.from, bounds.to);
    bounds.points().filter(move |c| {
        !p.hollow
            || c.x == min.x
            || c.x == max.x
            || c.y == min.y
            || c.y == max.y
            || c.z == min.z
            || c.z == max.z
    })
}

// ---------------------------------------------------------------------------
// Sphere / ellipsoid
// ---------------------------------------------------------------------------

pub fn sphere(p: SphereParams, shell: &ShellParams) -> impl Iterator<Item = VoxelCoord> + use<> {
    let r = p.radius;
    let inner = if p.hollow {
        r - shell.sphere_thickness
    } else {
        f64::NEG_INFINITY
    };
    let reach = reach(r);
    offsets(reach, reach, reach).filter_map(move |(dx, dz, dy)| {
        let (fx, fy, fz) = (f64::from(dx), f64::from(dy), f64::from(dz));
        let d = (fx * fx + fy * fy + fz * fz).sqrt();
        (inner..=r).contains(&d).then(|| p.center.offset(dx, dy, dz))
    })
}

pub fn ellipsoid(
    p: EllipsoidParams,
    shell: &ShellParams,
) -> impl Iterator<Item = VoxelCoord> + use<> {
    let inner = if p.hollow {
        shell.ellipsoid_inner
    } else {
        f64::NEG_INFINITY
    };
    offsets(reach(p.radius_x), reach(p.radius_z), reach(p.radius_y)).filter_map(
        move |(dx, dz, dy)| {
            let nx = f64::from(dx) / p.radius_x;
            let ny = f64::from(dy) / p.radius_y;
            let nz = f64::from(dz) / p.radius_z;
            let n = (nx * nx + ny * ny + nz * nz).sqrt();
            (inner..=1.0).contains(&n).then(|| p.center.offset(dx, dy, dz))
        },
    )
}

// ---------------------------------------------------------------------------
// Axis-oriented solids of revolution
// ---------------------------------------------------------------------------

pub fn cylinder(
    p: CylinderParams,
    shell: &ShellParams,
) -> impl Iterator<Item = VoxelCoord> + use<> {
    let r = p.radius;
    let inner = if p.hollow {
        r - shell.cylinder_thickness
    } else {
        f64::NEG_INFINITY
    };
    let reach = reach(r);
    let height = p.height as i32;
    (0..height).flat_map(move |w| {
        (-reach..=reach).flat_map(move |v| {
            (-reach..=reach).filter_map(move |u| {
                let (fu, fv) = (f64::from(u), f64::from(v));
                let d = (fu * fu + fv * fv).sqrt();
                (inner..=r).contains(&d).then(|| p.axis.place(p.center, u, v, w))
            })
        })
    })
}

pub fn torus(p: TorusParams, shell: &ShellParams) -> impl Iterator<Item = VoxelCoord> + use<> {
    let major = p.major_radius;
    let minor = p.minor_radius;
    let inner = if p.hollow {
        minor - shell.torus_thickness
    } else {
        f64::NEG_INFINITY
    };
    let ring_reach = reach(major + minor);
    offsets(ring_reach, ring_reach, reach(minor)).filter_map(move |(u, v, w)| {
        let (fu, fv, fw) = (f64::from(u), f64::from(v), f64::from(w));
        let q = (fu * fu + fv * fv).sqrt() - major;
        let d = (q * q + fw * fw).sqrt();
        (inner..=minor).contains(&d).then(|| p.axis.place(p.center, u, v, w))
    })
}

pub fn paraboloid(p: ParaboloidParams) -> impl Iterator<Item = VoxelCoord> + use<> {
    // r(w)^2 = radius^2 * w / (height - 1), so the last layer has `radius`.
    let span = f64::from(p.height.saturating_sub(1).max(1));
    let r2 = p.radius * p.radius;
    let inside = move |u: i32, v: i32, w: i32| {
        if w < 0 {
            return false;
        }
        let (fu, fv) = (f64::from(u), f64::from(v));
        fu * fu + fv * fv <= r2 * f64::from(w) / span
    };
    let reach = reach(p.radius);
    let height = p.height as i32;
    (0..height).flat_map(move |w| {
        (-reach..=reach).flat_map(move |v| {
            (-reach..=reach).filter_map(move |u| {
                let keep = inside(u, v, w) && (!p.hollow || exposed(inside, u, v, w));
                keep.then(|| p.axis.place(p.center, u, v, w))
            })
        })
    })
}

pub fn hyperboloid(p: HyperboloidParams) -> impl Iterator<Item = VoxelCoord> + use<> {
    // r(w)^2 = a^2 + (b^2 - a^2) * (w - mid)^2 / half^2, with a the waist
    // radius and b the end radius. A one-layer hyperboloid is a disc of
    // the waist radius.
    let a2 = p.waist_radius * p.waist_radius;
    let b2 = p.end_radius * p.end_radius;
    let half = f64::from(p.height.saturating_sub(1)) / 2.0;
    let inside = move |u: i32, v: i32, w: i32| {
        let (fu, fv) = (f64::from(u), f64::from(v));
        let r2 = if half > 0.0 {
            let wl = f64::from(w) - half;
            a2 + (b2 - a2) * wl * wl / (half * half)
        } else {
            a2
        };
        fu * fu + fv * fv <= r2
    };
    let reach = reach(p.end_radius);
    let height = p.height as i32;
    (0..height).flat_map(move |w| {
        (-reach..=reach).flat_map(move |v| {
            (-reach..=reach).filter_map(move |u| {
                let keep = inside(u, v, w) && (!p.hollow || exposed(inside, u, v, w));
                keep.then(|| p.axis.place(p.center, u, v, w))
            })
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Axis;
    use std::collections::BTreeSet;

    fn origin() -> VoxelCoord {
        VoxelCoord::new(0, 0, 0)
    }

    fn shell() -> ShellParams {
        ShellParams::default()
    }

    fn set(iter: impl Iterator<Item = VoxelCoord>) -> BTreeSet<VoxelCoord> {
        iter.collect()
    }

    #[test]
    fn solid_cube_has_every_point() {
        let pts: Vec<_> = cube(CubeParams {
            from: origin(),
            to: VoxelCoord::new(2, 2, 2),
            hollow: false,
        })
        .collect();
        assert_eq!(pts.len(), 27);
    }

    #[test]
    fn hollow_cube_drops_only_the_core() {
        let pts = set(cube(CubeParams {
            from: VoxelCoord::new(4, 4, 4),
            to: origin(),
            hollow: true,
        }));
        // 5^3 - 3^3 interior points.
        assert_eq!(pts.len(), 125 - 27);
        assert!(!pts.contains(&VoxelCoord::new(2, 2, 2)));
        assert!(pts.contains(&VoxelCoord::new(0, 2, 2)));
    }

    #[test]
    fn unit_sphere_is_a_plus_sign() {
        let pts = set(sphere(
            SphereParams {
                center: VoxelCoord::new(10, 64, -10),
                radius: 1.0,
                hollow: false,
            },
            &shell(),
        ));
        assert_eq!(pts.len(), 7);
        assert!(pts.contains(&VoxelCoord::new(10, 65, -10)));
        assert!(!pts.contains(&VoxelCoord::new(11, 65, -10)));
    }

    #[test]
    fn sphere_points_within_radius() {
        let center = VoxelCoord::new(3, 70, 3);
        let pts: Vec<_> = sphere(
            SphereParams {
                center,
                radius: 4.5,
                hollow: false,
            },
            &shell(),
        )
        .collect();
        assert!(!pts.is_empty());
        for p in &pts {
            let d = crate::coords::voxel_distance(*p, center);
            assert!(d <= 4.5, "point {p} at distance {d}");
        }
        // No duplicates.
        assert_eq!(set(pts.iter().copied()).len(), pts.len());
    }

    #[test]
    fn hollow_sphere_is_subset_in_band() {
        let center = origin();
        let solid = set(sphere(
            SphereParams {
                center,
                radius: 5.0,
                hollow: false,
            },
            &shell(),
        ));
        let hollow = set(sphere(
            SphereParams {
                center,
                radius: 5.0,
                hollow: true,
            },
            &shell(),
        ));
        assert!(hollow.len() < solid.len());
        assert!(hollow.is_subset(&solid));
        for p in &hollow {
            assert!(crate::coords::voxel_distance(*p, center) >= 4.0);
        }
        assert!(!hollow.contains(&center));
    }

    #[test]
    fn ellipsoid_respects_each_radius() {
        let pts = set(ellipsoid(
            EllipsoidParams {
                center: origin(),
                radius_x: 6.0,
                radius_y: 2.0,
                radius_z: 3.0,
                hollow: false,
            },
            &shell(),
        ));
        assert!(pts.contains(&VoxelCoord::new(6, 0, 0)));
        assert!(pts.contains(&VoxelCoord::new(0, 2, 0)));
        assert!(pts.contains(&VoxelCoord::new(0, 0, 3)));
        assert!(!pts.contains(&VoxelCoord::new(0, 3, 0)));
        assert!(!pts.contains(&VoxelCoord::new(0, 0, 4)));
    }

    #[test]
    fn hollow_ellipsoid_band() {
        let params = EllipsoidParams {
            center: origin(),
            radius_x: 8.0,
            radius_y: 5.0,
            radius_z: 6.0,
            hollow: true,
        };
        let solid = set(ellipsoid(
            EllipsoidParams {
                hollow: false,
                ..params
            },
            &shell(),
        ));
        let hollow = set(ellipsoid(params, &shell()));
        assert!(hollow.is_subset(&solid));
        assert!(!hollow.contains(&origin()));
        for p in &hollow {
            let nx = f64::from(p.x) / 8.0;
            let ny = f64::from(p.y) / 5.0;
            let nz = f64::from(p.z) / 6.0;
            assert!((nx * nx + ny * ny + nz * nz).sqrt() >= 0.8);
        }
    }

    #[test]
    fn tiny_hollow_ellipsoid_is_empty() {
        // Radii below one voxel leave only the center, which is inside the
        // normalized band's inner edge.
        let pts: Vec<_> = ellipsoid(
            EllipsoidParams {
                center: origin(),
                radius_x: 0.5,
                radius_y: 0.5,
                radius_z: 0.5,
                hollow: true,
            },
            &shell(),
        )
        .collect();
        assert!(pts.is_empty());
    }

    #[test]
    fn cylinder_layers_follow_axis() {
        for axis in Axis::ALL {
            let pts = set(cylinder(
                CylinderParams {
                    center: origin(),
                    radius: 2.0,
                    height: 5,
                    axis,
                    hollow: false,
                },
                &shell(),
            ));
            // Radius-2 disc has 13 lattice points; 5 layers.
            assert_eq!(pts.len(), 13 * 5, "axis {axis}");
            for p in &pts {
                let along = p.get(axis);
                assert!((0..5).contains(&along), "axis {axis} point {p}");
            }
        }
    }

    #[test]
    fn hollow_cylinder_is_an_open_tube() {
        let pts = set(cylinder(
            CylinderParams {
                center: origin(),
                radius: 4.0,
                height: 3,
                axis: Axis::Y,
                hollow: true,
            },
            &shell(),
        ));
        // Axis voxels are never part of the wall, including the end layers.
        for y in 0..3 {
            assert!(!pts.contains(&VoxelCoord::new(0, y, 0)));
        }
        assert!(pts.contains(&VoxelCoord::new(4, 0, 0)));
        assert!(pts.contains(&VoxelCoord::new(0, 2, -4)));
        for p in &pts {
            let d = (f64::from(p.x).powi(2) + f64::from(p.z).powi(2)).sqrt();
            assert!((3.0..=4.0).contains(&d), "wall point {p} at radial distance {d}");
        }
    }

    #[test]
    fn hollow_torus_keeps_the_tube_wall() {
        let params = TorusParams {
            center: origin(),
            major_radius: 6.0,
            minor_radius: 2.5,
            axis: Axis::Y,
            hollow: true,
        };
        let solid = set(torus(
            TorusParams {
                hollow: false,
                ..params
            },
            &shell(),
        ));
        let hollow = set(torus(params, &shell()));
        assert!(hollow.len() < solid.len());
        assert!(hollow.is_subset(&solid));
        // The tube's center circle is inside the shell.
        assert!(!hollow.contains(&VoxelCoord::new(6, 0, 0)));
        for p in &hollow {
            let q = (f64::from(p.x).powi(2) + f64::from(p.z).powi(2)).sqrt() - 6.0;
            let d = (q * q + f64::from(p.y).powi(2)).sqrt();
            assert!((1.5..=2.5).contains(&d), "shell point {p} at tube distance {d}");
        }
    }

    #[test]
    fn torus_has_a_hole() {
        let pts = set(torus(
            TorusParams {
                center: origin(),
                major_radius: 5.0,
                minor_radius: 1.5,
                axis: Axis::Y,
                hollow: false,
            },
            &shell(),
        ));
        assert!(!pts.contains(&origin()));
        assert!(pts.contains(&VoxelCoord::new(5, 0, 0)));
        assert!(pts.contains(&VoxelCoord::new(0, 1, -5)));
        assert!(!pts.contains(&VoxelCoord::new(5, 2, 0)));
    }

    #[test]
    fn torus_axis_x_stands_in_yz_plane() {
        let pts = set(torus(
            TorusParams {
                center: origin(),
                major_radius: 4.0,
                minor_radius: 1.0,
                axis: Axis::X,
                hollow: false,
            },
            &shell(),
        ));
        assert!(pts.contains(&VoxelCoord::new(0, 4, 0)));
        assert!(pts.contains(&VoxelCoord::new(0, 0, 4)));
        assert!(!pts.contains(&VoxelCoord::new(4, 0, 0)));
    }

    #[test]
    fn paraboloid_widens_with_height() {
        let pts = set(paraboloid(ParaboloidParams {
            center: origin(),
            radius: 4.0,
            height: 9,
            axis: Axis::Y,
            hollow: false,
        }));
        assert!(pts.contains(&origin()));
        assert!(!pts.contains(&VoxelCoord::new(1, 0, 0)));
        assert!(pts.contains(&VoxelCoord::new(4, 8, 0)));
        assert!(!pts.contains(&VoxelCoord::new(4, 4, 0)));
        assert!(pts.iter().all(|p| (0..9).contains(&p.y)));
    }

    #[test]
    fn hollow_paraboloid_is_open_bowl() {
        let params = ParaboloidParams {
            center: origin(),
            radius: 6.0,
            height: 10,
            axis: Axis::Y,
            hollow: true,
        };
        let solid = set(paraboloid(ParaboloidParams {
            hollow: false,
            ..params
        }));
        let hollow = set(paraboloid(params));
        assert!(hollow.is_subset(&solid));
        assert!(hollow.len() < solid.len());
        // The top layer interior is not capped.
        assert!(!hollow.contains(&VoxelCoord::new(0, 9, 0)));
        assert!(hollow.contains(&origin()));
    }

    #[test]
    fn hyperboloid_pinches_at_waist() {
        let pts = set(hyperboloid(HyperboloidParams {
            center: origin(),
            waist_radius: 2.0,
            end_radius: 5.0,
            height: 11,
            axis: Axis::Y,
            hollow: false,
        }));
        // Waist at y = 5.
        assert!(pts.contains(&VoxelCoord::new(2, 5, 0)));
        assert!(!pts.contains(&VoxelCoord::new(3, 5, 0)));
        assert!(pts.contains(&VoxelCoord::new(5, 0, 0)));
        assert!(pts.contains(&VoxelCoord::new(5, 10, 0)));
    }

    #[test]
    fn hollow_hyperboloid_is_open_tube() {
        let params = HyperboloidParams {
            center: origin(),
            waist_radius: 3.0,
            end_radius: 6.0,
            height: 9,
            axis: Axis::Z,
            hollow: true,
        };
        let solid = set(hyperboloid(HyperboloidParams {
            hollow: false,
            ..params
        }));
        let hollow = set(hyperboloid(params));
        assert!(hollow.is_subset(&solid));
        for z in 0..9 {
            assert!(!hollow.contains(&VoxelCoord::new(0, 0, z)));
        }
    }

    #[test]
    fn equal_radii_hyperboloid_is_a_cylinder() {
        let hyper = set(hyperboloid(HyperboloidParams {
            center: origin(),
            waist_radius: 3.0,
            end_radius: 3.0,
            height: 4,
            axis: Axis::Y,
            hollow: false,
        }));
        let cyl = set(cylinder(
            CylinderParams {
                center: origin(),
                radius: 3.0,
                height: 4,
                axis: Axis::Y,
                hollow: false,
            },
            &shell(),
        ));
        assert_eq!(hyper, cyl);
    }
}
