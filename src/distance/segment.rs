//! Point-to-arc distance on the sphere.
//!
//! Polygon edges are treated as great-circle arcs between their vertices.
//! The point is projected onto the arc's great circle with unit vectors; when
//! the projection falls outside the arc the nearer endpoint is used.

use super::{haversine_km, EARTH_RADIUS_KM};
use crate::models::BorderPoint;

type Vec3 = [f64; 3];

const EPSILON: f64 = 1e-12;

fn to_unit(p: BorderPoint) -> Vec3 {
    let (lat, lon) = (p.lat.to_radians(), p.lng.to_radians());
    [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
}

fn dot(a: Vec3, b: Vec3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn norm(a: Vec3) -> f64 {
    dot(a, a).sqrt()
}

fn scale(a: Vec3, k: f64) -> Vec3 {
    [a[0] * k, a[1] * k, a[2] * k]
}

fn endpoint_km(p: BorderPoint, a: BorderPoint, b: BorderPoint) -> f64 {
    haversine_km(p.lat, p.lng, a.lat, a.lng).min(haversine_km(p.lat, p.lng, b.lat, b.lng))
}

/// Shortest great-circle distance from `p` to the arc `a`-`b`, in km, unrounded.
///
/// Degenerate arcs (identical or antipodal endpoints) fall back to the
/// endpoint distances.
pub fn point_to_segment_km(p: BorderPoint, a: BorderPoint, b: BorderPoint) -> f64 {
    let (pv, av, bv) = (to_unit(p), to_unit(a), to_unit(b));

    let normal = cross(av, bv);
    let normal_len = norm(normal);
    if normal_len < EPSILON {
        return endpoint_km(p, a, b);
    }
    let normal = scale(normal, 1.0 / normal_len);

    // Sine of the cross-track angle
    let sin_xt = dot(pv, normal).clamp(-1.0, 1.0);

    let foot = [
        pv[0] - normal[0] * sin_xt,
        pv[1] - normal[1] * sin_xt,
        pv[2] - normal[2] * sin_xt,
    ];
    let foot_len = norm(foot);
    if foot_len < EPSILON {
        // p is a pole of the arc's great circle: every point is 90 degrees away
        return endpoint_km(p, a, b);
    }
    let foot = scale(foot, 1.0 / foot_len);

    let after_a = dot(cross(av, foot), normal) >= 0.0;
    let before_b = dot(cross(foot, bv), normal) >= 0.0;
    if after_a && before_b {
        EARTH_RADIUS_KM * sin_xt.abs().asin()
    } else {
        endpoint_km(p, a, b)
    }
}
