//! Point-to-segment distance for slice hit testing

use glam::Vec2;

/// Euclidean distance from `p` to the closest point on segment `a`-`b`.
///
/// The projection is clamped to the endpoints, so this measures against the
/// segment, not the infinite line. A degenerate segment (`a == b`) is
/// treated as a point.
pub fn distance_point_to_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}
