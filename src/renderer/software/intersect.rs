//! Ray / wall-segment intersection.
//!
//! Everything happens in ray-origin space: the wall becomes the line
//! `y = a1*x + b1`, the ray the line `y = a2*x` through the origin.
//!
//! ```text
//!   x = -b1 / (a1 - a2)
//!   y =  a2 * x
//! ```
//!
//! Vertical walls (`dx == 0`) and vertical rays (`dir.x == 0`) take their
//! own branches so no slope is ever divided by zero.

use glam::{Vec2, vec2};

use crate::world::Wall;

/// Distance from `org` to the point where the ray `org + t*dir` (`t >= 0`)
/// crosses `wall`, or `None` when it misses.
///
/// * The distance is Euclidean in world units, **not** divided by
///   `|dir|`; per-column callers correct that themselves.
/// * Segment endpoints count as hits.
/// * Parallel rays and walls behind the viewer are misses.
pub fn wall_dist(org: Vec2, dir: Vec2, wall: &Wall) -> Option<f32> {
    let p1 = wall.p1 - org;
    let p2 = wall.p2 - org;
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;

    let hit = if dx == 0.0 {
        // vertical wall (or a single point)
        if dir.x == 0.0 {
            return None;
        }
        let x = p2.x;
        vec2(x, dir.y / dir.x * x)
    } else {
        let a1 = dy / dx;
        let b1 = p1.y - a1 * p1.x;
        if dir.x == 0.0 {
            // vertical ray meets the wall line at x = 0
            vec2(0.0, b1)
        } else {
            let a2 = dir.y / dir.x;
            if a1 == a2 {
                return None;
            }
            let x = -b1 / (a1 - a2);
            vec2(x, a2 * x)
        }
    };

    if outside(hit.x, p1.x, p2.x, dx) || outside(hit.y, p1.y, p2.y, dy) {
        return None;
    }

    // looking at the wall backwards
    if hit.dot(dir) < 0.0 {
        return None;
    }

    Some(hit.length())
}

/// True if `t` lies strictly beyond both `a` and `b` on an axis where the
/// segment has extent.
#[inline]
fn outside(t: f32, a: f32, b: f32, extent: f32) -> bool {
    extent != 0.0 && ((t < a && t < b) || (t > a && t > b))
}
