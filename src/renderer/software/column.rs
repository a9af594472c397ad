//! Per-column ray set-up and visible-wall resolution.

use glam::Vec2;
use smallvec::SmallVec;

use crate::{
    renderer::software::intersect::wall_dist,
    world::{Wall, WallId, add_scaled},
};

/// The ray cast through one screen column.
#[derive(Clone, Copy, Debug)]
pub struct ColumnRay {
    /// `facing + left * fact`; not unit length.
    pub dir: Vec2,
    /// Lateral offset of this column in the `[-view_shift, view_shift]`
    /// sweep (positive = left edge).
    pub fact: f32,
}

impl ColumnRay {
    /// Linear sweep from the left FOV edge (`col = 0`) to the right edge
    /// (`col = width - 1`).
    pub fn new(col: usize, width: usize, facing: Vec2, left: Vec2, view_shift: f32) -> Self {
        let t = if width > 1 {
            col as f32 / (width - 1) as f32
        } else {
            0.5
        };
        let fact = (1.0 - 2.0 * t) * view_shift;
        Self {
            dir: add_scaled(facing, left, fact),
            fact,
        }
    }

    /// Turn a hit distance along `dir` into depth along the facing axis.
    /// Skipping this gives the fisheye look.
    #[inline]
    pub fn perpendicular(&self, dist: f32) -> f32 {
        dist / (1.0 + self.fact * self.fact).sqrt()
    }

    #[inline]
    pub fn unit_dir(&self) -> Vec2 {
        self.dir.normalize_or_zero()
    }
}

/// One wall seen through a column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleWall {
    pub id: WallId,
    /// Raw `wall_dist` result, before fisheye correction.
    pub dist: f32,
}

/// Walls crossed by one column ray, kept sorted nearest-first.
///
/// Grows past its inline capacity instead of capping the count.
#[derive(Clone, Debug, Default)]
pub struct WallStack {
    hits: SmallVec<[VisibleWall; 16]>,
}

impl WallStack {
    /// Binary insertion; equal distances keep arrival order.
    pub fn insert(&mut self, hit: VisibleWall) {
        let at = self.hits.partition_point(|h| h.dist <= hit.dist);
        self.hits.insert(at, hit);
    }

    /// Nearest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &VisibleWall> {
        self.hits.iter()
    }

    /// Farthest first, the order walls get painted in.
    pub fn back_to_front(&self) -> impl Iterator<Item = &VisibleWall> {
        self.hits.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Everything the paint pass needs for one column.
#[derive(Clone, Debug)]
pub struct ResolvedColumn {
    pub ray: ColumnRay,
    pub stack: WallStack,
}

/// Intersect `ray` with every wall and collect the hits.
pub fn resolve_column(org: Vec2, ray: ColumnRay, walls: &[Wall]) -> ResolvedColumn {
    let mut stack = WallStack::default();
    for (id, wall) in walls.iter().enumerate() {
        if let Some(dist) = wall_dist(org, ray.dir, wall) {
            stack.insert(VisibleWall { id, dist });
        }
    }
    ResolvedColumn { ray, stack }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Material;
    use glam::vec2;
    use std::sync::Arc;

    fn hline(y: f32) -> Wall {
        Wall::new(
            vec2(-5.0, y),
            vec2(5.0, y),
            0.0,
            2.0,
            Arc::new(Material::flat(0.5).unwrap()),
        )
    }

    #[test]
    fn sweep_spans_the_fov() {
        let f = vec2(0.0, 1.0);
        let l = f.perp();
        let first = ColumnRay::new(0, 200, f, l, 0.5);
        let last = ColumnRay::new(199, 200, f, l, 0.5);
        assert!((first.fact - 0.5).abs() < 1e-6);
        assert!((last.fact + 0.5).abs() < 1e-6);
        // column 0 looks left (-x when facing +y)
        assert!(first.dir.x < 0.0 && last.dir.x > 0.0);
    }

    #[test]
    fn perpendicular_removes_fisheye() {
        let f = vec2(0.0, 1.0);
        let ray = ColumnRay::new(0, 200, f, f.perp(), 1.0);
        let hit = wall_dist(Vec2::ZERO, ray.dir, &hline(4.0)).unwrap();
        // slanted ray is longer, its depth is not
        assert!(hit > 4.0);
        assert!((ray.perpendicular(hit) - 4.0).abs() < 1e-5);
    }

    #[test]
    fn hits_sorted_nearest_first() {
        let walls = vec![hline(6.0), hline(9.0), hline(3.0), hline(-2.0)];
        let ray = ColumnRay::new(50, 101, vec2(0.0, 1.0), vec2(-1.0, 0.0), 0.4);
        let col = resolve_column(Vec2::ZERO, ray, &walls);

        let ids: Vec<WallId> = col.stack.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![2, 0, 1]); // the wall behind is dropped
        let dists: Vec<f32> = col.stack.iter().map(|h| h.dist).collect();
        assert!(dists.windows(2).all(|w| w[0] < w[1]));

        let back: Vec<WallId> = col.stack.back_to_front().map(|h| h.id).collect();
        assert_eq!(back, vec![1, 0, 2]);
    }

    #[test]
    fn stack_grows_past_inline_capacity() {
        let walls: Vec<Wall> = (1..=100).rev().map(|i| hline(i as f32)).collect();
        let ray = ColumnRay::new(0, 1, vec2(0.0, 1.0), vec2(-1.0, 0.0), 0.4);
        let col = resolve_column(Vec2::ZERO, ray, &walls);
        assert_eq!(col.stack.len(), 100);
        assert_eq!(col.stack.iter().next().map(|h| h.id), Some(99));
    }

    #[test]
    fn equal_distances_keep_arrival_order() {
        let mut s = WallStack::default();
        s.insert(VisibleWall { id: 0, dist: 2.0 });
        s.insert(VisibleWall { id: 1, dist: 2.0 });
        s.insert(VisibleWall { id: 2, dist: 1.0 });
        let ids: Vec<WallId> = s.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![2, 0, 1]);
    }
}
