use super::PlacementStrategy;
use crate::error::{AtlasError, Result};
use crate::model::{Point, Rect, SpriteDescriptor};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Deduplicated set of open top-left corners where a sprite may be anchored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFrontier {
    points: HashSet<Point>,
}

impl CandidateFrontier {
    /// A frontier holding only the origin.
    pub fn new() -> Self {
        let mut points = HashSet::new();
        points.insert(Point::new(0, 0));
        Self { points }
    }

    /// Inserts `p`; returns false if it was already present.
    pub fn insert(&mut self, p: Point) -> bool {
        self.points.insert(p)
    }

    /// Removes `p`; no-op if absent.
    pub fn remove(&mut self, p: Point) -> bool {
        self.points.remove(&p)
    }

    pub fn contains(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates points in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().copied()
    }

    fn retain(&mut self, mut keep: impl FnMut(Point) -> bool) {
        self.points.retain(|p| keep(*p));
    }
}

impl Default for CandidateFrontier {
    fn default() -> Self {
        Self::new()
    }
}

/// Greedy frontier packer.
///
/// Each sprite is anchored at the open corner minimizing `max(x, y)` among
/// corners whose trial rect does not intersect any placed rect. Ties go to
/// the smaller `y`, then the smaller `x`, so results never depend on the
/// frontier's iteration order.
#[derive(Debug, Clone, Default)]
pub struct FrontierPacker {
    frontier: CandidateFrontier,
    placed: Vec<Rect>,
}

impl FrontierPacker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frontier(&self) -> &CandidateFrontier {
        &self.frontier
    }

    /// Rects placed so far, in placement order.
    pub fn placed(&self) -> &[Rect] {
        &self.placed
    }

    fn is_free(&self, trial: &Rect) -> bool {
        !self.placed.iter().any(|r| r.intersects(trial))
    }

    fn choose(&self, w: u32, h: u32) -> Option<Point> {
        self.frontier
            .iter()
            .filter(|&c| Rect::checked_at(c, w, h).is_some_and(|trial| self.is_free(&trial)))
            .min_by_key(|c| (c.x.max(c.y), c.y, c.x))
    }

    fn commit(&mut self, at: Point, w: u32, h: u32) -> Rect {
        let rect = Rect::at(at, w, h);
        self.frontier.remove(at);
        // A corner covered by a placed rect can never anchor anything again.
        self.frontier.retain(|p| !rect.contains_point(p));
        for corner in [
            Point::new(rect.right(), rect.top()),
            Point::new(rect.left(), rect.bottom()),
            Point::new(rect.right(), rect.bottom()),
        ] {
            if !self.placed.iter().any(|r| r.contains_point(corner)) {
                self.frontier.insert(corner);
            }
        }
        self.placed.push(rect);
        rect
    }
}

impl PlacementStrategy for FrontierPacker {
    fn place(&mut self, sprite: &SpriteDescriptor) -> Result<Rect> {
        let (w, h) = (sprite.padded_width(), sprite.padded_height());
        let Some(at) = self.choose(w, h) else {
            return Err(AtlasError::UnplaceableSprite {
                key: sprite.key().to_string(),
                width: w,
                height: h,
            });
        };
        let rect = self.commit(at, w, h);
        debug!(key = sprite.key(), x = rect.x, y = rect.y, w, h, "placed sprite");
        trace!(frontier = self.frontier.len(), "frontier updated");
        Ok(rect)
    }
}
