use crate::config::PlacementStrategyKind;
use crate::error::Result;
use crate::model::{Rect, SpriteDescriptor};

pub mod frontier;
pub mod quadtree;

pub use frontier::{CandidateFrontier, FrontierPacker};
pub use quadtree::QuadTreePacker;

/// A placement strategy assigns each sprite a padded rect on an unbounded canvas.
///
/// Implementations must ensure placed rects never intersect. `place` returns
/// `AtlasError::UnplaceableSprite` rather than dropping a sprite it cannot fit.
pub trait PlacementStrategy {
    fn place(&mut self, sprite: &SpriteDescriptor) -> Result<Rect>;
}

/// Creates a fresh strategy for one packing run.
pub fn new_strategy(kind: PlacementStrategyKind) -> Box<dyn PlacementStrategy> {
    match kind {
        PlacementStrategyKind::Frontier => Box::new(FrontierPacker::new()),
        PlacementStrategyKind::QuadTree => Box::new(QuadTreePacker::new()),
    }
}
