//! Core library for packing sprites into a single atlas.
//!
//! - Placement: frontier-based greedy packing (default) or a growing quad-split tree
//! - Canvas sizing: tight bounding box, optionally a square power of two
//! - Pipeline: `pack_images` takes in-memory images and returns the layout plus one RGBA canvas
//! - Export: JSON hash of unpadded frames keyed by sprite name
//!
//! Quick example:
//! ```ignore
//! use sprite_atlas_core::{PackerConfig, pack_layout, to_json_hash};
//! # fn main() -> sprite_atlas_core::Result<()> {
//! let cfg = PackerConfig::builder().expand(2).pow2(true).build();
//! let layout = pack_layout(vec![("hero", 64, 64), ("coin", 16, 16)], cfg)?;
//! println!("{}x{}", layout.width, layout.height);
//! println!("{}", to_json_hash(&layout));
//! # Ok(()) }
//! ```

pub mod canvas;
pub mod compositing;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod packer;
pub mod pipeline;

pub use canvas::*;
pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use packer::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `sprite_atlas_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{PackerConfig, PackerConfigBuilder, PlacementStrategyKind, SortOrder};
    pub use crate::error::{AtlasError, Result};
    pub use crate::model::{Layout, PackStats, Placement, Point, Rect, SpriteDescriptor};
    pub use crate::packer::{CandidateFrontier, FrontierPacker, PlacementStrategy, QuadTreePacker};
    pub use crate::{InputImage, PackOutput, pack_images, pack_layout, to_json_hash};
}
