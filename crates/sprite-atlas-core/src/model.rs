use crate::error::{AtlasError, Result};
use serde::{Deserialize, Serialize};

/// Integer position on the canvas. Equality and hashing are structural.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    pub fn at(origin: Point, w: u32, h: u32) -> Self {
        Self::new(origin.x, origin.y, w, h)
    }
    pub fn left(&self) -> u32 {
        self.x
    }
    pub fn top(&self) -> u32 {
        self.y
    }
    /// Builds the rect anchored at `origin`, or `None` if an edge would exceed `u32::MAX`.
    pub fn checked_at(origin: Point, w: u32, h: u32) -> Option<Self> {
        origin.x.checked_add(w)?;
        origin.y.checked_add(h)?;
        Some(Self::at(origin, w, h))
    }
    /// Exclusive right edge (`x + w`), saturating at `u32::MAX`.
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }
    /// Exclusive bottom edge (`y + h`), saturating at `u32::MAX`.
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }
    /// Open-interval overlap test: rects that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
    /// True if `p` lies inside the rect (left/top edges inclusive, right/bottom exclusive).
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }
    /// Shrinks the rect by `by` pixels on every side.
    pub fn shrink(&self, by: u32) -> Rect {
        Rect::new(
            self.x + by,
            self.y + by,
            self.w.saturating_sub(by.saturating_mul(2)),
            self.h.saturating_sub(by.saturating_mul(2)),
        )
    }
}

/// One sprite to pack, with its footprint inflated by `expand` on every side.
///
/// Descriptors are immutable once built; `order` is the discovery index used
/// to keep the area sort stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteDescriptor {
    key: String,
    width: u32,
    height: u32,
    expand: u32,
    padded_width: u32,
    padded_height: u32,
    order: usize,
}

impl SpriteDescriptor {
    pub fn new(
        key: impl Into<String>,
        width: u32,
        height: u32,
        expand: u32,
        order: usize,
    ) -> Result<Self> {
        let key = key.into();
        if width == 0 || height == 0 {
            return Err(AtlasError::InvalidInput(format!(
                "sprite '{}' has zero size {}x{}",
                key, width, height
            )));
        }
        let border = expand.checked_mul(2);
        let padded = border.and_then(|b| Some((width.checked_add(b)?, height.checked_add(b)?)));
        let Some((padded_width, padded_height)) = padded else {
            return Err(AtlasError::InvalidInput(format!(
                "sprite '{}' ({}x{}) overflows when expanded by {}",
                key, width, height, expand
            )));
        };
        Ok(Self {
            key,
            width,
            height,
            expand,
            padded_width,
            padded_height,
            order,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }
    /// Requested (unpadded) width.
    pub fn width(&self) -> u32 {
        self.width
    }
    /// Requested (unpadded) height.
    pub fn height(&self) -> u32 {
        self.height
    }
    pub fn expand(&self) -> u32 {
        self.expand
    }
    pub fn padded_width(&self) -> u32 {
        self.padded_width
    }
    pub fn padded_height(&self) -> u32 {
        self.padded_height
    }
    pub fn order(&self) -> usize {
        self.order
    }
    /// Packed footprint area (padded).
    pub fn area(&self) -> u64 {
        self.padded_width as u64 * self.padded_height as u64
    }
}

/// A sprite's final location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Placement {
    pub key: String,
    /// Padded rect as placed on the canvas.
    pub rect: Rect,
    /// Reported frame: `rect` shrunk by the expand value on each side.
    pub frame: Rect,
}

/// Result of a packing run: one placement per sprite plus the canvas size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Layout {
    /// Placements in the order they were made (largest area first).
    pub placements: Vec<Placement>,
    pub width: u32,
    pub height: u32,
    pub expand: u32,
}

impl Layout {
    pub fn get(&self, key: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Computes packing statistics for this layout.
    pub fn stats(&self) -> PackStats {
        let canvas_area = self.width as u64 * self.height as u64;
        let used_frame_area: u64 = self.placements.iter().map(|p| p.frame.area()).sum();
        let occupancy = if canvas_area > 0 {
            used_frame_area as f64 / canvas_area as f64
        } else {
            0.0
        };
        PackStats {
            num_sprites: self.placements.len(),
            width: self.width,
            height: self.height,
            canvas_area,
            used_frame_area,
            occupancy,
        }
    }
}

/// Statistics about packing efficiency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PackStats {
    pub num_sprites: usize,
    pub width: u32,
    pub height: u32,
    /// `width * height` of the canvas.
    pub canvas_area: u64,
    /// Sum of unpadded frame areas.
    pub used_frame_area: u64,
    /// used_frame_area / canvas_area (0.0 to 1.0). Higher is better.
    pub occupancy: f64,
}

impl PackStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Sprites: {}, Canvas: {}x{}, Occupancy: {:.2}%, Used Area: {} px², Wasted: {} px²",
            self.num_sprites,
            self.width,
            self.height,
            self.occupancy * 100.0,
            self.used_frame_area,
            self.wasted_area(),
        )
    }

    pub fn wasted_area(&self) -> u64 {
        self.canvas_area.saturating_sub(self.used_frame_area)
    }
}
