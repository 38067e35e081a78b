use super::PlacementStrategy;
use crate::error::{AtlasError, Result};
use crate::model::{Rect, SpriteDescriptor};
use tracing::debug;

#[derive(Debug, Clone)]
enum Node {
    Leaf { bounds: Rect, occupant: Option<String> },
    Split { bounds: Rect, children: Vec<Node> },
}

impl Node {
    fn empty(bounds: Rect) -> Self {
        Node::Leaf {
            bounds,
            occupant: None,
        }
    }

    fn bounds(&self) -> Rect {
        match self {
            Node::Leaf { bounds, .. } | Node::Split { bounds, .. } => *bounds,
        }
    }

    fn insert(&mut self, key: &str, w: u32, h: u32) -> Option<Rect> {
        match self {
            Node::Split { children, .. } => children.iter_mut().find_map(|c| c.insert(key, w, h)),
            Node::Leaf {
                occupant: Some(_), ..
            } => None,
            Node::Leaf {
                bounds,
                occupant: None,
            } => {
                let b = *bounds;
                if w > b.w || h > b.h {
                    return None;
                }
                // Child edges stay within `b`, whose edges were range-checked on growth.
                let placed = Rect::new(b.x, b.y, w, h);
                if w == b.w && h == b.h {
                    *self = Node::Leaf {
                        bounds: b,
                        occupant: Some(key.to_string()),
                    };
                    return Some(placed);
                }
                let taken = Node::Leaf {
                    bounds: placed,
                    occupant: Some(key.to_string()),
                };
                let children = if h == b.h {
                    vec![taken, Node::empty(Rect::new(b.x + w, b.y, b.w - w, h))]
                } else if w == b.w {
                    vec![taken, Node::empty(Rect::new(b.x, b.y + h, w, b.h - h))]
                } else {
                    vec![
                        taken,
                        Node::empty(Rect::new(b.x, b.y + h, w, b.h - h)),
                        Node::empty(Rect::new(b.x + w, b.y, b.w - w, h)),
                        Node::empty(Rect::new(b.x + w, b.y + h, b.w - w, b.h - h)),
                    ]
                };
                *self = Node::Split {
                    bounds: b,
                    children,
                };
                Some(placed)
            }
        }
    }

    /// Wraps `self` as the top-left child of a node `n` pixels larger in both
    /// dimensions. Hands `self` back unchanged if an edge would exceed `u32::MAX`.
    fn grow(self, n: u32) -> std::result::Result<Node, Node> {
        let b = self.bounds();
        let fits = b
            .x
            .checked_add(b.w)
            .and_then(|r| r.checked_add(n))
            .zip(b.y.checked_add(b.h).and_then(|r| r.checked_add(n)))
            .is_some();
        if !fits {
            return Err(self);
        }
        Ok(Node::Split {
            bounds: Rect::new(b.x, b.y, b.w + n, b.h + n),
            children: vec![
                self,
                Node::empty(Rect::new(b.x, b.y + b.h, b.w, n)),
                Node::empty(Rect::new(b.x + b.w, b.y, n, b.h)),
                Node::empty(Rect::new(b.x + b.w, b.y + b.h, n, n)),
            ],
        })
    }
}

/// Growing quad-split tree packer.
///
/// The root starts at the first sprite's size. When no leaf fits, the root
/// grows by the sprite's longer side; the new corner leaf always fits it.
#[derive(Debug, Clone, Default)]
pub struct QuadTreePacker {
    root: Option<Node>,
}

impl QuadTreePacker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current extent of the tree (may exceed the placed rects' bounding box).
    pub fn bounds(&self) -> Option<Rect> {
        self.root.as_ref().map(Node::bounds)
    }
}

impl PlacementStrategy for QuadTreePacker {
    fn place(&mut self, sprite: &SpriteDescriptor) -> Result<Rect> {
        let (w, h) = (sprite.padded_width(), sprite.padded_height());
        let unplaceable = || AtlasError::UnplaceableSprite {
            key: sprite.key().to_string(),
            width: w,
            height: h,
        };
        let mut root = self
            .root
            .take()
            .unwrap_or_else(|| Node::empty(Rect::new(0, 0, w, h)));
        let placed = match root.insert(sprite.key(), w, h) {
            Some(r) => Some(r),
            None => match root.grow(w.max(h)) {
                Ok(grown) => {
                    root = grown;
                    debug!(key = sprite.key(), bounds = ?root.bounds(), "grew tree");
                    root.insert(sprite.key(), w, h)
                }
                Err(unchanged) => {
                    root = unchanged;
                    None
                }
            },
        };
        self.root = Some(root);
        let rect = placed.ok_or_else(unplaceable)?;
        debug!(key = sprite.key(), x = rect.x, y = rect.y, w, h, "placed sprite");
        Ok(rect)
    }
}
