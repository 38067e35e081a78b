use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AtlasError;

/// Placement strategies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlacementStrategyKind {
    /// Greedy placement over open corner points (dense; default).
    Frontier,
    /// Growing quad-split tree (simpler, leaves more gaps).
    QuadTree,
}

impl FromStr for PlacementStrategyKind {
    type Err = AtlasError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "frontier" => Ok(Self::Frontier),
            "quadtree" | "quad_tree" => Ok(Self::QuadTree),
            other => Err(AtlasError::InvalidConfig(format!("unknown strategy: {}", other))),
        }
    }
}

/// Order in which sprites are fed to the strategy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Descending padded area, ties kept in discovery order.
    AreaDesc,
    /// Discovery order.
    None,
}

impl FromStr for SortOrder {
    type Err = AtlasError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "area_desc" => Ok(Self::AreaDesc),
            "none" => Ok(Self::None),
            other => Err(AtlasError::InvalidConfig(format!("unknown sort order: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackerConfig {
    /// Transparent pixels added around every sprite before packing.
    #[serde(default)]
    pub expand: u32,
    /// Round the canvas up to a square power-of-two side.
    #[serde(default)]
    pub power_of_two: bool,
    #[serde(default = "default_strategy")]
    pub strategy: PlacementStrategyKind,
    #[serde(default = "default_sort_order")]
    pub sort_order: SortOrder,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            expand: 0,
            power_of_two: false,
            strategy: default_strategy(),
            sort_order: default_sort_order(),
        }
    }
}

fn default_strategy() -> PlacementStrategyKind {
    PlacementStrategyKind::Frontier
}
fn default_sort_order() -> SortOrder {
    SortOrder::AreaDesc
}

/// Builder for `PackerConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackerConfigBuilder {
    cfg: PackerConfig,
}

impl PackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackerConfig::default(),
        }
    }
    pub fn expand(mut self, v: u32) -> Self {
        self.cfg.expand = v;
        self
    }
    pub fn pow2(mut self, v: bool) -> Self {
        self.cfg.power_of_two = v;
        self
    }
    pub fn strategy(mut self, v: PlacementStrategyKind) -> Self {
        self.cfg.strategy = v;
        self
    }
    pub fn sort_order(mut self, v: SortOrder) -> Self {
        self.cfg.sort_order = v;
        self
    }
    pub fn build(self) -> PackerConfig {
        self.cfg
    }
}

impl PackerConfig {
    /// Create a fluent builder for `PackerConfig`.
    pub fn builder() -> PackerConfigBuilder {
        PackerConfigBuilder::new()
    }
}
