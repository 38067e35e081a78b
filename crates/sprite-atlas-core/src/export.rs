use crate::error::{AtlasError, Result};
use crate::model::{Layout, PackStats};
use serde_json::{Value, json};

/// Frames keyed by sprite name.
/// Shape: `{ name: { "frame": { "x", "y", "width", "height" } } }` using the
/// unpadded frame of each placement.
pub fn to_json_hash(layout: &Layout) -> Value {
    let mut frames = serde_json::Map::new();
    for p in &layout.placements {
        let frame = json!({
            "x": p.frame.x,
            "y": p.frame.y,
            "width": p.frame.w,
            "height": p.frame.h,
        });
        frames.insert(p.key.clone(), json!({ "frame": frame }));
    }
    Value::Object(frames)
}

/// Pretty-printed `to_json_hash` output.
pub fn to_json_string(layout: &Layout) -> Result<String> {
    serde_json::to_string_pretty(&to_json_hash(layout))
        .map_err(|e| AtlasError::Encode(e.to_string()))
}

/// Packing statistics as a flat JSON object.
pub fn to_stats_json(stats: &PackStats) -> Value {
    json!({
        "sprites": stats.num_sprites,
        "width": stats.width,
        "height": stats.height,
        "used_area": stats.used_frame_area,
        "total_area": stats.canvas_area,
        "wasted_area": stats.wasted_area(),
        "occupancy": stats.occupancy,
    })
}
