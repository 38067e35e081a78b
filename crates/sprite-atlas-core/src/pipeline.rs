use crate::canvas::compute_canvas_size;
use crate::compositing::compose_canvas;
use crate::config::{PackerConfig, SortOrder};
use crate::error::{AtlasError, Result};
use crate::model::{Layout, PackStats, Placement, SpriteDescriptor};
use crate::packer::new_strategy;
use image::{DynamicImage, RgbaImage};
use std::collections::{HashMap, HashSet};
use tracing::{info, instrument};

/// In-memory image to pack (key + decoded image).
pub struct InputImage {
    pub key: String,
    pub image: DynamicImage,
}

/// Output of a packing run: the layout and the composited RGBA canvas.
pub struct PackOutput {
    pub layout: Layout,
    pub rgba: RgbaImage,
}

impl PackOutput {
    /// Convenience method that delegates to `layout.stats()`.
    pub fn stats(&self) -> PackStats {
        self.layout.stats()
    }
}

/// Builds descriptors from `(key, width, height)` in discovery order and sorts
/// them per `cfg.sort_order`. The sort is stable, so equal areas keep their
/// discovery order.
pub fn describe_sprites<K: Into<String>>(
    inputs: Vec<(K, u32, u32)>,
    cfg: &PackerConfig,
) -> Result<Vec<SpriteDescriptor>> {
    let mut seen = HashSet::new();
    let mut sprites = Vec::with_capacity(inputs.len());
    for (order, (key, w, h)) in inputs.into_iter().enumerate() {
        let sprite = SpriteDescriptor::new(key, w, h, cfg.expand, order)?;
        if !seen.insert(sprite.key().to_string()) {
            return Err(AtlasError::InvalidInput(format!(
                "duplicate sprite key '{}'",
                sprite.key()
            )));
        }
        sprites.push(sprite);
    }
    match cfg.sort_order {
        SortOrder::None => {}
        SortOrder::AreaDesc => sprites.sort_by(|a, b| b.area().cmp(&a.area())),
    }
    Ok(sprites)
}

/// Runs the configured strategy over already-sorted descriptors and sizes the canvas.
pub fn place_sprites(sprites: &[SpriteDescriptor], cfg: &PackerConfig) -> Result<Layout> {
    let mut strategy = new_strategy(cfg.strategy);
    let mut placements = Vec::with_capacity(sprites.len());
    for sprite in sprites {
        let rect = strategy.place(sprite)?;
        placements.push(Placement {
            key: sprite.key().to_string(),
            rect,
            frame: rect.shrink(cfg.expand),
        });
    }
    let (width, height) =
        compute_canvas_size(placements.iter().map(|p| &p.rect), cfg.power_of_two)?;
    info!(sprites = placements.len(), width, height, "layout computed");
    Ok(Layout {
        placements,
        width,
        height,
        expand: cfg.expand,
    })
}

/// Packs sizes without compositing pixel data.
/// Inputs are (key, width, height) in discovery order. An empty input yields
/// an empty 0x0 layout.
#[instrument(skip_all)]
pub fn pack_layout<K: Into<String>>(
    inputs: Vec<(K, u32, u32)>,
    cfg: PackerConfig,
) -> Result<Layout> {
    let sprites = describe_sprites(inputs, &cfg)?;
    place_sprites(&sprites, &cfg)
}

/// Packs `inputs` and composites them into one RGBA canvas.
///
/// Each image is blitted at its frame origin, so the expand border around it
/// stays transparent.
#[instrument(skip_all)]
pub fn pack_images(inputs: Vec<InputImage>, cfg: PackerConfig) -> Result<PackOutput> {
    let buffers: Vec<(String, RgbaImage)> = inputs
        .into_iter()
        .map(|inp| (inp.key, inp.image.to_rgba8()))
        .collect();
    let sizes: Vec<(String, u32, u32)> = buffers
        .iter()
        .map(|(key, img)| (key.clone(), img.width(), img.height()))
        .collect();
    let layout = pack_layout(sizes, cfg)?;

    let by_key: HashMap<&str, &RgbaImage> =
        buffers.iter().map(|(k, img)| (k.as_str(), img)).collect();
    let rgba = compose_canvas(
        layout.width,
        layout.height,
        layout.placements.iter().filter_map(|p| {
            by_key
                .get(p.key.as_str())
                .map(|img| (*img, p.frame.x, p.frame.y))
        }),
    );
    Ok(PackOutput { layout, rgba })
}
