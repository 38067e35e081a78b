use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser};
use image::{DynamicImage, ImageReader};
use serde::Deserialize;
use sprite_atlas_core::config::{PlacementStrategyKind, SortOrder};
use sprite_atlas_core::{InputImage, PackOutput, PackerConfig, pack_images};
use tracing::{info, warn};
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(
    name = "sprite-atlas",
    about = "Pack a directory of PNG sprites into one atlas image plus JSON frame metadata",
    version
)]
struct Cli {
    // Input/Output
    /// Directory containing the .png sprites (not searched recursively)
    #[arg(
        long = "in_dir",
        value_name = "DIR",
        required_unless_present = "print_config",
        help_heading = "Input/Output"
    )]
    in_dir: Option<PathBuf>,
    /// Where to write <atlas_name>.png and <atlas_name>.json
    #[arg(
        long = "out_dir",
        value_name = "DIR",
        required_unless_present = "print_config",
        help_heading = "Input/Output"
    )]
    out_dir: Option<PathBuf>,
    /// Base name of the output files
    #[arg(
        long = "atlas_name",
        value_name = "NAME",
        required_unless_present = "print_config",
        help_heading = "Input/Output"
    )]
    atlas_name: Option<String>,
    /// YAML config file path (overrides layout options)
    #[arg(long, value_name = "FILE", help_heading = "Input/Output")]
    config: Option<PathBuf>,

    // Layout
    /// Transparent pixels to put around each sprite
    #[arg(long, value_name = "N", default_value_t = 0, help_heading = "Layout")]
    expand: u32,
    /// Make the atlas a square with a power-of-two side
    #[arg(long = "power_of_two", default_value_t = false, help_heading = "Layout")]
    power_of_two: bool,
    /// Placement strategy: frontier | quadtree
    #[arg(long, value_parser = ["frontier", "quadtree"], default_value = "frontier", help_heading = "Layout")]
    strategy: String,
    /// Sort order: area_desc | none
    #[arg(long = "sort_order", value_parser = ["area_desc", "none"], default_value = "area_desc", help_heading = "Layout")]
    sort_order: String,

    // Export
    /// Export packing stats (JSON) to this file
    #[arg(long = "export_stats", value_name = "FILE", help_heading = "Export")]
    export_stats: Option<PathBuf>,
    /// Print the merged configuration (after CLI/YAML) as JSON and exit; I/O flags are not needed
    #[arg(long = "print_config", default_value_t = false, help_heading = "Export")]
    print_config: bool,
    /// Dry run: compute layout and stats but do not write files
    #[arg(long = "dry_run", default_value_t = false, help_heading = "Export")]
    dry_run: bool,

    /// Show progress bars (disable with --progress false or --quiet)
    #[arg(long, default_value_t = true, action = ArgAction::Set, help_heading = "Logging/UX")]
    progress: bool,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(short, long, default_value_t = false, help_heading = "Logging/UX")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let cfg = build_config(cli)?;
    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&cfg)?);
        return Ok(());
    }

    let (in_dir, out_dir, atlas_name) = match (&cli.in_dir, &cli.out_dir, &cli.atlas_name) {
        (Some(i), Some(o), Some(n)) => (i, o, n),
        _ => anyhow::bail!("--in_dir, --out_dir and --atlas_name are required"),
    };
    let out = pack_dir(in_dir, cfg, cli.progress && !cli.quiet)?;
    let stats = out.stats();
    info!(
        width = stats.width,
        height = stats.height,
        occupancy = format!("{:.2}%", stats.occupancy * 100.0),
        "stats"
    );

    if cli.dry_run {
        println!("{}", stats.summary());
        return Ok(());
    }
    write_outputs(out_dir, atlas_name, &out)?;

    if let Some(stats_path) = &cli.export_stats {
        let value = sprite_atlas_core::to_stats_json(&stats);
        fs::write(stats_path, serde_json::to_string_pretty(&value)?)
            .with_context(|| format!("write {}", stats_path.display()))?;
        info!(?stats_path, "stats exported");
    }
    Ok(())
}

fn build_config(cli: &Cli) -> anyhow::Result<PackerConfig> {
    let base = PackerConfig {
        expand: cli.expand,
        power_of_two: cli.power_of_two,
        strategy: cli.strategy.parse()?,
        sort_order: cli.sort_order.parse()?,
    };
    match &cli.config {
        Some(path) => {
            let file = fs::read_to_string(path)
                .with_context(|| format!("read config {}", path.display()))?;
            let y: YamlConfig = serde_yaml::from_str(&file)
                .with_context(|| format!("parse config {}", path.display()))?;
            y.into_packer_config(base)
        }
        None => Ok(base),
    }
}

/// Loads every PNG in `in_dir` and packs them. Nothing is written to disk.
fn pack_dir(in_dir: &Path, cfg: PackerConfig, progress: bool) -> anyhow::Result<PackOutput> {
    anyhow::ensure!(
        in_dir.is_dir(),
        "input directory {} does not exist",
        in_dir.display()
    );
    let paths = gather_pngs(in_dir)?;
    info!(count = paths.len(), "processing images");
    let inputs = load_images_with_progress(&paths, progress)?;
    Ok(pack_images(inputs, cfg)?)
}

fn write_outputs(out_dir: &Path, atlas_name: &str, out: &PackOutput) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create out_dir {}", out_dir.display()))?;

    if out.layout.is_empty() {
        warn!("no sprites found; atlas image not written");
    } else {
        let png_path = out_dir.join(format!("{}.png", atlas_name));
        out.rgba
            .save(&png_path)
            .with_context(|| format!("write {}", png_path.display()))?;
        info!(?png_path, "atlas image written");
    }

    let json_path = out_dir.join(format!("{}.json", atlas_name));
    let json = sprite_atlas_core::to_json_string(&out.layout)?;
    fs::write(&json_path, json).with_context(|| format!("write {}", json_path.display()))?;
    info!(?json_path, sprites = out.layout.len(), "metadata written");
    Ok(())
}

/// Lists `*.png` files directly inside `dir`, sorted by file name.
fn gather_pngs(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut list = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("scan {}", dir.display()))?;
        let p = entry.path();
        if p.is_file() && is_png(p) {
            list.push(p.to_path_buf());
        }
    }
    Ok(list)
}

fn is_png(p: &Path) -> bool {
    p.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// Sprite key: the file name without its extension.
fn sprite_key(p: &Path) -> String {
    p.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| p.to_string_lossy().into_owned())
}

fn load_images_with_progress(paths: &[PathBuf], progress: bool) -> anyhow::Result<Vec<InputImage>> {
    use indicatif::{ProgressBar, ProgressStyle};
    let bar = if progress {
        let b = ProgressBar::new(paths.len() as u64);
        b.set_style(ProgressStyle::with_template(
            "{spinner:.green} loading {pos}/{len} [{elapsed_precise}] {wide_msg}",
        )?);
        Some(b)
    } else {
        None
    };
    let mut list = Vec::with_capacity(paths.len());
    for p in paths {
        if let Some(b) = &bar {
            b.set_message(p.file_name().and_then(|s| s.to_str()).unwrap_or("").to_string());
        }
        let image = load_image(p).with_context(|| format!("load {}", p.display()))?;
        list.push(InputImage {
            key: sprite_key(p),
            image,
        });
        if let Some(b) = &bar {
            b.inc(1);
        }
    }
    if let Some(b) = &bar {
        b.finish_and_clear();
    }
    Ok(list)
}

fn load_image(p: &Path) -> anyhow::Result<DynamicImage> {
    let img = ImageReader::open(p)?.with_guessed_format()?.decode()?;
    Ok(img)
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct YamlConfig {
    expand: Option<u32>,
    power_of_two: Option<bool>,
    strategy: Option<String>,
    sort_order: Option<String>,
}

impl YamlConfig {
    fn into_packer_config(self, mut cfg: PackerConfig) -> anyhow::Result<PackerConfig> {
        if let Some(v) = self.expand {
            cfg.expand = v;
        }
        if let Some(v) = self.power_of_two {
            cfg.power_of_two = v;
        }
        if let Some(v) = self.strategy {
            cfg.strategy = v.parse::<PlacementStrategyKind>()?;
        }
        if let Some(v) = self.sort_order {
            cfg.sort_order = v.parse::<SortOrder>()?;
        }
        Ok(cfg)
    }
}
