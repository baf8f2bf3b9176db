use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::info;
use serde::{Deserialize, Serialize};
use skeletonize::{
    ImageCodec, LogObserver, LumaWeights, PngCodec, SkeletonConfig, SkeletonOutput, Skeletonizer,
};

#[derive(Parser, Debug)]
#[command(name = "skeletonize")]
#[command(about = "Thin a drawing to a one-pixel skeleton and mark its endpoints and branches")]
struct Cli {
    #[arg(long, required = true)]
    input: PathBuf,
    #[arg(long, required = true)]
    out: PathBuf,
    /// Write run metadata as JSON.
    #[arg(long)]
    meta: Option<PathBuf>,
    /// JSON file with `SkeletonConfig` fields; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    contrast: Option<f32>,
    #[arg(long, value_enum)]
    luma: Option<LumaArg>,
    #[arg(long)]
    threshold_scale: Option<f64>,
    #[arg(long)]
    closing_iterations: Option<usize>,
    #[arg(long)]
    marker_radius: Option<usize>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum LumaArg {
    Bt709,
    Bt601,
    Average,
}

impl From<LumaArg> for LumaWeights {
    fn from(v: LumaArg) -> Self {
        match v {
            LumaArg::Bt709 => LumaWeights::Bt709,
            LumaArg::Bt601 => LumaWeights::Bt601,
            LumaArg::Average => LumaWeights::Average,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct ThresholdDto {
    raw: u8,
    scaled: u8,
}

#[derive(Debug, Clone, Serialize)]
struct MetaSkeleton {
    input: String,
    width: usize,
    height: usize,
    config: SkeletonConfig,
    threshold: ThresholdDto,
    thinning_passes: usize,
    removed_pixels: usize,
    skeleton_pixels: usize,
    components: usize,
    endpoints: Vec<[usize; 2]>,
    branches: Vec<[usize; 2]>,
    elapsed_ms: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = resolve_config(&cli)?;
    let sk = Skeletonizer::new(config).context("validating configuration")?;

    ensure_file_exists(&cli.input, "input")?;
    let bytes =
        fs::read(&cli.input).with_context(|| format!("reading input {}", cli.input.display()))?;

    let start = Instant::now();
    let img = PngCodec
        .decode(&bytes)
        .with_context(|| format!("decoding input image {}", cli.input.display()))?;
    let output = sk
        .run(&img, &LogObserver)
        .with_context(|| format!("skeletonizing {}", cli.input.display()))?;
    let png = PngCodec
        .encode(&output.annotated)
        .context("encoding annotated image")?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    ensure_parent_dir(&cli.out)?;
    fs::write(&cli.out, png).with_context(|| format!("writing image {}", cli.out.display()))?;
    info!(
        "wrote {} endpoints={} branches={} elapsed_ms={elapsed_ms:.1}",
        cli.out.display(),
        output.features.num_endpoints(),
        output.features.num_branches()
    );

    if let Some(meta_path) = &cli.meta {
        ensure_parent_dir(meta_path)?;
        write_json(meta_path, &meta_for(&cli.input, sk.config(), &output, elapsed_ms))?;
    }

    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<SkeletonConfig> {
    let mut cfg = match &cli.config {
        Some(path) => {
            ensure_file_exists(path, "config")?;
            read_json(path).with_context(|| format!("reading config json at {}", path.display()))?
        }
        None => SkeletonConfig::default(),
    };

    if let Some(v) = cli.contrast {
        cfg.contrast = v;
    }
    if let Some(v) = cli.luma {
        cfg.luma = v.into();
    }
    if let Some(v) = cli.threshold_scale {
        cfg.threshold_scale = v;
    }
    if let Some(v) = cli.closing_iterations {
        cfg.closing_iterations = v;
    }
    if let Some(v) = cli.marker_radius {
        cfg.marker_radius = v;
    }

    Ok(cfg)
}

fn meta_for(
    input: &Path,
    config: &SkeletonConfig,
    output: &SkeletonOutput,
    elapsed_ms: f64,
) -> MetaSkeleton {
    let points = |pts: &[(usize, usize)]| pts.iter().map(|&(x, y)| [x, y]).collect();
    let (width, height) = output.annotated.dimensions();

    MetaSkeleton {
        input: input.display().to_string(),
        width,
        height,
        config: config.clone(),
        threshold: ThresholdDto {
            raw: output.threshold.raw,
            scaled: output.threshold.scaled,
        },
        thinning_passes: output.thinning.passes,
        removed_pixels: output.thinning.removed,
        skeleton_pixels: output.skeleton.count_foreground(),
        components: output.components,
        endpoints: points(&output.features.endpoints),
        branches: points(&output.features.branches),
        elapsed_ms,
    }
}

fn ensure_file_exists(path: &Path, label: &str) -> Result<()> {
    if !path.is_file() {
        bail!("{label} file does not exist: {}", path.display());
    }
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    Ok(())
}

fn write_json(path: &Path, value: &impl Serialize) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value).context("serializing json")?;
    fs::write(path, bytes).with_context(|| format!("writing json {}", path.display()))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("parsing json {}", path.display()))
}
