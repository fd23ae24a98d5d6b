use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;
use trimosaic::api::{triangulate, MosaicCfg};

mod config;
mod load;
mod provenance;
mod render;
mod title;

use config::Overrides;
use render::Format;

#[derive(Parser)]
#[command(name = "trimosaic")]
#[command(about = "Approximate images with flat-coloured triangles")]
struct Cmd {
    /// Also log debug events (root split sizes, safety-valve leaves)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Triangulate an image and write SVG, PNG, JPEG, or JSON tiles
    Render(RenderArgs),
    /// Print the effective configuration as JSON
    Config {
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct RenderArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// Working width; larger images are shrunk before sampling
    #[arg(long, default_value_t = 1600)]
    width: u32,
    /// Output magnification relative to the working size
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
    #[arg(long)]
    threshold: Option<f64>,
    #[arg(long)]
    max_ratio: Option<f64>,
    #[arg(long)]
    max_depth: Option<usize>,
    /// Subdivide the two root triangles concurrently
    #[arg(long)]
    parallel: bool,
    /// Output format; inferred from the extension of --out when omitted
    #[arg(long, value_enum)]
    format: Option<Format>,
    /// JSON file with MosaicCfg fields; flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,
    /// SVG title; a generated one is used when omitted
    #[arg(long)]
    title: Option<String>,
    /// Seed for the generated title
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Render(args) => render(args),
        Action::Config { config } => print_config(config.as_deref()),
        Action::Report => report(),
    }
}

fn render(args: RenderArgs) -> Result<()> {
    let cfg = config::resolve(
        args.config.as_deref(),
        Overrides {
            threshold: args.threshold,
            max_width_to_height: args.max_ratio,
            max_depth: args.max_depth,
            parallel: args.parallel,
        },
    )?;
    let format = match args.format {
        Some(f) => f,
        None => Format::from_path(&args.out)?,
    };
    if !(args.scale.is_finite() && args.scale > 0.0) {
        anyhow::bail!("--scale must be positive, got {}", args.scale);
    }
    tracing::info!(input = %args.input.display(), out = %args.out.display(), ?format, "render");

    let grid = load::load_grid(&args.input, args.width)?;
    let mosaic = triangulate(grid, &cfg)?;

    let title = match args.title {
        Some(t) => t,
        None => {
            let mut rng = match args.seed {
                Some(s) => StdRng::seed_from_u64(s),
                None => StdRng::from_entropy(),
            };
            title::random_title(&mut rng)
        }
    };
    let started = Instant::now();
    render::write_output(&mosaic, &args.out, format, args.scale, &title, cfg.background)?;
    tracing::info!(
        tiles = mosaic.tiles.len(),
        elapsed_ms = started.elapsed().as_secs_f64() * 1e3,
        title,
        "output written"
    );

    let payload = provenance::Payload::new(serde_json::json!({
        "input": args.input.to_string_lossy(),
        "working_size": [mosaic.width, mosaic.height],
        "scale": args.scale,
        "format": format!("{format:?}").to_lowercase(),
        "cfg": cfg,
    }))
    .with_stats(serde_json::to_value(mosaic.stats)?);
    let prov = provenance::write_sidecar(&args.out, payload)?;
    tracing::debug!(path = %prov.display(), "provenance written");
    Ok(())
}

fn print_config(path: Option<&Path>) -> Result<()> {
    let cfg = match path {
        Some(p) => config::read_cfg(p)?,
        None => MosaicCfg::default(),
    };
    println!("{}", serde_json::to_string_pretty(&cfg)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": trimosaic::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
