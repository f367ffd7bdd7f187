use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use folio_config::{ConfigLoad, ConfigLoader};
use folio_core::{CarouselMotion, PortfolioFilters};
use folio_model::{PortfolioItem, fallback_items};
use folio_player::{
    CarouselHandle, GestureScript, ReplaySummary, Scene, SceneFrame,
    SceneRecorder, replay, runtime::frame_now,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "folio-player",
    about = "Drive the Folio carousel engine without a browser"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct TrackArgs {
    /// Carousel config file (TOML or JSON)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Portfolio items as a JSON array; defaults to the built-in list
    #[arg(long)]
    items: Option<PathBuf>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    search: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a gesture script and print every rendered frame as JSON
    Simulate {
        #[arg(long)]
        script: PathBuf,
        #[command(flatten)]
        track: TrackArgs,
        /// Frame interval in milliseconds
        #[arg(long, default_value_t = 16)]
        frames_ms: u64,
    },
    /// Print the card layout for a fixed scroll offset
    Snapshot {
        #[arg(long, allow_hyphen_values = true)]
        offset: f32,
        #[command(flatten)]
        track: TrackArgs,
    },
    /// Load and validate the carousel config, printing any warnings
    CheckConfig {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct SimulationReport {
    summary: ReplaySummary,
    frames: Vec<SceneFrame>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries JSON; logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,folio_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Simulate {
            script,
            track,
            frames_ms,
        } => simulate(script, track, frames_ms).await,
        Command::Snapshot { offset, track } => snapshot(offset, track),
        Command::CheckConfig { config } => check_config(config),
    }
}

fn load_items(track: &TrackArgs) -> Result<Vec<PortfolioItem>> {
    let items = match &track.items {
        Some(path) => {
            let raw = std::fs::read_to_string(path).with_context(|| {
                format!("failed to read portfolio items from {}", path.display())
            })?;
            serde_json::from_str::<Vec<PortfolioItem>>(&raw).with_context(
                || format!("invalid portfolio items {}", path.display()),
            )?
        }
        None => fallback_items(),
    };

    let mut filters = PortfolioFilters::from_query(track.category.as_deref());
    if let Some(search) = &track.search {
        filters.set_search_query(search.as_str());
    }
    let visible: Vec<PortfolioItem> =
        filters.apply(&items).into_iter().cloned().collect();
    if visible.is_empty() {
        bail!("no portfolio items match the current filters");
    }
    Ok(visible)
}

fn load_track(track: &TrackArgs) -> Result<(Vec<PortfolioItem>, ConfigLoad)> {
    let items = load_items(track)?;
    let mut loader = ConfigLoader::new().with_item_count(items.len());
    if let Some(path) = &track.config {
        loader = loader.with_path(path);
    }
    let load = loader.load().context("failed to load carousel config")?;
    Ok((items, load))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(value).context("failed to render json")?;
    println!("{rendered}");
    Ok(())
}

async fn simulate(
    script_path: PathBuf,
    track: TrackArgs,
    frames_ms: u64,
) -> Result<()> {
    let script = GestureScript::load_from_file(&script_path)?;
    let (items, load) = load_track(&track)?;
    info!(
        events = script.events.len(),
        duration_ms = script.duration().as_millis() as u64,
        source = %load.source,
        "simulating"
    );

    let recorder = Arc::new(SceneRecorder::new(Scene::new(items), frame_now()));
    let handle = CarouselHandle::with_observer(
        load.config,
        Duration::from_millis(frames_ms),
        recorder.clone(),
    )?;

    let summary = replay(&script, &handle).await;
    print_json(&SimulationReport {
        summary,
        frames: recorder.take_frames(),
    })
}

fn snapshot(offset: f32, track: TrackArgs) -> Result<()> {
    let (items, load) = load_track(&track)?;
    let mut motion = CarouselMotion::new(load.config)?;
    motion.jump_to(offset);
    let frame = Scene::new(items).capture(&motion, Duration::ZERO);
    print_json(&frame)
}

fn check_config(path: Option<PathBuf>) -> Result<()> {
    let loader = match path {
        Some(path) => ConfigLoader::new().with_path(path),
        None => ConfigLoader::new(),
    };
    let load = loader.load()?;

    println!("# source: {}", load.source);
    print!("{}", load.settings.to_toml()?);
    if load.warnings.is_empty() {
        println!("# no warnings");
    }
    for warning in load.warnings {
        match warning.hint {
            Some(hint) => println!("# warning: {} ({hint})", warning.message),
            None => println!("# warning: {}", warning.message),
        }
    }
    Ok(())
}
