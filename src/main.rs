//! Gridcover - Entry Point
//!
//! Scene inspector: load a scene snapshot from JSON, evaluate cover between
//! tokens under a given configuration, and print a report. Useful for
//! checking scene files and tuning thresholds without a host application.

use std::path::PathBuf;

use clap::Parser;

use gridcover::core::error::{CoverError, Result};
use gridcover::cover::{Anchor, CoverDetector};
use gridcover::{DetectionConfig, IntersectionMode, Scene, Token};

#[derive(Parser)]
#[command(name = "gridcover", about = "Inspect cover levels in a scene file")]
struct Args {
    /// Scene snapshot (JSON)
    scene: PathBuf,

    /// Detection config (TOML); defaults apply when absent
    #[arg(long)]
    config: Option<PathBuf>,

    /// Evaluate a single observer token by name
    #[arg(long, requires = "subject")]
    observer: Option<String>,

    /// Evaluate a single subject token by name
    #[arg(long, requires = "observer")]
    subject: Option<String>,

    /// Override the configured intersection mode
    #[arg(long, value_enum)]
    mode: Option<Mode>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Mode {
    Any,
    Center,
    Coverage,
    Tactical,
}

impl From<Mode> for IntersectionMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Any => IntersectionMode::Any,
            Mode::Center => IntersectionMode::Center,
            Mode::Coverage => IntersectionMode::Coverage,
            Mode::Tactical => IntersectionMode::Tactical,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gridcover=info".into()),
        )
        .init();

    let args = Args::parse();

    let scene = Scene::load(&args.scene)?;
    let mut config = match &args.config {
        Some(path) => DetectionConfig::load(path)?,
        None => DetectionConfig::default(),
    };
    if let Some(mode) = args.mode {
        config.mode = mode.into();
    }

    tracing::info!(
        tokens = scene.tokens.len(),
        walls = scene.walls.len(),
        mode = ?config.mode,
        "scene loaded"
    );

    let detector = CoverDetector::new(&config);

    match (&args.observer, &args.subject) {
        (Some(observer_name), Some(subject_name)) => {
            let observer = scene
                .token_by_name(observer_name)
                .ok_or_else(|| not_found(observer_name))?;
            let subject = scene
                .token_by_name(subject_name)
                .ok_or_else(|| not_found(subject_name))?;
            report_pair(&detector, &scene, observer, subject);
        }
        _ => {
            for observer in &scene.tokens {
                for subject in &scene.tokens {
                    if observer.id == subject.id {
                        continue;
                    }
                    report_pair(&detector, &scene, observer, subject);
                }
            }
        }
    }

    Ok(())
}

fn report_pair(detector: &CoverDetector<'_>, scene: &Scene, observer: &Token, subject: &Token) {
    let level = detector.detect(scene, Anchor::Token(observer), subject, None);
    match detector.clearest_ray(scene, observer, subject) {
        Some((from, to)) => println!(
            "{} -> {}: {} (clear ray ({:.0}, {:.0}) -> ({:.0}, {:.0}))",
            observer.name, subject.name, level, from.x, from.y, to.x, to.y
        ),
        None => println!(
            "{} -> {}: {} (no clear ray)",
            observer.name, subject.name, level
        ),
    }
}

fn not_found(name: &str) -> CoverError {
    CoverError::TokenNotFound(name.to_string())
}
