use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod output;
mod scene;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex collision queries on JSON scenes")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run every applicable query on a two-body scene
    Check {
        #[arg(long)]
        scene: String,
        /// Write the JSON report here instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
    /// Print version and build information
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Check { scene, out } => check(scene, out),
        Action::Report => report(),
    }
}

fn check(scene: String, out: Option<String>) -> Result<()> {
    tracing::info!(scene, out = ?out, "check");
    let text = std::fs::read_to_string(&scene).with_context(|| format!("reading scene {scene}"))?;
    let parsed: scene::Scene = serde_json::from_str(&text).with_context(|| format!("parsing scene {scene}"))?;
    let report = scene::evaluate(&parsed)?;
    match out {
        Some(path) => {
            output::write_json(Path::new(&path), &report)?;
            tracing::info!(path, "report written");
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn report() -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&output::build_info())?);
    Ok(())
}
