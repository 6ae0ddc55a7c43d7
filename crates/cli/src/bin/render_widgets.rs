use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use snapshot_store::load_snapshot_or_empty;
use std::{fs, path::PathBuf};
use widget_engine::render_bundle;

#[derive(Parser, Debug)]
#[command(name = "render-widgets", about = "Render all home-screen widget view models from a snapshot file.")]
struct Args {
    /// Path to the snapshot JSON written by the host application
    #[arg(short, long, default_value = "snapshot.json")]
    snapshot: PathBuf,

    /// Optional output path; defaults to stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON bundle
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "render_widgets=info,snapshot_store=warn".into()),
        )
        .init();

    let args = Args::parse();

    let snapshot = load_snapshot_or_empty(&args.snapshot);
    let bundle = render_bundle(&snapshot, Local::now());

    let json = if args.pretty {
        serde_json::to_string_pretty(&bundle)?
    } else {
        serde_json::to_string(&bundle)?
    };

    match args.out {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote widget bundle to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
