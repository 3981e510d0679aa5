use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use math::point::Point;
use num_bigint::BigInt;
use serde_json::json;
use shamir_core::{reconstruct_secret, ShareSet};
use slog::{debug, info};

mod logger;

use logger::LogLevel;

#[derive(Parser)]
#[command(name = "shamir-recover")]
#[command(about = "Recover the secret constant term from Shamir share sets", long_about = None)]
struct Cli {
    /// Share-set JSON documents (`keys` plus one entry per share)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Interpolate over every share instead of the first `k`
    #[arg(long)]
    all_points: bool,

    /// Print one JSON object per file instead of text
    #[arg(long)]
    json: bool,

    /// Minimum severity of log records written to stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,
}

/// Points used and the secret recovered from one share set.
struct Recovery {
    threshold: usize,
    points: Vec<Point>,
    secret: BigInt,
}

fn recover(path: &Path, all_points: bool) -> Result<Recovery> {
    let set = ShareSet::load(path)?;
    let points = if all_points {
        set.points()?
    } else {
        set.threshold_points()?
    };
    let secret = reconstruct_secret(&points)?;
    Ok(Recovery {
        threshold: set.threshold(),
        points,
        secret,
    })
}

fn render_text(path: &Path, recovery: &Recovery) -> String {
    let mut out = format!(
        "{} (k={}, using {} points)\nDecoded points:\n",
        path.display(),
        recovery.threshold,
        recovery.points.len()
    );
    for point in &recovery.points {
        out.push_str(&format!("{point}\n"));
    }
    out.push_str(&format!("Secret: {}", recovery.secret));
    out
}

fn render_json(path: &Path, recovery: &Recovery) -> serde_json::Value {
    // Decimal strings keep integers wider than 64 bits intact.
    let points: Vec<[String; 2]> = recovery
        .points
        .iter()
        .map(|point| [point.x.to_string(), point.y.to_string()])
        .collect();
    json!({
        "file": path.display().to_string(),
        "k": recovery.threshold,
        "points": points,
        "secret": recovery.secret.to_string(),
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = logger::init(cli.log_level)?;
    let log = logger::get_logger("main");

    for (index, path) in cli.files.iter().enumerate() {
        debug!(log, "recovering share set"; "file" => %path.display());
        let recovery = recover(path, cli.all_points).with_context(|| {
            format!("failed to recover secret from {}", path.display())
        })?;
        info!(log, "recovered secret";
            "file" => %path.display(),
            "points" => recovery.points.len(),
        );

        if cli.json {
            println!("{}", render_json(path, &recovery));
        } else {
            if index > 0 {
                println!();
            }
            println!("{}", render_text(path, &recovery));
        }
    }

    Ok(())
}
