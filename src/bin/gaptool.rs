use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use slide_gap::config::load_config;
use slide_gap::overlay::{DEFAULT_MARKER, render_overlay};
use slide_gap::tools::{
    binary_stats, dataset_iter, load_rgba, mean_luminance, save_overlay,
};
use slide_gap::{PixelBuffer, SolverConfig, inspect, solve_batch, solve_with_report};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "gaptool", version, about = "Slider gap locator CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct SolverArgs {
    /// JSON solver config; missing fields take defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Luminance threshold, overrides config and GAP_THRESHOLD
    #[arg(long)]
    threshold: Option<u8>,
}

impl SolverArgs {
    fn resolve(&self) -> Result<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => SolverConfig::default(),
        }
        .with_env_overrides();
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Print the gap offset of a single image
    Solve {
        #[arg(long)]
        image: PathBuf,
        #[command(flatten)]
        solver: SolverArgs,
    },
    /// Print binarization stats, candidates and pairs; optionally write an overlay
    Debug {
        #[arg(long)]
        image: PathBuf,
        /// Where to write the overlay image (format from extension)
        #[arg(long)]
        overlay: Option<PathBuf>,
        #[command(flatten)]
        solver: SolverArgs,
    },
    /// Solve every image under a directory in parallel
    Batch {
        #[arg(long)]
        root: PathBuf,
        #[arg(long)]
        limit: Option<usize>,
        #[command(flatten)]
        solver: SolverArgs,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve { image, solver } => solve_cmd(&image, &solver.resolve()?),
        Command::Debug {
            image,
            overlay,
            solver,
        } => debug_cmd(&image, overlay.as_deref(), &solver.resolve()?),
        Command::Batch {
            root,
            limit,
            solver,
        } => batch_cmd(&root, limit, &solver.resolve()?),
    }
}

fn load(image: &Path) -> Result<PixelBuffer> {
    load_rgba(image).with_context(|| format!("failed to load image {}", image.display()))
}

fn solve_cmd(image: &Path, config: &SolverConfig) -> Result<()> {
    let mut buffer = load(image)?;
    let report = solve_with_report(&mut buffer, config)
        .with_context(|| format!("no gap found in {}", image.display()))?;
    println!("{}", report.offset.left_offset);
    Ok(())
}

fn debug_cmd(image: &Path, overlay: Option<&Path>, config: &SolverConfig) -> Result<()> {
    let original = load(image)?;
    println!(
        "Image: {} ({}x{}) mean_luminance={:.1}",
        image.display(),
        original.width(),
        original.height(),
        mean_luminance(&original)
    );

    let mut binary = original.clone();
    let inspection = inspect(&mut binary, config);
    let stats = binary_stats(&binary);
    println!(
        "Binary: threshold={} black_pixels={} total={} black_ratio={:.2}%",
        config.threshold,
        stats.black_pixels,
        stats.total_pixels,
        stats.black_ratio * 100.0
    );

    let tel = inspection.telemetry;
    println!(
        "Runs: {} over {} columns; candidates: {} full, {} notch",
        tel.runs, tel.columns, tel.full_lines, tel.notch_lines
    );
    for c in inspection.candidates.full.iter().chain(&inspection.candidates.notch) {
        println!("  {:?} at column {} runs={:?}", c.kind, c.column, c.runs);
    }

    println!("Found {} qualifying pairs", inspection.pairs.len());
    for (i, pair) in inspection.pairs.iter().enumerate() {
        println!(
            "  Pair {}: {:?} columns {} -> {} (distance {})",
            i,
            pair.group,
            pair.first.column,
            pair.second.column,
            pair.distance()
        );
    }

    match inspection.pairs.first() {
        Some(pair) => println!("Offset: {}", pair.first.column),
        None => println!("Offset: none"),
    }

    // Overlay problems are reported but never change the printed offset
    if let Some(path) = overlay {
        match render_overlay(&binary, &inspection.pairs, DEFAULT_MARKER)
            .and_then(|canvas| save_overlay(&canvas, path))
        {
            Ok(()) => println!("Overlay written to {}", path.display()),
            Err(err) => eprintln!("Overlay failed: {}", err),
        }
    }

    Ok(())
}

fn batch_cmd(root: &Path, limit: Option<usize>, config: &SolverConfig) -> Result<()> {
    let mut paths = Vec::new();
    let mut buffers = Vec::new();
    for path in dataset_iter(root, limit) {
        match load_rgba(&path) {
            Ok(buffer) => {
                paths.push(path);
                buffers.push(buffer);
            }
            Err(err) => eprintln!("Skipping {}: {}", path.display(), err),
        }
    }

    let start = Instant::now();
    let results = solve_batch(&mut buffers, config);
    let elapsed = start.elapsed();

    let mut solved = 0usize;
    for (path, result) in paths.iter().zip(&results) {
        match result {
            Ok(offset) => {
                solved += 1;
                println!("{}\t{}", path.display(), offset.left_offset);
            }
            Err(err) => println!("{}\tFAIL ({})", path.display(), err),
        }
    }

    let total = results.len();
    let rate = if total == 0 {
        0.0
    } else {
        solved as f64 / total as f64 * 100.0
    };
    println!(
        "\nSolved {}/{} ({:.1}%) in {:.1} ms",
        solved,
        total,
        rate,
        elapsed.as_secs_f64() * 1000.0
    );
    Ok(())
}
