//! headless — render the penguin scene offline at a fixed 60 Hz.
//!
//! ```text
//! headless [FRAMES] [OUT_DIR]
//! ```
//!
//! Writes `agent_snapshots.csv`, `frame_summaries.csv`, and the last frame
//! as `final_frame.png` into `OUT_DIR`.  `PENGUINS_CONFIG` points at an
//! optional JSON config; `RUST_LOG` controls log output.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use pg_core::SimConfig;
use pg_output::{CsvWriter, SnapshotObserver};
use pg_scene::{Assets, RasterSurface};
use pg_sim::{FrameDriver, SceneBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_FRAMES:    u64  = 600;  // 10 s at 60 Hz
const DEFAULT_OUT_DIR:   &str = "output";
const FRAME_STEP_MS:     f64  = 1000.0 / 60.0;
const SNAPSHOT_INTERVAL: u64  = 30;   // twice per simulated second

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let frames = match args.next() {
        Some(s) => s.parse().with_context(|| format!("invalid frame count {s:?}"))?,
        None => DEFAULT_FRAMES,
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUT_DIR.to_owned()));

    let config = SimConfig::from_env()?;
    let assets = Assets::load_or_placeholder(&config.assets_dir);
    let mut surface = RasterSurface::new(assets.penguin.clone(), config.bounds());
    let mut scene = SceneBuilder::new(config, assets).build()?;

    let writer = CsvWriter::new(&out_dir)?;
    let mut observer = SnapshotObserver::new(writer);
    let mut driver = FrameDriver::start(0.0).with_snapshot_interval(SNAPSHOT_INTERVAL);

    info!(frames, penguins = scene.population.len(), out = %out_dir.display(), "rendering");
    let t0 = Instant::now();
    driver.run_fixed(frames, FRAME_STEP_MS, &mut scene, &mut surface, &mut observer);
    driver.stop(&mut observer);
    let elapsed = t0.elapsed();

    if let Some(e) = observer.take_error() {
        return Err(e).context("writing output");
    }

    let png = out_dir.join("final_frame.png");
    surface.save_png(&png)?;

    println!(
        "Rendered {frames} frames of {} penguins in {:.2}s ({:.0} fps)",
        scene.population.len(),
        elapsed.as_secs_f64(),
        frames as f64 / elapsed.as_secs_f64().max(1e-9),
    );
    println!("Output: {}", out_dir.display());
    Ok(())
}
