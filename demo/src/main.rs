//! gridnav-demo: replay a click on the goal tile of the sample map.
//!
//! Usage: `gridnav-demo [config.json]`. Set `RUST_LOG=debug` for per-waypoint
//! output.

use gridnav_demo::{DemoConfig, Scene};
use log::{info, warn};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = match std::env::args().nth(1) {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };

    let mut scene = Scene::from_config(&cfg)?;
    let grid = scene.grid();
    info!(
        "map {}x{}, {} navigable cells",
        grid.width(),
        grid.height(),
        grid.navigable_count()
    );

    let Some(goal) = scene.goal() else {
        warn!("map has no goal marker, nothing to do");
        return Ok(());
    };
    let Some(target) = scene.grid().world_pos(goal) else {
        return Ok(());
    };

    match scene.click(target)? {
        Some(path) => {
            let cells: Vec<String> = path.iter().map(|p| p.to_string()).collect();
            info!("path: {}", cells.join(" -> "));
            let steps = scene.run_until_idle(cfg.dt, cfg.max_steps);
            info!(
                "mover stopped at {} after {:.2}s",
                scene.mover().position(),
                steps as f32 * cfg.dt
            );
        }
        None => info!("goal {goal} is unreachable"),
    }
    Ok(())
}
