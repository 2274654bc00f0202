// Feet trajectory sample
// author: Ryohei Sasaki (@rsasaki0109)
//
// Generates a right swing step followed by a left swing step and plots the
// foot heights and forward displacements.
//
// usage: feet_trajectory [config.yaml]

use std::path::{Path, PathBuf};

use log::{error, info};

use biped_walk::utils::{FootField, Visualizer};
use biped_walk::walk::{generate_steps, max_consecutive_delta, peak_lift};
use biped_walk::{FeetTrajectoryPoint, Foot, Params, Phase, WalkResult};

const DEFAULT_CONFIG: &str = "configs/walk.yaml";
const OUTPUT_DIR: &str = "img/walk";

fn run(config_path: &Path) -> WalkResult<()> {
    let params = Params::load_or_default(config_path)?;
    info!(
        "Params: lift={:.4} m, period={:.3} s, dt={:.3} s ({} samples per step)",
        params.foot_lift_amplitude, params.period, params.dt, params.num_samples()
    );

    let init = FeetTrajectoryPoint::default();
    let targets = [
        FeetTrajectoryPoint::new(0.02, -0.02, 0.01, -0.01, 0.6, -0.6, 0.0, 0.0),
        FeetTrajectoryPoint::new(-0.04, -0.04, 0.0, 0.0, -0.1, -0.1, 0.0, 0.0),
    ];

    let points = generate_steps(&params, Phase::RightSwing, &init, &targets)?;
    let baseline = generate_steps(
        &params.with_foot_lift_amplitude(0.0),
        Phase::RightSwing,
        &init,
        &targets,
    )?;
    info!("Generated {} samples over {} steps", points.len(), targets.len());

    let delta = max_consecutive_delta(&points);
    info!(
        "Max step between samples: forward {:.4}/{:.4} m, left {:.4}/{:.4} m",
        delta.forward_l, delta.forward_r, delta.left_l, delta.left_r
    );
    info!(
        "Max heading step between samples: {:.4}/{:.4} rad",
        delta.heading_l, delta.heading_r
    );
    info!(
        "Peak lift: left {:.4} m, right {:.4} m",
        peak_lift(&points, &baseline, Foot::Left),
        peak_lift(&points, &baseline, Foot::Right)
    );

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let output_path = format!("{}/feet_trajectory.png", OUTPUT_DIR);

    let mut vis = Visualizer::new();
    vis.set_title("Feet Trajectory")
        .set_y_label("height / forward [m]")
        .plot_foot(&points, params.dt, Foot::Left, FootField::Height)
        .plot_foot(&points, params.dt, Foot::Right, FootField::Height)
        .plot_foot(&points, params.dt, Foot::Left, FootField::Forward)
        .plot_foot(&points, params.dt, Foot::Right, FootField::Forward)
        .plot_seams(&points, params.dt, params.num_samples(), Foot::Left, FootField::Forward);
    vis.save_png(&output_path, 800, 600)?;
    info!("Plot saved to: {}", output_path);

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Feet trajectory start!!");

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));

    if let Err(e) = run(&config_path) {
        error!("{}", e);
        std::process::exit(1);
    }

    info!("Feet trajectory finish!!");
}
