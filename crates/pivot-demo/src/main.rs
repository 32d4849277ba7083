//! Headless demo that drives a camera rig with synthetic or recorded look input.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p pivot-demo` for the default nested rig.
//! Run with `cargo run -p pivot-demo -- --nested-rig false --ticks 300` for the composed rig.
//! Run with `cargo run -p pivot-demo -- --script look.ron` to replay recorded frames.

use std::cell::RefCell;
use std::f32::consts::TAU;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use bevy_ecs::world::World;
use clap::Parser;
use glam::Vec3;
use pivot_camera::{CameraRigController, RigNodes, RigTopology, spawn_rig};
use pivot_config::{CliArgs, Config};
use pivot_ecs::{TimeRes, create_world, world_position};
use pivot_input::{BufferedInput, InputRegistry, RecordingCursor, ScriptedInput};
use tracing::{error, info};

/// Peak pointer motion per tick of the synthetic sweep.
const SWEEP_RADIUS: f32 = 4.0;
/// Ticks per full sweep.
const SWEEP_PERIOD: u32 = 240;
/// Walking speed of the yaw pivot in world units per second.
const WALK_SPEED: f32 = 1.4;

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(|| {
        Config::default_dir().unwrap_or_else(|e| {
            eprintln!("{e}, using ./.pivot");
            PathBuf::from(".pivot")
        })
    });

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    if let Err(e) = pivot_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config))
    {
        eprintln!("Logging unavailable: {e}");
    }

    let mut world = create_world();
    let topology = if config.simulation.nested_rig {
        RigTopology::Nested
    } else {
        RigTopology::Composed
    };
    let nodes = spawn_rig(&mut world, Vec3::ZERO, config.simulation.eye_height, topology);

    let live = Rc::new(RefCell::new(config.input.build_provider()));
    let mut registry = InputRegistry::new();
    if let Some(path) = &args.script {
        match load_script(path) {
            Ok(script) => {
                info!("Replaying {} input frames from {}", script.remaining(), path.display());
                registry.register("script", Box::new(script));
            }
            Err(e) => error!("Could not load input script {}: {e}", path.display()),
        }
    }
    registry.register("live", Box::new(Rc::clone(&live)));

    let mut controller = CameraRigController::with_registry(
        nodes.into(),
        config.camera.clone(),
        None,
        &mut registry,
    );
    let mut cursor = RecordingCursor::default();
    if controller.initialize(&mut world, &mut cursor).is_err() {
        std::process::exit(1);
    }

    let dt = config.simulation.tick_seconds();
    let report_every = config.simulation.tick_rate_hz.max(1);
    for tick in 0..args.ticks {
        feed_sweep(&mut live.borrow_mut(), tick);
        walk_forward(&mut world, &nodes, dt);
        world.resource_mut::<TimeRes>().advance(dt);

        controller.update(&mut world);
        live.borrow_mut().clear_transients();

        if tick % report_every == 0 {
            info!(
                tick,
                yaw = controller.yaw(),
                pitch = controller.pitch(),
                position = ?controller.camera_position(),
                forward = ?controller.camera_forward(),
                "Camera pose"
            );
        }
    }

    controller.set_cursor_lock(false, &mut cursor);
    info!(
        ticks = args.ticks,
        bob_phase = controller.bob_phase(),
        yaw = controller.yaw(),
        pitch = controller.pitch(),
        position = ?controller.camera_position(),
        "Simulation finished"
    );
}

fn load_script(path: &Path) -> Result<ScriptedInput, Box<dyn std::error::Error>> {
    let source = std::fs::read_to_string(path)?;
    Ok(ScriptedInput::from_ron(&source)?)
}

/// Push one tick of a slow elliptical look sweep.
fn feed_sweep(input: &mut BufferedInput, tick: u32) {
    let angle = (tick % SWEEP_PERIOD) as f32 / SWEEP_PERIOD as f32 * TAU;
    input.on_raw_motion(angle.cos() * SWEEP_RADIUS, angle.sin() * SWEEP_RADIUS * 0.5);
}

/// Move the yaw pivot along its facing so position smoothing has work to do.
fn walk_forward(world: &mut World, nodes: &RigNodes, dt: f32) {
    let Some(facing) = pivot_ecs::forward(world, nodes.yaw_pivot) else {
        return;
    };
    let Some(position) = world_position(world, nodes.yaw_pivot) else {
        return;
    };
    pivot_ecs::set_world_position(world, nodes.yaw_pivot, position + facing * WALK_SPEED * dt);
}
