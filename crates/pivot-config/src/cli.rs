//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Pivot command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "pivot", about = "First-person camera rig simulator")]
pub struct CliArgs {
    /// Horizontal look sensitivity (degrees per input unit).
    #[arg(long)]
    pub sensitivity_x: Option<f32>,

    /// Vertical look sensitivity (degrees per input unit).
    #[arg(long)]
    pub sensitivity_y: Option<f32>,

    /// Invert vertical look.
    #[arg(long)]
    pub invert_y: Option<bool>,

    /// Enable head bob.
    #[arg(long)]
    pub bob: Option<bool>,

    /// Parent the pitch pivot under the yaw pivot.
    #[arg(long)]
    pub nested_rig: Option<bool>,

    /// Number of ticks to simulate.
    #[arg(long, default_value_t = 120)]
    pub ticks: u32,

    /// RON file of recorded input frames to replay instead of synthetic motion.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config. Sensitivity overrides are
    /// floored at zero.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(x) = args.sensitivity_x {
            self.camera.sensitivity.x = x.max(0.0);
        }
        if let Some(y) = args.sensitivity_y {
            self.camera.sensitivity.y = y.max(0.0);
        }
        if let Some(invert) = args.invert_y {
            self.camera.invert_y = invert;
        }
        if let Some(bob) = args.bob {
            self.camera.enable_bob = bob;
        }
        if let Some(nested) = args.nested_rig {
            self.simulation.nested_rig = nested;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            sensitivity_x: Some(3.0),
            invert_y: Some(true),
            nested_rig: Some(false),
            log_level: Some("debug".to_string()),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.camera.sensitivity.x, 3.0);
        assert!(config.camera.invert_y);
        assert!(!config.simulation.nested_rig);
        assert_eq!(config.debug.log_level, "debug");
        // Non-overridden fields retain defaults
        assert_eq!(config.camera.sensitivity.y, 1.5);
        assert!(config.camera.enable_bob);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_negative_sensitivity_override_is_floored() {
        let mut config = Config::default();
        let args = CliArgs {
            sensitivity_y: Some(-4.0),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.camera.sensitivity.y, 0.0);
    }

    #[test]
    fn test_parse_from_args() {
        let args = CliArgs::parse_from([
            "pivot",
            "--sensitivity-x",
            "2.5",
            "--bob",
            "false",
            "--ticks",
            "30",
        ]);
        assert_eq!(args.sensitivity_x, Some(2.5));
        assert_eq!(args.bob, Some(false));
        assert_eq!(args.ticks, 30);
        assert!(args.config.is_none());
    }

    #[test]
    fn test_default_tick_count() {
        let args = CliArgs::parse_from(["pivot"]);
        assert_eq!(args.ticks, 120);
    }
}
