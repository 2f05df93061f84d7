//! Interceptor camera analysis CLI.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use intercept_cli::{init_tracing, run_eval, Config, EvalRequest, OutputFormat, Session};
use intercept_core::{field_of_view, CameraPresetRegistry, FlightScenario};
use std::io;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format (defaults to INTERCEPT_OUTPUT, then text)
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Detection threshold in pixels (defaults to INTERCEPT_DETECTION_THRESHOLD_PX, then 15)
    #[arg(long, global = true)]
    threshold_px: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List camera presets with their fields of view
    Presets,
    /// Evaluate one flight scenario
    Eval(EvalArgs),
    /// Serve line-delimited JSON requests from stdin
    Session,
}

#[derive(Args, Debug)]
struct EvalArgs {
    /// Camera preset name (defaults to INTERCEPT_DEFAULT_CAMERA)
    #[arg(long)]
    camera: Option<String>,

    /// Override sensor width in mm
    #[arg(long)]
    width_mm: Option<f64>,

    /// Override sensor height in mm
    #[arg(long)]
    height_mm: Option<f64>,

    /// Override focal length in mm
    #[arg(long)]
    focal_mm: Option<f64>,

    /// Override horizontal resolution in pixels
    #[arg(long)]
    resolution_px: Option<u32>,

    /// Nose-down pitch in degrees
    #[arg(long, default_value_t = 30.0, allow_negative_numbers = true)]
    pitch_deg: f64,

    /// Horizontal distance to the target in meters
    #[arg(long, default_value_t = 50.0)]
    distance_m: f64,

    /// Target height relative to the drone in meters (positive = above)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    height_m: f64,

    /// Target size in meters
    #[arg(long, default_value_t = 0.3)]
    target_m: f64,

    /// Store the edited camera under this preset name before evaluating
    #[arg(long)]
    save_as: Option<String>,
}

impl From<EvalArgs> for EvalRequest {
    fn from(args: EvalArgs) -> Self {
        Self {
            camera: args.camera,
            width_mm: args.width_mm,
            height_mm: args.height_mm,
            focal_mm: args.focal_mm,
            resolution_px: args.resolution_px,
            scenario: FlightScenario::new(args.pitch_deg, args.distance_m, args.target_m)
                .with_relative_height(args.height_m),
            save_as: args.save_as,
        }
    }
}

fn main() -> Result<()> {
    init_tracing()?;

    let cli = Cli::parse();
    let config = Config::from_env();
    let format = cli.format.unwrap_or(config.output);
    let rules = config.detection_rules(cli.threshold_px)?;
    let mut registry = CameraPresetRegistry::new();

    match cli.command {
        Command::Presets => list_presets(&registry, format),
        Command::Eval(args) => {
            let report = run_eval(&mut registry, &config.default_camera, &rules, args.into())?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Text => print!("{report}"),
            }
            Ok(())
        }
        Command::Session => {
            tracing::info!("Session started; reading requests from stdin");
            let mut session = Session::new(registry, rules);
            session.run(io::stdin().lock(), io::stdout().lock())
        }
    }
}

fn list_presets(registry: &CameraPresetRegistry, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let presets: Vec<_> = registry
                .iter()
                .map(|(name, profile)| serde_json::json!({ "name": name, "profile": profile }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&presets)?);
        }
        OutputFormat::Text => {
            for (name, profile) in registry.iter() {
                let fov = field_of_view(profile)?;
                println!(
                    "{name:<28} {:>5.2} x {:>4.2} mm  f {:>4.2} mm  {:>5} px  HFOV {:>5.1}°  VFOV {:>5.1}°",
                    profile.sensor_width_mm,
                    profile.sensor_height_mm,
                    profile.focal_length_mm,
                    profile.resolution_px,
                    fov.horizontal_deg,
                    fov.vertical_deg,
                );
            }
        }
    }
    Ok(())
}
