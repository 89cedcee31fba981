//! Occupancy Grid Map Launch CLI
//!
//! Usage:
//!   occupancy_grid_map_launch
//!   occupancy_grid_map_launch -a container:=perception_container
//!   occupancy_grid_map_launch -a use_multithread:=true -f json

use occupancy_grid_map_launch::{LaunchArgs, LaunchPlan, OutputFormat};

fn main() {
    let args: LaunchArgs = argh::from_env();

    // Initialize logging
    let log_level = match args.log_level.to_lowercase().as_str() {
        "error" => "error",
        "warn" => "warn",
        "info" => "info",
        "debug" => "debug",
        "trace" => "trace",
        _ => "info",
    };
    let env = env_logger::Env::default().default_filter_or(log_level);
    env_logger::init_from_env(env);

    let overrides = args.arg_overrides();
    log::debug!("Resolving launch plan with {} override(s)", overrides.len());

    let plan = match LaunchPlan::resolve(overrides) {
        Ok(plan) => plan,
        Err(e) => {
            log::error!("Launch resolution failed: {}", e);
            std::process::exit(1);
        }
    };

    match args.format {
        OutputFormat::Plan => println!("{}", plan),
        OutputFormat::Json => match serde_json::to_string_pretty(&plan) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                log::error!("Failed to serialize plan: {}", e);
                std::process::exit(1);
            }
        },
        OutputFormat::Yaml => match serde_yaml::to_string(&plan) {
            Ok(yaml) => print!("{}", yaml),
            Err(e) => {
                log::error!("Failed to serialize plan: {}", e);
                std::process::exit(1);
            }
        },
    }
}
