//! `robopose-cli` – RoboPose command line entry point.
//!
//! ```text
//! robopose                 run the scenario from settings, or the demo
//! robopose <scenario.toml> run a specific scenario file
//! robopose init            write default settings to ~/.robopose/config.toml
//! robopose help            print usage
//! ```
//!
//! Each robot prints one line on stdout once the script has run.  Logs and
//! diagnostics go to stderr.

mod config;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use colored::Colorize;
use robopose_runtime::{Scenario, telemetry};
use tracing::{info, warn};

fn main() -> ExitCode {
    telemetry::init_tracing();

    let arg = std::env::args().nth(1);
    match arg.as_deref() {
        Some("help" | "--help" | "-h") => {
            print_usage();
            ExitCode::SUCCESS
        }
        Some("init") => init_config(),
        other => run(other.map(PathBuf::from)),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Commands
// ─────────────────────────────────────────────────────────────────────────────

fn run(scenario_arg: Option<PathBuf>) -> ExitCode {
    let mut cfg = match config::load() {
        Ok(cfg) => cfg.unwrap_or_default(),
        Err(e) => {
            eprintln!("{}: {}", "Config error".red(), e);
            eprintln!("  Using default configuration.");
            config::Config::default()
        }
    };
    config::apply_env_overrides(&mut cfg);
    if scenario_arg.is_some() {
        cfg.scenario_path = scenario_arg;
    }

    let scenario = match &cfg.scenario_path {
        Some(path) => {
            info!(path = %path.display(), "Loading scenario");
            match Scenario::load(path) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("{}: {}", "Scenario error".red().bold(), e);
                    return ExitCode::FAILURE;
                }
            }
        }
        None => Scenario::demo(),
    };

    let robots = match scenario.run() {
        Ok(robots) => robots,
        Err(e) => {
            eprintln!("{}: {}", "Scenario error".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    for robot in &robots {
        match report::render(robot, cfg.output_format) {
            Ok(line) => println!("{line}"),
            Err(e) => {
                warn!(robot = robot.name(), error = %e, "Report skipped");
                eprintln!("{}: {}", "Report error".red(), e);
            }
        }
    }
    ExitCode::SUCCESS
}

fn init_config() -> ExitCode {
    let path = config::config_path();
    if path.exists() {
        eprintln!(
            "  {} already exists; leaving it untouched.",
            path.display().to_string().bold()
        );
        return ExitCode::SUCCESS;
    }
    match config::save(&config::Config::default()) {
        Ok(()) => {
            eprintln!(
                "  {} Config saved to {}",
                "✓".green().bold(),
                path.display().to_string().bold()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}: {}", "Error saving config".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!(
        "{} {}",
        "robopose".bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
    println!();
    println!("  {}                  run the configured scenario (or the demo)", "robopose".cyan());
    println!("  {} <scenario.toml>  run a scenario file", "robopose".cyan());
    println!("  {} init             write default settings", "robopose".cyan());
    println!();
    println!("  Settings: {}", config::config_path().display());
    println!("  Env: ROBOPOSE_OUTPUT_FORMAT, ROBOPOSE_SCENARIO, ROBOPOSE_LOG_FORMAT, RUST_LOG");
}
