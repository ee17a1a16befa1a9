// Accommodation Manager - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/accommodation-manager
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/accommodation-manager --gym-capacity 80 --verbose
// ```

use accommodation_manager::logging::LoggingConfig;
use anyhow::Context;
use accommodation_manager::manager::{AreaManager, Menu};
use accommodation_manager::types::{AppConfig, CliArgs};
use clap::Parser;
use std::io;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = AppConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging so the menu stays readable
        LoggingConfig::new().init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Accommodation Manager");

    // Load configuration from CLI arguments and optional config file
    let config = match AppConfig::from_cli_args(args.clone())
        .context("failed to load configuration")
    {
        Ok(config) => config,
        Err(e) => {
            error!("{:#}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - the menu will not be started.");
        print_configuration_summary(&config);
        return;
    }

    // Build the areas and run the interactive menu over stdin/stdout
    let mut manager = AreaManager::new(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock());

    if let Err(e) = menu.run(&mut manager) {
        error!("Menu loop failed: {}", e);
        process::exit(1);
    }

    info!("Accommodation Manager exited cleanly");
}

/// Print configuration summary
fn print_configuration_summary(config: &AppConfig) {
    eprintln!("Configuration:");
    eprintln!("  Gym Capacity: {}", config.gym_capacity);
    eprintln!("  Gym Temperature: {}°C", config.gym_temperature);
    eprintln!(
        "  Gym Air Conditioning: {}",
        if config.gym_air_conditioning { "ON" } else { "OFF" }
    );
    eprintln!("  Gym Equipment: {}", config.gym_equipment.join(", "));
    eprintln!("  Pool Capacity: {}", config.pool_capacity);
    eprintln!("  Pool Type: {}", config.pool_type);
    eprintln!("  Water Temperature: {}°C", config.water_temperature);
    eprintln!("  Water Depth: {} meters", config.water_depth_m);
    eprintln!(
        "  Lifeguard: {}",
        if config.lifeguard_present { "Present" } else { "Not Present" }
    );
}
