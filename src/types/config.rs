//! Configuration structures for the accommodation manager
//!
//! This module contains the application configuration structure and validation
//! logic. Configuration can come from defaults, a JSON configuration file, or
//! command line arguments, with command line arguments taking precedence.

use super::PoolType;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Gym temperature limits in degrees Celsius
pub mod gym_temperature {
    /// Coldest temperature the gym thermostat accepts
    pub const MIN: i32 = 16;

    /// Warmest temperature the gym thermostat accepts
    pub const MAX: i32 = 30;
}

/// Pool water temperature limits in degrees Celsius
pub mod water_temperature {
    /// Coldest water temperature the pool heater accepts
    pub const MIN: f64 = 20.0;

    /// Warmest water temperature the pool heater accepts
    pub const MAX: f64 = 35.0;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "accommodation-manager",
    version = "1.0.0",
    about = "Accommodation Manager - Interactive area management for Speke Apartments",
    long_about = "Manages the gym and swimming pool accommodation areas of the Speke
Apartments complex through an interactive text menu. Occupancy, lighting, and
area-specific settings (air conditioning, temperature, lifeguard presence) are
adjusted one operation at a time.

EXAMPLES:
    # Run with default settings
    accommodation-manager

    # Use a configuration file
    accommodation-manager --config areas.json

    # Override specific settings
    accommodation-manager --gym-capacity 80 --pool-capacity 40

    # Generate a configuration template
    accommodation-manager --print-config > areas.json

    # Validate configuration without starting the menu
    accommodation-manager --config areas.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Maximum number of occupants the gym admits
    #[arg(long, help = "Maximum gym occupancy")]
    pub gym_capacity: Option<u32>,

    /// Maximum number of occupants the pool admits
    #[arg(long, help = "Maximum swimming pool occupancy")]
    pub pool_capacity: Option<u32>,

    /// Initial gym temperature in degrees Celsius
    #[arg(
        long,
        help = "Initial gym temperature in °C",
        long_help = "Initial gym thermostat setting. Must be between 16 and 30 °C. Default: 25"
    )]
    pub gym_temperature: Option<i32>,

    /// Initial pool water temperature in degrees Celsius
    #[arg(
        long,
        help = "Initial pool water temperature in °C",
        long_help = "Initial pool heater setting. Must be between 20.0 and 35.0 °C. Default: 28.0"
    )]
    pub water_temperature: Option<f64>,

    /// Pool classification
    #[arg(
        long,
        help = "Pool type (olympic, recreational, lap, therapy)",
        long_help = "Classification of the swimming pool shown in the area report. Default: olympic"
    )]
    pub pool_type: Option<PoolType>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without starting the menu
    #[arg(long, help = "Validate configuration without starting the menu")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Maximum number of occupants the gym admits
    pub gym_capacity: Option<u32>,

    /// Initial gym temperature in degrees Celsius
    pub gym_temperature: Option<i32>,

    /// Whether the gym air conditioning starts on
    pub gym_air_conditioning: Option<bool>,

    /// Equipment available in the gym
    pub gym_equipment: Option<Vec<String>>,

    /// Maximum number of occupants the pool admits
    pub pool_capacity: Option<u32>,

    /// Initial pool water temperature in degrees Celsius
    pub water_temperature: Option<f64>,

    /// Pool classification
    pub pool_type: Option<PoolType>,

    /// Pool depth in meters
    pub water_depth_m: Option<u32>,

    /// Whether a lifeguard is present at startup
    pub lifeguard_present: Option<bool>,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Maximum number of occupants the gym admits
    pub gym_capacity: u32,

    /// Initial gym temperature in degrees Celsius
    pub gym_temperature: i32,

    /// Whether the gym air conditioning starts on
    pub gym_air_conditioning: bool,

    /// Equipment available in the gym
    pub gym_equipment: Vec<String>,

    /// Maximum number of occupants the pool admits
    pub pool_capacity: u32,

    /// Initial pool water temperature in degrees Celsius
    pub water_temperature: f64,

    /// Pool classification
    pub pool_type: PoolType,

    /// Pool depth in meters
    pub water_depth_m: u32,

    /// Whether a lifeguard is present at startup
    pub lifeguard_present: bool,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for the application configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// A capacity is zero
    #[error("{area} capacity must be greater than 0")]
    InvalidCapacity {
        /// Which area the capacity belongs to
        area: String,
    },

    /// Gym temperature outside the thermostat range
    #[error(
        "Gym temperature must be between {min} and {max} °C, got {value}",
        min = gym_temperature::MIN,
        max = gym_temperature::MAX
    )]
    GymTemperatureOutOfRange {
        /// The invalid temperature value
        value: i32,
    },

    /// Pool water temperature outside the heater range
    #[error(
        "Water temperature must be between {min} and {max} °C, got {value}",
        min = water_temperature::MIN,
        max = water_temperature::MAX
    )]
    WaterTemperatureOutOfRange {
        /// The invalid temperature value
        value: f64,
    },

    /// Pool depth is zero
    #[error("Water depth must be greater than 0 meters")]
    InvalidWaterDepth,

    /// Gym equipment list is empty
    #[error("Gym equipment list must not be empty")]
    EmptyEquipmentList,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gym_capacity: 50,
            gym_temperature: 25,
            gym_air_conditioning: false,
            gym_equipment: vec![
                "Treadmills".to_string(),
                "Weight Machines".to_string(),
                "Yoga Mats".to_string(),
                "Dumbbells".to_string(),
            ],
            pool_capacity: 30,
            water_temperature: 28.0,
            pool_type: PoolType::OlympicSize,
            water_depth_m: 2,
            lifeguard_present: true,
        }
    }
}

impl AppConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        // Start with default configuration
        let mut config = Self::default();

        // Load from config file if specified
        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // Override with command line arguments (CLI takes precedence)
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            gym_capacity: config_file.gym_capacity.unwrap_or(defaults.gym_capacity),
            gym_temperature: config_file.gym_temperature.unwrap_or(defaults.gym_temperature),
            gym_air_conditioning: config_file
                .gym_air_conditioning
                .unwrap_or(defaults.gym_air_conditioning),
            gym_equipment: config_file.gym_equipment.unwrap_or(defaults.gym_equipment),
            pool_capacity: config_file.pool_capacity.unwrap_or(defaults.pool_capacity),
            water_temperature: config_file
                .water_temperature
                .unwrap_or(defaults.water_temperature),
            pool_type: config_file.pool_type.unwrap_or(defaults.pool_type),
            water_depth_m: config_file.water_depth_m.unwrap_or(defaults.water_depth_m),
            lifeguard_present: config_file
                .lifeguard_present
                .unwrap_or(defaults.lifeguard_present),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.gym_capacity {
            config.gym_capacity = value;
        }
        if let Some(value) = args.pool_capacity {
            config.pool_capacity = value;
        }
        if let Some(value) = args.gym_temperature {
            config.gym_temperature = value;
        }
        if let Some(value) = args.water_temperature {
            config.water_temperature = value;
        }
        if let Some(value) = args.pool_type {
            config.pool_type = value;
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.gym_capacity == 0 {
            return Err(ConfigValidationError::InvalidCapacity { area: "Gym".to_string() });
        }

        if self.pool_capacity == 0 {
            return Err(ConfigValidationError::InvalidCapacity {
                area: "Swimming pool".to_string(),
            });
        }

        if self.gym_temperature < gym_temperature::MIN || self.gym_temperature > gym_temperature::MAX
        {
            return Err(ConfigValidationError::GymTemperatureOutOfRange {
                value: self.gym_temperature,
            });
        }

        if self.water_temperature < water_temperature::MIN
            || self.water_temperature > water_temperature::MAX
        {
            return Err(ConfigValidationError::WaterTemperatureOutOfRange {
                value: self.water_temperature,
            });
        }

        if self.water_depth_m == 0 {
            return Err(ConfigValidationError::InvalidWaterDepth);
        }

        if self.gym_equipment.is_empty() {
            return Err(ConfigValidationError::EmptyEquipmentList);
        }

        Ok(())
    }
}
