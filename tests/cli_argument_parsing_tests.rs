//! Tests for CLI argument parsing functionality
//!
//! These tests verify that command line arguments are properly parsed and
//! that their overrides land in the application configuration.

use accommodation_manager::types::{AppConfig, CliArgs, PoolType};
use clap::Parser;

/// No arguments means no overrides and no special flags
#[test]
fn test_default_arguments() {
    let args = CliArgs::try_parse_from(["test"]).unwrap();
    assert!(args.config.is_none());
    assert!(args.gym_capacity.is_none());
    assert!(args.pool_capacity.is_none());
    assert!(args.gym_temperature.is_none());
    assert!(args.water_temperature.is_none());
    assert!(args.pool_type.is_none());
    assert!(!args.verbose);
    assert!(!args.debug);
    assert!(!args.dry_run);
    assert!(!args.print_config);
}

/// Capacity arguments are parsed
#[test]
fn test_capacity_argument_parsing() {
    let args =
        CliArgs::try_parse_from(["test", "--gym-capacity", "80", "--pool-capacity", "40"]).unwrap();
    assert_eq!(args.gym_capacity, Some(80));
    assert_eq!(args.pool_capacity, Some(40));

    let config = AppConfig::from_cli_args(args).unwrap();
    assert_eq!(config.gym_capacity, 80);
    assert_eq!(config.pool_capacity, 40);
}

/// Temperature arguments are parsed
#[test]
fn test_temperature_argument_parsing() {
    let args = CliArgs::try_parse_from([
        "test",
        "--gym-temperature",
        "18",
        "--water-temperature",
        "30.5",
    ])
    .unwrap();

    let config = AppConfig::from_cli_args(args).unwrap();
    assert_eq!(config.gym_temperature, 18);
    assert_eq!(config.water_temperature, 30.5);
}

/// The pool type argument accepts the documented spellings
#[test]
fn test_pool_type_argument_parsing() {
    let args = CliArgs::try_parse_from(["test", "--pool-type", "lap"]).unwrap();
    assert_eq!(args.pool_type, Some(PoolType::Lap));

    let args = CliArgs::try_parse_from(["test", "--pool-type", "olympic"]).unwrap();
    assert_eq!(args.pool_type, Some(PoolType::OlympicSize));

    assert!(CliArgs::try_parse_from(["test", "--pool-type", "wave"]).is_err());
}

/// Logging and mode flags are parsed
#[test]
fn test_flag_parsing() {
    let args =
        CliArgs::try_parse_from(["test", "--verbose", "--dry-run", "--print-config"]).unwrap();
    assert!(args.verbose);
    assert!(args.dry_run);
    assert!(args.print_config);
    assert!(!args.debug);

    let args = CliArgs::try_parse_from(["test", "-d"]).unwrap();
    assert!(args.debug);
}

/// Unoverridden settings keep their defaults
#[test]
fn test_partial_overrides_keep_defaults() {
    let args = CliArgs::try_parse_from(["test", "--gym-capacity", "100"]).unwrap();
    let config = AppConfig::from_cli_args(args).unwrap();

    assert_eq!(config.gym_capacity, 100);
    assert_eq!(config.pool_capacity, AppConfig::default().pool_capacity);
    assert_eq!(config.gym_temperature, AppConfig::default().gym_temperature);
    assert_eq!(config.pool_type, AppConfig::default().pool_type);
}

/// Out-of-range values parse fine but fail configuration validation
#[test]
fn test_out_of_range_values_fail_validation() {
    let args = CliArgs::try_parse_from(["test", "--gym-temperature", "50"]).unwrap();
    let config = AppConfig::from_cli_args(args).unwrap();
    assert!(config.validate().is_err());

    let args = CliArgs::try_parse_from(["test", "--water-temperature", "10.0"]).unwrap();
    let config = AppConfig::from_cli_args(args).unwrap();
    assert!(config.validate().is_err());

    let args = CliArgs::try_parse_from(["test", "--gym-capacity", "0"]).unwrap();
    let config = AppConfig::from_cli_args(args).unwrap();
    assert!(config.validate().is_err());
}

/// A fully overridden configuration still validates when in range
#[test]
fn test_combined_overrides_validate() {
    let args = CliArgs::try_parse_from([
        "test",
        "--gym-capacity",
        "75",
        "--pool-capacity",
        "25",
        "--gym-temperature",
        "16",
        "--water-temperature",
        "20.0",
        "--pool-type",
        "therapy",
        "--verbose",
    ])
    .unwrap();

    let config = AppConfig::from_cli_args(args).unwrap();
    config.validate().unwrap();
    assert_eq!(config.gym_capacity, 75);
    assert_eq!(config.pool_capacity, 25);
    assert_eq!(config.gym_temperature, 16);
    assert_eq!(config.water_temperature, 20.0);
    assert_eq!(config.pool_type, PoolType::Therapy);
}
