//! Core types for the accommodation manager
//!
//! This module contains the shared enumeration types, validated identifiers,
//! and configuration structures used throughout the application.

pub mod config;
pub mod enums;
pub mod identifiers;

pub use config::{AppConfig, CliArgs, ConfigError, ConfigValidationError};
pub use enums::{AreaKind, PoolType};
pub use identifiers::LightId;
