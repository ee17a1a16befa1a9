//! Accommodation Manager
//!
//! An interactive console application managing the two accommodation areas
//! of the Speke Apartments complex: a gym and a swimming pool. An operator
//! adds or removes occupants, toggles each area's three lights, and adjusts
//! area-specific settings (air conditioning and thermostat for the gym,
//! water temperature and lifeguard presence for the pool) through a numbered
//! text menu.
//!
//! # Overview
//!
//! Every operation either mutates the in-process state and returns a
//! confirmation message, or rejects the input with a specific reason and
//! leaves the state unchanged. There is no persistence: state is built from
//! configuration at startup and lost on exit.
//!
//! ## Quick Start
//!
//! ```rust
//! use accommodation_manager::area::AccommodationArea;
//! use accommodation_manager::manager::AreaManager;
//! use accommodation_manager::types::AppConfig;
//!
//! let config = AppConfig::default();
//! config.validate()?;
//!
//! let mut manager = AreaManager::new(&config);
//! manager.active_area_mut().add_occupants(5)?;
//! assert_eq!(manager.gym().occupancy().occupant_count(), 5);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: enums, validated identifiers, and configuration
//! - [`area`]: the accommodation-area object model and its operations
//! - [`manager`]: area ownership, active-area selection, and the menu loop
//! - [`logging`]: tracing setup
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod area;
pub mod logging;
pub mod manager;
pub mod types;

pub use area::{AccommodationArea, AreaError, GymArea, OccupancyState, SwimmingArea};
pub use logging::LoggingConfig;
pub use manager::{AreaManager, Menu, MenuAction};
pub use types::{AppConfig, AreaKind, CliArgs, ConfigError, ConfigValidationError, LightId, PoolType};
