//! Error types for accommodation area operations
//!
//! Every rejected operation maps to one variant here. The `Display` text is
//! the exact human-readable reason shown to the operator; state is never
//! mutated on the error path.

use crate::types::config::{gym_temperature, water_temperature};
use crate::types::identifiers::InvalidLightNumber;
use thiserror::Error;

/// Errors that can occur when operating on an accommodation area
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AreaError {
    /// A negative occupant count was supplied
    #[error("ERROR: Occupant count cannot be negative, got {0}")]
    NegativeCount(i64),

    /// Adding the requested occupants would exceed the area capacity
    #[error("ERROR: Adding {requested} occupant(s) exceeds the maximum capacity of {max} (currently {current})")]
    CapacityExceeded {
        /// Number of occupants the caller asked to add
        requested: u32,
        /// Occupants present before the rejected operation
        current: u32,
        /// The area's capacity ceiling
        max: u32,
    },

    /// Removing the requested occupants would drive the count below zero
    #[error("ERROR: Cannot remove {requested} occupant(s), only {current} present")]
    NotEnoughOccupants {
        /// Number of occupants the caller asked to remove
        requested: u32,
        /// Occupants present before the rejected operation
        current: u32,
    },

    /// A light number outside the installed range was supplied
    #[error("ERROR: {0}")]
    InvalidLightNumber(#[from] InvalidLightNumber),

    /// Gym temperature outside the thermostat range
    #[error(
        "ERROR: Temperature must be between {min}°C and {max}°C, got {value}°C",
        min = gym_temperature::MIN,
        max = gym_temperature::MAX
    )]
    TemperatureOutOfRange {
        /// The rejected temperature value
        value: i32,
    },

    /// Pool water temperature outside the heater range
    #[error(
        "ERROR: Water temperature must be between {min}°C and {max}°C, got {value}°C",
        min = water_temperature::MIN,
        max = water_temperature::MAX
    )]
    WaterTemperatureOutOfRange {
        /// The rejected temperature value
        value: f64,
    },
}
