//! The swimming pool accommodation area
//!
//! Adds a water heater with an inclusive 20.0-35.0 °C range, a pool
//! classification, a fixed depth, and a lifeguard presence flag on top of the
//! shared occupancy state.

use crate::area::error::AreaError;
use crate::area::occupancy::OccupancyState;
use crate::area::AccommodationArea;
use crate::types::config::{water_temperature, AppConfig};
use crate::types::{AreaKind, PoolType};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::debug;

/// The swimming pool area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwimmingArea {
    /// Shared occupancy and lighting state
    occupancy: OccupancyState,
    /// Water heater setting in degrees Celsius
    water_temperature: f64,
    /// Pool classification
    pool_type: PoolType,
    /// Whether a lifeguard is currently on duty
    lifeguard_present: bool,
    /// Pool depth in meters, fixed at construction
    water_depth_m: u32,
}

impl SwimmingArea {
    /// Create the swimming pool area from the application configuration
    pub fn new(config: &AppConfig) -> Self {
        Self {
            occupancy: OccupancyState::new(
                AreaKind::SwimmingPool.area_name(),
                config.pool_capacity,
            ),
            water_temperature: config.water_temperature,
            pool_type: config.pool_type,
            lifeguard_present: config.lifeguard_present,
            water_depth_m: config.water_depth_m,
        }
    }

    /// Current water heater setting in degrees Celsius
    pub fn water_temperature(&self) -> f64 {
        self.water_temperature
    }

    /// Pool classification
    pub fn pool_type(&self) -> PoolType {
        self.pool_type
    }

    /// Whether a lifeguard is currently on duty
    pub fn lifeguard_present(&self) -> bool {
        self.lifeguard_present
    }

    /// Pool depth in meters
    pub fn water_depth_m(&self) -> u32 {
        self.water_depth_m
    }

    /// Set the water heater, rejecting values outside the 20.0-35.0 °C range
    pub fn adjust_water_temperature(&mut self, temp: f64) -> Result<String, AreaError> {
        if temp < water_temperature::MIN || temp > water_temperature::MAX {
            return Err(AreaError::WaterTemperatureOutOfRange { value: temp });
        }

        self.water_temperature = temp;
        debug!(temperature = temp, "water temperature adjusted");
        Ok(format!("Water temperature adjusted to {}°C", temp))
    }

    /// Flip the lifeguard presence flag, reporting the new state
    pub fn toggle_lifeguard(&mut self) -> String {
        self.lifeguard_present = !self.lifeguard_present;
        debug!(present = self.lifeguard_present, "lifeguard toggled");
        format!(
            "Lifeguard status: {}",
            if self.lifeguard_present { "Present" } else { "Not Present" }
        )
    }
}

impl AccommodationArea for SwimmingArea {
    fn occupancy(&self) -> &OccupancyState {
        &self.occupancy
    }

    fn occupancy_mut(&mut self) -> &mut OccupancyState {
        &mut self.occupancy
    }

    fn kind(&self) -> AreaKind {
        AreaKind::SwimmingPool
    }

    fn area_info(&self) -> String {
        let mut info = String::new();
        let _ = writeln!(info, "========================================");
        let _ = writeln!(info, "SWIMMING POOL AREA INFORMATION");
        let _ = writeln!(info, "========================================");
        let _ = writeln!(info, "Capacity: {} persons", self.occupancy.max_capacity());
        let _ = writeln!(info, "Pool Type: {}", self.pool_type);
        let _ = writeln!(info, "Water Temperature: {}°C", self.water_temperature);
        let _ = writeln!(info, "Water Depth: {} meters", self.water_depth_m);
        let _ = writeln!(
            info,
            "Lifeguard: {}",
            if self.lifeguard_present { "Present" } else { "Not Present" }
        );
        let _ = write!(info, "========================================");
        info
    }
}
