//! The gym accommodation area
//!
//! Adds an equipment list, an air conditioning switch, and a thermostat with
//! an inclusive 16-30 °C range on top of the shared occupancy state.

use crate::area::error::AreaError;
use crate::area::occupancy::OccupancyState;
use crate::area::AccommodationArea;
use crate::types::config::{gym_temperature, AppConfig};
use crate::types::AreaKind;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::debug;

/// The gym area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GymArea {
    /// Shared occupancy and lighting state
    occupancy: OccupancyState,
    /// Equipment available to occupants
    equipment: Vec<String>,
    /// Whether the air conditioning is currently running
    air_conditioning_on: bool,
    /// Thermostat setting in degrees Celsius
    temperature: i32,
}

impl GymArea {
    /// Create the gym area from the application configuration
    pub fn new(config: &AppConfig) -> Self {
        Self {
            occupancy: OccupancyState::new(AreaKind::Gym.area_name(), config.gym_capacity),
            equipment: config.gym_equipment.clone(),
            air_conditioning_on: config.gym_air_conditioning,
            temperature: config.gym_temperature,
        }
    }

    /// Whether the air conditioning is currently running
    pub fn air_conditioning_on(&self) -> bool {
        self.air_conditioning_on
    }

    /// Current thermostat setting in degrees Celsius
    pub fn temperature(&self) -> i32 {
        self.temperature
    }

    /// Equipment available to occupants
    pub fn equipment(&self) -> &[String] {
        &self.equipment
    }

    /// Flip the air conditioning switch, reporting the new state
    pub fn toggle_air_conditioning(&mut self) -> String {
        self.air_conditioning_on = !self.air_conditioning_on;
        debug!(on = self.air_conditioning_on, "air conditioning toggled");
        format!(
            "Air Conditioning turned {}",
            if self.air_conditioning_on { "ON" } else { "OFF" }
        )
    }

    /// Set the thermostat, rejecting values outside the 16-30 °C range
    pub fn set_temperature(&mut self, temp: i32) -> Result<String, AreaError> {
        if temp < gym_temperature::MIN || temp > gym_temperature::MAX {
            return Err(AreaError::TemperatureOutOfRange { value: temp });
        }

        self.temperature = temp;
        debug!(temperature = temp, "gym temperature set");
        Ok(format!("Temperature set to {}°C", temp))
    }
}

impl AccommodationArea for GymArea {
    fn occupancy(&self) -> &OccupancyState {
        &self.occupancy
    }

    fn occupancy_mut(&mut self) -> &mut OccupancyState {
        &mut self.occupancy
    }

    fn kind(&self) -> AreaKind {
        AreaKind::Gym
    }

    fn area_info(&self) -> String {
        let mut info = String::new();
        let _ = writeln!(info, "========================================");
        let _ = writeln!(info, "GYM AREA INFORMATION");
        let _ = writeln!(info, "========================================");
        let _ = writeln!(info, "Capacity: {} persons", self.occupancy.max_capacity());
        let _ = writeln!(info, "Available Equipment:");
        for item in &self.equipment {
            let _ = writeln!(info, "  - {}", item);
        }
        let _ = writeln!(
            info,
            "Air Conditioning: {}",
            if self.air_conditioning_on { "ON" } else { "OFF" }
        );
        let _ = writeln!(info, "Temperature: {}°C", self.temperature);
        let _ = write!(info, "========================================");
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh_gym() -> GymArea {
        GymArea::new(&AppConfig::default())
    }

    #[test]
    fn test_gym_defaults() {
        let gym = fresh_gym();
        assert_eq!(gym.kind(), AreaKind::Gym);
        assert_eq!(gym.occupancy().name(), "Gym Area");
        assert_eq!(gym.occupancy().max_capacity(), 50);
        assert_eq!(gym.temperature(), 25);
        assert!(!gym.air_conditioning_on());
        assert_eq!(gym.equipment().len(), 4);
    }

    #[test]
    fn test_toggle_air_conditioning() {
        let mut gym = fresh_gym();
        let msg = gym.toggle_air_conditioning();
        assert!(gym.air_conditioning_on());
        assert_eq!(msg, "Air Conditioning turned ON");

        let msg = gym.toggle_air_conditioning();
        assert!(!gym.air_conditioning_on());
        assert_eq!(msg, "Air Conditioning turned OFF");
    }

    #[test]
    fn test_set_temperature_within_range() {
        let mut gym = fresh_gym();
        let msg = gym.set_temperature(20).unwrap();
        assert_eq!(gym.temperature(), 20);
        assert_eq!(msg, "Temperature set to 20°C");

        // Inclusive bounds
        gym.set_temperature(16).unwrap();
        assert_eq!(gym.temperature(), 16);
        gym.set_temperature(30).unwrap();
        assert_eq!(gym.temperature(), 30);
    }

    #[test]
    fn test_set_temperature_out_of_range_rejected() {
        let mut gym = fresh_gym();

        let err = gym.set_temperature(15).unwrap_err();
        assert_eq!(err, AreaError::TemperatureOutOfRange { value: 15 });
        assert_eq!(gym.temperature(), 25);

        let err = gym.set_temperature(31).unwrap_err();
        assert_eq!(err, AreaError::TemperatureOutOfRange { value: 31 });
        assert_eq!(gym.temperature(), 25);
    }

    #[test]
    fn test_area_info_lists_gym_details() {
        let mut gym = fresh_gym();
        gym.toggle_air_conditioning();
        gym.set_temperature(22).unwrap();

        let info = gym.area_info();
        assert!(info.contains("GYM AREA INFORMATION"));
        assert!(info.contains("Capacity: 50 persons"));
        assert!(info.contains("Treadmills"));
        assert!(info.contains("Dumbbells"));
        assert!(info.contains("Air Conditioning: ON"));
        assert!(info.contains("Temperature: 22°C"));
    }

    #[test]
    fn test_shared_operations_through_trait() {
        let mut gym = fresh_gym();
        gym.add_occupants(10).unwrap();
        assert_eq!(gym.occupancy().occupant_count(), 10);

        gym.switch_light_on(1).unwrap();
        assert!(gym.occupancy().lights()[0]);

        let report = gym.status_report();
        assert!(report.contains("Current Occupants: 10/50"));
    }
}
