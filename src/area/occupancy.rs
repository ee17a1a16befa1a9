//! Shared per-area state and operations
//!
//! This module contains the `OccupancyState` struct holding the fields every
//! accommodation area shares (name, capacity ceiling, occupant count, light
//! switches) together with the occupant and lighting operations. Invariants:
//! `0 <= occupant_count <= max_capacity`, and a rejected operation leaves the
//! state untouched.

use crate::area::error::AreaError;
use crate::types::identifiers::{LightId, LIGHT_COUNT};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::debug;

/// Shared state of an accommodation area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyState {
    /// Display name of the area
    name: String,
    /// Capacity ceiling, fixed at construction
    max_capacity: u32,
    /// Occupants currently present
    occupant_count: u32,
    /// On/off state of the three lights, all off at construction
    lights: [bool; LIGHT_COUNT as usize],
}

impl OccupancyState {
    /// Create a fresh area state with no occupants and all lights off
    pub fn new(name: impl Into<String>, max_capacity: u32) -> Self {
        Self {
            name: name.into(),
            max_capacity,
            occupant_count: 0,
            lights: [false; LIGHT_COUNT as usize],
        }
    }

    /// Display name of the area
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Capacity ceiling of the area
    pub fn max_capacity(&self) -> u32 {
        self.max_capacity
    }

    /// Occupants currently present
    pub fn occupant_count(&self) -> u32 {
        self.occupant_count
    }

    /// On/off state of every light, indexed from light 1
    pub fn lights(&self) -> &[bool; LIGHT_COUNT as usize] {
        &self.lights
    }

    /// Whether the given light is on
    pub fn is_light_on(&self, light: LightId) -> bool {
        self.lights[light.index()]
    }

    /// Admit occupants into the area
    ///
    /// Rejects negative counts and counts that would exceed the capacity
    /// ceiling, leaving the state unchanged.
    pub fn add_occupants(&mut self, count: i64) -> Result<String, AreaError> {
        if count < 0 {
            return Err(AreaError::NegativeCount(count));
        }
        // Saturate so that absurdly large requests still fail the capacity check
        let count = u32::try_from(count).unwrap_or(u32::MAX);

        if count > self.max_capacity - self.occupant_count {
            return Err(AreaError::CapacityExceeded {
                requested: count,
                current: self.occupant_count,
                max: self.max_capacity,
            });
        }

        self.occupant_count += count;
        debug!(area = %self.name, added = count, occupants = self.occupant_count, "occupants added");
        Ok(format!(
            "Successfully added {} occupant(s). Current occupancy: {}/{}",
            count, self.occupant_count, self.max_capacity
        ))
    }

    /// Release occupants from the area
    ///
    /// Rejects negative counts and counts larger than the current occupancy,
    /// leaving the state unchanged.
    pub fn remove_occupants(&mut self, count: i64) -> Result<String, AreaError> {
        if count < 0 {
            return Err(AreaError::NegativeCount(count));
        }
        let count = u32::try_from(count).unwrap_or(u32::MAX);

        if count > self.occupant_count {
            return Err(AreaError::NotEnoughOccupants {
                requested: count,
                current: self.occupant_count,
            });
        }

        self.occupant_count -= count;
        debug!(area = %self.name, removed = count, occupants = self.occupant_count, "occupants removed");
        Ok(format!(
            "Successfully removed {} occupant(s). Current occupancy: {}/{}",
            count, self.occupant_count, self.max_capacity
        ))
    }

    /// Switch a light on by its 1-based number
    ///
    /// An out-of-range number is rejected without touching any light. A light
    /// that is already on is reported as such and left alone.
    pub fn switch_light_on(&mut self, light_number: i64) -> Result<String, AreaError> {
        let light = LightId::new(light_number)?;

        if self.lights[light.index()] {
            return Ok(format!("{} is already ON.", light));
        }

        self.lights[light.index()] = true;
        debug!(area = %self.name, light = light.number(), "light switched on");
        Ok(format!("{} switched ON.", light))
    }

    /// Switch a light off by its 1-based number
    ///
    /// An out-of-range number is rejected without touching any light. A light
    /// that is already off is reported as such and left alone.
    pub fn switch_light_off(&mut self, light_number: i64) -> Result<String, AreaError> {
        let light = LightId::new(light_number)?;

        if !self.lights[light.index()] {
            return Ok(format!("{} is already OFF.", light));
        }

        self.lights[light.index()] = false;
        debug!(area = %self.name, light = light.number(), "light switched off");
        Ok(format!("{} switched OFF.", light))
    }

    /// Render the area status report: name, occupancy fraction, light states
    pub fn status_report(&self) -> String {
        let mut report = String::new();
        let _ = writeln!(report, "========================================");
        let _ = writeln!(report, "AREA STATUS REPORT");
        let _ = writeln!(report, "========================================");
        let _ = writeln!(report, "Area Name: {}", self.name);
        let _ = writeln!(
            report,
            "Current Occupants: {}/{}",
            self.occupant_count, self.max_capacity
        );
        let _ = writeln!(report, "----------------------------------------");
        let _ = writeln!(report, "Lighting Status:");
        for (i, on) in self.lights.iter().enumerate() {
            let _ = writeln!(report, "  Light {}: {}", i + 1, if *on { "ON" } else { "OFF" });
        }
        let _ = write!(report, "========================================");
        report
    }
}
