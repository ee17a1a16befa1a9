//! Ownership and selection of the accommodation areas
//!
//! The manager owns exactly one gym and one swimming pool, constructed from
//! the application configuration at startup, and keeps the "active area"
//! selection the menu operations are dispatched against.

use crate::area::{AccommodationArea, GymArea, SwimmingArea};
use crate::types::{AppConfig, AreaKind};
use tracing::info;

/// Owns the two accommodation areas and the active-area selection
#[derive(Debug)]
pub struct AreaManager {
    gym: GymArea,
    pool: SwimmingArea,
    active: AreaKind,
}

impl AreaManager {
    /// Build both areas from the configuration; the gym starts active
    pub fn new(config: &AppConfig) -> Self {
        Self {
            gym: GymArea::new(config),
            pool: SwimmingArea::new(config),
            active: AreaKind::Gym,
        }
    }

    /// Which area the menu operations currently target
    pub fn active_kind(&self) -> AreaKind {
        self.active
    }

    /// The active area as the shared capability
    pub fn active_area(&self) -> &dyn AccommodationArea {
        match self.active {
            AreaKind::Gym => &self.gym,
            AreaKind::SwimmingPool => &self.pool,
        }
    }

    /// Mutable access to the active area as the shared capability
    pub fn active_area_mut(&mut self) -> &mut dyn AccommodationArea {
        match self.active {
            AreaKind::Gym => &mut self.gym,
            AreaKind::SwimmingPool => &mut self.pool,
        }
    }

    /// Make the given area active
    pub fn switch_to(&mut self, kind: AreaKind) -> String {
        self.active = kind;
        info!(area = %kind, "active area switched");
        format!("Active area is now: {}", kind.area_name())
    }

    /// Switch the active selection to the other area
    pub fn switch_active_area(&mut self) -> String {
        self.switch_to(self.active.other())
    }

    /// The gym area
    pub fn gym(&self) -> &GymArea {
        &self.gym
    }

    /// Mutable access to the gym area
    pub fn gym_mut(&mut self) -> &mut GymArea {
        &mut self.gym
    }

    /// The swimming pool area
    pub fn pool(&self) -> &SwimmingArea {
        &self.pool
    }

    /// Mutable access to the swimming pool area
    pub fn pool_mut(&mut self) -> &mut SwimmingArea {
        &mut self.pool
    }
}
