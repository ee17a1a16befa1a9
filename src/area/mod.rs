//! Accommodation area object model
//!
//! An accommodation area is a named, capacity-bounded zone with occupancy
//! tracking and three lights. The shared behavior lives on
//! [`OccupancyState`]; the [`AccommodationArea`] trait is the capability the
//! menu dispatches through, with the two concrete variants ([`GymArea`] and
//! [`SwimmingArea`]) supplying their own area information report.

pub mod error;
pub mod gym;
pub mod occupancy;
pub mod swimming;

pub use error::AreaError;
pub use gym::GymArea;
pub use occupancy::OccupancyState;
pub use swimming::SwimmingArea;

use crate::types::AreaKind;

/// Capability shared by every accommodation area
///
/// Occupant and lighting operations have default implementations delegating
/// to the shared [`OccupancyState`]; variants only supply state accessors,
/// their kind, and the variant-specific information report.
pub trait AccommodationArea {
    /// Shared occupancy and lighting state
    fn occupancy(&self) -> &OccupancyState;

    /// Mutable access to the shared occupancy and lighting state
    fn occupancy_mut(&mut self) -> &mut OccupancyState;

    /// Which kind of area this is
    fn kind(&self) -> AreaKind;

    /// Render the variant-specific area information report
    fn area_info(&self) -> String;

    /// Admit occupants into the area
    fn add_occupants(&mut self, count: i64) -> Result<String, AreaError> {
        self.occupancy_mut().add_occupants(count)
    }

    /// Release occupants from the area
    fn remove_occupants(&mut self, count: i64) -> Result<String, AreaError> {
        self.occupancy_mut().remove_occupants(count)
    }

    /// Switch a light on by its 1-based number
    fn switch_light_on(&mut self, light_number: i64) -> Result<String, AreaError> {
        self.occupancy_mut().switch_light_on(light_number)
    }

    /// Switch a light off by its 1-based number
    fn switch_light_off(&mut self, light_number: i64) -> Result<String, AreaError> {
        self.occupancy_mut().switch_light_off(light_number)
    }

    /// Render the shared status report (name, occupancy, lights)
    fn status_report(&self) -> String {
        self.occupancy().status_report()
    }
}
