//! Tests for the accommodation area operations
//!
//! These tests exercise the occupant, lighting, and area-specific operations
//! through the shared `AccommodationArea` capability, the way the menu
//! dispatches them.

use accommodation_manager::area::{AccommodationArea, AreaError, GymArea, SwimmingArea};
use accommodation_manager::types::AppConfig;

fn gym() -> GymArea {
    GymArea::new(&AppConfig::default())
}

fn pool() -> SwimmingArea {
    SwimmingArea::new(&AppConfig::default())
}

/// Negative counts are rejected by both occupant operations without mutation
#[test]
fn test_negative_counts_leave_state_unchanged() {
    let mut area = gym();
    area.add_occupants(12).unwrap();

    for count in [-1, -50, i64::MIN] {
        assert!(area.add_occupants(count).is_err());
        assert!(area.remove_occupants(count).is_err());
        assert_eq!(area.occupancy().occupant_count(), 12);
    }
}

/// Valid adds increment exactly and never exceed the capacity ceiling
#[test]
fn test_add_occupants_respects_capacity() {
    let mut area = gym();
    area.add_occupants(25).unwrap();
    area.add_occupants(25).unwrap();
    assert_eq!(area.occupancy().occupant_count(), 50);

    let err = area.add_occupants(1).unwrap_err();
    assert!(matches!(err, AreaError::CapacityExceeded { .. }));
    assert_eq!(area.occupancy().occupant_count(), 50);
}

/// The gym overflow scenario: add 60 fails, add 40 lands, remove 50 fails
#[test]
fn test_gym_capacity_scenario() {
    let mut area = gym();

    assert!(area.add_occupants(60).is_err());
    assert_eq!(area.occupancy().occupant_count(), 0);

    area.add_occupants(40).unwrap();
    assert_eq!(area.occupancy().occupant_count(), 40);

    assert!(area.remove_occupants(50).is_err());
    assert_eq!(area.occupancy().occupant_count(), 40);
}

/// Removing more occupants than present is rejected, never underflowing
#[test]
fn test_remove_occupants_never_underflows() {
    let mut area = pool();
    area.add_occupants(10).unwrap();

    let err = area.remove_occupants(11).unwrap_err();
    assert_eq!(err, AreaError::NotEnoughOccupants { requested: 11, current: 10 });

    area.remove_occupants(10).unwrap();
    assert_eq!(area.occupancy().occupant_count(), 0);
    assert!(area.remove_occupants(1).is_err());
}

/// Light numbers outside 1-3 fail and leave every light untouched
#[test]
fn test_invalid_light_numbers_rejected() {
    let mut area = gym();
    area.switch_light_on(2).unwrap();

    for n in [0, 4, -3, 1000] {
        assert!(area.switch_light_on(n).is_err());
        assert!(area.switch_light_off(n).is_err());
        assert_eq!(area.occupancy().lights(), &[false, true, false]);
    }
}

/// Switching a light already in the target state is an idempotent no-op
#[test]
fn test_light_switch_idempotence() {
    let mut area = pool();

    assert_eq!(area.switch_light_on(1).unwrap(), "Light 1 switched ON.");
    assert_eq!(area.switch_light_on(1).unwrap(), "Light 1 is already ON.");
    assert_eq!(area.occupancy().lights(), &[true, false, false]);

    assert_eq!(area.switch_light_off(1).unwrap(), "Light 1 switched OFF.");
    assert_eq!(area.switch_light_off(1).unwrap(), "Light 1 is already OFF.");
    assert_eq!(area.occupancy().lights(), &[false, false, false]);
}

/// Gym thermostat boundaries: 15 and 31 rejected, 16, 20, and 30 accepted
#[test]
fn test_gym_temperature_boundaries() {
    let mut area = gym();

    assert!(area.set_temperature(15).is_err());
    assert_eq!(area.temperature(), 25);

    assert!(area.set_temperature(31).is_err());
    assert_eq!(area.temperature(), 25);

    area.set_temperature(20).unwrap();
    assert_eq!(area.temperature(), 20);
    area.set_temperature(16).unwrap();
    area.set_temperature(30).unwrap();
    assert_eq!(area.temperature(), 30);
}

/// Pool heater boundaries are inclusive: 19.9 rejected, 20.0 and 35.0 accepted
#[test]
fn test_water_temperature_boundaries() {
    let mut area = pool();

    assert!(area.adjust_water_temperature(19.9).is_err());
    assert_eq!(area.water_temperature(), 28.0);

    area.adjust_water_temperature(20.0).unwrap();
    assert_eq!(area.water_temperature(), 20.0);

    area.adjust_water_temperature(35.0).unwrap();
    assert_eq!(area.water_temperature(), 35.0);
}

/// Toggling the lifeguard twice restores the initial presence
#[test]
fn test_lifeguard_double_toggle() {
    let mut area = pool();
    assert!(area.lifeguard_present());
    area.toggle_lifeguard();
    area.toggle_lifeguard();
    assert!(area.lifeguard_present());
}

/// Both variants render their own information report through the capability
#[test]
fn test_area_info_is_variant_specific() {
    let areas: Vec<Box<dyn AccommodationArea>> = vec![Box::new(gym()), Box::new(pool())];

    let gym_info = areas[0].area_info();
    assert!(gym_info.contains("GYM AREA INFORMATION"));
    assert!(gym_info.contains("Yoga Mats"));

    let pool_info = areas[1].area_info();
    assert!(pool_info.contains("SWIMMING POOL AREA INFORMATION"));
    assert!(pool_info.contains("Pool Type: Olympic Size"));
}

/// The status report is a pure read: rendering it twice changes nothing
#[test]
fn test_status_report_has_no_side_effects() {
    let mut area = gym();
    area.add_occupants(5).unwrap();
    area.switch_light_on(1).unwrap();

    let first = area.status_report();
    let second = area.status_report();
    assert_eq!(first, second);
    assert_eq!(area.occupancy().occupant_count(), 5);
}
