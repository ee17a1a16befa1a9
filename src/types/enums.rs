//! Enumeration types for the accommodation manager
//!
//! This module contains the enumeration types shared across the application:
//! the kinds of accommodation area and the supported pool classifications.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kinds of accommodation area managed by the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaKind {
    /// The gym area
    Gym,
    /// The swimming pool area
    SwimmingPool,
}

impl AreaKind {
    /// The display name used for the area when it is constructed
    pub fn area_name(&self) -> &'static str {
        match self {
            AreaKind::Gym => "Gym Area",
            AreaKind::SwimmingPool => "Swimming Pool Area",
        }
    }

    /// The other of the two managed areas
    pub fn other(&self) -> AreaKind {
        match self {
            AreaKind::Gym => AreaKind::SwimmingPool,
            AreaKind::SwimmingPool => AreaKind::Gym,
        }
    }
}

impl fmt::Display for AreaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AreaKind::Gym => write!(f, "Gym"),
            AreaKind::SwimmingPool => write!(f, "Swimming Pool"),
        }
    }
}

impl FromStr for AreaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gym" | "gym area" => Ok(AreaKind::Gym),
            "pool" | "swimming pool" | "swimmingpool" | "swimming pool area" => {
                Ok(AreaKind::SwimmingPool)
            }
            _ => Err(format!("Unknown area kind: {}", s)),
        }
    }
}

/// Classification of a swimming pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolType {
    /// Full-length competition pool
    OlympicSize,
    /// General-purpose leisure pool
    Recreational,
    /// Narrow pool reserved for lap swimming
    Lap,
    /// Heated shallow pool for physiotherapy
    Therapy,
}

impl fmt::Display for PoolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolType::OlympicSize => write!(f, "Olympic Size"),
            PoolType::Recreational => write!(f, "Recreational"),
            PoolType::Lap => write!(f, "Lap"),
            PoolType::Therapy => write!(f, "Therapy"),
        }
    }
}

impl FromStr for PoolType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "olympic size" | "olympicsize" | "olympic" => Ok(PoolType::OlympicSize),
            "recreational" => Ok(PoolType::Recreational),
            "lap" => Ok(PoolType::Lap),
            "therapy" => Ok(PoolType::Therapy),
            _ => Err(format!("Unknown pool type: {}", s)),
        }
    }
}
