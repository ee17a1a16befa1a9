//! Validated identifier types
//!
//! This module contains the newtype wrappers that guarantee an identifier is
//! within its valid range once constructed. Operations taking a raw number
//! from user input convert it through the validating constructor.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of lights installed in every accommodation area
pub const LIGHT_COUNT: u8 = 3;

/// Error raised when a light number falls outside the installed range
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Light number must be between 1 and {LIGHT_COUNT}, got {0}")]
pub struct InvalidLightNumber(pub i64);

/// A validated light number in the range `1..=LIGHT_COUNT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LightId(u8);

impl LightId {
    /// Create a light identifier from a raw user-supplied number
    pub fn new(raw: i64) -> Result<Self, InvalidLightNumber> {
        if raw < 1 || raw > LIGHT_COUNT as i64 {
            return Err(InvalidLightNumber(raw));
        }
        Ok(Self(raw as u8))
    }

    /// The 1-based light number as shown to the user
    pub fn number(&self) -> u8 {
        self.0
    }

    /// The 0-based index into the light state array
    pub fn index(&self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for LightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Light {}", self.0)
    }
}
