//! Tunable constants for mission risk, travel speed, damage and reward.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_CAPTURE_MULTIPLIER: f64 = 1.0;
pub const DEFAULT_TRAVEL_SPEED_DIVISOR: u32 = 50;
pub const DEFAULT_BASE_FOOD_AMOUNT: u32 = 20;
pub const DEFAULT_XP_REWARD: u32 = 800;

const CAPTURE_MULTIPLIER_RANGE: (f64, f64) = (0.1, 5.0);
const TRAVEL_SPEED_DIVISOR_RANGE: (u32, u32) = (1, 100);
const BASE_FOOD_AMOUNT_RANGE: (u32, u32) = (1, 100);
const XP_REWARD_RANGE: (u32, u32) = (0, 5000);

/// Settings a player may tune. Missing JSON fields take the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    /// Scales the per-day capture risk. Higher is harder.
    pub capture_multiplier: f64,
    /// Map distance covered per day of travel.
    pub travel_speed_divisor: u32,
    /// Flat food destroyed per day before skill and stock scaling.
    pub base_food_amount: u32,
    /// Skill XP granted once per completed mission.
    pub xp_reward: u32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            capture_multiplier: DEFAULT_CAPTURE_MULTIPLIER,
            travel_speed_divisor: DEFAULT_TRAVEL_SPEED_DIVISOR,
            base_food_amount: DEFAULT_BASE_FOOD_AMOUNT,
            xp_reward: DEFAULT_XP_REWARD,
        }
    }
}

/// A pluggable source of tunables, e.g. an in-game settings screen.
pub trait TunablesProvider {
    /// `None` when the provider has nothing to offer right now.
    fn tunables(&self) -> Option<Tunables>;
}

impl Tunables {
    /// Ask the provider, falling back to defaults when it is absent or silent.
    pub fn resolve(provider: Option<&dyn TunablesProvider>) -> Self {
        provider.and_then(|p| p.tunables()).unwrap_or_default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let tunables: Tunables = serde_json::from_str(json)?;
        tunables.validate()?;
        Ok(tunables)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range(
            "capture_multiplier",
            self.capture_multiplier,
            CAPTURE_MULTIPLIER_RANGE,
        )?;
        check_range_u32(
            "travel_speed_divisor",
            self.travel_speed_divisor,
            TRAVEL_SPEED_DIVISOR_RANGE,
        )?;
        check_range_u32(
            "base_food_amount",
            self.base_food_amount,
            BASE_FOOD_AMOUNT_RANGE,
        )?;
        check_range_u32("xp_reward", self.xp_reward, XP_REWARD_RANGE)?;
        Ok(())
    }

    /// Whole days needed to cover `distance`, rounded up. Never divides by zero.
    pub fn travel_days(&self, distance: f64) -> u32 {
        let divisor = f64::from(self.travel_speed_divisor.max(1));
        // Saturating float-to-int cast; distances are finite and non-negative.
        (distance.max(0.0) / divisor).ceil() as u32
    }
}

fn check_range(field: &'static str, value: f64, (min, max): (f64, f64)) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

fn check_range_u32(
    field: &'static str,
    value: u32,
    (min, max): (u32, u32),
) -> Result<(), ConfigError> {
    check_range(field, f64::from(value), (f64::from(min), f64::from(max)))
}

/// Reads tunables from a JSON file on every request.
///
/// Any read, parse or range failure is logged and reported as `None`, so the
/// caller lands on defaults instead of failing.
#[derive(Debug, Clone)]
pub struct JsonFileTunables {
    path: PathBuf,
}

impl JsonFileTunables {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TunablesProvider for JsonFileTunables {
    fn tunables(&self) -> Option<Tunables> {
        match Tunables::from_file(&self.path) {
            Ok(tunables) => Some(tunables),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "tunables unavailable, using defaults");
                None
            }
        }
    }
}
