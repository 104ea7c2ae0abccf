use serde::{Deserialize, Serialize};

use crate::id::{ActorId, LocationId};

/// Days an agent spends working inside the target once there.
pub const ON_SITE_DAYS: i32 = 5;

/// Where a mission stands, with the countdown that belongs to that phase.
///
/// `remaining` is signed: the tick decrements first and fires the transition
/// once it reaches zero or below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum MissionPhase {
    Traveling { remaining: i32 },
    Infiltrating { remaining: i32 },
    Returning { remaining: i32 },
}

impl MissionPhase {
    pub fn remaining(self) -> i32 {
        match self {
            MissionPhase::Traveling { remaining }
            | MissionPhase::Infiltrating { remaining }
            | MissionPhase::Returning { remaining } => remaining,
        }
    }

    pub fn is_returning(self) -> bool {
        matches!(self, MissionPhase::Returning { .. })
    }

    pub fn name(self) -> &'static str {
        match self {
            MissionPhase::Traveling { .. } => "traveling",
            MissionPhase::Infiltrating { .. } => "infiltrating",
            MissionPhase::Returning { .. } => "returning",
        }
    }

    /// Take one day off the countdown and return what is left.
    pub(crate) fn count_down(&mut self) -> i32 {
        match self {
            MissionPhase::Traveling { remaining }
            | MissionPhase::Infiltrating { remaining }
            | MissionPhase::Returning { remaining } => {
                *remaining -= 1;
                *remaining
            }
        }
    }
}

/// One agent's mission in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionRecord {
    pub agent: ActorId,
    pub target: LocationId,
    #[serde(flatten)]
    pub phase: MissionPhase,
    /// Food destroyed so far, truncated per day.
    pub food_destroyed: i64,
    pub loyalty_lost: f64,
}

impl MissionRecord {
    /// Start a mission. Zero travel days means the agent is already at the
    /// target and goes straight to work.
    pub fn new(agent: ActorId, target: LocationId, travel_days: u32) -> Self {
        let phase = if travel_days == 0 {
            MissionPhase::Infiltrating {
                remaining: ON_SITE_DAYS,
            }
        } else {
            MissionPhase::Traveling {
                remaining: i32::try_from(travel_days).unwrap_or(i32::MAX),
            }
        };
        Self {
            agent,
            target,
            phase,
            food_destroyed: 0,
            loyalty_lost: 0.0,
        }
    }

    pub fn has_damage(&self) -> bool {
        self.food_destroyed > 0 || self.loyalty_lost > 0.0
    }
}
