use std::fmt;

use super::registry::MissionRegistry;
use crate::campaign::Campaign;
use crate::id::{ActorId, LocationId};
use crate::model::{ActivityState, LocationKind};

/// Agents below this skill are not trusted with a mission.
pub const MIN_AGENT_SKILL: f64 = 30.0;
/// Agents must have strictly more hit points than this.
pub const MIN_AGENT_HIT_POINTS: u32 = 40;

/// Companions in the player's party who could be sent out right now.
///
/// Excludes the player, anyone already on a mission, the wounded, and the
/// unskilled. Sorted by id.
pub fn eligible_agents(campaign: &dyn Campaign, registry: &MissionRegistry) -> Vec<ActorId> {
    let player = campaign.player();
    let mut agents: Vec<ActorId> = campaign
        .roster()
        .into_iter()
        .filter(|&actor| actor != player)
        .filter(|&actor| !registry.is_busy(actor))
        .filter(|&actor| campaign.is_alive(actor))
        .filter(|&actor| campaign.activity(actor) == Some(ActivityState::Active))
        .filter(|&actor| campaign.skill(actor) >= MIN_AGENT_SKILL)
        .filter(|&actor| campaign.hit_points(actor) > MIN_AGENT_HIT_POINTS)
        .collect();
    agents.sort();
    agents.dedup();
    agents
}

/// Why a location cannot be targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetRejection {
    Unknown,
    Village,
    OwnFaction,
    UnderSiege,
}

impl fmt::Display for TargetRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            TargetRejection::Unknown => "location does not exist",
            TargetRejection::Village => "villages cannot be infiltrated",
            TargetRejection::OwnFaction => "location belongs to the player's faction",
            TargetRejection::UnderSiege => "location is under siege",
        };
        f.write_str(reason)
    }
}

/// Whether `location` is a valid sabotage target: a town or castle held by
/// another faction and not under siege.
pub fn check_target(campaign: &dyn Campaign, location: LocationId) -> Result<(), TargetRejection> {
    match campaign.location_kind(location) {
        None => return Err(TargetRejection::Unknown),
        Some(LocationKind::Village) => return Err(TargetRejection::Village),
        Some(LocationKind::Town | LocationKind::Castle) => {}
    }
    if campaign.owner_faction(location) == Some(campaign.player_faction()) {
        return Err(TargetRejection::OwnFaction);
    }
    if campaign.is_under_siege(location) {
        return Err(TargetRejection::UnderSiege);
    }
    Ok(())
}
