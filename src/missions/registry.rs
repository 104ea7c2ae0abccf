use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::advance::{Step, advance_mission};
use crate::campaign::Campaign;
use crate::config::Tunables;
use crate::id::{ActorId, LocationId};
use crate::model::{ActivityState, MissionRecord, NoticeKind, Notification};
use crate::sim::{SimSystem, TickContext};

/// Deploying closer than this to the target skips the journey entirely.
pub const ARRIVAL_DISTANCE: f64 = 1.0;

/// What happened to a deploy request.
#[derive(Debug, Clone, PartialEq)]
pub enum DeployOutcome {
    /// The agent left; the notification describes the departure.
    Deployed(Notification),
    /// The agent already has a mission; nothing changed.
    AlreadyBusy,
    Rejected { reason: String },
}

/// Every in-flight mission, keyed by agent.
///
/// Serializes as `{"missions": [record, ...]}`. Tunables are injected by the
/// host and are not part of the persisted state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "RegistryRepr", try_from = "RegistryRepr")]
pub struct MissionRegistry {
    missions: BTreeMap<ActorId, MissionRecord>,
    tunables: Tunables,
}

#[derive(Serialize, Deserialize)]
struct RegistryRepr {
    missions: Vec<MissionRecord>,
}

impl From<MissionRegistry> for RegistryRepr {
    fn from(registry: MissionRegistry) -> Self {
        RegistryRepr {
            missions: registry.missions.into_values().collect(),
        }
    }
}

impl TryFrom<RegistryRepr> for MissionRegistry {
    type Error = String;

    fn try_from(repr: RegistryRepr) -> Result<Self, Self::Error> {
        let mut registry = MissionRegistry::new(Tunables::default());
        for record in repr.missions {
            let agent = record.agent;
            if !registry.restore(record) {
                return Err(format!("{agent} has more than one mission"));
            }
        }
        Ok(registry)
    }
}

impl Default for MissionRegistry {
    fn default() -> Self {
        Self::new(Tunables::default())
    }
}

impl MissionRegistry {
    pub fn new(tunables: Tunables) -> Self {
        Self {
            missions: BTreeMap::new(),
            tunables,
        }
    }

    pub fn tunables(&self) -> &Tunables {
        &self.tunables
    }

    /// Swap tunables between ticks, e.g. after the player edits settings.
    pub fn set_tunables(&mut self, tunables: Tunables) {
        self.tunables = tunables;
    }

    pub fn with_tunables(mut self, tunables: Tunables) -> Self {
        self.tunables = tunables;
        self
    }

    /// True iff `agent` has a mission in flight.
    pub fn is_busy(&self, agent: ActorId) -> bool {
        self.missions.contains_key(&agent)
    }

    pub fn mission(&self, agent: ActorId) -> Option<&MissionRecord> {
        self.missions.get(&agent)
    }

    /// Missions in agent-id order.
    pub fn missions(&self) -> impl Iterator<Item = &MissionRecord> {
        self.missions.values()
    }

    pub fn len(&self) -> usize {
        self.missions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.missions.is_empty()
    }

    /// Put a persisted record back. Returns `false` (and changes nothing) if
    /// its agent already has a mission.
    pub fn restore(&mut self, record: MissionRecord) -> bool {
        if self.missions.contains_key(&record.agent) {
            return false;
        }
        self.missions.insert(record.agent, record);
        true
    }

    /// Send `agent` from the player's party to `target`.
    ///
    /// The agent leaves the roster and is disabled until it comes home. A busy
    /// agent is left untouched.
    pub fn deploy(
        &mut self,
        campaign: &mut dyn Campaign,
        agent: ActorId,
        target: LocationId,
    ) -> DeployOutcome {
        if self.is_busy(agent) {
            tracing::debug!(%agent, "deploy ignored, agent already on a mission");
            return DeployOutcome::AlreadyBusy;
        }
        if agent == campaign.player() {
            return DeployOutcome::Rejected {
                reason: "the player cannot be sent on a mission".to_string(),
            };
        }
        if !campaign.is_alive(agent) {
            return DeployOutcome::Rejected {
                reason: format!("{agent} does not exist or is not alive"),
            };
        }
        let Some(distance) = campaign.distance_to_player(target) else {
            return DeployOutcome::Rejected {
                reason: format!("{target} does not exist"),
            };
        };

        let travel_days = if distance < ARRIVAL_DISTANCE {
            0
        } else {
            self.tunables.travel_days(distance)
        };

        campaign.remove_from_roster(agent);
        campaign.set_activity(agent, ActivityState::Disabled);

        let record = MissionRecord::new(agent, target, travel_days);
        tracing::debug!(
            %agent,
            %target,
            phase = record.phase.name(),
            remaining = record.phase.remaining(),
            "mission deployed"
        );
        self.missions.insert(agent, record);

        let kind = if travel_days == 0 {
            NoticeKind::SlippedIn
        } else {
            NoticeKind::Departed { days: travel_days }
        };
        DeployOutcome::Deployed(Notification::new(agent, target, kind))
    }
}

impl SimSystem for MissionRegistry {
    fn name(&self) -> &str {
        "missions"
    }

    fn tick(&mut self, ctx: &mut TickContext) {
        // Snapshot first: records are removed only after every agent has had its turn.
        let agents: Vec<ActorId> = self.missions.keys().copied().collect();
        let mut finished = Vec::new();

        for agent in agents {
            let Some(record) = self.missions.get_mut(&agent) else {
                continue;
            };
            if advance_mission(record, &self.tunables, ctx) == Step::Finished {
                finished.push(agent);
            }
        }

        for agent in finished {
            self.missions.remove(&agent);
        }
    }
}
