//! A small builder for mission setups, shared by unit and integration tests
//! and the demo.

use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::campaign::{ActorRecord, LocationRecord, MemoryCampaign};
use crate::config::Tunables;
use crate::id::{ActorId, FactionId, LocationId};
use crate::missions::{DeployOutcome, MissionRegistry};
use crate::model::{LocationKind, LocationStats, Notification};
use crate::sim::{SimSystem, TickContext};

/// An RNG that returns the same bits forever.
///
/// [`FixedRoll::lowest`] makes every percentage roll come up `0.0`, so any
/// capture check succeeds. [`FixedRoll::highest`] makes it come up just under
/// `100.0`, so capture checks fail unless the risk is effectively certain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRoll(pub u64);

impl FixedRoll {
    pub fn lowest() -> Self {
        Self(0)
    }

    pub fn highest() -> Self {
        Self(u64::MAX)
    }
}

impl RngCore for FixedRoll {
    fn next_u32(&mut self) -> u32 {
        (self.0 >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.0.to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

// -- Builder-style ref types --

/// Typed reference to a companion in a [`Scenario`], enabling chained field mutation.
///
/// Call [`.id()`](AgentRef::id) to terminate the chain and extract the actor ID.
pub struct AgentRef<'a> {
    scenario: &'a mut Scenario,
    id: ActorId,
}

impl AgentRef<'_> {
    fn data_mut(&mut self) -> &mut ActorRecord {
        self.scenario.campaign.actor_mut(self.id)
    }

    pub fn skill(mut self, v: f64) -> Self { self.data_mut().skill = v; self }
    pub fn hit_points(mut self, v: u32) -> Self { self.data_mut().hit_points = v; self }

    /// Terminate the chain and return the actor ID.
    pub fn id(self) -> ActorId { self.id }
}

/// Typed reference to a location in a [`Scenario`], enabling chained field mutation.
///
/// Call [`.id()`](TownRef::id) to terminate the chain and extract the location ID.
pub struct TownRef<'a> {
    scenario: &'a mut Scenario,
    id: LocationId,
}

impl TownRef<'_> {
    fn data_mut(&mut self) -> &mut LocationRecord {
        self.scenario.campaign.location_mut(self.id)
    }

    pub fn at(mut self, x: f64, y: f64) -> Self { self.data_mut().position = (x, y); self }
    pub fn kind(mut self, v: LocationKind) -> Self { self.data_mut().kind = v; self }
    pub fn security(mut self, v: f64) -> Self { self.data_mut().stats.security = v; self }
    pub fn loyalty(mut self, v: f64) -> Self { self.data_mut().stats.loyalty = v; self }
    pub fn food(mut self, v: f64) -> Self { self.data_mut().stats.food_stock = v; self }
    pub fn under_siege(mut self, v: bool) -> Self { self.data_mut().under_siege = v; self }
    pub fn no_party(mut self) -> Self { self.data_mut().party = None; self }

    pub fn owned_by_player(mut self) -> Self {
        let faction = self.scenario.campaign.player_faction;
        self.data_mut().owner = faction;
        self
    }

    /// Terminate the chain and return the location ID.
    pub fn id(self) -> LocationId { self.id }
}

/// A player at the map origin, a rival faction, and an empty mission registry.
///
/// New locations default to a rival town at the origin with security 50,
/// loyalty 60 and 100 food. New companions default to skill 50 and 100 HP.
pub struct Scenario {
    pub campaign: MemoryCampaign,
    pub registry: MissionRegistry,
    pub rival: FactionId,
    rng: Box<dyn RngCore>,
    day: u32,
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}

impl Scenario {
    pub fn new() -> Self {
        let mut campaign = MemoryCampaign::new("Player");
        let rival = campaign.add_faction();
        Self {
            campaign,
            registry: MissionRegistry::new(Tunables::default()),
            rival,
            rng: Box::new(SmallRng::seed_from_u64(42)),
            day: 0,
        }
    }

    /// Replace the RNG with a fixed roll.
    pub fn rolls(mut self, roll: FixedRoll) -> Self {
        self.rng = Box::new(roll);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = Box::new(SmallRng::seed_from_u64(seed));
        self
    }

    pub fn tunables(mut self, tunables: Tunables) -> Self {
        self.registry.set_tunables(tunables);
        self
    }

    pub fn agent(&mut self, name: &str) -> AgentRef<'_> {
        let id = self.campaign.add_companion(name, 50.0, 100);
        AgentRef { scenario: self, id }
    }

    pub fn town(&mut self, name: &str) -> TownRef<'_> {
        let id = self.campaign.add_location(
            name,
            LocationKind::Town,
            (0.0, 0.0),
            LocationStats::new(50.0, 60.0, 100.0),
            self.rival,
        );
        TownRef { scenario: self, id }
    }

    pub fn deploy(&mut self, agent: ActorId, target: LocationId) -> DeployOutcome {
        self.registry.deploy(&mut self.campaign, agent, target)
    }

    /// Advance every mission by one day. Returns the notifications emitted.
    pub fn tick(&mut self) -> Vec<Notification> {
        self.day += 1;
        let mut notifications = Vec::new();
        let mut ctx = TickContext {
            campaign: &mut self.campaign,
            rng: &mut *self.rng,
            notifications: &mut notifications,
            day: self.day,
        };
        self.registry.tick(&mut ctx);
        notifications
    }

    /// Tick `days` times, collecting every notification.
    pub fn run(&mut self, days: u32) -> Vec<Notification> {
        let mut all = Vec::new();
        for _ in 0..days {
            all.extend(self.tick());
        }
        all
    }
}
