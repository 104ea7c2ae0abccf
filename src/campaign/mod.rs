//! The services the mission engine consumes but does not own.
//!
//! A host game implements [`Campaign`] over its own actor and location model.
//! [`MemoryCampaign`] is a small self-contained implementation for tests and demos.

mod memory;

pub use memory::{ActorRecord, LocationRecord, MemoryCampaign};

use crate::id::{ActorId, FactionId, LocationId, PartyId};
use crate::model::{ActivityState, LocationKind, LocationStats};

/// Read/write access to actors, locations and the player's party.
///
/// Lookups on unknown ids return `None`/`false`/zero and mutations on unknown
/// ids are ignored, so a stale id never panics the engine.
pub trait Campaign {
    // -- actors --

    fn actor_exists(&self, actor: ActorId) -> bool;
    fn is_alive(&self, actor: ActorId) -> bool;
    fn activity(&self, actor: ActorId) -> Option<ActivityState>;
    fn set_activity(&mut self, actor: ActorId, state: ActivityState);
    /// Roguery-equivalent skill, 0..=300 in practice.
    fn skill(&self, actor: ActorId) -> f64;
    fn hit_points(&self, actor: ActorId) -> u32;
    fn grant_xp(&mut self, actor: ActorId, amount: u32);

    // -- the player's party --

    fn player(&self) -> ActorId;
    fn player_faction(&self) -> FactionId;
    fn roster(&self) -> Vec<ActorId>;
    fn roster_contains(&self, actor: ActorId) -> bool;
    /// Add exactly one unit of `actor` to the roster.
    fn add_to_roster(&mut self, actor: ActorId);
    /// Remove exactly one unit of `actor` from the roster.
    fn remove_from_roster(&mut self, actor: ActorId);
    /// True when the player's party is inside `location`.
    fn player_at(&self, location: LocationId) -> bool;
    fn distance_to_player(&self, location: LocationId) -> Option<f64>;

    // -- locations --

    fn location_kind(&self, location: LocationId) -> Option<LocationKind>;
    fn location_stats(&self, location: LocationId) -> Option<LocationStats>;
    fn set_location_stats(&mut self, location: LocationId, stats: LocationStats);
    fn is_under_siege(&self, location: LocationId) -> bool;
    fn owner_faction(&self, location: LocationId) -> Option<FactionId>;
    /// The location's own party, if it fields one.
    fn controlling_party(&self, location: LocationId) -> Option<PartyId>;
    fn garrison_party(&self, location: LocationId) -> Option<PartyId>;
    /// Hand `actor` to `jailer` as a prisoner.
    fn take_prisoner(&mut self, jailer: PartyId, actor: ActorId);
}
