use std::collections::BTreeMap;

use super::Campaign;
use crate::id::{ActorId, FactionId, IdGenerator, LocationId, PartyId};
use crate::model::{ActivityState, LocationKind, LocationStats};

#[derive(Debug, Clone, PartialEq)]
pub struct ActorRecord {
    pub name: String,
    pub skill: f64,
    /// Total skill experience granted so far.
    pub xp: u64,
    pub hit_points: u32,
    pub alive: bool,
    pub activity: ActivityState,
    pub held_by: Option<PartyId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationRecord {
    pub name: String,
    pub kind: LocationKind,
    pub position: (f64, f64),
    pub stats: LocationStats,
    pub owner: FactionId,
    pub under_siege: bool,
    pub party: Option<PartyId>,
    pub garrison: Option<PartyId>,
}

/// A flat campaign map: actors, locations, and one player party with a
/// unit-count roster.
#[derive(Debug)]
pub struct MemoryCampaign {
    pub actors: BTreeMap<ActorId, ActorRecord>,
    pub locations: BTreeMap<LocationId, LocationRecord>,
    /// Unit counts per actor in the player's party.
    pub roster: BTreeMap<ActorId, u32>,
    pub prisoners: BTreeMap<PartyId, Vec<ActorId>>,
    pub player: ActorId,
    pub player_faction: FactionId,
    pub player_position: (f64, f64),
    /// The location the player's party is currently inside, if any.
    pub player_location: Option<LocationId>,
    id_gen: IdGenerator,
}

impl MemoryCampaign {
    /// Create a campaign with a player at the map origin.
    pub fn new(player_name: &str) -> Self {
        let mut id_gen = IdGenerator::new();
        let player_faction = FactionId(id_gen.next_id());
        let player = ActorId(id_gen.next_id());
        let mut campaign = Self {
            actors: BTreeMap::new(),
            locations: BTreeMap::new(),
            roster: BTreeMap::new(),
            prisoners: BTreeMap::new(),
            player,
            player_faction,
            player_position: (0.0, 0.0),
            player_location: None,
            id_gen,
        };
        campaign.actors.insert(player, ActorRecord::new(player_name, 0.0, 100));
        campaign.roster.insert(player, 1);
        campaign
    }

    /// Mint a faction id that is not the player's.
    pub fn add_faction(&mut self) -> FactionId {
        FactionId(self.id_gen.next_id())
    }

    /// Add a companion to the player's party. Returns the assigned ID.
    pub fn add_companion(&mut self, name: &str, skill: f64, hit_points: u32) -> ActorId {
        let id = ActorId(self.id_gen.next_id());
        self.actors.insert(id, ActorRecord::new(name, skill, hit_points));
        self.add_to_roster(id);
        id
    }

    /// Add a location with its own controlling party and no garrison.
    pub fn add_location(
        &mut self,
        name: &str,
        kind: LocationKind,
        position: (f64, f64),
        stats: LocationStats,
        owner: FactionId,
    ) -> LocationId {
        let id = LocationId(self.id_gen.next_id());
        let party = PartyId(self.id_gen.next_id());
        self.locations.insert(
            id,
            LocationRecord {
                name: name.to_string(),
                kind,
                position,
                stats,
                owner,
                under_siege: false,
                party: Some(party),
                garrison: None,
            },
        );
        id
    }

    /// Station a garrison in `location`. Returns the garrison's party id.
    ///
    /// # Panics
    /// Panics if `location` does not exist.
    pub fn add_garrison(&mut self, location: LocationId) -> PartyId {
        let party = PartyId(self.id_gen.next_id());
        self.location_mut(location).garrison = Some(party);
        party
    }

    /// # Panics
    /// Panics if `location` does not exist.
    pub fn location_mut(&mut self, location: LocationId) -> &mut LocationRecord {
        self.locations
            .get_mut(&location)
            .unwrap_or_else(|| panic!("location_mut: location {location} not found"))
    }

    /// # Panics
    /// Panics if `actor` does not exist.
    pub fn actor_mut(&mut self, actor: ActorId) -> &mut ActorRecord {
        self.actors
            .get_mut(&actor)
            .unwrap_or_else(|| panic!("actor_mut: actor {actor} not found"))
    }

    /// Move the player's party. Entering a location puts it at that location's position.
    pub fn move_player(&mut self, position: (f64, f64)) {
        self.player_position = position;
        self.player_location = None;
    }

    /// # Panics
    /// Panics if `location` does not exist.
    pub fn enter_location(&mut self, location: LocationId) {
        let position = self
            .locations
            .get(&location)
            .map(|l| l.position)
            .unwrap_or_else(|| panic!("enter_location: location {location} not found"));
        self.player_position = position;
        self.player_location = Some(location);
    }

    pub fn roster_count(&self, actor: ActorId) -> u32 {
        self.roster.get(&actor).copied().unwrap_or(0)
    }

    pub fn kill(&mut self, actor: ActorId) {
        if let Some(record) = self.actors.get_mut(&actor) {
            record.alive = false;
        }
        self.roster.remove(&actor);
    }
}

impl ActorRecord {
    fn new(name: &str, skill: f64, hit_points: u32) -> Self {
        Self {
            name: name.to_string(),
            skill,
            xp: 0,
            hit_points,
            alive: true,
            activity: ActivityState::Active,
            held_by: None,
        }
    }
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

impl Campaign for MemoryCampaign {
    fn actor_exists(&self, actor: ActorId) -> bool {
        self.actors.contains_key(&actor)
    }

    fn is_alive(&self, actor: ActorId) -> bool {
        self.actors.get(&actor).is_some_and(|a| a.alive)
    }

    fn activity(&self, actor: ActorId) -> Option<ActivityState> {
        self.actors.get(&actor).map(|a| a.activity)
    }

    fn set_activity(&mut self, actor: ActorId, state: ActivityState) {
        if let Some(record) = self.actors.get_mut(&actor) {
            record.activity = state;
        }
    }

    fn skill(&self, actor: ActorId) -> f64 {
        self.actors.get(&actor).map_or(0.0, |a| a.skill)
    }

    fn hit_points(&self, actor: ActorId) -> u32 {
        self.actors.get(&actor).map_or(0, |a| a.hit_points)
    }

    fn grant_xp(&mut self, actor: ActorId, amount: u32) {
        if let Some(record) = self.actors.get_mut(&actor) {
            record.xp += u64::from(amount);
        }
    }

    fn player(&self) -> ActorId {
        self.player
    }

    fn player_faction(&self) -> FactionId {
        self.player_faction
    }

    fn roster(&self) -> Vec<ActorId> {
        self.roster.keys().copied().collect()
    }

    fn roster_contains(&self, actor: ActorId) -> bool {
        self.roster_count(actor) > 0
    }

    fn add_to_roster(&mut self, actor: ActorId) {
        *self.roster.entry(actor).or_insert(0) += 1;
    }

    fn remove_from_roster(&mut self, actor: ActorId) {
        if let Some(count) = self.roster.get_mut(&actor) {
            *count -= 1;
            if *count == 0 {
                self.roster.remove(&actor);
            }
        }
    }

    fn player_at(&self, location: LocationId) -> bool {
        self.player_location == Some(location)
    }

    fn distance_to_player(&self, location: LocationId) -> Option<f64> {
        self.locations
            .get(&location)
            .map(|l| distance(l.position, self.player_position))
    }

    fn location_kind(&self, location: LocationId) -> Option<LocationKind> {
        self.locations.get(&location).map(|l| l.kind)
    }

    fn location_stats(&self, location: LocationId) -> Option<LocationStats> {
        self.locations.get(&location).map(|l| l.stats)
    }

    fn set_location_stats(&mut self, location: LocationId, stats: LocationStats) {
        if let Some(record) = self.locations.get_mut(&location) {
            record.stats = stats;
        }
    }

    fn is_under_siege(&self, location: LocationId) -> bool {
        self.locations.get(&location).is_some_and(|l| l.under_siege)
    }

    fn owner_faction(&self, location: LocationId) -> Option<FactionId> {
        self.locations.get(&location).map(|l| l.owner)
    }

    fn controlling_party(&self, location: LocationId) -> Option<PartyId> {
        self.locations.get(&location).and_then(|l| l.party)
    }

    fn garrison_party(&self, location: LocationId) -> Option<PartyId> {
        self.locations.get(&location).and_then(|l| l.garrison)
    }

    fn take_prisoner(&mut self, jailer: PartyId, actor: ActorId) {
        let Some(record) = self.actors.get_mut(&actor) else {
            return;
        };
        record.activity = ActivityState::Prisoner;
        record.held_by = Some(jailer);
        self.roster.remove(&actor);
        self.prisoners.entry(jailer).or_default().push(actor);
    }
}
