#![allow(dead_code)]

use agent_missions::scenario::{FixedRoll, Scenario};
use agent_missions::{ActorId, LocationId};

pub struct MixedSetup {
    pub scenario: Scenario,
    pub traveling: ActorId,
    pub infiltrating: ActorId,
    pub returning: ActorId,
    pub near: LocationId,
    pub far: LocationId,
}

/// Three agents, one in each phase, with nonzero damage totals on two of them.
pub fn mixed_missions() -> MixedSetup {
    let mut scenario = Scenario::new().rolls(FixedRoll::highest());
    let traveling = scenario.agent("Traveler").skill(45.0).id();
    let infiltrating = scenario.agent("Mole").skill(70.0).id();
    let returning = scenario.agent("Courier").skill(55.0).id();
    let near = scenario.town("Near").food(250.0).id();
    let far = scenario.town("Far").at(450.0, 0.0).id();
    let other = scenario.town("Other").at(0.0, 0.0).id();

    scenario.deploy(traveling, far);
    scenario.deploy(infiltrating, near);
    scenario.deploy(returning, other);
    scenario.tick();

    // Push the courier's target into the player's faction so it turns back,
    // with the player far enough away that the journey home takes a while.
    let ours = scenario.campaign.player_faction;
    scenario.campaign.location_mut(other).owner = ours;
    scenario.campaign.move_player((180.0, 0.0));
    scenario.tick();

    MixedSetup {
        scenario,
        traveling,
        infiltrating,
        returning,
        near,
        far,
    }
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}
