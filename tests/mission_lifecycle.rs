use agent_missions::campaign::MemoryCampaign;
use agent_missions::missions::{MissionRegistry, eligible_agents};
use agent_missions::model::{LocationKind, LocationStats};
use agent_missions::scenario::{FixedRoll, Scenario};
use agent_missions::sim::{SimConfig, SimSystem, TickContext, dispatch_systems, run};
use agent_missions::{ActivityState, Campaign, DeployOutcome, NoticeKind, Tunables};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn rival_town(campaign: &mut MemoryCampaign, x: f64, security: f64) -> agent_missions::LocationId {
    let rival = campaign.add_faction();
    campaign.add_location(
        "Varcheg",
        LocationKind::Town,
        (x, 0.0),
        LocationStats::new(security, 60.0, 300.0),
        rival,
    )
}

#[test]
fn full_mission_through_the_day_runner() {
    let mut campaign = MemoryCampaign::new("Player");
    let agent = campaign.add_companion("Ira", 80.0, 90);
    let town = rival_town(&mut campaign, 150.0, 20.0);
    let mut registry = MissionRegistry::new(Tunables::default());
    assert!(matches!(
        registry.deploy(&mut campaign, agent, town),
        DeployOutcome::Deployed(_)
    ));

    let mut systems: Vec<Box<dyn SimSystem>> = vec![Box::new(registry)];
    let mut rng = FixedRoll::highest();
    let mut kinds = Vec::new();
    for day in 1..=11 {
        for notice in dispatch_systems(&mut campaign, &mut systems, &mut rng, day) {
            kinds.push((day, notice.kind));
        }
    }

    assert_eq!(kinds.len(), 3, "{kinds:?}");
    assert_eq!(kinds[0], (3, NoticeKind::Arrived));
    assert_eq!(kinds[1], (8, NoticeKind::ReturnStarted { days: 3 }));
    let (day, last) = &kinds[2];
    assert_eq!(*day, 11);
    let NoticeKind::Returned {
        food_destroyed,
        loyalty_lost,
    } = last
    else {
        panic!("expected a return report, got {last:?}");
    };
    assert!(*food_destroyed > 0);
    // Five days at 1 + 80/100 each.
    assert!((loyalty_lost - 9.0).abs() < 1e-9, "{loyalty_lost}");

    assert!(campaign.roster_contains(agent));
    assert_eq!(campaign.activity(agent), Some(ActivityState::Active));
    assert_eq!(campaign.actors[&agent].xp, 800);
    let stats = campaign.location_stats(town).unwrap();
    assert!((stats.loyalty - 51.0).abs() < 1e-9);
    assert!((stats.security - 11.0).abs() < 1e-9);
    assert!(stats.food_stock < 300.0);
}

#[test]
fn seeded_runs_are_reproducible() {
    fn once() -> Vec<agent_missions::Notification> {
        let mut campaign = MemoryCampaign::new("Player");
        let a = campaign.add_companion("A", 35.0, 90);
        let b = campaign.add_companion("B", 60.0, 90);
        let town = rival_town(&mut campaign, 90.0, 60.0);
        let mut registry = MissionRegistry::default();
        registry.deploy(&mut campaign, a, town);
        registry.deploy(&mut campaign, b, town);
        let mut systems: Vec<Box<dyn SimSystem>> = vec![Box::new(registry)];
        run(&mut campaign, &mut systems, SimConfig::new(20, 7))
    }

    assert_eq!(once(), once());
}

#[test]
fn certain_capture_ends_in_prison() {
    let mut campaign = MemoryCampaign::new("Player");
    let agent = campaign.add_companion("Ira", 10.0, 90);
    // Risk = 200 * 1.2 - 10 = 230%: every roll catches.
    let town = rival_town(&mut campaign, 0.0, 200.0);
    let jailer = campaign.controlling_party(town).unwrap();
    let mut registry = MissionRegistry::default();
    registry.deploy(&mut campaign, agent, town);
    let mut systems: Vec<Box<dyn SimSystem>> = vec![Box::new(registry)];

    let notices = run(&mut campaign, &mut systems, SimConfig::new(10, 99));

    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].kind, NoticeKind::Captured { jailer });
    assert_eq!(campaign.activity(agent), Some(ActivityState::Prisoner));
    assert!(!campaign.roster_contains(agent));
    assert_eq!(campaign.prisoners[&jailer], vec![agent]);
}

#[test]
fn risk_fifty_catches_on_low_roll_only() {
    // security 50, skill 10, multiplier 1.0 -> 50% risk
    let mut caught = Scenario::new().rolls(FixedRoll::lowest());
    let agent = caught.agent("Ira").skill(10.0).id();
    let town = caught.town("Sargot").security(50.0).id();
    caught.deploy(agent, town);
    caught.tick();
    assert_eq!(caught.campaign.activity(agent), Some(ActivityState::Prisoner));

    let mut spared = Scenario::new().rolls(FixedRoll::highest());
    let agent = spared.agent("Ira").skill(10.0).id();
    let town = spared.town("Sargot").security(50.0).id();
    spared.deploy(agent, town);
    spared.tick();
    assert!(spared.registry.is_busy(agent));
    assert_eq!(spared.campaign.activity(agent), Some(ActivityState::Disabled));
}

#[test]
fn returned_agent_is_eligible_again() {
    let mut s = Scenario::new().rolls(FixedRoll::highest());
    let agent = s.agent("Ira").skill(60.0).id();
    let town = s.town("Sargot").id();
    s.deploy(agent, town);
    assert!(eligible_agents(&s.campaign, &s.registry).is_empty());

    // Player waits inside the target, so the agent walks straight back out.
    s.campaign.enter_location(town);
    s.run(5);

    assert!(!s.registry.is_busy(agent));
    assert_eq!(eligible_agents(&s.campaign, &s.registry), vec![agent]);
    assert!(matches!(s.deploy(agent, town), DeployOutcome::Deployed(_)));
}

#[test]
fn missions_are_independent_of_each_other() {
    let mut s = Scenario::new().rolls(FixedRoll::highest());
    let fast = s.agent("Fast").id();
    let slow = s.agent("Slow").id();
    let near = s.town("Near").at(40.0, 0.0).id();
    let far = s.town("Far").at(400.0, 0.0).id();
    s.deploy(fast, near);
    s.deploy(slow, far);

    let notices = s.run(1);
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].actor, fast);
    assert_eq!(notices[0].kind, NoticeKind::Arrived);

    // Besieging one target touches only the mission aimed at it.
    s.campaign.location_mut(near).under_siege = true;
    let notices = s.run(1);
    assert_eq!(notices[0].actor, fast);
    assert_eq!(notices[0].kind, NoticeKind::Aborted);
    assert!(
        !s.registry
            .mission(slow)
            .unwrap()
            .phase
            .is_returning()
    );
}

#[test]
fn countdown_never_increases_within_a_phase() {
    let mut s = Scenario::new().rolls(FixedRoll::highest());
    let agent = s.agent("Ira").id();
    let town = s.town("Sargot").at(700.0, 0.0).id();
    s.deploy(agent, town);

    let mut last = s.registry.mission(agent).unwrap().phase;
    let mut resets = 0;
    for _ in 0..40 {
        s.tick();
        let Some(record) = s.registry.mission(agent) else {
            break;
        };
        let phase = record.phase;
        if std::mem::discriminant(&phase) == std::mem::discriminant(&last) {
            assert_eq!(phase.remaining(), last.remaining() - 1);
        } else {
            resets += 1;
        }
        last = phase;
    }
    assert_eq!(resets, 2, "traveling -> infiltrating -> returning");
    assert!(!s.registry.is_busy(agent));
}

#[test]
fn host_ticks_registry_directly_and_deploys_between_days() {
    let mut campaign = MemoryCampaign::new("Player");
    let first = campaign.add_companion("Ira", 60.0, 90);
    let second = campaign.add_companion("Bors", 60.0, 90);
    let town = rival_town(&mut campaign, 100.0, 10.0);
    let mut registry = MissionRegistry::default();
    let mut rng = SmallRng::seed_from_u64(3);
    registry.deploy(&mut campaign, first, town);

    let mut notices = Vec::new();
    for day in 1..=2 {
        if day == 2 {
            assert!(registry.is_busy(first));
            assert!(!registry.is_busy(second));
            registry.deploy(&mut campaign, second, town);
        }
        let mut ctx = TickContext {
            campaign: &mut campaign,
            rng: &mut rng,
            notifications: &mut notices,
            day,
        };
        registry.tick(&mut ctx);
    }

    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].actor, first);
    assert_eq!(notices[0].kind, NoticeKind::Arrived);
    assert_eq!(
        registry.mission(second).unwrap().phase,
        agent_missions::MissionPhase::Traveling { remaining: 1 }
    );
}
