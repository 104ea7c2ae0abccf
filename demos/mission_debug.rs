use agent_missions::campaign::MemoryCampaign;
use agent_missions::config::JsonFileTunables;
use agent_missions::missions::{MissionRegistry, check_target, eligible_agents};
use agent_missions::model::{LocationKind, LocationStats};
use agent_missions::sim::{SimConfig, SimSystem, run};
use agent_missions::{Campaign, DeployOutcome, Tunables, TunablesProvider};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut campaign = MemoryCampaign::new("Player");
    let rival = campaign.add_faction();
    campaign.add_companion("Ira", 75.0, 90);
    campaign.add_companion("Bors", 35.0, 70);
    campaign.add_companion("Tam", 20.0, 100);
    let sargot = campaign.add_location(
        "Sargot",
        LocationKind::Town,
        (180.0, 40.0),
        LocationStats::new(45.0, 70.0, 400.0),
        rival,
    );
    let ortongard = campaign.add_location(
        "Ortongard",
        LocationKind::Castle,
        (60.0, -90.0),
        LocationStats::new(80.0, 55.0, 150.0),
        rival,
    );

    // Optional overrides; a missing or bad file logs a warning and uses defaults.
    let provider = JsonFileTunables::new("mission_tunables.json");
    let tunables = Tunables::resolve(Some(&provider as &dyn TunablesProvider));
    let mut registry = MissionRegistry::new(tunables);

    let agents = eligible_agents(&campaign, &registry);
    eprintln!("Eligible agents: {}", agents.len());
    for (agent, target) in agents.into_iter().zip([sargot, ortongard]) {
        if let Err(rejection) = check_target(&campaign, target) {
            eprintln!("{target}: {rejection}");
            continue;
        }
        match registry.deploy(&mut campaign, agent, target) {
            DeployOutcome::Deployed(notice) => eprintln!("day 0: {notice}"),
            other => eprintln!("{agent}: {other:?}"),
        }
    }

    let mut systems: Vec<Box<dyn SimSystem>> = vec![Box::new(registry)];
    let notices = run(&mut campaign, &mut systems, SimConfig::new(30, 42));
    for notice in &notices {
        eprintln!("[{:?}] {notice}", notice.tone());
    }

    for location in [sargot, ortongard] {
        if let Some(stats) = campaign.location_stats(location) {
            eprintln!(
                "{location}: security={:.1} loyalty={:.1} food={:.1}",
                stats.security, stats.loyalty, stats.food_stock
            );
        }
    }
    eprintln!("Roster: {:?}", campaign.roster());
}
