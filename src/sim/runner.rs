use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use super::context::TickContext;
use super::system::SimSystem;
use crate::campaign::Campaign;
use crate::model::Notification;

/// Configuration for a simulation run.
pub struct SimConfig {
    pub start_day: u32,
    pub num_days: u32,
    pub seed: u64,
}

impl SimConfig {
    pub fn new(num_days: u32, seed: u64) -> Self {
        Self {
            start_day: 1,
            num_days,
            seed,
        }
    }
}

/// Tick every system once, in registration order. Returns the notifications
/// they emitted.
pub fn dispatch_systems(
    campaign: &mut dyn Campaign,
    systems: &mut [Box<dyn SimSystem>],
    rng: &mut dyn RngCore,
    day: u32,
) -> Vec<Notification> {
    let mut notifications = Vec::new();
    for system in systems.iter_mut() {
        let mut ctx = TickContext {
            campaign: &mut *campaign,
            rng: &mut *rng,
            notifications: &mut notifications,
            day,
        };
        system.tick(&mut ctx);
    }
    notifications
}

/// Run the systems for the configured number of days.
///
/// Creates a deterministic RNG from `config.seed`, so the same seed always
/// produces the same run.
///
/// The systems are boxed for the whole run, so nothing can reach a
/// [`MissionRegistry`](crate::missions::MissionRegistry) until it returns. A
/// host that deploys agents or checks `is_busy` between days should keep the
/// registry itself and call [`SimSystem::tick`] on it once per day instead.
pub fn run(
    campaign: &mut dyn Campaign,
    systems: &mut [Box<dyn SimSystem>],
    config: SimConfig,
) -> Vec<Notification> {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut notifications = Vec::new();
    for offset in 0..config.num_days {
        let day = config.start_day + offset;
        notifications.extend(dispatch_systems(campaign, systems, &mut rng, day));
    }
    notifications
}
