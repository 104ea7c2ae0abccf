//! The mission lifecycle engine.
//!
//! [`MissionRegistry`] owns every in-flight [`MissionRecord`](crate::model::MissionRecord),
//! at most one per agent. It is driven once per day through [`SimSystem::tick`](crate::sim::SimSystem),
//! which snapshots the active agents, advances each mission independently,
//! and removes finished missions after the pass.

mod advance;
mod eligibility;
mod registry;

pub use advance::{
    MIN_CAPTURE_RISK, RENDEZVOUS_DISTANCE, SECURITY_RISK_WEIGHT, capture_risk, food_damage,
    is_caught,
};
pub use eligibility::{
    MIN_AGENT_HIT_POINTS, MIN_AGENT_SKILL, TargetRejection, check_target, eligible_agents,
};
pub use registry::{ARRIVAL_DISTANCE, DeployOutcome, MissionRegistry};
