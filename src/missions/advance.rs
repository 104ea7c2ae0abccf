//! One day of one mission: phase transitions, capture rolls and sabotage.

use rand::Rng;

use crate::campaign::Campaign;
use crate::config::Tunables;
use crate::model::{ActivityState, MissionPhase, MissionRecord, NoticeKind, Notification, ON_SITE_DAYS};
use crate::sim::TickContext;

/// Capture risk never drops below this many percent.
pub const MIN_CAPTURE_RISK: f64 = 2.0;
pub const SECURITY_RISK_WEIGHT: f64 = 1.2;
/// A returning agent rejoins early once the player is this close to the target.
pub const RENDEZVOUS_DISTANCE: f64 = 5.0;
/// Starting a return closer than this brings the agent home at once.
const NEGLIGIBLE_RETURN_DISTANCE: f64 = 1.0;
/// Share of the current food stock destroyed per day, before skill scaling.
const FOOD_STOCK_FRACTION: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Continue,
    /// The record must be removed at the end of the tick.
    Finished,
}

/// Percent chance per day of being caught.
pub fn capture_risk(security: f64, skill: f64, multiplier: f64) -> f64 {
    ((security * SECURITY_RISK_WEIGHT - skill) * multiplier).max(MIN_CAPTURE_RISK)
}

/// A uniform draw in `[0, 100)` catches the agent iff it lands under `risk`.
pub fn is_caught(risk: f64, draw: f64) -> bool {
    draw < risk
}

/// Food destroyed in one day.
pub fn food_damage(base_food_amount: u32, food_stock: f64, skill_factor: f64) -> f64 {
    (f64::from(base_food_amount) + food_stock * FOOD_STOCK_FRACTION) * (1.0 + skill_factor)
}

/// Advance one mission by one day.
pub(crate) fn advance_mission(
    record: &mut MissionRecord,
    tunables: &Tunables,
    ctx: &mut TickContext,
) -> Step {
    let agent = record.agent;
    let target = record.target;

    if !ctx.campaign.actor_exists(agent) || !ctx.campaign.is_alive(agent) {
        tracing::debug!(%agent, "agent gone, dropping mission");
        return Step::Finished;
    }
    if ctx.campaign.activity(agent) == Some(ActivityState::Prisoner) {
        tracing::debug!(%agent, "agent already imprisoned, dropping mission");
        return Step::Finished;
    }
    if ctx.campaign.location_kind(target).is_none() {
        tracing::warn!(%agent, %target, "mission target vanished, recalling agent");
        finalize_return(record, tunables, ctx.campaign, ctx.notifications);
        return Step::Finished;
    }

    if !record.phase.is_returning() {
        // Something outside the engine may have put the agent back into play.
        if ctx.campaign.activity(agent) != Some(ActivityState::Disabled) {
            ctx.campaign.set_activity(agent, ActivityState::Disabled);
        }

        let player_faction = ctx.campaign.player_faction();
        if ctx.campaign.is_under_siege(target)
            || ctx.campaign.owner_faction(target) == Some(player_faction)
        {
            tracing::debug!(%agent, %target, "target unstable, aborting mission");
            ctx.notifications
                .push(Notification::new(agent, target, NoticeKind::Aborted));
            return start_return(record, tunables, ctx.campaign, ctx.notifications);
        }
    }

    let remaining = record.phase.count_down();

    match record.phase {
        MissionPhase::Traveling { .. } => {
            if remaining <= 0 {
                record.phase = MissionPhase::Infiltrating {
                    remaining: ON_SITE_DAYS,
                };
                tracing::debug!(%agent, %target, day = ctx.day, "agent arrived");
                ctx.notifications
                    .push(Notification::new(agent, target, NoticeKind::Arrived));
            }
            Step::Continue
        }
        MissionPhase::Infiltrating { .. } => {
            if check_for_capture(record, tunables, ctx) {
                return Step::Finished;
            }
            perform_sabotage(record, tunables, ctx.campaign);
            if remaining <= 0 {
                return start_return(record, tunables, ctx.campaign, ctx.notifications);
            }
            Step::Continue
        }
        MissionPhase::Returning { .. } => {
            let rendezvous = ctx
                .campaign
                .distance_to_player(target)
                .is_some_and(|d| d < RENDEZVOUS_DISTANCE);
            if remaining <= 0 || rendezvous {
                finalize_return(record, tunables, ctx.campaign, ctx.notifications);
                return Step::Finished;
            }
            Step::Continue
        }
    }
}

/// Roll for capture. Returns true only if the agent was actually taken prisoner.
fn check_for_capture(record: &MissionRecord, tunables: &Tunables, ctx: &mut TickContext) -> bool {
    let agent = record.agent;
    let target = record.target;
    let security = ctx
        .campaign
        .location_stats(target)
        .map_or(0.0, |stats| stats.security);
    let risk = capture_risk(
        security,
        ctx.campaign.skill(agent),
        tunables.capture_multiplier,
    );
    let draw = ctx.rng.random_range(0.0..100.0);
    if !is_caught(risk, draw) {
        return false;
    }

    // Only an active hero can be imprisoned.
    if ctx.campaign.activity(agent) == Some(ActivityState::Disabled) {
        ctx.campaign.set_activity(agent, ActivityState::Active);
    }

    let jailer = ctx
        .campaign
        .controlling_party(target)
        .or_else(|| ctx.campaign.garrison_party(target));
    match jailer {
        Some(jailer) => {
            ctx.campaign.take_prisoner(jailer, agent);
            tracing::info!(%agent, %target, %jailer, risk, "agent captured");
            ctx.notifications.push(Notification::new(
                agent,
                target,
                NoticeKind::Captured { jailer },
            ));
            true
        }
        None => {
            tracing::warn!(%agent, %target, "capture rolled but no party can hold the agent");
            ctx.campaign.set_activity(agent, ActivityState::Disabled);
            ctx.notifications
                .push(Notification::new(agent, target, NoticeKind::CaptureEvaded));
            false
        }
    }
}

fn perform_sabotage(record: &mut MissionRecord, tunables: &Tunables, campaign: &mut dyn Campaign) {
    let Some(mut stats) = campaign.location_stats(record.target) else {
        return;
    };
    let skill_factor = campaign.skill(record.agent) / 100.0;

    if stats.food_stock > 0.0 {
        let damage = food_damage(tunables.base_food_amount, stats.food_stock, skill_factor);
        stats.food_stock = (stats.food_stock - damage).max(0.0);
        // Truncated per day, as reported to the player.
        record.food_destroyed += damage as i64;
    }

    let unrest = 1.0 + skill_factor;
    stats.loyalty -= unrest;
    stats.security -= unrest;
    record.loyalty_lost += unrest;

    campaign.set_location_stats(record.target, stats);
}

/// Leave the target for home, or arrive at once if the player is right there.
fn start_return(
    record: &mut MissionRecord,
    tunables: &Tunables,
    campaign: &mut dyn Campaign,
    notifications: &mut Vec<Notification>,
) -> Step {
    let agent = record.agent;
    let target = record.target;
    let distance = campaign.distance_to_player(target).unwrap_or(0.0);

    if distance < NEGLIGIBLE_RETURN_DISTANCE || campaign.player_at(target) {
        finalize_return(record, tunables, campaign, notifications);
        return Step::Finished;
    }

    let days = tunables.travel_days(distance).max(1);
    record.phase = MissionPhase::Returning {
        remaining: i32::try_from(days).unwrap_or(i32::MAX),
    };
    if campaign.activity(agent) != Some(ActivityState::Disabled) {
        campaign.set_activity(agent, ActivityState::Disabled);
    }
    tracing::debug!(%agent, %target, days, "agent returning");
    notifications.push(Notification::new(
        agent,
        target,
        NoticeKind::ReturnStarted { days },
    ));
    campaign.grant_xp(agent, tunables.xp_reward);
    Step::Continue
}

/// Put the agent back into the player's party and report the damage done.
///
/// Safe to call more than once: the roster never gains a second unit.
fn finalize_return(
    record: &MissionRecord,
    tunables: &Tunables,
    campaign: &mut dyn Campaign,
    notifications: &mut Vec<Notification>,
) {
    let agent = record.agent;
    if campaign.activity(agent) != Some(ActivityState::Active) {
        campaign.set_activity(agent, ActivityState::Active);
    }
    if !campaign.roster_contains(agent) {
        campaign.add_to_roster(agent);
    }
    // A return that skipped the journey home never got the reward from start_return.
    if !record.phase.is_returning() {
        campaign.grant_xp(agent, tunables.xp_reward);
    }
    tracing::debug!(%agent, food = record.food_destroyed, loyalty = record.loyalty_lost, "agent home");
    notifications.push(Notification::new(
        agent,
        record.target,
        NoticeKind::Returned {
            food_destroyed: record.food_destroyed,
            loyalty_lost: record.loyalty_lost,
        },
    ));
}
