use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::{ActorId, LocationId, PartyId};

/// How loudly a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Neutral,
    Alert,
    Danger,
    Success,
}

/// An advisory message about one mission. Carries no state the engine reads back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub actor: ActorId,
    pub target: LocationId,
    pub kind: NoticeKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NoticeKind {
    /// Left the player's party for a distant target.
    Departed { days: u32 },
    /// Deployed while already at the target.
    SlippedIn,
    Arrived,
    /// Target came under siege or into the player's faction.
    Aborted,
    /// Capture was rolled but nobody could hold the agent.
    CaptureEvaded,
    Captured { jailer: PartyId },
    ReturnStarted { days: u32 },
    Returned {
        food_destroyed: i64,
        loyalty_lost: f64,
    },
}

impl Notification {
    pub fn new(actor: ActorId, target: LocationId, kind: NoticeKind) -> Self {
        Self {
            actor,
            target,
            kind,
        }
    }

    pub fn tone(&self) -> Tone {
        match self.kind {
            NoticeKind::Departed { .. } | NoticeKind::SlippedIn => Tone::Neutral,
            NoticeKind::Arrived => Tone::Alert,
            NoticeKind::Aborted | NoticeKind::CaptureEvaded | NoticeKind::Captured { .. } => {
                Tone::Danger
            }
            NoticeKind::ReturnStarted { .. } | NoticeKind::Returned { .. } => Tone::Success,
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (agent, target) = (self.actor, self.target);
        match &self.kind {
            NoticeKind::Departed { days } => {
                write!(f, "{agent} departs for {target} ({days} days).")
            }
            NoticeKind::SlippedIn => write!(f, "{agent} slips into {target}..."),
            NoticeKind::Arrived => write!(f, "{agent} arrived at {target}. Sabotage begins."),
            NoticeKind::Aborted => write!(
                f,
                "Mission aborted: {target} is unstable. {agent} is returning."
            ),
            NoticeKind::CaptureEvaded => write!(
                f,
                "{agent} was spotted in {target}, but there was no garrison to make the arrest."
            ),
            NoticeKind::Captured { jailer } => {
                write!(f, "{agent} was captured in {target} and is held by {jailer}.")
            }
            NoticeKind::ReturnStarted { days } => {
                write!(f, "{agent} mission done. Returning ({days} days).")
            }
            NoticeKind::Returned {
                food_destroyed,
                loyalty_lost,
            } => {
                write!(f, "{agent} is back in the party. ")?;
                if *food_destroyed > 0 || *loyalty_lost > 0.0 {
                    write!(
                        f,
                        "Report from {target}: {food_destroyed} food destroyed, {loyalty_lost:.1} loyalty lost."
                    )
                } else {
                    write!(f, "No significant damage was done to {target}.")
                }
            }
        }
    }
}
