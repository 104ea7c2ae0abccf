use rand::RngCore;

use crate::campaign::Campaign;
use crate::model::Notification;

/// Context passed to each system on every tick.
pub struct TickContext<'a> {
    pub campaign: &'a mut dyn Campaign,
    pub rng: &'a mut dyn RngCore,
    /// Systems push user-facing notifications here.
    pub notifications: &'a mut Vec<Notification>,
    /// Day counter of the driving clock, for log context only.
    pub day: u32,
}
