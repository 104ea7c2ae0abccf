#[macro_use]
mod macros;

pub mod actor;
pub mod location;
pub mod mission;
pub mod notification;

pub use actor::ActivityState;
pub use location::{LocationKind, LocationStats};
pub use mission::{MissionPhase, MissionRecord, ON_SITE_DAYS};
pub use notification::{NoticeKind, Notification, Tone};
