pub mod campaign;
pub mod config;
pub mod error;
pub mod flush;
pub mod id;
pub mod missions;
pub mod model;
pub mod scenario;
pub mod sim;

pub use campaign::{Campaign, MemoryCampaign};
pub use config::{Tunables, TunablesProvider};
pub use error::{ConfigError, PersistError};
pub use id::{ActorId, FactionId, IdGenerator, LocationId, PartyId};
pub use missions::{DeployOutcome, MissionRegistry};
pub use model::{ActivityState, MissionPhase, MissionRecord, NoticeKind, Notification, Tone};
pub use sim::{SimConfig, SimSystem, TickContext};
