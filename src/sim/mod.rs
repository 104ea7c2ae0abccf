mod context;
mod runner;
mod system;

pub use context::TickContext;
pub use runner::{SimConfig, dispatch_systems, run};
pub use system::SimSystem;
