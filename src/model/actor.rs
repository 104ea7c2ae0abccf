use serde::{Deserialize, Serialize};

/// Whether an actor is in play, withdrawn from play, or held captive.
///
/// Agents on a mission are `Disabled` until they come home. Only an `Active`
/// actor can legally be taken prisoner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ActivityState {
    Active,
    Disabled,
    Prisoner,
}

string_enum!(ActivityState {
    Active => "active",
    Disabled => "disabled",
    Prisoner => "prisoner",
});
