use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum LocationKind {
    Town,
    Castle,
    Village,
}

string_enum!(LocationKind {
    Town => "town",
    Castle => "castle",
    Village => "village",
});

/// The mutable numeric stats sabotage works against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationStats {
    pub security: f64,
    pub loyalty: f64,
    pub food_stock: f64,
}

impl LocationStats {
    pub fn new(security: f64, loyalty: f64, food_stock: f64) -> Self {
        Self {
            security,
            loyalty,
            food_stock,
        }
    }
}
