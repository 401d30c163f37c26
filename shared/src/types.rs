use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ========== HOUSE ==========
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum House {
    Gryffindor,
    Slytherin,
    Ravenclaw,
    Hufflepuff,
}

impl House {
    pub const ALL: [House; 4] = [
        House::Gryffindor,
        House::Slytherin,
        House::Ravenclaw,
        House::Hufflepuff,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            House::Gryffindor => "Gryffindor",
            House::Slytherin => "Slytherin",
            House::Ravenclaw => "Ravenclaw",
            House::Hufflepuff => "Hufflepuff",
        }
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown house: {0:?}")]
pub struct UnknownHouse(pub String);

/// Exact, case-sensitive match against the four house names.
impl FromStr for House {
    type Err = UnknownHouse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        House::ALL
            .into_iter()
            .find(|house| house.as_str() == s)
            .ok_or_else(|| UnknownHouse(s.to_string()))
    }
}

// ========== USER ==========
/// A persisted user record, keyed by email.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub hogwarts_house: House,
    pub email: String,
    pub updated_at: String,
}

/// Request body for POST and PUT. Every field is optional on the wire;
/// the handlers decide what is required.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub hogwarts_house: Option<String>,
    pub email: Option<String>,
    pub updated_at: Option<String>,
    pub last_updated: Option<String>, // legacy alias for updatedAt, PUT only
}
