//! Domain types for the PetFriends API.
//!
//! The server owns the pet schema. These types only describe the fields the
//! client and the test suite read; anything else the server sends is kept in
//! `Pet::extra` untouched.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Query value selecting the caller's own pets.
pub const MY_PETS: &str = "my_pets";

/// Server-issued key required on every authenticated endpoint.
///
/// Opaque to the client: it is never refreshed, cached or validated.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthKey {
    pub key: String,
}

impl AuthKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.key.chars().take(4).collect();
        f.debug_struct("AuthKey")
            .field("key", &format!("{}…", prefix))
            .finish()
    }
}

/// Which pets `GET api/pets` should return.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PetFilter {
    /// Every pet visible to the account.
    #[default]
    All,
    /// Pets owned by the authenticated user.
    MyPets,
    /// Sent verbatim; the server decides what it means.
    Other(String),
}

impl PetFilter {
    pub fn as_query_value(&self) -> &str {
        match self {
            Self::All => "",
            Self::MyPets => MY_PETS,
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for PetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            other => write!(f, "{}", other.as_query_value()),
        }
    }
}

impl FromStr for PetFilter {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "" | "all" => Self::All,
            MY_PETS => Self::MyPets,
            raw => Self::Other(raw.to_string()),
        })
    }
}

impl From<&str> for PetFilter {
    fn from(s: &str) -> Self {
        let Ok(filter) = s.parse::<Self>();
        filter
    }
}

/// A pet record as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub animal_type: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub age: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pet_photo: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Pet {
    pub fn has_photo(&self) -> bool {
        self.pet_photo.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// Response from GET api/pets
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PetList {
    pub pets: Vec<Pet>,
}

impl PetList {
    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn first(&self) -> Option<&Pet> {
        self.pets.first()
    }

    pub fn find(&self, id: &str) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.pets.iter().any(|p| p.name == name)
    }
}

// The server has been seen returning age both as "3" and as 3.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for age, got {}",
            other
        ))),
    }
}
