//! Votable items (derby cars)

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifier of one votable item (Value Object)
///
/// Opaque to the client: it is used verbatim as the `{id}` path segment
/// of `POST /vote/{id}`. Must be non-empty and free of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidItemId(id));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ItemId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

/// A derby car shown next to its vote button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: ItemId,
    /// Race number painted on the car
    pub number: Option<u32>,
    pub owner: Option<String>,
}

impl Car {
    pub fn new(id: ItemId) -> Self {
        Self {
            id,
            number: None,
            owner: None,
        }
    }

    pub fn with_number(mut self, number: u32) -> Self {
        self.number = Some(number);
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Human-readable name, e.g. `#2 Jane Doe`
    ///
    /// Falls back to the item id when the car has no number.
    pub fn display_name(&self) -> String {
        let number = match self.number {
            Some(n) => format!("#{}", n),
            None => format!("Car {}", self.id),
        };
        match &self.owner {
            Some(owner) if !owner.trim().is_empty() => format!("{} {}", number, owner.trim()),
            _ => number,
        }
    }
}
