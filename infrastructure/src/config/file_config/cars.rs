//! Car catalogue from TOML (`[[cars]]` entries)

use derby_domain::{Car, ConfigIssue, ConfigIssueCode, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One `[[cars]]` entry
///
/// # Example
///
/// ```toml
/// [[cars]]
/// id = "2"
/// number = 2
/// owner = "Jane Doe"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCarConfig {
    /// Id used in `POST /vote/{id}`
    pub id: String,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub owner: Option<String>,
}

impl FileCarConfig {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            number: None,
            owner: None,
        }
    }
}

/// Convert entries to cars, skipping unusable ids and later duplicates.
pub fn parse_cars(entries: &[FileCarConfig]) -> (Vec<Car>, Vec<ConfigIssue>) {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();
    let mut cars = Vec::new();

    for entry in entries {
        let id = match ItemId::new(entry.id.clone()) {
            Ok(id) => id,
            Err(e) => {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::InvalidCarId {
                        value: entry.id.clone(),
                    },
                    format!("cars: {}, entry skipped", e),
                ));
                continue;
            }
        };
        if !seen.insert(id.clone()) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::DuplicateCar { id: id.to_string() },
                format!("cars: duplicate id '{}', later entry skipped", id),
            ));
            continue;
        }

        let mut car = Car::new(id);
        car.number = entry.number;
        car.owner = entry.owner.clone();
        cars.push(car);
    }

    if cars.is_empty() {
        issues.push(ConfigIssue::warning(
            ConfigIssueCode::NoCars,
            "no cars configured; add [[cars]] entries or pass --car",
        ));
    }

    (cars, issues)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cars_keeps_order() {
        let entries = vec![
            FileCarConfig {
                id: "3".to_string(),
                number: Some(3),
                owner: Some("Mike Johnson".to_string()),
            },
            FileCarConfig::new("1"),
        ];
        let (cars, issues) = parse_cars(&entries);
        assert!(issues.is_empty());
        assert_eq!(cars.len(), 2);
        assert_eq!(cars[0].display_name(), "#3 Mike Johnson");
        assert_eq!(cars[1].id.as_str(), "1");
    }

    #[test]
    fn test_parse_cars_skips_bad_entries() {
        let entries = vec![
            FileCarConfig::new("1"),
            FileCarConfig::new(" "),
            FileCarConfig::new("1"),
        ];
        let (cars, issues) = parse_cars(&entries);
        assert_eq!(cars.len(), 1);
        assert_eq!(issues.len(), 2);
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::InvalidCarId { .. }
        ));
        assert_eq!(
            issues[1].code,
            ConfigIssueCode::DuplicateCar {
                id: "1".to_string()
            }
        );
    }

    #[test]
    fn test_no_cars_warns() {
        let (cars, issues) = parse_cars(&[]);
        assert!(cars.is_empty());
        assert_eq!(issues[0].code, ConfigIssueCode::NoCars);
        assert!(!issues[0].is_error());
    }
}
