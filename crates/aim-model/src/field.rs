use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category a canonical field belongs to.
///
/// Categories group fields by their role in an inventory sheet and are used
/// for display grouping only; matching never depends on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldCategory {
    /// Fields that identify a device: tags, serials, model names.
    Identification,
    /// Fields that track custody: assignee, department.
    Tracking,
    /// Physical placement: site, room, building.
    Location,
    /// Lifecycle state: in use, in repair, retired.
    Status,
    /// Hardware/software characteristics: type, operating system.
    Technical,
    /// Administrative records: purchase date, warranty, notes.
    Admin,
}

impl FieldCategory {
    /// Returns the canonical category name used in listings and stored configs.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldCategory::Identification => "identification",
            FieldCategory::Tracking => "tracking",
            FieldCategory::Location => "location",
            FieldCategory::Status => "status",
            FieldCategory::Technical => "technical",
            FieldCategory::Admin => "admin",
        }
    }
}

impl fmt::Display for FieldCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "identification" => Ok(FieldCategory::Identification),
            "tracking" => Ok(FieldCategory::Tracking),
            "location" => Ok(FieldCategory::Location),
            "status" => Ok(FieldCategory::Status),
            "technical" => Ok(FieldCategory::Technical),
            "admin" => Ok(FieldCategory::Admin),
            _ => Err(format!("Unknown field category: {s}")),
        }
    }
}

/// A canonical field definition.
///
/// The `key` is the stable identifier used by callers and stored mappings;
/// `display_name` and `aliases` are the textual spellings the matcher
/// compares header cells against. Aliases need not be unique across fields;
/// collisions are resolved at match time, not at registration time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalField {
    pub key: String,
    pub display_name: String,
    pub aliases: Vec<String>,
    pub category: FieldCategory,
    pub description: String,
}

impl CanonicalField {
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        category: FieldCategory,
        aliases: &[&str],
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            aliases: aliases.iter().map(|alias| (*alias).to_string()).collect(),
            category,
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_str() {
        for category in [
            FieldCategory::Identification,
            FieldCategory::Tracking,
            FieldCategory::Location,
            FieldCategory::Status,
            FieldCategory::Technical,
            FieldCategory::Admin,
        ] {
            let parsed: FieldCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!(
            "Identification".parse::<FieldCategory>().unwrap(),
            FieldCategory::Identification
        );
        assert!("observability".parse::<FieldCategory>().is_err());
    }
}
