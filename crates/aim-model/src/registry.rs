//! Canonical field catalog with alias and validation rules.
//!
//! The registry is a flat immutable table of [`CanonicalField`] records plus
//! the value-format validators for the strong identification fields. Matching
//! logic elsewhere treats it as ordinary data: ordered iteration for
//! tie-breaking, key lookup for auto-mapping, validator lookup for header
//! look-ahead.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ModelError, Result};
use crate::field::{CanonicalField, FieldCategory};

/// Keys of fields whose values follow a rigid format. A field is "strong"
/// only when its key is listed here *and* a validator pattern exists for it.
pub const STRONG_FIELD_KEYS: &[&str] = &["assetTag", "serialNumber", "productNumber"];

/// Asset tag format: one letter followed by six digits (e.g. `A048213`).
/// Stored mappings depend on this exact pattern; do not loosen it.
static ASSET_TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]\d{6}$").expect("asset tag pattern"));

/// Serial number format: alphanumeric with dashes, at least five characters.
static SERIAL_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]{5,}$").expect("serial number pattern"));

/// Product number format: alphanumeric with dashes, at least three characters.
static PRODUCT_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]{3,}$").expect("product number pattern"));

fn validator_for(key: &str) -> Option<&'static Regex> {
    match key {
        "assetTag" => Some(&ASSET_TAG_PATTERN),
        "serialNumber" => Some(&SERIAL_NUMBER_PATTERN),
        "productNumber" => Some(&PRODUCT_NUMBER_PATTERN),
        _ => None,
    }
}

/// Immutable catalog of canonical fields.
///
/// Construction checks the registration invariants (unique keys, non-empty
/// alias lists); a violation is a programming defect surfaced as an error so
/// tests can pin it, never a runtime condition.
#[derive(Debug, Clone)]
pub struct FieldRegistry {
    fields: Vec<CanonicalField>,
    by_key: BTreeMap<String, usize>,
}

impl FieldRegistry {
    /// Builds a registry from an ordered field list.
    ///
    /// Registry order is significant: the matcher breaks confidence ties in
    /// favor of the earlier field.
    pub fn new(fields: Vec<CanonicalField>) -> Result<Self> {
        let mut by_key = BTreeMap::new();
        for (index, field) in fields.iter().enumerate() {
            if field.aliases.is_empty() {
                return Err(ModelError::InvalidField {
                    key: field.key.clone(),
                    reason: "field has no aliases".to_string(),
                });
            }
            if by_key.insert(field.key.clone(), index).is_some() {
                return Err(ModelError::InvalidField {
                    key: field.key.clone(),
                    reason: "duplicate field key".to_string(),
                });
            }
        }
        Ok(Self { fields, by_key })
    }

    /// The standard asset inventory catalog.
    pub fn standard() -> &'static FieldRegistry {
        static STANDARD: LazyLock<FieldRegistry> =
            LazyLock::new(|| FieldRegistry::new(standard_fields()).expect("standard catalog"));
        &STANDARD
    }

    /// Fields in registry order.
    pub fn fields(&self) -> &[CanonicalField] {
        &self.fields
    }

    /// Looks up a field by its stable key.
    pub fn get(&self, key: &str) -> Option<&CanonicalField> {
        self.by_key.get(key).map(|index| &self.fields[*index])
    }

    /// True if `key` names a registered field.
    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// True if the field is strong: listed in [`STRONG_FIELD_KEYS`] and
    /// backed by a validator pattern.
    pub fn is_strong(&self, key: &str) -> bool {
        STRONG_FIELD_KEYS.contains(&key) && validator_for(key).is_some() && self.contains(key)
    }

    /// The value-format validator for a field, if it has one.
    pub fn validator(&self, key: &str) -> Option<&'static Regex> {
        if self.contains(key) {
            validator_for(key)
        } else {
            None
        }
    }

    /// True if `value` satisfies the field's strict format.
    ///
    /// Fields without a validator never validate anything; loose fields have
    /// no reliable ground truth to check against.
    pub fn validate_value(&self, key: &str, value: &str) -> bool {
        self.validator(key)
            .is_some_and(|pattern| pattern.is_match(value.trim()))
    }
}

fn standard_fields() -> Vec<CanonicalField> {
    vec![
        CanonicalField::new(
            "assetTag",
            "Asset Tag",
            FieldCategory::Identification,
            &["asset tag", "asset", "tag", "asset id", "asset number", "tag number"],
            "Organization-issued inventory tag",
        ),
        CanonicalField::new(
            "serialNumber",
            "Serial Number",
            FieldCategory::Identification,
            &["serial number", "serial", "serial no", "sn", "serial num"],
            "Manufacturer serial number",
        ),
        CanonicalField::new(
            "productNumber",
            "Product Number",
            FieldCategory::Identification,
            &["product number", "product no", "product id", "part number", "pn", "sku"],
            "Manufacturer product or part number",
        ),
        CanonicalField::new(
            "modelId",
            "Model",
            FieldCategory::Identification,
            &["model", "model id", "model number", "model name"],
            "Device model identifier",
        ),
        CanonicalField::new(
            "manufacturer",
            "Manufacturer",
            FieldCategory::Identification,
            &["manufacturer", "make", "vendor", "brand"],
            "Device manufacturer",
        ),
        CanonicalField::new(
            "name",
            "Name",
            FieldCategory::Identification,
            &["name", "display name", "label"],
            "Human-facing device name",
        ),
        CanonicalField::new(
            "deviceName",
            "Device Name",
            FieldCategory::Identification,
            &["device name", "computer name", "hostname", "machine name"],
            "Configured network or host name",
        ),
        CanonicalField::new(
            "deviceType",
            "Type",
            FieldCategory::Technical,
            &["type", "device type", "category", "form factor"],
            "Device class, e.g. laptop or monitor",
        ),
        CanonicalField::new(
            "operatingSystem",
            "Operating System",
            FieldCategory::Technical,
            &["operating system", "os", "platform"],
            "Installed operating system",
        ),
        CanonicalField::new(
            "status",
            "Status",
            FieldCategory::Status,
            &["status", "state", "condition"],
            "Lifecycle status",
        ),
        CanonicalField::new(
            "location",
            "Location",
            FieldCategory::Location,
            &["location", "site", "room", "building", "office"],
            "Physical location",
        ),
        CanonicalField::new(
            "assignedTo",
            "Assigned To",
            FieldCategory::Tracking,
            &["assigned to", "assignee", "user", "owner", "assigned user"],
            "Current custodian",
        ),
        CanonicalField::new(
            "department",
            "Department",
            FieldCategory::Tracking,
            &["department", "dept", "team", "cost center"],
            "Owning department",
        ),
        CanonicalField::new(
            "purchaseDate",
            "Purchase Date",
            FieldCategory::Admin,
            &["purchase date", "purchased", "acquisition date", "date purchased"],
            "Date of purchase",
        ),
        CanonicalField::new(
            "warrantyExpiry",
            "Warranty Expiry",
            FieldCategory::Admin,
            &["warranty expiry", "warranty", "warranty end", "warranty expiration"],
            "Warranty end date",
        ),
        CanonicalField::new(
            "notes",
            "Notes",
            FieldCategory::Admin,
            &["notes", "comments", "remarks", "description"],
            "Free-form notes",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_constructs() {
        let registry = FieldRegistry::standard();
        assert!(registry.fields().len() >= 16);
        assert!(registry.contains("serialNumber"));
        assert!(registry.get("modelId").is_some());
        assert!(registry.get("nonsense").is_none());
    }

    #[test]
    fn strong_iff_validator_and_listed() {
        let registry = FieldRegistry::standard();
        for field in registry.fields() {
            let listed = STRONG_FIELD_KEYS.contains(&field.key.as_str());
            let has_validator = registry.validator(&field.key).is_some();
            assert_eq!(
                listed,
                registry.is_strong(&field.key),
                "strength mismatch for {}",
                field.key
            );
            assert_eq!(listed, has_validator, "validator mismatch for {}", field.key);
        }
    }

    #[test]
    fn asset_tag_pattern_is_exact() {
        let registry = FieldRegistry::standard();
        assert!(registry.validate_value("assetTag", "A048213"));
        assert!(registry.validate_value("assetTag", "z000001"));
        assert!(!registry.validate_value("assetTag", "A04821"));
        assert!(!registry.validate_value("assetTag", "AA48213"));
        assert!(!registry.validate_value("assetTag", "1048213"));
        assert!(!registry.validate_value("assetTag", "A0482134"));
    }

    #[test]
    fn serial_and_product_patterns_enforce_minimum_lengths() {
        let registry = FieldRegistry::standard();
        assert!(registry.validate_value("serialNumber", "SN-00912"));
        assert!(registry.validate_value("serialNumber", "ABCDE"));
        assert!(!registry.validate_value("serialNumber", "AB12"));
        assert!(!registry.validate_value("serialNumber", "SN 00912"));

        assert!(registry.validate_value("productNumber", "20R1"));
        assert!(registry.validate_value("productNumber", "PN1"));
        assert!(!registry.validate_value("productNumber", "P1"));
    }

    #[test]
    fn loose_fields_never_validate() {
        let registry = FieldRegistry::standard();
        assert!(!registry.validate_value("modelId", "T490"));
        assert!(!registry.validate_value("status", "In Use"));
    }

    #[test]
    fn duplicate_keys_rejected() {
        let fields = vec![
            CanonicalField::new("a", "A", FieldCategory::Admin, &["a"], ""),
            CanonicalField::new("a", "A again", FieldCategory::Admin, &["a2"], ""),
        ];
        assert!(FieldRegistry::new(fields).is_err());
    }

    #[test]
    fn empty_alias_list_rejected() {
        let fields = vec![CanonicalField::new("a", "A", FieldCategory::Admin, &[], "")];
        assert!(FieldRegistry::new(fields).is_err());
    }
}
