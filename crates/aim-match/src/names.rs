//! Descriptive-name synthesis for rows lacking an identity label.

use std::collections::BTreeMap;

/// Fixed placeholder for rows where nothing identifying is mapped.
pub const UNKNOWN_DEVICE_NAME: &str = "Unknown Device";

/// Synthesizes a human-readable identity string for one data row.
///
/// `mappings` is field-key → column-index; only non-empty cells count as
/// present. Composition priority:
///
/// 1. model + serial present → exactly `"{model} - {serial}"`, the canonical
///    identity format for inventory devices;
/// 2. otherwise, in order: model, manufacturer, product number (only when
///    distinct from the model), type, serial (only when the model is absent);
/// 3. `"Asset {tag}"` when nothing composed but an asset tag is present;
/// 4. a literal name-like field (`name`, then `deviceName`);
/// 5. [`UNKNOWN_DEVICE_NAME`].
pub fn generate_smart_name(row: &[String], mappings: &BTreeMap<String, usize>) -> String {
    let value = |key: &str| mapped_value(row, mappings, key);

    let model = value("modelId");
    let serial = value("serialNumber");

    if let (Some(model), Some(serial)) = (model, serial) {
        return format!("{model} - {serial}");
    }

    let mut parts: Vec<&str> = Vec::new();
    if let Some(model) = model {
        parts.push(model);
    }
    if let Some(manufacturer) = value("manufacturer") {
        parts.push(manufacturer);
    }
    if let Some(product) = value("productNumber")
        && model.is_none_or(|model| !model.eq_ignore_ascii_case(product))
    {
        parts.push(product);
    }
    if let Some(device_type) = value("deviceType") {
        parts.push(device_type);
    }
    if model.is_none()
        && let Some(serial) = serial
    {
        parts.push(serial);
    }
    if !parts.is_empty() {
        return parts.join(" ");
    }

    if let Some(tag) = value("assetTag") {
        return format!("Asset {tag}");
    }

    for key in ["name", "deviceName"] {
        if let Some(name) = value(key) {
            return name.to_string();
        }
    }

    UNKNOWN_DEVICE_NAME.to_string()
}

/// The mapped, non-empty cell for a field key, if any.
fn mapped_value<'a>(
    row: &'a [String],
    mappings: &BTreeMap<String, usize>,
    key: &str,
) -> Option<&'a str> {
    let column = *mappings.get(key)?;
    let cell = row.get(column)?.trim();
    if cell.is_empty() { None } else { Some(cell) }
}
