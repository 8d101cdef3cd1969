//! Command execution.

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use tracing::info;

use aim_ingest::{MappingStore, read_grid, read_sheet};
use aim_match::{AutoMapper, FieldMatcher, HeaderDetector, generate_smart_name};
use aim_model::{
    AutoMappingResult, FieldRegistry, SheetMappingConfig, StoredColumnMapping, column_letter,
};

use crate::cli::{DetectArgs, MapArgs, NamesArgs};

/// Header-scan threshold used when showing per-cell matches in `detect`.
const DETECT_PREVIEW_CONFIDENCE: f64 = 0.7;

/// Fields mapped by `names` when the caller does not pick their own.
const DEFAULT_NAME_FIELDS: &[&str] = &[
    "name",
    "deviceName",
    "modelId",
    "manufacturer",
    "productNumber",
    "deviceType",
    "serialNumber",
    "assetTag",
];

fn result_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Prints the canonical field catalog.
pub fn run_fields() -> Result<()> {
    let registry = FieldRegistry::standard();
    let mut table = result_table();
    table.set_header(vec!["Key", "Display Name", "Category", "Strong", "Aliases"]);
    for field in registry.fields() {
        table.add_row(vec![
            field.key.clone(),
            field.display_name.clone(),
            field.category.to_string(),
            if registry.is_strong(&field.key) { "yes" } else { "" }.to_string(),
            field.aliases.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Detects and prints the header row of an export, with per-cell matches.
pub fn run_detect(args: &DetectArgs) -> Result<()> {
    let registry = FieldRegistry::standard();
    let grid = read_grid(&args.file)?;
    let header_row = HeaderDetector::new(registry)
        .with_scan_window(args.scan_window)
        .detect(&grid);

    println!("Header row: {header_row}");
    let matcher = FieldMatcher::new(registry);
    let mut table = result_table();
    table.set_header(vec!["Column", "Header Text", "Field", "Confidence"]);
    if let Some(row) = grid.row(header_row) {
        for (index, cell) in row.iter().enumerate() {
            if cell.trim().is_empty() {
                continue;
            }
            let (field, confidence) =
                match matcher.find_best_match(cell, DETECT_PREVIEW_CONFIDENCE) {
                    Some(found) => (found.field.key, format!("{:.2}", found.confidence)),
                    None => ("-".to_string(), String::new()),
                };
            table.add_row(vec![column_letter(index), cell.clone(), field, confidence]);
        }
    }
    println!("{table}");
    Ok(())
}

/// Auto-maps requested fields against an export and prints the outcome.
pub fn run_map(args: &MapArgs) -> Result<()> {
    let registry = FieldRegistry::standard();
    let table_data = read_sheet(registry, &args.file)?;
    info!(header_row = table_data.header_row, "sheet loaded");

    let mut mapper = AutoMapper::new(registry).with_start_column(args.start_column);
    if let Some(min_confidence) = args.min_confidence {
        mapper = mapper.with_min_confidence(min_confidence);
    }
    let result = mapper.map_fields(&args.fields, &table_data.headers);
    print_mapping(&result);

    if let Some(dir) = &args.save_to {
        let sheet_id = args
            .sheet_id
            .clone()
            .or_else(|| {
                args.file
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
            })
            .context("cannot derive a sheet id from the file path; pass --sheet-id")?;
        let store = MappingStore::new(dir)?;
        let path = store.save(&to_config(registry, &sheet_id, &result))?;
        println!("Saved mapping: {}", path.display());
    }
    Ok(())
}

/// Synthesizes and prints a display name for every data row.
pub fn run_names(args: &NamesArgs) -> Result<()> {
    let registry = FieldRegistry::standard();
    let table_data = read_sheet(registry, &args.file)?;

    let requested: Vec<String> = match &args.fields {
        Some(fields) => fields.clone(),
        None => DEFAULT_NAME_FIELDS.iter().map(|k| (*k).to_string()).collect(),
    };
    let result = AutoMapper::new(registry).map_fields(&requested, &table_data.headers);
    let columns = result.column_by_key();

    let mut table = result_table();
    table.set_header(vec!["Row", "Name"]);
    for (index, row) in table_data.rows.iter().enumerate() {
        table.add_row(vec![
            (table_data.header_row + 1 + index).to_string(),
            generate_smart_name(row, &columns),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn print_mapping(result: &AutoMappingResult) {
    let mut table = result_table();
    table.set_header(vec!["Field", "Column", "Confidence", "Match"]);
    for mapping in &result.mappings {
        table.add_row(vec![
            mapping.field_key.clone(),
            mapping.column_letter.clone(),
            format!("{:.2}", mapping.confidence),
            format!("{:?}", mapping.match_type).to_lowercase(),
        ]);
    }
    println!("{table}");

    if !result.unmatched_fields.is_empty() {
        println!("Unmatched: {}", result.unmatched_fields.join(", "));
    }
    for ambiguous in &result.ambiguous_matches {
        let candidates: Vec<String> = ambiguous
            .candidates
            .iter()
            .map(|c| format!("{} ({:.2})", c.column_letter, c.confidence))
            .collect();
        println!(
            "Ambiguous: {} could be {}",
            ambiguous.field_key,
            candidates.join(" or ")
        );
    }
}

fn to_config(
    registry: &FieldRegistry,
    sheet_id: &str,
    result: &AutoMappingResult,
) -> SheetMappingConfig {
    SheetMappingConfig {
        sheet_id: sheet_id.to_string(),
        mappings: result
            .mappings
            .iter()
            .enumerate()
            .map(|(order, mapping)| StoredColumnMapping {
                column: mapping.column_letter.clone(),
                field: registry
                    .get(&mapping.field_key)
                    .map(|field| field.display_name.clone())
                    .unwrap_or_else(|| mapping.field_key.clone()),
                order: order as u32,
            })
            .collect(),
        unmatched_fields: result.unmatched_fields.clone(),
    }
}
