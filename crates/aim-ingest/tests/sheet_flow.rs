//! Ingestion flow against CSV files on disk.

use std::io::Write;

use aim_ingest::{MappingStore, read_sheet};
use aim_match::AutoMapper;
use aim_model::{FieldRegistry, SheetMappingConfig, StoredColumnMapping, column_index};

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file
}

#[test]
fn csv_with_preamble_resolves_to_mapped_table() {
    let file = write_csv(
        "Asset Inventory,,\n\
         Model,Serial Number,Asset Tag\n\
         T490,SN-00912,A048213\n\
         T14s,SN-11202,A048214\n",
    );

    let registry = FieldRegistry::standard();
    let table = read_sheet(registry, file.path()).expect("read sheet");
    assert_eq!(table.header_row, 1);
    assert_eq!(table.rows.len(), 2);

    let requested: Vec<String> = ["modelId", "serialNumber", "assetTag"]
        .iter()
        .map(|k| (*k).to_string())
        .collect();
    let result = AutoMapper::new(registry).map_fields(&requested, &table.headers);
    assert_eq!(result.mappings.len(), 3);
    assert!(result.unmatched_fields.is_empty());
}

#[test]
fn mapping_survives_a_store_round_trip() {
    let registry = FieldRegistry::standard();
    let file = write_csv("Serial Number,Asset Tag\nSN-00912,A048213\n");
    let table = read_sheet(registry, file.path()).expect("read sheet");

    let requested: Vec<String> = vec!["serialNumber".to_string(), "assetTag".to_string()];
    let result = AutoMapper::new(registry).map_fields(&requested, &table.headers);

    let config = SheetMappingConfig {
        sheet_id: "q3-export".to_string(),
        mappings: result
            .mappings
            .iter()
            .enumerate()
            .map(|(order, mapping)| StoredColumnMapping {
                column: mapping.column_letter.clone(),
                field: registry
                    .get(&mapping.field_key)
                    .expect("mapped keys are registered")
                    .display_name
                    .clone(),
                order: order as u32,
            })
            .collect(),
        unmatched_fields: result.unmatched_fields.clone(),
    };

    let dir = tempfile::tempdir().expect("temp dir");
    let store = MappingStore::new(dir.path()).unwrap();
    store.save(&config).unwrap();
    let loaded = store.load("q3-export").unwrap().expect("saved");

    // Stored letters re-identify the same columns by position.
    for stored in &loaded.mappings {
        let index = column_index(&stored.column).expect("valid letter");
        assert_eq!(
            table.headers[index], stored.field,
            "column {} should still carry {}",
            stored.column, stored.field
        );
    }
}
