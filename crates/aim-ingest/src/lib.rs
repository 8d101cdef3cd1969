//! Spreadsheet ingestion collaborator: CSV loading, header-resolved sheet
//! extraction, and mapping persistence. The resolution engine itself stays
//! I/O-free; everything that touches the filesystem lives here.

pub mod grid_reader;
pub mod sheet;
pub mod store;

pub use grid_reader::read_grid;
pub use sheet::{SheetTable, read_sheet};
pub use store::MappingStore;
