pub mod column;
pub mod error;
pub mod field;
pub mod grid;
pub mod matching;
pub mod registry;

pub use column::{column_index, column_letter};
pub use error::{ModelError, Result};
pub use field::{CanonicalField, FieldCategory};
pub use grid::Grid;
pub use matching::{
    AmbiguousMatch, AutoMappingResult, ColumnCandidate, DetectionCache, FieldMatch, MappedColumn,
    MatchType, SheetMappingConfig, StoredColumnMapping,
};
pub use registry::{FieldRegistry, STRONG_FIELD_KEYS};
