//! Field-identity resolution engine.
//!
//! Turns raw header text and grids of spreadsheet cells into canonical field
//! assignments: similarity scoring, per-header field matching, header-row
//! detection with validated look-ahead, one-to-one auto-mapping, and
//! smart-name synthesis. Every operation is a pure function over its inputs;
//! no I/O, no internal caching, no shared state.

pub mod automap;
pub mod cache;
pub mod detect;
pub mod matcher;
pub mod names;
pub mod similarity;

pub use automap::{AutoMapper, DEFAULT_MAP_CONFIDENCE};
pub use cache::{build_cache, detect_with_cache};
pub use detect::{DEFAULT_SCAN_WINDOW, HeaderDetector, is_decoy_header};
pub use matcher::FieldMatcher;
pub use names::{UNKNOWN_DEVICE_NAME, generate_smart_name};
pub use similarity::{normalize_text, similarity};
