//! Pipeline entry points.
//!
//! - `run_extract`: Load a page and extract its interviews or reviews
//! - `run_validate`: Check configuration values

pub mod extract;
pub mod validate;

pub use extract::{Section, Source, extract_section, load_source, run_extract, to_json};
pub use validate::run_validate;
