//! Service layer for record extraction.
//!
//! This module contains:
//! - The list driver and its `RecordParser` seam (`list`)
//! - Interview parsing (`InterviewParser`)
//! - Review parsing (`ReviewParser`)

pub mod interviews;
pub mod list;
pub mod reviews;

pub use interviews::{InterviewParser, parse_interviews};
pub use list::{RecordParser, extract_list};
pub use reviews::{ReviewParser, parse_reviews};
