// src/lib.rs

//! Employer review page extractor.
//!
//! Pulls interview and review records out of employer review pages:
//! [`utils::tree`] finds nodes, [`utils::text`] turns them into clean
//! strings, [`services`] assembles records.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod utils;

pub use error::{AppError, ExtractError, Field, Result};
pub use models::{Interview, Review};
pub use services::{parse_interviews, parse_reviews};
