// src/models/mod.rs

//! Domain models for the extractor.

mod config;
mod interview;
mod review;

pub use config::{Config, FetchConfig, OutputConfig};
pub use interview::Interview;
pub use review::Review;
