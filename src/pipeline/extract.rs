// src/pipeline/extract.rs

//! Record extraction pipeline.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{Config, FetchConfig};
use crate::services::{parse_interviews, parse_reviews};
use crate::utils::http;

/// Which records to extract from a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Section {
    Interviews,
    Reviews,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Interviews => "interviews",
            Section::Reviews => "reviews",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the page comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

/// Read the page HTML from the network or disk.
pub async fn load_source(config: &FetchConfig, source: &Source) -> Result<String> {
    match source {
        Source::Url(target) => {
            let client = http::create_client(config)?;
            let url = http::page_url(target, config.sort_recent_first)?;
            http::fetch_page(&client, url).await
        }
        Source::File(path) => Ok(tokio::fs::read_to_string(path).await?),
    }
}

/// Extract the records of `section` from a page, as JSON.
pub fn extract_section(section: Section, html: &str) -> Result<Value> {
    let value = match section {
        Section::Interviews => serde_json::to_value(parse_interviews(html)?)?,
        Section::Reviews => serde_json::to_value(parse_reviews(html)?)?,
    };
    Ok(value)
}

/// Run the extractor end to end.
pub async fn run_extract(config: &Config, section: Section, source: &Source) -> Result<Value> {
    let html = load_source(&config.fetch, source).await?;
    log::debug!("Loaded {} bytes of HTML", html.len());

    let records = extract_section(section, &html)?;
    let count = records.as_array().map_or(0, Vec::len);
    log::info!("Extracted {count} {section}");

    Ok(records)
}

/// Serialize records, tab-indented when `pretty` is set.
pub fn to_json(value: &Value, pretty: bool) -> Result<String> {
    if !pretty {
        return Ok(serde_json::to_string(value)?);
    }

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| AppError::validation(e.to_string()))
}
