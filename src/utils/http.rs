// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use url::Url;

use crate::error::Result;
use crate::models::FetchConfig;

/// Create a configured asynchronous HTTP client.
pub fn create_client(config: &FetchConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Build the request URL, optionally asking for the most recent entries first.
pub fn page_url(target: &str, sort_recent_first: bool) -> Result<Url> {
    let mut url = Url::parse(target)?;
    if sort_recent_first {
        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != "sort.sortType" && key != "sort.ascending")
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .append_pair("sort.sortType", "RD")
            .append_pair("sort.ascending", "false");
    }
    Ok(url)
}

/// Fetch a page body as text. Non-success statuses are errors.
pub async fn fetch_page(client: &reqwest::Client, url: Url) -> Result<String> {
    log::debug!("GET {url}");
    let text = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(text)
}
