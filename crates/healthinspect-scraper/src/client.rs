//! HTTP client for the King County inspection results page.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::ScraperError;

/// Query parameters the results page expects, with their default values.
///
/// Order matches the search form so request URLs are stable.
pub const DEFAULT_PARAMS: &[(&str, &str)] = &[
    ("Output", "W"),
    ("Business_Name", ""),
    ("Business_Address", ""),
    ("Longitude", ""),
    ("Latitude", ""),
    ("City", ""),
    ("Zip_Code", ""),
    ("Inspection_Type", "All"),
    ("Inspection_Start", ""),
    ("Inspection_End", ""),
    ("Inspection_Closed_Business", "A"),
    ("Violation_Points", ""),
    ("Violation_Red_Points", ""),
    ("Violation_Descr", ""),
    ("Fuzzy_Search", "N"),
    ("Sort", "H"),
];

/// Raw page bytes plus the character encoding they were declared in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPage {
    pub body: Vec<u8>,
    pub encoding: String,
}

/// Overlays `overrides` onto [`DEFAULT_PARAMS`].
///
/// Keys that are not search form fields are dropped.
#[must_use]
pub fn inspection_params(overrides: &BTreeMap<String, String>) -> Vec<(&'static str, String)> {
    for key in overrides.keys() {
        if !DEFAULT_PARAMS.iter().any(|(name, _)| *name == key.as_str()) {
            tracing::debug!(key, "ignoring unknown inspection query parameter");
        }
    }
    DEFAULT_PARAMS
        .iter()
        .map(|&(name, default)| {
            let value = overrides
                .get(name)
                .map_or_else(|| default.to_owned(), Clone::clone);
            (name, value)
        })
        .collect()
}

/// Client for the inspection results search endpoint.
pub struct InspectionClient {
    client: Client,
    base_url: Url,
}

impl InspectionClient {
    /// Creates a client for the results page at `inspection_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidUrl`] if `inspection_url` does not parse,
    /// or [`ScraperError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(
        inspection_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScraperError> {
        let base_url = Url::parse(inspection_url).map_err(|e| ScraperError::InvalidUrl {
            url: inspection_url.to_owned(),
            reason: e.to_string(),
        })?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Fetches the results page for the given search overrides.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] for any non-2xx response.
    /// - [`ScraperError::Http`] on network failure or timeout.
    pub async fn fetch_page(
        &self,
        overrides: &BTreeMap<String, String>,
    ) -> Result<RawPage, ScraperError> {
        let url = self.build_url(overrides);
        tracing::info!(url = %url, "fetching inspection results");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let encoding = response_encoding(
            response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
        );
        let body = response.bytes().await?.to_vec();
        tracing::debug!(bytes = body.len(), encoding, "fetched inspection results");

        Ok(RawPage { body, encoding })
    }

    /// Builds the request URL with percent-encoded search parameters.
    fn build_url(&self, overrides: &BTreeMap<String, String>) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in inspection_params(overrides) {
                pairs.append_pair(name, &value);
            }
        }
        url
    }
}

/// Encoding declared by a response's `Content-Type` header.
///
/// Uses the `charset` parameter when present. `text/*` types without one
/// default to ISO-8859-1 (RFC 2616); anything else is read as UTF-8.
pub(crate) fn response_encoding(content_type: Option<&str>) -> String {
    let Some(content_type) = content_type else {
        return "utf-8".to_owned();
    };
    let mut parts = content_type.split(';');
    let mime = parts.next().unwrap_or_default().trim().to_ascii_lowercase();
    let charset = parts.find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches('"').to_owned())
    });
    match charset {
        Some(charset) if !charset.is_empty() => charset,
        _ if mime.starts_with("text/") => "ISO-8859-1".to_owned(),
        _ => "utf-8".to_owned(),
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
