//! HTTP client for a Google Geocoding API compatible endpoint.
//!
//! Wraps `reqwest` with status-envelope handling: `OK` yields the first
//! result, `ZERO_RESULTS` yields nothing, and every other status surfaces as
//! [`GeocodeError::Api`].

use std::time::Duration;

use healthinspect_core::AppConfig;
use reqwest::{Client, Url};

use crate::error::GeocodeError;
use crate::types::{GeocodeResponse, STATUS_OK, STATUS_ZERO_RESULTS};

/// Best match for an address lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedAddress {
    /// The geocoder's normalized form of the address. May be empty.
    pub formatted_address: String,
    pub lat: f64,
    pub lng: f64,
}

/// Client for the geocoding endpoint.
pub struct GoogleGeocoder {
    client: Client,
    api_key: Option<String>,
    base_url: Url,
}

impl GoogleGeocoder {
    /// Creates a client for the geocoding endpoint at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::InvalidUrl`] if `base_url` does not parse, or
    /// [`GeocodeError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(
        base_url: &str,
        api_key: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let parsed = Url::parse(base_url).map_err(|e| GeocodeError::InvalidUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.map(str::to_owned),
            base_url: parsed,
        })
    }

    /// Creates a client from the geocoder settings in `config`.
    ///
    /// # Errors
    ///
    /// Same as [`GoogleGeocoder::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, GeocodeError> {
        Self::new(
            &config.geocoder_url,
            config.geocoder_api_key.as_deref(),
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Looks up `address` and returns the best match, if any.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::Api`] if the API reports a status other than `OK`
    ///   or `ZERO_RESULTS`.
    /// - [`GeocodeError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeocodeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn geocode(&self, address: &str) -> Result<Option<GeocodedAddress>, GeocodeError> {
        let url = self.build_url(address);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;

        let parsed: GeocodeResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                context: format!("geocode(address={address})"),
                source: e,
            })?;

        match parsed.status.as_str() {
            STATUS_OK => {
                let first = parsed.results.into_iter().next().map(|r| GeocodedAddress {
                    formatted_address: r.formatted_address,
                    lat: r.geometry.location.lat,
                    lng: r.geometry.location.lng,
                });
                tracing::debug!(address, found = first.is_some(), "geocoded address");
                Ok(first)
            }
            STATUS_ZERO_RESULTS => {
                tracing::debug!(address, "geocoder returned no results");
                Ok(None)
            }
            _ => Err(GeocodeError::Api {
                message: parsed
                    .error_message
                    .unwrap_or_else(|| "no error message".to_owned()),
                status: parsed.status,
            }),
        }
    }

    /// Builds the lookup URL. The API key is only sent when configured.
    fn build_url(&self, address: &str) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("address", address);
            if let Some(key) = &self.api_key {
                pairs.append_pair("key", key);
            }
        }
        url
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
