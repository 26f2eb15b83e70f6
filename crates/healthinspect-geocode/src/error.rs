use thiserror::Error;

/// Errors returned by the geocoding client.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The geocoding API answered with a status other than `OK` or
    /// `ZERO_RESULTS`.
    #[error("geocoding API error {status}: {message}")]
    Api { status: String, message: String },

    #[error("invalid geocoder URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
