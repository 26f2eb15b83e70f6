use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid inspection URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unknown character encoding \"{0}\"")]
    UnknownEncoding(String),

    #[error("page bytes are not valid {encoding}")]
    Decode { encoding: String },

    #[error("could not read fixture {path}: {source}")]
    Fixture {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
