//! Loads a stored copy of the results page for offline runs.

use std::path::Path;

use crate::client::RawPage;
use crate::error::ScraperError;

/// Encoding stored fixtures are saved in.
pub const FIXTURE_ENCODING: &str = "utf-8";

/// Reads the page stored at `path`.
///
/// # Errors
///
/// Returns [`ScraperError::Fixture`] if the file cannot be read.
pub fn load_fixture(path: &Path) -> Result<RawPage, ScraperError> {
    let body = std::fs::read(path).map_err(|source| ScraperError::Fixture {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = body.len(), "loaded inspection fixture");
    Ok(RawPage {
        body,
        encoding: FIXTURE_ENCODING.to_owned(),
    })
}
