//! Fetch, score and geocode inspection results into a `GeoJSON` map file.

use std::collections::BTreeMap;
use std::path::Path;

use healthinspect_core::{AppConfig, BUSINESS_NAME};
use healthinspect_geocode::{geojson_for_record, FeatureCollection, GoogleGeocoder};
use healthinspect_scraper::{
    load_fixture, results_from_page, InspectionClient, RawPage, ResultOptions,
};

/// Loads the results page from the fixture or the live site.
async fn load_page(
    config: &AppConfig,
    overrides: &BTreeMap<String, String>,
    use_fixture: bool,
) -> anyhow::Result<RawPage> {
    if use_fixture {
        return Ok(load_fixture(&config.fixture_path)?);
    }
    let client = InspectionClient::new(
        &config.inspection_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    Ok(client.fetch_page(overrides).await?)
}

/// Builds the map and writes it to `output`.
///
/// Records that cannot be placed on the map are logged and left out.
///
/// # Errors
///
/// Returns an error if the page cannot be fetched or decoded, a geocoding
/// request fails, or the output file cannot be written.
pub(crate) async fn run_map(
    config: &AppConfig,
    overrides: &BTreeMap<String, String>,
    options: &ResultOptions,
    use_fixture: bool,
    output: &Path,
) -> anyhow::Result<()> {
    let page = load_page(config, overrides, use_fixture).await?;
    let records = results_from_page(&page, options)?;
    let geocoder = GoogleGeocoder::from_config(config)?;

    let mut features = Vec::with_capacity(records.len());
    for record in records {
        let name = record
            .metadata
            .get(BUSINESS_NAME)
            .and_then(|v| v.first())
            .cloned()
            .unwrap_or_default();
        match geojson_for_record(&geocoder, &record).await? {
            Some(feature) => {
                tracing::info!(
                    business = %name,
                    feature = %serde_json::to_string(&feature)?,
                    "mapped listing"
                );
                features.push(feature);
            }
            None => tracing::warn!(business = %name, "listing left off the map"),
        }
    }

    let collection = FeatureCollection::new(features);
    std::fs::write(output, serde_json::to_string(&collection)?)?;
    tracing::info!(
        path = %output.display(),
        features = collection.features.len(),
        "wrote inspection map"
    );
    Ok(())
}
