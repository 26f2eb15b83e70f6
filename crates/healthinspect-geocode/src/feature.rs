//! `GeoJSON` features built from scored inspection records.
//!
//! Each feature is a point at the geocoded business address. Its properties
//! carry a fixed subset of the record's fields, flattened to scalars so map
//! viewers can show them directly.

use healthinspect_core::{
    FieldValue, ResultRecord, ADDRESS, AVERAGE_SCORE, BUSINESS_NAME, HIGH_SCORE,
    TOTAL_INSPECTIONS,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::{GeocodedAddress, GoogleGeocoder};
use crate::error::GeocodeError;

/// Record fields copied into a feature's properties.
pub const PROPERTY_FIELDS: [&str; 5] = [
    BUSINESS_NAME,
    AVERAGE_SCORE,
    TOTAL_INSPECTIONS,
    HIGH_SCORE,
    ADDRESS,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// `[longitude, latitude]`.
    Point { coordinates: [f64; 2] },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    #[must_use]
    pub fn new(features: Vec<Feature>) -> Self {
        Self { features }
    }
}

/// The record's `Address` values joined with single spaces.
///
/// Returns `None` when the record has no address or it is blank.
#[must_use]
pub fn address_for(record: &ResultRecord) -> Option<String> {
    let joined = record.metadata.get(ADDRESS)?.join(" ");
    if joined.trim().is_empty() {
        None
    } else {
        Some(joined)
    }
}

/// Properties for a record's feature.
///
/// Only [`PROPERTY_FIELDS`] present on the record are copied. List values
/// become a single space-joined string. A non-empty `normalized_address`
/// replaces the scraped `Address`.
#[must_use]
pub fn feature_properties(
    record: &ResultRecord,
    normalized_address: Option<&str>,
) -> Map<String, Value> {
    let mut properties = Map::new();
    for (label, value) in record.fields() {
        if !PROPERTY_FIELDS.contains(&label) {
            continue;
        }
        let value = match value {
            FieldValue::Text(values) => Value::String(values.join(" ")),
            FieldValue::Integer(n) => Value::from(n),
            FieldValue::Float(x) => Value::from(x),
        };
        properties.insert(label.to_owned(), value);
    }
    if let Some(address) = normalized_address.filter(|a| !a.is_empty()) {
        properties.insert(ADDRESS.to_owned(), Value::String(address.to_owned()));
    }
    properties
}

/// Point feature for `record` at the geocoded location.
#[must_use]
pub fn to_feature(record: &ResultRecord, geocoded: &GeocodedAddress) -> Feature {
    Feature {
        geometry: Geometry::Point {
            coordinates: [geocoded.lng, geocoded.lat],
        },
        properties: feature_properties(record, Some(&geocoded.formatted_address)),
    }
}

/// Geocodes `record`'s address and builds its feature.
///
/// Returns `Ok(None)` when the record has no address or the geocoder finds
/// no match for it.
///
/// # Errors
///
/// Propagates any [`GeocodeError`] from the lookup.
pub async fn geojson_for_record(
    geocoder: &GoogleGeocoder,
    record: &ResultRecord,
) -> Result<Option<Feature>, GeocodeError> {
    let Some(address) = address_for(record) else {
        tracing::debug!("record has no address, skipping geocode");
        return Ok(None);
    };
    let Some(geocoded) = geocoder.geocode(&address).await? else {
        tracing::warn!(address, "address could not be geocoded");
        return Ok(None);
    };
    Ok(Some(to_feature(record, &geocoded)))
}
