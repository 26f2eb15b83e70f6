//! Address geocoding and `GeoJSON` output for inspection results.

pub mod client;
pub mod error;
pub mod feature;
pub mod types;

pub use client::{GeocodedAddress, GoogleGeocoder};
pub use error::GeocodeError;
pub use feature::{
    address_for, feature_properties, geojson_for_record, to_feature, Feature, FeatureCollection,
    Geometry, PROPERTY_FIELDS,
};
