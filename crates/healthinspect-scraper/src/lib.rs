//! Extraction pipeline for the King County food-safety inspection results page.
//!
//! The page embeds one `div` per restaurant whose `id` looks like
//! `PR0001234~`. Each block holds a two-column metadata table and a nested
//! table of inspection events; [`pipeline::results_from_page`] turns a fetched
//! page into scored [`healthinspect_core::ResultRecord`]s.

pub mod client;
pub mod document;
pub mod dom;
pub mod error;
pub mod fixture;
pub mod locate;
pub mod metadata;
pub mod pipeline;
pub mod rows;
pub mod scores;

pub use client::{inspection_params, InspectionClient, RawPage, DEFAULT_PARAMS};
pub use document::parse_document;
pub use dom::ElementLike;
pub use error::ScraperError;
pub use fixture::{load_fixture, FIXTURE_ENCODING};
pub use locate::find_listings;
pub use metadata::extract_metadata;
pub use pipeline::{results_from_page, run, ResultOptions, ResultStream};
pub use rows::{clean_cell_text, is_inspection_row, is_metadata_row};
pub use scores::aggregate_scores;
