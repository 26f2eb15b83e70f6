//! Listing → record pipeline: extract, merge, sort, limit.

use healthinspect_core::{ResultRecord, SortKey};

use crate::client::RawPage;
use crate::document::parse_document;
use crate::dom::ElementLike;
use crate::error::ScraperError;
use crate::locate::find_listings;
use crate::metadata::extract_metadata;
use crate::scores::aggregate_scores;

/// How a result set is selected and ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultOptions {
    /// Score field to order by. `None` keeps page order.
    pub sort: Option<SortKey>,
    /// Maximum number of listings taken from the page, and of records yielded.
    pub count: usize,
    /// Order descending instead of ascending.
    pub reverse: bool,
}

impl Default for ResultOptions {
    fn default() -> Self {
        Self {
            sort: Some(SortKey::HighScore),
            count: 5,
            reverse: false,
        }
    }
}

/// Records produced by one pipeline pass. Consumed once.
#[derive(Debug)]
pub struct ResultStream {
    inner: std::iter::Take<std::vec::IntoIter<ResultRecord>>,
}

impl Iterator for ResultStream {
    type Item = ResultRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ResultStream {}

/// Builds the merged record for a single listing.
pub fn build_record<E: ElementLike>(listing: &E) -> ResultRecord {
    ResultRecord::new(extract_metadata(listing), aggregate_scores(listing))
}

/// Turns located listings into an ordered, bounded record stream.
///
/// Only the first `options.count` listings (page order) are considered; the
/// sort runs over that subset, so the result is "the first N on the page,
/// ordered", not "the top N of the page". The sort is stable in both
/// directions: records with equal keys keep their page order.
pub fn run<E: ElementLike>(listings: &[E], options: &ResultOptions) -> ResultStream {
    let mut records: Vec<ResultRecord> = listings
        .iter()
        .take(options.count)
        .map(build_record)
        .collect();

    if let Some(key) = options.sort {
        if options.reverse {
            records.sort_by(|a, b| b.scores.cmp_by(&a.scores, key));
        } else {
            records.sort_by(|a, b| a.scores.cmp_by(&b.scores, key));
        }
    }

    ResultStream {
        inner: records.into_iter().take(options.count),
    }
}

/// Parses a fetched page and runs the pipeline over its listings.
///
/// # Errors
///
/// Returns [`ScraperError::UnknownEncoding`] or [`ScraperError::Decode`] if the
/// page bytes cannot be decoded under the page's declared encoding.
pub fn results_from_page(
    page: &RawPage,
    options: &ResultOptions,
) -> Result<ResultStream, ScraperError> {
    let document = parse_document(&page.body, &page.encoding)?;
    let listings = find_listings(&document.root_element());
    tracing::info!(
        listings = listings.len(),
        count = options.count,
        sort = options.sort.map_or("none", SortKey::label),
        reverse = options.reverse,
        "building inspection results"
    );
    Ok(run(&listings, options))
}
