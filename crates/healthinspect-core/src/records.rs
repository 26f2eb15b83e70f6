//! Record types produced by the inspection pipeline.
//!
//! A [`ResultRecord`] is the flat view of one restaurant listing: every
//! metadata label scraped from the listing table plus the three score fields
//! computed from its inspection rows. Field names are the human-readable
//! labels used by the results page, so the score fields live in the same
//! namespace as scraped labels like `"Business Name"` or `"Address"`.

use std::cmp::Ordering;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub const BUSINESS_NAME: &str = "Business Name";
pub const ADDRESS: &str = "Address";
pub const AVERAGE_SCORE: &str = "Average Score";
pub const HIGH_SCORE: &str = "High Score";
pub const TOTAL_INSPECTIONS: &str = "Total Inspections";

/// Score field a result set can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    HighScore,
    AverageScore,
    TotalInspections,
}

impl SortKey {
    /// Resolves a field label (e.g. `"High Score"`) to a sort key.
    ///
    /// Returns `None` for anything that is not one of the three score labels;
    /// callers treat that as "leave the page order alone".
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            HIGH_SCORE => Some(Self::HighScore),
            AVERAGE_SCORE => Some(Self::AverageScore),
            TOTAL_INSPECTIONS => Some(Self::TotalInspections),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::HighScore => HIGH_SCORE,
            Self::AverageScore => AVERAGE_SCORE,
            Self::TotalInspections => TOTAL_INSPECTIONS,
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered label → values multi-map scraped from a listing's table.
///
/// Labels keep first-insertion order. Pushing a value under a label that
/// already exists appends to that label's list, even when other labels were
/// pushed in between.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    entries: Vec<(String, Vec<String>)>,
}

impl MetadataRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: &str, value: String) {
        if let Some((_, values)) = self.entries.iter_mut().find(|(l, _)| l == label) {
            values.push(value);
        } else {
            self.entries.push((label.to_owned(), vec![value]));
        }
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, values)| values.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(label, values)| (label.as_str(), values.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-listing inspection score statistics.
///
/// `total_inspections` starts at the number of inspection rows and loses one
/// for every row whose score cell is not an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreSummary {
    pub total_inspections: i64,
    pub average_score: f64,
    pub high_score: i64,
}

impl ScoreSummary {
    /// Compares two summaries on the field named by `key`.
    #[must_use]
    pub fn cmp_by(&self, other: &Self, key: SortKey) -> Ordering {
        match key {
            SortKey::HighScore => self.high_score.cmp(&other.high_score),
            SortKey::AverageScore => self.average_score.total_cmp(&other.average_score),
            SortKey::TotalInspections => self.total_inspections.cmp(&other.total_inspections),
        }
    }
}

/// A single field value of a [`ResultRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue<'a> {
    Text(&'a [String]),
    Integer(i64),
    Float(f64),
}

/// Metadata and score summary of one listing, viewed as a single flat mapping.
///
/// The score labels shadow any scraped metadata label with the same name.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    pub metadata: MetadataRecord,
    pub scores: ScoreSummary,
}

impl ResultRecord {
    #[must_use]
    pub fn new(metadata: MetadataRecord, scores: ScoreSummary) -> Self {
        Self { metadata, scores }
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<FieldValue<'_>> {
        match label {
            AVERAGE_SCORE => Some(FieldValue::Float(self.scores.average_score)),
            HIGH_SCORE => Some(FieldValue::Integer(self.scores.high_score)),
            TOTAL_INSPECTIONS => Some(FieldValue::Integer(self.scores.total_inspections)),
            _ => self.metadata.get(label).map(FieldValue::Text),
        }
    }

    /// All fields in record order: metadata labels first, then the score fields.
    pub fn fields(&self) -> impl Iterator<Item = (&str, FieldValue<'_>)> {
        let metadata = self
            .metadata
            .iter()
            .filter(|(label, _)| SortKey::from_label(label).is_none())
            .map(|(label, values)| (label, FieldValue::Text(values)));
        let scores: [(&str, FieldValue<'_>); 3] = [
            (
                AVERAGE_SCORE,
                FieldValue::Float(self.scores.average_score),
            ),
            (HIGH_SCORE, FieldValue::Integer(self.scores.high_score)),
            (
                TOTAL_INSPECTIONS,
                FieldValue::Integer(self.scores.total_inspections),
            ),
        ];
        metadata.chain(scores)
    }
}

impl Serialize for ResultRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (label, value) in self.fields() {
            map.serialize_entry(label, &value)?;
        }
        map.end()
    }
}
