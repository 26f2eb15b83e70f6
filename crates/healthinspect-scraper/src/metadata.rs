//! Label/value extraction from a listing's metadata table.

use healthinspect_core::MetadataRecord;

use crate::dom::{find_first, ElementLike};
use crate::rows::{clean_cell_text, is_metadata_row, table_cells};

/// Folds the listing's two-cell rows into an ordered label → values map.
///
/// Rows are the direct children of the listing's first `tbody`. A row with a
/// blank label cell files its value under the most recent non-empty label
/// (the page uses blank labels for continuation lines such as the second
/// address line). Before any label is seen that is the empty string.
///
/// A listing without a `tbody` yields an empty record.
pub fn extract_metadata<E: ElementLike>(listing: &E) -> MetadataRecord {
    let mut record = MetadataRecord::new();
    let Some(body) = find_first(listing, "tbody") else {
        tracing::debug!(
            listing = listing.attr("id").unwrap_or_default(),
            "listing has no table body"
        );
        return record;
    };

    let mut current_label = String::new();
    for row in body.child_elements().iter().filter(|row| is_metadata_row(*row)) {
        let cells = table_cells(row);
        let [label_cell, value_cell] = cells.as_slice() else {
            continue;
        };
        let label = clean_cell_text(label_cell);
        if !label.is_empty() {
            current_label = label;
        }
        record.push(&current_label, clean_cell_text(value_cell));
    }
    record
}
