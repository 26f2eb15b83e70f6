//! Row classification for the listing tables.
//!
//! A listing mixes two kinds of rows: two-cell metadata rows (label, value)
//! and four-cell inspection rows (type, date, score, result). Both predicates
//! look only at a row's direct `td` children.

use crate::dom::ElementLike;

/// Characters trimmed from both ends of a cell's text.
const CELL_TRIM: &[char] = &[' ', '\t', '\r', '\n', ':', '-'];

const INSPECTION_MARKER: &str = "inspection";

/// Direct `td` children of `row`, in order.
pub fn table_cells<E: ElementLike>(row: &E) -> Vec<E> {
    row.child_elements()
        .into_iter()
        .filter(|child| child.tag_name() == "td")
        .collect()
}

/// Cleaned text of a cell: its direct text with surrounding whitespace,
/// colons and hyphens removed. A cell without direct text yields `""`.
pub fn clean_cell_text<E: ElementLike>(cell: &E) -> String {
    cell.direct_text()
        .map(|text| text.trim_matches(CELL_TRIM).to_owned())
        .unwrap_or_default()
}

/// `true` for a `tr` with exactly two direct `td` children.
pub fn is_metadata_row<E: ElementLike>(node: &E) -> bool {
    node.tag_name() == "tr" && table_cells(node).len() == 2
}

/// `true` for a `tr` with exactly four direct `td` children whose first cell
/// mentions "inspection" without starting with it.
///
/// The column header row reads "Inspection Type" and is excluded; event rows
/// such as "Routine Inspection/Field Review" are included.
pub fn is_inspection_row<E: ElementLike>(node: &E) -> bool {
    if node.tag_name() != "tr" {
        return false;
    }
    let cells = table_cells(node);
    let [first, _, _, _] = cells.as_slice() else {
        return false;
    };
    let label = clean_cell_text(first).to_lowercase();
    label.contains(INSPECTION_MARKER) && !label.starts_with(INSPECTION_MARKER)
}
