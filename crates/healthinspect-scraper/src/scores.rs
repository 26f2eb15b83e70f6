//! Score statistics over a listing's inspection rows.

use healthinspect_core::ScoreSummary;

use crate::dom::{descendants, ElementLike};
use crate::rows::{clean_cell_text, is_inspection_row, table_cells};

/// Zero-based index of the score column in an inspection row.
const SCORE_CELL: usize = 2;

/// Summarizes every inspection row anywhere below `listing`.
///
/// The inspection count starts at the number of matching rows and drops by
/// one for each row whose score cell is not an integer; such rows contribute
/// nothing to the total or the high score. The average divides the total by
/// the remaining count and is zero when that count is not positive. The
/// running total is kept in `i128` so large `i64` scores cannot overflow it.
#[allow(clippy::cast_precision_loss)]
pub fn aggregate_scores<E: ElementLike>(listing: &E) -> ScoreSummary {
    let rows: Vec<E> = descendants(listing)
        .into_iter()
        .filter(is_inspection_row)
        .collect();

    let mut samples = i64::try_from(rows.len()).unwrap_or(i64::MAX);
    let mut total: i128 = 0;
    let mut high: i64 = 0;

    for row in &rows {
        let raw = table_cells(row)
            .get(SCORE_CELL)
            .map(clean_cell_text)
            .unwrap_or_default();
        match raw.parse::<i64>() {
            Ok(score) => {
                total += i128::from(score);
                if score > high {
                    high = score;
                }
            }
            Err(_) => {
                tracing::debug!(score = %raw, "inspection score is not an integer; skipping");
                samples -= 1;
            }
        }
    }

    let average = if samples > 0 {
        total as f64 / samples as f64
    } else {
        0.0
    };

    ScoreSummary {
        total_inspections: samples,
        average_score: average,
        high_score: high,
    }
}
