//! Scoring module
//!
//! Two sources of points: every successful downward step is worth
//! [`SOFT_DROP_SCORE`], and every settle is worth a fixed amount keyed on how
//! many rows it cleared ([`SETTLE_SCORES`]).

use crate::types::{SETTLE_SCORES, SOFT_DROP_SCORE};

/// Points for a settle that cleared `lines` rows.
///
/// A piece spans at most four rows, so anything above four is scored as four.
pub fn settle_score(lines: u32) -> u32 {
    let idx = (lines as usize).min(SETTLE_SCORES.len() - 1);
    SETTLE_SCORES[idx]
}

/// Points for `cells` successful downward steps
pub fn drop_score(cells: u32) -> u32 {
    cells.saturating_mul(SOFT_DROP_SCORE)
}
