//! Per-invocation score attachment.

use crate::record::PatientRow;
use crate::severity::SeverityTable;

/// A patient row augmented with its two derived criterion scores.
///
/// Scores are ephemeral: they are recomputed on every ranking
/// invocation and never become part of the row itself, so the output
/// of the pipeline carries only the original fields.
#[derive(Debug, Clone)]
pub struct ScoredRow {
    /// The admitted row, unchanged.
    pub row: PatientRow,

    /// Severity score of `row.condition`, 0 if unmapped.
    pub condition_score: u32,

    /// Lethality score of `row.sickness`, 0 if unmapped.
    pub sickness_score: u32,
}

/// Attaches severity scores to every admitted row.
///
/// Pure function of its inputs. An unmapped condition or sickness
/// defaults to 0 for that criterion alone; it never aborts scoring of
/// the remaining rows.
pub fn attach_scores(rows: Vec<PatientRow>, table: &SeverityTable) -> Vec<ScoredRow> {
    rows.into_iter()
        .map(|row| ScoredRow {
            condition_score: table.condition_score(row.condition),
            sickness_score: table.sickness_score(row.sickness),
            row,
        })
        .collect()
}
