//! Input filter for incomplete rows.

use crate::record::PatientRow;

/// Returns only the rows whose name is non-empty.
///
/// Emptiness is exact equality to `""`: no trimming is applied, so a
/// whitespace-only name is admitted. An all-empty result is a normal
/// outcome handled by the runner, not an error.
pub fn admit(rows: &[PatientRow]) -> Vec<PatientRow> {
    rows.iter().filter(|r| !r.name.is_empty()).cloned().collect()
}
