//! Pairwise majority-vote comparator.

use std::cmp::Ordering;

use super::score::ScoredRow;

/// Compares two scored rows by a three-criterion majority vote.
///
/// The criteria are evaluated in a fixed order — age, condition score,
/// sickness score — and each awards one point to whichever row is
/// strictly greater (older, worse condition, more lethal sickness).
/// Equal criteria award no point. The result compares the two point
/// totals: `Greater` means `a` has higher treatment priority.
///
/// # Not a total order
///
/// A majority vote over three independent scalar comparisons is not
/// transitive: arrange each of three rows to win a different single
/// criterion against the next and A beats B, B beats C, C beats A, the
/// same cycle a Condorcet election can produce. The ranking pipeline
/// accepts this and applies the vote in one stable sort pass; the order
/// that pass lands on for a cyclic triple is unspecified but always
/// some permutation of the input.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use triage_rank::ranking::{attach_scores, majority_vote};
/// use triage_rank::record::{Condition, PatientRow, Sickness};
/// use triage_rank::severity::SeverityTable;
///
/// let table = SeverityTable::default();
/// let scored = attach_scores(
///     vec![
///         PatientRow::new("A", 80, Condition::Lethal, Sickness::Unknown)?,
///         PatientRow::new("B", 30, Condition::Mild, Sickness::HeartAttack)?,
///     ],
///     &table,
/// );
///
/// // A wins age and condition, B wins sickness: 2 points to 1.
/// assert_eq!(majority_vote(&scored[0], &scored[1]), Ordering::Greater);
/// # Ok::<(), triage_rank::record::RecordError>(())
/// ```
pub fn majority_vote(a: &ScoredRow, b: &ScoredRow) -> Ordering {
    let mut points_a = 0u8;
    let mut points_b = 0u8;

    match a.row.age.cmp(&b.row.age) {
        Ordering::Greater => points_a += 1,
        Ordering::Less => points_b += 1,
        Ordering::Equal => {}
    }

    match a.condition_score.cmp(&b.condition_score) {
        Ordering::Greater => points_a += 1,
        Ordering::Less => points_b += 1,
        Ordering::Equal => {}
    }

    match a.sickness_score.cmp(&b.sickness_score) {
        Ordering::Greater => points_a += 1,
        Ordering::Less => points_b += 1,
        Ordering::Equal => {}
    }

    points_a.cmp(&points_b)
}
