//! Ranking pipeline execution.

use log::{debug, warn};

use super::comparator::majority_vote;
use super::filter::admit;
use super::score::attach_scores;
use crate::record::PatientRow;
use crate::severity::SeverityTable;

/// Result of a completed ranking run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankResult {
    /// Rows ordered from highest to lowest treatment priority. Derived
    /// scores are stripped; display order alone conveys priority.
    pub order: Vec<PatientRow>,

    /// Number of rows admitted by the input filter.
    pub admitted: usize,

    /// Number of rows discarded for an empty name.
    pub discarded: usize,
}

/// Outcome of a ranking invocation.
///
/// An input with no valid rows is a recognized outcome, not an error:
/// the caller is expected to show a warning instead of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankOutcome {
    /// At least one row survived the filter and was ranked.
    Ranked(RankResult),

    /// Every row was discarded; nothing was ranked.
    NoValidPatients,
}

impl RankOutcome {
    /// Whether an ordered list was produced.
    pub fn is_ranked(&self) -> bool {
        matches!(self, RankOutcome::Ranked(_))
    }

    /// Extracts the ordered rows, if any.
    pub fn into_order(self) -> Option<Vec<PatientRow>> {
        match self {
            RankOutcome::Ranked(result) => Some(result.order),
            RankOutcome::NoValidPatients => None,
        }
    }
}

/// Executes the ranking pipeline.
pub struct RankRunner;

impl RankRunner {
    /// Ranks the given rows: filter, score, stable majority-vote sort.
    ///
    /// Scores are recomputed from `table` on every call and exist only
    /// for the duration of the sort. The sort is one stable pass with
    /// [`majority_vote`]: rows that tie on all three criteria keep
    /// their input order, and cyclic vote outcomes still terminate in
    /// some total order.
    ///
    /// # Examples
    ///
    /// ```
    /// use triage_rank::ranking::{RankOutcome, RankRunner};
    /// use triage_rank::record::{Condition, PatientRow, Sickness};
    /// use triage_rank::severity::SeverityTable;
    ///
    /// let table = SeverityTable::default();
    /// let rows = vec![
    ///     PatientRow::new("Bob", 70, Condition::Moderate, Sickness::Flu)?,
    ///     PatientRow::new("Ann", 70, Condition::Lethal, Sickness::Flu)?,
    /// ];
    ///
    /// let order = RankRunner::run(&rows, &table).into_order().unwrap();
    /// assert_eq!(order[0].name, "Ann");
    /// # Ok::<(), triage_rank::record::RecordError>(())
    /// ```
    pub fn run(rows: &[PatientRow], table: &SeverityTable) -> RankOutcome {
        let admitted = admit(rows);
        let discarded = rows.len() - admitted.len();

        if admitted.is_empty() {
            warn!("no valid patients to rank ({discarded} row(s) without a name)");
            return RankOutcome::NoValidPatients;
        }

        let mut scored = attach_scores(admitted, table);
        // Arguments swapped so higher-priority rows sort first.
        scored.sort_by(|a, b| majority_vote(b, a));

        let admitted = scored.len();
        debug!("ranked {admitted} patient(s), discarded {discarded}");

        RankOutcome::Ranked(RankResult {
            order: scored.into_iter().map(|s| s.row).collect(),
            admitted,
            discarded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Condition, Sickness};
    use proptest::prelude::*;

    fn row(name: &str, age: u8, condition: Condition, sickness: Sickness) -> PatientRow {
        PatientRow {
            name: name.to_string(),
            age,
            condition,
            sickness,
        }
    }

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_all_empty_names_signal_no_valid_patients() {
        init_logs();
        let table = SeverityTable::default();
        let rows = vec![
            row("", 70, Condition::Lethal, Sickness::Covid),
            row("", 30, Condition::Mild, Sickness::Flu),
        ];
        assert_eq!(RankRunner::run(&rows, &table), RankOutcome::NoValidPatients);
    }

    #[test]
    fn test_empty_input_signals_no_valid_patients() {
        let outcome = RankRunner::run(&[], &SeverityTable::default());
        assert!(!outcome.is_ranked());
        assert_eq!(outcome.into_order(), None);
    }

    #[test]
    fn test_discarded_rows_are_counted() {
        let table = SeverityTable::default();
        let rows = vec![
            row("Ann", 70, Condition::Lethal, Sickness::Flu),
            row("", 30, Condition::Mild, Sickness::Flu),
            row("Bob", 50, Condition::Moderate, Sickness::Burn),
        ];
        match RankRunner::run(&rows, &table) {
            RankOutcome::Ranked(result) => {
                assert_eq!(result.admitted, 2);
                assert_eq!(result.discarded, 1);
                assert_eq!(result.order.len(), 2);
            }
            RankOutcome::NoValidPatients => panic!("expected a ranked outcome"),
        }
    }

    #[test]
    fn test_single_criterion_decides_order() {
        // Ann and Bob tie on age and sickness; Ann's condition wins.
        let table = SeverityTable::default();
        let rows = vec![
            row("Bob", 70, Condition::Moderate, Sickness::Flu),
            row("Ann", 70, Condition::Lethal, Sickness::Flu),
        ];
        let names: Vec<_> = RankRunner::run(&rows, &table)
            .into_order()
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Ann", "Bob"]);
    }

    #[test]
    fn test_majority_beats_single_strong_criterion() {
        let table = SeverityTable::default();
        let rows = vec![
            row("B", 30, Condition::Mild, Sickness::HeartAttack),
            row("A", 80, Condition::Lethal, Sickness::Unknown),
        ];
        let names: Vec<_> = RankRunner::run(&rows, &table)
            .into_order()
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_full_ties_keep_input_order() {
        let table = SeverityTable::default();
        let rows = vec![
            row("first", 55, Condition::Moderate, Sickness::Covid),
            row("second", 55, Condition::Moderate, Sickness::Covid),
            row("third", 55, Condition::Moderate, Sickness::Covid),
        ];
        let names: Vec<_> = RankRunner::run(&rows, &table)
            .into_order()
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_cyclic_votes_still_produce_a_permutation() {
        // a beats c, b beats a, c beats b pairwise (Condorcet cycle);
        // the sort must terminate and return all three rows.
        let table = SeverityTable::default();
        let rows = vec![
            row("a", 10, Condition::Lethal, Sickness::Acv),
            row("b", 50, Condition::Mild, Sickness::HeartAttack),
            row("c", 90, Condition::Moderate, Sickness::Flu),
        ];
        let order = RankRunner::run(&rows, &table).into_order().unwrap();
        assert_eq!(order.len(), 3);
        let mut names: Vec<_> = order.into_iter().map(|r| r.name).collect();
        names.sort();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_scores_are_not_exposed_in_output() {
        // The output rows are exactly the admitted input rows, reordered.
        let table = SeverityTable::default();
        let ann = row("Ann", 70, Condition::Lethal, Sickness::Flu);
        let bob = row("Bob", 70, Condition::Moderate, Sickness::Flu);
        let order = RankRunner::run(&[bob.clone(), ann.clone()], &table)
            .into_order()
            .unwrap();
        assert_eq!(order, vec![ann, bob]);
    }

    #[test]
    fn test_empty_table_leaves_only_age_to_decide() {
        // With an empty table, condition and sickness always tie at 0
        // and only age can decide.
        let table = SeverityTable::empty();
        let rows = vec![
            row("young", 20, Condition::Lethal, Sickness::HeartAttack),
            row("old", 90, Condition::Mild, Sickness::Unknown),
        ];
        let names: Vec<_> = RankRunner::run(&rows, &table)
            .into_order()
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["old", "young"]);
    }

    fn arb_row() -> impl Strategy<Value = PatientRow> {
        (
            "[a-c]{0,2}",
            0u8..=120,
            proptest::sample::select(Condition::ALL.to_vec()),
            proptest::sample::select(Sickness::ALL.to_vec()),
        )
            .prop_map(|(name, age, condition, sickness)| PatientRow {
                name,
                age,
                condition,
                sickness,
            })
    }

    proptest! {
        #[test]
        fn prop_output_count_matches_named_rows(rows in proptest::collection::vec(arb_row(), 0..24)) {
            let table = SeverityTable::default();
            let named = rows.iter().filter(|r| !r.name.is_empty()).count();
            match RankRunner::run(&rows, &table) {
                RankOutcome::Ranked(result) => {
                    prop_assert_eq!(result.order.len(), named);
                    prop_assert_eq!(result.discarded, rows.len() - named);
                }
                RankOutcome::NoValidPatients => prop_assert_eq!(named, 0),
            }
        }

        #[test]
        fn prop_output_is_a_permutation_of_admitted_rows(rows in proptest::collection::vec(arb_row(), 0..24)) {
            let table = SeverityTable::default();
            if let Some(order) = RankRunner::run(&rows, &table).into_order() {
                let mut expected: Vec<_> = rows.into_iter().filter(|r| !r.name.is_empty()).collect();
                let mut actual = order;
                let key = |r: &PatientRow| (r.name.clone(), r.age, r.condition as u8, r.sickness as u8);
                expected.sort_by_key(key);
                actual.sort_by_key(key);
                prop_assert_eq!(actual, expected);
            }
        }

        #[test]
        fn prop_tied_rows_stay_in_input_order(template in arb_row(), count in 1usize..6) {
            // Same age, condition, and sickness: every pair ties on all
            // three criteria, so the stable sort must not reorder them.
            let rows: Vec<_> = (0..count)
                .map(|i| {
                    let mut r = template.clone();
                    r.name = format!("dup{i}");
                    r
                })
                .collect();
            let table = SeverityTable::default();
            let order = RankRunner::run(&rows, &table).into_order().unwrap();
            let names: Vec<_> = order.into_iter().map(|r| r.name).collect();
            let expected: Vec<_> = (0..count).map(|i| format!("dup{i}")).collect();
            prop_assert_eq!(names, expected);
        }
    }
}
