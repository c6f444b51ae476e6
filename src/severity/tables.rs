//! Severity table construction and lookup.

use std::collections::HashMap;

use crate::record::{Condition, Sickness};

/// The two scoring maps consulted by the scorer.
///
/// Lookups never fail: a key absent from its map scores 0, which makes
/// an unmapped value the lowest-priority entry for that criterion rather
/// than an error. With the stock tables every enum value is mapped, but
/// custom tables built with [`empty`](SeverityTable::empty) may leave
/// gaps on purpose.
///
/// # Examples
///
/// ```
/// use triage_rank::record::{Condition, Sickness};
/// use triage_rank::severity::SeverityTable;
///
/// let table = SeverityTable::default();
/// assert_eq!(table.condition_score(Condition::Lethal), 3);
/// assert_eq!(table.sickness_score(Sickness::HeartAttack), 10);
///
/// let custom = SeverityTable::empty().with_condition_score(Condition::Mild, 5);
/// assert_eq!(custom.condition_score(Condition::Mild), 5);
/// assert_eq!(custom.condition_score(Condition::Lethal), 0); // unmapped
/// ```
#[derive(Debug, Clone)]
pub struct SeverityTable {
    condition: HashMap<Condition, u32>,
    sickness: HashMap<Sickness, u32>,
}

impl Default for SeverityTable {
    /// The stock clinical tables.
    ///
    /// Conditions: lethal=3, moderate=2, mild=1. Sicknesses: 10 (Heart
    /// Attack) down to 1 (Unknown), with deliberate ties (Stroke=ACV=9,
    /// Kidney Disease=EPOC=7, Diabetes=Pneumonia=6, Covid=Burn=5).
    fn default() -> Self {
        let condition = HashMap::from([
            (Condition::Lethal, 3),
            (Condition::Moderate, 2),
            (Condition::Mild, 1),
        ]);
        let sickness = HashMap::from([
            (Sickness::HeartAttack, 10),
            (Sickness::Stroke, 9),
            (Sickness::Acv, 9),
            (Sickness::Cancer, 8),
            (Sickness::KidneyDisease, 7),
            (Sickness::Epoc, 7),
            (Sickness::Diabetes, 6),
            (Sickness::Pneumonia, 6),
            (Sickness::Covid, 5),
            (Sickness::Burn, 5),
            (Sickness::Fracture, 4),
            (Sickness::Flu, 3),
            (Sickness::AllergicReaction, 2),
            (Sickness::Unknown, 1),
        ]);
        Self {
            condition,
            sickness,
        }
    }
}

impl SeverityTable {
    /// Creates a table with no entries. Every lookup scores 0 until
    /// entries are added with the `with_*` builders.
    pub fn empty() -> Self {
        Self {
            condition: HashMap::new(),
            sickness: HashMap::new(),
        }
    }

    /// Sets (or overrides) the score for a condition severity.
    pub fn with_condition_score(mut self, condition: Condition, score: u32) -> Self {
        self.condition.insert(condition, score);
        self
    }

    /// Sets (or overrides) the score for a sickness type.
    pub fn with_sickness_score(mut self, sickness: Sickness, score: u32) -> Self {
        self.sickness.insert(sickness, score);
        self
    }

    /// Looks up the condition score, defaulting to 0 for unmapped values.
    pub fn condition_score(&self, condition: Condition) -> u32 {
        self.condition.get(&condition).copied().unwrap_or(0)
    }

    /// Looks up the sickness score, defaulting to 0 for unmapped values.
    pub fn sickness_score(&self, sickness: Sickness) -> u32 {
        self.sickness.get(&sickness).copied().unwrap_or(0)
    }

    /// Validates the table.
    ///
    /// A table with an empty map would zero out a whole criterion, which
    /// is almost certainly a configuration mistake.
    pub fn validate(&self) -> Result<(), String> {
        if self.condition.is_empty() {
            return Err("condition score table must not be empty".into());
        }
        if self.sickness.is_empty() {
            return Err("sickness score table must not be empty".into());
        }
        Ok(())
    }
}
