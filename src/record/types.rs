//! Patient row representation and enum parsing.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Upper bound on patient age accepted by [`PatientRow::new`].
pub const MAX_AGE: u8 = 120;

/// Error constructing or parsing a patient row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The name field was the empty string.
    #[error("patient name must not be empty")]
    EmptyName,

    /// Age exceeded the accepted domain.
    #[error("age {0} is outside the accepted range 0..={MAX_AGE}")]
    AgeOutOfRange(u8),

    /// The condition string matched none of the three severities.
    #[error("unrecognized condition severity: {0:?}")]
    UnknownCondition(String),

    /// The sickness string matched none of the 14 diagnosis tags.
    #[error("unrecognized sickness type: {0:?}")]
    UnknownSickness(String),
}

/// Severity of the presenting condition.
///
/// The scoring table maps these to integers (lethal highest); the enum
/// itself carries no ordering so that all scoring stays in
/// [`SeverityTable`](crate::severity::SeverityTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Condition {
    Lethal,
    Moderate,
    Mild,
}

impl Condition {
    /// All severities, in the order the form collaborator lists them.
    pub const ALL: [Condition; 3] = [Condition::Lethal, Condition::Moderate, Condition::Mild];

    /// The collaborator-facing option label.
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Lethal => "lethal",
            Condition::Moderate => "moderate",
            Condition::Mild => "mild",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Condition {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lethal" => Ok(Condition::Lethal),
            "moderate" => Ok(Condition::Moderate),
            "mild" => Ok(Condition::Mild),
            other => Err(RecordError::UnknownCondition(other.to_string())),
        }
    }
}

/// Diagnosis tag, a closed set of 14 values.
///
/// `Unknown` is the fallback for anything the intake form cannot name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sickness {
    HeartAttack,
    Stroke,
    Acv,
    Cancer,
    KidneyDisease,
    Epoc,
    Diabetes,
    Pneumonia,
    Covid,
    Burn,
    Fracture,
    Flu,
    AllergicReaction,
    Unknown,
}

impl Sickness {
    /// All diagnosis tags, in the order the form collaborator lists them.
    pub const ALL: [Sickness; 14] = [
        Sickness::HeartAttack,
        Sickness::Stroke,
        Sickness::Acv,
        Sickness::Cancer,
        Sickness::KidneyDisease,
        Sickness::Epoc,
        Sickness::Diabetes,
        Sickness::Pneumonia,
        Sickness::Covid,
        Sickness::Burn,
        Sickness::Fracture,
        Sickness::Flu,
        Sickness::AllergicReaction,
        Sickness::Unknown,
    ];

    /// The collaborator-facing option label.
    pub fn label(&self) -> &'static str {
        match self {
            Sickness::HeartAttack => "Heart Attack",
            Sickness::Stroke => "Stroke",
            Sickness::Acv => "ACV",
            Sickness::Cancer => "Cancer",
            Sickness::KidneyDisease => "Kidney Disease",
            Sickness::Epoc => "EPOC",
            Sickness::Diabetes => "Diabetes",
            Sickness::Pneumonia => "Pneumonia",
            Sickness::Covid => "Covid",
            Sickness::Burn => "Burn",
            Sickness::Fracture => "Fracture",
            Sickness::Flu => "Flu",
            Sickness::AllergicReaction => "Allergic Reaction",
            Sickness::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Sickness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Sickness {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Heart Attack" => Ok(Sickness::HeartAttack),
            "Stroke" => Ok(Sickness::Stroke),
            "ACV" => Ok(Sickness::Acv),
            "Cancer" => Ok(Sickness::Cancer),
            "Kidney Disease" => Ok(Sickness::KidneyDisease),
            "EPOC" => Ok(Sickness::Epoc),
            // Legacy intake forms used the Spanish spelling.
            "Pneumonia" | "Neumonía" => Ok(Sickness::Pneumonia),
            "Diabetes" => Ok(Sickness::Diabetes),
            "Covid" => Ok(Sickness::Covid),
            "Burn" => Ok(Sickness::Burn),
            "Fracture" => Ok(Sickness::Fracture),
            "Flu" => Ok(Sickness::Flu),
            "Allergic Reaction" => Ok(Sickness::AllergicReaction),
            "Unknown" => Ok(Sickness::Unknown),
            other => Err(RecordError::UnknownSickness(other.to_string())),
        }
    }
}

/// One person awaiting treatment.
///
/// Fields are public because this is the input-contract shape: the form
/// collaborator hands over rows exactly as entered, including rows whose
/// name is still empty. The input filter in
/// [`ranking`](crate::ranking) discards those before any scoring happens.
/// Callers building rows programmatically should prefer
/// [`PatientRow::new`], which validates up front.
///
/// # Examples
///
/// ```
/// use triage_rank::record::{Condition, PatientRow, Sickness};
///
/// let row = PatientRow::new("Ann", 70, Condition::Lethal, Sickness::Flu)?;
/// assert_eq!(row.age, 70);
/// # Ok::<(), triage_rank::record::RecordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatientRow {
    /// Display and grouping key. Not enforced unique.
    pub name: String,

    /// Age in years, domain `0..=120`.
    pub age: u8,

    /// Severity of the presenting condition.
    pub condition: Condition,

    /// Diagnosis tag.
    pub sickness: Sickness,
}

impl PatientRow {
    /// Builds a row, validating the name and age domain.
    pub fn new(
        name: impl Into<String>,
        age: u8,
        condition: Condition,
        sickness: Sickness,
    ) -> Result<Self, RecordError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RecordError::EmptyName);
        }
        if age > MAX_AGE {
            return Err(RecordError::AgeOutOfRange(age));
        }
        Ok(Self {
            name,
            age,
            condition,
            sickness,
        })
    }
}

impl Default for PatientRow {
    /// The blank intake row the form collaborator seeds its table with.
    fn default() -> Self {
        Self {
            name: String::new(),
            age: 0,
            condition: Condition::Mild,
            sickness: Sickness::Unknown,
        }
    }
}
