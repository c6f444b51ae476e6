//! Typed patient rows and the closed clinical enums.
//!
//! The input contract with the form collaborator is a sequence of rows,
//! each `{name, age, condition, sickness}`. Rows are transient: they are
//! built fresh for a single ranking invocation and never mutated after
//! construction.
//!
//! # Key Types
//!
//! - [`PatientRow`]: One person awaiting treatment
//! - [`Condition`]: Severity of the presenting condition (3 values)
//! - [`Sickness`]: Diagnosis tag (closed set of 14 values)
//! - [`RecordError`]: Construction and parse failures

mod types;

pub use types::{Condition, PatientRow, RecordError, Sickness, MAX_AGE};
