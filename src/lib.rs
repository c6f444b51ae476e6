//! Majority-vote ranking of patients by treatment urgency.
//!
//! Given a list of patient rows (name, age, condition severity,
//! sickness type) and two static severity tables, this crate produces
//! a sequence ordered from highest to lowest treatment priority.
//! Relative priority between two patients is decided by a **pairwise
//! majority vote** over three criteria — age, condition score,
//! sickness score — not by a weighted formula. Each criterion awards a
//! point to the strictly greater side; whoever collects more points
//! ranks higher.
//!
//! The vote is intentionally not transitive (it can produce
//! Condorcet-style cycles), so the final order is whatever a single
//! stable sort pass lands on. Rows that tie on every criterion keep
//! their input order.
//!
//! # Modules
//!
//! - [`record`]: Typed patient rows and the closed clinical enums
//! - [`severity`]: The static condition/sickness scoring tables
//! - [`ranking`]: Filter, scorer, comparator, and the pipeline runner
//!
//! # Architecture
//!
//! The crate is the computational core only. The form UI that collects
//! rows and the table that displays the result are external
//! collaborators: input arrives as a `&[PatientRow]`, output leaves as
//! an ordered `Vec<PatientRow>` (or a no-valid-input signal when every
//! row lacks a name). Each invocation is synchronous, single-threaded,
//! and stateless apart from the caller-owned severity tables.
//!
//! # Examples
//!
//! ```
//! use triage_rank::ranking::RankRunner;
//! use triage_rank::record::{Condition, PatientRow, Sickness};
//! use triage_rank::severity::SeverityTable;
//!
//! let table = SeverityTable::default();
//! let rows = vec![
//!     PatientRow::new("Bob", 70, Condition::Moderate, Sickness::Flu)?,
//!     PatientRow::new("Ann", 70, Condition::Lethal, Sickness::Flu)?,
//! ];
//!
//! let order = RankRunner::run(&rows, &table).into_order().unwrap();
//! assert_eq!(order[0].name, "Ann");
//! # Ok::<(), triage_rank::record::RecordError>(())
//! ```

pub mod ranking;
pub mod record;
pub mod severity;
