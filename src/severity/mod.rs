//! Static severity lookup tables.
//!
//! Two immutable maps drive the scorer: condition severity and sickness
//! lethality. They are loaded once at process start (via
//! [`SeverityTable::default`]) and treated as read-only configuration
//! for every ranking invocation.
//!
//! # Key Types
//!
//! - [`SeverityTable`]: Both maps plus builder-style overrides

mod tables;

pub use tables::SeverityTable;
