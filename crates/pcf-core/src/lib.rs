//! pcf-core — APQC Process Classification Framework core library.
//!
//! This crate holds everything that operates on an already-loaded taxonomy:
//! the record types, the lexical hierarchy logic, the pure query functions,
//! and the dataset consistency checks. Fetching and memoizing the published
//! snapshot lives in `pcf-client`.
//!
//! # Architecture
//!
//! ```text
//! pcf-client (fetch + memoize) ──► pcf-core::query ──► results
//!                                  pcf-core::validate (offline checks)
//! ```
//!
//! Everything here is synchronous and allocation-light; the collection is a
//! flat `Vec<Process>` scanned linearly.

pub mod config;
pub mod hierarchy;
pub mod query;
pub mod types;
pub mod validate;

pub use types::{Domain, Process, ProcessLevel, CONTEXT, DOMAIN, PROCESS_TYPE};
