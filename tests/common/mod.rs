//! Shared test utilities for pcf integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. The fake registry binds a random local port, so
//! harnesses can run in parallel without interfering.

#![allow(dead_code)]

pub mod assertions;
pub mod fake_registry;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
