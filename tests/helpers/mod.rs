// Shared fixtures for unit, integration and contract tests.
//
// Usage:
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//   use helpers::*;

#![allow(dead_code)]

pub mod test_data;

pub use test_data::*;
