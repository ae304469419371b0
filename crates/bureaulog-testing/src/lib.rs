//! Testing infrastructure for bureaulog integration tests.
//!
//! - `LogBuilder`: synthetic bureau log generation
//! - `TestWorld`: isolated temp environment for running the CLI
//! - `assertions`: checks over rendered reports

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::LogBuilder;
pub use world::{CliResult, TestWorld};
