// NOTE: bureaulog layout
//
// - bureaulog-engine does all the interpretation (extraction, paths,
//   classification) and hands back a serializable Report
// - this crate only resolves configuration, feeds input streams to the
//   engine and renders the Report
// - a single pass over the input: nothing is indexed or cached between runs

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::Cli;
pub use commands::run;
