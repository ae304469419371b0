pub mod formatters;
pub mod views;

pub use views::report::{ReportOptions, render_json, render_plain};
