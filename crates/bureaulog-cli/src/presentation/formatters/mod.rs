pub mod path;
pub mod time;

pub use path::{describe_outcome, describe_path};
pub use time::describe_elapsed;
