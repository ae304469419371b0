pub mod error;
pub mod event;
pub mod path;
pub mod time;
pub mod transition;

pub use error::{Error, Result};
pub use event::*;
pub use path::*;
pub use time::*;
pub use transition::*;
