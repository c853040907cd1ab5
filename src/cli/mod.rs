//! Interactive command surface

pub mod commands;
pub mod session;

pub use commands::Command;
pub use session::{Clock, LocalClock, Session};
