
//!
//! The Tic-Tac-Toe text protocol: one command per line in, one response or 
//! event per line out.
//!

pub mod command;
pub mod snapshot;

pub use command::{Command, CommandError};
pub use snapshot::{Event, Response, Snapshot};
