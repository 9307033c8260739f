
///
/// The error stack shared by every crate in the workspace: a dynamic error 
/// with a context chain, plus the macro that builds one from a format string.
///
pub use anyhow::{anyhow as error, bail, Context, Error, Result};
