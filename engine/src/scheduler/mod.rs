
pub mod config;
pub mod sync;
pub mod timer;

pub use timer::Timer;
