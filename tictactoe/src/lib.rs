
pub mod board;
pub mod cell;
pub mod game;
pub mod mark;
pub mod mode;
pub mod outcome;

pub use board::{Board, WIN_LINES};
pub use cell::Cell;
pub use game::{Game, Transition};
pub use mark::Mark;
pub use mode::OpponentMode;
pub use outcome::Outcome;
