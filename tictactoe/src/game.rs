
use rand::Rng;

use super::board::{Board, CELLS};
use super::mark::Mark;
use super::mode::OpponentMode;
use super::outcome::Outcome;

///
/// A single match of Tic-Tac-Toe: the board, whose turn it is, who the opponent 
/// is, and how the match stands.
///
/// Moves never fail. An intent that cannot be played (a taken cell, an index 
/// off the board, a match that is already over, or a human clicking during 
/// the computer's turn) leaves the match untouched and reports why through 
/// the returned Transition. Each accepted move is one atomic step: the mark is 
/// written, the board is evaluated, and the mover flips only if the match 
/// goes on.
///
/// The match remembers the starting mark it was asked for, so that a reset 
/// applies the same mode-dependent starting policy as construction did.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game 
{
    // State.

    board: Board,
    mover: Mark,
    outcome: Outcome,
    history: Vec<usize>,

    // Inputs, fixed until the match is replaced.

    mode: OpponentMode,
    requested: Mark
}

///
/// Why an intent was not played.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection 
{
    Finished,
    OffBoard,
    Taken,
    ComputerToMove
}

///
/// The observable effect of one intent on a match.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition 
{
    ///
    /// Nothing changed.
    ///
    Ignored(Rejection),

    ///
    /// The mark was placed and the match goes on with the other mark to move.
    ///
    Placed { index: usize, mark: Mark },

    ///
    /// The mark was placed and ended the match. This is reported exactly once per match.
    ///
    Finished { index: usize, mark: Mark, outcome: Outcome }
}

impl std::fmt::Display for Rejection 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        match self 
        {
            Rejection::Finished       => write!(f, "the match is over"),
            Rejection::OffBoard       => write!(f, "the index is off the board"),
            Rejection::Taken          => write!(f, "the cell is taken"),
            Rejection::ComputerToMove => write!(f, "it is the computer's turn")
        }
    }
}

impl Transition 
{
    ///
    /// Determines whether the board changed.
    ///
    pub fn is_applied (& self) -> bool 
    {
        ! matches!(self, Transition::Ignored(_))
    }
}

impl Game 
{
    ///
    /// Returns a fresh match. Against the computer X always moves first, since the 
    /// computer is bound to X; otherwise the requested mark does.
    ///
    pub fn new (starting: Mark, mode: OpponentMode) -> Game 
    {
        Game 
        {
            board: Board::blank(),
            mover: Game::starting_mover(starting, mode),
            outcome: Outcome::InProgress,
            history: vec![],
            mode,
            requested: starting
        }
    }

    ///
    /// Plays the current mover's mark into the cell at index.
    ///
    pub fn apply (& mut self, index: usize) -> Transition 
    {
        if self.outcome.is_terminal()
        {
            return Transition::Ignored(Rejection::Finished);
        }

        let mark = self.mover;
        if self.board.place(index, mark).is_err()
        {
            return match index < CELLS 
            {
                true  => Transition::Ignored(Rejection::Taken),
                false => Transition::Ignored(Rejection::OffBoard)
            };
        }

        self.history.push(index);
        self.outcome = self.board.evaluate();

        match self.outcome 
        {
            Outcome::InProgress => 
            {
                self.mover = self.mover.next();
                Transition::Placed { index, mark }
            },
            outcome => Transition::Finished { index, mark, outcome }
        }
    }

    ///
    /// Determines whether the computer should move next.
    ///
    pub fn awaits_computer (& self) -> bool 
    {
        self.mode == OpponentMode::Computer 
            && self.mover == Mark::COMPUTER 
            && ! self.outcome.is_terminal()
    }

    ///
    /// Returns the board.
    ///
    pub fn board (& self) -> & Board 
    {
        & self.board
    }

    ///
    /// Returns the indices played so far, oldest first.
    ///
    pub fn history (& self) -> & Vec<usize>
    {
        & self.history
    }

    ///
    /// Determines whether the match has ended.
    ///
    pub fn is_over (& self) -> bool 
    {
        self.outcome.is_terminal()
    }

    ///
    /// Determines whether the cell at index belongs to the winning line.
    ///
    pub fn is_winning_cell (& self, index: usize) -> bool 
    {
        self.winning_line().map_or(false, |line| line.contains(& index))
    }

    ///
    /// Returns the opponent mode.
    ///
    pub fn mode (& self) -> OpponentMode 
    {
        self.mode
    }

    ///
    /// Returns the mark to move.
    ///
    pub fn mover (& self) -> Mark 
    {
        self.mover
    }

    ///
    /// Returns the indices of the empty cells.
    ///
    pub fn open_cells (& self) -> Vec<usize>
    {
        self.board.open_cells()
    }

    ///
    /// Returns how the match stands.
    ///
    pub fn outcome (& self) -> Outcome 
    {
        self.outcome
    }

    ///
    /// Picks a cell for the computer by drawing uniformly from the whole board 
    /// and drawing again whenever the cell is taken. Returns None once the match
    /// is over, which is also the only time no empty cell is left.
    ///
    pub fn random_open_cell<R: Rng + ?Sized> (& self, rng: & mut R) -> Option<usize>
    {
        if self.outcome.is_terminal()
        {
            return None;
        }

        loop 
        {
            let index = rng.random_range(0 .. CELLS);
            if self.board.validate(index).is_ok()
            {
                return Some(index);
            }
        }
    }

    ///
    /// Returns the mark that was asked to start.
    ///
    pub fn requested (& self) -> Mark 
    {
        self.requested
    }

    ///
    /// Restarts the match with the same inputs.
    ///
    pub fn reset (& mut self)
    {
        * self = Game::new(self.requested, self.mode);
    }

    ///
    /// Returns the side labels for the current mode.
    ///
    pub fn roles (& self) -> Vec<String>
    {
        self.mode.roles()
    }

    ///
    /// Plays a human intent. Against the computer, intents during the computer's 
    /// turn are refused so that only the computer ever places X.
    ///
    pub fn select (& mut self, index: usize) -> Transition 
    {
        match self.awaits_computer()
        {
            true  => Transition::Ignored(Rejection::ComputerToMove),
            false => self.apply(index)
        }
    }

    ///
    /// Returns the status line: whose turn it is, who won, or that the match is drawn.
    ///
    pub fn status (& self) -> String 
    {
        match self.outcome 
        {
            Outcome::InProgress => format!("{} turn", self.mover),
            outcome             => outcome.to_string()
        }
    }

    ///
    /// Returns the winning line, if the match was won.
    ///
    pub fn winning_line (& self) -> Option<[usize; 3]>
    {
        self.outcome.line()
    }

    ///
    /// Applies the starting-mover policy.
    ///
    fn starting_mover (starting: Mark, mode: OpponentMode) -> Mark 
    {
        match mode 
        {
            OpponentMode::Computer => Mark::COMPUTER,
            OpponentMode::Friend   => starting
        }
    }
}
