
use super::cell::Cell;
use super::mark::Mark;
use super::outcome::Outcome;

use utils::error::Context;
use utils::notate::{Notate, NotationError};
use utils::*;

///
/// The number of cells on a board.
///
pub const CELLS : usize = 9;

///
/// The rows, columns and diagonals of the grid, in evaluation order.
///
pub const WIN_LINES : [[usize; 3]; 8] = 
[
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6]
];

///
/// Represents a game board in Tic-Tac-Toe. A game board is a 3x3 grid of cells,
/// stored row-major so that index i sits at row i / 3 and column i % 3.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board 
{
    cells: [Cell; CELLS]
}

impl Notate for Board 
{
    fn notate (& self) -> String 
    {
        self.cells.iter().map(|c| c.notate()).collect()
    }

    fn parse (s: & str) -> Result<Board>
    {
        let context = format!("Invalid notation '{}' for board.", s);

        let tokens = s.chars().collect::<Vec<char>>();
        if tokens.len() != CELLS 
        {
            return Err(Error::from(NotationError::Length { kind: "board", expected: CELLS, found: tokens.len() }))
                .context(context.clone());
        }

        let mut board = Board::blank();
        for (idx, token) in tokens.iter().enumerate()
        {
            board.cells[idx] = Cell::parse(& token.to_string()).context(context.clone())?;
        }

        Ok(board)
    }
}

impl std::fmt::Display for Board 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        for row in 0 .. 3 
        {
            for col in 0 .. 3 
            {
                write!(f, "{}", self.cells[row * 3 + col])?;
            }
            write!(f, "\n")?;
        }
        Ok(())
    }
}

impl Board 
{
    ///
    /// Returns a board with every cell empty.
    ///
    pub fn blank () -> Board 
    {
        Board { cells: [Cell::Empty; CELLS] }
    }

    ///
    /// Returns all cells in index order.
    ///
    pub fn cells (& self) -> & [Cell; CELLS]
    {
        & self.cells
    }

    ///
    /// Evaluates the board.
    ///
    /// Every line is checked, and a later matching line replaces an earlier one,
    /// so when one move completes two lines at once the line that comes last in 
    /// WIN_LINES is reported.
    ///
    pub fn evaluate (& self) -> Outcome 
    {
        let mut outcome = None;

        for line in WIN_LINES.iter()
        {
            if let Some(winner) = self.line_owner(line)
            {
                outcome = Some(Outcome::Won { winner, line: * line });
            }
        }

        match outcome 
        {
            Some(won)                 => won,
            None if self.is_full()    => Outcome::Drawn,
            None                      => Outcome::InProgress
        }
    }

    ///
    /// Returns the cell at the given index, or None if the index is off the board.
    ///
    pub fn get (& self, index: usize) -> Option<Cell>
    {
        self.cells.get(index).copied()
    }

    ///
    /// Determines whether no empty cell remains.
    ///
    pub fn is_full (& self) -> bool 
    {
        self.cells.iter().all(|c| ! c.is_empty())
    }

    ///
    /// Returns the indices of the empty cells, in ascending order.
    ///
    pub fn open_cells (& self) -> Vec<usize>
    {
        (0 .. CELLS).filter(|& i| self.cells[i].is_empty()).collect()
    }

    ///
    /// Places the mark into the cell, provided the index is on the board and the cell is empty.
    ///
    pub fn place (& mut self, index: usize, mark: Mark) -> Result<()>
    {
        self.validate(index).context(format!("Failed to place {} at {}.", mark, index))?;
        self.cells[index] = mark.into();
        Ok(())
    }

    ///
    /// Determines whether a mark could be placed at the index.
    ///
    pub fn validate (& self, index: usize) -> Result<()>
    {
        match self.get(index)
        {
            None              => Err(error::error!("Index {} is off the board, expected 0 ..= {}.", index, CELLS - 1)),
            Some(Cell::Empty) => Ok(()),
            Some(cell)        => Err(error::error!("Cell {} is already taken by {}.", index, cell))
        }
    }

    ///
    /// Returns the mark filling every cell of the line, if one does.
    ///
    fn line_owner (& self, line: & [usize; 3]) -> Option<Mark>
    {
        let [a, b, c] = * line;
        let first = self.cells[a];

        match first == self.cells[b] && first == self.cells[c]
        {
            true  => first.mark(),
            false => None
        }
    }
}
