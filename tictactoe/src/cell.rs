
use super::mark::Mark;

use utils::notate::{Notate, NotationError};
use utils::*;

///
/// A single cell on the board, which is either empty or holds a mark.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Cell
{
    #[default]
    Empty,
    X,
    O
}

impl std::fmt::Display for Cell
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        let token = match self 
        {
            Cell::X     => "X",
            Cell::O     => "O",
            Cell::Empty => "."
        };
        write!(f, "{}", token)
    }
}

impl Notate for Cell 
{
    fn notate (& self) -> String 
    {
        match self 
        {
            Cell::X     => "X".to_string(),
            Cell::O     => "O".to_string(),
            Cell::Empty => "_".to_string()
        }
    }

    fn parse (s: & str) -> Result<Cell>
    {
        match s 
        {
            "X" | "x"                  => Ok(Cell::X),
            "O" | "o"                  => Ok(Cell::O),
            "" | "_" | "-" | "." | "," => Ok(Cell::Empty),
            _                          => Err(NotationError::invalid("cell", s))
        }
    }
}

impl From<Mark> for Cell 
{
    fn from (mark: Mark) -> Cell 
    {
        match mark 
        {
            Mark::X => Cell::X,
            Mark::O => Cell::O
        }
    }
}

impl Cell 
{
    ///
    /// Determines whether nothing has been played here yet.
    ///
    pub fn is_empty (& self) -> bool 
    {
        * self == Cell::Empty
    }

    ///
    /// Returns the mark held by this cell, if any.
    ///
    pub fn mark (& self) -> Option<Mark>
    {
        match self 
        {
            Cell::X     => Some(Mark::X),
            Cell::O     => Some(Mark::O),
            Cell::Empty => None
        }
    }

    ///
    /// Returns the label the presentation layer shows for this cell, which is 
    /// the empty string for an empty cell.
    ///
    pub fn label (& self) -> String 
    {
        self.mark().map(|m| m.notate()).unwrap_or_default()
    }
}
