
use utils::notate::{Notate, NotationError};
use utils::*;

///
/// A mark in a game of Tic-Tac-Toe.
///
/// There are two marks, X and O. Players alternate placing their mark into 
/// empty cells; the first to fill a row, a column or a diagonal wins. When 
/// playing against the computer, the computer is always X and the human O.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Mark 
{
    X,
    O
}

impl std::fmt::Display for Mark 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.notate())
    }
}

impl Notate for Mark 
{
    fn notate (& self) -> String 
    {
        match self 
        {
            Mark::X => "X".to_string(),
            Mark::O => "O".to_string()
        }
    }

    fn parse (s: & str) -> Result<Mark>
    {
        match s 
        {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            _         => Err(NotationError::invalid("mark", s))
        }
    }
}

impl Mark 
{
    ///
    /// The mark the computer plays with.
    ///
    pub const COMPUTER : Mark = Mark::X;

    ///
    /// Returns the mark opposite this one.
    ///
    pub fn next (& self) -> Mark 
    {
        match self 
        {
            Mark::X => Mark::O,
            Mark::O => Mark::X
        }
    }
}

#[cfg(test)]
mod tests 
{
    use super::*;

    #[test]
    fn next_alternates () 
    {
        assert_eq!(Mark::X.next(), Mark::O);
        assert_eq!(Mark::O.next(), Mark::X);
        assert_eq!(Mark::X.next().next(), Mark::X);
    }

    #[test]
    fn parse_is_case_insensitive () 
    {
        assert_eq!(Mark::parse("x").unwrap(), Mark::X);
        assert_eq!(Mark::parse("O").unwrap(), Mark::O);
        assert!(Mark::parse("Z").is_err());
        assert!(Mark::parse("").is_err());
    }
}
