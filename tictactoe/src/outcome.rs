
use super::mark::Mark;

use utils::*;

///
/// An enum that represents the outcome of a match.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Outcome 
{
    #[default]
    InProgress,
    Won { winner: Mark, line: [usize; 3] },
    Drawn
}

impl std::fmt::Display for Outcome 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result 
    {
        match self 
        {
            Outcome::Won { winner, .. } => write!(f, "{} won match", winner),
            Outcome::InProgress         => write!(f, "match in progress"),
            Outcome::Drawn              => write!(f, "match draw")
        }
    }
}

///
/// How loudly a one-time notice should be surfaced.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity 
{
    Success,
    Warning
}

///
/// The one-time notice raised when a match reaches a terminal outcome.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Notice 
{
    pub title: String,
    pub severity: Severity
}

impl Outcome 
{
    ///
    /// Determines whether no further moves are accepted.
    ///
    pub fn is_terminal (& self) -> bool 
    {
        ! matches!(self, Outcome::InProgress)
    }

    ///
    /// Returns the winning line, if there is one.
    ///
    pub fn line (& self) -> Option<[usize; 3]>
    {
        match self 
        {
            Outcome::Won { line, .. } => Some(* line),
            _                         => None
        }
    }

    ///
    /// Returns the notice for a terminal outcome.
    ///
    pub fn notice (& self) -> Option<Notice>
    {
        match self 
        {
            Outcome::Won { winner, .. } => Some(Notice { title: format!("{} won match", winner), severity: Severity::Success }),
            Outcome::Drawn              => Some(Notice { title: "Match Draw".to_owned(), severity: Severity::Warning }),
            Outcome::InProgress         => None
        }
    }

    ///
    /// Returns the winner, if there is one.
    ///
    pub fn winner (& self) -> Option<Mark>
    {
        match self 
        {
            Outcome::Won { winner, .. } => Some(* winner),
            _                           => None
        }
    }
}
