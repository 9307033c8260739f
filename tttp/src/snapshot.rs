
use tictactoe::outcome::Notice;
use tictactoe::{Game, Mark, OpponentMode, Outcome};

use utils::*;

///
/// Everything the presentation layer needs to render a match.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot 
{
    pub cells: Vec<String>,
    pub mover: Mark,
    pub mode: OpponentMode,
    pub status: String,
    pub outcome: Outcome,
    pub winning_line: Option<[usize; 3]>,
    pub roles: Vec<String>
}

impl From<& Game> for Snapshot 
{
    fn from (game: & Game) -> Snapshot 
    {
        Snapshot 
        {
            cells: game.board().cells().iter().map(|c| c.label()).collect(),
            mover: game.mover(),
            mode: game.mode(),
            status: game.status(),
            outcome: game.outcome(),
            winning_line: game.winning_line(),
            roles: game.roles()
        }
    }
}

///
/// Something that happened without the controller asking for it.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum Event 
{
    ///
    /// The computer placed its mark.
    ///
    ComputerMove { index: usize, mark: Mark },

    ///
    /// The match reached a terminal outcome; raised once per match.
    ///
    Finished { outcome: Outcome, notice: Notice }
}

///
/// One line written back to the controller.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response 
{
    Snapshot(Snapshot),
    Event(Event),
    Failure(String)
}

impl Response 
{
    ///
    /// Writes this response as a single protocol line: '=' for success, '?' for failure.
    ///
    pub fn line (& self) -> Result<String>
    {
        match self 
        {
            Response::Snapshot(snapshot) => Ok(format!("= {}", to_json(snapshot)?)),
            Response::Event(event)       => Ok(format!("= {}", to_json(event)?)),
            Response::Failure(message)   => Ok(format!("? {}", message))
        }
    }
}
