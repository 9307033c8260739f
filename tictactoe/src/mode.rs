
use utils::notate::Notate;
use utils::*;

///
/// Who the second seat belongs to. The mode is fixed for the lifetime of a match.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OpponentMode 
{
    #[default]
    Friend,
    Computer
}

impl std::fmt::Display for OpponentMode 
{
    fn fmt (& self, f: & mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self 
        {
            OpponentMode::Friend   => write!(f, "vs Friend"),
            OpponentMode::Computer => write!(f, "vs Computer")
        }
    }
}

impl Notate for OpponentMode 
{
    fn notate (& self) -> String 
    {
        match self 
        {
            OpponentMode::Friend   => "friend".to_string(),
            OpponentMode::Computer => "computer".to_string()
        }
    }

    ///
    /// Parsing never fails: only the exact string "computer" selects the computer,
    /// and anything else (including the "player" default) is a friendly match.
    ///
    fn parse (s: & str) -> Result<OpponentMode>
    {
        match s 
        {
            "computer" => Ok(OpponentMode::Computer),
            _          => Ok(OpponentMode::Friend)
        }
    }
}

impl OpponentMode 
{
    ///
    /// The mode notation used when none is supplied.
    ///
    pub const DEFAULT_NOTATION : & 'static str = "player";

    ///
    /// Returns the side labels shown next to the board, if the seats are not symmetric.
    ///
    pub fn roles (& self) -> Vec<String>
    {
        match self 
        {
            OpponentMode::Computer => vec!["O : You".to_owned(), "X : Computer".to_owned()],
            OpponentMode::Friend   => vec![]
        }
    }
}
