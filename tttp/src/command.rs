
use tictactoe::{Mark, OpponentMode};

use utils::notate::Notate;
use utils::*;

///
/// The available commands in the Tic-Tac-Toe text protocol.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command 
{
    // Special lifecycle commands, not to be called as normal commands.

    Initialize,                         // Announces the controller to the engine.
    Shutdown,                           // Cancels pending work and halts the engine.

    // State commands.

    NewMatch(Mark, OpponentMode),       // Replaces the match with one built from new inputs.
    SelectCell(usize),                  // Plays a human intent, provided it is legal.
    ResetMatch,                         // Restarts the match with the same inputs.

    // Observational commands.

    ShowBoard                           // Prints the current snapshot.
}

///
/// The ways a command line can be rejected.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError 
{
    #[error("Unknown command '{0}'.")]
    Unknown(String),

    #[error("Command '{command}' expects {expected} argument(s), found {found}.")]
    Arity { command: String, expected: usize, found: usize },

    #[error("Invalid cell index '{0}'.")]
    Index(String)
}

impl Command 
{
    ///
    /// Maps this command to a literal command string.
    ///
    pub fn command (& self) -> String 
    {
        match self 
        {
            Command::Initialize     => "initialize".to_owned(),
            Command::Shutdown       => "shutdown".to_owned(),

            Command::NewMatch(_, _) => "new-match".to_owned(),
            Command::SelectCell(_)  => "select-cell".to_owned(),
            Command::ResetMatch     => "reset-match".to_owned(),

            Command::ShowBoard      => "show-board".to_owned()
        }
    }

    ///
    /// Writes the full command line, arguments included.
    ///
    pub fn line (& self) -> String 
    {
        match self 
        {
            Command::NewMatch(mark, mode) => format!("{} {} {}", self.command(), mark.notate(), mode.notate()),
            Command::SelectCell(index)    => format!("{} {}", self.command(), index),
            _                             => self.command()
        }
    }

    ///
    /// Parses one command line. Blank lines parse to None.
    ///
    pub fn parse_line (line: & str) -> Result<Option<Command>>
    {
        let args : Vec<& str> = line.split_whitespace().collect();
        let cmd = match args.first()
        {
            Some(cmd) => * cmd,
            None      => return Ok(None)
        };
        let rest = & args[1 ..];

        let command = match cmd 
        {
            "initialize"  => Command::check_arity(cmd, rest, 0).map(|_| Command::Initialize)?,
            "shutdown"    => Command::check_arity(cmd, rest, 0).map(|_| Command::Shutdown)?,
            "reset-match" => Command::check_arity(cmd, rest, 0).map(|_| Command::ResetMatch)?,
            "show-board"  => Command::check_arity(cmd, rest, 0).map(|_| Command::ShowBoard)?,

            "select-cell" => 
            {
                Command::check_arity(cmd, rest, 1)?;
                let index = rest[0].parse::<usize>().map_err(|_| CommandError::Index(rest[0].to_owned()))?;
                Command::SelectCell(index)
            },

            "new-match" => 
            {
                Command::check_arity(cmd, rest, 2)?;
                let mark = Mark::parse(rest[0]).context(format!("Invalid starting mark in '{}'.", line.trim()))?;
                let mode = OpponentMode::parse(rest[1])?;
                Command::NewMatch(mark, mode)
            },

            _ => return Err(CommandError::Unknown(cmd.to_owned()).into())
        };

        Ok(Some(command))
    }

    ///
    /// Checks the number of arguments.
    ///
    fn check_arity (cmd: & str, rest: & [& str], expected: usize) -> std::result::Result<(), CommandError>
    {
        match rest.len() == expected 
        {
            true  => Ok(()),
            false => Err(CommandError::Arity { command: cmd.to_owned(), expected, found: rest.len() })
        }
    }
}

#[cfg(test)]
mod tests 
{
    use super::*;

    #[test]
    fn parses_every_command () 
    {
        assert_eq!(Command::parse_line("initialize").unwrap(), Some(Command::Initialize));
        assert_eq!(Command::parse_line("  shutdown \n").unwrap(), Some(Command::Shutdown));
        assert_eq!(Command::parse_line("reset-match").unwrap(), Some(Command::ResetMatch));
        assert_eq!(Command::parse_line("show-board").unwrap(), Some(Command::ShowBoard));
        assert_eq!(Command::parse_line("select-cell 4").unwrap(), Some(Command::SelectCell(4)));
        assert_eq!(
            Command::parse_line("new-match o computer").unwrap(), 
            Some(Command::NewMatch(Mark::O, OpponentMode::Computer))
        );
        assert_eq!(
            Command::parse_line("new-match X player").unwrap(), 
            Some(Command::NewMatch(Mark::X, OpponentMode::Friend))
        );
    }

    #[test]
    fn blank_lines_are_skipped () 
    {
        assert_eq!(Command::parse_line("").unwrap(), None);
        assert_eq!(Command::parse_line("   \t").unwrap(), None);
    }

    #[test]
    fn malformed_lines_are_typed_errors () 
    {
        let err = Command::parse_line("undo-move").unwrap_err();
        assert_eq!(err.downcast_ref::<CommandError>(), Some(& CommandError::Unknown("undo-move".to_owned())));

        let err = Command::parse_line("select-cell").unwrap_err();
        assert!(matches!(err.downcast_ref::<CommandError>(), Some(CommandError::Arity { expected: 1, found: 0, .. })));

        let err = Command::parse_line("select-cell -1").unwrap_err();
        assert_eq!(err.downcast_ref::<CommandError>(), Some(& CommandError::Index("-1".to_owned())));

        assert!(Command::parse_line("new-match Z friend").is_err());
    }

    #[test]
    fn lines_parse_back () 
    {
        for command in [Command::Initialize, Command::SelectCell(8), Command::NewMatch(Mark::O, OpponentMode::Friend)]
        {
            assert_eq!(Command::parse_line(& command.line()).unwrap(), Some(command));
        }
    }
}
