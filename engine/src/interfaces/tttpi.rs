
use std::io::{BufRead, Write};
use std::sync::mpsc::{channel, Receiver};

use crate::config::*;
use crate::matchengine::MatchEngine;

use tictactoe::{Mark, OpponentMode, Transition};
use tttp::{Command, Event, Response};

use utils::error::*;
use utils::log;
use utils::notate::Notate;

///
/// Runs the main loop and interfaces with a controller program.
///
/// Commands arrive one per line. Every command that changes or shows the match
/// is answered with a snapshot line; malformed commands are answered with a 
/// failure line and never end the loop. Events raised by the computer arrive 
/// on the receiver handed out by new(), independently of the command stream.
///
pub struct TTTPInterface 
{
    engine: MatchEngine
}

impl TTTPInterface
{
    ///
    /// Applies one parsed command, returning the response to write back, if any.
    ///
    pub fn execute (& mut self, command: & Command) -> Result<Option<Response>>
    {
        match command 
        {
            Command::Initialize => 
            {
                log::info!("TTTP startup");
                Ok(None)
            },

            Command::Shutdown => 
            {
                log::info!("TTTP shutdown");
                self.engine.shutdown();
                Ok(None)
            },

            Command::NewMatch(starting, mode) => 
            {
                self.engine.replace(* starting, * mode)?;
                Ok(Some(self.snapshot()))
            },

            Command::SelectCell(index) => 
            {
                if let Transition::Ignored(reason) = self.engine.select_cell(* index)?
                {
                    log::debug!("select-cell {} ignored: {}.", index, reason);
                }
                Ok(Some(self.snapshot()))
            },

            Command::ResetMatch => 
            {
                self.engine.reset_match()?;
                Ok(Some(self.snapshot()))
            },

            Command::ShowBoard => 
            {
                let game = self.engine.game();
                log::info!("{}\n{}", game.board().notate(), game.board());
                Ok(Some(self.snapshot()))
            }
        }
    }

    ///
    /// Creates a new TTTP interface around a fresh match, along with the stream of 
    /// events the match raises on its own.
    ///
    pub fn new (config: & Config, starting: Mark, mode: OpponentMode) -> Result<(TTTPInterface, Receiver<Event>)>
    {
        let (sender, receiver) = channel();
        let engine = MatchEngine::new(starting, mode, & config.computer, sender)?;
        Ok((TTTPInterface { engine }, receiver))
    }

    ///
    /// Runs the main loop until shutdown or the end of the input.
    ///
    pub fn run_loop<R: BufRead, W: Write> (& mut self, input: R, mut output: W) -> Result<()>
    {
        for line in input.lines()
        {
            let line = line.context("Failed to read a command line.")?;

            let command = match Command::parse_line(& line)
            {
                Ok(Some(command)) => command,
                Ok(None)          => continue,
                Err(e)            => 
                {
                    log::error!("{:#}", e);
                    TTTPInterface::respond(& mut output, & Response::Failure(format!("{:#}", e)))?;
                    continue;
                }
            };

            match self.execute(& command)
            {
                Ok(Some(response)) => TTTPInterface::respond(& mut output, & response)?,
                Ok(None)           => {},
                Err(e)             => 
                {
                    log::error!("{:#}", e);
                    TTTPInterface::respond(& mut output, & Response::Failure(format!("{:#}", e)))?;
                }
            };

            if command == Command::Shutdown 
            {
                break;
            }
        }

        Ok(())
    }

    ///
    /// Writes one response line.
    ///
    fn respond<W: Write> (output: & mut W, response: & Response) -> Result<()>
    {
        writeln!(output, "{}", response.line()?).context("Failed to write a response.")?;
        output.flush().context("Failed to flush the response stream.")?;
        Ok(())
    }

    ///
    /// Wraps the current snapshot as a response.
    ///
    fn snapshot (& self) -> Response 
    {
        Response::Snapshot(self.engine.snapshot())
    }
}

#[cfg(test)]
mod tests 
{
    use super::*;

    use std::io::Cursor;
    use std::time::Duration;

    use tttp::Snapshot;

    fn run (config: & Config, mode: OpponentMode, script: & str) -> (Vec<String>, Receiver<Event>)
    {
        let (mut interface, events) = TTTPInterface::new(config, Mark::X, mode).unwrap();
        let mut output = Vec::new();
        interface.run_loop(Cursor::new(script.to_owned()), & mut output).unwrap();

        let lines = String::from_utf8(output).unwrap().lines().map(|l| l.to_owned()).collect();
        (lines, events)
    }

    fn snapshot (line: & str) -> Snapshot 
    {
        assert!(line.starts_with("= "), "not a success line: {}", line);
        serde_json::from_str(& line[2 ..]).unwrap()
    }

    #[test]
    fn friendly_script () 
    {
        let script = "initialize\n\nselect-cell 0\nselect-cell 0\nbogus\nshow-board\nshutdown\nselect-cell 1\n";
        let (lines, _) = run(& Config::default(), OpponentMode::Friend, script);

        assert_eq!(lines.len(), 4);
        assert_eq!(snapshot(& lines[0]).cells[0], "X");
        assert_eq!(snapshot(& lines[0]).status, "O turn");
        assert_eq!(snapshot(& lines[1]).status, "O turn");
        assert_eq!(lines[2], "? Unknown command 'bogus'.");
        assert_eq!(snapshot(& lines[3]).cells[1], "");
    }

    #[test]
    fn scripted_win_and_reset () 
    {
        let script = "select-cell 0\nselect-cell 1\nselect-cell 3\nselect-cell 4\nselect-cell 6\nselect-cell 8\nreset-match\n";
        let (lines, events) = run(& Config::default(), OpponentMode::Friend, script);

        let won = snapshot(& lines[4]);
        assert_eq!(won.status, "X won match");
        assert_eq!(won.winning_line, Some([0, 3, 6]));
        assert_eq!(snapshot(& lines[5]).cells[8], "");

        let reset = snapshot(& lines[6]);
        assert_eq!(reset.status, "X turn");
        assert!(reset.cells.iter().all(|c| c.is_empty()));

        assert!(matches!(events.recv_timeout(Duration::from_secs(1)).unwrap(), Event::Finished { .. }));
    }

    #[test]
    fn new_match_against_the_computer () 
    {
        let mut config = Config::default();
        config.computer.delay_ms = 10_000;

        let (lines, _) = run(& config, OpponentMode::Friend, "new-match O computer\nselect-cell 2\nnew-match Q friend\n");

        let started = snapshot(& lines[0]);
        assert_eq!(started.mode, OpponentMode::Computer);
        assert_eq!(started.mover, Mark::X);
        assert_eq!(started.roles, vec!["O : You", "X : Computer"]);

        // The computer has not moved yet, so the human is refused.
        assert_eq!(snapshot(& lines[1]).cells[2], "");
        assert!(lines[2].starts_with("? "));
    }
}
