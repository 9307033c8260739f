
use std::sync::{Arc, Mutex};
use std::sync::mpsc::Sender;

use rand::rngs::StdRng;
use rand::SeedableRng;

use tictactoe::{Game, Mark, OpponentMode, Transition};
use tttp::{Event, Snapshot};

use crate::config::ComputerConfig;
use crate::scheduler::sync::{lock, Latch};
use crate::scheduler::Timer;

use utils::error::*;
use utils::log;
use utils::notate::Notate;

///
/// The state shared between the engine and its computer-move timer.
///
struct Shared 
{
    game: Mutex<Game>,
    rng: Mutex<StdRng>,
    events: Mutex<Sender<Event>>
}

///
/// Owns one match and drives the computer opponent.
///
/// Every mutation happens under the game lock, so each intent is one atomic 
/// transition. Whenever the computer is to move, a one-shot timer is armed; 
/// when it fires, the timer takes the game lock, checks it has not been 
/// cancelled in the meantime, and plays a uniformly random open cell. A reset 
/// or a replaced match cancels the pending timer under the same lock, so a 
/// stale timer can never touch the new board.
///
/// Computer moves and terminal outcomes are published on the event channel.
///
pub struct MatchEngine 
{
    shared: Arc<Shared>,
    config: ComputerConfig,
    pending: Option<Timer>
}

impl Shared 
{
    ///
    /// Publishes an event; a closed channel only means nobody is listening anymore.
    ///
    fn emit (& self, event: Event)
    {
        if lock(& self.events).send(event).is_err()
        {
            log::debug!("Dropped an event, the listener is gone.");
        }
    }

    ///
    /// Plays the computer's move, unless the timer was cancelled.
    ///
    fn play_computer (& self, latch: & Latch)
    {
        let mut game = lock(& self.game);

        if latch.is_set()
        {
            log::debug!("Computer move cancelled before it was played.");
            return;
        }

        let index = match game.random_open_cell(& mut * lock(& self.rng))
        {
            Some(index) => index,
            None        => return
        };

        let transition = game.apply(index);
        if let Transition::Placed { index, mark } | Transition::Finished { index, mark, .. } = transition 
        {
            self.emit(Event::ComputerMove { index, mark });
        }
        self.report(& transition, "computer");
    }

    ///
    /// Logs a transition and raises the one-time notice when the match ends.
    ///
    fn report (& self, transition: & Transition, who: & str)
    {
        match transition 
        {
            Transition::Ignored(reason) => 
            {
                log::debug!("Ignored a {} intent: {}.", who, reason);
            },
            Transition::Placed { index, mark } => 
            {
                log::info!("{} ({}) played {}.", mark, who, index);
            },
            Transition::Finished { index, mark, outcome } => 
            {
                log::info!("{} ({}) played {}: {}.", mark, who, index, outcome);
                if let Some(notice) = outcome.notice()
                {
                    self.emit(Event::Finished { outcome: * outcome, notice });
                }
            }
        }
    }
}

impl MatchEngine 
{
    ///
    /// Returns a copy of the match as it stands.
    ///
    pub fn game (& self) -> Game 
    {
        lock(& self.shared.game).clone()
    }

    ///
    /// Creates an engine and starts a match with the given inputs. Against the 
    /// computer, the computer's opening move is armed straight away.
    ///
    pub fn new (starting: Mark, mode: OpponentMode, config: & ComputerConfig, events: Sender<Event>) -> Result<MatchEngine>
    {
        let rng = match config.seed 
        {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_os_rng()
        };

        let shared = Shared 
        {
            game: Mutex::new(Game::new(starting, mode)),
            rng: Mutex::new(rng),
            events: Mutex::new(events)
        };

        let mut engine = MatchEngine { shared: Arc::new(shared), config: * config, pending: None };
        engine.restart(|_| {})?;

        Ok(engine)
    }

    ///
    /// Replaces the match with one built from new inputs.
    ///
    pub fn replace (& mut self, starting: Mark, mode: OpponentMode) -> Result<()>
    {
        self.restart(|game| * game = Game::new(starting, mode))
    }

    ///
    /// Restarts the match with the same inputs, cancelling any pending computer move.
    ///
    pub fn reset_match (& mut self) -> Result<()>
    {
        self.restart(|game| game.reset())
    }

    ///
    /// Plays a human intent. Illegal intents are ignored and reported as such.
    ///
    /// If the computer is due but nothing is armed, because arming failed earlier,
    /// any intent arms it again. A failure to arm is logged rather than returned,
    /// since the move itself has already been played.
    ///
    pub fn select_cell (& mut self, index: usize) -> Result<Transition>
    {
        let (transition, armed) = 
        {
            let mut game = lock(& self.shared.game);
            let idle = self.pending.as_ref().map_or(true, |timer| timer.is_finished());

            let transition = game.select(index);
            self.shared.report(& transition, "human");

            let armed = match transition.is_applied() || idle 
            {
                true  => self.arm_or_log(& game),
                false => None
            };
            (transition, armed)
        };

        if let Some(timer) = armed 
        {
            // The previous timer already played or was lost, so this join is immediate.
            drop(self.pending.replace(timer));
        }

        Ok(transition)
    }

    ///
    /// Cancels any pending computer move and waits for its thread.
    ///
    pub fn shutdown (& mut self)
    {
        if let Some(timer) = self.pending.take()
        {
            {
                let _game = lock(& self.shared.game);
                timer.cancel();
            }
            drop(timer);
        }
    }

    ///
    /// Returns what the presentation layer renders.
    ///
    pub fn snapshot (& self) -> Snapshot 
    {
        Snapshot::from(& * lock(& self.shared.game))
    }

    ///
    /// Arms the computer's move if the match is waiting for it.
    ///
    fn arm (& self, game: & Game) -> Result<Option<Timer>>
    {
        if ! game.awaits_computer()
        {
            return Ok(None);
        }

        log::debug!("Computer move armed for {} ms.", self.config.delay_ms);

        let shared = self.shared.clone();
        let timer = Timer::arm("computer-move", self.config.delay(), move |latch| shared.play_computer(latch))?;

        Ok(Some(timer))
    }

    ///
    /// Arms the computer's move, logging instead of failing.
    ///
    fn arm_or_log (& self, game: & Game) -> Option<Timer>
    {
        match self.arm(game)
        {
            Ok(timer) => timer,
            Err(e)    => 
            {
                log::error!("{:#}", e);
                None
            }
        }
    }

    ///
    /// Cancels the pending timer and rewrites the match under one lock, then arms a 
    /// new timer if needed. The old timer thread is joined only after the lock is
    /// released, since it may be waiting for it.
    ///
    fn restart<F> (& mut self, rewrite: F) -> Result<()>
        where F: FnOnce(& mut Game)
    {
        let retired = self.pending.take();

        let armed = 
        {
            let mut game = lock(& self.shared.game);
            if let Some(timer) = & retired 
            {
                if ! timer.is_finished()
                {
                    log::debug!("Cancelled the pending computer move.");
                }
                timer.cancel();
            }

            rewrite(& mut game);
            log::info!("New match {}: {} to move.", game.mode().notate(), game.mover());

            self.arm(& game)
        };

        drop(retired);
        self.pending = armed?;

        Ok(())
    }
}

impl Drop for MatchEngine 
{
    fn drop (& mut self)
    {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests 
{
    use super::*;

    use std::sync::mpsc::{channel, Receiver};
    use std::thread;
    use std::time::Duration;

    use tictactoe::Outcome;
    use tictactoe::game::Rejection;

    const PATIENCE : Duration = Duration::from_secs(5);

    fn engine (starting: Mark, mode: OpponentMode, delay_ms: u64) -> (MatchEngine, Receiver<Event>)
    {
        let (sender, receiver) = channel();
        let config = ComputerConfig { delay_ms, seed: Some(2024) };
        (MatchEngine::new(starting, mode, & config, sender).unwrap(), receiver)
    }

    fn count (game: & Game, mark: Mark) -> usize 
    {
        game.board().cells().iter().filter(|c| c.mark() == Some(mark)).count()
    }

    #[test]
    fn computer_opens_its_match () 
    {
        let (engine, events) = engine(Mark::O, OpponentMode::Computer, 10);

        match events.recv_timeout(PATIENCE).unwrap()
        {
            Event::ComputerMove { index, mark } => 
            {
                assert_eq!(mark, Mark::X);
                let game = engine.game();
                assert_eq!(game.history(), & vec![index]);
                assert_eq!(game.mover(), Mark::O);
                assert_eq!(engine.snapshot().status, "O turn");
            },
            other => panic!("unexpected event {:?}", other)
        }
    }

    #[test]
    fn computer_answers_every_human_move () 
    {
        let (mut engine, events) = engine(Mark::X, OpponentMode::Computer, 5);

        loop 
        {
            match events.recv_timeout(PATIENCE).unwrap()
            {
                Event::ComputerMove { mark, .. } => assert_eq!(mark, Mark::X),
                Event::Finished { .. }           => break
            }

            let game = engine.game();
            if game.is_over()
            {
                continue;
            }
            assert_eq!(game.mover(), Mark::O);

            let index = game.open_cells()[0];
            match engine.select_cell(index).unwrap()
            {
                Transition::Placed { mark, .. }      => assert_eq!(mark, Mark::O),
                Transition::Finished { outcome, .. } => 
                {
                    assert_ne!(outcome, Outcome::InProgress);
                    assert!(matches!(events.recv_timeout(PATIENCE).unwrap(), Event::Finished { .. }));
                    break;
                },
                Transition::Ignored(reason)          => panic!("human move refused: {}", reason)
            }
        }

        let game = engine.game();
        assert!(game.is_over());
        assert!(count(& game, Mark::X) >= count(& game, Mark::O));
        assert!(events.recv_timeout(Duration::from_millis(100)).is_err());
    }

    #[test]
    fn human_cannot_play_the_computers_turn () 
    {
        let (mut engine, _events) = engine(Mark::O, OpponentMode::Computer, 10_000);

        assert_eq!(engine.select_cell(4).unwrap(), Transition::Ignored(Rejection::ComputerToMove));
        assert!(engine.game().history().is_empty());
    }

    #[test]
    fn reset_cancels_the_pending_move () 
    {
        let (mut engine, events) = engine(Mark::X, OpponentMode::Computer, 10_000);

        // The long timer armed at construction must never play once replaced.
        engine.config.delay_ms = 10;
        engine.replace(Mark::X, OpponentMode::Computer).unwrap();

        assert!(matches!(events.recv_timeout(PATIENCE).unwrap(), Event::ComputerMove { .. }));
        assert!(events.recv_timeout(Duration::from_millis(300)).is_err());
        assert_eq!(engine.game().history().len(), 1);

        engine.config.delay_ms = 10_000;
        engine.reset_match().unwrap();
        assert!(engine.game().history().is_empty());

        engine.config.delay_ms = 10;
        engine.reset_match().unwrap();
        assert!(matches!(events.recv_timeout(PATIENCE).unwrap(), Event::ComputerMove { .. }));
        assert!(events.recv_timeout(Duration::from_millis(300)).is_err());
        assert_eq!(engine.game().history().len(), 1);
    }

    #[test]
    fn a_lost_timer_is_armed_again_by_the_next_intent () 
    {
        let (mut engine, events) = engine(Mark::O, OpponentMode::Computer, 10_000);

        // Leave the computer due with nothing armed.
        engine.shutdown();
        engine.config.delay_ms = 10;

        assert_eq!(engine.select_cell(4).unwrap(), Transition::Ignored(Rejection::ComputerToMove));
        assert!(matches!(events.recv_timeout(PATIENCE).unwrap(), Event::ComputerMove { mark: Mark::X, .. }));
        assert_eq!(engine.game().mover(), Mark::O);
    }

    #[test]
    fn friends_never_wake_the_computer () 
    {
        let (mut engine, events) = engine(Mark::X, OpponentMode::Friend, 1);

        for index in [0, 1, 3, 4]
        {
            assert!(engine.select_cell(index).unwrap().is_applied());
        }
        assert!(events.recv_timeout(Duration::from_millis(50)).is_err());

        let won = Outcome::Won { winner: Mark::X, line: [0, 3, 6] };
        assert_eq!(engine.select_cell(6).unwrap(), Transition::Finished { index: 6, mark: Mark::X, outcome: won });

        match events.recv_timeout(PATIENCE).unwrap()
        {
            Event::Finished { outcome, notice } => 
            {
                assert_eq!(outcome, won);
                assert_eq!(notice.title, "X won match");
            },
            other => panic!("unexpected event {:?}", other)
        }

        assert_eq!(engine.select_cell(8).unwrap(), Transition::Ignored(Rejection::Finished));
        assert!(events.recv_timeout(Duration::from_millis(50)).is_err());
    }

    #[test]
    fn reset_restores_a_blank_match () 
    {
        let (mut engine, _events) = engine(Mark::O, OpponentMode::Friend, 1);

        for index in [0, 3, 1, 4, 2]
        {
            engine.select_cell(index).unwrap();
        }
        assert!(engine.game().is_over());

        engine.reset_match().unwrap();
        assert_eq!(engine.game(), Game::new(Mark::O, OpponentMode::Friend));

        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8]
        {
            engine.select_cell(index).unwrap();
        }
        assert_eq!(engine.game().outcome(), Outcome::Drawn);

        engine.reset_match().unwrap();
        assert_eq!(engine.game(), Game::new(Mark::O, OpponentMode::Friend));
        assert_eq!(engine.snapshot().status, "O turn");
    }

    #[test]
    fn replace_switches_inputs () 
    {
        let (mut engine, events) = engine(Mark::X, OpponentMode::Friend, 10);
        engine.select_cell(0).unwrap();

        engine.replace(Mark::O, OpponentMode::Computer).unwrap();
        assert!(matches!(events.recv_timeout(PATIENCE).unwrap(), Event::ComputerMove { mark: Mark::X, .. }));
        assert_eq!(engine.game().mode(), OpponentMode::Computer);
    }

    #[test]
    fn dropping_a_waiting_engine_is_prompt () 
    {
        let (engine, events) = engine(Mark::X, OpponentMode::Computer, 60_000);
        drop(engine);
        assert!(events.recv_timeout(Duration::from_millis(50)).is_err());
    }
}
