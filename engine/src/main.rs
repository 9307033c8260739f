
mod config;
mod interfaces;
mod matchengine;
mod scheduler;

use std::thread;

use clap::Parser;

use interfaces::*;
use tictactoe::{Mark, OpponentMode};
use tttp::Response;

use utils::notate::Notate;
use utils::*;

///
/// A structure representing command line arguments. The match inputs override 
/// the ones in the configuration file.
///
#[derive(Parser)]
struct CLIArgs 
{
    #[clap(short, long, default_value = "config/config.toml")]
    config: String,

    #[clap(short, long)]
    turn: Option<String>,

    #[clap(short, long)]
    mode: Option<String>
}

fn main () -> Result<()>
{
    let args = CLIArgs::parse();

    let mut config = config::Config::load(& args.config)?;
    if let Some(turn) = args.turn 
    {
        config.game.turn = turn;
    }
    if let Some(mode) = args.mode 
    {
        config.game.mode = mode;
    }

    let _logger = log::initialize(& config.log_path, "engine", & config.log_level)?;

    let starting = Mark::parse(& config.game.turn).context("Invalid starting turn.")?;
    let mode = OpponentMode::parse(& config.game.mode)?;

    let (mut interface, events) = tttpi::TTTPInterface::new(& config, starting, mode)?;

    let printer = thread::Builder::new()
        .name("event-printer".to_owned())
        .spawn(move || 
        {
            for event in events 
            {
                match Response::Event(event).line()
                {
                    Ok(line) => println!("{}", line),
                    Err(e)   => log::error!("{:#}", e)
                }
            }
        })
        .context("Failed to spawn the event printer.")?;

    let stdin = std::io::stdin();
    interface.run_loop(stdin.lock(), std::io::stdout())?;

    // Closing the match closes the event stream, which ends the printer.
    drop(interface);
    printer.join().map_err(|_| error::error!("The event printer panicked."))?;

    Ok(())
}
