
use std::fs::OpenOptions;
use std::io::Read;
use std::path::Path;

use utils::error::*;
use utils::{Serialize, Deserialize};

pub use crate::scheduler::config::Config as ComputerConfig;

///
/// Represents a full configuration.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config 
{
    #[serde(default)]
    pub computer: ComputerConfig,

    #[serde(default, rename = "match")]
    pub game: MatchConfig,

    #[serde(default = "log_path")]
    pub log_path: String,

    #[serde(default = "log_level")]
    pub log_level: String
}

///
/// The inputs a match is built from, as the presentation layer hands them over.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig 
{
    #[serde(default = "turn")]
    pub turn: String,

    #[serde(default = "mode")]
    pub mode: String
}

impl Default for Config 
{
    fn default () -> Config 
    {
        Config 
        {
            computer: ComputerConfig::default(),
            game: MatchConfig::default(),
            log_path: log_path(),
            log_level: log_level()
        }
    }
}

impl Default for MatchConfig 
{
    fn default () -> MatchConfig 
    {
        MatchConfig { turn: turn(), mode: mode() }
    }
}

impl Config 
{
    ///
    /// Reads the configuration at the given path. A missing file yields the defaults.
    ///
    pub fn load (path: & str) -> Result<Config>
    {
        if ! Path::new(path).exists()
        {
            return Ok(Config::default());
        }

        let context = format!("Failed to load the configuration at '{}'.", path);

        let mut config_str = String::new();
        OpenOptions::new().read(true).open(path).context(context.clone())?
            .read_to_string(& mut config_str).context(context.clone())?;

        utils::from_toml(& config_str).context(context)
    }
}

///
/// Returns the default log path.
///
fn log_path () -> String 
{
    "logs".to_owned()
}

fn log_level () -> String 
{
    "info".to_owned()
}

fn turn () -> String 
{
    "X".to_owned()
}

fn mode () -> String 
{
    tictactoe::OpponentMode::DEFAULT_NOTATION.to_owned()
}

#[cfg(test)]
mod tests 
{
    use super::*;

    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults () 
    {
        let config = Config::load("no/such/dir/config.toml").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.computer.delay_ms, 1000);
        assert_eq!(config.computer.seed, None);
        assert_eq!(config.game.turn, "X");
        assert_eq!(config.game.mode, "player");
        assert_eq!(config.log_path, "logs");
    }

    #[test]
    fn partial_file_fills_in_defaults () 
    {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"\n\n[computer]\nseed = 42\n\n[match]\nmode = \"computer\"").unwrap();

        let config = Config::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.computer.seed, Some(42));
        assert_eq!(config.computer.delay_ms, 1000);
        assert_eq!(config.game.mode, "computer");
        assert_eq!(config.game.turn, "X");
    }

    #[test]
    fn malformed_file_is_an_error () 
    {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[computer]\ndelay_ms = \"soon\"").unwrap();

        let err = Config::load(file.path().to_str().unwrap()).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to load the configuration"));
    }
}
