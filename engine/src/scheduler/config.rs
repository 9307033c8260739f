
use std::time::Duration;

use utils::{Serialize, Deserialize};

///
/// A configuration object for the computer opponent.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config 
{
    #[serde(default = "delay_ms")]
    pub delay_ms: u64,

    #[serde(default)]
    pub seed: Option<u64>
}

impl Default for Config 
{
    fn default () -> Config 
    {
        Config 
        {
            delay_ms: delay_ms(),
            seed: None
        }
    }
}

impl Config 
{
    ///
    /// Returns how long the computer waits before moving.
    ///
    pub fn delay (& self) -> Duration 
    {
        Duration::from_millis(self.delay_ms)
    }
}

fn delay_ms () -> u64 
{
    1000
}
