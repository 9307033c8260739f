
use std::sync::Arc;
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use super::sync::Latch;

use utils::error::*;
use utils::log;

///
/// A one-shot delayed task running on its own named thread.
///
/// The task runs once the delay elapses, unless the timer is cancelled first. 
/// The task receives the timer's latch so it can re-check for a cancellation 
/// that raced with the delay, typically while holding whatever lock guards 
/// the state it is about to touch.
///
/// Dropping a timer cancels it and joins its thread, so a timer must not be 
/// dropped while holding a lock its task takes.
///
#[derive(Debug)]
pub struct Timer 
{
    latch: Arc<Latch>,
    handle: Option<JoinHandle<()>>
}

impl Timer 
{
    ///
    /// Spawns the thread and starts the delay.
    ///
    pub fn arm<F> (name: & str, delay: Duration, task: F) -> Result<Timer>
        where F: FnOnce(& Latch) + Send + 'static
    {
        let latch = Arc::new(Latch::new());
        let worker_latch = latch.clone();

        let handle = thread::Builder::new()
            .name(name.to_owned())
            .spawn(move || 
            {
                if ! worker_latch.wait_timeout(delay)
                {
                    task(& worker_latch);
                }
            })
            .context(format!("Failed to spawn the '{}' timer thread.", name))?;

        Ok(Timer { latch, handle: Some(handle) })
    }

    ///
    /// Stops the task from running, if it has not started yet.
    ///
    pub fn cancel (& self)
    {
        self.latch.set();
    }

    ///
    /// Determines whether the thread is done, either by running the task or by being cancelled.
    ///
    pub fn is_finished (& self) -> bool 
    {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }
}

impl Drop for Timer 
{
    fn drop (& mut self)
    {
        self.cancel();
        if let Some(handle) = self.handle.take()
        {
            if handle.join().is_err()
            {
                log::error!("A timer task panicked.");
            }
        }
    }
}
