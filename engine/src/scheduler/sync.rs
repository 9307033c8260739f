
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

///
/// Locks the mutex, carrying on with the data even if a holder panicked.
///
pub fn lock<T> (mutex: & Mutex<T>) -> MutexGuard<'_, T>
{
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

///
/// A one-way boolean latch: it starts unset, can be set once from any 
/// thread, and can be waited on with a timeout.
///
#[derive(Debug, Default)]
pub struct Latch 
{
    mutex: Mutex<bool>,
    latch: Condvar
}

impl Latch 
{
    ///
    /// Determines whether the latch has been set.
    ///
    pub fn is_set (& self) -> bool 
    {
        * lock(& self.mutex)
    }

    ///
    /// Creates a new, unset latch.
    ///
    pub fn new () -> Latch
    {
        Latch { mutex: Mutex::new(false), latch: Condvar::new() }
    }

    ///
    /// Sets the latch to be true, waking every waiter.
    ///
    pub fn set (& self)
    {
        let mut guard = lock(& self.mutex);
        (* guard) = true;
        self.latch.notify_all();
    }

    ///
    /// Waits for the latch to be set, but no longer than the timeout. Returns whether 
    /// the latch was set.
    ///
    pub fn wait_timeout (& self, timeout: Duration) -> bool
    {
        let guard = lock(& self.mutex);
        let (guard, _) = self.latch
            .wait_timeout_while(guard, timeout, |set| ! (* set))
            .unwrap_or_else(PoisonError::into_inner);
        * guard
    }
}
