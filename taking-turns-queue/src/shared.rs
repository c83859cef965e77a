use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::participant::{Participant, Turns};
use crate::taking_turns::TakingTurnsQueue;

/// Handle for using one [`TakingTurnsQueue`] from several threads.
///
/// Every call holds the lock for its whole duration, so serving a participant
/// and putting it back happen as one step.
#[derive(Debug, Clone, Default)]
pub struct SharedTakingTurnsQueue {
    inner: Arc<Mutex<TakingTurnsQueue>>,
}

impl SharedTakingTurnsQueue {
    #[must_use]
    pub fn new(queue: TakingTurnsQueue) -> Self {
        Self {
            inner: Arc::new(Mutex::new(queue)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, TakingTurnsQueue>> {
        self.inner.lock().map_err(|_| Error::Poisoned)
    }

    pub fn add_participant(&self, name: impl Into<String>, turns: impl Into<Turns>) -> Result<()> {
        self.lock()?.add_participant(name, turns);
        Ok(())
    }

    pub fn get_next(&self) -> Result<Participant> {
        self.lock()?.get_next()
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// Diagnostic rendering of the current line, see [`TakingTurnsQueue`]'s `Display`.
    pub fn snapshot(&self) -> Result<String> {
        Ok(self.lock()?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::SharedTakingTurnsQueue;
    use crate::error::{Error, Result};

    #[test]
    fn threads_share_one_budget() -> Result<()> {
        let queue = SharedTakingTurnsQueue::default();
        for name in ["Bob", "Tim", "Sue", "Ann"] {
            queue.add_participant(name, 25)?;
        }

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let queue = queue.clone();
                thread::spawn(move || (0..25).map(|_| queue.get_next()).collect::<Result<Vec<_>>>())
            })
            .collect();

        let mut served = 0;
        for handle in handles {
            served += handle.join().expect("worker panicked")?.len();
        }
        assert_eq!(served, 100);
        assert!(queue.is_empty()?);
        assert_eq!(queue.get_next(), Err(Error::QueueEmpty));
        Ok(())
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let queue = SharedTakingTurnsQueue::default();
        let poisoner = queue.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.inner.lock();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(queue.len(), Err(Error::Poisoned));
    }
}
