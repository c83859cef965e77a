use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum Error {
    #[error("no one in the queue")]
    QueueEmpty,
    #[error("tried to dequeue from an empty person queue")]
    EmptyQueue,
    #[error("the lock around the queue was poisoned by a panicking holder")]
    Poisoned,
}

pub type Result<T> = core::result::Result<T, Error>;
