use core::fmt::{self, Display};

use tracing::debug;

use crate::error::{Error, Result};
use crate::participant::{Participant, Turns};
use crate::person_queue::PersonQueue;

/// Circular queue serving participants in arrival order.
///
/// A served participant goes back to the end of the line depending on its
/// remaining turns:
///
/// - zero or less: it stays forever and its turns are left alone,
/// - more than one: its turns are decremented and it is re-added,
/// - exactly one: it is done and leaves the queue for good.
///
/// Nobody with exactly zero remaining turns after a decrement can ever be in
/// the queue, because the decrement only happens above one.
#[derive(Debug, Default)]
pub struct TakingTurnsQueue {
    people: PersonQueue,
}

impl TakingTurnsQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a participant to the back of the queue. `turns` of zero or less
    /// means infinite turns.
    pub fn add_participant(&mut self, name: impl Into<String>, turns: impl Into<Turns>) {
        self.people.enqueue(Participant::new(name, turns));
    }

    /// Serves the participant at the front.
    ///
    /// The returned participant carries the turns it had when it was served,
    /// not the decremented value that stays in the queue.
    pub fn get_next(&mut self) -> Result<Participant> {
        if self.people.is_empty() {
            return Err(Error::QueueEmpty);
        }

        let mut person = self.people.dequeue()?;
        let served = person.clone();
        debug!(participant = %served.name(), turns = %served.turns(), "serving participant");

        let turns = person.turns();
        if turns.is_infinite() {
            self.people.enqueue(person);
        } else if turns.is_last() {
            debug!(participant = %served.name(), "participant used up its turns");
        } else {
            person.turns_mut().decrement();
            self.people.enqueue(person);
        }

        Ok(served)
    }

    /// Number of participants that will still be served.
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

impl Extend<Participant> for TakingTurnsQueue {
    fn extend<T: IntoIterator<Item = Participant>>(&mut self, iter: T) {
        for participant in iter {
            self.people.enqueue(participant);
        }
    }
}

impl FromIterator<Participant> for TakingTurnsQueue {
    fn from_iter<T: IntoIterator<Item = Participant>>(iter: T) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl Display for TakingTurnsQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.people, f)
    }
}
