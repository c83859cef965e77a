use core::fmt::{self, Display};
use std::collections::{vec_deque, VecDeque};

use itertools::Itertools as _;

use crate::error::{Error, Result};
use crate::participant::Participant;

/// Plain first-in first-out queue of participants.
#[derive(Debug, Default)]
pub struct PersonQueue {
    inner: VecDeque<Participant>,
}

impl PersonQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, participant: Participant) {
        self.inner.push_back(participant);
    }

    pub fn dequeue(&mut self) -> Result<Participant> {
        self.inner.pop_front().ok_or(Error::EmptyQueue)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Front to back.
    pub fn iter(&self) -> vec_deque::Iter<'_, Participant> {
        self.inner.iter()
    }
}

impl<'a> IntoIterator for &'a PersonQueue {
    type IntoIter = vec_deque::Iter<'a, Participant>;
    type Item = &'a Participant;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// for humans only, the format may change at any time
impl Display for PersonQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.inner.iter().join(", "))
    }
}
