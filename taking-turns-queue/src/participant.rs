use core::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Remaining turns of a participant. Zero or less means the participant is
/// served forever.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Turns(pub i32);

impl Turns {
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        self.0 <= 0
    }

    #[must_use]
    pub const fn is_last(self) -> bool {
        self.0 == 1
    }

    /// Only ever called on a finite count above one.
    pub(crate) fn decrement(&mut self) {
        self.0 -= 1;
    }
}

impl From<i32> for Turns {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl Display for Turns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Participant {
    name: String,
    turns: Turns,
}

impl Participant {
    /// Any turn count is accepted, names don't have to be unique.
    #[must_use]
    pub fn new(name: impl Into<String>, turns: impl Into<Turns>) -> Self {
        Self {
            name: name.into(),
            turns: turns.into(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn turns(&self) -> Turns {
        self.turns
    }

    pub(crate) fn turns_mut(&mut self) -> &mut Turns {
        &mut self.turns
    }
}

impl Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.turns)
    }
}
