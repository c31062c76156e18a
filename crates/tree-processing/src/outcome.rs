//! The result of applying an action to a node

/// What an action produced for a node
///
/// `Rejected` is the control signal meaning "this node contributed nothing".
/// For a branch it also means "do not recurse into its children". It is never
/// a valid accumulator value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T> {
    /// The node was processed and produced a value
    Kept(T),
    /// The node was skipped
    Rejected,
}

/// The recursion decision the driver hands back to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Enumerate the children of the node just produced
    Descend,
    /// Skip the subtree of the node just produced
    Prune,
}

impl<T> Outcome<T> {
    pub fn is_kept(&self) -> bool {
        matches!(self, Outcome::Kept(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected)
    }

    /// Returns the kept value, if any
    pub fn kept(self) -> Option<T> {
        match self {
            Outcome::Kept(value) => Some(value),
            Outcome::Rejected => None,
        }
    }

    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Outcome::Kept(value) => Outcome::Kept(value),
            Outcome::Rejected => Outcome::Rejected,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Kept(value) => Outcome::Kept(f(value)),
            Outcome::Rejected => Outcome::Rejected,
        }
    }

    /// The recursion decision implied by this outcome
    pub fn verdict(&self) -> Verdict {
        match self {
            Outcome::Kept(_) => Verdict::Descend,
            Outcome::Rejected => Verdict::Prune,
        }
    }
}

impl<T> From<T> for Outcome<T> {
    fn from(value: T) -> Self {
        Outcome::Kept(value)
    }
}

impl<T> From<Outcome<T>> for Option<T> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.kept()
    }
}
