//! Folding action results across a whole walk

use std::ops::Add;

use log::trace;

use crate::{Action, NodeError, Outcome};

/// A fold over the results an action produces during a walk
///
/// An `Accumulator` is a recipe: an initial value and a combine step. Calling
/// [`Accumulator::wrap`] turns an action into an [`Accumulated`] action that
/// carries its own running total, seeded from `initial` at wrap time.
///
/// `combine(total, result)` returns the updated total, or anything that
/// converts into an [`Outcome`]. Returning [`Outcome::Rejected`] is illegal and
/// aborts the walk.
///
/// # Example
///
/// ```
/// use tree_processing::{filterable, Accumulator, Action, Outcome};
///
/// let longest = Accumulator::new(0usize, |best: usize, len: usize| best.max(len));
/// let mut act = longest.wrap(filterable(|name: &&str| Ok(name.len())));
///
/// act.apply(&"ab").unwrap();
/// assert_eq!(act.apply(&"abcd").unwrap(), Outcome::Kept(4));
/// assert_eq!(act.apply(&"a").unwrap(), Outcome::Kept(4));
/// ```
#[derive(Debug, Clone)]
pub struct Accumulator<T, F> {
    initial: T,
    combine: F,
}

impl<T, F> Accumulator<T, F> {
    pub fn new(initial: T, combine: F) -> Self {
        Self { initial, combine }
    }

    /// Like [`Accumulator::new`], refusing a `Rejected` starting value
    pub fn try_new(initial: Outcome<T>, combine: F) -> Result<Self, NodeError> {
        match initial {
            Outcome::Kept(initial) => Ok(Self::new(initial, combine)),
            Outcome::Rejected => Err(NodeError::RejectedInitial),
        }
    }

    pub fn initial(&self) -> &T {
        &self.initial
    }

    /// Decorate `action` with a fresh running total
    ///
    /// Use [`Act::branch_leaf`](crate::Act::branch_leaf) to accumulate over a
    /// branch/leaf pair of actions.
    pub fn wrap<A>(&self, action: A) -> Accumulated<A, T, F>
    where
        T: Clone,
        F: Clone,
    {
        Accumulated {
            action,
            combine: self.combine.clone(),
            initial: self.initial.clone(),
            total: Some(self.initial.clone()),
        }
    }
}

/// An action whose results are folded into a running total
///
/// The total lives in this value, not in the walk: reusing the same
/// `Accumulated` for several walks accrues across all of them, while a fresh
/// [`Accumulator::wrap`] (or [`Accumulated::reset`]) starts over.
#[derive(Debug, Clone)]
pub struct Accumulated<A, T, F> {
    action: A,
    combine: F,
    initial: T,
    total: Option<T>,
}

impl<A, T, F> Accumulated<A, T, F> {
    /// The running total, or `None` after a combine step aborted the walk
    pub fn total(&self) -> Option<&T> {
        self.total.as_ref()
    }

    pub fn into_total(self) -> Option<T> {
        self.total
    }

    /// Restart the total from the initial value
    pub fn reset(&mut self)
    where
        T: Clone,
    {
        self.total = Some(self.initial.clone());
    }
}

impl<N, A, T, F, C> Action<N> for Accumulated<A, T, F>
where
    A: Action<N>,
    F: FnMut(T, A::Output) -> C,
    C: Into<Outcome<T>>,
    T: Clone,
{
    type Output = T;

    fn apply(&mut self, node: &N) -> anyhow::Result<Outcome<T>> {
        let result = match self.action.apply(node)? {
            Outcome::Kept(result) => result,
            Outcome::Rejected => return Ok(Outcome::Rejected),
        };

        let total = self.total.take().ok_or(NodeError::AccumulatorRejected)?;
        match (self.combine)(total, result).into() {
            Outcome::Kept(total) => {
                self.total = Some(total.clone());
                Ok(Outcome::Kept(total))
            }
            Outcome::Rejected => {
                trace!("Combine step rejected, aborting traversal");
                Err(NodeError::AccumulatorRejected.into())
            }
        }
    }
}

/// Sum the results of an action, starting from `zero`
pub fn sum_results<T>(zero: T) -> Accumulator<T, fn(T, T) -> T>
where
    T: Add<Output = T>,
{
    let add: fn(T, T) -> T = |total, result| total + result;
    Accumulator::new(zero, add)
}
