//! Composable node predicates

use std::fmt;
use std::ops::BitAnd;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::NodeError;

type Predicate<N> = Rc<dyn Fn(&N) -> Result<bool, NodeError>>;

/// An AND-combination of node predicates
///
/// Chains are pure and independent of the action they end up gating, so the
/// same chain can be attached to any number of actions. Cloning a chain only
/// clones shared handles to its predicates.
///
/// # Example
///
/// ```
/// use tree_processing::{chainable, FilterChain};
///
/// let small = chainable(|n: &u32| *n < 10);
/// let even = chainable(|n: &u32| n % 2 == 0);
/// let chain: FilterChain<u32> = small & even;
///
/// assert!(chain.accepts(&4).unwrap());
/// assert!(!chain.accepts(&5).unwrap());
/// assert!(!chain.accepts(&12).unwrap());
/// ```
pub struct FilterChain<N> {
    predicates: SmallVec<[Predicate<N>; 4]>,
}

impl<N> FilterChain<N> {
    /// The empty chain, which accepts every node
    pub fn new() -> Self {
        Self {
            predicates: SmallVec::new(),
        }
    }

    /// Append a bare predicate
    pub fn and<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&N) -> bool + 'static,
    {
        self.predicates
            .push(Rc::new(move |node: &N| -> Result<bool, NodeError> {
                Ok(predicate(node))
            }));
        self
    }

    /// Returns true iff every predicate accepts `node`
    ///
    /// Evaluation stops at the first predicate that returns false. A
    /// [`require`]d predicate that fails aborts with [`NodeError`].
    pub fn accepts(&self, node: &N) -> Result<bool, NodeError> {
        for predicate in &self.predicates {
            if !predicate(node)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

impl<N> Default for FilterChain<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Clone for FilterChain<N> {
    fn clone(&self) -> Self {
        Self {
            predicates: self.predicates.clone(),
        }
    }
}

impl<N> fmt::Debug for FilterChain<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterChain")
            .field("len", &self.predicates.len())
            .finish()
    }
}

impl<N> BitAnd for FilterChain<N> {
    type Output = FilterChain<N>;

    fn bitand(mut self, rhs: FilterChain<N>) -> FilterChain<N> {
        self.predicates.extend(rhs.predicates);
        self
    }
}

impl<N> BitAnd<&FilterChain<N>> for FilterChain<N> {
    type Output = FilterChain<N>;

    fn bitand(mut self, rhs: &FilterChain<N>) -> FilterChain<N> {
        self.predicates.extend(rhs.predicates.iter().cloned());
        self
    }
}

impl<N, F> From<F> for FilterChain<N>
where
    F: Fn(&N) -> bool + 'static,
{
    fn from(predicate: F) -> Self {
        FilterChain::new().and(predicate)
    }
}

/// Make a predicate chainable
pub fn chainable<N, F>(predicate: F) -> FilterChain<N>
where
    F: Fn(&N) -> bool + 'static,
{
    FilterChain::new().and(predicate)
}

/// A strict predicate: failing it aborts the whole traversal
///
/// Use this instead of [`chainable`] when a violated precondition means the
/// walk cannot continue, rather than that one node should be skipped.
pub fn require<N, F>(predicate: F) -> FilterChain<N>
where
    F: Fn(&N) -> bool + 'static,
{
    let mut chain = FilterChain::new();
    chain
        .predicates
        .push(Rc::new(move |node: &N| -> Result<bool, NodeError> {
            if predicate(node) {
                Ok(true)
            } else {
                Err(NodeError::RequirementFailed)
            }
        }));
    chain
}
