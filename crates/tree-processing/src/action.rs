//! Node actions and the wrappers that gate them

use std::fmt;

use crate::{FilterChain, Outcome, TreeNode};

/// Something applied to each node the driver receives
///
/// The returned [`Outcome`] doubles as the recursion verdict: returning
/// [`Outcome::Rejected`] for a branch prunes its subtree.
///
/// Any `FnMut(&N) -> anyhow::Result<Outcome<T>>` is an action.
pub trait Action<N> {
    type Output;

    fn apply(&mut self, node: &N) -> anyhow::Result<Outcome<Self::Output>>;
}

impl<N, F, T> Action<N> for F
where
    F: FnMut(&N) -> anyhow::Result<Outcome<T>>,
{
    type Output = T;

    fn apply(&mut self, node: &N) -> anyhow::Result<Outcome<T>> {
        self(node)
    }
}

/// Helps closure type inference when building an action inline
pub fn from_fn<N, T, F>(f: F) -> F
where
    F: FnMut(&N) -> anyhow::Result<Outcome<T>>,
{
    f
}

/// A plain node function gated by a [`FilterChain`]
///
/// Created with [`filterable`]. The wrapped function only runs on nodes the
/// chain accepts; every other node yields [`Outcome::Rejected`] without any
/// side effects.
pub struct Filterable<F, N> {
    action: F,
    filter: FilterChain<N>,
}

/// Add filtering to a plain node function
///
/// The result has an empty filter chain, so it runs on every node until
/// narrowed down with [`Filterable::which`].
///
/// # Example
///
/// ```
/// use tree_processing::{chainable, filterable, Action, Outcome};
///
/// let mut double = filterable(|n: &i32| Ok(n * 2)).which(chainable(|n: &i32| *n > 0));
///
/// assert_eq!(double.apply(&4).unwrap(), Outcome::Kept(8));
/// assert_eq!(double.apply(&-4).unwrap(), Outcome::Rejected);
/// ```
pub fn filterable<N, T, F>(action: F) -> Filterable<F, N>
where
    F: FnMut(&N) -> anyhow::Result<T>,
{
    Filterable {
        action,
        filter: FilterChain::new(),
    }
}

impl<F, N> Filterable<F, N> {
    /// Returns a new gated action whose filter is this one's AND `filter`
    ///
    /// `filter` is a [`FilterChain`] or a bare `Fn(&N) -> bool` predicate.
    /// `a.which(f).which(g)` is equivalent to `a.which(f & g)`. The original
    /// action is left untouched and can be narrowed differently elsewhere.
    pub fn which(&self, filter: impl Into<FilterChain<N>>) -> Self
    where
        F: Clone,
    {
        Self {
            action: self.action.clone(),
            filter: self.filter.clone() & filter.into(),
        }
    }

    pub fn filter(&self) -> &FilterChain<N> {
        &self.filter
    }
}

impl<F: Clone, N> Clone for Filterable<F, N> {
    fn clone(&self) -> Self {
        Self {
            action: self.action.clone(),
            filter: self.filter.clone(),
        }
    }
}

impl<F, N> fmt::Debug for Filterable<F, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filterable")
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

impl<N, F, T> Action<N> for Filterable<F, N>
where
    F: FnMut(&N) -> anyhow::Result<T>,
{
    type Output = T;

    fn apply(&mut self, node: &N) -> anyhow::Result<Outcome<T>> {
        if self.filter.accepts(node)? {
            Ok(Outcome::Kept((self.action)(node)?))
        } else {
            Ok(Outcome::Rejected)
        }
    }
}

pub type BoxedAction<'a, N, T> = Box<dyn Action<N, Output = T> + 'a>;

/// How an action is applied across a walk
///
/// Either one action for every node, or a pair dispatched on
/// [`TreeNode::internal`]: the first for branches, the second for leaves.
pub enum Act<'a, N, T> {
    Uniform(BoxedAction<'a, N, T>),
    BranchLeaf(BoxedAction<'a, N, T>, BoxedAction<'a, N, T>),
}

impl<'a, N, T> Act<'a, N, T> {
    /// Apply `action` to every node
    pub fn uniform<A>(action: A) -> Self
    where
        A: Action<N, Output = T> + 'a,
    {
        Act::Uniform(Box::new(action))
    }

    /// Apply `branch` to internal nodes and `leaf` to the rest
    pub fn branch_leaf<B, L>(branch: B, leaf: L) -> Self
    where
        B: Action<N, Output = T> + 'a,
        L: Action<N, Output = T> + 'a,
    {
        Act::BranchLeaf(Box::new(branch), Box::new(leaf))
    }
}

impl<N: TreeNode, T> Action<N> for Act<'_, N, T> {
    type Output = T;

    fn apply(&mut self, node: &N) -> anyhow::Result<Outcome<T>> {
        match self {
            Act::Uniform(action) => action.apply(node),
            Act::BranchLeaf(branch, _) if node.internal() => branch.apply(node),
            Act::BranchLeaf(_, leaf) => leaf.apply(node),
        }
    }
}
