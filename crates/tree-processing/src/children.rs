//! Child enumeration: how the shape of a tree is supplied to the engine
//!
//! The engine never looks inside a node. Whenever it descends into a branch
//! it asks a [`Children`] implementation for that branch's ordered children,
//! so any data source satisfying this contract can be walked.

use log::warn;

use crate::Outcome;

/// Maps a node to its ordered children
///
/// Implementations must not mutate the node. Failures propagate out of the
/// traversal unchanged unless the enumerator was wrapped with [`or_empty`] or
/// [`or_else`].
pub trait Children<N> {
    fn children(&mut self, node: &N) -> anyhow::Result<Vec<N>>;
}

impl<N, F> Children<N> for F
where
    F: FnMut(&N) -> anyhow::Result<Vec<N>>,
{
    fn children(&mut self, node: &N) -> anyhow::Result<Vec<N>> {
        self(node)
    }
}

/// Lends an enumerator to a single walk
pub(crate) struct Borrowed<'a, G>(pub(crate) &'a mut G);

impl<N, G: Children<N>> Children<N> for Borrowed<'_, G> {
    fn children(&mut self, node: &N) -> anyhow::Result<Vec<N>> {
        self.0.children(node)
    }
}

/// Compose a raw descriptor source with a node constructor
///
/// `raw` lists whatever describes the children of a node (directory entries,
/// keys of a map, ...); `make` turns each descriptor into a node. A
/// constructor returning [`Outcome::Rejected`] drops that descriptor.
pub fn getter<N, R, RG, M>(mut raw: RG, mut make: M) -> impl Children<N>
where
    RG: FnMut(&N) -> anyhow::Result<Vec<R>>,
    M: FnMut(&N, R) -> anyhow::Result<Outcome<N>>,
{
    move |parent: &N| -> anyhow::Result<Vec<N>> {
        let mut nodes = Vec::new();
        for descriptor in raw(parent)? {
            if let Outcome::Kept(node) = make(parent, descriptor)? {
                nodes.push(node);
            }
        }
        Ok(nodes)
    }
}

/// Substitute an empty child list when enumeration fails
pub fn or_empty<N, G: Children<N>>(mut inner: G) -> impl Children<N> {
    move |node: &N| -> anyhow::Result<Vec<N>> {
        match inner.children(node) {
            Ok(children) => Ok(children),
            Err(e) => {
                warn!("Skipping children after enumeration error: {:#}", e);
                Ok(Vec::new())
            }
        }
    }
}

/// Call `fallback` when enumeration fails and use its result instead
pub fn or_else<N, G, F>(mut inner: G, mut fallback: F) -> impl Children<N>
where
    G: Children<N>,
    F: FnMut(&N, anyhow::Error) -> anyhow::Result<Vec<N>>,
{
    move |node: &N| -> anyhow::Result<Vec<N>> {
        match inner.children(node) {
            Ok(children) => Ok(children),
            Err(e) => fallback(node, e),
        }
    }
}
