//! Driving a walk to completion

use log::debug;

use crate::children::Borrowed;
use crate::{Action, Children, Order, Outcome, SortKey, TopDown, TreeNode, Verdict, WalkOptions};

/// Walk the tree under `root`, applying `act` to every node produced
///
/// Each result is handed back to the engine as the recursion verdict. The
/// last computed result is returned, which for an
/// [`Accumulated`](crate::Accumulated) action is the final total.
///
/// # Example
///
/// ```
/// use tree_processing::{process, sum_results, filterable, Node, NodeKind, Order, Outcome};
///
/// type N = Node<&'static str, u32>;
///
/// let children = |node: &N| -> anyhow::Result<Vec<N>> {
///     Ok(match *node.current() {
///         0 => vec![Node::leaf("a", 1, 0), Node::leaf("b", 2, 0)],
///         _ => vec![],
///     })
/// };
///
/// let mut total = sum_results(0).wrap(filterable(|n: &N| Ok(*n.current())));
/// let root = Node::root(NodeKind::Branch, "root", 0);
/// let result = process(Order::DepthFirst, root, children, &mut total, None)?;
/// assert_eq!(result, Outcome::Kept(3));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn process<N, G, A>(
    order: Order,
    root: N,
    children: G,
    act: &mut A,
    sort_key: Option<SortKey<N>>,
) -> anyhow::Result<Outcome<A::Output>>
where
    N: TreeNode,
    G: Children<N>,
    A: Action<N> + ?Sized,
{
    drive(TopDown::new(order, root, children, sort_key), act)
}

fn drive<N, G, A>(mut engine: TopDown<N, G>, act: &mut A) -> anyhow::Result<Outcome<A::Output>>
where
    N: TreeNode,
    G: Children<N>,
    A: Action<N> + ?Sized,
{
    let mut result = Outcome::Rejected;
    let mut verdict = Verdict::Descend;
    let mut visited = 0usize;

    while let Some(node) = engine.advance(verdict)? {
        result = act.apply(node)?;
        verdict = result.verdict();
        visited += 1;
    }

    debug!("Walk finished after {} nodes ({})", visited, engine.order());
    Ok(result)
}

/// A walk configuration that can be run repeatedly
///
/// Binds a root, a child enumerator, the walk options and an optional sort
/// key, so the same walk can be processed with different actions, iterated
/// for raw nodes, or iterated for per-node results.
pub struct Traversal<N, G> {
    options: WalkOptions,
    root: N,
    children: G,
    sort_key: Option<SortKey<N>>,
}

impl<N, G> Traversal<N, G> {
    pub fn new(root: N, children: G) -> Self {
        Self {
            options: WalkOptions::default(),
            root,
            children,
            sort_key: None,
        }
    }

    pub fn options(mut self, options: WalkOptions) -> Self {
        self.options = options;
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.options = self.options.order(order);
        self
    }

    pub fn depth_first(self) -> Self {
        self.order(Order::DepthFirst)
    }

    pub fn breadth_first(self) -> Self {
        self.order(Order::BreadthFirst)
    }

    /// Visit siblings in ascending order of the key `f` extracts
    pub fn sort_by_key<K, F>(mut self, f: F) -> Self
    where
        K: Ord,
        F: Fn(&N) -> K + 'static,
    {
        self.sort_key = Some(SortKey::by_key(f));
        self
    }

    pub fn sort_by(mut self, sort_key: SortKey<N>) -> Self {
        self.sort_key = Some(sort_key);
        self
    }

    pub fn root(&self) -> &N {
        &self.root
    }

    pub fn walk_options(&self) -> WalkOptions {
        self.options
    }
}

impl<N, G> Traversal<N, G>
where
    N: TreeNode + Clone,
    G: Children<N>,
{
    /// Run the walk with `act`; see [`process`]
    pub fn process<A>(&mut self, act: &mut A) -> anyhow::Result<Outcome<A::Output>>
    where
        A: Action<N> + ?Sized,
    {
        drive(self.engine(), act)
    }

    /// Iterate over the raw nodes in visiting order, descending everywhere
    ///
    /// The iterator stops after yielding the first error.
    pub fn nodes(&mut self) -> Nodes<'_, N, G> {
        Nodes {
            engine: self.engine(),
            failed: false,
        }
    }

    /// Lazily apply `act`, yielding each node with its outcome
    ///
    /// Outcomes feed back into the walk exactly as with [`Traversal::process`],
    /// so a rejected branch is yielded but its subtree is not.
    pub fn results<'a, A>(&'a mut self, act: &'a mut A) -> Results<'a, N, G, A>
    where
        A: Action<N> + ?Sized,
    {
        Results {
            engine: self.engine(),
            act,
            verdict: Verdict::Descend,
            failed: false,
        }
    }

    fn engine(&mut self) -> TopDown<N, Borrowed<'_, G>> {
        TopDown::new(
            self.options.order,
            self.root.clone(),
            Borrowed(&mut self.children),
            self.sort_key.clone(),
        )
    }
}

/// Raw nodes of a [`Traversal`], see [`Traversal::nodes`]
pub struct Nodes<'a, N, G> {
    engine: TopDown<N, Borrowed<'a, G>>,
    failed: bool,
}

impl<N, G> Iterator for Nodes<'_, N, G>
where
    N: TreeNode + Clone,
    G: Children<N>,
{
    type Item = anyhow::Result<N>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.engine.advance(Verdict::Descend) {
            Ok(node) => node.cloned().map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

/// Per-node outcomes of a [`Traversal`], see [`Traversal::results`]
pub struct Results<'a, N, G, A: ?Sized> {
    engine: TopDown<N, Borrowed<'a, G>>,
    act: &'a mut A,
    verdict: Verdict,
    failed: bool,
}

impl<N, G, A> Iterator for Results<'_, N, G, A>
where
    N: TreeNode + Clone,
    G: Children<N>,
    A: Action<N> + ?Sized,
{
    type Item = anyhow::Result<(N, Outcome<A::Output>)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let node = match self.engine.advance(self.verdict) {
            Ok(Some(node)) => node,
            Ok(None) => return None,
            Err(e) => {
                self.failed = true;
                return Some(Err(e));
            }
        };
        match self.act.apply(node) {
            Ok(outcome) => {
                self.verdict = outcome.verdict();
                Some(Ok((node.clone(), outcome)))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
