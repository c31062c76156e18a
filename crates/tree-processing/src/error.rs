use derive_more::Display;

/// Signals that a whole traversal must stop
///
/// Ordinary failures (an unreadable directory, a failed copy) travel as plain
/// `anyhow::Error`s. A `NodeError` is the deliberate abort raised by a
/// [`require`](crate::require) filter or by an accumulator, and can be told
/// apart from other failures with [`NodeError::is_abort`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum NodeError {
    /// A node failed a required check
    #[display(fmt = "node failed a required check")]
    RequirementFailed,

    /// An accumulator's combine step returned `Rejected`
    #[display(fmt = "accumulator returned `Rejected`")]
    AccumulatorRejected,

    /// An accumulator was seeded with `Rejected`
    #[display(fmt = "cannot initialize accumulator with `Rejected`")]
    RejectedInitial,

    /// The traversal was aborted by the caller
    #[display(fmt = "traversal aborted: {}", _0)]
    Aborted(String),
}

impl std::error::Error for NodeError {}

impl NodeError {
    /// Build a caller-raised abort
    pub fn abort(reason: impl Into<String>) -> Self {
        NodeError::Aborted(reason.into())
    }

    /// Returns true if `error` is (or wraps) a traversal abort
    pub fn is_abort(error: &anyhow::Error) -> bool {
        error.downcast_ref::<NodeError>().is_some()
    }
}
