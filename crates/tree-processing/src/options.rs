//! Configuration options for a walk.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Order;

/// Configuration options for a [`Traversal`](crate::Traversal).
///
/// The sort key is not part of the options since it is code, not data; set it
/// on the traversal itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WalkOptions {
    /// Whether branches are visited depth-first or breadth-first.
    pub order: Order,
}

impl WalkOptions {
    /// Create new walk options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the frontier policy.
    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    /// Visit branches depth-first (the default).
    pub fn depth_first(self) -> Self {
        self.order(Order::DepthFirst)
    }

    /// Visit branches level by level.
    pub fn breadth_first(self) -> Self {
        self.order(Order::BreadthFirst)
    }
}
