use thiserror::Error;

/// Recoverable error of a tree operation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
	/// The tree already holds as many nodes as its configured limit.
	#[error("node limit reached ({limit} nodes)")]
	NodeLimit { limit: usize },
}

/// Red-black tree invariant violation, as reported by `RbTreeExt::check`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvariantError {
	#[error("root node {id} is red")]
	RedRoot { id: usize },

	#[error("red node {id} has a red child {child}")]
	RedChild { id: usize, child: usize },

	#[error("black height mismatch under node {id}: {left} on the left, {right} on the right")]
	BlackHeight { id: usize, left: usize, right: usize },

	#[error("key of node {id} is out of order")]
	Order { id: usize },

	#[error("node {id} has parent {found}, expected {expected}")]
	ParentLink { id: usize, expected: usize, found: usize },
}
