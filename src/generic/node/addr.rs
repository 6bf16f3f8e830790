use super::{Side, NIL};
use std::fmt;

/// Vacant position in a red-black tree.
///
/// Each key absent from the tree has exactly one place where it would be
/// attached: a sentinel edge below the last node met while descending.
/// We write `@id:side` the edge on side `side` of the node `id`.
///
/// ```text
///                          ┌────┐
///                          │ 20 │
///                          └────┘
///                        ╱        ╲
///                  ┌────┐          ┌────┐
///                  │ 10 │          │ 30 │
///                  └────┘          └────┘
///                  ╱    ╲          ╱    ╲
///                 ·      ·        ·      ·
///                 │      │        │      └─ `@30:right`, where 35 would go
///                 │      │        └─ `@30:left`, where 25 would go
///                 │      └─ `@10:right`, where 15 would go
///                 └─ `@10:left`, where 5 would go
/// ```
///
/// In an empty tree, the only vacant position is the root, whose `parent` is [`NIL`].
///
/// ## Validity
/// An address is only meaningful until the next mutation of the tree.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Address {
	/// Identifier of the node the new node would be attached to.
	pub parent: usize,

	/// Side of the attachment.
	pub side: Side,
}

impl Address {
	#[inline]
	pub fn new(parent: usize, side: Side) -> Address {
		Address { parent, side }
	}

	/// Address of the root in an empty tree.
	#[inline]
	pub fn root() -> Address {
		Address {
			parent: NIL,
			side: Side::Left,
		}
	}

	#[inline]
	pub fn is_root(&self) -> bool {
		self.parent == NIL
	}
}

impl fmt::Display for Address {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		if self.is_root() {
			write!(f, "@root")
		} else {
			match self.side {
				Side::Left => write!(f, "@{}:left", self.parent),
				Side::Right => write!(f, "@{}:right", self.parent),
			}
		}
	}
}

impl fmt::Debug for Address {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}
