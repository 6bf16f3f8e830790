use crate::{
	generic::{
		map::{NodeSlab, RbTreeMap},
		node::{Address, Color, Item, Node, Side, NIL},
	},
	Comparator, Error, InvariantError,
};
use log::{debug, trace};
use std::{borrow::Borrow, cmp::Ordering};

/// Extension methods.
///
/// This trait can be imported to access the internal methods of the red-black tree.
/// These methods are not intended to be directly called by users, but can be used to
/// extends the data structure with new functionalities.
///
/// Every method accepting a node identifier also accepts [`NIL`],
/// which behaves as a black node without children.
pub trait RbTreeExt<K, V> {
	/// Key comparator of the tree.
	type Order;

	fn comparator(&self) -> &Self::Order;

	/// Get the root node id.
	///
	/// Returns [`NIL`] if the tree is empty.
	fn root_id(&self) -> usize;

	/// Get the node associated to the given `id`.
	///
	/// Panics if `id` is not the identifier of a node of the tree.
	fn node(&self, id: usize) -> &Node<K, V>;

	/// Color of the given node. The sentinel is black.
	fn color(&self, id: usize) -> Color;

	/// Parent of the given node.
	///
	/// The parent of the sentinel is a scratch slot only meaningful during removal.
	fn parent(&self, id: usize) -> usize;

	fn child(&self, id: usize, side: Side) -> usize;

	#[inline]
	fn left(&self, id: usize) -> usize {
		self.child(id, Side::Left)
	}

	#[inline]
	fn right(&self, id: usize) -> usize {
		self.child(id, Side::Right)
	}

	/// Side on which `id` hangs below its parent.
	///
	/// The root is considered to be on the left.
	fn side_of(&self, id: usize) -> Side;

	/// Leftmost node of the subtree rooted in `id`.
	fn leftmost(&self, id: usize) -> usize;

	/// Rightmost node of the subtree rooted in `id`.
	fn rightmost(&self, id: usize) -> usize;

	/// Next node in key order, or [`NIL`].
	fn successor(&self, id: usize) -> usize;

	/// Previous node in key order, or [`NIL`].
	fn predecessor(&self, id: usize) -> usize;

	/// Find the node holding the given key.
	///
	/// Returns the vacant position where the key would be attached if it is not in the tree.
	fn address_of<Q: ?Sized>(&self, key: &Q) -> Result<usize, Address>
	where
		K: Borrow<Q>,
		Self::Order: Comparator<Q>;

	/// Check every red-black tree invariant.
	///
	/// Returns the black height of the tree:
	/// the number of black nodes on any path from the root to a sentinel.
	fn check(&self) -> Result<usize, InvariantError>
	where
		Self::Order: Comparator<K>;

	/// Check the subtree rooted in `id` whose keys must lie strictly between `min` and `max`.
	///
	/// Returns the number of black nodes on any path from `id` (included) to a sentinel.
	fn check_node(&self, id: usize, min: Option<&K>, max: Option<&K>) -> Result<usize, InvariantError>
	where
		Self::Order: Comparator<K>;

	/// Validate the tree.
	///
	/// Panics if the tree is not a valid red-black tree.
	#[inline]
	fn validate(&self)
	where
		Self::Order: Comparator<K>,
	{
		if let Err(e) = self.check() {
			panic!("invalid red-black tree: {}", e)
		}
	}
}

pub trait RbTreeExtMut<K, V>: RbTreeExt<K, V> {
	fn set_root_id(&mut self, id: usize);

	/// Get the node associated to the given `id` mutabily.
	///
	/// Panics if `id` is not the identifier of a node of the tree.
	fn node_mut(&mut self, id: usize) -> &mut Node<K, V>;

	/// Set the color of a node.
	///
	/// Painting the sentinel black is a no-op. Panics if the sentinel is painted red.
	fn set_color(&mut self, id: usize, color: Color);

	/// Set the parent of a node, or the parent scratch slot of the sentinel.
	fn set_parent(&mut self, id: usize, parent: usize);

	fn set_child(&mut self, id: usize, side: Side, child: usize);

	/// Make `new` take the place of `old` below the parent of `old` (or as root).
	fn replace_child(&mut self, parent: usize, old: usize, new: usize);

	/// Rotates the node `id` toward `side`.
	///
	/// ```text
	///          X    -> rotate(X, Left) ->       Y
	///        /   \                            /   \
	///       A     Y   <- rotate(Y, Right) <- X     C
	///           /   \                      /   \
	///          B     C                    A     B
	/// ```
	///
	/// Panics if the child of `id` opposite to `side` is the sentinel.
	fn rotate(&mut self, id: usize, side: Side);

	#[inline]
	fn rotate_left(&mut self, id: usize) {
		self.rotate(id, Side::Left)
	}

	#[inline]
	fn rotate_right(&mut self, id: usize) {
		self.rotate(id, Side::Right)
	}

	/// Attach a new red node holding `item` at the given vacant address and rebalance.
	///
	/// The node is allocated before the tree is modified:
	/// if the allocation fails the tree is left untouched and `item` is returned with the error.
	///
	/// ## Correctness
	/// It is assumed that `addr` was returned by `address_of` for the key of `item`,
	/// with no mutation of the tree in between.
	fn insert_at(&mut self, addr: Address, item: Item<K, V>) -> Result<usize, (Error, Item<K, V>)>;

	/// Restore the red-black properties after the insertion of the red node `id`.
	fn insert_fixup(&mut self, id: usize);

	/// Remove the node `id` from the tree and release it.
	///
	/// Returns the item that was stored in `id`.
	/// Note that when `id` has two children the node physically released is its successor,
	/// whose item is moved into `id`.
	fn remove_at(&mut self, id: usize) -> Item<K, V>;

	/// Restore the red-black properties after a black node has been spliced out
	/// above `x` (which may be the sentinel).
	fn remove_fixup(&mut self, x: usize);

	/// Allocate a free identifier for the given node.
	fn allocate_node(&mut self, node: Node<K, V>) -> Result<usize, (Error, Node<K, V>)>;

	/// Release the given node identifier and return the node it used to identify.
	fn release_node(&mut self, id: usize) -> Node<K, V>;
}

impl<K, V, O, C: NodeSlab<K, V>> RbTreeExt<K, V> for RbTreeMap<K, V, O, C> {
	type Order = O;

	#[inline]
	fn comparator(&self) -> &O {
		&self.cmp
	}

	#[inline]
	fn root_id(&self) -> usize {
		self.root
	}

	#[inline]
	fn node(&self, id: usize) -> &Node<K, V> {
		C::into_ref(self.nodes.get(id).unwrap())
	}

	#[inline]
	fn color(&self, id: usize) -> Color {
		if id == NIL {
			Color::Black
		} else {
			self.node(id).color()
		}
	}

	#[inline]
	fn parent(&self, id: usize) -> usize {
		if id == NIL {
			self.nil_parent
		} else {
			self.node(id).parent()
		}
	}

	#[inline]
	fn child(&self, id: usize, side: Side) -> usize {
		if id == NIL {
			NIL
		} else {
			self.node(id).child(side)
		}
	}

	#[inline]
	fn side_of(&self, id: usize) -> Side {
		let parent = self.parent(id);
		if parent != NIL && self.right(parent) == id {
			Side::Right
		} else {
			Side::Left
		}
	}

	fn leftmost(&self, mut id: usize) -> usize {
		if id != NIL {
			loop {
				match self.left(id) {
					NIL => break,
					left => id = left,
				}
			}
		}

		id
	}

	fn rightmost(&self, mut id: usize) -> usize {
		if id != NIL {
			loop {
				match self.right(id) {
					NIL => break,
					right => id = right,
				}
			}
		}

		id
	}

	fn successor(&self, mut id: usize) -> usize {
		if self.right(id) != NIL {
			self.leftmost(self.right(id))
		} else {
			// go up until we come from a left child.
			let mut parent = self.parent(id);
			while parent != NIL && self.right(parent) == id {
				id = parent;
				parent = self.parent(id);
			}

			parent
		}
	}

	fn predecessor(&self, mut id: usize) -> usize {
		if self.left(id) != NIL {
			self.rightmost(self.left(id))
		} else {
			let mut parent = self.parent(id);
			while parent != NIL && self.left(parent) == id {
				id = parent;
				parent = self.parent(id);
			}

			parent
		}
	}

	fn address_of<Q: ?Sized>(&self, key: &Q) -> Result<usize, Address>
	where
		K: Borrow<Q>,
		O: Comparator<Q>,
	{
		let mut addr = Address::root();
		let mut id = self.root;

		while id != NIL {
			let node = self.node(id);
			let side = match self.cmp.compare(key, node.key().borrow()) {
				Ordering::Less => Side::Left,
				Ordering::Equal => return Ok(id),
				Ordering::Greater => Side::Right,
			};

			addr = Address::new(id, side);
			id = node.child(side);
		}

		Err(addr)
	}

	fn check(&self) -> Result<usize, InvariantError>
	where
		O: Comparator<K>,
	{
		if self.root == NIL {
			return Ok(0);
		}

		let root = self.node(self.root);
		if root.parent() != NIL {
			return Err(InvariantError::ParentLink {
				id: self.root,
				expected: NIL,
				found: root.parent(),
			});
		}

		if root.is_red() {
			return Err(InvariantError::RedRoot { id: self.root });
		}

		self.check_node(self.root, None, None)
	}

	fn check_node(&self, id: usize, min: Option<&K>, max: Option<&K>) -> Result<usize, InvariantError>
	where
		O: Comparator<K>,
	{
		let node = self.node(id);
		let key = node.key();

		if let Some(min) = min {
			if self.cmp.compare(min, key) != Ordering::Less {
				return Err(InvariantError::Order { id });
			}
		}

		if let Some(max) = max {
			if self.cmp.compare(key, max) != Ordering::Less {
				return Err(InvariantError::Order { id });
			}
		}

		for child_id in node.children() {
			let child = self.node(child_id);

			if child.parent() != id {
				return Err(InvariantError::ParentLink {
					id: child_id,
					expected: id,
					found: child.parent(),
				});
			}

			if node.is_red() && child.is_red() {
				return Err(InvariantError::RedChild { id, child: child_id });
			}
		}

		let left = match node.left() {
			NIL => 0,
			left_id => self.check_node(left_id, min, Some(key))?,
		};

		let right = match node.right() {
			NIL => 0,
			right_id => self.check_node(right_id, Some(key), max)?,
		};

		if left != right {
			return Err(InvariantError::BlackHeight { id, left, right });
		}

		if node.is_black() {
			Ok(left + 1)
		} else {
			Ok(left)
		}
	}
}

impl<K, V, O, C: NodeSlab<K, V>> RbTreeExtMut<K, V> for RbTreeMap<K, V, O, C> {
	#[inline]
	fn set_root_id(&mut self, id: usize) {
		self.root = id
	}

	#[inline]
	fn node_mut(&mut self, id: usize) -> &mut Node<K, V> {
		C::into_mut(self.nodes.get_mut(id).unwrap())
	}

	#[inline]
	fn set_color(&mut self, id: usize, color: Color) {
		if id == NIL {
			assert!(color.is_black(), "the sentinel cannot be red");
		} else {
			self.node_mut(id).set_color(color)
		}
	}

	#[inline]
	fn set_parent(&mut self, id: usize, parent: usize) {
		if id == NIL {
			self.nil_parent = parent
		} else {
			self.node_mut(id).set_parent(parent)
		}
	}

	#[inline]
	fn set_child(&mut self, id: usize, side: Side, child: usize) {
		self.node_mut(id).set_child(side, child)
	}

	#[inline]
	fn replace_child(&mut self, parent: usize, old: usize, new: usize) {
		if parent == NIL {
			self.root = new
		} else {
			let node = self.node_mut(parent);
			match node.child_side(old) {
				Some(side) => node.set_child(side, new),
				None => panic!("node {} is not a child of {}", old, parent),
			}
		}
	}

	fn rotate(&mut self, x: usize, side: Side) {
		let y = self.child(x, side.opposite());
		assert!(y != NIL, "cannot rotate node {} without pivot", x);
		trace!("rotate {:?} at node {}", side, x);

		// move the inner subtree of `y` under `x`.
		let b = self.child(y, side);
		self.set_child(x, side.opposite(), b);
		if b != NIL {
			self.node_mut(b).set_parent(x);
		}

		// `y` takes the place of `x`.
		let parent = self.parent(x);
		self.node_mut(y).set_parent(parent);
		self.replace_child(parent, x, y);

		// and finally `x` goes below `y`.
		self.set_child(y, side, x);
		self.node_mut(x).set_parent(y);
	}

	fn insert_at(&mut self, addr: Address, item: Item<K, V>) -> Result<usize, (Error, Item<K, V>)> {
		let node = Node::new(addr.parent, Color::Red, item);
		let id = self
			.allocate_node(node)
			.map_err(|(e, node)| (e, node.into_item()))?;

		if addr.is_root() {
			self.root = id
		} else {
			self.set_child(addr.parent, addr.side, id)
		}

		self.insert_fixup(id);
		Ok(id)
	}

	fn insert_fixup(&mut self, mut id: usize) {
		while self.color(self.parent(id)).is_red() {
			// the parent is red, hence not the root: the grandparent exists.
			let parent = self.parent(id);
			let grandparent = self.parent(parent);
			let side = self.side_of(parent);
			let uncle = self.child(grandparent, side.opposite());

			if self.color(uncle).is_red() {
				trace!("insert fixup at {}: red uncle {}", id, uncle);
				self.set_color(parent, Color::Black);
				self.set_color(uncle, Color::Black);
				self.set_color(grandparent, Color::Red);
				id = grandparent;
			} else {
				if self.child(parent, side.opposite()) == id {
					// inner grandchild, straighten the shape first.
					trace!("insert fixup at {}: inner grandchild", id);
					id = parent;
					self.rotate(id, side);
				}

				trace!("insert fixup at {}: outer grandchild", id);
				let parent = self.parent(id);
				let grandparent = self.parent(parent);
				self.set_color(parent, Color::Black);
				self.set_color(grandparent, Color::Red);
				self.rotate(grandparent, side.opposite());
			}
		}

		let root = self.root;
		self.set_color(root, Color::Black);
	}

	fn remove_at(&mut self, z: usize) -> Item<K, V> {
		// `y` is the node physically spliced out.
		let y = if self.left(z) == NIL || self.right(z) == NIL {
			z
		} else {
			self.leftmost(self.right(z))
		};

		let x = match self.left(y) {
			NIL => self.right(y),
			left => left,
		};

		// `x` may be the sentinel, whose parent is then used by the fixup.
		let parent = self.parent(y);
		self.set_parent(x, parent);
		self.replace_child(parent, y, x);

		let y_color = self.color(y);
		let mut victim = self.release_node(y);
		if y != z {
			// the successor item moves into `z`,
			// and the victim now carries the removed item.
			std::mem::swap(victim.item_mut(), self.node_mut(z).item_mut());
		}

		if y_color.is_black() {
			self.remove_fixup(x);
		}

		victim.into_item()
	}

	fn remove_fixup(&mut self, mut x: usize) {
		while x != self.root && self.color(x).is_black() {
			let parent = self.parent(x);
			let side = if self.left(parent) == x {
				Side::Left
			} else {
				Side::Right
			};

			// `x` carries an extra black, so its sibling cannot be the sentinel.
			let mut w = self.child(parent, side.opposite());

			if self.color(w).is_red() {
				trace!("remove fixup at {}: red sibling {}", x, w);
				self.set_color(w, Color::Black);
				self.set_color(parent, Color::Red);
				self.rotate(parent, side);
				w = self.child(parent, side.opposite());
			}

			let inner = self.child(w, side);
			let outer = self.child(w, side.opposite());

			if self.color(inner).is_black() && self.color(outer).is_black() {
				trace!("remove fixup at {}: black nephews", x);
				self.set_color(w, Color::Red);
				x = parent;
			} else {
				if self.color(outer).is_black() {
					trace!("remove fixup at {}: red inner nephew {}", x, inner);
					self.set_color(inner, Color::Black);
					self.set_color(w, Color::Red);
					self.rotate(w, side.opposite());
					w = self.child(parent, side.opposite());
				}

				trace!("remove fixup at {}: red outer nephew", x);
				let parent_color = self.color(parent);
				self.set_color(w, parent_color);
				self.set_color(parent, Color::Black);
				let outer = self.child(w, side.opposite());
				self.set_color(outer, Color::Black);
				self.rotate(parent, side);
				x = self.root;
			}
		}

		self.set_color(x, Color::Black);
	}

	#[inline]
	fn allocate_node(&mut self, node: Node<K, V>) -> Result<usize, (Error, Node<K, V>)> {
		if let Some(limit) = self.node_limit {
			if self.allocated >= limit {
				debug!("node allocation rejected: limit of {} nodes reached", limit);
				return Err((Error::NodeLimit { limit }, node));
			}
		}

		let id = self.nodes.insert(node);
		self.allocated += 1;
		Ok(id)
	}

	#[inline]
	fn release_node(&mut self, id: usize) -> Node<K, V> {
		let node = self.nodes.remove(id).unwrap();
		self.allocated -= 1;
		node
	}
}
