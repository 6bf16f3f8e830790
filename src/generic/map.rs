use crate::{
	generic::node::{Item, Node, NIL},
	Comparator, Error, Natural, WithContext,
};
use cc_traits::{SimpleCollectionMut, SimpleCollectionRef, SlabMut};
use log::debug;
use smallvec::SmallVec;
use std::{
	borrow::Borrow,
	cmp::Ordering,
	fmt,
	iter::{DoubleEndedIterator, FromIterator, FusedIterator},
	ops::{ControlFlow, Index},
};

mod builder;
mod ext;

pub use builder::*;
pub use ext::*;

/// Slab-like container able to store the nodes of a tree.
///
/// This is implemented by any container implementing the `cc-traits` slab traits,
/// such as [`slab::Slab`] when the `std-slab` feature is enabled.
pub trait NodeSlab<K, V>: SlabMut<Node<K, V>> + SimpleCollectionRef + SimpleCollectionMut {}

impl<K, V, C> NodeSlab<K, V> for C where C: SlabMut<Node<K, V>> + SimpleCollectionRef + SimpleCollectionMut {}

/// Disposal action called on a key or value discarded by the tree.
pub type Release<T> = Box<dyn FnMut(T) + Send>;

/// Stack used by the non-recursive traversals.
///
/// The height of a red-black tree is logarithmic so it rarely spills on the heap.
type Stack<T> = SmallVec<[T; 64]>;

/// Optional release actions.
pub(crate) struct Hooks<K, V> {
	pub(crate) key: Option<Release<K>>,
	pub(crate) value: Option<Release<V>>,
}

impl<K, V> Hooks<K, V> {
	pub(crate) fn none() -> Hooks<K, V> {
		Hooks {
			key: None,
			value: None,
		}
	}

	#[inline]
	fn release_key(&mut self, key: K) {
		if let Some(f) = &mut self.key {
			f(key)
		}
	}

	#[inline]
	fn release_value(&mut self, value: V) {
		if let Some(f) = &mut self.value {
			f(value)
		}
	}

	#[inline]
	fn release_item(&mut self, item: Item<K, V>) {
		let (key, value) = item.into_pair();
		self.release_key(key);
		self.release_value(value);
	}
}

/// An ordered map based on a red-black tree.
///
/// Nodes are allocated in a slab of [`Node`]s (`C`) owned by the tree,
/// which recycles the slots of removed nodes.
/// Keys are ordered by a [`Comparator`] (`O`), by default the keys [`Ord`] implementation.
///
/// # Basic usage
///
/// ```
/// use rbtree_slab::RbTreeMap;
///
/// let mut ports = RbTreeMap::new();
/// ports.insert(443, "https");
/// ports.insert(22, "ssh");
/// ports.insert(80, "http");
///
/// // an existing key keeps its place, only the value changes.
/// ports.insert(80, "www");
/// assert_eq!(ports.size(), 3);
/// assert_eq!(ports.lookup(&80), Some(&"www"));
///
/// ports.remove(&22);
/// assert!(!ports.contains_key(&22));
///
/// // entries are visited in key order.
/// let services: Vec<_> = ports.values().copied().collect();
/// assert_eq!(services, ["www", "https"]);
/// ```
///
/// # Release hooks
///
/// A tree can be given two disposal actions, called on every key and value the tree
/// discards: values overwritten by [`insert`](RbTreeMap::insert), keys and values
/// overwritten by [`replace`](RbTreeMap::replace), pairs deleted by
/// [`remove`](RbTreeMap::remove) or [`clear`](RbTreeMap::clear) and pairs still in
/// the tree when it is dropped.
/// Pairs taken out with [`steal`](RbTreeMap::steal) are handed to the caller instead.
///
/// ```
/// use rbtree_slab::{RbTreeMap, Natural};
/// use std::sync::{Arc, Mutex};
///
/// let released = Arc::new(Mutex::new(Vec::new()));
/// let log = released.clone();
///
/// let mut map = RbTreeMap::with_hooks(Natural, |_key: u32| (), move |value: &'static str| log.lock().unwrap().push(value));
/// map.insert(1, "a");
/// map.insert(1, "b");
/// map.remove(&1);
///
/// assert_eq!(*released.lock().unwrap(), ["a", "b"]);
/// ```
///
/// # Custom allocation
///
/// The tree is agnostic of the actual slab implementation, which is taken as parameter (`C`).
/// If the `std-slab` feature is enabled, [`slab::Slab`] is used by default
/// by reexporting `RbTreeMap<K, V, O, slab::Slab<_>>` at the root of the crate.
/// Each tree owns its slab: trees never share node storage.
///
/// # Correctness
///
/// It is a logic error for a key to be modified in such a way that the key's ordering relative
/// to any other key, as determined by the comparator, changes while it is in the map.
pub struct RbTreeMap<K, V, O, C: NodeSlab<K, V>> {
	/// Node slab.
	nodes: C,

	/// Root node id, or `NIL`.
	root: usize,

	/// Parent slot of the sentinel, only meaningful during removal.
	nil_parent: usize,

	/// Number of nodes currently allocated in `nodes`.
	allocated: usize,

	/// Maximum number of allocated nodes.
	node_limit: Option<usize>,

	cmp: O,

	hooks: Hooks<K, V>,
}

impl<K, V, C: NodeSlab<K, V> + Default> RbTreeMap<K, V, Natural, C> {
	/// Create a new empty tree ordering keys with their [`Ord`] implementation.
	#[inline]
	pub fn new() -> Self {
		Self::with_comparator(Natural)
	}
}

impl<K, V, F, X, C: NodeSlab<K, V> + Default> RbTreeMap<K, V, WithContext<F, X>, C> {
	/// Create a new empty tree ordering keys with the comparison function `f`,
	/// called with `context` as third argument.
	#[inline]
	pub fn with_context(f: F, context: X) -> Self {
		Self::with_comparator(WithContext::new(f, context))
	}
}

impl<K, V, O, C: NodeSlab<K, V>> RbTreeMap<K, V, O, C> {
	/// Create a new empty tree ordering keys with the given comparator.
	#[inline]
	pub fn with_comparator(cmp: O) -> Self
	where
		C: Default,
	{
		Self::with_nodes(cmp, C::default())
	}

	/// Create a new empty tree with a comparator and release hooks for keys and values.
	#[inline]
	pub fn with_hooks<F, G>(cmp: O, key_release: F, value_release: G) -> Self
	where
		C: Default,
		F: FnMut(K) + Send + 'static,
		G: FnMut(V) + Send + 'static,
	{
		Self::builder(cmp)
			.key_release(key_release)
			.value_release(value_release)
			.build()
	}

	/// Create a new empty tree storing its nodes in `nodes`,
	/// which is expected to be empty.
	#[inline]
	pub fn with_nodes(cmp: O, nodes: C) -> Self {
		RbTreeMap {
			nodes,
			root: NIL,
			nil_parent: NIL,
			allocated: 0,
			node_limit: None,
			cmp,
			hooks: Hooks::none(),
		}
	}

	/// Start configuring a tree with the given comparator.
	#[inline]
	pub fn builder(cmp: O) -> Builder<K, V, O, C>
	where
		C: Default,
	{
		Builder::new(cmp)
	}

	pub(crate) fn from_parts(cmp: O, nodes: C, hooks: Hooks<K, V>, node_limit: Option<usize>) -> Self {
		let mut map = Self::with_nodes(cmp, nodes);
		map.hooks = hooks;
		map.node_limit = node_limit;
		map
	}

	/// Returns `true` if the map contains no elements.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.root == NIL
	}

	/// Maximum number of nodes this tree may hold, if any.
	#[inline]
	pub fn node_limit(&self) -> Option<usize> {
		self.node_limit
	}

	/// Returns the number of elements in the map.
	///
	/// The elements are counted by walking through the whole tree.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut a = RbTreeMap::new();
	/// assert_eq!(a.size(), 0);
	/// a.insert(1, "a");
	/// assert_eq!(a.size(), 1);
	/// ```
	pub fn size(&self) -> usize {
		let mut count = 0;
		let mut stack: Stack<usize> = SmallVec::new();
		if self.root != NIL {
			stack.push(self.root)
		}

		while let Some(id) = stack.pop() {
			count += 1;
			stack.extend(self.node(id).children())
		}

		count
	}

	/// Returns the number of nodes on the longest path from the root to a leaf.
	///
	/// The height of an empty tree is 0.
	/// A red-black tree of `n` elements is never higher than `2 * log2(n + 1)`.
	pub fn height(&self) -> usize {
		let mut height = 0;
		let mut stack: Stack<(usize, usize)> = SmallVec::new();
		if self.root != NIL {
			stack.push((self.root, 1))
		}

		while let Some((id, depth)) = stack.pop() {
			height = height.max(depth);
			stack.extend(self.node(id).children().map(|child_id| (child_id, depth + 1)))
		}

		height
	}

	/// Returns a reference to the value corresponding to the key.
	///
	/// The key may be any borrowed form of the map's key type, but the comparator
	/// must order the borrowed form as it orders the key type.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut map = RbTreeMap::new();
	/// map.insert(1, "a");
	/// assert_eq!(map.lookup(&1), Some(&"a"));
	/// assert_eq!(map.lookup(&2), None);
	/// ```
	#[inline]
	pub fn lookup<Q: ?Sized>(&self, key: &Q) -> Option<&V>
	where
		K: Borrow<Q>,
		O: Comparator<Q>,
	{
		self.lookup_extended(key).map(|(_, value)| value)
	}

	/// Returns the key stored in the map along with its value.
	///
	/// The stored key may differ from `key` while still comparing equal to it.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut map = RbTreeMap::with_comparator(|a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase()));
	/// map.insert("Hello".to_string(), 1);
	/// map.insert("HELLO".to_string(), 2);
	///
	/// // a plain insertion keeps the original key.
	/// let (key, value) = map.lookup_extended(&"hello".to_string()).unwrap();
	/// assert_eq!((key.as_str(), *value), ("Hello", 2));
	/// ```
	#[inline]
	pub fn lookup_extended<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)>
	where
		K: Borrow<Q>,
		O: Comparator<Q>,
	{
		match self.address_of(key) {
			Ok(id) => Some(self.node(id).item().as_pair()),
			Err(_) => None,
		}
	}

	/// Returns a mutable reference to the value corresponding to the key.
	#[inline]
	pub fn lookup_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V>
	where
		K: Borrow<Q>,
		O: Comparator<Q>,
	{
		match self.address_of(key) {
			Ok(id) => Some(self.node_mut(id).value_mut()),
			Err(_) => None,
		}
	}

	/// Returns `true` if the map contains a value for the specified key.
	#[inline]
	pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool
	where
		K: Borrow<Q>,
		O: Comparator<Q>,
	{
		self.address_of(key).is_ok()
	}

	/// Returns the first key-value pair in the map.
	/// The key in this pair is the minimum key in the map.
	#[inline]
	pub fn first_key_value(&self) -> Option<(&K, &V)> {
		match self.leftmost(self.root) {
			NIL => None,
			id => Some(self.node(id).item().as_pair()),
		}
	}

	/// Returns the last key-value pair in the map.
	/// The key in this pair is the maximum key in the map.
	#[inline]
	pub fn last_key_value(&self) -> Option<(&K, &V)> {
		match self.rightmost(self.root) {
			NIL => None,
			id => Some(self.node(id).item().as_pair()),
		}
	}

	/// Calls `visitor` on each key-value pair, in key order.
	///
	/// The traversal stops as soon as `visitor` returns [`ControlFlow::Break`],
	/// and the break value is returned.
	/// The map cannot be modified during the traversal.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	/// use std::ops::ControlFlow;
	///
	/// let map: RbTreeMap<i32, &str> = [(3, "c"), (1, "a"), (2, "b")].into_iter().collect();
	///
	/// let mut keys = Vec::new();
	/// let found = map.map(|key, value| {
	///     keys.push(*key);
	///     if *value == "b" {
	///         ControlFlow::Break(*key)
	///     } else {
	///         ControlFlow::Continue(())
	///     }
	/// });
	///
	/// assert_eq!(found, ControlFlow::Break(2));
	/// assert_eq!(keys, [1, 2]);
	/// ```
	pub fn map<B, F>(&self, mut visitor: F) -> ControlFlow<B>
	where
		F: FnMut(&K, &V) -> ControlFlow<B>,
	{
		let mut stack: Stack<usize> = SmallVec::new();
		let mut id = self.root;

		loop {
			while id != NIL {
				stack.push(id);
				id = self.left(id);
			}

			match stack.pop() {
				Some(top) => {
					let (key, value) = self.node(top).item().as_pair();
					if let ControlFlow::Break(b) = visitor(key, value) {
						return ControlFlow::Break(b);
					}

					id = self.right(top);
				}
				None => return ControlFlow::Continue(()),
			}
		}
	}

	/// Gets an iterator over the entries of the map, sorted by key.
	#[inline]
	pub fn iter(&self) -> Iter<K, V, O, C> {
		Iter::new(self)
	}

	/// Gets an iterator over the keys of the map, in sorted order.
	#[inline]
	pub fn keys(&self) -> Keys<K, V, O, C> {
		Keys { inner: self.iter() }
	}

	/// Gets an iterator over the values of the map, in order by key.
	#[inline]
	pub fn values(&self) -> Values<K, V, O, C> {
		Values { inner: self.iter() }
	}

	/// Insert a key-value pair in the tree.
	///
	/// If the key is already present, its value is replaced and the previous value
	/// is released, as well as the given `key`: the map keeps the key it already stores.
	/// Returns `true` if the key was not already present.
	///
	/// # Panics
	///
	/// Panics if the key is absent and the tree reached its node limit.
	/// See [`try_insert`](RbTreeMap::try_insert) for a fallible version.
	#[inline]
	pub fn insert(&mut self, key: K, value: V) -> bool
	where
		O: Comparator<K>,
	{
		match self.try_insert(key, value) {
			Ok(inserted) => inserted,
			Err(e) => panic!("{}", e),
		}
	}

	/// Insert a key-value pair in the tree, or fail if a new node cannot be allocated.
	///
	/// In case of failure the tree is unchanged and the given key and value are released.
	#[inline]
	pub fn try_insert(&mut self, key: K, value: V) -> Result<bool, Error>
	where
		O: Comparator<K>,
	{
		self.find_or_insert(key, value, false)
	}

	/// Replace a key-value pair in the tree.
	///
	/// If the key is already present, both the stored key and value are released
	/// and replaced by the given ones.
	/// Returns `true` if the key was not already present.
	///
	/// # Panics
	///
	/// Panics if the key is absent and the tree reached its node limit.
	#[inline]
	pub fn replace(&mut self, key: K, value: V) -> bool
	where
		O: Comparator<K>,
	{
		match self.try_replace(key, value) {
			Ok(inserted) => inserted,
			Err(e) => panic!("{}", e),
		}
	}

	/// Fallible version of [`replace`](RbTreeMap::replace).
	#[inline]
	pub fn try_replace(&mut self, key: K, value: V) -> Result<bool, Error>
	where
		O: Comparator<K>,
	{
		self.find_or_insert(key, value, true)
	}

	/// Insertion shared by `insert` and `replace`.
	fn find_or_insert(&mut self, key: K, value: V, replace: bool) -> Result<bool, Error>
	where
		O: Comparator<K>,
	{
		match self.address_of(&key) {
			Ok(id) => {
				let item = self.node_mut(id).item_mut();
				if replace {
					let (old_key, old_value) = item.set(key, value);
					self.hooks.release_key(old_key);
					self.hooks.release_value(old_value);
				} else {
					let old_value = item.set_value(value);
					self.hooks.release_key(key);
					self.hooks.release_value(old_value);
				}

				Ok(false)
			}
			Err(addr) => match self.insert_at(addr, Item::new(key, value)) {
				Ok(_) => Ok(true),
				Err((e, item)) => {
					self.hooks.release_item(item);
					Err(e)
				}
			},
		}
	}

	/// Removes a key from the map, releasing the stored key and value.
	///
	/// Returns `true` if the key was in the map.
	#[inline]
	pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> bool
	where
		K: Borrow<Q>,
		O: Comparator<Q>,
	{
		match self.address_of(key) {
			Ok(id) => {
				let item = self.remove_at(id);
				self.hooks.release_item(item);
				true
			}
			Err(_) => false,
		}
	}

	/// Removes a key from the map, returning the stored key and value
	/// without releasing them.
	///
	/// # Example
	///
	/// ```
	/// use rbtree_slab::RbTreeMap;
	///
	/// let mut map = RbTreeMap::new();
	/// map.insert(1, "a");
	/// assert_eq!(map.steal(&1), Some((1, "a")));
	/// assert_eq!(map.steal(&1), None);
	/// ```
	#[inline]
	pub fn steal<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)>
	where
		K: Borrow<Q>,
		O: Comparator<Q>,
	{
		match self.address_of(key) {
			Ok(id) => Some(self.remove_at(id).into_pair()),
			Err(_) => None,
		}
	}

	/// Clears the map, releasing all elements.
	///
	/// Nodes are released children first, and their slots are kept for future insertions.
	#[inline]
	pub fn clear(&mut self) {
		let count = self.release_all();
		if count > 0 {
			debug!("released {} nodes", count)
		}
	}

	/// Release every node of the tree in post-order.
	///
	/// The tree is detached first so it stays empty even if a release hook panics.
	fn release_all(&mut self) -> usize {
		let mut count = 0;
		let mut id = self.root;
		self.root = NIL;

		while id != NIL {
			let node = self.node(id);
			match (node.left(), node.right()) {
				(NIL, NIL) => {
					let parent = node.parent();
					let node = self.release_node(id);
					if parent != NIL {
						let parent_node = self.node_mut(parent);
						match parent_node.child_side(id) {
							Some(side) => parent_node.set_child(side, NIL),
							None => unreachable!(),
						}
					}

					self.hooks.release_item(node.into_item());
					count += 1;
					id = parent
				}
				(NIL, right) => id = right,
				(left, _) => id = left,
			}
		}

		count
	}

	/// Write the tree in the DOT graph description language.
	///
	/// Requires the `dot` feature.
	#[cfg(feature = "dot")]
	#[inline]
	pub fn dot_write<W: std::io::Write>(&self, f: &mut W) -> std::io::Result<()>
	where
		K: std::fmt::Display,
		V: std::fmt::Display,
	{
		write!(f, "digraph tree {{\n\tnode [shape=record, style=filled, fontcolor=white];\n")?;
		if self.root != NIL {
			self.dot_write_node(f, self.root)?
		}
		write!(f, "}}")
	}

	/// Write the given node in the DOT graph description language.
	///
	/// Requires the `dot` feature.
	#[cfg(feature = "dot")]
	#[inline]
	fn dot_write_node<W: std::io::Write>(&self, f: &mut W, id: usize) -> std::io::Result<()>
	where
		K: std::fmt::Display,
		V: std::fmt::Display,
	{
		let name = format!("n{}", id);
		let node = self.node(id);

		write!(f, "\t{} [fillcolor={}, label=\"", name, node.color())?;
		node.dot_write_label(f)?;
		writeln!(f, "|({})\"];", id)?;

		for child_id in node.children() {
			self.dot_write_node(f, child_id)?;
			let child_name = format!("n{}", child_id);
			writeln!(f, "\t{} -> {}", name, child_name)?;
		}

		Ok(())
	}
}

impl<K, V, O, C: NodeSlab<K, V>> Drop for RbTreeMap<K, V, O, C> {
	fn drop(&mut self) {
		self.release_all();
	}
}

impl<K, Q: ?Sized, V, O, C: NodeSlab<K, V>> Index<&Q> for RbTreeMap<K, V, O, C>
where
	K: Borrow<Q>,
	O: Comparator<Q>,
{
	type Output = V;

	/// Returns a reference to the value corresponding to the supplied key.
	///
	/// # Panics
	///
	/// Panics if the key is not present in the `RbTreeMap`.
	#[inline]
	fn index(&self, key: &Q) -> &V {
		self.lookup(key).expect("no entry found for key")
	}
}

impl<K, V, O: Default, C: NodeSlab<K, V> + Default> Default for RbTreeMap<K, V, O, C> {
	#[inline]
	fn default() -> Self {
		RbTreeMap::with_comparator(O::default())
	}
}

impl<K, V, O: Comparator<K> + Default, C: NodeSlab<K, V> + Default> FromIterator<(K, V)> for RbTreeMap<K, V, O, C> {
	#[inline]
	fn from_iter<T>(iter: T) -> Self
	where
		T: IntoIterator<Item = (K, V)>,
	{
		let mut map = RbTreeMap::default();
		map.extend(iter);
		map
	}
}

impl<K, V, O: Comparator<K>, C: NodeSlab<K, V>> Extend<(K, V)> for RbTreeMap<K, V, O, C> {
	#[inline]
	fn extend<T>(&mut self, iter: T)
	where
		T: IntoIterator<Item = (K, V)>,
	{
		for (key, value) in iter {
			self.insert(key, value);
		}
	}
}

impl<K: fmt::Debug, V: fmt::Debug, O, C: NodeSlab<K, V>> fmt::Debug for RbTreeMap<K, V, O, C> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

impl<K: PartialEq, V: PartialEq, O, C: NodeSlab<K, V>> PartialEq for RbTreeMap<K, V, O, C> {
	fn eq(&self, other: &Self) -> bool {
		self.iter().eq(other.iter())
	}
}

impl<K: PartialOrd, V: PartialOrd, O, C: NodeSlab<K, V>> PartialOrd for RbTreeMap<K, V, O, C> {
	#[inline]
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		self.iter().partial_cmp(other.iter())
	}
}

impl<'a, K, V, O, C: NodeSlab<K, V>> IntoIterator for &'a RbTreeMap<K, V, O, C> {
	type IntoIter = Iter<'a, K, V, O, C>;
	type Item = (&'a K, &'a V);

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// In-order iterator over the entries of a [`RbTreeMap`].
///
/// It walks the tree through the parent links, without any auxiliary storage.
pub struct Iter<'a, K, V, O, C: NodeSlab<K, V>> {
	/// The tree reference.
	map: &'a RbTreeMap<K, V, O, C>,

	/// Next node to yield from the front, or `NIL`.
	front: usize,

	/// Next node to yield from the back, or `NIL`.
	back: usize,
}

impl<'a, K, V, O, C: NodeSlab<K, V>> Iter<'a, K, V, O, C> {
	#[inline]
	fn new(map: &'a RbTreeMap<K, V, O, C>) -> Self {
		Iter {
			map,
			front: map.leftmost(map.root),
			back: map.rightmost(map.root),
		}
	}

	#[inline]
	fn yield_node(&self, id: usize) -> (&'a K, &'a V) {
		self.map.node(id).item().as_pair()
	}
}

impl<'a, K, V, O, C: NodeSlab<K, V>> Iterator for Iter<'a, K, V, O, C> {
	type Item = (&'a K, &'a V);

	#[inline]
	fn next(&mut self) -> Option<(&'a K, &'a V)> {
		match self.front {
			NIL => None,
			id => {
				if id == self.back {
					self.front = NIL;
					self.back = NIL;
				} else {
					self.front = self.map.successor(id);
				}

				Some(self.yield_node(id))
			}
		}
	}
}

impl<'a, K, V, O, C: NodeSlab<K, V>> FusedIterator for Iter<'a, K, V, O, C> {}

impl<'a, K, V, O, C: NodeSlab<K, V>> DoubleEndedIterator for Iter<'a, K, V, O, C> {
	#[inline]
	fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
		match self.back {
			NIL => None,
			id => {
				if id == self.front {
					self.front = NIL;
					self.back = NIL;
				} else {
					self.back = self.map.predecessor(id);
				}

				Some(self.yield_node(id))
			}
		}
	}
}

/// Iterator over the keys of a [`RbTreeMap`].
pub struct Keys<'a, K, V, O, C: NodeSlab<K, V>> {
	inner: Iter<'a, K, V, O, C>,
}

impl<'a, K, V, O, C: NodeSlab<K, V>> Iterator for Keys<'a, K, V, O, C> {
	type Item = &'a K;

	#[inline]
	fn next(&mut self) -> Option<&'a K> {
		self.inner.next().map(|(k, _)| k)
	}
}

impl<'a, K, V, O, C: NodeSlab<K, V>> DoubleEndedIterator for Keys<'a, K, V, O, C> {
	#[inline]
	fn next_back(&mut self) -> Option<&'a K> {
		self.inner.next_back().map(|(k, _)| k)
	}
}

impl<'a, K, V, O, C: NodeSlab<K, V>> FusedIterator for Keys<'a, K, V, O, C> {}

/// Iterator over the values of a [`RbTreeMap`].
pub struct Values<'a, K, V, O, C: NodeSlab<K, V>> {
	inner: Iter<'a, K, V, O, C>,
}

impl<'a, K, V, O, C: NodeSlab<K, V>> Iterator for Values<'a, K, V, O, C> {
	type Item = &'a V;

	#[inline]
	fn next(&mut self) -> Option<&'a V> {
		self.inner.next().map(|(_, v)| v)
	}
}

impl<'a, K, V, O, C: NodeSlab<K, V>> DoubleEndedIterator for Values<'a, K, V, O, C> {
	#[inline]
	fn next_back(&mut self) -> Option<&'a V> {
		self.inner.next_back().map(|(_, v)| v)
	}
}

impl<'a, K, V, O, C: NodeSlab<K, V>> FusedIterator for Values<'a, K, V, O, C> {}
