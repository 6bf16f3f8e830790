use super::{Hooks, NodeSlab, RbTreeMap};

/// Tree configuration.
///
/// # Example
///
/// ```
/// use rbtree_slab::{RbTreeMap, Natural, Error};
///
/// let mut map = RbTreeMap::builder(Natural)
///     .node_limit(2)
///     .value_release(|value: String| println!("dropping {}", value))
///     .build();
///
/// map.insert(1, "one".to_string());
/// map.insert(2, "two".to_string());
/// assert_eq!(map.try_insert(3, "three".to_string()), Err(Error::NodeLimit { limit: 2 }));
/// assert_eq!(map.size(), 2);
/// ```
pub struct Builder<K, V, O, C> {
	cmp: O,
	nodes: C,
	hooks: Hooks<K, V>,
	node_limit: Option<usize>,
}

impl<K, V, O, C: Default> Builder<K, V, O, C> {
	#[inline]
	pub fn new(cmp: O) -> Self {
		Builder {
			cmp,
			nodes: C::default(),
			hooks: Hooks::none(),
			node_limit: None,
		}
	}
}

impl<K, V, O, C> Builder<K, V, O, C> {
	/// Action called on each key discarded by the tree.
	#[inline]
	pub fn key_release<F>(mut self, f: F) -> Self
	where
		F: FnMut(K) + Send + 'static,
	{
		self.hooks.key = Some(Box::new(f));
		self
	}

	/// Action called on each value discarded by the tree.
	#[inline]
	pub fn value_release<F>(mut self, f: F) -> Self
	where
		F: FnMut(V) + Send + 'static,
	{
		self.hooks.value = Some(Box::new(f));
		self
	}

	/// Maximum number of nodes of the tree.
	///
	/// Inserting a new key in a full tree fails with [`Error::NodeLimit`](crate::Error::NodeLimit).
	#[inline]
	pub fn node_limit(mut self, limit: usize) -> Self {
		self.node_limit = Some(limit);
		self
	}

	/// Node storage of the tree, for instance a pre-allocated slab.
	///
	/// It is expected to be empty.
	#[inline]
	pub fn nodes(mut self, nodes: C) -> Self {
		self.nodes = nodes;
		self
	}

	#[inline]
	pub fn build(self) -> RbTreeMap<K, V, O, C>
	where
		C: NodeSlab<K, V>,
	{
		RbTreeMap::from_parts(self.cmp, self.nodes, self.hooks, self.node_limit)
	}
}
