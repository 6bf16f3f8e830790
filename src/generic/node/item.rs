/// Key-value pair stored in a node.
#[derive(Clone, Debug)]
pub struct Item<K, V> {
	key: K,
	value: V,
}

impl<K, V> Item<K, V> {
	pub fn new(key: K, value: V) -> Item<K, V> {
		Item { key, value }
	}

	#[inline]
	pub fn key(&self) -> &K {
		&self.key
	}

	#[inline]
	pub fn value(&self) -> &V {
		&self.value
	}

	#[inline]
	pub fn value_mut(&mut self) -> &mut V {
		&mut self.value
	}

	/// Modifying a key in such a way that its order with regard to other keys changes is a logical error.
	#[inline]
	pub fn set(&mut self, key: K, value: V) -> (K, V) {
		let old_key = std::mem::replace(&mut self.key, key);
		let old_value = std::mem::replace(&mut self.value, value);
		(old_key, old_value)
	}

	#[inline]
	pub fn set_value(&mut self, value: V) -> V {
		std::mem::replace(&mut self.value, value)
	}

	#[inline]
	pub fn as_pair(&self) -> (&K, &V) {
		(&self.key, &self.value)
	}

	#[inline]
	pub fn into_pair(self) -> (K, V) {
		(self.key, self.value)
	}
}
