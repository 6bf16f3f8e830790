use std::cmp::Ordering;

/// Key ordering used by a tree.
///
/// The ordering must be a strict weak order that does not change while keys
/// are stored in the tree. Two keys comparing `Equal` are the same key as far
/// as lookup, insertion and removal are concerned.
///
/// Any `Fn(&Q, &Q) -> Ordering` closure is a comparator.
pub trait Comparator<Q: ?Sized> {
	fn compare(&self, a: &Q, b: &Q) -> Ordering;
}

/// Comparator using the [`Ord`] implementation of the keys.
#[derive(Clone, Copy, Default, Debug)]
pub struct Natural;

impl<Q: Ord + ?Sized> Comparator<Q> for Natural {
	#[inline]
	fn compare(&self, a: &Q, b: &Q) -> Ordering {
		a.cmp(b)
	}
}

impl<Q: ?Sized, F> Comparator<Q> for F
where
	F: Fn(&Q, &Q) -> Ordering,
{
	#[inline]
	fn compare(&self, a: &Q, b: &Q) -> Ordering {
		self(a, b)
	}
}

/// Comparator function taking an additional context argument.
///
/// ```
/// use rbtree_slab::RbTreeMap;
///
/// // keys are compared modulo the context.
/// fn modulo(a: &u32, b: &u32, m: &u32) -> std::cmp::Ordering {
///     (a % m).cmp(&(b % m))
/// }
///
/// let mut map = RbTreeMap::with_context(modulo, 10u32);
/// map.insert(13, "a");
/// assert_eq!(map.lookup(&3), Some(&"a"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct WithContext<F, X> {
	f: F,
	context: X,
}

impl<F, X> WithContext<F, X> {
	pub fn new(f: F, context: X) -> WithContext<F, X> {
		WithContext { f, context }
	}

	#[inline]
	pub fn context(&self) -> &X {
		&self.context
	}
}

impl<Q: ?Sized, F, X> Comparator<Q> for WithContext<F, X>
where
	F: Fn(&Q, &Q, &X) -> Ordering,
{
	#[inline]
	fn compare(&self, a: &Q, b: &Q) -> Ordering {
		(self.f)(a, b, &self.context)
	}
}
