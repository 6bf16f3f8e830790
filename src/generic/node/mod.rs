use std::fmt;

mod addr;
mod item;

pub use addr::Address;
pub use item::Item;

/// Sentinel node identifier.
///
/// It stands for every missing child and for the parent of the root.
/// It is always black and never refers to an actual node of the slab.
pub const NIL: usize = usize::MAX;

/// Node color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
	Red,
	Black,
}

impl Color {
	#[inline]
	pub fn is_red(self) -> bool {
		self == Color::Red
	}

	#[inline]
	pub fn is_black(self) -> bool {
		self == Color::Black
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Color::Red => write!(f, "red"),
			Color::Black => write!(f, "black"),
		}
	}
}

/// Side of a child relative to its parent.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
	Left,
	Right,
}

impl Side {
	#[inline]
	pub fn opposite(self) -> Side {
		match self {
			Side::Left => Side::Right,
			Side::Right => Side::Left,
		}
	}
}

/// Red-black tree node.
///
/// Links are node identifiers in the tree slab, [`NIL`] when absent.
#[derive(Clone, Debug)]
pub struct Node<K, V> {
	parent: usize,
	left: usize,
	right: usize,
	color: Color,
	item: Item<K, V>,
}

impl<K, V> Node<K, V> {
	/// Create a new childless node.
	#[inline]
	pub fn new(parent: usize, color: Color, item: Item<K, V>) -> Node<K, V> {
		Node {
			parent,
			left: NIL,
			right: NIL,
			color,
			item,
		}
	}

	#[inline]
	pub fn parent(&self) -> usize {
		self.parent
	}

	#[inline]
	pub fn set_parent(&mut self, id: usize) {
		self.parent = id
	}

	#[inline]
	pub fn left(&self) -> usize {
		self.left
	}

	#[inline]
	pub fn right(&self) -> usize {
		self.right
	}

	#[inline]
	pub fn child(&self, side: Side) -> usize {
		match side {
			Side::Left => self.left,
			Side::Right => self.right,
		}
	}

	#[inline]
	pub fn set_child(&mut self, side: Side, id: usize) {
		match side {
			Side::Left => self.left = id,
			Side::Right => self.right = id,
		}
	}

	/// Returns the side on which `id` is a child of this node, if it is one.
	#[inline]
	pub fn child_side(&self, id: usize) -> Option<Side> {
		if self.left == id {
			Some(Side::Left)
		} else if self.right == id {
			Some(Side::Right)
		} else {
			None
		}
	}

	/// Iterator over the non-sentinel children, left first.
	#[inline]
	pub fn children(&self) -> impl Iterator<Item = usize> {
		[self.left, self.right].into_iter().filter(|id| *id != NIL)
	}

	#[inline]
	pub fn color(&self) -> Color {
		self.color
	}

	#[inline]
	pub fn set_color(&mut self, color: Color) {
		self.color = color
	}

	#[inline]
	pub fn is_red(&self) -> bool {
		self.color.is_red()
	}

	#[inline]
	pub fn is_black(&self) -> bool {
		self.color.is_black()
	}

	#[inline]
	pub fn item(&self) -> &Item<K, V> {
		&self.item
	}

	#[inline]
	pub fn item_mut(&mut self) -> &mut Item<K, V> {
		&mut self.item
	}

	#[inline]
	pub fn key(&self) -> &K {
		self.item.key()
	}

	#[inline]
	pub fn value(&self) -> &V {
		self.item.value()
	}

	#[inline]
	pub fn value_mut(&mut self) -> &mut V {
		self.item.value_mut()
	}

	#[inline]
	pub fn into_item(self) -> Item<K, V> {
		self.item
	}

	/// Write the label of the node in the DOT language.
	///
	/// Requires the `dot` feature.
	#[cfg(feature = "dot")]
	#[inline]
	pub fn dot_write_label<W: std::io::Write>(&self, f: &mut W) -> std::io::Result<()>
	where
		K: std::fmt::Display,
		V: std::fmt::Display,
	{
		write!(f, "{}|{}", self.key(), self.value())
	}
}
