//! Ordered map based on a red-black tree whose nodes live in a slab.
//!
//! Nodes are addressed by their index in the slab, and a reserved index ([`NIL`])
//! plays the role of the black sentinel leaf.
//! The slab recycles the slots of removed nodes, and each tree owns its own slab.
#[cfg(feature = "std-slab")]
use slab::Slab;

mod compare;
mod error;
pub mod generic;

pub use compare::{Comparator, Natural, WithContext};
pub use error::{Error, InvariantError};
pub use generic::{
	map::{RbTreeExt, RbTreeExtMut, Release},
	Color, Side, NIL,
};

/// Red-black tree map based on `Slab`.
#[cfg(feature = "std-slab")]
pub type RbTreeMap<K, V, O = Natural> = generic::RbTreeMap<K, V, O, Slab<generic::Node<K, V>>>;

/// Red-black tree map builder based on `Slab`.
#[cfg(feature = "std-slab")]
pub type Builder<K, V, O = Natural> = generic::Builder<K, V, O, Slab<generic::Node<K, V>>>;
