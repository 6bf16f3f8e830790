//! Generic red-black tree types.
//!
//! Types defined in this modules are independant of the actual storage type.
pub mod node;
pub use node::{Color, Node, Side, NIL};

pub mod map;
pub use map::{Builder, NodeSlab, RbTreeMap};
