#![cfg(feature = "dot")]
use rbtree_slab::{RbTreeExt, RbTreeMap};

#[test]
pub fn dot_write() {
	let mut map = RbTreeMap::new();
	map.insert(1, 'a');
	map.insert(2, 'b');

	let root = map.root_id();
	let child = map.right(root);

	let mut out = Vec::new();
	map.dot_write(&mut out).unwrap();
	let dot = String::from_utf8(out).unwrap();

	assert!(dot.starts_with("digraph tree {"));
	assert!(dot.contains(&format!("n{} [fillcolor=black, label=\"1|a|({})\"];", root, root)));
	assert!(dot.contains(&format!("n{} [fillcolor=red, label=\"2|b|({})\"];", child, child)));
	assert!(dot.contains(&format!("n{} -> n{}", root, child)));
	assert!(dot.ends_with('}'));
}
