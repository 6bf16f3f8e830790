use rbtree_slab::RbTreeMap;
use std::ops::ControlFlow;

mod common;
use common::items;

#[test]
pub fn iter() {
	let mut map = RbTreeMap::new();
	for i in (0..10).rev() {
		map.insert(i, i);
	}

	let mut i = 0;
	for (key, value) in &map {
		assert_eq!(*key, i);
		assert_eq!(*value, i);
		i += 1;
	}

	assert_eq!(i, 10)
}

#[test]
pub fn iter_sorted() {
	let map: RbTreeMap<usize, usize> = items(300).into_iter().collect();

	let mut sorted = items(300);
	sorted.sort_unstable();

	let pairs: Vec<(usize, usize)> = map.iter().map(|(k, v)| (*k, *v)).collect();
	assert_eq!(pairs, sorted);
}

#[test]
pub fn iter_rev() {
	let map: RbTreeMap<usize, usize> = items(100).into_iter().collect();

	let mut keys: Vec<usize> = map.keys().rev().copied().collect();
	keys.reverse();
	assert_eq!(keys, map.keys().copied().collect::<Vec<_>>());
}

#[test]
pub fn iter_both_ends() {
	let map: RbTreeMap<i32, ()> = (0..7).map(|i| (i, ())).collect();

	let mut iter = map.keys();
	assert_eq!(iter.next(), Some(&0));
	assert_eq!(iter.next_back(), Some(&6));
	assert_eq!(iter.next(), Some(&1));
	assert_eq!(iter.next_back(), Some(&5));
	assert_eq!(iter.next_back(), Some(&4));
	assert_eq!(iter.next(), Some(&2));
	assert_eq!(iter.next(), Some(&3));
	assert_eq!(iter.next(), None);
	assert_eq!(iter.next_back(), None);
}

#[test]
pub fn iter_empty() {
	let map: RbTreeMap<i32, i32> = RbTreeMap::new();
	assert_eq!(map.iter().next(), None);
	assert_eq!(map.iter().next_back(), None);
}

#[test]
pub fn values() {
	let map: RbTreeMap<i32, char> = vec![(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
	assert_eq!(map.values().copied().collect::<String>(), "abc");
	assert_eq!(map.values().rev().copied().collect::<String>(), "cba");
}

#[test]
pub fn visit_all() {
	let map: RbTreeMap<usize, usize> = items(100).into_iter().collect();

	let mut visited = Vec::new();
	let flow: ControlFlow<()> = map.map(|key, value| {
		visited.push((*key, *value));
		ControlFlow::Continue(())
	});

	assert_eq!(flow, ControlFlow::Continue(()));
	assert_eq!(visited, map.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>());
}

#[test]
pub fn visit_early_exit() {
	let map: RbTreeMap<i32, i32> = (0..100).map(|i| (i, i * i)).collect();

	let mut count = 0;
	let flow = map.map(|key, value| {
		count += 1;
		if *value > 50 {
			ControlFlow::Break(*key)
		} else {
			ControlFlow::Continue(())
		}
	});

	assert_eq!(flow, ControlFlow::Break(8));
	assert_eq!(count, 9);
}

#[test]
pub fn visit_empty() {
	let map: RbTreeMap<i32, i32> = RbTreeMap::new();
	let flow: ControlFlow<()> = map.map(|_, _| panic!("empty map"));
	assert_eq!(flow, ControlFlow::Continue(()));
}
