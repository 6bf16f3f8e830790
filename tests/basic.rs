use rand::seq::SliceRandom;
use rbtree_slab::{Color, RbTreeExt, RbTreeMap, WithContext};
use std::cmp::Ordering;

mod common;
use common::{init_logging, items, rng, validate};

#[test]
pub fn insert() {
	init_logging();
	let mut map: RbTreeMap<usize, usize> = RbTreeMap::new();

	for (key, value) in items(100) {
		assert!(map.insert(key, value));
		validate(&map);
	}

	assert_eq!(map.size(), 100);
}

#[test]
pub fn remove() {
	init_logging();
	let mut map: RbTreeMap<usize, usize> = RbTreeMap::new();

	let mut items = items(100);
	for (key, value) in &items {
		map.insert(*key, *value);
	}

	items.shuffle(&mut rng());

	for (i, (key, _)) in items.iter().enumerate() {
		assert!(map.remove(key));
		validate(&map);
		assert_eq!(map.size(), items.len() - i - 1);
		assert!(!map.contains_key(key))
	}

	assert!(map.is_empty())
}

#[test]
pub fn lookup() {
	let mut map: RbTreeMap<usize, usize> = RbTreeMap::new();
	let items = items(200);

	for (key, value) in &items {
		map.insert(*key, *value);
	}

	for (key, value) in &items {
		assert_eq!(map.lookup(key), Some(value));
		assert_eq!(map.lookup_extended(key), Some((key, value)));
		assert_eq!(map[key], *value);
	}

	// keys are all congruent to 3 modulo 7.
	assert_eq!(map.lookup(&4), None);
	assert_eq!(map.lookup_extended(&4), None);
}

#[test]
pub fn size_is_stable_on_existing_and_absent_keys() {
	let mut map: RbTreeMap<usize, usize> = RbTreeMap::new();
	for (key, value) in items(50) {
		map.insert(key, value);
	}

	let (key, _) = items(50)[10];
	assert!(!map.insert(key, 1));
	assert!(!map.replace(key, 2));
	assert_eq!(map.size(), 50);
	assert_eq!(map.lookup(&key), Some(&2));

	assert!(!map.remove(&1));
	assert_eq!(map.steal(&1), None);
	assert_eq!(map.size(), 50);
	validate(&map);
}

#[test]
pub fn ascending_insertion() {
	init_logging();
	let mut map = RbTreeMap::new();
	for key in (10..=70).step_by(10) {
		map.insert(key, key * 100);
	}

	validate(&map);
	assert!(map.height() <= 4);
	assert_eq!(map.color(map.root_id()), Color::Black);

	assert!(map.remove(&10));
	validate(&map);
	assert!(map.remove(&60));
	validate(&map);

	assert_eq!(map.lookup(&20), Some(&2000));
	assert_eq!(map.keys().copied().collect::<Vec<_>>(), [20, 30, 40, 50, 70]);
}

#[test]
pub fn descending_insertion() {
	let mut map = RbTreeMap::new();
	for key in (0..1000).rev() {
		map.insert(key, ());
		validate(&map);
	}

	assert_eq!(map.size(), 1000);
	for key in 0..1000 {
		assert!(map.remove(&key));
	}

	validate(&map);
	assert!(map.is_empty())
}

#[test]
pub fn lookup_mut() {
	let mut map = RbTreeMap::new();
	map.insert(1, "a");
	if let Some(x) = map.lookup_mut(&1) {
		*x = "b";
	}

	assert_eq!(map[&1], "b");
	assert_eq!(map.lookup_mut(&2), None);
}

#[test]
pub fn first_and_last() {
	let mut map = RbTreeMap::new();
	assert_eq!(map.first_key_value(), None);
	assert_eq!(map.last_key_value(), None);

	for (key, value) in items(64) {
		map.insert(key, value);
	}

	let min = items(64).into_iter().min().unwrap();
	let max = items(64).into_iter().max().unwrap();
	assert_eq!(map.first_key_value(), Some((&min.0, &min.1)));
	assert_eq!(map.last_key_value(), Some((&max.0, &max.1)));
}

#[test]
#[should_panic(expected = "no entry found for key")]
pub fn index_absent_key() {
	let map: RbTreeMap<i32, i32> = RbTreeMap::new();
	let _value = map[&1];
}

#[test]
pub fn reverse_comparator() {
	let mut map = RbTreeMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
	for key in 0..32 {
		map.insert(key, key);
	}

	validate(&map);
	assert_eq!(map.keys().copied().collect::<Vec<_>>(), (0..32).rev().collect::<Vec<_>>());
	assert_eq!(map.first_key_value(), Some((&31, &31)));
}

#[test]
pub fn context_comparator() {
	fn by_weight(a: &char, b: &char, weights: &Vec<(char, u32)>) -> Ordering {
		let weight = |c: &char| weights.iter().find(|(d, _)| d == c).map(|(_, w)| *w).unwrap_or(0);
		weight(a).cmp(&weight(b)).then(a.cmp(b))
	}

	let weights = vec![('a', 3), ('b', 1), ('c', 2)];
	let mut map = RbTreeMap::with_context(by_weight, weights);
	map.insert('a', 1);
	map.insert('b', 2);
	map.insert('c', 3);
	map.insert('d', 4);

	validate(&map);
	assert_eq!(map.keys().copied().collect::<String>(), "dbca");

	let cmp: &WithContext<_, Vec<(char, u32)>> = map.comparator();
	assert_eq!(cmp.context().len(), 3);
}

#[test]
pub fn borrowed_keys() {
	let mut map: RbTreeMap<String, usize> = RbTreeMap::new();
	map.insert("apple".to_string(), 1);
	map.insert("banana".to_string(), 2);

	assert_eq!(map.lookup("apple"), Some(&1));
	assert!(map.remove("banana"));
	assert_eq!(map.steal("apple"), Some(("apple".to_string(), 1)));
	assert!(map.is_empty())
}

#[test]
pub fn clear_and_reuse() {
	let mut map: RbTreeMap<usize, usize> = items(100).into_iter().collect();
	assert_eq!(map.size(), 100);

	map.clear();
	assert!(map.is_empty());
	assert_eq!(map.size(), 0);
	assert_eq!(map.height(), 0);

	map.extend(items(10));
	validate(&map);
	assert_eq!(map.size(), 10);
}

#[test]
pub fn debug_and_eq() {
	let a: RbTreeMap<i32, &str> = vec![(2, "b"), (1, "a")].into_iter().collect();
	let b: RbTreeMap<i32, &str> = vec![(1, "a"), (2, "b")].into_iter().collect();

	assert_eq!(format!("{:?}", a), r#"{1: "a", 2: "b"}"#);
	assert!(a == b);
}
