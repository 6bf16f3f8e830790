#![allow(dead_code)]
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};
use rbtree_slab::{Comparator, RbTreeExt, RbTreeMap};
use simplelog::{Config, LevelFilter, TestLogger};

pub const SEED: u64 = 0x7465_7374_7365_6564;

/// Install the test logger, once per test binary.
pub fn init_logging() {
	let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

pub fn rng() -> SmallRng {
	SmallRng::seed_from_u64(SEED)
}

/// `count` distinct keys in random order, each with a random value.
pub fn items(count: usize) -> Vec<(usize, usize)> {
	let mut rng = rng();
	let mut keys: Vec<usize> = (0..count).map(|i| i * 7 + 3).collect();
	keys.shuffle(&mut rng);
	keys.into_iter().map(|key| (key, rng.gen_range(0..10000))).collect()
}

/// Validate the tree and its height bound.
pub fn validate<K, V, O: Comparator<K>>(map: &RbTreeMap<K, V, O>) {
	map.validate();

	let size = map.size();
	if size > 0 {
		let bound = 2.0 * ((size + 1) as f64).log2();
		assert!(
			map.height() as f64 <= bound,
			"height {} exceeds {} for {} nodes",
			map.height(),
			bound,
			size
		);
	} else {
		assert_eq!(map.height(), 0)
	}
}
