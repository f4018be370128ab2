//! End-to-end scenarios on small trees of minimum degree 2,
//! where every split, rotation and merge is easy to follow.
use ordered_btree::{map::BTreeExt, BTreeMap};

fn keys(map: &BTreeMap<i32, i32>) -> Vec<i32> {
	map.keys().copied().collect()
}

/// Root separators of the tree.
fn root_keys(map: &BTreeMap<i32, i32>) -> Vec<i32> {
	map.root().map_or(Vec::new(), |root| root.entries().iter().map(|e| *e.key()).collect())
}

fn height_bound(len: usize, min_degree: usize) -> f64 {
	1.0 + ((len as f64 + 1.0) / 2.0).log(min_degree as f64)
}

#[test]
fn first_split() {
	let mut map = BTreeMap::with_min_degree(2);
	for i in 1..=3 {
		map.insert(i, i);
	}
	assert_eq!(map.height(), 1);

	map.insert(4, 4);
	map.validate();
	assert_eq!(map.height(), 2);
	assert_eq!(map.node_count(), 3);
	assert_eq!(root_keys(&map), [2]);
	assert_eq!(keys(&map), [1, 2, 3, 4]);
}

#[test]
fn empty_map() {
	let map: BTreeMap<i32, i32> = BTreeMap::with_min_degree(2);

	assert_eq!(map.first_key_value(), None);
	assert_eq!(map.last_key_value(), None);
	assert_eq!(map.floor(&0), None);
	assert_eq!(map.ceiling(&0), None);
	assert_eq!(map.get(&0), None);
	assert_eq!(map.height(), 0);
	assert_eq!(map.len(), 0);
	assert!(map.is_empty());
	assert!(keys(&map).is_empty());
}

#[test]
fn ascending_insertions() {
	let mut map = BTreeMap::with_min_degree(2);
	for i in 1..=10 {
		map.insert(i, i * 10);
		map.validate();
	}

	assert_eq!(map.len(), 10);
	assert_eq!(keys(&map), (1..=10).collect::<Vec<_>>());
	assert_eq!(map.get(&7), Some(&70));
	assert_eq!(map.get(&11), None);

	// the root was split twice.
	assert_eq!(map.height(), 3);
	assert_eq!(root_keys(&map), [4]);
}

#[test]
fn update_in_place() {
	let mut map = BTreeMap::with_min_degree(2);
	map.insert(1, 1);
	map.insert(2, 2);
	map.insert(3, 3);

	assert_eq!(map.insert(2, 20), Some(2));
	assert_eq!(map.len(), 3);
	assert_eq!(map.get(&2), Some(&20));
}

#[test]
fn remove_from_internal_node() {
	let mut map: BTreeMap<i32, i32> = BTreeMap::with_min_degree(2);
	map.extend((1..=10).map(|i| (i, i)));
	assert_eq!(root_keys(&map), [4]);

	assert_eq!(map.remove(&4), Some(4));
	map.validate();

	assert_eq!(map.len(), 9);
	assert_eq!(keys(&map), [1, 2, 3, 5, 6, 7, 8, 9, 10]);
	assert_eq!(root_keys(&map), [5]);
}

#[test]
fn remove_with_borrow_and_merge() {
	let mut map: BTreeMap<i32, i32> = BTreeMap::with_min_degree(2);
	map.extend((1..=7).map(|i| (i, i)));

	for (i, key) in [1, 2, 3].iter().enumerate() {
		assert_eq!(map.remove(key), Some(*key));
		map.validate();
		assert_eq!(map.len(), 6 - i);
	}

	assert_eq!(keys(&map), [4, 5, 6, 7]);
	assert_eq!(map.height(), 2);
}

#[test]
fn range_query() {
	let map: BTreeMap<i32, i32> = (1..=10).map(|i| (i, i)).collect();

	let keys: Vec<i32> = map.range_inclusive(&3, &7).map(|(k, _)| *k).collect();
	assert_eq!(keys, [3, 4, 5, 6, 7]);

	assert_eq!(map.range_inclusive(&7, &3).next(), None);
}

#[test]
fn remove_everything() {
	for t in 2..=5 {
		let mut map = BTreeMap::with_min_degree(t);
		map.extend((0..200).map(|i| (i, i)));

		// alternate between both ends and the middle.
		let mut order: Vec<i32> = Vec::new();
		let (mut lo, mut hi) = (0, 199);
		while lo <= hi {
			order.push(lo);
			if lo != hi {
				order.push(hi);
			}
			lo += 1;
			hi -= 1;
		}

		for key in order {
			assert_eq!(map.remove(&key), Some(key));
			map.validate();
		}

		assert!(map.is_empty());
		assert_eq!(map.height(), 0);
		assert!(map.root().is_none());
	}
}

#[test]
fn balanced_height() {
	for t in 2..=6 {
		let mut map = BTreeMap::with_min_degree(t);
		for i in 0..1000 {
			map.insert(i, ());
			assert!(map.height() as f64 <= height_bound(map.len(), t) + 1e-9);
		}

		for i in (0..1000).step_by(3) {
			map.remove(&i);
			assert!(map.height() as f64 <= height_bound(map.len(), t) + 1e-9);
		}

		map.validate();
	}
}

#[test]
fn single_entry() {
	let mut map = BTreeMap::with_min_degree(2);
	map.insert("k", 1);

	assert_eq!(map.height(), 1);
	assert_eq!(map.floor("z"), Some((&"k", &1)));
	assert_eq!(map.ceiling("a"), Some((&"k", &1)));
	assert_eq!(map.floor("a"), None);
	assert_eq!(map.ceiling("z"), None);

	assert_eq!(map.remove("k"), Some(1));
	assert_eq!(map.height(), 0);
	assert_eq!(map.first_key_value(), None);
}
