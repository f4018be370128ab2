use ordered_btree::BTreeMap;
use std::{cell::Cell, rc::Rc};

/// Value counting its drops.
struct Element {
	counter: Rc<Cell<usize>>,
	value: i32,
}

impl Element {
	fn new(counter: &Rc<Cell<usize>>, value: i32) -> Self {
		Element {
			counter: counter.clone(),
			value,
		}
	}
}

impl Drop for Element {
	fn drop(&mut self) {
		self.counter.set(self.counter.get() + 1);
	}
}

fn counted_map(counter: &Rc<Cell<usize>>, len: i32) -> BTreeMap<i32, Element> {
	let mut map = BTreeMap::with_min_degree(2);
	for i in 0..len {
		map.insert(i, Element::new(counter, i));
	}

	map
}

#[test]
pub fn iter() {
	let mut map = BTreeMap::with_min_degree(2);
	for i in (0..100).rev() {
		map.insert(i, i * 2);
	}

	let mut i = 0;
	for (key, value) in &map {
		assert_eq!(*key, i);
		assert_eq!(*value, i * 2);
		i += 1;
	}

	assert_eq!(i, 100)
}

#[test]
pub fn iter_rev() {
	let map: BTreeMap<i32, ()> = (0..100).map(|i| (i, ())).collect();

	let keys: Vec<i32> = map.iter().rev().map(|(k, _)| *k).collect();
	assert_eq!(keys, (0..100).rev().collect::<Vec<_>>());
}

#[test]
pub fn iter_both_ends() {
	let map: BTreeMap<i32, ()> = (0..7).map(|i| (i, ())).collect();

	let mut iter = map.iter();
	assert_eq!(iter.len(), 7);
	assert_eq!(iter.next().map(|(k, _)| *k), Some(0));
	assert_eq!(iter.next_back().map(|(k, _)| *k), Some(6));
	assert_eq!(iter.next_back().map(|(k, _)| *k), Some(5));
	assert_eq!(iter.len(), 4);

	let rest: Vec<i32> = iter.map(|(k, _)| *k).collect();
	assert_eq!(rest, [1, 2, 3, 4]);
}

#[test]
pub fn iter_empty() {
	let map: BTreeMap<i32, i32> = BTreeMap::new();

	assert_eq!(map.iter().next(), None);
	assert_eq!(map.iter().next_back(), None);
	assert_eq!(map.keys().len(), 0);
	assert_eq!(map.into_iter().next(), None);
}

#[test]
pub fn keys_values() {
	let map: BTreeMap<i32, char> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();

	assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 2, 3]);
	assert_eq!(map.values().copied().collect::<String>(), "abc");
	assert_eq!(map.values().rev().copied().collect::<String>(), "cba");

	assert_eq!(map.clone().into_keys().collect::<Vec<_>>(), [1, 2, 3]);
	assert_eq!(map.into_values().collect::<String>(), "abc");
}

#[test]
pub fn into_iter() {
	let counter = Rc::new(Cell::new(0));
	let map = counted_map(&counter, 100);

	let mut expected = 0;
	for (key, value) in map {
		assert_eq!(key, value.value);
		assert_eq!(key, expected);
		expected += 1;
	}

	assert_eq!(expected, 100);
	assert_eq!(counter.get(), 100);
}

#[test]
pub fn into_iter_partial_drop() {
	let counter = Rc::new(Cell::new(0));
	let map = counted_map(&counter, 100);

	let mut iter = map.into_iter();
	for _ in 0..10 {
		iter.next();
	}

	assert_eq!(counter.get(), 10);
	assert_eq!(iter.len(), 90);

	std::mem::drop(iter);
	assert_eq!(counter.get(), 100);
}

#[test]
pub fn clear_drops() {
	let counter = Rc::new(Cell::new(0));
	let mut map = counted_map(&counter, 50);

	map.remove(&7);
	assert_eq!(counter.get(), 1);

	map.clear();
	assert_eq!(counter.get(), 50);
}
