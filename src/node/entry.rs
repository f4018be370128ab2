use super::Keyed;
use std::cmp::Ordering;

/// Key-value pair stored in a node.
///
/// The key is never handed out mutably: changing it would break the ordering
/// of the node holding it.
#[derive(Clone, Debug)]
pub struct Entry<K, V> {
	key: K,
	value: V,
}

impl<K, V> Entry<K, V> {
	#[inline]
	pub fn new(key: K, value: V) -> Entry<K, V> {
		Entry { key, value }
	}

	#[inline]
	pub fn key(&self) -> &K {
		&self.key
	}

	#[inline]
	pub fn value(&self) -> &V {
		&self.value
	}

	#[inline]
	pub fn value_mut(&mut self) -> &mut V {
		&mut self.value
	}

	/// Replace the value, returning the previous one.
	#[inline]
	pub fn set_value(&mut self, value: V) -> V {
		std::mem::replace(&mut self.value, value)
	}

	#[inline]
	pub fn as_pair(&self) -> (&K, &V) {
		(&self.key, &self.value)
	}

	#[inline]
	pub fn into_key(self) -> K {
		self.key
	}

	#[inline]
	pub fn into_value(self) -> V {
		self.value
	}

	#[inline]
	pub fn into_pair(self) -> (K, V) {
		(self.key, self.value)
	}
}

impl<K, V> Keyed for Entry<K, V> {
	type Key = K;

	#[inline]
	fn key(&self) -> &K {
		&self.key
	}
}

impl<K: PartialEq, V> PartialEq for Entry<K, V> {
	fn eq(&self, other: &Entry<K, V>) -> bool {
		self.key.eq(&other.key)
	}
}

impl<K: Ord, V> PartialOrd for Entry<K, V> {
	fn partial_cmp(&self, other: &Entry<K, V>) -> Option<Ordering> {
		Some(self.key.cmp(&other.key))
	}
}
