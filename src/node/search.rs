use super::{Entry, Node};
use crate::utils::search;
use std::borrow::Borrow;

impl<K, V> Node<K, V> {
	/// Find the entry with the given key in the subtree.
	#[inline]
	pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&Entry<K, V>>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		let mut node = self;
		loop {
			match search(node.entries(), key) {
				Ok(i) => return Some(&node.entries[i]),
				Err(i) => node = node.children.get(i)?,
			}
		}
	}

	#[inline]
	pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		match search(self.entries(), key) {
			Ok(i) => Some(self.entries[i].value_mut()),
			Err(i) => self.children.get_mut(i)?.get_mut(key),
		}
	}

	/// Leftmost entry of the subtree.
	#[inline]
	pub fn first(&self) -> Option<&Entry<K, V>> {
		let mut node = self;
		while let Some(child) = node.children.first() {
			node = child
		}

		node.entries.first()
	}

	/// Rightmost entry of the subtree.
	#[inline]
	pub fn last(&self) -> Option<&Entry<K, V>> {
		let mut node = self;
		while let Some(child) = node.children.last() {
			node = child
		}

		node.entries.last()
	}

	/// Entry with the greatest key less than or equal to `key`.
	///
	/// The nearest lower neighbor met along the search path is kept
	/// until a leaf is reached without an exact match.
	pub fn floor<Q: ?Sized>(&self, key: &Q) -> Option<&Entry<K, V>>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		let mut node = self;
		let mut candidate = None;
		loop {
			match search(node.entries(), key) {
				Ok(i) => return Some(&node.entries[i]),
				Err(i) => {
					if i > 0 {
						candidate = Some(&node.entries[i - 1])
					}

					match node.children.get(i) {
						Some(child) => node = child,
						None => return candidate,
					}
				}
			}
		}
	}

	/// Entry with the smallest key greater than or equal to `key`.
	pub fn ceiling<Q: ?Sized>(&self, key: &Q) -> Option<&Entry<K, V>>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		let mut node = self;
		let mut candidate = None;
		loop {
			match search(node.entries(), key) {
				Ok(i) => return Some(&node.entries[i]),
				Err(i) => {
					if let Some(entry) = node.entries.get(i) {
						candidate = Some(entry)
					}

					match node.children.get(i) {
						Some(child) => node = child,
						None => return candidate,
					}
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tree() -> Node<i32, &'static str> {
		let mut left = Node::leaf(Entry::new(10, "ten"));
		left.push_right(Entry::new(20, "twenty"), None);
		let right = Node::leaf(Entry::new(40, "forty"));
		Node::binary(left, Entry::new(30, "thirty"), right)
	}

	#[test]
	fn neighbors() {
		let node = tree();

		assert_eq!(node.floor(&25).map(Entry::key), Some(&20));
		assert_eq!(node.floor(&30).map(Entry::key), Some(&30));
		assert_eq!(node.floor(&35).map(Entry::key), Some(&30));
		assert_eq!(node.floor(&5), None);

		assert_eq!(node.ceiling(&25).map(Entry::key), Some(&30));
		assert_eq!(node.ceiling(&5).map(Entry::key), Some(&10));
		assert_eq!(node.ceiling(&45), None);
	}

	#[test]
	fn edges() {
		let mut node = tree();
		assert_eq!(node.first().map(Entry::key), Some(&10));
		assert_eq!(node.last().map(Entry::key), Some(&40));
		assert_eq!(node.get(&20).map(Entry::value), Some(&"twenty"));
		assert!(node.get(&21).is_none());

		if let Some(value) = node.get_mut(&40) {
			*value = "FORTY"
		}
		assert_eq!(node.get(&40).map(Entry::value), Some(&"FORTY"));
	}
}
