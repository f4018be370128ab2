use super::{Entry, Node};
use crate::utils::search;
use std::borrow::Borrow;

impl<K, V> Node<K, V> {
	/// Remove the entry with the given key from the subtree.
	///
	/// Every node visited below this one holds at least `t` entries when it is entered,
	/// so that removing from it never leaves it underflowing.
	/// This node may be left empty if it is the root and its two last children were merged.
	pub fn remove<Q: ?Sized>(&mut self, key: &Q, min_degree: usize) -> Option<Entry<K, V>>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		match search(self.entries(), key) {
			Ok(i) => {
				if self.is_leaf() {
					Some(self.entries.remove(i))
				} else if self.children[i].len() >= min_degree {
					// replace with the predecessor.
					let predecessor = self.children[i].pop_last(min_degree)?;
					Some(std::mem::replace(&mut self.entries[i], predecessor))
				} else if self.children[i + 1].len() >= min_degree {
					// replace with the successor.
					let successor = self.children[i + 1].pop_first(min_degree)?;
					Some(std::mem::replace(&mut self.entries[i], successor))
				} else {
					self.merge_children(i);
					self.children[i].remove(key, min_degree)
				}
			}
			Err(i) => {
				if self.is_leaf() {
					None
				} else {
					let i = self.fill_child(i, min_degree);
					self.children[i].remove(key, min_degree)
				}
			}
		}
	}

	/// Remove the leftmost entry of the subtree.
	pub fn pop_first(&mut self, min_degree: usize) -> Option<Entry<K, V>> {
		if self.is_leaf() {
			if self.entries.is_empty() {
				None
			} else {
				Some(self.entries.remove(0))
			}
		} else {
			let i = self.fill_child(0, min_degree);
			self.children[i].pop_first(min_degree)
		}
	}

	/// Remove the rightmost entry of the subtree.
	pub fn pop_last(&mut self, min_degree: usize) -> Option<Entry<K, V>> {
		if self.is_leaf() {
			self.entries.pop()
		} else {
			let i = self.fill_child(self.children.len() - 1, min_degree);
			self.children[i].pop_last(min_degree)
		}
	}
}
