use super::{Entry, Node};
use crate::utils::search;
use std::cmp::Ordering;

impl<K: Ord, V> Node<K, V> {
	/// Insert a key-value pair in a subtree whose root is not full.
	///
	/// Full children are split before descending into them,
	/// so the promoted median always finds room in this node.
	/// If the key is already present its value is replaced and the old one returned.
	pub fn insert_non_full(&mut self, key: K, value: V, min_degree: usize) -> Option<V> {
		let mut index = match search(self.entries(), &key) {
			Ok(i) => return Some(self.entries[i].set_value(value)),
			Err(i) => i,
		};

		if self.is_leaf() {
			self.entries.insert(index, Entry::new(key, value));
			return None;
		}

		if self.children[index].is_full(min_degree) {
			self.split_child(index);

			match key.cmp(self.entries[index].key()) {
				Ordering::Less => (),
				Ordering::Equal => return Some(self.entries[index].set_value(value)),
				Ordering::Greater => index += 1,
			}
		}

		self.children[index].insert_non_full(key, value, min_degree)
	}
}
