use smallvec::SmallVec;
use tracing::trace;

mod entry;
mod insert;
mod remove;
mod search;

pub use entry::Entry;

/// Number of entries stored inline in a node before spilling to the heap.
///
/// This is the maximum number of entries of a node with the default minimum degree.
pub const INLINE_ENTRIES: usize = 11;

/// Inline storage of the entries of a node.
pub type Entries<K, V> = SmallVec<[Entry<K, V>; INLINE_ENTRIES]>;

/// Type identified by a key.
///
/// This is implemented by [`Entry`].
pub trait Keyed {
	type Key;

	fn key(&self) -> &Self::Key;
}

/// Error returned when taking an entry out of a node would leave it with
/// less than `t - 1` entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WouldUnderflow;

/// Entry popped from the edge of a node,
/// with the child that goes along with it if the node is internal.
pub type Popped<K, V> = (Entry<K, V>, Option<Node<K, V>>);

/// B-tree node.
///
/// A node owns its children. It is a leaf iff it has no children,
/// otherwise it has exactly one more child than entries.
#[derive(Clone, Debug)]
pub struct Node<K, V> {
	entries: Entries<K, V>,
	children: Vec<Node<K, V>>,
}

impl<K, V> Node<K, V> {
	/// Create a leaf holding a single entry.
	#[inline]
	pub fn leaf(entry: Entry<K, V>) -> Node<K, V> {
		let mut entries = SmallVec::new();
		entries.push(entry);

		Node {
			entries,
			children: Vec::new(),
		}
	}

	/// Create an internal node with a single entry separating two children.
	#[inline]
	pub fn binary(left: Node<K, V>, median: Entry<K, V>, right: Node<K, V>) -> Node<K, V> {
		let mut entries = SmallVec::new();
		entries.push(median);

		Node {
			entries,
			children: vec![left, right],
		}
	}

	#[inline]
	pub fn is_leaf(&self) -> bool {
		self.children.is_empty()
	}

	/// Number of entries in the node.
	#[inline]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Checks if the node holds the maximum `2t - 1` entries.
	#[inline]
	pub fn is_full(&self, min_degree: usize) -> bool {
		self.entries.len() >= 2 * min_degree - 1
	}

	#[inline]
	pub fn entries(&self) -> &[Entry<K, V>] {
		self.entries.as_ref()
	}

	#[inline]
	pub fn children(&self) -> &[Node<K, V>] {
		self.children.as_ref()
	}

	#[inline]
	pub fn into_parts(self) -> (Entries<K, V>, Vec<Node<K, V>>) {
		(self.entries, self.children)
	}

	/// Consumes the node and returns its first child, if any.
	///
	/// Used to replace an emptied root by its only child.
	#[inline]
	pub fn into_first_child(self) -> Option<Node<K, V>> {
		self.children.into_iter().next()
	}

	/// Split a full node.
	///
	/// The node keeps the entries before the median,
	/// and returns the median entry and a new node holding the entries after the median.
	#[inline]
	pub fn split(&mut self) -> (Entry<K, V>, Node<K, V>) {
		let median_i = (self.entries.len() - 1) / 2;

		let right_entries: Entries<K, V> = self.entries.drain(median_i + 1..).collect();
		let right_children = if self.is_leaf() {
			Vec::new()
		} else {
			self.children.split_off(median_i + 1)
		};

		let median = self.entries.remove(median_i);

		let right = Node {
			entries: right_entries,
			children: right_children,
		};

		(median, right)
	}

	/// Split the child at the given index, promoting its median entry in this node.
	///
	/// This node must not be full.
	#[inline]
	pub fn split_child(&mut self, index: usize) {
		let (median, right) = self.children[index].split();
		trace!(index, left = self.children[index].len(), right = right.len(), "split child");
		self.entries.insert(index, median);
		self.children.insert(index + 1, right);
	}

	/// Append a separator and the content of `other` to this node.
	///
	/// Every key of `other` must be greater than `separator`,
	/// itself greater than every key of this node.
	#[inline]
	pub fn append(&mut self, separator: Entry<K, V>, other: Node<K, V>) {
		self.entries.push(separator);
		self.entries.extend(other.entries);
		self.children.extend(other.children);
	}

	/// Merge the child at `index`, its right sibling and the entry separating them.
	///
	/// The merged node takes the place of the child at `index`.
	#[inline]
	pub fn merge_children(&mut self, index: usize) {
		let separator = self.entries.remove(index);
		let right = self.children.remove(index + 1);
		trace!(index, left = self.children[index].len(), right = right.len(), "merge children");
		self.children[index].append(separator, right);
	}

	#[inline]
	pub fn push_left(&mut self, entry: Entry<K, V>, opt_child: Option<Node<K, V>>) {
		self.entries.insert(0, entry);
		if let Some(child) = opt_child {
			self.children.insert(0, child)
		}
	}

	#[inline]
	pub fn push_right(&mut self, entry: Entry<K, V>, opt_child: Option<Node<K, V>>) {
		self.entries.push(entry);
		if let Some(child) = opt_child {
			self.children.push(child)
		}
	}

	#[inline]
	pub fn pop_left(&mut self, min_degree: usize) -> Result<Popped<K, V>, WouldUnderflow> {
		if self.entries.len() < min_degree {
			Err(WouldUnderflow)
		} else {
			let entry = self.entries.remove(0);
			let child = if self.is_leaf() {
				None
			} else {
				Some(self.children.remove(0))
			};

			Ok((entry, child))
		}
	}

	#[inline]
	pub fn pop_right(&mut self, min_degree: usize) -> Result<Popped<K, V>, WouldUnderflow> {
		if self.entries.len() < min_degree {
			return Err(WouldUnderflow);
		}

		match self.entries.pop() {
			Some(entry) => Ok((entry, self.children.pop())),
			None => Err(WouldUnderflow),
		}
	}

	/// Try to rotate left around the entry following the child `deficient_index`,
	/// moving the first entry of its right sibling up and the separator down.
	///
	/// Returns `false` if the child has no right sibling,
	/// or if this sibling would underflow.
	#[inline]
	pub fn try_rotate_left(&mut self, deficient_index: usize, min_degree: usize) -> bool {
		let right_index = deficient_index + 1;
		if right_index >= self.children.len() {
			return false; // no right sibling
		}

		match self.children[right_index].pop_left(min_degree) {
			Ok((entry, opt_child)) => {
				let separator = std::mem::replace(&mut self.entries[deficient_index], entry);
				self.children[deficient_index].push_right(separator, opt_child);
				trace!(index = deficient_index, "rotate left");
				true
			}
			Err(WouldUnderflow) => false,
		}
	}

	/// Try to rotate right around the entry preceding the child `deficient_index`,
	/// moving the last entry of its left sibling up and the separator down.
	///
	/// Returns `false` if the child has no left sibling,
	/// or if this sibling would underflow.
	#[inline]
	pub fn try_rotate_right(&mut self, deficient_index: usize, min_degree: usize) -> bool {
		if deficient_index == 0 {
			return false; // no left sibling
		}

		let left_index = deficient_index - 1;
		match self.children[left_index].pop_right(min_degree) {
			Ok((entry, opt_child)) => {
				let separator = std::mem::replace(&mut self.entries[left_index], entry);
				self.children[deficient_index].push_left(separator, opt_child);
				trace!(index = deficient_index, "rotate right");
				true
			}
			Err(WouldUnderflow) => false,
		}
	}

	/// Make sure the child at `index` holds at least `t` entries before descending into it.
	///
	/// Borrows an entry from the left sibling, then from the right sibling,
	/// and merges the child with one of them if neither can spare one.
	/// Returns the index of the child to descend into, which changes when
	/// the child is merged into its left sibling.
	pub fn fill_child(&mut self, index: usize, min_degree: usize) -> usize {
		if self.children[index].len() >= min_degree {
			return index;
		}

		if self.try_rotate_right(index, min_degree) || self.try_rotate_left(index, min_degree) {
			return index;
		}

		if index + 1 < self.children.len() {
			self.merge_children(index);
			index
		} else {
			self.merge_children(index - 1);
			index - 1
		}
	}

	/// Validate the subtree and returns its height.
	///
	/// `min` and `max` are the keys of the entries bracketing this node in its parent.
	/// Panics if the subtree is not a valid B-tree.
	pub fn validate(&self, min_degree: usize, is_root: bool, min: Option<&K>, max: Option<&K>) -> usize
	where
		K: Ord,
	{
		if self.entries.len() > 2 * min_degree - 1 {
			panic!("node is overflowing")
		}

		if is_root {
			if self.entries.is_empty() {
				panic!("root node is empty")
			}
		} else if self.entries.len() < min_degree - 1 {
			panic!("node is underflowing")
		}

		if !self.is_leaf() && self.children.len() != self.entries.len() + 1 {
			panic!("internal node has a wrong number of children")
		}

		if !self.entries.windows(2).all(|w| w[0].key() < w[1].key()) {
			panic!("node entries are not sorted")
		}

		if let (Some(min), Some(first)) = (min, self.entries.first()) {
			if min >= first.key() {
				panic!("node entry key is less than left separator")
			}
		}

		if let (Some(max), Some(last)) = (max, self.entries.last()) {
			if max <= last.key() {
				panic!("node entry key is greater than right separator")
			}
		}

		let mut height = None;
		for (i, child) in self.children.iter().enumerate() {
			let child_min = if i > 0 { Some(self.entries[i - 1].key()) } else { min };
			let child_max = self.entries.get(i).map(Entry::key).or(max);
			let child_height = child.validate(min_degree, false, child_min, child_max);

			match height {
				Some(h) if h != child_height => panic!("leaves are not all at the same depth"),
				_ => height = Some(child_height),
			}
		}

		height.unwrap_or(0) + 1
	}

	/// Number of entries in the subtree.
	pub fn count(&self) -> usize {
		self.entries.len() + self.children.iter().map(Node::count).sum::<usize>()
	}

	/// Write the label of the node in the DOT format.
	///
	/// Requires the `dot` feature.
	#[cfg(feature = "dot")]
	#[inline]
	pub fn dot_write_label<W: std::io::Write>(&self, f: &mut W) -> std::io::Result<()>
	where
		K: std::fmt::Display,
		V: std::fmt::Display,
	{
		write!(f, "<c0> |")?;
		for (i, entry) in self.entries.iter().enumerate() {
			write!(f, "{{{}|<c{}> {}}} |", entry.key(), i + 1, entry.value())?;
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn leaf(keys: &[i32]) -> Node<i32, i32> {
		Node {
			entries: keys.iter().map(|&k| Entry::new(k, k * 10)).collect(),
			children: Vec::new(),
		}
	}

	fn keys(node: &Node<i32, i32>) -> Vec<i32> {
		node.entries().iter().map(|e| *e.key()).collect()
	}

	#[test]
	fn split_leaf() {
		let mut node = leaf(&[1, 2, 3, 4, 5]);
		assert!(node.is_full(3));

		let (median, right) = node.split();
		assert_eq!(*median.key(), 3);
		assert_eq!(keys(&node), [1, 2]);
		assert_eq!(keys(&right), [4, 5]);
	}

	#[test]
	fn split_internal() {
		let mut node = Node {
			entries: [10, 20, 30].iter().map(|&k| Entry::new(k, 0)).collect(),
			children: vec![leaf(&[1]), leaf(&[11]), leaf(&[21]), leaf(&[31])],
		};

		let (median, right) = node.split();
		assert_eq!(*median.key(), 20);
		assert_eq!(node.children().len(), 2);
		assert_eq!(right.children().len(), 2);
		assert_eq!(keys(&right.children()[0]), [21]);
	}

	#[test]
	fn split_then_merge() {
		let mut parent = Node::binary(leaf(&[1]), Entry::new(5, 50), leaf(&[6, 7, 8]));
		parent.split_child(1);
		assert_eq!(keys(&parent), [5, 7]);
		assert_eq!(parent.validate(2, true, None, None), 2);

		parent.merge_children(1);
		assert_eq!(keys(&parent), [5]);
		assert_eq!(keys(&parent.children()[1]), [6, 7, 8]);
		assert_eq!(parent.count(), 5);
	}

	#[test]
	fn rotations() {
		let mut parent = Node::binary(leaf(&[1, 2, 3]), Entry::new(5, 50), leaf(&[6]));

		assert!(!parent.try_rotate_left(1, 2));
		assert!(parent.try_rotate_right(1, 2));
		assert_eq!(keys(&parent), [3]);
		assert_eq!(keys(&parent.children()[0]), [1, 2]);
		assert_eq!(keys(&parent.children()[1]), [5, 6]);

		assert!(parent.try_rotate_left(0, 2));
		assert_eq!(keys(&parent), [5]);
		assert_eq!(keys(&parent.children()[0]), [1, 2, 3]);
		assert_eq!(keys(&parent.children()[1]), [6]);
	}

	#[test]
	fn fill_child_merges() {
		let mut parent = Node::binary(leaf(&[1]), Entry::new(5, 50), leaf(&[6]));
		assert_eq!(parent.fill_child(1, 2), 0);
		assert!(parent.is_empty());
		assert_eq!(parent.into_first_child().map(|c| keys(&c)), Some(vec![1, 5, 6]));
	}
}
