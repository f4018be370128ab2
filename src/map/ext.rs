use super::BTreeMap;
use crate::node::Node;

/// Extended API.
///
/// This trait can be imported to expose the node structure of a [`BTreeMap`].
/// It is not needed for regular use of the map,
/// but allows inspecting how entries are laid out in the tree.
pub trait BTreeExt<K, V> {
	/// Root node of the tree, if any.
	fn root(&self) -> Option<&Node<K, V>>;

	/// Number of nodes in the tree.
	fn node_count(&self) -> usize;

	/// Validate the tree.
	///
	/// Panics if the tree is not a valid B-tree:
	/// a node overflows or underflows, entries are not sorted or misplaced relative to
	/// their parent's separators, leaves are not all at the same depth,
	/// or the stored length does not match the number of entries.
	fn validate(&self)
	where
		K: Ord;
}

impl<K, V> BTreeExt<K, V> for BTreeMap<K, V> {
	#[inline]
	fn root(&self) -> Option<&Node<K, V>> {
		self.root.as_ref()
	}

	fn node_count(&self) -> usize {
		fn count<K, V>(node: &Node<K, V>) -> usize {
			1 + node.children().iter().map(count).sum::<usize>()
		}

		self.root.as_ref().map_or(0, count)
	}

	fn validate(&self)
	where
		K: Ord,
	{
		match &self.root {
			Some(root) => {
				let height = root.validate(self.config.min_degree(), true, None, None);
				if height != self.height() {
					panic!("wrong height")
				}

				if root.count() != self.len {
					panic!("wrong length")
				}
			}
			None => {
				if self.len != 0 {
					panic!("empty tree with non-zero length")
				}
			}
		}
	}
}
