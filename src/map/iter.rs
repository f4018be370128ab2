use crate::node::{Entries, Entry, Node};
use smallvec::SmallVec;
use std::{
	borrow::Borrow,
	iter::FusedIterator,
	ops::{Bound, RangeBounds},
};

/// Inline capacity of the traversal stacks.
///
/// A stack holds one frame per level of the tree.
const STACK_SIZE: usize = 16;

/// Ascending cursor.
///
/// Each frame `(node, offset)` points to the next entry of `node` to visit.
/// For internal nodes, the child at `offset` is being visited by the frames above.
struct Front<'a, K, V> {
	stack: SmallVec<[(&'a Node<K, V>, usize); STACK_SIZE]>,
}

impl<'a, K, V> Front<'a, K, V> {
	fn empty() -> Self {
		Front {
			stack: SmallVec::new(),
		}
	}

	/// Cursor on the first entry of the tree.
	fn first(root: Option<&'a Node<K, V>>) -> Self {
		let mut cursor = Self::empty();
		if let Some(root) = root {
			cursor.descend(root)
		}

		cursor
	}

	/// Cursor on the first entry of the tree included in the given bound.
	fn seek<Q: ?Sized>(root: Option<&'a Node<K, V>>, bound: Bound<&Q>) -> Self
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		let mut cursor = Self::empty();
		let mut node = root;
		while let Some(current) = node {
			let offset = match bound {
				Bound::Included(key) => crate::utils::search(current.entries(), key).unwrap_or_else(|i| i),
				Bound::Excluded(key) => match crate::utils::search(current.entries(), key) {
					Ok(i) => i + 1,
					Err(i) => i,
				},
				Bound::Unbounded => 0,
			};

			cursor.stack.push((current, offset));
			node = current.children().get(offset);
		}

		cursor
	}

	/// Push the leftmost path of the given subtree.
	fn descend(&mut self, mut node: &'a Node<K, V>) {
		loop {
			self.stack.push((node, 0));
			match node.children().first() {
				Some(child) => node = child,
				None => break,
			}
		}
	}

	fn peek(&mut self) -> Option<&'a Entry<K, V>> {
		loop {
			let &(node, offset) = self.stack.last()?;
			if offset < node.len() {
				return Some(&node.entries()[offset]);
			}

			self.stack.pop();
		}
	}

	fn next(&mut self) -> Option<&'a Entry<K, V>> {
		loop {
			let top = self.stack.last_mut()?;
			let (node, offset) = *top;
			if offset < node.len() {
				top.1 += 1;
				if let Some(child) = node.children().get(offset + 1) {
					self.descend(child)
				}

				return Some(&node.entries()[offset]);
			}

			self.stack.pop();
		}
	}
}

/// Descending cursor.
///
/// Each frame `(node, offset)` points right after the next entry of `node` to visit.
struct Back<'a, K, V> {
	stack: SmallVec<[(&'a Node<K, V>, usize); STACK_SIZE]>,
}

impl<'a, K, V> Back<'a, K, V> {
	fn empty() -> Self {
		Back {
			stack: SmallVec::new(),
		}
	}

	fn last(root: Option<&'a Node<K, V>>) -> Self {
		let mut cursor = Self::empty();
		if let Some(root) = root {
			cursor.descend(root)
		}

		cursor
	}

	/// Cursor on the last entry of the tree included in the given bound.
	fn seek<Q: ?Sized>(root: Option<&'a Node<K, V>>, bound: Bound<&Q>) -> Self
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		let mut cursor = Self::empty();
		let mut node = root;
		while let Some(current) = node {
			let offset = match bound {
				Bound::Included(key) => match crate::utils::search(current.entries(), key) {
					Ok(i) => i + 1,
					Err(i) => i,
				},
				Bound::Excluded(key) => crate::utils::search(current.entries(), key).unwrap_or_else(|i| i),
				Bound::Unbounded => current.len(),
			};

			cursor.stack.push((current, offset));
			node = current.children().get(offset);
		}

		cursor
	}

	/// Push the rightmost path of the given subtree.
	fn descend(&mut self, mut node: &'a Node<K, V>) {
		loop {
			self.stack.push((node, node.len()));
			match node.children().last() {
				Some(child) => node = child,
				None => break,
			}
		}
	}

	fn peek(&mut self) -> Option<&'a Entry<K, V>> {
		loop {
			let &(node, offset) = self.stack.last()?;
			if offset > 0 {
				return Some(&node.entries()[offset - 1]);
			}

			self.stack.pop();
		}
	}

	fn next(&mut self) -> Option<&'a Entry<K, V>> {
		loop {
			let top = self.stack.last_mut()?;
			let (node, offset) = *top;
			if offset > 0 {
				top.1 -= 1;
				if let Some(child) = node.children().get(offset - 1) {
					self.descend(child)
				}

				return Some(&node.entries()[offset - 1]);
			}

			self.stack.pop();
		}
	}
}

/// An iterator over the entries of a [`BTreeMap`](crate::BTreeMap), sorted by key.
///
/// This `struct` is created by the [`iter`](crate::BTreeMap::iter) method.
pub struct Iter<'a, K, V> {
	front: Front<'a, K, V>,
	back: Back<'a, K, V>,

	/// Number of entries remaining.
	len: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
	pub(crate) fn new(root: Option<&'a Node<K, V>>, len: usize) -> Self {
		Iter {
			front: Front::first(root),
			back: Back::last(root),
			len,
		}
	}
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
	type Item = (&'a K, &'a V);

	#[inline]
	fn next(&mut self) -> Option<(&'a K, &'a V)> {
		if self.len == 0 {
			None
		} else {
			self.len -= 1;
			self.front.next().map(Entry::as_pair)
		}
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.len, Some(self.len))
	}
}

impl<'a, K, V> DoubleEndedIterator for Iter<'a, K, V> {
	#[inline]
	fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
		if self.len == 0 {
			None
		} else {
			self.len -= 1;
			self.back.next().map(Entry::as_pair)
		}
	}
}

impl<'a, K, V> FusedIterator for Iter<'a, K, V> {}
impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

/// An iterator over a sub-range of the entries of a [`BTreeMap`](crate::BTreeMap).
///
/// This `struct` is created by the [`range`](crate::BTreeMap::range) method.
pub struct Range<'a, K, V> {
	front: Front<'a, K, V>,
	back: Back<'a, K, V>,

	/// Smallest key not yet visited.
	head: Option<&'a K>,

	/// Greatest key not yet visited.
	tail: Option<&'a K>,

	done: bool,
}

impl<'a, K, V> Range<'a, K, V> {
	pub(crate) fn new<T: ?Sized, R>(root: Option<&'a Node<K, V>>, range: R) -> Self
	where
		T: Ord,
		K: Borrow<T>,
		R: RangeBounds<T>,
	{
		let mut front = Front::seek(root, range.start_bound());
		let mut back = Back::seek(root, range.end_bound());

		let head = front.peek().map(Entry::key);
		let tail = back.peek().map(Entry::key);

		// an inverted range, or a range between two consecutive keys, is empty.
		let done = match (head, tail) {
			(Some(head), Some(tail)) => {
				let head: &T = head.borrow();
				let tail: &T = tail.borrow();
				head > tail
			}
			_ => true,
		};

		Range {
			front,
			back,
			head,
			tail,
			done,
		}
	}
}

impl<'a, K, V> Iterator for Range<'a, K, V> {
	type Item = (&'a K, &'a V);

	#[inline]
	fn next(&mut self) -> Option<(&'a K, &'a V)> {
		if self.done {
			return None;
		}

		let entry = self.front.next()?;
		match self.tail {
			Some(tail) if !std::ptr::eq(entry.key(), tail) => self.head = self.front.peek().map(Entry::key),
			_ => self.done = true,
		}

		Some(entry.as_pair())
	}
}

impl<'a, K, V> DoubleEndedIterator for Range<'a, K, V> {
	#[inline]
	fn next_back(&mut self) -> Option<(&'a K, &'a V)> {
		if self.done {
			return None;
		}

		let entry = self.back.next()?;
		match self.head {
			Some(head) if !std::ptr::eq(entry.key(), head) => self.tail = self.back.peek().map(Entry::key),
			_ => self.done = true,
		}

		Some(entry.as_pair())
	}
}

impl<'a, K, V> FusedIterator for Range<'a, K, V> {}

/// An iterator over the keys of a [`BTreeMap`](crate::BTreeMap), in sorted order.
pub struct Keys<'a, K, V> {
	pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
	type Item = &'a K;

	#[inline]
	fn next(&mut self) -> Option<&'a K> {
		self.inner.next().map(|(k, _)| k)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<'a, K, V> DoubleEndedIterator for Keys<'a, K, V> {
	#[inline]
	fn next_back(&mut self) -> Option<&'a K> {
		self.inner.next_back().map(|(k, _)| k)
	}
}

impl<'a, K, V> FusedIterator for Keys<'a, K, V> {}
impl<'a, K, V> ExactSizeIterator for Keys<'a, K, V> {}

/// An iterator over the values of a [`BTreeMap`](crate::BTreeMap), in order by key.
pub struct Values<'a, K, V> {
	pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
	type Item = &'a V;

	#[inline]
	fn next(&mut self) -> Option<&'a V> {
		self.inner.next().map(|(_, v)| v)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<'a, K, V> DoubleEndedIterator for Values<'a, K, V> {
	#[inline]
	fn next_back(&mut self) -> Option<&'a V> {
		self.inner.next_back().map(|(_, v)| v)
	}
}

impl<'a, K, V> FusedIterator for Values<'a, K, V> {}
impl<'a, K, V> ExactSizeIterator for Values<'a, K, V> {}

/// Owned node being visited by [`IntoIter`].
struct Frame<K, V> {
	entries: smallvec::IntoIter<[Entry<K, V>; crate::node::INLINE_ENTRIES]>,
	children: std::vec::IntoIter<Node<K, V>>,
}

impl<K, V> Frame<K, V> {
	fn new(entries: Entries<K, V>, children: Vec<Node<K, V>>) -> Self {
		Frame {
			entries: entries.into_iter(),
			children: children.into_iter(),
		}
	}
}

/// An owning iterator over the entries of a [`BTreeMap`](crate::BTreeMap), sorted by key.
///
/// Nodes are taken apart as the iteration goes.
/// Entries not consumed are dropped with the iterator.
pub struct IntoIter<K, V> {
	stack: Vec<Frame<K, V>>,
	len: usize,
}

impl<K, V> IntoIter<K, V> {
	pub(crate) fn new(root: Option<Node<K, V>>, len: usize) -> Self {
		let mut iter = IntoIter {
			stack: Vec::new(),
			len,
		};

		if let Some(root) = root {
			iter.descend(root)
		}

		iter
	}

	/// Push the leftmost path of the given subtree.
	fn descend(&mut self, mut node: Node<K, V>) {
		loop {
			let (entries, children) = node.into_parts();
			let mut frame = Frame::new(entries, children);
			let first_child = frame.children.next();
			self.stack.push(frame);

			match first_child {
				Some(child) => node = child,
				None => break,
			}
		}
	}
}

impl<K, V> Iterator for IntoIter<K, V> {
	type Item = (K, V);

	#[inline]
	fn next(&mut self) -> Option<(K, V)> {
		loop {
			let frame = self.stack.last_mut()?;
			match frame.entries.next() {
				Some(entry) => {
					if let Some(child) = frame.children.next() {
						self.descend(child)
					}

					self.len -= 1;
					return Some(entry.into_pair());
				}
				None => {
					self.stack.pop();
				}
			}
		}
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.len, Some(self.len))
	}
}

impl<K, V> FusedIterator for IntoIter<K, V> {}
impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

/// An owning iterator over the keys of a [`BTreeMap`](crate::BTreeMap).
pub struct IntoKeys<K, V> {
	pub(crate) inner: IntoIter<K, V>,
}

impl<K, V> Iterator for IntoKeys<K, V> {
	type Item = K;

	#[inline]
	fn next(&mut self) -> Option<K> {
		self.inner.next().map(|(k, _)| k)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<K, V> FusedIterator for IntoKeys<K, V> {}
impl<K, V> ExactSizeIterator for IntoKeys<K, V> {}

/// An owning iterator over the values of a [`BTreeMap`](crate::BTreeMap).
pub struct IntoValues<K, V> {
	pub(crate) inner: IntoIter<K, V>,
}

impl<K, V> Iterator for IntoValues<K, V> {
	type Item = V;

	#[inline]
	fn next(&mut self) -> Option<V> {
		self.inner.next().map(|(_, v)| v)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.inner.size_hint()
	}
}

impl<K, V> FusedIterator for IntoValues<K, V> {}
impl<K, V> ExactSizeIterator for IntoValues<K, V> {}
