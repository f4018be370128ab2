use crate::{
	node::{Entry, Node},
	Config,
};
use std::{
	borrow::Borrow,
	fmt,
	hash::{Hash, Hasher},
	ops::{Bound, Index, RangeBounds},
};
use tracing::trace;

mod ext;
mod iter;
#[cfg(feature = "serde")]
mod serialize;

pub use ext::*;
pub use iter::*;

/// A map based on a B-tree of configurable minimum degree.
///
/// Every node of the tree owns its children directly:
/// splitting and merging nodes moves them around without any indirection layer.
/// Insertion splits full nodes on the way down, and removal makes sure every
/// visited node can lose an entry by borrowing from a sibling or merging with it,
/// so both operations are done in a single pass from the root.
///
/// # Basic usage
///
/// ```
/// use ordered_btree::BTreeMap;
///
/// // type inference lets us omit an explicit type signature (which
/// // would be `BTreeMap<&str, &str>` in this example).
/// let mut movie_reviews = BTreeMap::new();
///
/// // review some movies.
/// movie_reviews.insert("Office Space",       "Deals with real issues in the workplace.");
/// movie_reviews.insert("Pulp Fiction",       "Masterpiece.");
/// movie_reviews.insert("The Godfather",      "Very enjoyable.");
/// movie_reviews.insert("The Blues Brothers", "Eye lyked it a lot.");
///
/// // check for a specific one.
/// if !movie_reviews.contains_key("Les Misérables") {
///     println!("We've got {} reviews, but Les Misérables ain't one.",
///              movie_reviews.len());
/// }
///
/// // oops, this review has a lot of spelling mistakes, let's delete it.
/// movie_reviews.remove("The Blues Brothers");
///
/// // look up the values associated with some keys.
/// let to_find = ["Up!", "Office Space"];
/// for movie in &to_find {
///     match movie_reviews.get(movie) {
///        Some(review) => println!("{}: {}", movie, review),
///        None => println!("{} is unreviewed.", movie)
///     }
/// }
///
/// // Look up the value for a key (will panic if the key is not found).
/// println!("Movie review: {}", movie_reviews["Office Space"]);
///
/// // iterate over everything.
/// for (movie, review) in &movie_reviews {
///     println!("{}: \"{}\"", movie, review);
/// }
/// ```
///
/// # Minimum degree
///
/// The branching of the tree is set by its minimum degree `t`
/// (see [`Config`]): every node but the root holds between `t - 1` and `2t - 1` entries.
/// A degree lower than 2 is raised to 2.
///
/// ```
/// use ordered_btree::BTreeMap;
///
/// let mut map = BTreeMap::with_min_degree(2);
/// for i in 1..=4 {
///     map.insert(i, i * i);
/// }
///
/// assert_eq!(map.height(), 2);
/// assert_eq!(map.floor(&10), Some((&4, &16)));
/// ```
///
/// # Correctness
///
/// It is a logic error for a key to be modified in such a way that the key's ordering relative
/// to any other key, as determined by the [`Ord`] trait, changes while it is in the map.
/// This is normally only possible through [`Cell`](`std::cell::Cell`),
/// [`RefCell`](`std::cell::RefCell`), global state, I/O, or unsafe code.
#[derive(Clone)]
pub struct BTreeMap<K, V> {
	/// Root node, absent when the map is empty.
	root: Option<Node<K, V>>,

	config: Config,

	/// Number of entries in the tree.
	len: usize,
}

impl<K, V> BTreeMap<K, V> {
	/// Create a new empty B-tree with the default configuration.
	#[inline]
	pub fn new() -> BTreeMap<K, V> {
		BTreeMap::with_config(Config::default())
	}

	/// Create a new empty B-tree with the given minimum degree.
	///
	/// A degree lower than [`MIN_DEGREE`](crate::MIN_DEGREE) is raised to it.
	#[inline]
	pub fn with_min_degree(min_degree: usize) -> BTreeMap<K, V> {
		BTreeMap::with_config(Config::new(min_degree))
	}

	#[inline]
	pub fn with_config(config: Config) -> BTreeMap<K, V> {
		BTreeMap {
			root: None,
			config,
			len: 0,
		}
	}

	#[inline]
	pub fn config(&self) -> Config {
		self.config
	}

	/// Returns `true` if the map contains no elements.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let mut a = BTreeMap::new();
	/// assert!(a.is_empty());
	/// a.insert(1, "a");
	/// assert!(!a.is_empty());
	/// ```
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.root.is_none()
	}

	/// Returns the number of elements in the map.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let mut a = BTreeMap::new();
	/// assert_eq!(a.len(), 0);
	/// a.insert(1, "a");
	/// assert_eq!(a.len(), 1);
	/// ```
	#[inline]
	pub fn len(&self) -> usize {
		self.len
	}

	/// Returns the number of levels of the tree.
	///
	/// An empty map has height 0, a map with a single leaf node has height 1.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let mut map = BTreeMap::with_min_degree(2);
	/// assert_eq!(map.height(), 0);
	/// map.extend((0..3).map(|i| (i, ())));
	/// assert_eq!(map.height(), 1);
	/// map.insert(3, ());
	/// assert_eq!(map.height(), 2);
	/// ```
	#[inline]
	pub fn height(&self) -> usize {
		let mut height = 0;
		let mut node = self.root.as_ref();
		while let Some(current) = node {
			height += 1;
			node = current.children().first();
		}

		height
	}

	/// Clears the map, removing all elements.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let mut a = BTreeMap::new();
	/// a.insert(1, "a");
	/// a.clear();
	/// assert!(a.is_empty());
	/// ```
	#[inline]
	pub fn clear(&mut self) {
		trace!(len = self.len, "clear");
		self.root = None;
		self.len = 0;
	}

	/// Returns a reference to the value corresponding to the key.
	///
	/// The key may be any borrowed form of the map's key type, but the ordering
	/// on the borrowed form *must* match the ordering on the key type.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let mut map = BTreeMap::new();
	/// map.insert(1, "a");
	/// assert_eq!(map.get(&1), Some(&"a"));
	/// assert_eq!(map.get(&2), None);
	/// ```
	#[inline]
	pub fn get<Q: ?Sized>(&self, key: &Q) -> Option<&V>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		self.root.as_ref()?.get(key).map(Entry::value)
	}

	/// Returns the key-value pair corresponding to the supplied key.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let mut map = BTreeMap::new();
	/// map.insert(1, "a");
	/// assert_eq!(map.get_key_value(&1), Some((&1, &"a")));
	/// assert_eq!(map.get_key_value(&2), None);
	/// ```
	#[inline]
	pub fn get_key_value<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		self.root.as_ref()?.get(key).map(Entry::as_pair)
	}

	/// Returns a mutable reference to the value corresponding to the key.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let mut map = BTreeMap::new();
	/// map.insert(1, "a");
	/// if let Some(x) = map.get_mut(&1) {
	///     *x = "b";
	/// }
	/// assert_eq!(map[&1], "b");
	/// ```
	#[inline]
	pub fn get_mut<Q: ?Sized>(&mut self, key: &Q) -> Option<&mut V>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		self.root.as_mut()?.get_mut(key)
	}

	/// Returns `true` if the map contains a value for the specified key.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let mut map: BTreeMap<i32, &str> = BTreeMap::new();
	/// map.insert(1, "a");
	/// assert_eq!(map.contains_key(&1), true);
	/// assert_eq!(map.contains_key(&2), false);
	/// ```
	#[inline]
	pub fn contains_key<Q: ?Sized>(&self, key: &Q) -> bool
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		self.get(key).is_some()
	}

	/// Returns the first key-value pair in the map.
	/// The key in this pair is the minimum key in the map.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let mut map = BTreeMap::new();
	/// assert_eq!(map.first_key_value(), None);
	/// map.insert(1, "b");
	/// map.insert(2, "a");
	/// assert_eq!(map.first_key_value(), Some((&1, &"b")));
	/// ```
	#[inline]
	pub fn first_key_value(&self) -> Option<(&K, &V)> {
		self.root.as_ref()?.first().map(Entry::as_pair)
	}

	/// Returns the last key-value pair in the map.
	/// The key in this pair is the maximum key in the map.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let mut map = BTreeMap::new();
	/// map.insert(1, "b");
	/// map.insert(2, "a");
	/// assert_eq!(map.last_key_value(), Some((&2, &"a")));
	/// ```
	#[inline]
	pub fn last_key_value(&self) -> Option<(&K, &V)> {
		self.root.as_ref()?.last().map(Entry::as_pair)
	}

	/// Returns the key-value pair with the greatest key less than or equal to the given one.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let map: BTreeMap<i32, &str> = [(10, "a"), (20, "b"), (30, "c")].into_iter().collect();
	/// assert_eq!(map.floor(&25), Some((&20, &"b")));
	/// assert_eq!(map.floor(&30), Some((&30, &"c")));
	/// assert_eq!(map.floor(&5), None);
	/// ```
	#[inline]
	pub fn floor<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		self.root.as_ref()?.floor(key).map(Entry::as_pair)
	}

	/// Returns the key-value pair with the smallest key greater than or equal to the given one.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let map: BTreeMap<i32, &str> = [(10, "a"), (20, "b"), (30, "c")].into_iter().collect();
	/// assert_eq!(map.ceiling(&25), Some((&30, &"c")));
	/// assert_eq!(map.ceiling(&10), Some((&10, &"a")));
	/// assert_eq!(map.ceiling(&35), None);
	/// ```
	#[inline]
	pub fn ceiling<Q: ?Sized>(&self, key: &Q) -> Option<(&K, &V)>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		self.root.as_ref()?.ceiling(key).map(Entry::as_pair)
	}

	/// Gets an iterator over the entries of the map, sorted by key.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let mut map = BTreeMap::new();
	/// map.insert(3, "c");
	/// map.insert(2, "b");
	/// map.insert(1, "a");
	///
	/// for (key, value) in map.iter() {
	///     println!("{}: {}", key, value);
	/// }
	///
	/// let (first_key, first_value) = map.iter().next().unwrap();
	/// assert_eq!((*first_key, *first_value), (1, "a"));
	/// ```
	#[inline]
	pub fn iter(&self) -> Iter<K, V> {
		Iter::new(self.root.as_ref(), self.len)
	}

	/// Gets an iterator over the keys of the map, in sorted order.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let mut a = BTreeMap::new();
	/// a.insert(2, "b");
	/// a.insert(1, "a");
	///
	/// let keys: Vec<_> = a.keys().cloned().collect();
	/// assert_eq!(keys, [1, 2]);
	/// ```
	#[inline]
	pub fn keys(&self) -> Keys<K, V> {
		Keys { inner: self.iter() }
	}

	/// Gets an iterator over the values of the map, in order by key.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let mut a = BTreeMap::new();
	/// a.insert(1, "hello");
	/// a.insert(2, "goodbye");
	///
	/// let values: Vec<&str> = a.values().cloned().collect();
	/// assert_eq!(values, ["hello", "goodbye"]);
	/// ```
	#[inline]
	pub fn values(&self) -> Values<K, V> {
		Values { inner: self.iter() }
	}

	/// Constructs a double-ended iterator over a sub-range of elements in the map.
	/// The simplest way is to use the range syntax `min..max`, thus `range(min..max)` will
	/// yield elements from min (inclusive) to max (exclusive).
	/// The range may also be entered as `(Bound<T>, Bound<T>)`, so for example
	/// `range((Excluded(4), Included(10)))` will yield a left-exclusive, right-inclusive
	/// range from 4 to 10.
	///
	/// A range whose start is after its end yields nothing.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	/// use std::ops::Bound::Included;
	///
	/// let mut map = BTreeMap::new();
	/// map.insert(3, "a");
	/// map.insert(5, "b");
	/// map.insert(8, "c");
	/// for (&key, &value) in map.range((Included(&4), Included(&8))) {
	///     println!("{}: {}", key, value);
	/// }
	/// assert_eq!(Some((&5, &"b")), map.range(4..).next());
	/// ```
	#[inline]
	pub fn range<T: ?Sized, R>(&self, range: R) -> Range<K, V>
	where
		T: Ord,
		K: Borrow<T>,
		R: RangeBounds<T>,
	{
		Range::new(self.root.as_ref(), range)
	}

	/// Iterates over the entries whose key is between `from` and `to`, both included.
	///
	/// Yields nothing if `from` is greater than `to`.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let map: BTreeMap<i32, ()> = (1..=10).map(|i| (i, ())).collect();
	/// let keys: Vec<i32> = map.range_inclusive(&3, &7).map(|(k, _)| *k).collect();
	/// assert_eq!(keys, [3, 4, 5, 6, 7]);
	/// assert_eq!(map.range_inclusive(&7, &3).count(), 0);
	/// ```
	#[inline]
	pub fn range_inclusive<Q: ?Sized>(&self, from: &Q, to: &Q) -> Range<K, V>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		self.range::<Q, _>((Bound::Included(from), Bound::Included(to)))
	}

	/// Insert a key-value pair in the tree.
	///
	/// If the map already had this key present, the value is updated in place
	/// and the old value is returned. The tree structure is not modified in that case.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let mut map = BTreeMap::new();
	/// assert_eq!(map.insert(37, "a"), None);
	/// assert_eq!(map.is_empty(), false);
	///
	/// map.insert(37, "b");
	/// assert_eq!(map.insert(37, "c"), Some("b"));
	/// assert_eq!(map[&37], "c");
	/// ```
	pub fn insert(&mut self, key: K, value: V) -> Option<V>
	where
		K: Ord,
	{
		if let Some(current) = self.get_mut(&key) {
			return Some(std::mem::replace(current, value));
		}

		let min_degree = self.config.min_degree();
		let replaced = match self.root.take() {
			Some(mut root) => {
				if root.is_full(min_degree) {
					let (median, right) = root.split();
					root = Node::binary(root, median, right);
					trace!(len = self.len, "split root");
				}

				let replaced = root.insert_non_full(key, value, min_degree);
				self.root = Some(root);
				replaced
			}
			None => {
				self.root = Some(Node::leaf(Entry::new(key, value)));
				None
			}
		};

		if replaced.is_none() {
			self.len += 1;
		}

		replaced
	}

	/// Removes a key from the map, returning the value at the key if the key
	/// was previously in the map.
	///
	/// The key may be any borrowed form of the map's key type, but the ordering
	/// on the borrowed form *must* match the ordering on the key type.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let mut map = BTreeMap::new();
	/// map.insert(1, "a");
	/// assert_eq!(map.remove(&1), Some("a"));
	/// assert_eq!(map.remove(&1), None);
	/// ```
	#[inline]
	pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<V>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		self.remove_entry(key).map(|(_, value)| value)
	}

	/// Removes a key from the map, returning the stored key and value if the key
	/// was previously in the map.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let mut map = BTreeMap::new();
	/// map.insert(1, "a");
	/// assert_eq!(map.remove_entry(&1), Some((1, "a")));
	/// assert_eq!(map.remove_entry(&1), None);
	/// ```
	pub fn remove_entry<Q: ?Sized>(&mut self, key: &Q) -> Option<(K, V)>
	where
		K: Borrow<Q>,
		Q: Ord,
	{
		let min_degree = self.config.min_degree();
		let removed = self.root.as_mut()?.remove(key, min_degree);
		self.settle(removed)
	}

	/// Removes and returns the first element in the map.
	/// The key of this element is the minimum key that was in the map.
	///
	/// # Example
	///
	/// Draining elements in ascending order, while keeping a usable map each iteration.
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let mut map = BTreeMap::new();
	/// map.insert(1, "a");
	/// map.insert(2, "b");
	/// while let Some((key, _val)) = map.pop_first() {
	///     assert!(map.iter().all(|(k, _v)| *k > key));
	/// }
	/// assert!(map.is_empty());
	/// ```
	pub fn pop_first(&mut self) -> Option<(K, V)> {
		let min_degree = self.config.min_degree();
		let removed = self.root.as_mut()?.pop_first(min_degree);
		self.settle(removed)
	}

	/// Removes and returns the last element in the map.
	/// The key of this element is the maximum key that was in the map.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let mut map = BTreeMap::new();
	/// map.insert(1, "a");
	/// map.insert(2, "b");
	/// while let Some((key, _val)) = map.pop_last() {
	///     assert!(map.iter().all(|(k, _v)| *k < key));
	/// }
	/// assert!(map.is_empty());
	/// ```
	pub fn pop_last(&mut self) -> Option<(K, V)> {
		let min_degree = self.config.min_degree();
		let removed = self.root.as_mut()?.pop_last(min_degree);
		self.settle(removed)
	}

	/// Finish a removal: shrink the root if it was emptied and update the length.
	fn settle(&mut self, removed: Option<Entry<K, V>>) -> Option<(K, V)> {
		if self.root.as_ref().map_or(false, Node::is_empty) {
			self.root = self.root.take().and_then(Node::into_first_child);
			trace!(height = self.height(), "shrink root");
		}

		if removed.is_some() {
			self.len -= 1;
		}

		removed.map(Entry::into_pair)
	}

	/// Creates a consuming iterator visiting all the keys, in sorted order.
	/// The map cannot be used after calling this.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let mut a = BTreeMap::new();
	/// a.insert(2, "b");
	/// a.insert(1, "a");
	///
	/// let keys: Vec<i32> = a.into_keys().collect();
	/// assert_eq!(keys, [1, 2]);
	/// ```
	#[inline]
	pub fn into_keys(self) -> IntoKeys<K, V> {
		IntoKeys {
			inner: self.into_iter(),
		}
	}

	/// Creates a consuming iterator visiting all the values, in order by key.
	/// The map cannot be used after calling this.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::BTreeMap;
	///
	/// let mut a = BTreeMap::new();
	/// a.insert(1, "hello");
	/// a.insert(2, "goodbye");
	///
	/// let values: Vec<&str> = a.into_values().collect();
	/// assert_eq!(values, ["hello", "goodbye"]);
	/// ```
	#[inline]
	pub fn into_values(self) -> IntoValues<K, V> {
		IntoValues {
			inner: self.into_iter(),
		}
	}

	/// Write the tree in the DOT graph description language.
	///
	/// Requires the `dot` feature.
	#[cfg(feature = "dot")]
	#[inline]
	pub fn dot_write<W: std::io::Write>(&self, f: &mut W) -> std::io::Result<()>
	where
		K: std::fmt::Display,
		V: std::fmt::Display,
	{
		write!(f, "digraph tree {{\n\tnode [shape=record];\n")?;
		if let Some(root) = &self.root {
			let mut next_id = 0;
			dot_write_node(f, root, &mut next_id)?;
		}
		write!(f, "}}")
	}
}

/// Write the given node and its subtree in the DOT graph description language.
///
/// Nodes are named after their position in a depth-first traversal.
#[cfg(feature = "dot")]
fn dot_write_node<K, V, W: std::io::Write>(f: &mut W, node: &Node<K, V>, next_id: &mut usize) -> std::io::Result<usize>
where
	K: std::fmt::Display,
	V: std::fmt::Display,
{
	let id = *next_id;
	*next_id += 1;

	write!(f, "\tn{} [label=\"", id)?;
	node.dot_write_label(f)?;
	writeln!(f, "({})\"];", id)?;

	for child in node.children() {
		let child_id = dot_write_node(f, child, next_id)?;
		writeln!(f, "\tn{} -> n{}", id, child_id)?;
	}

	Ok(id)
}

impl<K: Ord, Q: ?Sized, V> Index<&Q> for BTreeMap<K, V>
where
	K: Borrow<Q>,
	Q: Ord,
{
	type Output = V;

	/// Returns a reference to the value corresponding to the supplied key.
	///
	/// # Panics
	///
	/// Panics if the key is not present in the `BTreeMap`.
	#[inline]
	fn index(&self, key: &Q) -> &V {
		self.get(key).expect("no entry found for key")
	}
}

impl<K: PartialEq, V: PartialEq> PartialEq for BTreeMap<K, V> {
	fn eq(&self, other: &BTreeMap<K, V>) -> bool {
		self.len() == other.len() && self.iter().eq(other.iter())
	}
}

impl<K: Eq, V: Eq> Eq for BTreeMap<K, V> {}

impl<K: Hash, V: Hash> Hash for BTreeMap<K, V> {
	#[inline]
	fn hash<H: Hasher>(&self, h: &mut H) {
		for (k, v) in self {
			k.hash(h);
			v.hash(h);
		}
	}
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BTreeMap<K, V> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

impl<K, V> Default for BTreeMap<K, V> {
	#[inline]
	fn default() -> Self {
		BTreeMap::new()
	}
}

impl<K: Ord, V> FromIterator<(K, V)> for BTreeMap<K, V> {
	#[inline]
	fn from_iter<T>(iter: T) -> BTreeMap<K, V>
	where
		T: IntoIterator<Item = (K, V)>,
	{
		let mut map = BTreeMap::new();
		map.extend(iter);
		map
	}
}

impl<K: Ord, V> Extend<(K, V)> for BTreeMap<K, V> {
	#[inline]
	fn extend<T>(&mut self, iter: T)
	where
		T: IntoIterator<Item = (K, V)>,
	{
		for (key, value) in iter {
			self.insert(key, value);
		}
	}
}

impl<'a, K: Ord + Copy, V: Copy> Extend<(&'a K, &'a V)> for BTreeMap<K, V> {
	#[inline]
	fn extend<T>(&mut self, iter: T)
	where
		T: IntoIterator<Item = (&'a K, &'a V)>,
	{
		self.extend(iter.into_iter().map(|(&key, &value)| (key, value)));
	}
}

impl<'a, K, V> IntoIterator for &'a BTreeMap<K, V> {
	type Item = (&'a K, &'a V);
	type IntoIter = Iter<'a, K, V>;

	#[inline]
	fn into_iter(self) -> Iter<'a, K, V> {
		self.iter()
	}
}

impl<K, V> IntoIterator for BTreeMap<K, V> {
	type Item = (K, V);
	type IntoIter = IntoIter<K, V>;

	#[inline]
	fn into_iter(self) -> IntoIter<K, V> {
		IntoIter::new(self.root, self.len)
	}
}

#[cfg(all(test, feature = "dot"))]
mod tests {
	use super::BTreeMap;

	#[test]
	fn dot() {
		let mut map = BTreeMap::with_min_degree(2);
		map.extend((1..=4).map(|i| (i, i * 10)));

		let mut out = Vec::new();
		map.dot_write(&mut out).unwrap();
		let dot = String::from_utf8(out).unwrap();

		assert!(dot.starts_with("digraph tree {"));
		assert!(dot.contains("\tn0 -> n1"));
		assert!(dot.contains("\tn0 -> n2"));
		assert!(dot.contains("{3|<c1> 30}"));
		assert!(dot.ends_with('}'));
	}
}
