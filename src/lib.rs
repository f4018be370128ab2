//! An in-memory ordered map based on a B-tree of configurable minimum degree.
//!
//! Nodes own their children directly, and the tree is kept balanced by splitting
//! full nodes on insertion and by borrowing from or merging with siblings on removal.
//!
//! ```
//! use ordered_btree::BTreeMap;
//!
//! let mut map = BTreeMap::with_min_degree(2);
//! for i in 1..=10 {
//!     map.insert(i, i.to_string());
//! }
//!
//! let keys: Vec<_> = map.range_inclusive(&3, &7).map(|(k, _)| *k).collect();
//! assert_eq!(keys, [3, 4, 5, 6, 7]);
//!
//! assert_eq!(map.remove(&5), Some("5".to_string()));
//! assert_eq!(map.ceiling(&5), Some((&6, &"6".to_string())));
//! ```
//!
//! The map is not synchronized: share it between threads behind a lock.
pub mod config;
pub mod error;
pub mod map;
pub mod node;
pub mod utils;

pub use config::{Config, DEFAULT_MIN_DEGREE, MIN_DEGREE};
pub use error::{Error, Result};
pub use map::BTreeMap;
