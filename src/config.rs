use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest accepted minimum degree.
pub const MIN_DEGREE: usize = 2;

/// Minimum degree used by [`Config::default`].
///
/// Nodes then hold at most 11 entries, which all fit in the inline storage of a node.
pub const DEFAULT_MIN_DEGREE: usize = 6;

/// B-tree configuration.
///
/// The only parameter is the minimum degree `t`:
/// every node but the root holds between `t - 1` and `2t - 1` entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(try_from = "RawConfig"))]
pub struct Config {
	min_degree: usize,
}

impl Config {
	/// Creates a configuration with the given minimum degree.
	///
	/// A degree lower than [`MIN_DEGREE`] is raised to it.
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::Config;
	///
	/// assert_eq!(Config::new(0).min_degree(), 2);
	/// assert_eq!(Config::new(4).max_entries(), 7);
	/// ```
	#[inline]
	pub fn new(min_degree: usize) -> Config {
		Config {
			min_degree: min_degree.max(MIN_DEGREE),
		}
	}

	/// Creates a configuration with the given minimum degree,
	/// failing if it is lower than [`MIN_DEGREE`].
	///
	/// # Example
	///
	/// ```
	/// use ordered_btree::{Config, Error};
	///
	/// assert_eq!(Config::try_new(1), Err(Error::InvalidMinDegree(1)));
	/// assert!(Config::try_new(3).is_ok());
	/// ```
	#[inline]
	pub fn try_new(min_degree: usize) -> Result<Config> {
		if min_degree < MIN_DEGREE {
			Err(Error::InvalidMinDegree(min_degree))
		} else {
			Ok(Config { min_degree })
		}
	}

	#[inline]
	pub fn min_degree(&self) -> usize {
		self.min_degree
	}

	/// Maximum number of entries of a node (`2t - 1`).
	#[inline]
	pub fn max_entries(&self) -> usize {
		2 * self.min_degree - 1
	}

	/// Minimum number of entries of a non-root node (`t - 1`).
	#[inline]
	pub fn min_entries(&self) -> usize {
		self.min_degree - 1
	}
}

impl Default for Config {
	#[inline]
	fn default() -> Self {
		Config {
			min_degree: DEFAULT_MIN_DEGREE,
		}
	}
}

impl TryFrom<usize> for Config {
	type Error = Error;

	fn try_from(min_degree: usize) -> Result<Config> {
		Config::try_new(min_degree)
	}
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawConfig {
	min_degree: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
	type Error = Error;

	fn try_from(raw: RawConfig) -> Result<Config> {
		Config::try_new(raw.min_degree)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn coerce() {
		assert_eq!(Config::new(1), Config::new(MIN_DEGREE));
		assert_eq!(Config::new(7).min_degree(), 7);
		assert_eq!(Config::default().max_entries(), crate::node::INLINE_ENTRIES);
	}

	#[test]
	fn reject() {
		assert_eq!(Config::try_from(0), Err(Error::InvalidMinDegree(0)));
		assert_eq!(
			Error::InvalidMinDegree(1).to_string(),
			"invalid minimum degree 1, expected at least 2"
		);
	}

	#[cfg(feature = "serde")]
	#[test]
	fn deserialize() {
		let config: Config = serde_json::from_str(r#"{"min_degree":4}"#).unwrap();
		assert_eq!(config.min_degree(), 4);
		assert!(serde_json::from_str::<Config>(r#"{"min_degree":1}"#).is_err());
		assert_eq!(serde_json::to_string(&config).unwrap(), r#"{"min_degree":4}"#);
	}
}
