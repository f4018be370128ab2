use thiserror::Error;

/// Result type alias for fallible configuration.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when building a tree configuration.
///
/// Lookups and removals never fail: a missing key is reported as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// The minimum degree is below [`MIN_DEGREE`](crate::MIN_DEGREE).
	#[error("invalid minimum degree {0}, expected at least {min}", min = crate::MIN_DEGREE)]
	InvalidMinDegree(usize),
}
