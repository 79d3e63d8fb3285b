use thiserror::Error;

/// Errors raised by the n-gram operations.
///
/// Only the window length is validated. A `cut` outside `0..=length`
/// is not an error: it selects no windows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
	#[error("Invalid n-gram length {0}: must be >= 1")]
	InvalidLength(usize),

	#[error("Invalid n-gram length range {minimum}..={maximum}")]
	InvalidLengthRange { minimum: usize, maximum: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
