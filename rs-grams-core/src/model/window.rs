use serde::Deserialize;

use crate::error::{Error, Result};

/// Extraction parameters for a single n-gram pass.
///
/// A `Window` pairs the n-gram `length` with a `cut` offset selecting
/// where windows start:
/// - `cut == 0`: every window, stride 1 (ABC, BCD, CDE, ...)
/// - `1 <= cut <= length`: non-overlapping windows, stride `length`,
///   first window at `cut - 1` (`cut = 1`: ABC, DEF, ...; `cut = 2`: BCD, EFG, ...)
/// - `cut > length`: no windows at all
///
/// # Invariants
/// - `length` is always >= 1
/// - A window never extends past the end of the sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "WindowConfig")]
pub struct Window {
	/// Number of elements per n-gram (>= 1).
	length: usize,

	/// Cut offset, see type documentation.
	cut: usize,
}

impl Window {
	/// Creates a window of the given length and cut offset.
	///
	/// # Errors
	/// Returns [`Error::InvalidLength`] if `length == 0`.
	/// An out-of-range `cut` is accepted and yields no windows.
	pub fn new(length: usize, cut: usize) -> Result<Self> {
		if length == 0 {
			return Err(Error::InvalidLength(length));
		}
		Ok(Self { length, cut })
	}

	/// Overlapping windows with stride 1 (`cut == 0`).
	///
	/// # Errors
	/// Returns [`Error::InvalidLength`] if `length == 0`.
	pub fn sliding(length: usize) -> Result<Self> {
		Self::new(length, 0)
	}

	/// Non-overlapping windows shifted by `phase` elements (`cut == phase + 1`).
	///
	/// # Errors
	/// Returns [`Error::InvalidLength`] if `length == 0`.
	pub fn tiled(length: usize, phase: usize) -> Result<Self> {
		Self::new(length, phase.saturating_add(1))
	}

	/// Window with a length fixed at compile time.
	///
	/// Used by the named-length helpers (digraphs, trigraphs, ...).
	pub const fn fixed<const N: usize>(cut: usize) -> Self {
		const { assert!(N >= 1, "n-gram length must be >= 1") };
		Self { length: N, cut }
	}

	/// Returns the n-gram length.
	pub fn length(&self) -> usize {
		self.length
	}

	/// Returns the cut offset.
	pub fn cut(&self) -> usize {
		self.cut
	}

	/// Returns `true` for overlapping extraction (`cut == 0`).
	pub fn is_sliding(&self) -> bool {
		self.cut == 0
	}

	/// Returns the first start index and the stride between windows.
	///
	/// Both extraction modes go through this single rule.
	/// Returns `None` when `cut > length` (no windows).
	pub fn stepping(&self) -> Option<(usize, usize)> {
		match self.cut {
			0 => Some((0, 1)),
			cut if cut <= self.length => Some((cut - 1, self.length)),
			_ => None,
		}
	}

	/// Number of windows produced over a sequence of `len` elements.
	pub fn count(&self, len: usize) -> usize {
		let Some((start, step)) = self.stepping() else {
			return 0;
		};
		// Last start index that still fits a full window
		match len.checked_sub(self.length) {
			Some(last) if start <= last => (last - start) / step + 1,
			_ => 0,
		}
	}
}

impl Default for Window {
	/// Single elements, every position.
	fn default() -> Self {
		Self::fixed::<1>(0)
	}
}

/// Deserializable form of a [`Window`].
///
/// Missing fields fall back to `length = 1` and `cut = 0`.
/// Converting into a `Window` validates the length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WindowConfig {
	#[serde(default = "default_length")]
	pub length: usize,
	#[serde(default)]
	pub cut: usize,
}

fn default_length() -> usize { 1 }

impl Default for WindowConfig {
	fn default() -> Self {
		Self {
			length: default_length(),
			cut: 0,
		}
	}
}

impl TryFrom<WindowConfig> for Window {
	type Error = Error;

	fn try_from(config: WindowConfig) -> Result<Self> {
		Window::new(config.length, config.cut)
	}
}
