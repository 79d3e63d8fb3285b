use std::collections::HashMap;
use std::hash::Hash;
use std::ops::RangeInclusive;

use log::debug;
use serde::Deserialize;

use super::frequency::count;
use super::ngrams::iter_ngrams;
use super::positions::index;
use super::text::{code_points, render_keys};
use super::window::Window;
use crate::error::{Error, Result};

/// Range of n-gram lengths scanned for repeated sequences.
///
/// Missing fields default to `minimum = 2`, `maximum = 10`, `cut = 0`.
///
/// # Invariants (checked by [`RepeatConfig::validate`])
/// - `minimum >= 1`
/// - `minimum <= maximum`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RepeatConfig {
	#[serde(default = "default_minimum")]
	pub minimum: usize,
	#[serde(default = "default_maximum")]
	pub maximum: usize,
	/// Cut offset applied at every length, see [`Window`].
	#[serde(default)]
	pub cut: usize,
}

fn default_minimum() -> usize { 2 }
fn default_maximum() -> usize { 10 }

impl Default for RepeatConfig {
	fn default() -> Self {
		Self {
			minimum: default_minimum(),
			maximum: default_maximum(),
			cut: 0,
		}
	}
}

impl RepeatConfig {
	/// Checks the length range.
	///
	/// # Errors
	/// - [`Error::InvalidLength`] if `minimum == 0`
	/// - [`Error::InvalidLengthRange`] if `minimum > maximum`
	pub fn validate(&self) -> Result<()> {
		if self.minimum == 0 {
			return Err(Error::InvalidLength(self.minimum));
		}
		if self.minimum > self.maximum {
			return Err(Error::InvalidLengthRange { minimum: self.minimum, maximum: self.maximum });
		}
		Ok(())
	}

	/// Returns the scanned lengths.
	pub fn lengths(&self) -> RangeInclusive<usize> {
		self.minimum..=self.maximum
	}
}

/// Finds every n-gram of length `minimum..=maximum` occurring more than once.
///
/// Each length is extracted with the same `cut`. N-grams of different
/// lengths never share a key, so the result holds one entry per repeated
/// n-gram with its count.
///
/// # Errors
/// Returns an error if the length range is invalid (see [`RepeatConfig::validate`]).
pub fn repeats<T: Eq + Hash>(
	sequence: &[T],
	minimum: usize,
	maximum: usize,
	cut: usize,
) -> Result<HashMap<&[T], usize>> {
	repeats_with(sequence, &RepeatConfig { minimum, maximum, cut })
}

/// Same as [`repeats`], driven by a [`RepeatConfig`].
///
/// # Errors
/// Returns an error if the length range is invalid.
pub fn repeats_with<'a, T: Eq + Hash>(sequence: &'a [T], config: &RepeatConfig) -> Result<HashMap<&'a [T], usize>> {
	config.validate()?;

	let mut table = HashMap::new();
	// Lengths beyond the sequence yield nothing
	for length in config.minimum..=config.maximum.min(sequence.len()) {
		let window = Window::new(length, config.cut)?;
		table.extend(count(iter_ngrams(sequence, window)).into_iter().filter(|(_, occurrence)| *occurrence > 1));
	}

	debug!("Found {} repeated n-grams for lengths {:?}", table.len(), config.lengths());
	Ok(table)
}

/// Finds every n-gram of length `minimum..=maximum` occurring more than once,
/// with the ascending offsets where each occurrence starts.
///
/// Extraction is always sliding (`cut = 0`), so positions are offsets into
/// `sequence`.
///
/// # Errors
/// Returns an error if the length range is invalid (see [`RepeatConfig::validate`]).
pub fn repeat_positions<T: Eq + Hash>(
	sequence: &[T],
	minimum: usize,
	maximum: usize,
) -> Result<HashMap<&[T], Vec<usize>>> {
	let config = RepeatConfig { minimum, maximum, cut: 0 };
	config.validate()?;

	let mut table = HashMap::new();
	for length in minimum..=maximum.min(sequence.len()) {
		let window = Window::sliding(length)?;
		table.extend(index(iter_ngrams(sequence, window)).into_iter().filter(|(_, offsets)| offsets.len() > 1));
	}

	debug!("Found {} repeated n-grams for lengths {:?}", table.len(), config.lengths());
	Ok(table)
}

/// Same as [`repeats`] over the code points of `text`, keyed by string.
///
/// # Errors
/// Returns an error if the length range is invalid.
pub fn repeats_text(text: &str, minimum: usize, maximum: usize, cut: usize) -> Result<HashMap<String, usize>> {
	let chars = code_points(text);
	Ok(render_keys(repeats(&chars, minimum, maximum, cut)?))
}

/// Same as [`repeat_positions`] over the code points of `text`, keyed by string.
///
/// # Errors
/// Returns an error if the length range is invalid.
pub fn repeat_positions_text(text: &str, minimum: usize, maximum: usize) -> Result<HashMap<String, Vec<usize>>> {
	let chars = code_points(text);
	Ok(render_keys(repeat_positions(&chars, minimum, maximum)?))
}
