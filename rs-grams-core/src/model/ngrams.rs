use std::iter::FusedIterator;

use log::{debug, trace};

use super::text::{code_points, render};
use super::window::Window;
use crate::error::Result;

/// Lazy iterator over the n-grams of a sequence.
///
/// Each item borrows directly from the source slice, in left-to-right
/// order. Partial trailing windows are never produced.
///
/// # Invariants
/// - `next + length <= sequence.len()` whenever `remaining > 0`
#[derive(Debug, Clone)]
pub struct NGrams<'a, T> {
	sequence: &'a [T],
	length: usize,
	step: usize,
	/// Start index of the next window
	next: usize,
	remaining: usize,
}

impl<'a, T> NGrams<'a, T> {
	/// Creates the iterator for `window` over `sequence`.
	pub fn new(sequence: &'a [T], window: Window) -> Self {
		let (start, step) = window.stepping().unwrap_or((0, 1));
		Self {
			sequence,
			length: window.length(),
			step,
			next: start,
			remaining: window.count(sequence.len()),
		}
	}
}

impl<'a, T> Iterator for NGrams<'a, T> {
	type Item = &'a [T];

	fn next(&mut self) -> Option<&'a [T]> {
		if self.remaining == 0 {
			return None;
		}
		let ngram = self.sequence.get(self.next..self.next + self.length)?;
		self.remaining -= 1;
		self.next += self.step;
		Some(ngram)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(self.remaining, Some(self.remaining))
	}
}

impl<T> ExactSizeIterator for NGrams<'_, T> {}

impl<T> FusedIterator for NGrams<'_, T> {}

/// Returns a lazy iterator over the n-grams selected by `window`.
pub fn iter_ngrams<T>(sequence: &[T], window: Window) -> NGrams<'_, T> {
	let ngrams = NGrams::new(sequence, window);
	if ngrams.len() == 0 {
		debug!(
			"No n-grams: sequence of {} elements, length {}, cut {}",
			sequence.len(),
			window.length(),
			window.cut()
		);
	} else {
		trace!("Extracting {} n-grams (length {}, cut {})", ngrams.len(), window.length(), window.cut());
	}
	ngrams
}

/// Extracts the n-grams of `sequence`.
///
/// Specify `cut = 0` for sliding windows: ABC, BCD, CDE, ...
/// Specify `cut = 1` for non-overlapping windows: ABC, DEF, ...
/// Specify `cut = 2` for non-overlapping windows shifted by one: BCD, EFG, ...
///
/// A `cut` greater than `length` yields an empty result.
///
/// # Errors
/// Returns [`crate::Error::InvalidLength`] if `length == 0`.
pub fn extract<T>(sequence: &[T], length: usize, cut: usize) -> Result<Vec<&[T]>> {
	let window = Window::new(length, cut)?;
	Ok(iter_ngrams(sequence, window).collect())
}

/// Extracts the n-grams of a text, one element per code point.
///
/// # Errors
/// Returns [`crate::Error::InvalidLength`] if `length == 0`.
pub fn extract_text(text: &str, length: usize, cut: usize) -> Result<Vec<String>> {
	let chars = code_points(text);
	let window = Window::new(length, cut)?;
	Ok(iter_ngrams(&chars, window).map(render).collect())
}

/// N-grams of length 2.
#[doc(alias = "bigrams")]
pub fn digraphs<T>(sequence: &[T], cut: usize) -> Vec<&[T]> {
	iter_ngrams(sequence, Window::fixed::<2>(cut)).collect()
}

/// N-grams of length 3.
#[doc(alias = "trigrams")]
pub fn trigraphs<T>(sequence: &[T], cut: usize) -> Vec<&[T]> {
	iter_ngrams(sequence, Window::fixed::<3>(cut)).collect()
}

/// N-grams of length 4.
#[doc(alias = "quadgrams")]
pub fn tetragraphs<T>(sequence: &[T], cut: usize) -> Vec<&[T]> {
	iter_ngrams(sequence, Window::fixed::<4>(cut)).collect()
}
