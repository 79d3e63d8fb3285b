use std::collections::HashMap;
use std::hash::Hash;

use super::ngrams::iter_ngrams;
use super::text::{code_points, render_keys};
use super::window::Window;
use crate::error::Result;

/// Counts occurrences of each n-gram, keyed by content.
///
/// N-grams never encountered have no entry. The counts sum to the number
/// of extracted windows.
///
/// # Errors
/// Returns [`crate::Error::InvalidLength`] if `length == 0`.
pub fn frequencies<T: Eq + Hash>(sequence: &[T], length: usize, cut: usize) -> Result<HashMap<&[T], usize>> {
	let window = Window::new(length, cut)?;
	Ok(count(iter_ngrams(sequence, window)))
}

/// Same as [`frequencies`] over the code points of `text`, keyed by string.
///
/// # Errors
/// Returns [`crate::Error::InvalidLength`] if `length == 0`.
pub fn frequencies_text(text: &str, length: usize, cut: usize) -> Result<HashMap<String, usize>> {
	let chars = code_points(text);
	Ok(render_keys(frequencies(&chars, length, cut)?))
}

/// Folds a stream of n-grams into a frequency table.
pub(crate) fn count<'a, T: Eq + Hash + 'a>(ngrams: impl Iterator<Item = &'a [T]>) -> HashMap<&'a [T], usize> {
	let mut table = HashMap::new();
	for ngram in ngrams {
		*table.entry(ngram).or_insert(0) += 1;
	}
	table
}

/// Returns the `k` most frequent entries of a frequency table.
///
/// Sorted by descending count, ties broken by ascending key so the
/// output is deterministic.
pub fn most_common<K: Ord>(table: &HashMap<K, usize>, k: usize) -> Vec<(&K, usize)> {
	let mut entries: Vec<(&K, usize)> = table.iter().map(|(key, occurrence)| (key, *occurrence)).collect();
	entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
	entries.truncate(k);
	entries
}
