use std::collections::HashMap;
use std::hash::Hash;

use super::ngrams::iter_ngrams;
use super::text::{code_points, render_keys};
use super::window::Window;
use crate::error::Result;

/// Indexes each n-gram by where it occurs in the extraction sequence.
///
/// Indices count extracted windows (0, 1, 2, ...), not offsets into the
/// source: with `cut = 1` and `length = 3`, index 2 is the window that
/// starts at offset 6. Each list is strictly ascending.
///
/// # Errors
/// Returns [`crate::Error::InvalidLength`] if `length == 0`.
pub fn positions<T: Eq + Hash>(sequence: &[T], length: usize, cut: usize) -> Result<HashMap<&[T], Vec<usize>>> {
	let window = Window::new(length, cut)?;
	Ok(index(iter_ngrams(sequence, window)))
}

/// Same as [`positions`] over the code points of `text`, keyed by string.
///
/// # Errors
/// Returns [`crate::Error::InvalidLength`] if `length == 0`.
pub fn positions_text(text: &str, length: usize, cut: usize) -> Result<HashMap<String, Vec<usize>>> {
	let chars = code_points(text);
	Ok(render_keys(positions(&chars, length, cut)?))
}

/// Folds a stream of n-grams into a position table.
pub(crate) fn index<'a, T: Eq + Hash + 'a>(ngrams: impl Iterator<Item = &'a [T]>) -> HashMap<&'a [T], Vec<usize>> {
	let mut table: HashMap<&[T], Vec<usize>> = HashMap::new();
	for (i, ngram) in ngrams.enumerate() {
		table.entry(ngram).or_default().push(i);
	}
	table
}

#[cfg(test)]
mod tests {
	use super::*;

	fn table(entries: &[(&str, Vec<usize>)]) -> HashMap<String, Vec<usize>> {
		entries.iter().map(|(k, v)| ((*k).to_owned(), v.clone())).collect()
	}

	#[test]
	fn sliding_positions() {
		assert_eq!(
			positions_text("abcabc", 2, 0).unwrap(),
			table(&[("ab", vec![0, 3]), ("bc", vec![1, 4]), ("ca", vec![2])])
		);
		assert_eq!(positions_text("ABC", 1, 0).unwrap(), table(&[("A", vec![0]), ("B", vec![1]), ("C", vec![2])]));
	}

	#[test]
	fn indices_count_windows_not_offsets() {
		// windows: abc, abc, xyz, abc
		assert_eq!(
			positions_text("abcabcxyzabc", 3, 1).unwrap(),
			table(&[("abc", vec![0, 1, 3]), ("xyz", vec![2])])
		);
		// phase 1: bca, bcx, yza
		assert_eq!(
			positions_text("abcabcxyzabc", 3, 2).unwrap(),
			table(&[("bca", vec![0]), ("bcx", vec![1]), ("yza", vec![2])])
		);
	}

	#[test]
	fn generic_sequence() {
		let sequence = [1u32, 1, 1];
		let table = positions(&sequence, 1, 0).unwrap();
		assert_eq!(table.get(&[1][..]), Some(&vec![0, 1, 2]));
	}

	#[test]
	fn too_short_is_empty() {
		assert!(positions_text("ab", 3, 0).unwrap().is_empty());
	}
}
