use std::collections::HashMap;

/// Splits text into its Unicode scalar values.
///
/// No normalization is applied: "é" written as `e` + U+0301 stays two
/// code points.
pub(crate) fn code_points(text: &str) -> Vec<char> {
	text.chars().collect()
}

/// Renders an n-gram of code points back into an owned string key.
pub(crate) fn render(ngram: &[char]) -> String {
	ngram.iter().collect()
}

/// Re-keys a table built over code point slices by rendered strings.
///
/// Distinct slices always render to distinct strings, so no entries merge.
pub(crate) fn render_keys<V>(table: HashMap<&[char], V>) -> HashMap<String, V> {
	table.into_iter().map(|(ngram, value)| (render(ngram), value)).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn code_points_are_not_bytes() {
		let chars = code_points("ñaé");
		assert_eq!(chars, vec!['ñ', 'a', 'é']);
		assert_eq!(render(&chars[1..]), "aé");
	}

	#[test]
	fn combining_marks_are_kept_apart() {
		assert_eq!(code_points("e\u{301}").len(), 2);
	}
}
