//! Property-based tests for extraction and aggregation.
//!
//! Covers:
//! 1. Window counts and contents per cut mode
//! 2. Out-of-range cuts and short sequences
//! 3. Frequency / position table consistency
//! 4. Determinism

use proptest::prelude::*;
use rs_grams_core::model::{extract, extract_text, frequencies, positions};

fn sequence() -> impl Strategy<Value = Vec<char>> {
	prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c', 'é', '字']), 0..40)
}

/// Window length with a phase inside it, so `cut = phase + 1` is in range.
fn length_and_phase() -> impl Strategy<Value = (usize, usize)> {
	(1usize..8).prop_flat_map(|length| (Just(length), 0..length))
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(200))]

	#[test]
	fn prop_sliding_windows(seq in sequence(), length in 1usize..8) {
		let ngrams = extract(&seq, length, 0).unwrap();

		// Property: max(0, N - L + 1) windows, window i == S[i..i+L]
		prop_assert_eq!(ngrams.len(), (seq.len() + 1).saturating_sub(length));
		for (i, ngram) in ngrams.iter().enumerate() {
			prop_assert_eq!(*ngram, &seq[i..i + length]);
		}
	}

	#[test]
	fn prop_tiled_windows(seq in sequence(), (length, phase) in length_and_phase()) {
		let cut = phase + 1;
		let ngrams = extract(&seq, length, cut).unwrap();

		// Property: starts at cut-1, cut-1+L, ... never past N-L
		let expected: Vec<&[char]> = (phase..)
			.step_by(length)
			.take_while(|start| start + length <= seq.len())
			.map(|start| &seq[start..start + length])
			.collect();
		prop_assert_eq!(ngrams, expected);
	}

	#[test]
	fn prop_cut_out_of_range_is_empty(seq in sequence(), length in 1usize..8, extra in 1usize..100) {
		prop_assert!(extract(&seq, length, length + extra).unwrap().is_empty());
	}

	#[test]
	fn prop_short_sequence_is_empty(seq in sequence(), extra in 1usize..5, cut in 0usize..12) {
		let length = seq.len() + extra;
		prop_assert!(extract(&seq, length, cut).unwrap().is_empty());
	}

	#[test]
	fn prop_tables_agree(seq in sequence(), length in 1usize..6, cut in 0usize..7) {
		let ngrams = extract(&seq, length, cut).unwrap();
		let counts = frequencies(&seq, length, cut).unwrap();
		let indices = positions(&seq, length, cut).unwrap();

		// Property: counts sum to the number of windows
		prop_assert_eq!(counts.values().sum::<usize>(), ngrams.len());
		for ngram in &ngrams {
			prop_assert!(counts[ngram] >= 1);
		}

		// Property: same keys, list length == count, strictly ascending
		prop_assert_eq!(counts.len(), indices.len());
		for (ngram, list) in &indices {
			prop_assert_eq!(list.len(), counts[ngram]);
			prop_assert!(list.windows(2).all(|pair| pair[0] < pair[1]));
			for i in list {
				prop_assert_eq!(ngrams[*i], *ngram);
			}
		}
	}

	#[test]
	fn prop_extraction_is_deterministic(text in "[a-d]{0,30}", length in 1usize..5, cut in 0usize..6) {
		prop_assert_eq!(extract_text(&text, length, cut).unwrap(), extract_text(&text, length, cut).unwrap());
	}
}
