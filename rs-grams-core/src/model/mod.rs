//! Top-level module for n-gram extraction and statistics.
//!
//! - Window parameters and their configuration form (`Window`, `WindowConfig`)
//! - Lazy extraction (`NGrams`) and its collecting helpers
//! - Frequency and position aggregation
//! - Multi-length repeat detection (`RepeatConfig`)

/// Window length and cut offset, validated.
///
/// Defines the single stepping rule used by both extraction modes.
pub mod window;

/// N-gram extraction: lazy iterator, collecting helpers and named lengths.
pub mod ngrams;

/// Occurrence counts per n-gram.
pub mod frequency;

/// Occurrence indices per n-gram.
pub mod positions;

/// Repeated n-grams over a range of lengths.
pub mod repeats;

/// Code point conversion helpers.
///
/// Not exposed
mod text;

pub use frequency::{frequencies, frequencies_text, most_common};
pub use ngrams::{digraphs, extract, extract_text, iter_ngrams, tetragraphs, trigraphs, NGrams};
pub use positions::{positions, positions_text};
pub use repeats::{repeat_positions, repeat_positions_text, repeats, repeats_text, repeats_with, RepeatConfig};
pub use window::{Window, WindowConfig};
