//! N-gram statistics over sequences of code points (or any elements).
//!
//! This crate provides:
//! - Sliding and phase-shifted non-overlapping n-gram extraction
//! - Frequency tables keyed by n-gram content
//! - Position tables indexing where each n-gram occurs
//! - Repeated-sequence detection over a range of lengths
//!
//! All operations are pure: they borrow the input, allocate the result
//! and keep no state between calls.
//!
//! ```
//! use rs_grams_core::model::{extract_text, frequencies_text};
//!
//! assert_eq!(extract_text("abcdef", 2, 2)?, ["bc", "de"]);
//! assert_eq!(frequencies_text("abcabc", 2, 0)?["ab"], 2);
//! # Ok::<(), rs_grams_core::Error>(())
//! ```

/// N-gram extraction and aggregation.
pub mod model;

/// Error type shared by all operations.
pub mod error;

pub use error::{Error, Result};
