//! The three theme validators
//!
//! Each validator is independent: it takes the parsed property list, never
//! fails on malformed input data, and returns a serializable result.

pub mod completeness;
pub mod contrast;
pub mod format;

pub use completeness::{CompletenessResult, CompletenessValidator};
pub use contrast::{ConformanceLevel, ContrastResult, ContrastValidator, ContrastViolation};
pub use format::{FormatIssue, FormatResult, FormatValidator, TokenCategory};
