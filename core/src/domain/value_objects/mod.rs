//! Value objects representing immutable domain concepts.

pub mod submitted_code;
pub mod validation_outcome;

// Re-export commonly used types
pub use submitted_code::SubmittedCode;
pub use validation_outcome::{ValidationOutcome, VerifiedUser};
