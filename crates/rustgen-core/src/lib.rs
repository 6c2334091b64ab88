//! # rustgen-core - Core Domain Types
//!
//! Foundation crate for rustgen. Provides the error type, logging setup,
//! submission domain types and the JSON validation gate.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, serde_json, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`GenerationOptions`] - User-selected options (tests, root type name)
//! - [`GenerationRequest`] - One submission's body and options snapshot
//! - [`GenerationOutcome`] - Success body, validation failure or transport failure
//! - [`SubmissionId`], [`SubmissionPhase`] - Submission identity and lifecycle
//!
//! ### Validation (`validation`)
//! - [`validate()`] - Synchronous JSON well-formedness check
//! - [`ValidationError`] - Parser diagnostic with position
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context

pub mod error;
pub mod logging;
pub mod types;
pub mod validation;

/// Prelude for common imports used throughout all rustgen crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use types::{
    GenerationOptions, GenerationOutcome, GenerationRequest, SubmissionId, SubmissionPhase,
    TransportFailure, DEFAULT_ROOT_NAME, FAILURE_DETAIL_LIMIT,
};
pub use validation::{validate, ValidationError};
