// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for catalog name resolution.

use thiserror::Error;

/// Errors from resolving a string back into a catalog identifier.
///
/// Forward resolution (identifier to canonical name) is total and cannot
/// fail; only the reverse direction has an error path.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
	/// The string is not a canonical event name.
	#[error("unknown event name: {0}")]
	UnknownEvent(String),

	/// The string is not a canonical parameter name.
	#[error("unknown parameter name: {0}")]
	UnknownParam(String),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn error_messages_name_the_offending_string() {
		let err = CatalogError::UnknownEvent("speeln_error".to_string());
		assert_eq!(err.to_string(), "unknown event name: speeln_error");

		let err = CatalogError::UnknownParam("currencyy".to_string());
		assert_eq!(err.to_string(), "unknown parameter name: currencyy");
	}
}
