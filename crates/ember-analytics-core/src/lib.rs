// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Catalog types for Ember's type-safe analytics event logging.
//!
//! This crate holds the two closed catalogs of reserved analytics names in
//! the Google Analytics event model: events ([`Event`]) and parameters
//! ([`Param`]). Both are compile-time-fixed bidirectional mappings between
//! a symbolic identifier and the canonical string the wrapped SDK expects,
//! so call sites cannot misspell a reserved name and silently lose data.
//!
//! # Overview
//!
//! - `event` - the 35 reserved event identifiers and their canonical names
//! - `param` - the 69 reserved parameter identifiers and their canonical names
//! - `error` - the error type for reverse (string to identifier) resolution
//!
//! # Example
//!
//! ```
//! use ember_analytics_core::{Event, Param};
//!
//! assert_eq!(Event::Purchase.as_str(), "purchase");
//! assert_eq!(Param::Currency.as_str(), "currency");
//!
//! // Reverse resolution fails outside the closed set.
//! assert!("purchsae".parse::<Event>().is_err());
//! ```

pub mod error;
pub mod event;
pub mod param;

pub use error::{CatalogError, Result};
pub use event::Event;
pub use param::Param;
