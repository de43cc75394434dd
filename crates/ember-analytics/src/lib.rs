// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Type-safe event logging facade for Ember product analytics.
//!
//! This crate fronts a weakly typed analytics sink with closed catalogs of
//! reserved event and parameter names ([`Event`], [`Param`] from
//! `ember-analytics-core`), so call sites cannot misspell a reserved name
//! and silently lose data. The facade is synchronous, stateless, and
//! fire-and-forget: it resolves identifiers, normalizes parameter
//! collections into the string-keyed shape the transport expects, and
//! forwards the result to an [`EventSink`]. Delivery, batching, retry, and
//! consent handling live behind the sink.
//!
//! # Overview
//!
//! - `client` - the [`Analytics`] facade and its logging entry points
//! - `params` - [`Params`] (catalog-keyed) and [`RawParams`] (string-keyed
//!   escape hatch) parameter collections
//! - `sink` - the [`EventSink`] seam plus [`NoopSink`] and [`RecordingSink`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ember_analytics::{Analytics, Event, Param, Params, RecordingSink};
//!
//! let sink = Arc::new(RecordingSink::new());
//! let analytics = Analytics::new(sink.clone());
//!
//! analytics.log_event_with(
//! 	Event::Purchase,
//! 	Params::new()
//! 		.insert(Param::Currency, "USD")
//! 		.insert(Param::Value, 9.99),
//! );
//!
//! let logged = sink.events();
//! assert_eq!(logged[0].name, "purchase");
//! ```

pub mod client;
pub mod params;
pub mod sink;

pub use client::Analytics;
pub use params::{Params, RawParams};
pub use sink::{EventSink, LoggedEvent, NoopSink, RecordingSink};

// Re-export the catalogs for convenience.
pub use ember_analytics_core::{CatalogError, Event, Param};
