// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The type-safe logging facade.
//!
//! [`Analytics`] sits between typed call sites and the weakly typed sink:
//! it resolves catalog identifiers to canonical names, normalizes typed
//! parameter collections into the string-keyed shape the transport
//! expects, and forwards the result. Every entry point is synchronous,
//! stateless, and fire-and-forget; nothing at this layer can fail or
//! block, so logging never disturbs the host application's control flow.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::debug;

use ember_analytics_core::Event;

use crate::params::{Params, RawParams};
use crate::sink::{EventSink, NoopSink};

/// Type-safe facade over an analytics event sink.
///
/// An event can carry up to 25 parameters. Events sharing a name should
/// share a parameter set, and parameter names follow the same rules as
/// event names (at most 40 characters, alphanumeric and underscores,
/// leading alphabetic, no `firebase_`/`google_`/`ga_` prefix). None of
/// this is checked at runtime: the catalogs satisfy the rules by
/// construction, and the raw-keyed escape hatch leaves them to the
/// caller.
///
/// The facade is cheap to clone; clones share the underlying sink.
#[derive(Clone)]
pub struct Analytics {
	sink: Arc<dyn EventSink>,
}

impl Analytics {
	/// Creates a facade forwarding to the given sink.
	pub fn new(sink: Arc<dyn EventSink>) -> Self {
		Self { sink }
	}

	/// Creates a facade that discards every event.
	///
	/// Useful when analytics collection is turned off: call sites keep
	/// logging unconditionally and nothing leaves the process.
	pub fn disabled() -> Self {
		Self::new(Arc::new(NoopSink))
	}

	/// Logs an event with no parameters.
	pub fn log_event(&self, event: Event) {
		self.sink.log_event(event.as_str(), None);
	}

	/// Logs an event with catalog-keyed parameters.
	///
	/// Keys are resolved to their canonical names. Entries whose values the
	/// transport does not accept (anything other than a string, a number,
	/// or an item list) are silently dropped; a dropped entry never fails
	/// the call or blocks the rest.
	pub fn log_event_with(&self, event: Event, params: Params) {
		let normalized = normalize(params);
		self.sink.log_event(event.as_str(), Some(&normalized));
	}

	/// Logs an event with raw string-keyed parameters.
	///
	/// The escape hatch for parameters outside the catalog. The map is
	/// forwarded verbatim: no key resolution and no value filtering.
	pub fn log_event_raw(&self, event: Event, params: RawParams) {
		let map = params.into_map();
		self.sink.log_event(event.as_str(), Some(&map));
	}

	/// Logs an event outside the event catalog, with catalog-keyed
	/// parameters.
	///
	/// The caller owns keeping `name` within the documented event-name
	/// rules; parameter normalization is identical to
	/// [`log_event_with`](Self::log_event_with).
	pub fn log_custom_with(&self, name: &str, params: Params) {
		let normalized = normalize(params);
		self.sink.log_event(name, Some(&normalized));
	}
}

/// Resolves typed keys to canonical names, dropping entries the transport
/// cannot carry.
fn normalize(params: Params) -> Map<String, Value> {
	let mut map = Map::new();
	for (param, value) in params {
		if transportable(&value) {
			map.insert(param.as_str().to_string(), value);
		} else {
			debug!(param = param.as_str(), "dropped parameter with unsupported value type");
		}
	}
	map
}

/// The transport accepts strings, numbers, and the item-list shape (an
/// array where every element is a map). Everything else is dropped.
fn transportable(value: &Value) -> bool {
	match value {
		Value::String(_) | Value::Number(_) => true,
		Value::Array(items) => items.iter().all(Value::is_object),
		Value::Null | Value::Bool(_) | Value::Object(_) => false,
	}
}
