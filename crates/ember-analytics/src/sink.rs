// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The outbound seam between the facade and the wrapped SDK.
//!
//! The facade depends on exactly one downstream capability: a synchronous,
//! fire-and-forget event-logging call. Hosts implement [`EventSink`] over
//! whatever delivery layer they embed; delivery, batching, retry, and
//! consent handling all live behind the seam.

use std::sync::Mutex;

use serde_json::{Map, Value};

/// The wrapped SDK's event-logging primitive.
///
/// `name` is a canonical event name and `params` is the normalized
/// string-keyed parameter map, or `None` for a parameterless event. The
/// call must not block the caller and has no way to report failure;
/// anything that can go wrong downstream stays downstream.
pub trait EventSink: Send + Sync {
	/// Logs a single event.
	fn log_event(&self, name: &str, params: Option<&Map<String, Value>>);
}

impl<F> EventSink for F
where
	F: Fn(&str, Option<&Map<String, Value>>) + Send + Sync,
{
	fn log_event(&self, name: &str, params: Option<&Map<String, Value>>) {
		self(name, params)
	}
}

/// A sink that discards every event.
///
/// Backs the analytics-disabled state: call sites keep logging and nothing
/// leaves the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl EventSink for NoopSink {
	fn log_event(&self, _name: &str, _params: Option<&Map<String, Value>>) {}
}

/// An event as it was forwarded to a sink.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedEvent {
	/// The canonical event name.
	pub name: String,
	/// The forwarded parameter map, if any.
	pub params: Option<Map<String, Value>>,
}

/// A sink that records every forwarded event in memory.
///
/// Intended for tests and instrumentation assertions.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use ember_analytics::{Analytics, Event, RecordingSink};
///
/// let sink = Arc::new(RecordingSink::new());
/// let analytics = Analytics::new(sink.clone());
///
/// analytics.log_event(Event::AppOpen);
///
/// assert_eq!(sink.events().len(), 1);
/// assert_eq!(sink.events()[0].name, "app_open");
/// ```
#[derive(Debug, Default)]
pub struct RecordingSink {
	events: Mutex<Vec<LoggedEvent>>,
}

impl RecordingSink {
	/// Creates an empty recorder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns a snapshot of everything logged so far, in call order.
	pub fn events(&self) -> Vec<LoggedEvent> {
		self.events.lock().unwrap_or_else(|e| e.into_inner()).clone()
	}

	/// Discards everything recorded so far.
	pub fn clear(&self) {
		self.events.lock().unwrap_or_else(|e| e.into_inner()).clear();
	}
}

impl EventSink for RecordingSink {
	fn log_event(&self, name: &str, params: Option<&Map<String, Value>>) {
		let event = LoggedEvent {
			name: name.to_string(),
			params: params.cloned(),
		};
		self.events.lock().unwrap_or_else(|e| e.into_inner()).push(event);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn noop_sink_accepts_everything() {
		let sink = NoopSink;
		sink.log_event("app_open", None);

		let mut params = Map::new();
		params.insert("currency".to_string(), Value::String("USD".to_string()));
		sink.log_event("purchase", Some(&params));
	}

	#[test]
	fn recording_sink_preserves_call_order() {
		let sink = RecordingSink::new();
		sink.log_event("level_start", None);
		sink.log_event("level_end", None);

		let events = sink.events();
		assert_eq!(events.len(), 2);
		assert_eq!(events[0].name, "level_start");
		assert_eq!(events[1].name, "level_end");
	}

	#[test]
	fn recording_sink_clones_the_param_map() {
		let sink = RecordingSink::new();
		let mut params = Map::new();
		params.insert("score".to_string(), Value::Number(42.into()));
		sink.log_event("post_score", Some(&params));

		let events = sink.events();
		assert_eq!(events[0].params.as_ref().unwrap().get("score"), Some(&Value::Number(42.into())));
	}

	#[test]
	fn recording_sink_clear() {
		let sink = RecordingSink::new();
		sink.log_event("app_open", None);
		sink.clear();
		assert!(sink.events().is_empty());
	}

	#[test]
	fn closures_are_sinks() {
		let sink = |name: &str, _params: Option<&Map<String, Value>>| {
			assert_eq!(name, "share");
		};
		sink.log_event("share", None);
	}
}
