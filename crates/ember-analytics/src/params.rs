// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Parameter collections attached to a logged event.
//!
//! [`Params`] keys entries by the closed parameter catalog and is the shape
//! call sites should normally use. [`RawParams`] keys entries by arbitrary
//! strings and exists as an escape hatch for parameters the catalog does
//! not cover yet.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use ember_analytics_core::Param;

/// A builder for event parameters keyed by the parameter catalog.
///
/// Values can be any type convertible into a JSON value; whether a value
/// survives normalization is decided at log time (see the facade docs).
/// Keys are unique and insertion order is irrelevant.
///
/// # Example
///
/// ```
/// use ember_analytics::{Param, Params};
///
/// let params = Params::new()
/// 	.insert(Param::Currency, "USD")
/// 	.insert(Param::Value, 9.99)
/// 	.insert(Param::Quantity, 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Params {
	inner: BTreeMap<Param, Value>,
}

impl Params {
	/// Creates an empty parameter collection.
	pub fn new() -> Self {
		Self {
			inner: BTreeMap::new(),
		}
	}

	/// Inserts a parameter, replacing any previous value for the same key.
	pub fn insert<V>(mut self, param: Param, value: V) -> Self
	where
		V: Into<Value>,
	{
		self.inner.insert(param, value.into());
		self
	}

	/// Merges another collection into this one.
	///
	/// If both contain the same parameter, the value from `other` wins.
	pub fn merge(mut self, other: Params) -> Self {
		for (param, value) in other.inner {
			self.inner.insert(param, value);
		}
		self
	}

	/// Returns true if no parameters have been set.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Returns the number of parameters.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Gets the value set for a parameter.
	pub fn get(&self, param: Param) -> Option<&Value> {
		self.inner.get(&param)
	}
}

impl IntoIterator for Params {
	type Item = (Param, Value);
	type IntoIter = std::collections::btree_map::IntoIter<Param, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.inner.into_iter()
	}
}

impl FromIterator<(Param, Value)> for Params {
	fn from_iter<I: IntoIterator<Item = (Param, Value)>>(iter: I) -> Self {
		Self {
			inner: iter.into_iter().collect(),
		}
	}
}

impl From<BTreeMap<Param, Value>> for Params {
	fn from(inner: BTreeMap<Param, Value>) -> Self {
		Self { inner }
	}
}

/// A builder for string-keyed event parameters.
///
/// This is the escape hatch for parameters the catalog does not cover:
/// keys bypass the catalog entirely and the whole collection is forwarded
/// to the sink verbatim, so the caller owns spelling the names and
/// choosing transport-supported value types.
///
/// # Example
///
/// ```
/// use ember_analytics::RawParams;
///
/// let params = RawParams::new()
/// 	.insert("beta_cohort", "2025-q3")
/// 	.insert("session_count", 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RawParams {
	inner: Map<String, Value>,
}

impl RawParams {
	/// Creates an empty parameter collection.
	pub fn new() -> Self {
		Self { inner: Map::new() }
	}

	/// Inserts a parameter, replacing any previous value for the same key.
	pub fn insert<K, V>(mut self, key: K, value: V) -> Self
	where
		K: Into<String>,
		V: Into<Value>,
	{
		self.inner.insert(key.into(), value.into());
		self
	}

	/// Merges another collection into this one.
	///
	/// If both contain the same key, the value from `other` wins.
	pub fn merge(mut self, other: RawParams) -> Self {
		for (key, value) in other.inner {
			self.inner.insert(key, value);
		}
		self
	}

	/// Returns true if no parameters have been set.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Returns the number of parameters.
	pub fn len(&self) -> usize {
		self.inner.len()
	}

	/// Gets the value set for a key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.inner.get(key)
	}

	/// Consumes the collection, yielding the underlying map.
	pub fn into_map(self) -> Map<String, Value> {
		self.inner
	}
}

impl From<Map<String, Value>> for RawParams {
	fn from(inner: Map<String, Value>) -> Self {
		Self { inner }
	}
}

impl From<Value> for RawParams {
	fn from(value: Value) -> Self {
		match value {
			Value::Object(inner) => Self { inner },
			_ => Self::new(),
		}
	}
}

impl FromIterator<(String, Value)> for RawParams {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		Self {
			inner: iter.into_iter().collect(),
		}
	}
}
