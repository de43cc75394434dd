// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The closed catalog of reserved analytics parameter names.
//!
//! Each variant resolves to exactly one canonical parameter name string.
//! The expected value type noted on each variant (String, Int, Double, or
//! a list of item maps) is a usage contract only; the wrapped transport is
//! weakly typed and nothing here enforces it at runtime.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CatalogError;

/// A reserved analytics parameter, identified symbolically.
///
/// Canonical names must match the wrapped SDK's reserved parameter-name
/// constants byte-for-byte, including the irregular ones (`Cp1` resolves
/// to `cp1`, `AdNetworkClickId` to `aclid`). Keeping this catalog in sync
/// with the pinned SDK version is a maintenance concern, not something the
/// facade detects at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Param {
	/// Game achievement ID (String).
	AchievementId,
	/// Ad format, e.g. Banner, Interstitial, Rewarded (String).
	AdFormat,
	/// Network-specific ad click ID (String).
	AdNetworkClickId,
	/// Ad platform, e.g. MoPub, IronSource (String).
	AdPlatform,
	/// Ad source, e.g. AdColony (String).
	AdSource,
	/// Ad unit name, e.g. Banner_03 (String).
	AdUnitName,
	/// Product affiliation designating a supplier or store location (String).
	Affiliation,
	/// Campaign custom data; use varies by network (String).
	Cp1,
	/// Campaign name, slogan, or promo code (String).
	Campaign,
	/// Campaign ID, used for keyword analysis of a promotion (String).
	CampaignId,
	/// Character used in game (String).
	Character,
	/// Campaign content (String).
	Content,
	/// Type of content selected (String).
	ContentType,
	/// Coupon code used for a purchase (String).
	Coupon,
	/// High-level classification of the type of ad served (String).
	CreativeFormat,
	/// Name of a creative used in a promotional spot (String).
	CreativeName,
	/// Name of a creative slot (String).
	CreativeSlot,
	/// Currency in 3-letter ISO 4217 format (String).
	Currency,
	/// Flight or travel destination (String).
	Destination,
	/// Monetary value of a discount on a purchase (Double).
	Discount,
	/// Arrival, check-out, or rental end date, YYYY-MM-DD (String).
	EndDate,
	/// Specify 1 to extend the current session or start a new one (Int).
	ExtendSession,
	/// Flight number for travel events (String).
	FlightNumber,
	/// Group, clan, or guild ID (String).
	GroupId,
	/// Index of the item in a list (Int).
	Index,
	/// Item brand (String).
	ItemBrand,
	/// Item category (String).
	ItemCategory,
	/// Second item category (String).
	ItemCategory2,
	/// Third item category (String).
	ItemCategory3,
	/// Fourth item category (String).
	ItemCategory4,
	/// Fifth item category (String).
	ItemCategory5,
	/// Item ID (String).
	ItemId,
	/// ID of the list in which the item was presented (String).
	ItemListId,
	/// Name of the list in which the item was presented (String).
	ItemListName,
	/// Item name (String).
	ItemName,
	/// Item variant (String).
	ItemVariant,
	/// Items involved in the transaction, as a list of item maps.
	Items,
	/// Level in game (Int).
	Level,
	/// Name of a level in a game (String).
	LevelName,
	/// Google Place ID for the event, or a custom location ID (String).
	Location,
	/// Google Place ID for the item, or a custom location ID (String).
	LocationId,
	/// Targeting criteria applied to a campaign (String).
	MarketingTactic,
	/// Advertising or marketing medium, e.g. cpc, banner, email (String).
	Medium,
	/// Approach used in an operation, e.g. "facebook" for a login (String).
	Method,
	/// Number of nights staying at hotel (Int).
	NumberOfNights,
	/// Number of passengers traveling (Int).
	NumberOfPassengers,
	/// Number of rooms for travel events (Int).
	NumberOfRooms,
	/// Flight or travel origin (String).
	Origin,
	/// Chosen method of payment (String).
	PaymentType,
	/// Purchase price (Double).
	Price,
	/// ID of a product promotion (String).
	PromotionId,
	/// Name of a product promotion (String).
	PromotionName,
	/// Purchase quantity (Int).
	Quantity,
	/// Score in game (Int).
	Score,
	/// Current screen class, added to every event (String).
	ScreenClass,
	/// Current screen name, added to every event (String).
	ScreenName,
	/// The search string or keywords used (String).
	SearchTerm,
	/// Shipping cost of a transaction (Double).
	Shipping,
	/// Shipping tier selected for delivery, e.g. Ground, Air (String).
	ShippingTier,
	/// Origin of traffic, such as an ad network or partner (String).
	Source,
	/// Platform responsible for directing traffic to the property (String).
	SourcePlatform,
	/// Departure, check-in, or rental start date, YYYY-MM-DD (String).
	StartDate,
	/// Result of an operation: 1 for success, 0 for failure (Int).
	Success,
	/// Tax cost of a transaction (Double).
	Tax,
	/// Keyword for manually tagged keyword campaigns (String).
	Term,
	/// Unique identifier of a transaction (String).
	TransactionId,
	/// Travel class (String).
	TravelClass,
	/// Accumulated numeric value for the event, e.g. revenue (Int or Double).
	Value,
	/// Name of virtual currency type (String).
	VirtualCurrencyName,
}

impl Param {
	/// Every parameter in the catalog.
	pub const ALL: [Param; 69] = [
		Param::AchievementId,
		Param::AdFormat,
		Param::AdNetworkClickId,
		Param::AdPlatform,
		Param::AdSource,
		Param::AdUnitName,
		Param::Affiliation,
		Param::Cp1,
		Param::Campaign,
		Param::CampaignId,
		Param::Character,
		Param::Content,
		Param::ContentType,
		Param::Coupon,
		Param::CreativeFormat,
		Param::CreativeName,
		Param::CreativeSlot,
		Param::Currency,
		Param::Destination,
		Param::Discount,
		Param::EndDate,
		Param::ExtendSession,
		Param::FlightNumber,
		Param::GroupId,
		Param::Index,
		Param::ItemBrand,
		Param::ItemCategory,
		Param::ItemCategory2,
		Param::ItemCategory3,
		Param::ItemCategory4,
		Param::ItemCategory5,
		Param::ItemId,
		Param::ItemListId,
		Param::ItemListName,
		Param::ItemName,
		Param::ItemVariant,
		Param::Items,
		Param::Level,
		Param::LevelName,
		Param::Location,
		Param::LocationId,
		Param::MarketingTactic,
		Param::Medium,
		Param::Method,
		Param::NumberOfNights,
		Param::NumberOfPassengers,
		Param::NumberOfRooms,
		Param::Origin,
		Param::PaymentType,
		Param::Price,
		Param::PromotionId,
		Param::PromotionName,
		Param::Quantity,
		Param::Score,
		Param::ScreenClass,
		Param::ScreenName,
		Param::SearchTerm,
		Param::Shipping,
		Param::ShippingTier,
		Param::Source,
		Param::SourcePlatform,
		Param::StartDate,
		Param::Success,
		Param::Tax,
		Param::Term,
		Param::TransactionId,
		Param::TravelClass,
		Param::Value,
		Param::VirtualCurrencyName,
	];

	/// Returns the canonical parameter name.
	pub fn as_str(&self) -> &'static str {
		match self {
			Param::AchievementId => "achievement_id",
			Param::AdFormat => "ad_format",
			Param::AdNetworkClickId => "aclid",
			Param::AdPlatform => "ad_platform",
			Param::AdSource => "ad_source",
			Param::AdUnitName => "ad_unit_name",
			Param::Affiliation => "affiliation",
			Param::Cp1 => "cp1",
			Param::Campaign => "campaign",
			Param::CampaignId => "campaign_id",
			Param::Character => "character",
			Param::Content => "content",
			Param::ContentType => "content_type",
			Param::Coupon => "coupon",
			Param::CreativeFormat => "creative_format",
			Param::CreativeName => "creative_name",
			Param::CreativeSlot => "creative_slot",
			Param::Currency => "currency",
			Param::Destination => "destination",
			Param::Discount => "discount",
			Param::EndDate => "end_date",
			Param::ExtendSession => "extend_session",
			Param::FlightNumber => "flight_number",
			Param::GroupId => "group_id",
			Param::Index => "index",
			Param::ItemBrand => "item_brand",
			Param::ItemCategory => "item_category",
			Param::ItemCategory2 => "item_category2",
			Param::ItemCategory3 => "item_category3",
			Param::ItemCategory4 => "item_category4",
			Param::ItemCategory5 => "item_category5",
			Param::ItemId => "item_id",
			Param::ItemListId => "item_list_id",
			Param::ItemListName => "item_list_name",
			Param::ItemName => "item_name",
			Param::ItemVariant => "item_variant",
			Param::Items => "items",
			Param::Level => "level",
			Param::LevelName => "level_name",
			Param::Location => "location",
			Param::LocationId => "location_id",
			Param::MarketingTactic => "marketing_tactic",
			Param::Medium => "medium",
			Param::Method => "method",
			Param::NumberOfNights => "number_of_nights",
			Param::NumberOfPassengers => "number_of_passengers",
			Param::NumberOfRooms => "number_of_rooms",
			Param::Origin => "origin",
			Param::PaymentType => "payment_type",
			Param::Price => "price",
			Param::PromotionId => "promotion_id",
			Param::PromotionName => "promotion_name",
			Param::Quantity => "quantity",
			Param::Score => "score",
			Param::ScreenClass => "screen_class",
			Param::ScreenName => "screen_name",
			Param::SearchTerm => "search_term",
			Param::Shipping => "shipping",
			Param::ShippingTier => "shipping_tier",
			Param::Source => "source",
			Param::SourcePlatform => "source_platform",
			Param::StartDate => "start_date",
			Param::Success => "success",
			Param::Tax => "tax",
			Param::Term => "term",
			Param::TransactionId => "transaction_id",
			Param::TravelClass => "travel_class",
			Param::Value => "value",
			Param::VirtualCurrencyName => "virtual_currency_name",
		}
	}
}

impl std::fmt::Display for Param {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl std::str::FromStr for Param {
	type Err = CatalogError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Param::ALL
			.iter()
			.find(|param| param.as_str() == s)
			.copied()
			.ok_or_else(|| CatalogError::UnknownParam(s.to_string()))
	}
}

impl Serialize for Param {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for Param {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = String::deserialize(deserializer)?;
		s.parse().map_err(D::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn every_param_has_a_non_empty_name() {
		for param in Param::ALL {
			assert!(!param.as_str().is_empty(), "{param:?} resolves to an empty name");
		}
	}

	#[test]
	fn param_names_are_unique() {
		let mut seen = std::collections::HashSet::new();
		for param in Param::ALL {
			assert!(
				seen.insert(param.as_str()),
				"duplicate canonical name: {}",
				param.as_str()
			);
		}
	}

	#[test]
	fn param_names_satisfy_the_documented_rules() {
		for param in Param::ALL {
			let name = param.as_str();
			assert!(name.len() <= 40, "{name} exceeds 40 characters");
			assert!(
				name.starts_with(|c: char| c.is_ascii_lowercase()),
				"{name} must start with an alphabetic character"
			);
			assert!(
				name
					.chars()
					.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
				"{name} contains characters outside [a-z0-9_]"
			);
			for prefix in ["firebase_", "google_", "ga_"] {
				assert!(!name.starts_with(prefix), "{name} uses the reserved prefix {prefix}");
			}
		}
	}

	#[test]
	fn irregular_names_spot_check() {
		// These two do not follow the snake_case-of-the-identifier pattern.
		assert_eq!(Param::AdNetworkClickId.as_str(), "aclid");
		assert_eq!(Param::Cp1.as_str(), "cp1");
	}

	#[test]
	fn known_names_spot_check() {
		assert_eq!(Param::Currency.as_str(), "currency");
		assert_eq!(Param::ItemId.as_str(), "item_id");
		assert_eq!(Param::Value.as_str(), "value");
		assert_eq!(Param::NumberOfPassengers.as_str(), "number_of_passengers");
		assert_eq!(Param::ItemCategory5.as_str(), "item_category5");
	}

	#[test]
	fn parse_roundtrip_for_every_param() {
		for param in Param::ALL {
			let parsed: Param = param.as_str().parse().unwrap();
			assert_eq!(parsed, param);
		}
	}

	#[test]
	fn parse_rejects_unknown_names() {
		let err = "not_a_real_param".parse::<Param>().unwrap_err();
		assert_eq!(err, CatalogError::UnknownParam("not_a_real_param".to_string()));
	}

	#[test]
	fn serde_wire_form_is_the_canonical_name() {
		let json = serde_json::to_string(&Param::SearchTerm).unwrap();
		assert_eq!(json, r#""search_term""#);

		let parsed: Param = serde_json::from_str(r#""aclid""#).unwrap();
		assert_eq!(parsed, Param::AdNetworkClickId);
	}

	proptest! {
		#[test]
		fn as_str_is_deterministic(idx in 0..Param::ALL.len()) {
			let param = Param::ALL[idx];
			prop_assert_eq!(param.as_str(), param.as_str());
		}

		#[test]
		fn random_strings_do_not_parse(garbage in "[A-Z][a-zA-Z0-9_]{0,39}") {
			// Canonical names are all lowercase, so a leading capital can
			// never resolve.
			prop_assert!(garbage.parse::<Param>().is_err());
		}

		#[test]
		fn display_matches_as_str(idx in 0..Param::ALL.len()) {
			let param = Param::ALL[idx];
			prop_assert_eq!(param.to_string(), param.as_str());
		}
	}
}
