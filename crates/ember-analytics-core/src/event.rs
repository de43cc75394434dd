// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The closed catalog of reserved analytics event names.
//!
//! Each variant resolves to exactly one canonical event name string as
//! recognized by the Google Analytics event model. The mapping is fixed at
//! compile time; call sites cannot construct an event outside the catalog,
//! so resolution never fails.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CatalogError;

/// A reserved analytics event, identified symbolically.
///
/// Canonical names must match the wrapped SDK's reserved event-name
/// constants byte-for-byte; a mismatch here is a catalog defect, not a
/// runtime condition. All names satisfy the documented event-name rules
/// (at most 40 characters, `[a-z][a-z0-9_]*`, no `firebase_`/`google_`/
/// `ga_` prefix) by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Event {
	/// An ad was shown to the user.
	AdImpression,
	/// The user submitted their payment information.
	AddPaymentInfo,
	/// The user submitted their shipping information.
	AddShippingInfo,
	/// One or more items were added to a cart.
	AddToCart,
	/// An item was added to a wishlist.
	AddToWishlist,
	/// The app became active.
	AppOpen,
	/// The user began the checkout process.
	BeginCheckout,
	/// Referral details of a re-engagement campaign.
	CampaignDetails,
	/// Virtual currency was awarded to the user.
	EarnVirtualCurrency,
	/// A lead was generated.
	GenerateLead,
	/// The user joined a group such as a guild, team, or family.
	JoinGroup,
	/// The user finished a level.
	LevelEnd,
	/// The user started a new level.
	LevelStart,
	/// The user leveled up.
	LevelUp,
	/// The user logged in.
	Login,
	/// The user posted a score.
	PostScore,
	/// One or more items were purchased.
	Purchase,
	/// A refund was issued.
	Refund,
	/// One or more items were removed from a cart.
	RemoveFromCart,
	/// A screen was viewed.
	ScreenView,
	/// The user performed a search.
	Search,
	/// The user selected content of a certain type.
	SelectContent,
	/// An item was selected from a list.
	SelectItem,
	/// The user selected a promotion offer.
	SelectPromotion,
	/// The user shared content.
	Share,
	/// The user signed up for an account.
	SignUp,
	/// Virtual goods were sold for virtual currency.
	SpendVirtualCurrency,
	/// On-boarding started.
	TutorialBegin,
	/// On-boarding completed.
	TutorialComplete,
	/// The user unlocked an achievement.
	UnlockAchievement,
	/// The user viewed their cart.
	ViewCart,
	/// The user viewed an item.
	ViewItem,
	/// The user was shown a list of items or offerings.
	ViewItemList,
	/// A promotion was shown to the user.
	ViewPromotion,
	/// The user was shown search results.
	ViewSearchResults,
}

impl Event {
	/// Every event in the catalog.
	pub const ALL: [Event; 35] = [
		Event::AdImpression,
		Event::AddPaymentInfo,
		Event::AddShippingInfo,
		Event::AddToCart,
		Event::AddToWishlist,
		Event::AppOpen,
		Event::BeginCheckout,
		Event::CampaignDetails,
		Event::EarnVirtualCurrency,
		Event::GenerateLead,
		Event::JoinGroup,
		Event::LevelEnd,
		Event::LevelStart,
		Event::LevelUp,
		Event::Login,
		Event::PostScore,
		Event::Purchase,
		Event::Refund,
		Event::RemoveFromCart,
		Event::ScreenView,
		Event::Search,
		Event::SelectContent,
		Event::SelectItem,
		Event::SelectPromotion,
		Event::Share,
		Event::SignUp,
		Event::SpendVirtualCurrency,
		Event::TutorialBegin,
		Event::TutorialComplete,
		Event::UnlockAchievement,
		Event::ViewCart,
		Event::ViewItem,
		Event::ViewItemList,
		Event::ViewPromotion,
		Event::ViewSearchResults,
	];

	/// Returns the canonical event name.
	pub fn as_str(&self) -> &'static str {
		match self {
			Event::AdImpression => "ad_impression",
			Event::AddPaymentInfo => "add_payment_info",
			Event::AddShippingInfo => "add_shipping_info",
			Event::AddToCart => "add_to_cart",
			Event::AddToWishlist => "add_to_wishlist",
			Event::AppOpen => "app_open",
			Event::BeginCheckout => "begin_checkout",
			Event::CampaignDetails => "campaign_details",
			Event::EarnVirtualCurrency => "earn_virtual_currency",
			Event::GenerateLead => "generate_lead",
			Event::JoinGroup => "join_group",
			Event::LevelEnd => "level_end",
			Event::LevelStart => "level_start",
			Event::LevelUp => "level_up",
			Event::Login => "login",
			Event::PostScore => "post_score",
			Event::Purchase => "purchase",
			Event::Refund => "refund",
			Event::RemoveFromCart => "remove_from_cart",
			Event::ScreenView => "screen_view",
			Event::Search => "search",
			Event::SelectContent => "select_content",
			Event::SelectItem => "select_item",
			Event::SelectPromotion => "select_promotion",
			Event::Share => "share",
			Event::SignUp => "sign_up",
			Event::SpendVirtualCurrency => "spend_virtual_currency",
			Event::TutorialBegin => "tutorial_begin",
			Event::TutorialComplete => "tutorial_complete",
			Event::UnlockAchievement => "unlock_achievement",
			Event::ViewCart => "view_cart",
			Event::ViewItem => "view_item",
			Event::ViewItemList => "view_item_list",
			Event::ViewPromotion => "view_promotion",
			Event::ViewSearchResults => "view_search_results",
		}
	}
}

impl std::fmt::Display for Event {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl std::str::FromStr for Event {
	type Err = CatalogError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Event::ALL
			.iter()
			.find(|event| event.as_str() == s)
			.copied()
			.ok_or_else(|| CatalogError::UnknownEvent(s.to_string()))
	}
}

// The wire form of an event is its canonical name. A derived impl cannot
// express the mapping, so both directions delegate to the catalog.
impl Serialize for Event {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}

impl<'de> Deserialize<'de> for Event {
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
	fn every_event_has_a_non_empty_name() {
		for event in Event::ALL {
			assert!(!event.as_str().is_empty(), "{event:?} resolves to an empty name");
		}
	}

	#[test]
	fn event_names_are_unique() {
		let mut seen = std::collections::HashSet::new();
		for event in Event::ALL {
			assert!(
				seen.insert(event.as_str()),
				"duplicate canonical name: {}",
				event.as_str()
			);
		}
	}

	#[test]
	fn event_names_satisfy_the_documented_rules() {
		for event in Event::ALL {
			let name = event.as_str();
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
	fn known_names_spot_check() {
		assert_eq!(Event::Purchase.as_str(), "purchase");
		assert_eq!(Event::AppOpen.as_str(), "app_open");
		assert_eq!(Event::TutorialComplete.as_str(), "tutorial_complete");
		assert_eq!(Event::ViewSearchResults.as_str(), "view_search_results");
	}

	#[test]
	fn parse_roundtrip_for_every_event() {
		for event in Event::ALL {
			let parsed: Event = event.as_str().parse().unwrap();
			assert_eq!(parsed, event);
		}
	}

	#[test]
	fn parse_rejects_unknown_names() {
		let err = "not_a_real_event".parse::<Event>().unwrap_err();
		assert_eq!(err, CatalogError::UnknownEvent("not_a_real_event".to_string()));
	}

	#[test]
	fn serde_wire_form_is_the_canonical_name() {
		let json = serde_json::to_string(&Event::AddToCart).unwrap();
		assert_eq!(json, r#""add_to_cart""#);

		let parsed: Event = serde_json::from_str(r#""level_up""#).unwrap();
		assert_eq!(parsed, Event::LevelUp);
	}

	proptest! {
		#[test]
		fn as_str_is_deterministic(idx in 0..Event::ALL.len()) {
			let event = Event::ALL[idx];
			prop_assert_eq!(event.as_str(), event.as_str());
		}

		#[test]
		fn random_strings_do_not_parse(garbage in "[A-Z][a-zA-Z0-9_]{0,39}") {
			// Canonical names are all lowercase, so a leading capital can
			// never resolve.
			prop_assert!(garbage.parse::<Event>().is_err());
		}

		#[test]
		fn display_matches_as_str(idx in 0..Event::ALL.len()) {
			let event = Event::ALL[idx];
			prop_assert_eq!(event.to_string(), event.as_str());
		}
	}
}
