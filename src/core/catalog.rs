//! # Catalog Data Model
//!
//! The two collections the browser narrows down, plus the filter ids and
//! scroll anchors the presentation layer exchanges with the core.
//!
//! ```text
//! CatalogSnapshot
//! ├── offers: Vec<CatalogItem>   // sessions, offers (cards/subscriptions), shop products
//! └── courses: Vec<CourseItem>   // schedulable sessions, separate collection
//! ```
//!
//! Items come from an external data source as JSON. Every text field is
//! null-safe: a missing or `null` value deserializes to an empty string
//! (or `None` for the optional fields), so malformed entries simply fail to
//! match instead of failing the whole load.

use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Deserializes a missing or `null` value as `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// ============================================================================
// Items
// ============================================================================

/// A session, offer, or shop product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_product: bool,
}

impl CatalogItem {
    /// A bookable (non-product) item: a plain session or an offer.
    pub fn session(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            is_product: false,
        }
    }

    /// A shop product.
    pub fn product(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            is_product: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A schedulable session, listed separately from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
}

impl CourseItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location_name: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location_name = Some(location.into());
        self
    }
}

/// Both collections as delivered by a catalog source. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default, deserialize_with = "null_as_default")]
    pub offers: Vec<CatalogItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub courses: Vec<CourseItem>,
}

impl CatalogSnapshot {
    pub fn new(offers: Vec<CatalogItem>, courses: Vec<CourseItem>) -> Self {
        Self { offers, courses }
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty() && self.courses.is_empty()
    }
}

// ============================================================================
// Filter ids
// ============================================================================

/// Category selection. Anything unrecognized parses to `All`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FilterId {
    #[default]
    All,
    Sessions,
    Offers,
    Shop,
}

impl FilterId {
    /// Display order in the filter bar.
    pub const ALL: [FilterId; 4] = [
        FilterId::All,
        FilterId::Sessions,
        FilterId::Offers,
        FilterId::Shop,
    ];

    /// Lenient parse: unknown ids mean "no category restriction".
    pub fn parse(id: &str) -> Self {
        match id {
            "sessions" => FilterId::Sessions,
            "offers" => FilterId::Offers,
            "shop" => FilterId::Shop,
            _ => FilterId::All,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterId::All => "all",
            FilterId::Sessions => "sessions",
            FilterId::Offers => "offers",
            FilterId::Shop => "shop",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterId::All => "All",
            FilterId::Sessions => "Sessions",
            FilterId::Offers => "Offers",
            FilterId::Shop => "Shop",
        }
    }

    /// Position in [`FilterId::ALL`].
    pub fn index(self) -> usize {
        match self {
            FilterId::All => 0,
            FilterId::Sessions => 1,
            FilterId::Offers => 2,
            FilterId::Shop => 3,
        }
    }

    /// Cycles forward through the filter bar, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Cycles backward through the filter bar, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Section the view should jump to when this filter becomes active.
    pub fn scroll_target(self) -> Option<ScrollTarget> {
        match self {
            FilterId::Sessions => Some(ScrollTarget::Sessions),
            FilterId::Offers | FilterId::Shop => Some(ScrollTarget::Offers),
            FilterId::All => None,
        }
    }
}

impl From<String> for FilterId {
    fn from(id: String) -> Self {
        FilterId::parse(&id)
    }
}

impl From<&str> for FilterId {
    fn from(id: &str) -> Self {
        FilterId::parse(id)
    }
}

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Scroll anchors
// ============================================================================

/// A page section the presentation layer can scroll to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrollTarget {
    #[serde(rename = "sessions-section")]
    Sessions,
    #[serde(rename = "offers-section")]
    Offers,
}

impl ScrollTarget {
    pub fn anchor(self) -> &'static str {
        match self {
            ScrollTarget::Sessions => "sessions-section",
            ScrollTarget::Offers => "offers-section",
        }
    }
}

impl fmt::Display for ScrollTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}
