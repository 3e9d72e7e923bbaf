//! # Catalog Filter
//!
//! Narrows a [`CatalogSnapshot`] to the items matching the active filter and
//! the committed search query.
//!
//! ```text
//! (filter, query, offers, courses)  →  apply()  →  FilterOutcome
//!                                                  ├── filtered_catalog_items
//!                                                  ├── filtered_course_items
//!                                                  ├── scroll_target
//!                                                  └── has_results
//! ```
//!
//! An item is kept only when it passes the category predicate AND the text
//! predicate. A text match never rescues a category mismatch.
//!
//! Pure: inputs are borrowed and never mutated, and the outcome holds
//! references into the caller's snapshot in their original order.

use serde::Serialize;

use crate::core::catalog::{CatalogItem, CatalogSnapshot, CourseItem, FilterId, ScrollTarget};

/// Name fragments that mark a non-product item as an offer.
pub const DEFAULT_OFFER_KEYWORDS: &[&str] = &["carte", "abonnement"];

// ============================================================================
// Offer vocabulary
// ============================================================================

/// Lowercased keywords for the offers heuristic.
///
/// There is no category field on catalog items; an offer is recognized by
/// its name alone (prepaid cards and subscriptions, in the catalog's French
/// naming).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferVocabulary {
    keywords: Vec<String>,
}

impl OfferVocabulary {
    /// Builds a vocabulary from configured keywords. Blank entries are
    /// dropped; an empty result falls back to [`DEFAULT_OFFER_KEYWORDS`].
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        if keywords.is_empty() {
            return Self::default();
        }
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True if `name` contains any keyword, case-insensitively.
    pub fn matches(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.keywords.iter().any(|k| name.contains(k.as_str()))
    }
}

impl Default for OfferVocabulary {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_OFFER_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// How a catalog item reads to a shopper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Session,
    Offer,
    Product,
}

impl ItemKind {
    pub fn classify(item: &CatalogItem, vocabulary: &OfferVocabulary) -> Self {
        if item.is_product {
            ItemKind::Product
        } else if vocabulary.matches(&item.name) {
            ItemKind::Offer
        } else {
            ItemKind::Session
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ItemKind::Session => "session",
            ItemKind::Offer => "offer",
            ItemKind::Product => "shop",
        }
    }
}

// ============================================================================
// Predicates
// ============================================================================

/// Fields the text predicate looks at. Absent fields read as "".
pub trait Searchable {
    fn search_fields(&self) -> [&str; 2];
}

impl Searchable for CatalogItem {
    fn search_fields(&self) -> [&str; 2] {
        [self.name.as_str(), self.description.as_deref().unwrap_or("")]
    }
}

impl Searchable for CourseItem {
    fn search_fields(&self) -> [&str; 2] {
        [self.name.as_str(), self.location_name.as_deref().unwrap_or("")]
    }
}

/// Lowercases then trims the raw query. `None` means "no text filtering".
pub fn normalize_query(query: &str) -> Option<String> {
    let lowered = query.to_lowercase();
    let trimmed = lowered.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Case-insensitive substring test against any searchable field.
/// `needle` must already be normalized.
pub fn matches_text<T: Searchable + ?Sized>(item: &T, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(needle) => item
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle)),
    }
}

pub fn catalog_in_category(
    filter: FilterId,
    item: &CatalogItem,
    vocabulary: &OfferVocabulary,
) -> bool {
    match filter {
        FilterId::All => true,
        FilterId::Sessions => !item.is_product,
        FilterId::Offers => !item.is_product && vocabulary.matches(&item.name),
        FilterId::Shop => item.is_product,
    }
}

/// Courses never show under the shop or offers filters.
pub fn courses_in_category(filter: FilterId) -> bool {
    !matches!(filter, FilterId::Shop | FilterId::Offers)
}

// ============================================================================
// Outcome
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOutcome<'a> {
    pub filtered_catalog_items: Vec<&'a CatalogItem>,
    pub filtered_course_items: Vec<&'a CourseItem>,
    pub scroll_target: Option<ScrollTarget>,
    pub has_results: bool,
}

/// Applies the category and text predicates to both collections.
pub fn apply<'a>(
    filter: FilterId,
    query: &str,
    vocabulary: &OfferVocabulary,
    offers: &'a [CatalogItem],
    courses: &'a [CourseItem],
) -> FilterOutcome<'a> {
    let needle = normalize_query(query);
    let needle = needle.as_deref();

    let filtered_catalog_items: Vec<&CatalogItem> = offers
        .iter()
        .filter(|item| catalog_in_category(filter, item, vocabulary) && matches_text(*item, needle))
        .collect();

    let filtered_course_items: Vec<&CourseItem> = if courses_in_category(filter) {
        courses
            .iter()
            .filter(|course| matches_text(*course, needle))
            .collect()
    } else {
        Vec::new()
    };

    let has_results = !filtered_catalog_items.is_empty() || !filtered_course_items.is_empty();

    FilterOutcome {
        filtered_catalog_items,
        filtered_course_items,
        scroll_target: filter.scroll_target(),
        has_results,
    }
}

/// [`apply`] over a whole snapshot.
pub fn apply_snapshot<'a>(
    filter: FilterId,
    query: &str,
    vocabulary: &OfferVocabulary,
    snapshot: &'a CatalogSnapshot,
) -> FilterOutcome<'a> {
    apply(filter, query, vocabulary, &snapshot.offers, &snapshot.courses)
}
