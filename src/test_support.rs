//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::core::catalog::{CatalogItem, CatalogSnapshot, CourseItem};
use crate::core::source::{CatalogSource, SourceError};

/// A source that always returns the same snapshot.
pub struct StaticSource(pub CatalogSnapshot);

#[async_trait]
impl CatalogSource for StaticSource {
    fn name(&self) -> String {
        "static".to_string()
    }

    async fn load(&self) -> Result<CatalogSnapshot, SourceError> {
        Ok(self.0.clone())
    }
}

/// A small studio catalog: sessions, offers, products and courses.
pub fn sample_snapshot() -> CatalogSnapshot {
    CatalogSnapshot::new(
        vec![
            CatalogItem::session("Carte 10 séances").with_description("Valable 6 mois"),
            CatalogItem::session("Abonnement mensuel").with_description("Accès illimité"),
            CatalogItem::session("Cours d'essai").with_description("Première séance yoga"),
            CatalogItem::product("Tapis de yoga").with_description("Antidérapant"),
            CatalogItem::product("Gourde"),
        ],
        vec![
            CourseItem::new("Afro Dance").with_location("Studio A"),
            CourseItem::new("Yoga flow").with_location("Studio B"),
            CourseItem::new("Cardio boost"),
        ],
    )
}
