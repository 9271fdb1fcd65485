use super::builder::build_catalog;
use super::types::{Catalog, Cocktail};
use crate::search::engine::ingredients_of;
use crate::source::client::CocktailClient;

/// A read-only catalog snapshot plus its precomputed ingredient index.
///
/// The composing layer builds one of these explicitly and owns it for the
/// lifetime of a session, instead of every consumer re-fetching all 26
/// letters on its own. Snapshots are independent: two sessions built at
/// different times may hold overlapping content and never observe each other.
pub struct CatalogSession {
    catalog: Catalog,
    ingredients: Vec<String>,
}

impl CatalogSession {
    /// Fetches and aggregates a fresh snapshot.
    ///
    /// An empty catalog can mean "the source had nothing" or "every request
    /// failed"; the session does not distinguish the two, the owner keeps
    /// its own loading flag if it needs to.
    pub async fn build(client: &CocktailClient) -> Self {
        let catalog = build_catalog(client).await;
        Self::from_catalog(catalog)
    }

    /// Wraps an already-aggregated catalog, deriving its ingredient index.
    pub fn from_catalog(catalog: Catalog) -> Self {
        let ingredients = ingredients_of(&catalog);
        Self {
            catalog,
            ingredients,
        }
    }

    pub fn catalog(&self) -> &[Cocktail] {
        &self.catalog
    }

    /// Distinct ingredient names across the catalog, first-occurrence order.
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }
}
