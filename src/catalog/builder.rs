use super::types::{Catalog, Cocktail};
use crate::source::client::CocktailClient;

/// Aggregates the full catalog by listing every letter 'a' through 'z'.
///
/// Letters are queried strictly sequentially so the aggregate keeps letter
/// order, then within-letter source order. Failure isolation is per letter:
/// a request that errors out is logged and contributes zero records, and a
/// malformed item inside an otherwise good response is skipped without
/// dropping its siblings. The builder itself never fails; callers see an
/// empty catalog when nothing could be gathered.
pub async fn build_catalog(client: &CocktailClient) -> Catalog {
    let mut catalog = Catalog::new();

    for letter in 'a'..='z' {
        match client.list_by_letter(letter).await {
            Ok(drinks) => {
                for raw in &drinks {
                    match Cocktail::parse(raw) {
                        Ok(record) => catalog.push(record),
                        Err(e) => {
                            tracing::warn!("Skipping malformed item under '{}': {}", letter, e);
                        }
                    }
                }
            }
            Err(e) => {
                tracing::warn!("Letter '{}' failed, continuing with the rest: {}", letter, e);
            }
        }
    }

    tracing::debug!("Catalog built with {} records", catalog.len());
    catalog
}
