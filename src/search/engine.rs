use crate::catalog::types::Cocktail;
use std::collections::HashSet;

/// Distinct ingredient names across the whole catalog.
///
/// Catalog order, then slot order within each record; the first occurrence
/// of a name fixes its position. Identity is case-sensitive because the
/// source performs no normalization.
pub fn ingredients_of(catalog: &[Cocktail]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for record in catalog {
        for name in record.ingredients() {
            if seen.insert(name.clone()) {
                names.push(name);
            }
        }
    }

    names
}

/// Records whose name contains `query`, case-insensitive, catalog order.
/// The empty query matches everything.
pub fn filter_by_name<'a>(catalog: &'a [Cocktail], query: &str) -> Vec<&'a Cocktail> {
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .collect()
}

/// Ingredient names containing `query`, case-insensitive, index order.
pub fn filter_ingredient_names<'a>(names: &'a [String], query: &str) -> Vec<&'a str> {
    let needle = query.to_lowercase();
    names
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .map(|name| name.as_str())
        .collect()
}

/// Records containing every selected ingredient.
///
/// Comparison is exact equality, not substring. An empty selection matches
/// every record; a selection naming an ingredient no record has matches none.
pub fn filter_by_selected<'a>(
    catalog: &'a [Cocktail],
    selected: &HashSet<String>,
) -> Vec<&'a Cocktail> {
    catalog
        .iter()
        .filter(|record| {
            let own: HashSet<String> = record.ingredients().into_iter().collect();
            selected.iter().all(|name| own.contains(name))
        })
        .collect()
}

/// Decodes the comma-joined selected-ingredients boundary encoding.
///
/// The empty string must yield an empty set, not a set containing one
/// empty string.
pub fn split_selected(joined: &str) -> HashSet<String> {
    joined
        .split(',')
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
        .collect()
}
