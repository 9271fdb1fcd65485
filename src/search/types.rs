use crate::catalog::types::Cocktail;
use serde::{Deserialize, Serialize};

/// One row in a list response. Lists carry just enough to render a card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CocktailSummary {
    pub id: u32,
    pub name: String,
    pub thumbnail_url: Option<String>,
}

impl CocktailSummary {
    pub fn of(record: &Cocktail) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            thumbnail_url: record.thumbnail_url.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CocktailListResponse {
    pub query: String,
    pub total_count: usize,
    pub count: usize,
    pub results: Vec<CocktailSummary>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IngredientListResponse {
    pub query: String,
    pub count: usize,
    pub ingredients: Vec<String>,
}

/// One present ingredient slot, paired with its measure when the source
/// provided one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientLine {
    pub name: String,
    pub measure: Option<String>,
}

/// Full single-drink view: everything the detail screen renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CocktailDetail {
    pub id: u32,
    pub name: String,
    pub category: Option<String>,
    pub glass: Option<String>,
    pub alcoholic: Option<String>,
    pub thumbnail_url: Option<String>,
    pub instructions: Option<String>,
    pub ingredients: Vec<IngredientLine>,
}

impl CocktailDetail {
    /// Pairs slot N's ingredient with slot N's measure, skipping absent
    /// slots. Unlike the derived ingredient set this keeps duplicates: the
    /// detail view shows occurrences, not identity.
    pub fn of(record: &Cocktail) -> Self {
        let ingredients = record
            .slots
            .iter()
            .filter_map(|slot| {
                slot.name
                    .as_deref()
                    .filter(|name| !name.is_empty())
                    .map(|name| IngredientLine {
                        name: name.to_string(),
                        measure: slot.measure.clone(),
                    })
            })
            .collect();

        Self {
            id: record.id,
            name: record.name.clone(),
            category: record.category.clone(),
            glass: record.glass.clone(),
            alcoholic: record.alcoholic.clone(),
            thumbnail_url: record.thumbnail_url.clone(),
            instructions: record.instructions.clone(),
            ingredients,
        }
    }
}
