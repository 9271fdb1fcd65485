//! Catalog Data Types
//!
//! The normalized cocktail record derived from the source's flat field layout,
//! and the ordered catalog collection built from it.

use crate::source::types::{RawDrink, SourceError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One positional (ingredient, measure) pair.
///
/// A slot is "present" iff its name is non-null and non-empty. Measures can
/// appear on slots with no ingredient in malformed source data; ingredient
/// presence is authoritative.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientSlot {
    pub name: Option<String>,
    pub measure: Option<String>,
}

/// A normalized drink record.
///
/// Constructed once per raw API item and immutable thereafter. Null and
/// absent source fields are both `None`; empty strings survive as `Some("")`
/// so the record round-trips what the source actually sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cocktail {
    /// Source-assigned identity. Unique per letter bucket; the catalog does
    /// not deduplicate across letters.
    pub id: u32,
    pub name: String,
    pub category: Option<String>,
    pub instructions: Option<String>,
    pub thumbnail_url: Option<String>,
    pub glass: Option<String>,
    pub alcoholic: Option<String>,
    /// The 15 ingredient slots in slot order. Gaps are legal: slot 3 can be
    /// empty while slot 4 is filled.
    pub slots: Vec<IngredientSlot>,
}

/// Ordered, non-deduplicated collection of records for one session.
pub type Catalog = Vec<Cocktail>;

impl Cocktail {
    /// Parses one raw API item into a record.
    ///
    /// The id is required and must be numeric; everything else is copied
    /// as-is. An empty name is accepted, the source contract does not
    /// enforce more.
    pub fn parse(raw: &RawDrink) -> Result<Self, SourceError> {
        let id_field = raw
            .id_drink
            .as_deref()
            .ok_or_else(|| SourceError::MalformedRecord("missing idDrink".to_string()))?;
        let id = id_field.trim().parse::<u32>().map_err(|_| {
            SourceError::MalformedRecord(format!("non-numeric idDrink: {:?}", id_field))
        })?;

        let slots = raw
            .ingredient_slots()
            .into_iter()
            .map(|(name, measure)| IngredientSlot {
                name: name.clone(),
                measure: measure.clone(),
            })
            .collect();

        Ok(Self {
            id,
            name: raw.str_drink.clone().unwrap_or_default(),
            category: raw.str_category.clone(),
            instructions: raw.str_instructions.clone(),
            thumbnail_url: raw.str_drink_thumb.clone(),
            glass: raw.str_glass.clone(),
            alcoholic: raw.str_alcoholic.clone(),
            slots,
        })
    }

    /// The distinct ingredient names of this record in slot order.
    ///
    /// Empty and absent slots are skipped rather than assuming a contiguous
    /// prefix. Repeated names keep their first position and later
    /// occurrences are dropped.
    pub fn ingredients(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();

        for slot in &self.slots {
            if let Some(name) = slot.name.as_deref() {
                if !name.is_empty() && seen.insert(name.to_string()) {
                    names.push(name.to_string());
                }
            }
        }

        names
    }
}
