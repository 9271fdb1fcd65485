//! Remote Source Wire Types
//!
//! Mirrors the JSON layout emitted by the cocktail API. The source uses a flat,
//! fixed-arity scheme: every response is a `DrinkList` wrapper whose `drinks`
//! field is null when there are no matches, and every drink carries exactly 15
//! positional ingredient/measure string slots, most of them null.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while talking to, or decoding from, the remote source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network-level failure: DNS, connect, or per-request timeout.
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),

    /// The source answered with a non-success HTTP status.
    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    /// The response body did not match the `DrinkList` wrapper shape.
    #[error("undecodable response body: {0}")]
    Decode(#[source] reqwest::Error),

    /// A raw item cannot be turned into a cocktail record
    /// (missing or non-numeric id).
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// All retry attempts were consumed without a response.
    #[error("retry attempts exhausted")]
    RetriesExhausted,
}

/// The wrapper object every endpoint returns.
///
/// A null or absent `drinks` field means "no matches" and is never an error.
/// Individual entries may themselves be null in malformed source data, so the
/// sequence is modelled as record-or-absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrinkList {
    #[serde(default)]
    pub drinks: Option<Vec<Option<RawDrink>>>,
}

/// One drink exactly as the source emits it.
///
/// All fields are optional strings; null and absent are preserved distinctly
/// from empty string. Ingredient slots are positional with no contiguity
/// guarantee: slot 3 can be null while slot 4 is filled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDrink {
    #[serde(rename = "idDrink")]
    pub id_drink: Option<String>,
    #[serde(rename = "strDrink")]
    pub str_drink: Option<String>,
    #[serde(rename = "strCategory")]
    pub str_category: Option<String>,
    #[serde(rename = "strInstructions")]
    pub str_instructions: Option<String>,
    #[serde(rename = "strDrinkThumb")]
    pub str_drink_thumb: Option<String>,
    #[serde(rename = "strGlass")]
    pub str_glass: Option<String>,
    #[serde(rename = "strAlcoholic")]
    pub str_alcoholic: Option<String>,

    #[serde(rename = "strIngredient1")]
    pub str_ingredient1: Option<String>,
    #[serde(rename = "strIngredient2")]
    pub str_ingredient2: Option<String>,
    #[serde(rename = "strIngredient3")]
    pub str_ingredient3: Option<String>,
    #[serde(rename = "strIngredient4")]
    pub str_ingredient4: Option<String>,
    #[serde(rename = "strIngredient5")]
    pub str_ingredient5: Option<String>,
    #[serde(rename = "strIngredient6")]
    pub str_ingredient6: Option<String>,
    #[serde(rename = "strIngredient7")]
    pub str_ingredient7: Option<String>,
    #[serde(rename = "strIngredient8")]
    pub str_ingredient8: Option<String>,
    #[serde(rename = "strIngredient9")]
    pub str_ingredient9: Option<String>,
    #[serde(rename = "strIngredient10")]
    pub str_ingredient10: Option<String>,
    #[serde(rename = "strIngredient11")]
    pub str_ingredient11: Option<String>,
    #[serde(rename = "strIngredient12")]
    pub str_ingredient12: Option<String>,
    #[serde(rename = "strIngredient13")]
    pub str_ingredient13: Option<String>,
    #[serde(rename = "strIngredient14")]
    pub str_ingredient14: Option<String>,
    #[serde(rename = "strIngredient15")]
    pub str_ingredient15: Option<String>,

    #[serde(rename = "strMeasure1")]
    pub str_measure1: Option<String>,
    #[serde(rename = "strMeasure2")]
    pub str_measure2: Option<String>,
    #[serde(rename = "strMeasure3")]
    pub str_measure3: Option<String>,
    #[serde(rename = "strMeasure4")]
    pub str_measure4: Option<String>,
    #[serde(rename = "strMeasure5")]
    pub str_measure5: Option<String>,
    #[serde(rename = "strMeasure6")]
    pub str_measure6: Option<String>,
    #[serde(rename = "strMeasure7")]
    pub str_measure7: Option<String>,
    #[serde(rename = "strMeasure8")]
    pub str_measure8: Option<String>,
    #[serde(rename = "strMeasure9")]
    pub str_measure9: Option<String>,
    #[serde(rename = "strMeasure10")]
    pub str_measure10: Option<String>,
    #[serde(rename = "strMeasure11")]
    pub str_measure11: Option<String>,
    #[serde(rename = "strMeasure12")]
    pub str_measure12: Option<String>,
    #[serde(rename = "strMeasure13")]
    pub str_measure13: Option<String>,
    #[serde(rename = "strMeasure14")]
    pub str_measure14: Option<String>,
    #[serde(rename = "strMeasure15")]
    pub str_measure15: Option<String>,
}

impl RawDrink {
    /// The 15 positional (ingredient, measure) slot pairs in slot order.
    pub fn ingredient_slots(&self) -> [(&Option<String>, &Option<String>); 15] {
        [
            (&self.str_ingredient1, &self.str_measure1),
            (&self.str_ingredient2, &self.str_measure2),
            (&self.str_ingredient3, &self.str_measure3),
            (&self.str_ingredient4, &self.str_measure4),
            (&self.str_ingredient5, &self.str_measure5),
            (&self.str_ingredient6, &self.str_measure6),
            (&self.str_ingredient7, &self.str_measure7),
            (&self.str_ingredient8, &self.str_measure8),
            (&self.str_ingredient9, &self.str_measure9),
            (&self.str_ingredient10, &self.str_measure10),
            (&self.str_ingredient11, &self.str_measure11),
            (&self.str_ingredient12, &self.str_measure12),
            (&self.str_ingredient13, &self.str_measure13),
            (&self.str_ingredient14, &self.str_measure14),
            (&self.str_ingredient15, &self.str_measure15),
        ]
    }
}
