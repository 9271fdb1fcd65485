use super::engine::{
    filter_by_name, filter_by_selected, filter_ingredient_names, split_selected,
};
use super::types::{
    CocktailDetail, CocktailListResponse, CocktailSummary, IngredientListResponse,
};
use crate::catalog::session::CatalogSession;
use crate::catalog::types::Cocktail;
use crate::source::client::CocktailClient;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

const DEFAULT_LIMIT: usize = 50;

#[derive(Deserialize)]
pub struct NameQueryParams {
    pub q: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Deserialize)]
pub struct SelectedParams {
    pub selected: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Deserialize)]
pub struct IngredientParams {
    pub q: Option<String>,
}

pub async fn handle_list_cocktails(
    Query(params): Query<NameQueryParams>,
    Extension(session): Extension<Arc<CatalogSession>>,
) -> Json<CocktailListResponse> {
    let query = params.q.unwrap_or_default();
    let matches = filter_by_name(session.catalog(), &query);

    Json(paginate(query, matches, params.limit, params.offset))
}

pub async fn handle_cocktails_by_ingredients(
    Query(params): Query<SelectedParams>,
    Extension(session): Extension<Arc<CatalogSession>>,
) -> Json<CocktailListResponse> {
    let joined = params.selected.unwrap_or_default();
    let selected = split_selected(&joined);
    let matches = filter_by_selected(session.catalog(), &selected);

    Json(paginate(joined, matches, params.limit, params.offset))
}

pub async fn handle_list_ingredients(
    Query(params): Query<IngredientParams>,
    Extension(session): Extension<Arc<CatalogSession>>,
) -> Json<IngredientListResponse> {
    let query = params.q.unwrap_or_default();
    let ingredients: Vec<String> = filter_ingredient_names(session.ingredients(), &query)
        .into_iter()
        .map(|name| name.to_string())
        .collect();

    Json(IngredientListResponse {
        query,
        count: ingredients.len(),
        ingredients,
    })
}

pub async fn handle_get_cocktail(
    Path(id): Path<String>,
    Extension(client): Extension<Arc<CocktailClient>>,
) -> (StatusCode, Json<Option<CocktailDetail>>) {
    match client.lookup_by_id(&id).await {
        Ok(Some(raw)) => match Cocktail::parse(&raw) {
            Ok(record) => (StatusCode::OK, Json(Some(CocktailDetail::of(&record)))),
            Err(e) => {
                tracing::warn!("Lookup {} returned a malformed record: {}", id, e);
                (StatusCode::NOT_FOUND, Json(None))
            }
        },
        Ok(None) => (StatusCode::NOT_FOUND, Json(None)),
        Err(e) => {
            tracing::error!("Lookup {} failed: {}", id, e);
            (StatusCode::BAD_GATEWAY, Json(None))
        }
    }
}

pub async fn handle_random_cocktail(
    Extension(client): Extension<Arc<CocktailClient>>,
) -> (StatusCode, Json<Option<CocktailDetail>>) {
    match client.random().await {
        Ok(Some(raw)) => match Cocktail::parse(&raw) {
            Ok(record) => (StatusCode::OK, Json(Some(CocktailDetail::of(&record)))),
            Err(e) => {
                tracing::warn!("Random pick was malformed: {}", e);
                (StatusCode::NOT_FOUND, Json(None))
            }
        },
        Ok(None) => (StatusCode::NOT_FOUND, Json(None)),
        Err(e) => {
            tracing::error!("Random pick failed: {}", e);
            (StatusCode::BAD_GATEWAY, Json(None))
        }
    }
}

fn paginate(
    query: String,
    matches: Vec<&Cocktail>,
    limit: Option<usize>,
    offset: Option<usize>,
) -> CocktailListResponse {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    let offset = offset.unwrap_or(0);
    let total_count = matches.len();
    let results: Vec<CocktailSummary> = matches
        .into_iter()
        .skip(offset)
        .take(limit)
        .map(CocktailSummary::of)
        .collect();

    CocktailListResponse {
        query,
        total_count,
        count: results.len(),
        results,
    }
}
