//! Remote Source Client Tests
//!
//! Exercises the `CocktailClient` against a throwaway local HTTP server that
//! impersonates the remote cocktail API.
//!
//! ## Test Scopes
//! - **Decoding**: Wrapper shape, null `drinks`, null entries inside the list.
//! - **Operations**: Letter listing, name search, id lookup, random pick.
//! - **Failure paths**: Non-success statuses and transport-level errors.

#[cfg(test)]
mod tests {
    use crate::source::client::CocktailClient;
    use crate::source::types::SourceError;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    async fn spawn_source(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        format!("http://{addr}")
    }

    fn drink_json(id: &str, name: &str) -> Value {
        json!({
            "idDrink": id,
            "strDrink": name,
        })
    }

    // ============================================================
    // LIST BY LETTER
    // ============================================================

    #[tokio::test]
    async fn test_list_by_letter_decodes_drinks() {
        let app = Router::new().route(
            "/search.php",
            get(|| async {
                Json(json!({
                    "drinks": [drink_json("11007", "Margarita"),
                               drink_json("11008", "Manhattan")]
                }))
            }),
        );
        let client = CocktailClient::new(spawn_source(app).await);

        let drinks = client.list_by_letter('m').await.expect("list");

        assert_eq!(drinks.len(), 2);
        assert_eq!(drinks[0].id_drink.as_deref(), Some("11007"));
        assert_eq!(drinks[0].str_drink.as_deref(), Some("Margarita"));
        assert_eq!(drinks[1].str_drink.as_deref(), Some("Manhattan"));
    }

    #[tokio::test]
    async fn test_list_by_letter_null_drinks_is_empty() {
        let app = Router::new().route(
            "/search.php",
            get(|| async { Json(json!({ "drinks": null })) }),
        );
        let client = CocktailClient::new(spawn_source(app).await);

        let drinks = client.list_by_letter('x').await.expect("list");

        assert!(drinks.is_empty(), "null drinks must mean zero matches");
    }

    #[tokio::test]
    async fn test_list_by_letter_skips_null_entries() {
        let app = Router::new().route(
            "/search.php",
            get(|| async {
                Json(json!({ "drinks": [null, drink_json("17222", "A1")] }))
            }),
        );
        let client = CocktailClient::new(spawn_source(app).await);

        let drinks = client.list_by_letter('a').await.expect("list");

        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0].str_drink.as_deref(), Some("A1"));
    }

    #[tokio::test]
    async fn test_list_by_letter_sends_letter_parameter() {
        let app = Router::new().route(
            "/search.php",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let letter = params.get("f").cloned().unwrap_or_default();
                Json(json!({ "drinks": [drink_json("1", &letter)] }))
            }),
        );
        let client = CocktailClient::new(spawn_source(app).await);

        let drinks = client.list_by_letter('q').await.expect("list");

        assert_eq!(drinks[0].str_drink.as_deref(), Some("q"));
    }

    // ============================================================
    // NAME SEARCH
    // ============================================================

    #[tokio::test]
    async fn test_search_by_name_round_trips_query() {
        // The stand-in echoes the decoded `s` parameter back as the drink
        // name, proving the client URL-encodes multi-word queries.
        let app = Router::new().route(
            "/search.php",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let query = params.get("s").cloned().unwrap_or_default();
                Json(json!({ "drinks": [drink_json("2", &query)] }))
            }),
        );
        let client = CocktailClient::new(spawn_source(app).await);

        let drinks = client.search_by_name("old fashioned").await.expect("search");

        assert_eq!(drinks[0].str_drink.as_deref(), Some("old fashioned"));
    }

    // ============================================================
    // LOOKUP BY ID
    // ============================================================

    #[tokio::test]
    async fn test_lookup_by_id_returns_first_match() {
        let app = Router::new().route(
            "/lookup.php",
            get(|| async {
                Json(json!({ "drinks": [drink_json("11000", "Mojito")] }))
            }),
        );
        let client = CocktailClient::new(spawn_source(app).await);

        let drink = client.lookup_by_id("11000").await.expect("lookup");

        assert_eq!(
            drink.expect("one match").str_drink.as_deref(),
            Some("Mojito")
        );
    }

    #[tokio::test]
    async fn test_lookup_by_id_zero_matches_is_none() {
        let app = Router::new().route(
            "/lookup.php",
            get(|| async { Json(json!({ "drinks": null })) }),
        );
        let client = CocktailClient::new(spawn_source(app).await);

        let drink = client.lookup_by_id("99999").await.expect("lookup");

        assert!(drink.is_none(), "empty lookup is Ok(None), not an error");
    }

    // ============================================================
    // RANDOM
    // ============================================================

    #[tokio::test]
    async fn test_random_returns_drink() {
        let app = Router::new().route(
            "/random.php",
            get(|| async {
                Json(json!({ "drinks": [drink_json("14610", "ACID")] }))
            }),
        );
        let client = CocktailClient::new(spawn_source(app).await);

        let drink = client.random().await.expect("random");

        assert_eq!(drink.expect("one drink").str_drink.as_deref(), Some("ACID"));
    }

    // ============================================================
    // FAILURE PATHS
    // ============================================================

    #[tokio::test]
    async fn test_error_status_surfaces_as_status_error() {
        let app = Router::new().route(
            "/search.php",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "boom" })),
                )
            }),
        );
        let client = CocktailClient::new(spawn_source(app).await);

        let result = client.list_by_letter('a').await;

        assert!(matches!(result, Err(SourceError::Status(status)) if status.as_u16() == 500));
    }

    #[tokio::test]
    async fn test_unreachable_source_is_transport_error() {
        // Bind and immediately drop a listener so the port is free but closed.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let client = CocktailClient::new(format!("http://{addr}"));

        let result = client.list_by_letter('a').await;

        assert!(matches!(result, Err(SourceError::Transport(_))));
    }
}
