use axum::routing::get;
use axum::{Extension, Router};
use cocktail_catalog::catalog::session::CatalogSession;
use cocktail_catalog::search::handlers::{
    handle_cocktails_by_ingredients, handle_get_cocktail, handle_list_cocktails,
    handle_list_ingredients, handle_random_cocktail,
};
use cocktail_catalog::source::client::CocktailClient;
use std::net::SocketAddr;
use std::sync::Arc;

const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = std::env::var("BIND")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()?;
    let mut base_url =
        std::env::var("COCKTAIL_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--base-url" => {
                base_url = args[i + 1].clone();
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let client = Arc::new(CocktailClient::new(base_url.clone()));

    tracing::info!("Building catalog from {}", base_url);
    let session = Arc::new(CatalogSession::build(&client).await);
    tracing::info!(
        "Catalog ready: {} cocktails, {} distinct ingredients",
        session.catalog().len(),
        session.ingredients().len()
    );

    let app = Router::new()
        .route("/cocktails", get(handle_list_cocktails))
        .route("/cocktails/by-ingredients", get(handle_cocktails_by_ingredients))
        .route("/cocktails/:id", get(handle_get_cocktail))
        .route("/ingredients", get(handle_list_ingredients))
        .route("/random", get(handle_random_cocktail))
        .layer(Extension(session))
        .layer(Extension(client));

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
