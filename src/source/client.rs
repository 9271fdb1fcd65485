use super::types::{DrinkList, RawDrink, SourceError};

use std::time::Duration;

/// Per-request deadline. A timed-out letter counts as a failed letter and
/// must not stall the remaining 25.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const RETRY_ATTEMPTS: usize = 3;

/// HTTP client for the remote cocktail recipe API.
///
/// Constructed explicitly with an injected base URL rather than exposed as
/// process-wide shared state, so catalog building stays testable against a
/// local stand-in server.
#[derive(Debug, Clone)]
pub struct CocktailClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl CocktailClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
        }
    }

    /// Lists all drinks whose name starts with `letter`.
    ///
    /// A null `drinks` field means the letter has no drinks and yields an
    /// empty list; null entries within the list are dropped.
    pub async fn list_by_letter(&self, letter: char) -> Result<Vec<RawDrink>, SourceError> {
        let url = format!("{}/search.php?f={}", self.base_url, letter);
        self.fetch_drinks(url).await
    }

    /// Full-name search on the remote side.
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<RawDrink>, SourceError> {
        let url = format!(
            "{}/search.php?s={}",
            self.base_url,
            urlencoding::encode(query)
        );
        self.fetch_drinks(url).await
    }

    /// Looks up a single drink by its source-assigned id.
    ///
    /// Zero matches is not an error: the source answers with `drinks: null`
    /// and this resolves to `None`.
    pub async fn lookup_by_id(&self, id: &str) -> Result<Option<RawDrink>, SourceError> {
        let url = format!("{}/lookup.php?i={}", self.base_url, urlencoding::encode(id));
        let drinks = self.fetch_drinks(url).await?;
        Ok(drinks.into_iter().next())
    }

    /// Asks the source for one randomly chosen drink.
    pub async fn random(&self) -> Result<Option<RawDrink>, SourceError> {
        let url = format!("{}/random.php", self.base_url);
        let drinks = self.fetch_drinks(url).await?;
        Ok(drinks.into_iter().next())
    }

    async fn fetch_drinks(&self, url: String) -> Result<Vec<RawDrink>, SourceError> {
        let response = self
            .get_with_retry(url, REQUEST_TIMEOUT, RETRY_ATTEMPTS)
            .await?;

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status()));
        }

        let list: DrinkList = response.json().await.map_err(SourceError::Decode)?;
        Ok(list.drinks.unwrap_or_default().into_iter().flatten().collect())
    }

    async fn get_with_retry(
        &self,
        url: String,
        timeout: Duration,
        attempts: usize,
    ) -> Result<reqwest::Response, SourceError> {
        let mut delay_ms = 150u64;

        for attempt in 0..attempts {
            let response = self
                .http_client
                .get(url.clone())
                .timeout(timeout)
                .send()
                .await;

            match response {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    if attempt + 1 == attempts {
                        return Err(SourceError::Transport(e));
                    }
                    let jitter = rand::random::<u64>() % 50;
                    tokio::time::sleep(Duration::from_millis(delay_ms + jitter)).await;
                    delay_ms = (delay_ms * 2).min(1200);
                }
            }
        }

        Err(SourceError::RetriesExhausted)
    }
}
