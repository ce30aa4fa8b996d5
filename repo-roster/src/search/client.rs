//! Search transport.

use super::error::FetchError;
use super::item::SearchPage;
use crate::rate_limit::ensure_search_rate_limit;
use octocrab::Octocrab;
use serde::Serialize;
use std::future::Future;

/// Source of repository search result pages.
///
/// Pages are numbered from 1.
pub trait SearchClient {
    /// Fetches one page of results for `query`.
    fn search_page(
        &self,
        query: &str,
        per_page: u8,
        page: u32,
    ) -> impl Future<Output = Result<SearchPage, FetchError>> + Send;
}

/// Query parameters of `GET /search/repositories`.
#[derive(Debug, Serialize)]
struct SearchParams<'a> {
    q: &'a str,
    sort: &'static str,
    order: &'static str,
    per_page: u8,
    page: u32,
}

/// [`SearchClient`] backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GitHubSearch {
    octocrab: Octocrab,
}

impl GitHubSearch {
    /// Builds an authenticated client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(token: &str) -> Result<Self, octocrab::Error> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .build()?;
        Ok(Self { octocrab })
    }
}

impl SearchClient for GitHubSearch {
    async fn search_page(
        &self,
        query: &str,
        per_page: u8,
        page: u32,
    ) -> Result<SearchPage, FetchError> {
        ensure_search_rate_limit(&self.octocrab).await?;

        let params = SearchParams {
            q: query,
            sort: "updated",
            order: "desc",
            per_page,
            page,
        };
        Ok(self
            .octocrab
            .get("/search/repositories", Some(&params))
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_params_encoding() {
        let params = SearchParams {
            q: "portfolio in:name",
            sort: "updated",
            order: "desc",
            per_page: 100,
            page: 3,
        };

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "q": "portfolio in:name",
                "sort": "updated",
                "order": "desc",
                "per_page": 100,
                "page": 3
            })
        );
    }
}
