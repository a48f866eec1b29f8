use cluegrid_core::CategoryId;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{CategoryDetail, CategorySource, CategorySummary, FetchError};

/// Endpoint configuration for the remote trivia service.
#[derive(Clone, Debug)]
pub struct Endpoints {
    /// `GET {category_pool}?count={pool_size}` lists the sampling pool.
    pub category_pool: Url,
    /// `GET {category_detail}?id={id}` returns one category's clues.
    pub category_detail: Url,
    /// How many pool entries to request before sampling.
    pub pool_size: u32,
}

impl Endpoints {
    pub const DEFAULT_POOL_SIZE: u32 = 100;
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            category_pool: Url::parse("https://rithm-jeopardy.herokuapp.com/api/categories")
                .expect("static url is valid"),
            category_detail: Url::parse("https://rithm-jeopardy.herokuapp.com/api/category")
                .expect("static url is valid"),
            pool_size: Self::DEFAULT_POOL_SIZE,
        }
    }
}

/// [`CategorySource`] backed by the HTTP category service.
#[derive(Clone, Debug, Default)]
pub struct HttpCategorySource {
    client: reqwest::Client,
    endpoints: Endpoints,
}

impl HttpCategorySource {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoints,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        mut url: Url,
        params: &[(&str, String)],
    ) -> Result<T, FetchError> {
        for (key, value) in params {
            url.query_pairs_mut().append_pair(key, value);
        }

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json().await?)
    }
}

impl CategorySource for HttpCategorySource {
    async fn list_categories(&self) -> Result<Vec<CategorySummary>, FetchError> {
        log::debug!(
            "fetching category pool ({} entries)",
            self.endpoints.pool_size
        );
        self.get_json(
            self.endpoints.category_pool.clone(),
            &[("count", self.endpoints.pool_size.to_string())],
        )
        .await
    }

    async fn category_detail(&self, id: CategoryId) -> Result<CategoryDetail, FetchError> {
        log::debug!("fetching category {id}");
        self.get_json(
            self.endpoints.category_detail.clone(),
            &[("id", id.to_string())],
        )
        .await
    }
}
