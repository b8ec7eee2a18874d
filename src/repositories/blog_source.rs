use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{
    errors::{AppError, AppResult},
    models::domain::{blog::BLOG_PAGE_SIZE, BlogPage, BlogPost, BlogQuery},
};

/// Upstream the blog listings are read from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogSource: Send + Sync {
    async fn fetch_page(&self, query: &BlogQuery) -> AppResult<BlogPage>;
    async fn fetch_post(&self, slug: &str) -> AppResult<Option<BlogPost>>;
}

pub struct HttpBlogSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBlogSource {
    pub fn new(base_url: &str) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl BlogSource for HttpBlogSource {
    async fn fetch_page(&self, query: &BlogQuery) -> AppResult<BlogPage> {
        let mut params = vec![
            ("page", query.page.to_string()),
            ("limit", BLOG_PAGE_SIZE.to_string()),
        ];
        if let Some(category) = &query.category {
            params.push(("category", category.clone()));
        }
        if let Some(search) = &query.search {
            params.push(("search", search.clone()));
        }

        let response = self
            .client
            .get(format!("{}/posts", self.base_url))
            .query(&params)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| {
                log::warn!("Blog upstream rejected listing request: {}", e);
                AppError::from(e)
            })?;

        Ok(response.json::<BlogPage>().await?)
    }

    async fn fetch_post(&self, slug: &str) -> AppResult<Option<BlogPost>> {
        let response = self
            .client
            .get(format!("{}/posts/{}", self.base_url, slug))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let post = response.error_for_status()?.json::<BlogPost>().await?;
        Ok(Some(post))
    }
}
