use std::{sync::Arc, time::Duration};

use once_cell::sync::Lazy;
use regex::Regex;
use tokio::task::JoinHandle;

use crate::{
    cache::TtlCache,
    errors::{AppError, AppResult},
    models::domain::{blog::post_cache_key, BlogPage, BlogPost, BlogQuery},
    repositories::BlogSource,
};

static SLUG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("SLUG_REGEX is a valid regex pattern")
});

pub fn is_valid_slug(slug: &str) -> bool {
    slug.len() <= 200 && SLUG_REGEX.is_match(slug)
}

/// Read-through cache in front of the blog upstream. Listings are keyed by
/// page, category and search term; single posts by slug.
pub struct BlogService {
    source: Arc<dyn BlogSource>,
    pages: TtlCache<String, BlogPage>,
    posts: TtlCache<String, BlogPost>,
}

impl BlogService {
    pub fn new(source: Arc<dyn BlogSource>, ttl: Duration) -> Self {
        Self {
            source,
            pages: TtlCache::new(ttl),
            posts: TtlCache::new(ttl),
        }
    }

    pub async fn list_posts(&self, query: BlogQuery) -> AppResult<BlogPage> {
        let key = query.cache_key();

        if let Some(page) = self.pages.get(&key).await {
            log::debug!("Blog cache hit: {}", key);
            return Ok(page);
        }

        log::debug!("Blog cache miss: {}", key);
        let page = self.source.fetch_page(&query).await?;
        self.pages.insert(key, page.clone()).await;
        Ok(page)
    }

    pub async fn get_post(&self, slug: &str) -> AppResult<BlogPost> {
        if !is_valid_slug(slug) {
            return Err(AppError::ValidationError(format!("Invalid blog slug '{}'", slug)));
        }

        let key = post_cache_key(slug);
        if let Some(post) = self.posts.get(&key).await {
            log::debug!("Blog cache hit: {}", key);
            return Ok(post);
        }

        let post = self
            .source
            .fetch_post(slug)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Blog post '{}' not found", slug)))?;

        self.posts.insert(key, post.clone()).await;
        Ok(post)
    }

    /// Drops every cached listing and post. Returns how many entries were held.
    pub async fn clear_cache(&self) -> usize {
        let cleared = self.pages.clear().await + self.posts.clear().await;
        log::info!("Cleared {} blog cache entries", cleared);
        cleared
    }

    pub async fn purge_expired(&self) -> usize {
        self.pages.purge_expired().await + self.posts.purge_expired().await
    }

    pub fn ttl(&self) -> Duration {
        self.pages.ttl()
    }
}

/// Periodically evicts expired entries so an idle cache does not hold stale pages.
pub fn spawn_cache_purger(service: Arc<BlogService>) -> JoinHandle<()> {
    let period = service.ttl().max(Duration::from_secs(1));

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.tick().await;
        loop {
            interval.tick().await;
            let purged = service.purge_expired().await;
            if purged > 0 {
                log::debug!("Purged {} expired blog cache entries", purged);
            }
        }
    })
}
