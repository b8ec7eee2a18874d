use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const BLOG_PAGE_SIZE: u32 = 9;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPage {
    pub posts: Vec<BlogPost>,
    pub page: u32,
    pub total_pages: u32,
    pub total_posts: u64,
}

/// A listing request. Two queries that differ only in case or surrounding
/// whitespace of the search term share a cache entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogQuery {
    pub page: u32,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl BlogQuery {
    pub fn new(page: u32, category: Option<String>, search: Option<String>) -> Self {
        let normalize = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            page: page.max(1),
            category: normalize(category).filter(|c| !c.eq_ignore_ascii_case("all")),
            search: normalize(search).map(|s| s.to_lowercase()),
        }
    }

    pub fn cache_key(&self) -> String {
        format!(
            "blogs:page={}:category={}:search={}",
            self.page,
            self.category.as_deref().unwrap_or("all"),
            self.search.as_deref().unwrap_or("")
        )
    }
}

pub fn post_cache_key(slug: &str) -> String {
    format!("blog:{}", slug)
}
