use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct Tutorial {
    pub id: String,
    pub title: String,
    pub description: String,
    pub video_link: String,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Tutorial {
    pub fn new(title: &str, description: &str, video_link: &str, is_active: bool) -> Self {
        let now = Utc::now();
        Tutorial {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            video_link: video_link.to_string(),
            is_active,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}
