use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc},
    Collection,
};
use serde::{Deserialize, Serialize};

use crate::{
    db::{ensure_unique_id_index, from_bson_datetime, to_bson_datetime, Database, TUTORIALS_COLLECTION},
    errors::{AppError, AppResult},
    models::domain::Tutorial,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TutorialRepository: Send + Sync {
    async fn create(&self, tutorial: Tutorial) -> AppResult<Tutorial>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Tutorial>>;
    async fn list(&self, active_only: bool, offset: i64, limit: i64) -> AppResult<(Vec<Tutorial>, i64)>;
    async fn update(&self, tutorial: Tutorial) -> AppResult<Tutorial>;
    async fn delete(&self, id: &str) -> AppResult<()>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct TutorialDocument {
    id: String,
    title: String,
    description: String,
    video_link: String,
    is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<bson::DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<bson::DateTime>,
}

impl From<Tutorial> for TutorialDocument {
    fn from(tutorial: Tutorial) -> Self {
        Self {
            id: tutorial.id,
            title: tutorial.title,
            description: tutorial.description,
            video_link: tutorial.video_link,
            is_active: tutorial.is_active,
            created_at: tutorial.created_at.map(to_bson_datetime),
            updated_at: tutorial.updated_at.map(to_bson_datetime),
        }
    }
}

impl From<TutorialDocument> for Tutorial {
    fn from(document: TutorialDocument) -> Self {
        Self {
            id: document.id,
            title: document.title,
            description: document.description,
            video_link: document.video_link,
            is_active: document.is_active,
            created_at: document.created_at.map(from_bson_datetime),
            updated_at: document.updated_at.map(from_bson_datetime),
        }
    }
}

pub struct MongoTutorialRepository {
    collection: Collection<TutorialDocument>,
}

impl MongoTutorialRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection(TUTORIALS_COLLECTION);
        Self { collection }
    }
}

#[async_trait]
impl TutorialRepository for MongoTutorialRepository {
    async fn create(&self, tutorial: Tutorial) -> AppResult<Tutorial> {
        self.collection
            .insert_one(TutorialDocument::from(tutorial.clone()))
            .await?;
        Ok(tutorial)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Tutorial>> {
        let document = self.collection.find_one(doc! { "id": id }).await?;
        Ok(document.map(Tutorial::from))
    }

    async fn list(&self, active_only: bool, offset: i64, limit: i64) -> AppResult<(Vec<Tutorial>, i64)> {
        let filter = if active_only {
            doc! { "isActive": true }
        } else {
            doc! {}
        };

        let total = self.collection.count_documents(filter.clone()).await? as i64;

        let documents: Vec<TutorialDocument> = self
            .collection
            .find(filter)
            .sort(doc! { "createdAt": -1 })
            .skip(offset as u64)
            .limit(limit)
            .await?
            .try_collect()
            .await?;

        Ok((documents.into_iter().map(Tutorial::from).collect(), total))
    }

    async fn update(&self, tutorial: Tutorial) -> AppResult<Tutorial> {
        let result = self
            .collection
            .replace_one(doc! { "id": &tutorial.id }, TutorialDocument::from(tutorial.clone()))
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Tutorial with id '{}' not found",
                tutorial.id
            )));
        }

        Ok(tutorial)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!("Tutorial with id '{}' not found", id)));
        }

        Ok(())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        ensure_unique_id_index(&self.collection).await
    }
}
