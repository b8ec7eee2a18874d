use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc},
    options::IndexOptions,
    Collection, IndexModel,
};
use serde::{Deserialize, Serialize};

use crate::{
    db::{ensure_unique_id_index, from_bson_datetime, to_bson_datetime, Database, QUIZZES_COLLECTION},
    errors::{AppError, AppResult},
    models::domain::{Quiz, QuizQuestion},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>>;
    async fn list(&self, active_only: bool, offset: i64, limit: i64) -> AppResult<(Vec<Quiz>, i64)>;
    async fn update(&self, quiz: Quiz) -> AppResult<Quiz>;
    async fn delete(&self, id: &str) -> AppResult<()>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

/// Stored shape of a quiz; timestamps are BSON dates so `createdAt` sorts chronologically.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuizDocument {
    id: String,
    title: String,
    questions: Vec<QuizQuestion>,
    is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<bson::DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<bson::DateTime>,
}

impl From<Quiz> for QuizDocument {
    fn from(quiz: Quiz) -> Self {
        Self {
            id: quiz.id,
            title: quiz.title,
            questions: quiz.questions,
            is_active: quiz.is_active,
            created_at: quiz.created_at.map(to_bson_datetime),
            updated_at: quiz.updated_at.map(to_bson_datetime),
        }
    }
}

impl From<QuizDocument> for Quiz {
    fn from(document: QuizDocument) -> Self {
        Self {
            id: document.id,
            title: document.title,
            questions: document.questions,
            is_active: document.is_active,
            created_at: document.created_at.map(from_bson_datetime),
            updated_at: document.updated_at.map(from_bson_datetime),
        }
    }
}

pub struct MongoQuizRepository {
    collection: Collection<QuizDocument>,
}

impl MongoQuizRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection(QUIZZES_COLLECTION);
        Self { collection }
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        self.collection
            .insert_one(QuizDocument::from(quiz.clone()))
            .await?;
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        let document = self.collection.find_one(doc! { "id": id }).await?;
        Ok(document.map(Quiz::from))
    }

    async fn list(&self, active_only: bool, offset: i64, limit: i64) -> AppResult<(Vec<Quiz>, i64)> {
        let filter = if active_only {
            doc! { "isActive": true }
        } else {
            doc! {}
        };

        let total = self.collection.count_documents(filter.clone()).await? as i64;

        let documents: Vec<QuizDocument> = self
            .collection
            .find(filter)
            .sort(doc! { "createdAt": -1 })
            .skip(offset as u64)
            .limit(limit)
            .await?
            .try_collect()
            .await?;

        Ok((documents.into_iter().map(Quiz::from).collect(), total))
    }

    async fn update(&self, quiz: Quiz) -> AppResult<Quiz> {
        let result = self
            .collection
            .replace_one(doc! { "id": &quiz.id }, QuizDocument::from(quiz.clone()))
            .await?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound(format!(
                "Quiz with id '{}' not found",
                quiz.id
            )));
        }

        Ok(quiz)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!("Quiz with id '{}' not found", id)));
        }

        Ok(())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        ensure_unique_id_index(&self.collection).await?;

        let active_index = IndexModel::builder()
            .keys(doc! { "isActive": 1, "createdAt": -1 })
            .options(
                IndexOptions::builder()
                    .name("active_created".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(active_index).await?;
        log::info!("Ensured active/createdAt index on quizzes");
        Ok(())
    }
}
