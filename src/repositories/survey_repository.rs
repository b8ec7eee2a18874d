use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{self, doc, to_bson},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Collection,
};
use serde::{Deserialize, Serialize};

use crate::{
    db::{ensure_unique_id_index, from_bson_datetime, to_bson_datetime, Database, SURVEYS_COLLECTION},
    errors::{AppError, AppResult},
    models::domain::{Survey, SurveyResponse},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SurveyRepository: Send + Sync {
    async fn create(&self, survey: Survey) -> AppResult<Survey>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Survey>>;
    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<Survey>, i64)>;
    /// Changes the definition only; collected responses are left untouched.
    async fn update_definition(
        &self,
        id: &str,
        title: Option<String>,
        questions: Option<Vec<String>>,
    ) -> AppResult<Survey>;
    /// Appends one response atomically. Returns `false` when no survey has `id`.
    async fn push_response(&self, id: &str, response: SurveyResponse) -> AppResult<bool>;
    async fn delete(&self, id: &str) -> AppResult<()>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct SurveyDocument {
    id: String,
    title: String,
    questions: Vec<String>,
    #[serde(default)]
    responses: Vec<SurveyResponseDocument>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_at: Option<bson::DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<bson::DateTime>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
struct SurveyResponseDocument {
    answers: Vec<String>,
    submitted_at: bson::DateTime,
}

impl From<SurveyResponse> for SurveyResponseDocument {
    fn from(response: SurveyResponse) -> Self {
        Self {
            answers: response.answers,
            submitted_at: to_bson_datetime(response.submitted_at),
        }
    }
}

impl From<SurveyResponseDocument> for SurveyResponse {
    fn from(document: SurveyResponseDocument) -> Self {
        Self {
            answers: document.answers,
            submitted_at: from_bson_datetime(document.submitted_at),
        }
    }
}

impl From<Survey> for SurveyDocument {
    fn from(survey: Survey) -> Self {
        Self {
            id: survey.id,
            title: survey.title,
            questions: survey.questions,
            responses: survey.responses.into_iter().map(Into::into).collect(),
            created_at: survey.created_at.map(to_bson_datetime),
            updated_at: survey.updated_at.map(to_bson_datetime),
        }
    }
}

impl From<SurveyDocument> for Survey {
    fn from(document: SurveyDocument) -> Self {
        Self {
            id: document.id,
            title: document.title,
            questions: document.questions,
            responses: document.responses.into_iter().map(Into::into).collect(),
            created_at: document.created_at.map(from_bson_datetime),
            updated_at: document.updated_at.map(from_bson_datetime),
        }
    }
}

pub struct MongoSurveyRepository {
    collection: Collection<SurveyDocument>,
}

impl MongoSurveyRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection(SURVEYS_COLLECTION);
        Self { collection }
    }
}

#[async_trait]
impl SurveyRepository for MongoSurveyRepository {
    async fn create(&self, survey: Survey) -> AppResult<Survey> {
        self.collection
            .insert_one(SurveyDocument::from(survey.clone()))
            .await?;
        Ok(survey)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Survey>> {
        let document = self.collection.find_one(doc! { "id": id }).await?;
        Ok(document.map(Survey::from))
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<Survey>, i64)> {
        let total = self.collection.count_documents(doc! {}).await? as i64;

        // Listings never need the (potentially large) responses array.
        let documents: Vec<SurveyDocument> = self
            .collection
            .find(doc! {})
            .projection(doc! { "responses": 0 })
            .sort(doc! { "createdAt": -1 })
            .skip(offset as u64)
            .limit(limit)
            .await?
            .try_collect()
            .await?;

        Ok((documents.into_iter().map(Survey::from).collect(), total))
    }

    async fn update_definition(
        &self,
        id: &str,
        title: Option<String>,
        questions: Option<Vec<String>>,
    ) -> AppResult<Survey> {
        let mut set = doc! { "updatedAt": bson::DateTime::now() };
        if let Some(title) = title {
            set.insert("title", title);
        }
        if let Some(questions) = questions {
            set.insert("questions", questions);
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "id": id }, doc! { "$set": set })
            .with_options(options)
            .await?
            .map(Survey::from)
            .ok_or_else(|| AppError::NotFound(format!("Survey with id '{}' not found", id)))
    }

    async fn push_response(&self, id: &str, response: SurveyResponse) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "id": id },
                doc! { "$push": { "responses": to_bson(&SurveyResponseDocument::from(response))? } },
            )
            .await?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::NotFound(format!("Survey with id '{}' not found", id)));
        }

        Ok(())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        ensure_unique_id_index(&self.collection).await
    }
}
