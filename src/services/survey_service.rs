use std::sync::Arc;

use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Survey, SurveyForFilling, SurveyResponse, SurveyResults},
        dto::{
            request::{CreateSurveyRequest, PaginationParams, SubmitSurveyRequest, UpdateSurveyRequest},
            response::{MessageResponse, PaginatedResponse},
        },
    },
    repositories::SurveyRepository,
};

pub struct SurveyService {
    repository: Arc<dyn SurveyRepository>,
}

impl SurveyService {
    pub fn new(repository: Arc<dyn SurveyRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_survey(&self, request: CreateSurveyRequest) -> AppResult<SurveyForFilling> {
        request.validate()?;

        let questions = request.questions.iter().map(|q| q.trim().to_string()).collect();
        let survey = self
            .repository
            .create(Survey::new(request.title.trim(), questions))
            .await?;

        log::info!("Created survey '{}'", survey.id);
        Ok(survey.for_filling())
    }

    async fn find(&self, id: &str) -> AppResult<Survey> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Survey with id '{}' not found", id)))
    }

    pub async fn get_survey(&self, id: &str) -> AppResult<SurveyForFilling> {
        Ok(self.find(id).await?.for_filling())
    }

    pub async fn list_surveys(
        &self,
        pagination: &PaginationParams,
    ) -> AppResult<PaginatedResponse<SurveyForFilling>> {
        pagination.validate()?;
        let (offset, limit) = (pagination.offset(), pagination.limit());
        let (items, total) = self.repository.list(offset, limit).await?;
        Ok(PaginatedResponse::new(items, total, offset, limit).map(|s| s.for_filling()))
    }

    pub async fn update_survey(
        &self,
        id: &str,
        request: UpdateSurveyRequest,
    ) -> AppResult<SurveyForFilling> {
        request.validate()?;

        let title = request.title.map(|t| t.trim().to_string());
        let questions = request
            .questions
            .map(|qs| qs.iter().map(|q| q.trim().to_string()).collect());

        let survey = self.repository.update_definition(id, title, questions).await?;
        Ok(survey.for_filling())
    }

    pub async fn delete_survey(&self, id: &str) -> AppResult<MessageResponse> {
        self.repository.delete(id).await?;
        log::info!("Deleted survey '{}'", id);
        Ok(MessageResponse::new(format!("Survey '{}' deleted", id)))
    }

    pub async fn submit_response(
        &self,
        id: &str,
        request: SubmitSurveyRequest,
    ) -> AppResult<MessageResponse> {
        request.validate()?;

        let response = SurveyResponse::new(request.answers);
        if !self.repository.push_response(id, response).await? {
            return Err(AppError::NotFound(format!("Survey with id '{}' not found", id)));
        }

        log::info!("Recorded response for survey '{}'", id);
        Ok(MessageResponse::new("Survey response submitted"))
    }

    pub async fn get_results(&self, id: &str) -> AppResult<SurveyResults> {
        Ok(self.find(id).await?.into_results())
    }
}
