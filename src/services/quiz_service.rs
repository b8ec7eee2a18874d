use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{Quiz, QuizForAttempt, QuizQuestion, QuizResult},
        dto::{
            request::{CreateQuizRequest, PaginationParams, SubmitQuizRequest, UpdateQuizRequest},
            response::{MessageResponse, PaginatedResponse},
        },
    },
    repositories::QuizRepository,
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_quiz(&self, request: CreateQuizRequest) -> AppResult<Quiz> {
        request.validate()?;

        let questions: Vec<QuizQuestion> = request.questions.into_iter().map(Into::into).collect();
        let quiz = Quiz::new(
            request.title.trim(),
            questions,
            request.is_active.unwrap_or(true),
        );

        let quiz = self.repository.create(quiz).await?;
        log::info!("Created quiz '{}' ({} questions)", quiz.id, quiz.questions.len());
        Ok(quiz)
    }

    pub async fn get_quiz(&self, id: &str) -> AppResult<Quiz> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))
    }

    pub async fn list_quizzes(&self, pagination: &PaginationParams) -> AppResult<PaginatedResponse<Quiz>> {
        pagination.validate()?;
        let (offset, limit) = (pagination.offset(), pagination.limit());
        let (items, total) = self.repository.list(false, offset, limit).await?;
        Ok(PaginatedResponse::new(items, total, offset, limit))
    }

    pub async fn list_active_quizzes(
        &self,
        pagination: &PaginationParams,
    ) -> AppResult<PaginatedResponse<QuizForAttempt>> {
        pagination.validate()?;
        let (offset, limit) = (pagination.offset(), pagination.limit());
        let (items, total) = self.repository.list(true, offset, limit).await?;
        Ok(PaginatedResponse::new(items, total, offset, limit).map(|quiz| quiz.for_attempt()))
    }

    pub async fn update_quiz(&self, id: &str, request: UpdateQuizRequest) -> AppResult<Quiz> {
        request.validate()?;

        let mut quiz = self.get_quiz(id).await?;

        if let Some(title) = request.title {
            quiz.title = title.trim().to_string();
        }
        if let Some(questions) = request.questions {
            quiz.questions = questions.into_iter().map(Into::into).collect();
        }
        if let Some(is_active) = request.is_active {
            quiz.is_active = is_active;
        }
        quiz.updated_at = Some(Utc::now());

        self.repository.update(quiz).await
    }

    pub async fn delete_quiz(&self, id: &str) -> AppResult<MessageResponse> {
        self.repository.delete(id).await?;
        log::info!("Deleted quiz '{}'", id);
        Ok(MessageResponse::new(format!("Quiz '{}' deleted", id)))
    }

    async fn get_active_quiz(&self, id: &str) -> AppResult<Quiz> {
        let quiz = self.get_quiz(id).await?;
        if !quiz.is_active {
            return Err(AppError::ValidationError(
                "Quiz is not available for taking".to_string(),
            ));
        }
        Ok(quiz)
    }

    pub async fn get_quiz_for_attempt(&self, id: &str) -> AppResult<QuizForAttempt> {
        Ok(self.get_active_quiz(id).await?.for_attempt())
    }

    pub async fn submit_quiz(&self, id: &str, request: SubmitQuizRequest) -> AppResult<QuizResult> {
        let quiz = self.get_active_quiz(id).await?;

        let result = quiz.score(&request.answers).ok_or_else(|| {
            AppError::ValidationError(format!(
                "Expected {} answers, got {}",
                quiz.questions.len(),
                request.answers.len()
            ))
        })?;

        log::info!(
            "Quiz '{}' submitted: {}/{}",
            quiz.id,
            result.score,
            result.total
        );
        Ok(result)
    }
}
