use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::QuizQuestion;

pub const MAX_SURVEY_ANSWER_LEN: usize = 2000;
pub const MAX_PAGINATION_OFFSET: i64 = 100_000;

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

fn no_blank_entries(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().any(|v| v.trim().is_empty()) {
        return Err(ValidationError::new("blank_entry").with_message("entries must not be blank".into()));
    }
    Ok(())
}

fn answers_within_limit(values: &[String]) -> Result<(), ValidationError> {
    if values.iter().any(|v| v.chars().count() > MAX_SURVEY_ANSWER_LEN) {
        return Err(ValidationError::new("answer_too_long")
            .with_message(format!("answers must be at most {} characters", MAX_SURVEY_ANSWER_LEN).into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 100))]
    pub username: String,

    #[validate(length(min = 1, max = 200))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestionInput {
    #[validate(length(min = 1, max = 1000), custom(function = "not_blank"))]
    pub question: String,

    #[validate(length(equal = 4), custom(function = "no_blank_entries"))]
    pub options: Vec<String>,

    #[validate(range(min = 0, max = 3))]
    pub correct_answer: i32,
}

impl From<QuizQuestionInput> for QuizQuestion {
    fn from(input: QuizQuestionInput) -> Self {
        QuizQuestion {
            question: input.question.trim().to_string(),
            options: input.options.into_iter().map(|o| o.trim().to_string()).collect(),
            correct_answer: input.correct_answer,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub title: String,

    #[validate(length(min = 1, max = 100), nested)]
    pub questions: Vec<QuizQuestionInput>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuizRequest {
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 100), nested)]
    pub questions: Option<Vec<QuizQuestionInput>>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitQuizRequest {
    pub answers: Vec<i32>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSurveyRequest {
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub title: String,

    #[validate(length(equal = 5), custom(function = "no_blank_entries"))]
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSurveyRequest {
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub title: Option<String>,

    #[validate(length(equal = 5), custom(function = "no_blank_entries"))]
    pub questions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitSurveyRequest {
    #[validate(length(equal = 5), custom(function = "answers_within_limit"))]
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTutorialRequest {
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub title: String,

    #[validate(length(max = 5000))]
    #[serde(default)]
    pub description: String,

    #[validate(url)]
    pub video_link: String,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTutorialRequest {
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub title: Option<String>,

    #[validate(length(max = 5000))]
    pub description: Option<String>,

    #[validate(url)]
    pub video_link: Option<String>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaginationParams {
    #[validate(range(min = 0, max = 100_000))]
    pub offset: Option<i64>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: Some(0),
            limit: Some(20),
        }
    }
}

impl PaginationParams {
    pub fn new(offset: Option<i64>, limit: Option<i64>) -> Self {
        Self { offset, limit }
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).clamp(0, MAX_PAGINATION_OFFSET)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).clamp(1, 100)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogListParams {
    pub page: Option<u32>,
    pub category: Option<String>,
    pub search: Option<String>,
}
