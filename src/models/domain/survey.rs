use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const SURVEY_QUESTION_COUNT: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: String,
    pub title: String,
    pub questions: Vec<String>,
    #[serde(default)]
    pub responses: Vec<SurveyResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    pub answers: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

/// What a member of the public sees: the questions, never the responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct SurveyForFilling {
    pub id: String,
    pub title: String,
    pub questions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResults {
    pub id: String,
    pub title: String,
    pub questions: Vec<String>,
    pub response_count: i64,
    pub responses: Vec<SurveyResponse>,
}

impl Survey {
    pub fn new(title: &str, questions: Vec<String>) -> Self {
        let now = Utc::now();
        Survey {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            questions,
            responses: Vec::new(),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    pub fn for_filling(&self) -> SurveyForFilling {
        SurveyForFilling {
            id: self.id.clone(),
            title: self.title.clone(),
            questions: self.questions.clone(),
        }
    }

    pub fn into_results(self) -> SurveyResults {
        SurveyResults {
            id: self.id,
            title: self.title,
            questions: self.questions,
            response_count: self.responses.len() as i64,
            responses: self.responses,
        }
    }
}

impl SurveyResponse {
    pub fn new(answers: Vec<String>) -> Self {
        Self {
            answers,
            submitted_at: Utc::now(),
        }
    }
}
