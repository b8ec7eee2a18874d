use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub questions: Vec<QuizQuestion>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: i32, // index into options, 0..=3
}

/// Public view of a quiz handed out for an attempt. Carries no answers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct QuizForAttempt {
    pub id: String,
    pub title: String,
    pub questions: Vec<AttemptQuestion>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct AttemptQuestion {
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub quiz_id: String,
    pub score: i32,
    pub total: i32,
    pub percentage: f64,
    pub results: Vec<QuestionResult>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub question_index: i32,
    pub correct: bool,
}

impl Quiz {
    pub fn new(title: &str, questions: Vec<QuizQuestion>, is_active: bool) -> Self {
        let now = Utc::now();
        Quiz {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            questions,
            is_active,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    pub fn for_attempt(&self) -> QuizForAttempt {
        QuizForAttempt {
            id: self.id.clone(),
            title: self.title.clone(),
            questions: self
                .questions
                .iter()
                .map(|q| AttemptQuestion {
                    question: q.question.clone(),
                    options: q.options.clone(),
                })
                .collect(),
        }
    }

    /// One point per answer whose index matches the question's correct answer.
    /// `answers` must hold exactly one entry per question.
    pub fn score(&self, answers: &[i32]) -> Option<QuizResult> {
        if answers.len() != self.questions.len() {
            return None;
        }

        let results: Vec<QuestionResult> = self
            .questions
            .iter()
            .zip(answers)
            .enumerate()
            .map(|(index, (question, answer))| QuestionResult {
                question_index: index as i32,
                correct: question.correct_answer == *answer,
            })
            .collect();

        let score = results.iter().filter(|r| r.correct).count() as i32;
        let total = self.questions.len() as i32;
        let percentage = if total == 0 {
            0.0
        } else {
            (f64::from(score) * 10000.0 / f64::from(total)).round() / 100.0
        };

        Some(QuizResult {
            quiz_id: self.id.clone(),
            score,
            total,
            percentage,
            results,
        })
    }
}
