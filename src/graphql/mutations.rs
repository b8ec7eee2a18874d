use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::{
    app_state::AppState,
    models::{
        domain::QuizResult,
        dto::request::{SubmitQuizRequest, SubmitSurveyRequest},
    },
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn submit_quiz(&self, ctx: &Context<'_>, id: ID, answers: Vec<i32>) -> Result<QuizResult> {
        let state = ctx.data::<AppState>()?;
        state
            .quiz_service
            .submit_quiz(&id, SubmitQuizRequest { answers })
            .await
            .map_err(|e| e.extend())
    }

    /// Returns the confirmation message.
    async fn submit_survey(&self, ctx: &Context<'_>, id: ID, answers: Vec<String>) -> Result<String> {
        let state = ctx.data::<AppState>()?;
        let response = state
            .survey_service
            .submit_response(&id, SubmitSurveyRequest { answers })
            .await
            .map_err(|e| e.extend())?;
        Ok(response.message)
    }
}
