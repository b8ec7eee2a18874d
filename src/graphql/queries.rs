use async_graphql::{Context, ErrorExtensions, Object, Result, ID};

use crate::{
    app_state::AppState,
    auth::{extract_claims_from_context, require_admin},
    errors::AppError,
    models::{
        domain::{QuizForAttempt, SurveyForFilling, SurveyResults, Tutorial},
        dto::request::PaginationParams,
    },
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn active_quizzes(
        &self,
        ctx: &Context<'_>,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Vec<QuizForAttempt>> {
        let state = ctx.data::<AppState>()?;
        let page = state
            .quiz_service
            .list_active_quizzes(&PaginationParams::new(offset, limit))
            .await
            .map_err(|e| e.extend())?;
        Ok(page.items)
    }

    async fn quiz_for_attempt(&self, ctx: &Context<'_>, id: ID) -> Result<QuizForAttempt> {
        let state = ctx.data::<AppState>()?;
        state
            .quiz_service
            .get_quiz_for_attempt(&id)
            .await
            .map_err(|e| e.extend())
    }

    async fn tutorials(
        &self,
        ctx: &Context<'_>,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Vec<Tutorial>> {
        let state = ctx.data::<AppState>()?;
        let page = state
            .tutorial_service
            .list_tutorials(true, &PaginationParams::new(offset, limit))
            .await
            .map_err(|e| e.extend())?;
        Ok(page.items)
    }

    async fn tutorial(&self, ctx: &Context<'_>, id: ID) -> Result<Tutorial> {
        let state = ctx.data::<AppState>()?;
        state
            .tutorial_service
            .get_active_tutorial(&id)
            .await
            .map_err(|e| e.extend())
    }

    async fn survey(&self, ctx: &Context<'_>, id: ID) -> Result<SurveyForFilling> {
        let state = ctx.data::<AppState>()?;
        state
            .survey_service
            .get_survey(&id)
            .await
            .map_err(|e| e.extend())
    }

    async fn survey_results(&self, ctx: &Context<'_>, id: ID) -> Result<SurveyResults> {
        let state = ctx.data::<AppState>()?;
        let claims = extract_claims_from_context(ctx)
            .ok_or_else(|| AppError::Unauthorized("Not authenticated".to_string()).extend())?;
        require_admin(&claims).map_err(|e| e.extend())?;

        state
            .survey_service
            .get_results(&id)
            .await
            .map_err(|e| e.extend())
    }
}
