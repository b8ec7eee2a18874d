use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_admin, AuthenticatedUser},
    errors::AppError,
    models::dto::request::{
        CreateSurveyRequest, PaginationParams, SubmitSurveyRequest, UpdateSurveyRequest,
    },
};

#[get("/api/surveys")]
async fn list_surveys(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse, AppError> {
    let response = state.survey_service.list_surveys(&query).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/surveys/submit/{id}")]
async fn submit_survey(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<SubmitSurveyRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .survey_service
        .submit_response(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(response))
}

#[get("/api/surveys/results/{id}")]
async fn get_survey_results(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let results = state.survey_service.get_results(&id).await?;
    Ok(HttpResponse::Ok().json(results))
}

#[get("/api/surveys/{id}")]
async fn get_survey(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let survey = state.survey_service.get_survey(&id).await?;
    Ok(HttpResponse::Ok().json(survey))
}

#[post("/api/surveys")]
async fn create_survey(
    state: web::Data<AppState>,
    request: web::Json<CreateSurveyRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let survey = state
        .survey_service
        .create_survey(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(survey))
}

#[put("/api/surveys/{id}")]
async fn update_survey(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateSurveyRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let survey = state
        .survey_service
        .update_survey(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(survey))
}

#[delete("/api/surveys/{id}")]
async fn delete_survey(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let response = state.survey_service.delete_survey(&id).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(submit_survey)
        .service(get_survey_results)
        .service(list_surveys)
        .service(create_survey)
        .service(get_survey)
        .service(update_survey)
        .service(delete_survey);
}
