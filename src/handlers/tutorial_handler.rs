use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_admin, AuthenticatedUser},
    errors::AppError,
    models::dto::request::{CreateTutorialRequest, PaginationParams, UpdateTutorialRequest},
};

#[get("/api/tutorials")]
async fn list_active_tutorials(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse, AppError> {
    let response = state.tutorial_service.list_tutorials(true, &query).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/tutorials/all")]
async fn list_all_tutorials(
    state: web::Data<AppState>,
    query: web::Query<PaginationParams>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let response = state.tutorial_service.list_tutorials(false, &query).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/api/tutorials/{id}")]
async fn get_tutorial(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let tutorial = state.tutorial_service.get_active_tutorial(&id).await?;
    Ok(HttpResponse::Ok().json(tutorial))
}

#[post("/api/tutorials")]
async fn create_tutorial(
    state: web::Data<AppState>,
    request: web::Json<CreateTutorialRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let tutorial = state
        .tutorial_service
        .create_tutorial(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(tutorial))
}

#[put("/api/tutorials/{id}")]
async fn update_tutorial(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateTutorialRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let tutorial = state
        .tutorial_service
        .update_tutorial(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(tutorial))
}

#[delete("/api/tutorials/{id}")]
async fn delete_tutorial(
    state: web::Data<AppState>,
    id: web::Path<String>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let response = state.tutorial_service.delete_tutorial(&id).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_all_tutorials)
        .service(list_active_tutorials)
        .service(create_tutorial)
        .service(get_tutorial)
        .service(update_tutorial)
        .service(delete_tutorial);
}
