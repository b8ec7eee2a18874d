use actix_web::{delete, get, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_admin, AuthenticatedUser},
    errors::AppError,
    middleware::get_request_id,
    models::{
        domain::BlogQuery,
        dto::{request::BlogListParams, response::MessageResponse},
    },
};

#[get("/api/blogs")]
async fn list_blogs(
    state: web::Data<AppState>,
    query: web::Query<BlogListParams>,
) -> Result<HttpResponse, AppError> {
    let params = query.into_inner();
    let query = BlogQuery::new(params.page.unwrap_or(1), params.category, params.search);

    let page = state.blog_service.list_posts(query).await?;
    Ok(HttpResponse::Ok().json(page))
}

#[delete("/api/blogs/cache")]
async fn clear_blog_cache(
    req: HttpRequest,
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    require_admin(&auth.0)?;

    let cleared = state.blog_service.clear_cache().await;
    log::info!(
        "[{}] Blog cache cleared by '{}' ({} entries)",
        get_request_id(&req).unwrap_or_default(),
        auth.0.sub,
        cleared
    );
    Ok(HttpResponse::Ok().json(MessageResponse::new(format!(
        "Cleared {} cached blog entries",
        cleared
    ))))
}

#[get("/api/blogs/{slug}")]
async fn get_blog(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let post = state.blog_service.get_post(&slug).await?;
    Ok(HttpResponse::Ok().json(post))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_blogs)
        .service(clear_blog_cache)
        .service(get_blog);
}
