use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::{
    calculators::{predict_adult_height, score_screener, AdhdScreenerInput, HeightInput},
    errors::AppError,
};

#[post("/api/calculators/height")]
async fn height_calculator(input: web::Json<HeightInput>) -> Result<HttpResponse, AppError> {
    input.validate()?;
    Ok(HttpResponse::Ok().json(predict_adult_height(&input)))
}

#[post("/api/calculators/adhd")]
async fn adhd_screener(input: web::Json<AdhdScreenerInput>) -> Result<HttpResponse, AppError> {
    input.validate()?;
    Ok(HttpResponse::Ok().json(score_screener(&input)))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(height_calculator).service(adhd_screener);
}
