//! Rule-based self-assessment calculators. Pure functions over validated input.

pub mod adhd;
pub mod height;

pub use adhd::{score_screener, AdhdScreenerInput, AdhdScreenerResult};
pub use height::{predict_adult_height, HeightInput, HeightPrediction, Sex};
