pub mod blog;
pub mod quiz;
pub mod survey;
pub mod tutorial;
pub use blog::{BlogPage, BlogPost, BlogQuery};
pub use quiz::{Quiz, QuizForAttempt, QuizQuestion, QuizResult};
pub use survey::{Survey, SurveyForFilling, SurveyResponse, SurveyResults};
pub use tutorial::Tutorial;
