pub mod blog_source;
pub mod quiz_repository;
pub mod survey_repository;
pub mod tutorial_repository;

pub use blog_source::{BlogSource, HttpBlogSource};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
pub use survey_repository::{MongoSurveyRepository, SurveyRepository};
pub use tutorial_repository::{MongoTutorialRepository, TutorialRepository};
