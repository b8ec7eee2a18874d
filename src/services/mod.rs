pub mod blog_service;
pub mod quiz_service;
pub mod survey_service;
pub mod tutorial_service;

pub use blog_service::{spawn_cache_purger, BlogService};
pub use quiz_service::QuizService;
pub use survey_service::SurveyService;
pub use tutorial_service::TutorialService;
