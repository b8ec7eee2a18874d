use std::{sync::Arc, time::Duration};

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        BlogSource, HttpBlogSource, MongoQuizRepository, MongoSurveyRepository,
        MongoTutorialRepository, QuizRepository, SurveyRepository, TutorialRepository,
    },
    services::{
        blog_service::BlogService, quiz_service::QuizService, survey_service::SurveyService,
        tutorial_service::TutorialService,
    },
};

/// The storage and upstream seams the services are built on.
pub struct Repositories {
    pub quizzes: Arc<dyn QuizRepository>,
    pub surveys: Arc<dyn SurveyRepository>,
    pub tutorials: Arc<dyn TutorialRepository>,
    pub blog_source: Arc<dyn BlogSource>,
}

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub survey_service: Arc<SurveyService>,
    pub tutorial_service: Arc<TutorialService>,
    pub blog_service: Arc<BlogService>,
    pub jwt_service: Arc<JwtService>,
    pub config: Arc<Config>,
    pub db: Option<Database>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let quizzes = Arc::new(MongoQuizRepository::new(&db));
        quizzes.ensure_indexes().await?;

        let surveys = Arc::new(MongoSurveyRepository::new(&db));
        surveys.ensure_indexes().await?;

        let tutorials = Arc::new(MongoTutorialRepository::new(&db));
        tutorials.ensure_indexes().await?;

        let blog_source = Arc::new(HttpBlogSource::new(&config.blog_api_url)?);

        let repositories = Repositories {
            quizzes,
            surveys,
            tutorials,
            blog_source,
        };

        Ok(Self::with_repositories(config, Some(db), repositories))
    }

    pub fn with_repositories(config: Config, db: Option<Database>, repositories: Repositories) -> Self {
        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
        ));
        let blog_service = Arc::new(BlogService::new(
            repositories.blog_source,
            Duration::from_secs(config.blog_cache_ttl_secs),
        ));

        Self {
            quiz_service: Arc::new(QuizService::new(repositories.quizzes)),
            survey_service: Arc::new(SurveyService::new(repositories.surveys)),
            tutorial_service: Arc::new(TutorialService::new(repositories.tutorials)),
            blog_service,
            jwt_service,
            config: Arc::new(config),
            db,
        }
    }
}
