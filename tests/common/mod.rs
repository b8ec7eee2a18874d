#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App,
};
use async_trait::async_trait;
use chrono::Utc;
use secrecy::SecretString;
use tokio::sync::RwLock;

use carehub_server::{
    app_state::{AppState, Repositories},
    auth::AuthMiddleware,
    config::Config,
    errors::{AppError, AppResult},
    graphql, handlers,
    middleware::RequestIdMiddleware,
    models::domain::{BlogPage, BlogPost, BlogQuery, Quiz, Survey, SurveyResponse, Tutorial},
    repositories::{BlogSource, QuizRepository, SurveyRepository, TutorialRepository},
};

pub const ADMIN_USERNAME: &str = "clinic-admin";
pub const ADMIN_PASSWORD: &str = "s3cret-pass";
// sha256("s3cret-pass")
const ADMIN_PASSWORD_HASH: &str =
    "926d3a2dd68393416b7a8348aaadfe4e0c56de6259e17078a0fa1f4dd6e519ae";

fn paginate<T: Clone>(mut items: Vec<T>, offset: i64, limit: i64) -> (Vec<T>, i64) {
    let total = items.len() as i64;
    let start = (offset.max(0) as usize).min(items.len());
    let end = (start + limit.max(0) as usize).min(items.len());
    (items.drain(start..end).collect(), total)
}

#[derive(Default)]
pub struct InMemoryQuizRepository {
    quizzes: RwLock<HashMap<String, Quiz>>,
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        if quizzes.contains_key(&quiz.id) {
            return Err(AppError::DatabaseError(format!(
                "Duplicate quiz id '{}'",
                quiz.id
            )));
        }
        quizzes.insert(quiz.id.clone(), quiz.clone());
        Ok(quiz)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Quiz>> {
        Ok(self.quizzes.read().await.get(id).cloned())
    }

    async fn list(&self, active_only: bool, offset: i64, limit: i64) -> AppResult<(Vec<Quiz>, i64)> {
        let quizzes = self.quizzes.read().await;
        let mut items: Vec<Quiz> = quizzes
            .values()
            .filter(|q| !active_only || q.is_active)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(paginate(items, offset, limit))
    }

    async fn update(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        match quizzes.get_mut(&quiz.id) {
            Some(existing) => {
                *existing = quiz.clone();
                Ok(quiz)
            }
            None => Err(AppError::NotFound(format!("Quiz with id '{}' not found", quiz.id))),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.quizzes
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemorySurveyRepository {
    surveys: RwLock<HashMap<String, Survey>>,
}

#[async_trait]
impl SurveyRepository for InMemorySurveyRepository {
    async fn create(&self, survey: Survey) -> AppResult<Survey> {
        let mut surveys = self.surveys.write().await;
        if surveys.contains_key(&survey.id) {
            return Err(AppError::DatabaseError(format!(
                "Duplicate survey id '{}'",
                survey.id
            )));
        }
        surveys.insert(survey.id.clone(), survey.clone());
        Ok(survey)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Survey>> {
        Ok(self.surveys.read().await.get(id).cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<Survey>, i64)> {
        let surveys = self.surveys.read().await;
        let mut items: Vec<Survey> = surveys
            .values()
            .map(|s| Survey {
                responses: Vec::new(),
                ..s.clone()
            })
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(paginate(items, offset, limit))
    }

    async fn update_definition(
        &self,
        id: &str,
        title: Option<String>,
        questions: Option<Vec<String>>,
    ) -> AppResult<Survey> {
        let mut surveys = self.surveys.write().await;
        let survey = surveys
            .get_mut(id)
            .ok_or_else(|| AppError::NotFound(format!("Survey with id '{}' not found", id)))?;

        if let Some(title) = title {
            survey.title = title;
        }
        if let Some(questions) = questions {
            survey.questions = questions;
        }
        survey.updated_at = Some(Utc::now());
        Ok(survey.clone())
    }

    async fn push_response(&self, id: &str, response: SurveyResponse) -> AppResult<bool> {
        let mut surveys = self.surveys.write().await;
        Ok(match surveys.get_mut(id) {
            Some(survey) => {
                survey.responses.push(response);
                true
            }
            None => false,
        })
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.surveys
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Survey with id '{}' not found", id)))
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryTutorialRepository {
    tutorials: RwLock<HashMap<String, Tutorial>>,
}

#[async_trait]
impl TutorialRepository for InMemoryTutorialRepository {
    async fn create(&self, tutorial: Tutorial) -> AppResult<Tutorial> {
        let mut tutorials = self.tutorials.write().await;
        if tutorials.contains_key(&tutorial.id) {
            return Err(AppError::DatabaseError(format!(
                "Duplicate tutorial id '{}'",
                tutorial.id
            )));
        }
        tutorials.insert(tutorial.id.clone(), tutorial.clone());
        Ok(tutorial)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Tutorial>> {
        Ok(self.tutorials.read().await.get(id).cloned())
    }

    async fn list(
        &self,
        active_only: bool,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Tutorial>, i64)> {
        let tutorials = self.tutorials.read().await;
        let mut items: Vec<Tutorial> = tutorials
            .values()
            .filter(|t| !active_only || t.is_active)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(paginate(items, offset, limit))
    }

    async fn update(&self, tutorial: Tutorial) -> AppResult<Tutorial> {
        let mut tutorials = self.tutorials.write().await;
        match tutorials.get_mut(&tutorial.id) {
            Some(existing) => {
                *existing = tutorial.clone();
                Ok(tutorial)
            }
            None => Err(AppError::NotFound(format!(
                "Tutorial with id '{}' not found",
                tutorial.id
            ))),
        }
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.tutorials
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Tutorial with id '{}' not found", id)))
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Serves a fixed set of posts and counts upstream calls.
#[derive(Default)]
pub struct StubBlogSource {
    pub page_fetches: AtomicUsize,
    pub post_fetches: AtomicUsize,
}

impl StubBlogSource {
    pub fn page_fetches(&self) -> usize {
        self.page_fetches.load(Ordering::SeqCst)
    }
}

pub fn blog_post(slug: &str, category: &str) -> BlogPost {
    BlogPost {
        id: format!("post-{}", slug),
        slug: slug.to_string(),
        title: slug.replace('-', " "),
        excerpt: "Excerpt".to_string(),
        content: Some("Body".to_string()),
        category: Some(category.to_string()),
        author: None,
        image_url: None,
        published_at: None,
    }
}

#[async_trait]
impl BlogSource for StubBlogSource {
    async fn fetch_page(&self, query: &BlogQuery) -> AppResult<BlogPage> {
        self.page_fetches.fetch_add(1, Ordering::SeqCst);

        let posts: Vec<BlogPost> = [
            blog_post("growth-spurts", "growth"),
            blog_post("bedtime-routines", "sleep"),
        ]
        .into_iter()
        .filter(|p| query.category.is_none() || p.category == query.category)
        .filter(|p| {
            query
                .search
                .as_deref()
                .map_or(true, |s| p.title.to_lowercase().contains(s))
        })
        .collect();

        Ok(BlogPage {
            total_posts: posts.len() as u64,
            posts,
            page: query.page,
            total_pages: 1,
        })
    }

    async fn fetch_post(&self, slug: &str) -> AppResult<Option<BlogPost>> {
        self.post_fetches.fetch_add(1, Ordering::SeqCst);
        Ok((slug == "growth-spurts").then(|| blog_post(slug, "growth")))
    }
}

pub fn test_config() -> Config {
    Config {
        app_env: "test".to_string(),
        mongo_conn_string: "mongodb://localhost:27017".to_string(),
        mongo_db_name: "carehub-test".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        jwt_secret: SecretString::from("integration_test_jwt_secret".to_string()),
        jwt_expiration_hours: 1,
        admin_username: ADMIN_USERNAME.to_string(),
        admin_password_hash: SecretString::from(ADMIN_PASSWORD_HASH.to_string()),
        blog_api_url: "http://localhost:1337/api".to_string(),
        blog_cache_ttl_secs: 300,
        cors_allowed_origin: "http://localhost:3000".to_string(),
    }
}

pub struct TestContext {
    pub state: AppState,
    pub blog_source: Arc<StubBlogSource>,
}

pub fn test_context() -> TestContext {
    let blog_source = Arc::new(StubBlogSource::default());
    let state = AppState::with_repositories(
        test_config(),
        None,
        Repositories {
            quizzes: Arc::new(InMemoryQuizRepository::default()),
            surveys: Arc::new(InMemorySurveyRepository::default()),
            tutorials: Arc::new(InMemoryTutorialRepository::default()),
            blog_source: blog_source.clone(),
        },
    );
    TestContext { state, blog_source }
}

/// The application as `main` assembles it, minus CORS and the access log.
pub fn build_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let schema = graphql::create_schema(state.clone());
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(schema))
        .wrap(AuthMiddleware)
        .wrap(RequestIdMiddleware)
        .configure(handlers::configure)
        .configure(graphql::configure)
}
