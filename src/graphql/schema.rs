use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};
use async_graphql::{http::GraphiQLSource, EmptySubscription, Schema as GraphQLSchema};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::{
    app_state::AppState,
    auth::Claims,
    graphql::{MutationRoot, QueryRoot},
};

pub type Schema = GraphQLSchema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn create_schema(app_state: AppState) -> Schema {
    GraphQLSchema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(app_state)
        .finish()
}

/// Executes a GraphQL request, forwarding any claims the auth middleware
/// attached to the HTTP request.
pub async fn graphql_handler(
    schema: web::Data<Schema>,
    http_req: HttpRequest,
    gql_req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = gql_req.into_inner();
    if let Some(claims) = http_req.extensions().get::<Claims>().cloned() {
        request = request.data(claims);
    }
    schema.execute(request).await.into()
}

pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/graphql").route(web::post().to(graphql_handler)))
        .service(web::resource("/graphiql").route(web::get().to(graphiql)));
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockall::predicate::eq;

    use super::*;
    use crate::{
        app_state::Repositories,
        auth::Role,
        config::Config,
        repositories::{
            blog_source::MockBlogSource, quiz_repository::MockQuizRepository,
            survey_repository::MockSurveyRepository, tutorial_repository::MockTutorialRepository,
        },
        test_utils::fixtures::{sample_quiz, sample_survey},
    };

    fn state_with(quizzes: MockQuizRepository, surveys: MockSurveyRepository) -> AppState {
        AppState::with_repositories(
            Config::test_config(),
            None,
            Repositories {
                quizzes: Arc::new(quizzes),
                surveys: Arc::new(surveys),
                tutorials: Arc::new(MockTutorialRepository::new()),
                blog_source: Arc::new(MockBlogSource::new()),
            },
        )
    }

    #[tokio::test]
    async fn test_quiz_for_attempt_hides_correct_answers() {
        let quiz = sample_quiz(true);
        let id = quiz.id.clone();

        let mut quizzes = MockQuizRepository::new();
        quizzes
            .expect_find_by_id()
            .with(eq(id.clone()))
            .returning(move |_| Ok(Some(quiz.clone())));

        let schema = create_schema(state_with(quizzes, MockSurveyRepository::new()));
        let query = format!(
            r#"{{ quizForAttempt(id: "{}") {{ title questions {{ question options }} }} }}"#,
            id
        );
        let response = schema.execute(query).await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let json = serde_json::to_string(&response.data).unwrap();
        assert!(json.contains("options"));
        assert!(!json.contains("correctAnswer"));
    }

    #[tokio::test]
    async fn test_missing_quiz_reports_not_found_code() {
        let mut quizzes = MockQuizRepository::new();
        quizzes.expect_find_by_id().returning(|_| Ok(None));

        let schema = create_schema(state_with(quizzes, MockSurveyRepository::new()));
        let response = schema
            .execute(r#"{ quizForAttempt(id: "missing") { title } }"#)
            .await;

        assert_eq!(response.errors.len(), 1);
        let code = response.errors[0]
            .extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .cloned();
        assert_eq!(code, Some(async_graphql::Value::String("NOT_FOUND".to_string())));
    }

    #[tokio::test]
    async fn test_survey_results_requires_claims() {
        let schema = create_schema(state_with(
            MockQuizRepository::new(),
            MockSurveyRepository::new(),
        ));
        let response = schema
            .execute(r#"{ surveyResults(id: "s1") { responseCount } }"#)
            .await;

        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.contains("Not authenticated"));
    }

    #[tokio::test]
    async fn test_survey_results_with_admin_claims() {
        let survey = sample_survey();
        let id = survey.id.clone();

        let mut surveys = MockSurveyRepository::new();
        surveys
            .expect_find_by_id()
            .returning(move |_| Ok(Some(survey.clone())));

        let schema = create_schema(state_with(MockQuizRepository::new(), surveys));
        let request = async_graphql::Request::new(format!(
            r#"{{ surveyResults(id: "{}") {{ responseCount }} }}"#,
            id
        ))
        .data(Claims::new("admin", Role::Admin, 1));
        let response = schema.execute(request).await;

        assert!(response.errors.is_empty(), "{:?}", response.errors);
        let json = serde_json::to_value(&response.data).unwrap();
        assert_eq!(json["surveyResults"]["responseCount"], 0);
    }
}
