use crate::models::domain::{BlogPage, BlogPost, Quiz, QuizQuestion, Survey, Tutorial};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// A three-question quiz with a mix of correct answer positions.
    pub fn sample_quiz(is_active: bool) -> Quiz {
        let question = |text: &str, options: [&str; 4], correct_answer: i32| QuizQuestion {
            question: text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer,
        };

        Quiz::new(
            "Childhood sleep basics",
            vec![
                question(
                    "How many hours should a toddler sleep?",
                    ["6-8", "8-10", "11-14", "16-18"],
                    2,
                ),
                question(
                    "Which habit helps bedtime the most?",
                    ["Screens", "A fixed routine", "Late snacks", "Skipping naps"],
                    1,
                ),
                question(
                    "At what age do most children stay dry at night?",
                    ["2", "5", "9", "12"],
                    1,
                ),
            ],
            is_active,
        )
    }

    pub fn five_questions() -> Vec<String> {
        vec![
            "How did you hear about us?".to_string(),
            "How easy was it to book?".to_string(),
            "How was the waiting time?".to_string(),
            "Would you recommend us?".to_string(),
            "Anything we could improve?".to_string(),
        ]
    }

    pub fn sample_survey() -> Survey {
        Survey::new("Clinic visit feedback", five_questions())
    }

    pub fn sample_tutorial() -> Tutorial {
        Tutorial::new(
            "Measuring your child's height",
            "A short guide to measuring at home.",
            "https://videos.example.com/measuring-height",
            true,
        )
    }

    pub fn sample_blog_post(slug: &str) -> BlogPost {
        BlogPost {
            id: format!("post-{}", slug),
            slug: slug.to_string(),
            title: slug.replace('-', " "),
            excerpt: "A short excerpt.".to_string(),
            content: Some("Full article body.".to_string()),
            category: Some("parenting".to_string()),
            author: Some("Clinic team".to_string()),
            image_url: None,
            published_at: None,
        }
    }

    pub fn sample_blog_page(page: u32) -> BlogPage {
        BlogPage {
            posts: vec![
                sample_blog_post(&format!("page-{}-first", page)),
                sample_blog_post(&format!("page-{}-second", page)),
            ],
            page,
            total_pages: 3,
            total_posts: 20,
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::test_helpers::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_sample_quiz_answers_are_in_range() {
        let quiz = sample_quiz(true);
        assert!(quiz.is_active);
        assert!(quiz
            .questions
            .iter()
            .all(|q| q.options.len() == 4 && (0..4).contains(&q.correct_answer)));
        assert!(!sample_quiz(false).is_active);
    }

    #[test]
    fn test_sample_survey_has_five_questions() {
        let survey = sample_survey();
        assert_eq!(survey.questions.len(), 5);
        assert!(survey.responses.is_empty());
    }

    #[test]
    fn test_sample_blog_page() {
        let page = sample_blog_page(2);
        assert_eq!(page.page, 2);
        assert_eq!(page.posts[0].slug, "page-2-first");
    }

    #[test]
    fn test_status_helpers() {
        assert_error_status(StatusCode::NOT_FOUND);
        assert_success_status(StatusCode::CREATED);
    }
}
