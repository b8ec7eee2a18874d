use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Tutorial,
        dto::{
            request::{CreateTutorialRequest, PaginationParams, UpdateTutorialRequest},
            response::{MessageResponse, PaginatedResponse},
        },
    },
    repositories::TutorialRepository,
};

pub struct TutorialService {
    repository: Arc<dyn TutorialRepository>,
}

impl TutorialService {
    pub fn new(repository: Arc<dyn TutorialRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_tutorial(&self, request: CreateTutorialRequest) -> AppResult<Tutorial> {
        request.validate()?;

        let tutorial = Tutorial::new(
            request.title.trim(),
            request.description.trim(),
            request.video_link.trim(),
            request.is_active.unwrap_or(true),
        );

        let tutorial = self.repository.create(tutorial).await?;
        log::info!("Created tutorial '{}'", tutorial.id);
        Ok(tutorial)
    }

    pub async fn get_tutorial(&self, id: &str) -> AppResult<Tutorial> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Tutorial with id '{}' not found", id)))
    }

    /// Public lookup; drafts are reported as missing.
    pub async fn get_active_tutorial(&self, id: &str) -> AppResult<Tutorial> {
        match self.repository.find_by_id(id).await? {
            Some(tutorial) if tutorial.is_active => Ok(tutorial),
            _ => Err(AppError::NotFound(format!("Tutorial with id '{}' not found", id))),
        }
    }

    pub async fn list_tutorials(
        &self,
        active_only: bool,
        pagination: &PaginationParams,
    ) -> AppResult<PaginatedResponse<Tutorial>> {
        pagination.validate()?;
        let (offset, limit) = (pagination.offset(), pagination.limit());
        let (items, total) = self.repository.list(active_only, offset, limit).await?;
        Ok(PaginatedResponse::new(items, total, offset, limit))
    }

    pub async fn update_tutorial(
        &self,
        id: &str,
        request: UpdateTutorialRequest,
    ) -> AppResult<Tutorial> {
        request.validate()?;

        let mut tutorial = self.get_tutorial(id).await?;

        if let Some(title) = request.title {
            tutorial.title = title.trim().to_string();
        }
        if let Some(description) = request.description {
            tutorial.description = description.trim().to_string();
        }
        if let Some(video_link) = request.video_link {
            tutorial.video_link = video_link.trim().to_string();
        }
        if let Some(is_active) = request.is_active {
            tutorial.is_active = is_active;
        }
        tutorial.updated_at = Some(Utc::now());

        self.repository.update(tutorial).await
    }

    pub async fn delete_tutorial(&self, id: &str) -> AppResult<MessageResponse> {
        self.repository.delete(id).await?;
        log::info!("Deleted tutorial '{}'", id);
        Ok(MessageResponse::new(format!("Tutorial '{}' deleted", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::tutorial_repository::MockTutorialRepository;
    use crate::test_utils::fixtures::sample_tutorial;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn create_rejects_bad_video_link() {
        let mut repository = MockTutorialRepository::new();
        repository.expect_create().never();

        let result = TutorialService::new(Arc::new(repository))
            .create_tutorial(CreateTutorialRequest {
                title: "Growth charts".to_string(),
                description: "Reading a percentile chart".to_string(),
                video_link: "youtube".to_string(),
                is_active: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn public_listing_asks_for_active_only() {
        let mut repository = MockTutorialRepository::new();
        repository
            .expect_list()
            .with(eq(true), eq(0i64), eq(5i64))
            .returning(|_, _, _| Ok((vec![sample_tutorial()], 7)));

        let page = TutorialService::new(Arc::new(repository))
            .list_tutorials(true, &PaginationParams::new(None, Some(5)))
            .await
            .unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.pagination.total, 7);
        assert!(page.pagination.has_more);
    }

    #[tokio::test]
    async fn listing_rejects_out_of_range_offset() {
        let mut repository = MockTutorialRepository::new();
        repository.expect_list().never();

        let result = TutorialService::new(Arc::new(repository))
            .list_tutorials(true, &PaginationParams::new(Some(i64::MAX), None))
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn public_lookup_hides_drafts() {
        let mut draft = sample_tutorial();
        draft.is_active = false;
        let draft_id = draft.id.clone();
        let published = sample_tutorial();
        let published_id = published.id.clone();

        let mut repository = MockTutorialRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(draft_id.clone()))
            .returning(move |_| Ok(Some(draft.clone())));
        repository
            .expect_find_by_id()
            .with(eq(published_id.clone()))
            .returning(move |_| Ok(Some(published.clone())));
        let service = TutorialService::new(Arc::new(repository));

        let hidden = service.get_active_tutorial(&draft_id).await;
        assert!(matches!(hidden, Err(AppError::NotFound(_))));
        assert!(service.get_tutorial(&draft_id).await.is_ok());
        assert_eq!(
            service.get_active_tutorial(&published_id).await.unwrap().id,
            published_id
        );
    }

    #[tokio::test]
    async fn update_replaces_present_fields() {
        let tutorial = sample_tutorial();
        let mut repository = MockTutorialRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(tutorial.clone())));
        repository.expect_update().returning(Ok);

        let updated = TutorialService::new(Arc::new(repository))
            .update_tutorial(
                "t",
                UpdateTutorialRequest {
                    video_link: Some("https://videos.example.com/new".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.video_link, "https://videos.example.com/new");
        assert_eq!(updated.title, sample_tutorial().title);
    }

    #[tokio::test]
    async fn delete_propagates_not_found() {
        let mut repository = MockTutorialRepository::new();
        repository
            .expect_delete()
            .returning(|id| Err(AppError::NotFound(format!("Tutorial with id '{}' not found", id))));

        let result = TutorialService::new(Arc::new(repository))
            .delete_tutorial("missing")
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
