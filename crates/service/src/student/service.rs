use std::sync::Arc;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::repository::CrudRepository;

/// Boundary-facing student operations; same delegation shape as the
/// customer slice.
pub struct StudentService<R>
where
    R: CrudRepository<
        Record = models::student::Model,
        Draft = models::student::ActiveModel,
        Id = i64,
    >,
{
    repo: Arc<R>,
}

impl<R> StudentService<R>
where
    R: CrudRepository<
        Record = models::student::Model,
        Draft = models::student::ActiveModel,
        Id = i64,
    >,
{
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn get_all_students(&self) -> Result<Vec<models::student::Model>, ServiceError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self, student))]
    pub async fn save_student(
        &self,
        student: models::student::ActiveModel,
    ) -> Result<models::student::Model, ServiceError> {
        let saved = self.repo.save(student).await?;
        info!(id = saved.id, "student_saved");
        Ok(saved)
    }

    /// A missing identity is a failure here, unlike the repository's
    /// optional result.
    pub async fn get_student_by_id(&self, id: i64) -> Result<models::student::Model, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("student"))
    }

    pub async fn update_student(
        &self,
        student: models::student::ActiveModel,
    ) -> Result<models::student::Model, ServiceError> {
        self.repo.save(student).await
    }

    #[instrument(skip(self))]
    pub async fn delete_student_by_id(&self, id: i64) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await
    }
}
