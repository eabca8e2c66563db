use std::sync::Arc;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::repository::CrudRepository;

/// Boundary-facing customer operations. Every call forwards to the injected
/// repository unchanged; the one contract difference is that `get_by_id`
/// turns an absent row into a `NotFound` failure.
pub struct CustomerService<R>
where
    R: CrudRepository<
        Record = models::customer::Model,
        Draft = models::customer::ActiveModel,
        Id = i64,
    >,
{
    repo: Arc<R>,
}

impl<R> CustomerService<R>
where
    R: CrudRepository<
        Record = models::customer::Model,
        Draft = models::customer::ActiveModel,
        Id = i64,
    >,
{
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn get_all_customers(&self) -> Result<Vec<models::customer::Model>, ServiceError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self, customer))]
    pub async fn save_customer(
        &self,
        customer: models::customer::ActiveModel,
    ) -> Result<models::customer::Model, ServiceError> {
        let saved = self.repo.save(customer).await?;
        info!(id = saved.id, "customer_saved");
        Ok(saved)
    }

    /// A missing identity is a failure here, unlike the repository's
    /// optional result.
    pub async fn get_customer_by_id(&self, id: i64) -> Result<models::customer::Model, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("customer"))
    }

    /// Same store semantics as `save_customer`; kept as a distinct operation
    /// for the boundary layer.
    pub async fn update_customer(
        &self,
        customer: models::customer::ActiveModel,
    ) -> Result<models::customer::Model, ServiceError> {
        self.repo.save(customer).await
    }

    #[instrument(skip(self))]
    pub async fn delete_customer_by_id(&self, id: i64) -> Result<(), ServiceError> {
        self.repo.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::repository::mock::MockCustomerRepository;
    use models::customer;
    use sea_orm::Set;

    fn service() -> CustomerService<MockCustomerRepository> {
        CustomerService::new(Arc::new(MockCustomerRepository::default()))
    }

    #[tokio::test]
    async fn full_crud_scenario() -> Result<(), anyhow::Error> {
        let svc = service();

        let alice = svc
            .save_customer(customer::draft("Alice", "alice@example.com"))
            .await?;
        assert_eq!(alice.id, 1);
        assert_eq!(alice.name, "Alice");

        let bob = svc
            .save_customer(customer::draft("Bob", "bob@example.com"))
            .await?;
        assert_eq!(bob.id, 2);

        let all = svc.get_all_customers().await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[1].id, 2);

        let found = svc.get_customer_by_id(1).await?;
        assert_eq!(found.name, "Alice");

        let missing = svc.get_customer_by_id(99).await;
        assert!(matches!(missing, Err(ServiceError::NotFound(_))));

        svc.delete_customer_by_id(1).await?;
        let remaining = svc.get_all_customers().await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
        Ok(())
    }

    #[tokio::test]
    async fn update_overwrites_row_with_same_identity() -> Result<(), anyhow::Error> {
        let svc = service();
        let created = svc
            .save_customer(customer::draft("Carol", "carol@example.com"))
            .await?;

        let updated = svc
            .update_customer(customer::ActiveModel {
                id: Set(created.id),
                name: Set("Caroline".to_string()),
                email: Set("caroline@example.com".to_string()),
                phone: Set(Some("555-0199".to_string())),
            })
            .await?;
        assert_eq!(updated.id, created.id);

        let all = svc.get_all_customers().await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], updated);
        Ok(())
    }

    #[tokio::test]
    async fn delete_is_idempotent() -> Result<(), anyhow::Error> {
        let svc = service();
        let kept = svc.save_customer(customer::draft("Dan", "dan@example.com")).await?;
        let gone = svc.save_customer(customer::draft("Eve", "eve@example.com")).await?;

        svc.delete_customer_by_id(gone.id).await?;
        svc.delete_customer_by_id(gone.id).await?;

        let remaining = svc.get_all_customers().await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, kept.id);
        Ok(())
    }

    #[tokio::test]
    async fn get_by_id_failure_names_the_entity() {
        let svc = service();
        let err = svc.get_customer_by_id(7).await.unwrap_err();
        assert_eq!(err.to_string(), "not found: customer not found");
    }
}
