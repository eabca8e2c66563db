use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, TryIntoModel};

use crate::errors::ServiceError;
use crate::repository::CrudRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CrudRepository for SeaOrmCustomerRepository {
    type Record = models::customer::Model;
    type Draft = models::customer::ActiveModel;
    type Id = i64;

    async fn find_all(&self) -> Result<Vec<Self::Record>, ServiceError> {
        models::customer::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn save(&self, draft: Self::Draft) -> Result<Self::Record, ServiceError> {
        // SeaORM save(): insert on NotSet primary key, update otherwise.
        let saved = draft
            .save(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        saved.try_into_model().map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_id(&self, id: Self::Id) -> Result<Option<Self::Record>, ServiceError> {
        models::customer::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete_by_id(&self, id: Self::Id) -> Result<(), ServiceError> {
        models::customer::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }
}

/// Simple in-memory mock repository for tests and doc examples.
pub mod mock {
    use super::*;
    use models::customer;
    use sea_orm::{ActiveValue, Value};
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockCustomerRepository {
        rows: Mutex<BTreeMap<i64, customer::Model>>,
        last_id: AtomicI64,
    }

    fn set_or_default<T: Default + Into<Value>>(v: ActiveValue<T>) -> T {
        match v {
            ActiveValue::Set(x) | ActiveValue::Unchanged(x) => x,
            ActiveValue::NotSet => T::default(),
        }
    }

    #[async_trait]
    impl CrudRepository for MockCustomerRepository {
        type Record = customer::Model;
        type Draft = customer::ActiveModel;
        type Id = i64;

        async fn find_all(&self) -> Result<Vec<Self::Record>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.values().cloned().collect())
        }

        async fn save(&self, draft: Self::Draft) -> Result<Self::Record, ServiceError> {
            let id = match draft.id {
                ActiveValue::Set(v) | ActiveValue::Unchanged(v) => v,
                ActiveValue::NotSet => self.last_id.fetch_add(1, Ordering::SeqCst) + 1,
            };
            let model = customer::Model {
                id,
                name: set_or_default(draft.name),
                email: set_or_default(draft.email),
                phone: set_or_default(draft.phone),
            };
            self.rows.lock().unwrap().insert(id, model.clone());
            Ok(model)
        }

        async fn find_by_id(&self, id: Self::Id) -> Result<Option<Self::Record>, ServiceError> {
            let rows = self.rows.lock().unwrap();
            Ok(rows.get(&id).cloned())
        }

        async fn delete_by_id(&self, id: Self::Id) -> Result<(), ServiceError> {
            self.rows.lock().unwrap().remove(&id);
            Ok(())
        }
    }
}
