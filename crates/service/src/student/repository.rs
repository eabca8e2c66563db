use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, TryIntoModel};

use crate::errors::ServiceError;
use crate::repository::CrudRepository;

/// SeaORM-backed repository implementation.
pub struct SeaOrmStudentRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CrudRepository for SeaOrmStudentRepository {
    type Record = models::student::Model;
    type Draft = models::student::ActiveModel;
    type Id = i64;

    async fn find_all(&self) -> Result<Vec<Self::Record>, ServiceError> {
        models::student::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn save(&self, draft: Self::Draft) -> Result<Self::Record, ServiceError> {
        let saved = draft
            .save(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        saved.try_into_model().map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_id(&self, id: Self::Id) -> Result<Option<Self::Record>, ServiceError> {
        models::student::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn delete_by_id(&self, id: Self::Id) -> Result<(), ServiceError> {
        models::student::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }
}

/// Simple in-memory mock repository for tests and doc examples.
pub mod mock {
    use super::*;
    use models::student;
    use sea_orm::{ActiveValue, Value};
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockStudentRepository {
        rows: Mutex<BTreeMap<i64, student::Model>>,
        last_id: AtomicI64,
    }

    fn set_or_default<T: Default + Into<Value>>(v: ActiveValue<T>) -> T {
        match v {
            ActiveValue::Set(x) | ActiveValue::Unchanged(x) => x,
            ActiveValue::NotSet => T::default(),
        }
    }

    #[async_trait]
    impl CrudRepository for MockStudentRepository {
        type Record = student::Model;
        type Draft = student::ActiveModel;
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
            let model = student::Model {
                id,
                first_name: set_or_default(draft.first_name),
                last_name: set_or_default(draft.last_name),
                email: set_or_default(draft.email),
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
