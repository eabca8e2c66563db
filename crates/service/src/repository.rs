use async_trait::async_trait;

use crate::errors::ServiceError;

/// Generic persistence gateway for one entity type.
///
/// `Record` is the persisted row, `Draft` the same row with an optional
/// identity (the SeaORM `ActiveModel` for store-backed adapters), and `Id`
/// the surrogate key type. One adapter implements this per entity.
#[async_trait]
pub trait CrudRepository: Send + Sync {
    type Record: Send + Sync;
    type Draft: Send;
    type Id: Send;

    /// All rows in storage order; empty vec when the table is empty.
    async fn find_all(&self) -> Result<Vec<Self::Record>, ServiceError>;

    /// Insert when the draft's identity is unset (the store assigns a fresh
    /// key), overwrite the existing row when it is set. Returns the
    /// persisted row with identity populated.
    async fn save(&self, draft: Self::Draft) -> Result<Self::Record, ServiceError>;

    /// `None` when no row has this identity; a miss is not an error here.
    async fn find_by_id(&self, id: Self::Id) -> Result<Option<Self::Record>, ServiceError>;

    /// Removes the row if present. Deleting an absent identity succeeds.
    async fn delete_by_id(&self, id: Self::Id) -> Result<(), ServiceError>;
}
