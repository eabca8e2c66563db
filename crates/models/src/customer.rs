use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Row with no identity yet; the store assigns the key on save.
pub fn draft(name: &str, email: &str) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        phone: Set(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;

    #[test]
    fn draft_carries_no_identity() {
        let d = draft("Alice", "alice@example.com");
        assert!(matches!(d.id, ActiveValue::NotSet));
        assert!(matches!(d.name, ActiveValue::Set(ref n) if n == "Alice"));
        assert!(matches!(d.phone, ActiveValue::Set(None)));
    }
}
