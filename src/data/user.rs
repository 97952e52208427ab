use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use entity::user::Column;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Gets a user by API token
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The user holding this token
    /// - `Ok(None)`: No user carries this token
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_api_token(
        &self,
        token: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(Column::ApiToken.eq(token))
            .one(self.db)
            .await
    }
}
