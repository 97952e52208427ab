//! User factory for creating test user entities.
//!
//! Provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .verified(true)
///     .with_payment_method(true)
///     .admin(false)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    name: String,
    api_token: String,
    admin: bool,
    verified: bool,
    has_payment_method: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - name: `"User {id}"`
    /// - api_token: `"token-{id}"`
    /// - admin: `false`
    /// - verified: `false` (no `id_verified_at`)
    /// - has_payment_method: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            name: format!("User {}", id),
            api_token: format!("token-{}", id),
            admin: false,
            verified: false,
            has_payment_method: false,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn api_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = api_token.into();
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Marks the user's identity as verified (sets `id_verified_at`).
    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    pub fn with_payment_method(mut self, has_payment_method: bool) -> Self {
        self.has_payment_method = has_payment_method;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            api_token: ActiveValue::Set(self.api_token),
            admin: ActiveValue::Set(self.admin),
            id_verified_at: ActiveValue::Set(self.verified.then_some(now)),
            has_payment_method: ActiveValue::Set(self.has_payment_method),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a bid-eligible user: identity verified with a payment method on
/// file.
///
/// # Example
///
/// ```rust,ignore
/// let bidder = create_bidder(&db).await?;
/// assert!(bidder.can_bid());
/// ```
pub async fn create_bidder(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db)
        .verified(true)
        .with_payment_method(true)
        .build()
        .await
}
