use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
};

pub enum Permission {
    Admin,
}

/// Resolves the `Authorization: Bearer` token on a request to a user and
/// checks the permissions a handler demands.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let token = self.bearer_token()?;

        let Some(user) = UserRepository::new(self.db)
            .find_by_api_token(token)
            .await?
        else {
            return Err(AuthError::InvalidToken.into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted an admin operation without admin rights".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }

    fn bearer_token(&self) -> Result<&'a str, AuthError> {
        let header = self
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?;

        let value = header.to_str().map_err(|_| AuthError::InvalidToken)?;

        value
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::InvalidToken)
    }
}
