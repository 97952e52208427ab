use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard error payload returned by every failing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}
