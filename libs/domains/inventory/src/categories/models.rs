use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::validate_not_blank;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Payload for both create and update
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CategoryRequest {
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "Tools")]
    pub name: String,
}

impl CategoryRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
