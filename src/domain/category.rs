use serde::Serialize;
use utoipa::ToSchema;

/// FAQ category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Category {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Shipping")]
    pub name: String,
}
