//! Request extractors.

mod query;
mod validated_json;

pub use query::ApiQuery;
pub use validated_json::ValidatedJson;
