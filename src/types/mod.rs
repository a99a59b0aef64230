//! Shared types for list endpoints and the response envelope.

mod pagination;
mod response;

pub use pagination::{PageRequest, Paginated, PaginationMeta, PaginationParams, SortDirection};
pub use response::{ApiResponse, Created, NoContent};
