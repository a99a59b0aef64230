//! FAQ Catalog - multi-tenant FAQ service.
//!
//! Admins publish global FAQs, merchants publish FAQs for their own store,
//! customers read global FAQs. Each FAQ carries one translation per
//! language and stores expose a public, localized FAQ page.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entities, access policy, translation reconciliation and fallback
//! - **services**: Application use cases
//! - **infra**: Database, migrations, repositories and Unit of Work
//! - **api**: HTTP handlers, middleware, and routes
//! - **types**: Shared types (pagination, responses)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Create the first admin
//! cargo run -- seed admin --email admin@example.com
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Identity, Role};
pub use errors::{AppError, AppResult};
