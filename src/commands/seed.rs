//! Seed command - Creates initial data.

use std::sync::Arc;

use crate::cli::args::{SeedArgs, SeedTarget};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Database, Persistence};
use crate::services::{AuthService, Authenticator};

/// Execute the seed command
pub async fn execute(args: SeedArgs, config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    let auth = Authenticator::new(Arc::new(Persistence::new(db.get_connection())), config);

    match args.target {
        SeedTarget::Admin {
            name,
            email,
            password,
        } => {
            let admin = auth.provision_admin(name, email, password).await?;
            println!("Admin created: {} (id {})", admin.email, admin.id);
        }
    }

    Ok(())
}
