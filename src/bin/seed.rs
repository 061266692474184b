/**
 * Seed Binary
 *
 * Drops and recreates every table in `DATABASE_URL`, then loads the
 * embedded sample users, events and posts. All sample users share the
 * password `password123`.
 */

use neighborly::backend::auth::PasswordHasher;
use neighborly::backend::seed::{seed, Fixtures};
use neighborly::backend::server::ServerConfig;
use neighborly::backend::store::SqliteStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let store = SqliteStore::connect(&config.database_url).await?;
    store.reset_schema().await?;

    let fixtures = Fixtures::embedded()?;
    let report = seed(&store, PasswordHasher::new(config.bcrypt_cost), &fixtures).await?;

    println!(
        "Data seeded successfully: {} users, {} events, {} posts",
        report.users, report.events, report.posts
    );
    Ok(())
}
