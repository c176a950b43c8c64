use anyhow::Context;
use reviews::config::AppConfig;
use reviews::database::init_db;
use reviews::{GigService, ReviewService, UserTable};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let config = AppConfig::load().context("Failed to load config")?;
    let db = init_db(&config.database)
        .await
        .context("Failed to initialize database")?;

    let gigs = GigService::new(&db);
    let users = UserTable::new(db.clone());
    let reviews = ReviewService::new(&db, &users);

    let gig_count = gigs.count().await?;
    let review_count = reviews.count().await?;
    info!(gigs = gig_count, reviews = review_count, "Store ready");

    Ok(())
}
