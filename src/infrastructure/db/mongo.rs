use mongodb::{bson::doc, Client, Database};
use tracing::info;
use std::time::Duration;

/// Connects to MongoDB and verifies the server is reachable before
/// handing the database out. The handle is created once at startup and
/// injected into the application state; nothing else holds a connection.
pub async fn connect(database_url: &str, database_name: &str) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(database_url).await?;
    let db = client.database(database_name);

    let max_retries = 5;
    let mut retry_count = 0;
    let mut wait_seconds = 2;

    loop {
        match db.run_command(doc! {"ping": 1}).await {
            Ok(_) => {
                info!("Database connection established.");
                return Ok(db);
            }
            Err(e) if retry_count < max_retries => {
                retry_count += 1;
                info!(
                    "Failed to reach database (attempt {}/{}): {}. Retrying in {}s...",
                    retry_count, max_retries, e, wait_seconds);

                tokio::time::sleep(Duration::from_secs(wait_seconds)).await;

                wait_seconds *= 2; // Exponential backoff
            }
            Err(e) => return Err(e),
        }
    }
}
