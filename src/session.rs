use tower_sessions::Session;

use crate::AppResult;

pub const FLASHES: &str = "flashes";

/// Queues a message shown once on the next rendered page.
pub async fn flash(session: &Session, message: impl Into<String>) -> AppResult<()> {
    let mut flashes = session
        .get::<Vec<String>>(FLASHES)
        .await?
        .unwrap_or_default();
    flashes.push(message.into());
    session.insert(FLASHES, flashes).await?;
    Ok(())
}

pub async fn take_flashes(session: &Session) -> AppResult<Vec<String>> {
    Ok(session
        .remove::<Vec<String>>(FLASHES)
        .await?
        .unwrap_or_default())
}
