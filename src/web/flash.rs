//! One-shot messages carried across a redirect in the session.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use super::WebError;

const FLASH_KEY: &str = "_flashes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

pub async fn push(
    session: &Session,
    level: FlashLevel,
    message: impl Into<String>,
) -> Result<(), WebError> {
    let mut pending: Vec<Flash> = session.get(FLASH_KEY).await?.unwrap_or_default();
    pending.push(Flash {
        level,
        message: message.into(),
    });
    session.insert(FLASH_KEY, pending).await?;
    Ok(())
}

pub async fn success(session: &Session, message: impl Into<String>) -> Result<(), WebError> {
    push(session, FlashLevel::Success, message).await
}

pub async fn error(session: &Session, message: impl Into<String>) -> Result<(), WebError> {
    push(session, FlashLevel::Error, message).await
}

/// Removes and returns every pending message.
pub async fn take(session: &Session) -> Result<Vec<Flash>, WebError> {
    Ok(session
        .remove::<Vec<Flash>>(FLASH_KEY)
        .await?
        .unwrap_or_default())
}
