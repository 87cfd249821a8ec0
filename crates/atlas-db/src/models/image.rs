//! Image database model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for images table
#[derive(Debug, Clone, FromRow)]
pub struct ImageModel {
    pub id: i64,
    pub user_id: Option<i64>,
    pub place_id: i64,
    pub image_path: String,
    pub description: Option<String>,
    pub trust_score: Decimal,
    pub created_at: DateTime<Utc>,
}
