//! Review database model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for reviews table
#[derive(Debug, Clone, FromRow)]
pub struct ReviewModel {
    pub id: i64,
    pub user_id: Option<i64>,
    pub place_id: i64,
    pub rating: i32,
    pub text: Option<String>,
    pub trust_score: Decimal,
    pub created_at: DateTime<Utc>,
}
