//! Place database model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for places table
#[derive(Debug, Clone, FromRow)]
pub struct PlaceModel {
    pub id: i64,
    pub user_id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub application: Option<String>,
    pub trust_score: Decimal,
    pub created_at: DateTime<Utc>,
}
