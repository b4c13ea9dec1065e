use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AthleteRow {
    pub id: String,
    pub full_name: String,
    pub country: String,
    /// Playing position code, e.g. "PG", "SG", "C".
    pub position: String,
    pub level: String,
}
