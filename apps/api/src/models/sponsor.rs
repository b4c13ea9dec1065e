use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SponsorRow {
    pub id: String,
    pub name: String,
    pub sector: String,
    /// Market code the sponsor is registered in, e.g. "FR", "UK".
    pub market: String,
    pub budget_range: String,
}
