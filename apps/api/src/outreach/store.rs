//! Read-only access to athletes, sponsors and evidence documents.
//!
//! The engine never writes. `PgOutreachStore` is the production backend;
//! tests use the in-memory store from `outreach::testing`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::models::athlete::AthleteRow;
use crate::models::document::DocumentRow;
use crate::models::sponsor::SponsorRow;

#[async_trait]
pub trait OutreachStore: Send + Sync {
    async fn lookup_athlete(&self, id: &str) -> Result<Option<AthleteRow>, AppError>;

    async fn lookup_sponsor(&self, id: &str) -> Result<Option<SponsorRow>, AppError>;

    /// Up to `max_candidates` documents for `locale`, in no guaranteed order.
    async fn list_documents(
        &self,
        locale: &str,
        max_candidates: i64,
    ) -> Result<Vec<DocumentRow>, AppError>;
}

/// PostgreSQL-backed store. Each query borrows a pooled connection for its
/// own duration only.
#[derive(Clone)]
pub struct PgOutreachStore {
    pool: PgPool,
}

impl PgOutreachStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OutreachStore for PgOutreachStore {
    async fn lookup_athlete(&self, id: &str) -> Result<Option<AthleteRow>, AppError> {
        let row = sqlx::query_as::<_, AthleteRow>(
            "SELECT id, full_name, country, position, level FROM athletes WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn lookup_sponsor(&self, id: &str) -> Result<Option<SponsorRow>, AppError> {
        let row = sqlx::query_as::<_, SponsorRow>(
            "SELECT id, name, sector, market, budget_range FROM sponsors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_documents(
        &self,
        locale: &str,
        max_candidates: i64,
    ) -> Result<Vec<DocumentRow>, AppError> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, locale, doc_type, title, text_content
            FROM documents
            WHERE locale = $1
            ORDER BY random()
            LIMIT $2
            "#,
        )
        .bind(locale)
        .bind(max_candidates)
        .fetch_all(&self.pool)
        .await?;
        debug!("Fetched {} candidate documents for locale {locale}", rows.len());
        Ok(rows)
    }
}

/// Resolves both sides of the pair. Both lookups run concurrently; the
/// athlete is reported first when both are missing.
pub async fn resolve_pair(
    store: &dyn OutreachStore,
    athlete_id: &str,
    sponsor_id: &str,
) -> Result<(AthleteRow, SponsorRow), AppError> {
    let (athlete, sponsor) = tokio::try_join!(
        store.lookup_athlete(athlete_id),
        store.lookup_sponsor(sponsor_id)
    )?;

    let athlete = athlete.ok_or_else(|| AppError::unknown_athlete(athlete_id))?;
    let sponsor = sponsor.ok_or_else(|| AppError::unknown_sponsor(sponsor_id))?;
    Ok((athlete, sponsor))
}
