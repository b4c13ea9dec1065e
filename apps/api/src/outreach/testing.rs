//! Test doubles shared by the outreach test modules.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::athlete::AthleteRow;
use crate::models::document::DocumentRow;
use crate::models::sponsor::SponsorRow;
use crate::outreach::store::OutreachStore;

#[derive(Default)]
pub struct MemoryStore {
    pub athletes: Vec<AthleteRow>,
    pub sponsors: Vec<SponsorRow>,
    pub documents: Vec<DocumentRow>,
}

pub fn athlete(id: &str, name: &str, position: &str) -> AthleteRow {
    AthleteRow {
        id: id.to_string(),
        full_name: name.to_string(),
        country: "France".to_string(),
        position: position.to_string(),
        level: "pro".to_string(),
    }
}

pub fn sponsor(id: &str, name: &str, sector: &str, market: &str) -> SponsorRow {
    SponsorRow {
        id: id.to_string(),
        name: name.to_string(),
        sector: sector.to_string(),
        market: market.to_string(),
        budget_range: "15-50k".to_string(),
    }
}

pub fn document(id: &str, locale: &str, doc_type: &str, title: &str, text: &str) -> DocumentRow {
    DocumentRow {
        id: id.to_string(),
        locale: locale.to_string(),
        doc_type: Some(doc_type.to_string()),
        title: title.to_string(),
        text_content: text.to_string(),
    }
}

impl MemoryStore {
    /// Two athletes, two sponsors, seven English documents over five types and
    /// three French documents over two types.
    pub fn seeded() -> Self {
        Self {
            athletes: vec![
                athlete("ath_001", "Camille Laurent", "PG"),
                athlete("ath_002", "Jordan Hale", "C"),
            ],
            sponsors: vec![
                sponsor("sp_001", "Maison Arlette", "luxury", "FR"),
                sponsor("sp_002", "Ledgerly", "fintech", "UK"),
            ],
            documents: vec![
                document("doc_001", "en-GB", "outreach_guideline", "Premium outreach guidelines", "Keep claims measurable. Start with a 2-week pilot."),
                document("doc_002", "en-GB", "activation_template", "Drive-to-store activation template", "Structure: content day + hero reel + CTA stories."),
                document("doc_003", "en-GB", "outreach_guideline", "Premium outreach guidelines", "Anchor every statement in stats or past creative proof."),
                document("doc_004", "en-GB", "brand_safety_checklist", "Brand safety checklist (content approvals)", "Pre-approval: key messages, wardrobe, location."),
                document("doc_005", "en-GB", "bilingual_guideline", "Bilingual messaging guideline (EN/FR)", "Provide EN and FR versions."),
                document("doc_006", "en-GB", "negotiation_notes", "Negotiation notes: rights, whitelisting, usage", "Clarify usage rights before production."),
                document("doc_007", "en-GB", "activation_template", "Drive-to-store activation template", "Add tracking link/code. Report weekly."),
                document("doc_101", "fr-FR", "outreach_guideline", "Guide d’outreach premium", "Rester factuel. Commencer par un pilote court."),
                document("doc_102", "fr-FR", "negotiation_notes", "Notes de négo : droits, whitelisting, usages", "Clarifier droits d’usage avant production."),
                document("doc_103", "fr-FR", "outreach_guideline", "Guide d’outreach premium", "Ancrer chaque affirmation dans des preuves."),
            ],
        }
    }
}

#[async_trait]
impl OutreachStore for MemoryStore {
    async fn lookup_athlete(&self, id: &str) -> Result<Option<AthleteRow>, AppError> {
        Ok(self.athletes.iter().find(|a| a.id == id).cloned())
    }

    async fn lookup_sponsor(&self, id: &str) -> Result<Option<SponsorRow>, AppError> {
        Ok(self.sponsors.iter().find(|s| s.id == id).cloned())
    }

    async fn list_documents(
        &self,
        locale: &str,
        max_candidates: i64,
    ) -> Result<Vec<DocumentRow>, AppError> {
        Ok(self
            .documents
            .iter()
            .filter(|d| d.locale == locale)
            .take(max_candidates.max(0) as usize)
            .cloned()
            .collect())
    }
}

/// What a stub generator does when called.
pub enum StubReply {
    Text(String),
    Fail(u16),
    Hang,
}

/// Scripted `TextGenerator` that also counts its calls.
pub struct StubGenerator {
    reply: StubReply,
    pub calls: AtomicUsize,
}

impl StubGenerator {
    pub fn text(raw: &str) -> Self {
        Self {
            reply: StubReply::Text(raw.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            reply: StubReply::Fail(status),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn hanging() -> Self {
        Self {
            reply: StubReply::Hang,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            StubReply::Text(raw) => Ok(raw.clone()),
            StubReply::Fail(status) => Err(LlmError::Api {
                status: *status,
                message: "model unavailable".to_string(),
            }),
            StubReply::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(String::new())
            }
        }
    }
}
