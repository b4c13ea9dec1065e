//! Evidence Selector: picks a small, type-diverse set of internal documents
//! to cite in the pack.
//!
//! No LLM calls. The candidate order comes from the injected random source so
//! tests can pin it.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::models::document::DocumentRow;
use crate::outreach::store::OutreachStore;

/// Default number of evidence items per pack.
pub const DEFAULT_EVIDENCE_LIMIT: usize = 4;
/// How many candidates are drawn from the store before deduplication.
pub const MAX_CANDIDATES: i64 = 80;
/// Snippet length, in characters.
pub const SNIPPET_CHARS: usize = 180;

/// A selected document, as cited in the pack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub id: String,
    pub title: String,
    pub snippet: String,
    pub doc_type: String,
}

/// Draws candidates for `locale`, shuffles them with `rng`, and keeps the
/// first document of each type until `limit` items are collected.
pub async fn select_evidence<R>(
    store: &dyn OutreachStore,
    locale: &str,
    limit: usize,
    rng: &mut R,
) -> Result<Vec<EvidenceItem>, AppError>
where
    R: Rng + Send,
{
    let mut candidates = store.list_documents(locale, MAX_CANDIDATES).await?;
    candidates.shuffle(rng);

    let selected = pick_diverse(candidates, limit);
    debug!(
        "Selected {} evidence items for locale {locale} (limit {limit})",
        selected.len()
    );
    Ok(selected)
}

/// Scans `candidates` in order, accepting a document only if its type tag
/// has not been accepted yet. Stops at `limit`.
pub fn pick_diverse(candidates: Vec<DocumentRow>, limit: usize) -> Vec<EvidenceItem> {
    let mut seen_types: HashSet<String> = HashSet::new();
    let mut selected = Vec::new();

    for doc in candidates {
        if selected.len() >= limit {
            break;
        }
        if !seen_types.insert(doc.type_tag().to_string()) {
            continue;
        }
        selected.push(EvidenceItem {
            snippet: snippet(&doc.text_content),
            doc_type: doc.type_tag().to_string(),
            id: doc.id,
            title: doc.title,
        });
    }

    selected
}

/// First `SNIPPET_CHARS` characters, trimmed. Never splits a code point.
pub fn snippet(text: &str) -> String {
    let cut = text
        .char_indices()
        .nth(SNIPPET_CHARS)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    text[..cut].trim().to_string()
}
