//! Outreach Pack Assembly: orchestrates the full pack pipeline.
//!
//! Flow: resolve_pair → fit score + evidence selection → template pass →
//!       optional generative override → offer catalog → assembled pack.
//!
//! Packs are request-scoped: nothing is persisted.

use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::outreach::composer::{compose, EmailOutreach, TalkingPoint};
use crate::outreach::evidence::{select_evidence, EvidenceItem, DEFAULT_EVIDENCE_LIMIT};
use crate::outreach::fit_scoring::{FitExplanation, FitInput, FitScorer};
use crate::outreach::generative::{request_override, GenerationStrategy, OverrideOutcome};
use crate::outreach::locale::CopyFacts;
use crate::outreach::offer::{
    measurement_plan, offer_for_market, recommended_assets, MeasurementPlan, Offer,
    RecommendedAsset,
};
use crate::outreach::store::{resolve_pair, OutreachStore};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for pack generation.
#[derive(Debug, Clone, Deserialize)]
pub struct OutreachPackRequest {
    pub athlete_id: String,
    pub sponsor_id: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_market")]
    pub market: String,
    // Accepted for forward compatibility; does not change the pack.
    #[serde(default = "default_tone")]
    pub tone: String,
    // Accepted for forward compatibility; does not change the pack.
    #[serde(default = "default_channel")]
    pub channel: String,
}

fn default_locale() -> String {
    "en-GB".to_string()
}

fn default_market() -> String {
    "UK".to_string()
}

fn default_tone() -> String {
    "premium_warm".to_string()
}

fn default_channel() -> String {
    "email".to_string()
}

impl OutreachPackRequest {
    pub fn new(athlete_id: impl Into<String>, sponsor_id: impl Into<String>) -> Self {
        Self {
            athlete_id: athlete_id.into(),
            sponsor_id: sponsor_id.into(),
            locale: default_locale(),
            market: default_market(),
            tone: default_tone(),
            channel: default_channel(),
        }
    }
}

/// The assembled pack returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct OutreachPack {
    pub fit_score: f64,
    pub fit_explanations: Vec<FitExplanation>,
    pub talking_points: Vec<TalkingPoint>,
    pub email_outreach: EmailOutreach,
    pub one_pager_markdown: String,
    pub evidence: Vec<EvidenceItem>,
    pub offer: Offer,
    pub measurement_plan: MeasurementPlan,
    pub recommended_assets: Vec<RecommendedAsset>,
    pub locale: String,
    pub market: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Assembler
// ────────────────────────────────────────────────────────────────────────────

pub struct PackAssembler {
    store: Arc<dyn OutreachStore>,
    fit_scorer: Arc<dyn FitScorer>,
    strategy: GenerationStrategy,
    sender_name: String,
}

impl PackAssembler {
    pub fn new(
        store: Arc<dyn OutreachStore>,
        fit_scorer: Arc<dyn FitScorer>,
        strategy: GenerationStrategy,
        sender_name: impl Into<String>,
    ) -> Self {
        Self {
            store,
            fit_scorer,
            strategy,
            sender_name: sender_name.into(),
        }
    }

    pub fn strategy(&self) -> &GenerationStrategy {
        &self.strategy
    }

    /// Builds one pack.
    ///
    /// Fails only when an entity is unknown or the store errors; a failed
    /// generative override silently keeps the template copy.
    pub async fn build<R>(
        &self,
        request: &OutreachPackRequest,
        rng: &mut R,
    ) -> Result<OutreachPack, AppError>
    where
        R: Rng + Send,
    {
        if request.athlete_id.trim().is_empty() {
            return Err(AppError::Validation("athlete_id cannot be empty".to_string()));
        }
        if request.sponsor_id.trim().is_empty() {
            return Err(AppError::Validation("sponsor_id cannot be empty".to_string()));
        }

        // Step 1: both entities, or nothing
        let (athlete, sponsor) =
            resolve_pair(self.store.as_ref(), &request.athlete_id, &request.sponsor_id).await?;

        debug!(
            "Building pack for {} × {} (locale={}, market={}, tone={}, channel={})",
            athlete.id, sponsor.id, request.locale, request.market, request.tone, request.channel
        );

        // Step 2: fit score
        let fit = self.fit_scorer.score(
            &FitInput {
                sector: &sponsor.sector,
                position: &athlete.position,
                market: &request.market,
                locale: &request.locale,
            },
            rng,
        );

        // Step 3: evidence
        let evidence = select_evidence(
            self.store.as_ref(),
            &request.locale,
            DEFAULT_EVIDENCE_LIMIT,
            rng,
        )
        .await?;

        // Step 4: template pass (always)
        let facts = CopyFacts {
            athlete: &athlete,
            sponsor: &sponsor,
            evidence: &evidence,
            sender_name: &self.sender_name,
        };
        let composed = compose(&facts, &request.locale);
        let mut email_outreach = composed.email;
        let mut one_pager_markdown = composed.one_pager_markdown;

        // Step 5: optional override of email + one-pager only
        if let GenerationStrategy::Generative { generator, timeout } = &self.strategy {
            match request_override(generator.as_ref(), *timeout, &facts, &request.locale).await {
                OverrideOutcome::Accepted(generated) => {
                    info!("Generative override accepted for {} × {}", athlete.id, sponsor.id);
                    email_outreach = generated.email;
                    one_pager_markdown = generated.one_pager_markdown;
                }
                OverrideOutcome::Rejected(reason) => {
                    warn!(
                        "Generative override rejected for {} × {}, keeping template copy: {reason}",
                        athlete.id, sponsor.id
                    );
                }
            }
        }

        // Step 6: static catalog blocks
        let offer = offer_for_market(&request.market);

        info!(
            "Built pack for {} × {}: fit={:.2}, evidence={}, currency={:?}",
            athlete.id,
            sponsor.id,
            fit.score,
            evidence.len(),
            offer.currency
        );

        Ok(OutreachPack {
            fit_score: fit.score,
            fit_explanations: fit.explanations,
            talking_points: composed.talking_points,
            email_outreach,
            one_pager_markdown,
            evidence,
            offer,
            measurement_plan: measurement_plan(),
            recommended_assets: recommended_assets(),
            locale: request.locale.clone(),
            market: request.market.clone(),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::time::Duration;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::errors::EntityKind;
    use crate::llm_client::TextGenerator;
    use crate::outreach::fit_scoring::HeuristicFitScorer;
    use crate::outreach::offer::Currency;
    use crate::outreach::testing::{MemoryStore, StubGenerator};

    const GENERATED: &str = r#"{"subject": "LLM subject", "body": "LLM body", "one_pager_markdown": "LLM one-pager"}"#;

    fn assembler(strategy: GenerationStrategy) -> PackAssembler {
        PackAssembler::new(
            Arc::new(MemoryStore::seeded()),
            Arc::new(HeuristicFitScorer),
            strategy,
            "Daniel",
        )
    }

    fn generative(generator: Arc<dyn TextGenerator>) -> GenerationStrategy {
        GenerationStrategy::Generative {
            generator,
            timeout: Duration::from_secs(90),
        }
    }

    fn request(locale: &str, market: &str) -> OutreachPackRequest {
        OutreachPackRequest {
            locale: locale.to_string(),
            market: market.to_string(),
            ..OutreachPackRequest::new("ath_001", "sp_001")
        }
    }

    async fn build(
        assembler: &PackAssembler,
        request: &OutreachPackRequest,
        seed: u64,
    ) -> Result<OutreachPack, AppError> {
        assembler.build(request, &mut StdRng::seed_from_u64(seed)).await
    }

    #[tokio::test]
    async fn test_template_pack_is_complete() {
        let pack = build(&assembler(GenerationStrategy::TemplateOnly), &request("en-GB", "UK"), 1)
            .await
            .unwrap();

        assert!((0.0..=1.0).contains(&pack.fit_score));
        assert_eq!(pack.fit_explanations.len(), 3);
        assert_eq!(pack.talking_points.len(), 2);
        assert_eq!(pack.evidence.len(), 4);
        assert_eq!(pack.offer.currency, Currency::Gbp);
        assert_eq!(pack.recommended_assets.len(), 3);
        assert_eq!(pack.locale, "en-GB");
        assert_eq!(pack.market, "UK");
        assert!(pack.email_outreach.subject.contains("Maison Arlette × Camille Laurent"));
    }

    #[tokio::test]
    async fn test_pack_invariants_hold_across_seeds() {
        let assembler = assembler(GenerationStrategy::TemplateOnly);
        for seed in 0..30 {
            for locale in ["en-GB", "fr-FR"] {
                let pack = build(&assembler, &request(locale, "FR"), seed).await.unwrap();

                assert!((0.65 - 1e-9..=0.95 + 1e-9).contains(&pack.fit_score), "seed {seed}");
                assert!(pack.evidence.len() <= DEFAULT_EVIDENCE_LIMIT);

                let types: HashSet<&str> =
                    pack.evidence.iter().map(|e| e.doc_type.as_str()).collect();
                assert_eq!(types.len(), pack.evidence.len());

                let ids: HashSet<&str> = pack.evidence.iter().map(|e| e.id.as_str()).collect();
                for point in &pack.talking_points {
                    for id in &point.evidence_ids {
                        assert!(ids.contains(id.as_str()), "{id} cited but not selected");
                    }
                }
            }
        }
    }

    #[tokio::test]
    async fn test_french_locale_produces_french_pack() {
        let pack = build(&assembler(GenerationStrategy::TemplateOnly), &request("fr-FR", "FR"), 3)
            .await
            .unwrap();
        assert_eq!(pack.fit_explanations[0].feature, "alignement_narratif");
        assert!(pack.email_outreach.body.starts_with("Bonjour {Prénom},"));
        assert!(pack.one_pager_markdown.contains("## Preuves (internes)"));
        assert_eq!(pack.offer.currency, Currency::Eur);
    }

    #[tokio::test]
    async fn test_currency_follows_market_not_sponsor() {
        // sp_001 is registered in FR; the requested market decides.
        let pack = build(&assembler(GenerationStrategy::TemplateOnly), &request("en-GB", "UK"), 4)
            .await
            .unwrap();
        assert_eq!(pack.offer.currency, Currency::Gbp);

        let pack = build(&assembler(GenerationStrategy::TemplateOnly), &request("en-GB", "US"), 4)
            .await
            .unwrap();
        assert_eq!(pack.offer.currency, Currency::Eur);
    }

    #[tokio::test]
    async fn test_unknown_athlete_aborts() {
        let req = OutreachPackRequest::new("ath_999", "sp_001");
        let err = build(&assembler(GenerationStrategy::TemplateOnly), &req, 1)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::UnknownEntity { kind: EntityKind::Athlete, ref id } if id == "ath_999"
        ));
    }

    #[tokio::test]
    async fn test_unknown_sponsor_aborts_before_override() {
        let generator = Arc::new(StubGenerator::text(GENERATED));
        let assembler = assembler(generative(generator.clone()));
        let req = OutreachPackRequest::new("ath_001", "sp_999");
        let err = build(&assembler, &req, 1).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::UnknownEntity { kind: EntityKind::Sponsor, .. }
        ));
        assert_eq!(generator.call_count(), 0);
    }

    #[tokio::test]
    async fn test_blank_ids_are_validation_errors() {
        let req = OutreachPackRequest::new("  ", "sp_001");
        let err = build(&assembler(GenerationStrategy::TemplateOnly), &req, 1)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_non_json_override_falls_back_to_identical_template_copy() {
        let req = request("en-GB", "UK");
        let template = build(&assembler(GenerationStrategy::TemplateOnly), &req, 9)
            .await
            .unwrap();

        let generator = Arc::new(StubGenerator::text("I'm sorry, I can't produce JSON today."));
        let fallback = build(&assembler(generative(generator.clone())), &req, 9)
            .await
            .unwrap();

        assert_eq!(generator.call_count(), 1);
        assert_eq!(fallback.email_outreach, template.email_outreach);
        assert_eq!(fallback.one_pager_markdown, template.one_pager_markdown);
        assert_eq!(fallback.evidence, template.evidence);
        assert_eq!(fallback.fit_score, template.fit_score);
    }

    #[tokio::test]
    async fn test_failing_generator_falls_back() {
        let req = request("fr-FR", "FR");
        let template = build(&assembler(GenerationStrategy::TemplateOnly), &req, 2)
            .await
            .unwrap();
        let fallback = build(&assembler(generative(Arc::new(StubGenerator::failing(500)))), &req, 2)
            .await
            .unwrap();
        assert_eq!(fallback.email_outreach, template.email_outreach);
        assert_eq!(fallback.one_pager_markdown, template.one_pager_markdown);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hanging_generator_times_out_and_falls_back() {
        let req = request("en-GB", "UK");
        let template = build(&assembler(GenerationStrategy::TemplateOnly), &req, 6)
            .await
            .unwrap();
        let fallback = build(&assembler(generative(Arc::new(StubGenerator::hanging()))), &req, 6)
            .await
            .unwrap();
        assert_eq!(fallback.email_outreach, template.email_outreach);
    }

    #[tokio::test]
    async fn test_accepted_override_replaces_only_email_and_one_pager() {
        let req = request("en-GB", "UK");
        let template = build(&assembler(GenerationStrategy::TemplateOnly), &req, 8)
            .await
            .unwrap();
        let generated = build(
            &assembler(generative(Arc::new(StubGenerator::text(GENERATED)))),
            &req,
            8,
        )
        .await
        .unwrap();

        assert_eq!(generated.email_outreach.subject, "LLM subject");
        assert_eq!(generated.email_outreach.body, "LLM body");
        assert_eq!(generated.one_pager_markdown, "LLM one-pager");

        assert_eq!(generated.fit_score, template.fit_score);
        assert_eq!(generated.fit_explanations, template.fit_explanations);
        assert_eq!(generated.evidence, template.evidence);
        assert_eq!(generated.talking_points, template.talking_points);
        assert_eq!(generated.offer, template.offer);
        assert_eq!(generated.measurement_plan, template.measurement_plan);
        assert_eq!(generated.recommended_assets, template.recommended_assets);
    }

    #[test]
    fn test_request_defaults() {
        let req: OutreachPackRequest =
            serde_json::from_str(r#"{"athlete_id": "ath_001", "sponsor_id": "sp_001"}"#).unwrap();
        assert_eq!(req.locale, "en-GB");
        assert_eq!(req.market, "UK");
        assert_eq!(req.tone, "premium_warm");
        assert_eq!(req.channel, "email");
    }

    #[test]
    fn test_request_requires_ids() {
        let result: Result<OutreachPackRequest, _> =
            serde_json::from_str(r#"{"athlete_id": "ath_001"}"#);
        assert!(result.is_err());
    }
}
