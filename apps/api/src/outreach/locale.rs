//! Locale copy registry.
//!
//! Every piece of locale-dependent text lives in one `LocaleCopy` bundle.
//! Bundles are matched by locale prefix (`"fr"` matches `fr-FR`, `fr-CA`, ...);
//! unmatched locales get `ENGLISH`. Adding a language means adding a bundle
//! to `REGISTRY`.

use crate::models::athlete::AthleteRow;
use crate::models::sponsor::SponsorRow;
use crate::outreach::evidence::EvidenceItem;

/// Facts every template may embed.
pub struct CopyFacts<'a> {
    pub athlete: &'a AthleteRow,
    pub sponsor: &'a SponsorRow,
    pub evidence: &'a [EvidenceItem],
    pub sender_name: &'a str,
}

pub struct ExplanationCopy {
    pub feature: &'static str,
    pub impact: f64,
    pub note: &'static str,
}

pub struct LocaleCopy {
    /// Lower-case locale prefix this bundle answers to.
    pub prefix: &'static str,
    pub explanations: &'static [ExplanationCopy],
    pub subject: fn(&CopyFacts<'_>) -> String,
    pub body: fn(&CopyFacts<'_>) -> String,
    pub one_pager: fn(&CopyFacts<'_>) -> String,
    /// Claims for the two talking points, in order.
    pub claims: [&'static str; 2],
    /// Tone guidance handed to the generative override.
    pub style_hint: &'static str,
}

static REGISTRY: &[&LocaleCopy] = &[&FRENCH];

/// Resolves the copy bundle for a locale tag such as `en-GB` or `fr-FR`.
pub fn copy_for(locale: &str) -> &'static LocaleCopy {
    let locale = locale.trim().to_ascii_lowercase();
    REGISTRY
        .iter()
        .copied()
        .find(|copy| locale.starts_with(copy.prefix))
        .unwrap_or(&ENGLISH)
}

fn evidence_bullets(evidence: &[EvidenceItem]) -> String {
    evidence
        .iter()
        .map(|e| format!("- {} (id: {})", e.title, e.id))
        .collect::<Vec<_>>()
        .join("\n")
}

// ────────────────────────────────────────────────────────────────────────────
// English (default)
// ────────────────────────────────────────────────────────────────────────────

pub static ENGLISH: LocaleCopy = LocaleCopy {
    prefix: "en",
    explanations: &[
        ExplanationCopy {
            feature: "narrative_match",
            impact: 0.18,
            note: "Performance mindset aligns with brand positioning.",
        },
        ExplanationCopy {
            feature: "audience_affinity",
            impact: 0.15,
            note: "Audience interest overlaps with sponsor category.",
        },
        ExplanationCopy {
            feature: "timing",
            impact: 0.11,
            note: "Short pilot fits current momentum window.",
        },
    ],
    subject: english_subject,
    body: english_body,
    one_pager: english_one_pager,
    claims: [
        "Low-friction, measurable 2-week pilot tailored to sponsor objectives.",
        "Premium storytelling aligned with athlete momentum and brand positioning.",
    ],
    style_hint: "UK business tone. Clear, concise, premium. No exaggeration.",
};

fn english_subject(f: &CopyFacts<'_>) -> String {
    format!(
        "Partnership idea: {} × {} (2-week measurable pilot)",
        f.sponsor.name, f.athlete.full_name
    )
}

fn english_body(f: &CopyFacts<'_>) -> String {
    format!(
        "Hi {{FirstName}},\n\n\
         I’m reaching out with a focused partnership idea designed to be low-friction \
         and measurable for {sponsor}.\n\n\
         {athlete} is in a strong momentum window, and the narrative \
         aligns with your positioning: precision, discipline, premium experience.\n\n\
         2-week pilot:\n\
         1) Content day (short-form + behind-the-scenes)\n\
         2) 1 Hero Reel (30–45s)\n\
         3) Story sequence + CTA (unique link/code)\n\n\
         If you tell me whether your priority is awareness or drive-to-store, \
         I’ll tailor the plan accordingly.\n\n\
         Open to a quick 15-minute call next week?\n\n\
         Best,\n\
         {sender}\n",
        sponsor = f.sponsor.name,
        athlete = f.athlete.full_name,
        sender = f.sender_name,
    )
}

fn english_one_pager(f: &CopyFacts<'_>) -> String {
    format!(
        "# Partnership Pilot — {sponsor} × {athlete}\n\n\
         ## Objective\n\
         Launch a premium, local activation over 2 weeks with measurable outcomes.\n\n\
         ## Why this fit\n\
         - Narrative match (performance mindset)\n\
         - Audience affinity\n\
         - Low-friction pilot structure\n\n\
         ## Proposed Activation (2 weeks)\n\
         1. Content day + teaser\n\
         2. Hero Reel + CTA story sequence\n\n\
         ## Deliverables\n\
         - 1 Hero Reel (30–45s)\n\
         - 4 short clips (10–15s)\n\
         - 6 CTA stories\n\n\
         ## Measurement (KPIs)\n\
         - Reach, Saves, CTR, qualified actions (code/link)\n\n\
         ## Internal Evidence\n\
         {evidence}\n",
        sponsor = f.sponsor.name,
        athlete = f.athlete.full_name,
        evidence = evidence_bullets(f.evidence),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// French
// ────────────────────────────────────────────────────────────────────────────

pub static FRENCH: LocaleCopy = LocaleCopy {
    prefix: "fr",
    explanations: &[
        ExplanationCopy {
            feature: "alignement_narratif",
            impact: 0.18,
            note: "Le mindset performance s’aligne avec le positionnement de la marque.",
        },
        ExplanationCopy {
            feature: "affinite_audience",
            impact: 0.15,
            note: "Affinité entre l’audience et la catégorie sponsor.",
        },
        ExplanationCopy {
            feature: "timing",
            impact: 0.11,
            note: "Le format pilote court colle à la fenêtre de momentum.",
        },
    ],
    subject: french_subject,
    body: french_body,
    one_pager: french_one_pager,
    claims: [
        "Activation premium locale, faible friction, mesurable.",
        "Narratif performance & précision cohérent avec la marque.",
    ],
    style_hint: "French business tone. Short, confident, measurable. No exaggeration.",
};

fn french_subject(f: &CopyFacts<'_>) -> String {
    format!(
        "Proposition de partenariat : {} × {} (pilote 2 semaines)",
        f.sponsor.name, f.athlete.full_name
    )
}

fn french_body(f: &CopyFacts<'_>) -> String {
    format!(
        "Bonjour {{Prénom}},\n\n\
         Je vous contacte avec une proposition de partenariat simple à activer et \
         mesurable pour {sponsor}.\n\n\
         {athlete} traverse une période de dynamique intéressante, et \
         l’angle « performance & précision » s’aligne avec votre positionnement.\n\n\
         Pilote sur 2 semaines :\n\
         1) Journée de contenu (formats courts + coulisses)\n\
         2) 1 vidéo principale (30–45s)\n\
         3) Stories avec CTA (lien/code unique)\n\n\
         Je peux adapter la proposition selon votre objectif \
         (notoriété vs drive-to-store).\n\n\
         Seriez-vous disponible pour un échange de 15 minutes la semaine prochaine ?\n\n\
         Bien cordialement,\n\
         {sender}\n",
        sponsor = f.sponsor.name,
        athlete = f.athlete.full_name,
        sender = f.sender_name,
    )
}

fn french_one_pager(f: &CopyFacts<'_>) -> String {
    format!(
        "# Pilote Partenariat — {sponsor} × {athlete}\n\n\
         ## Objectif\n\
         Lancer une activation premium locale sur 2 semaines, orientée résultats.\n\n\
         ## Pourquoi ce fit\n\
         - Alignement narratif (discipline, performance)\n\
         - Affinité audience\n\
         - Structure pilote faible friction\n\n\
         ## Activation proposée (2 semaines)\n\
         1. Journée de contenu + teaser\n\
         2. Vidéo principale + séquence stories avec CTA\n\n\
         ## Livrables\n\
         - 1 vidéo principale (30–45s)\n\
         - 4 clips (10–15s)\n\
         - 6 stories avec CTA\n\n\
         ## Mesure (KPIs)\n\
         - Reach, Saves, CTR, actions qualifiées (code/lien)\n\n\
         ## Preuves (internes)\n\
         {evidence}\n",
        sponsor = f.sponsor.name,
        athlete = f.athlete.full_name,
        evidence = evidence_bullets(f.evidence),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fr_prefix_resolves_french() {
        assert_eq!(copy_for("fr-FR").prefix, "fr");
        assert_eq!(copy_for("FR-ca").prefix, "fr");
    }

    #[test]
    fn test_unknown_locale_falls_back_to_english() {
        assert_eq!(copy_for("de-DE").prefix, "en");
        assert_eq!(copy_for("").prefix, "en");
        assert_eq!(copy_for("en-GB").prefix, "en");
    }

    #[test]
    fn test_every_bundle_has_three_explanations() {
        for copy in REGISTRY.iter().copied().chain(std::iter::once(&ENGLISH)) {
            assert_eq!(copy.explanations.len(), 3, "locale {}", copy.prefix);
        }
    }
}
