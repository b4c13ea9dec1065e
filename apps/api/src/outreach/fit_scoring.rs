//! Fit Scoring: pluggable, trait-based scorer for an athlete/sponsor pair.
//!
//! Default: `HeuristicFitScorer` (fixed bonuses + bounded jitter).
//!
//! The numeric score and the explanations are independent outputs: the
//! explanations are fixed per locale and never derived from the score.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::outreach::locale::copy_for;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// One localized rationale line. Order in the list is display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitExplanation {
    pub feature: String,
    pub impact: f64,
    pub note: String,
}

/// The attributes the scorer looks at.
#[derive(Debug, Clone, Copy)]
pub struct FitInput<'a> {
    pub sector: &'a str,
    pub position: &'a str,
    pub market: &'a str,
    /// Only selects the explanation language.
    pub locale: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct FitReport {
    pub score: f64,
    pub explanations: Vec<FitExplanation>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching the assembler.
pub trait FitScorer: Send + Sync {
    fn score(&self, input: &FitInput<'_>, rng: &mut dyn RngCore) -> FitReport;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicFitScorer
// ────────────────────────────────────────────────────────────────────────────

const BASE_SCORE: f64 = 0.55;
const SECTOR_BONUS: f64 = 0.10;
const POSITION_BONUS: f64 = 0.05;
const MARKET_BONUS: f64 = 0.05;
const JITTER_MIN: f64 = -0.10;
const JITTER_MAX: f64 = 0.20;

const PREFERRED_SECTORS: &[&str] = &["automotive", "luxury", "sportswear"];
/// Point guard, shooting guard.
const PREFERRED_POSITIONS: &[&str] = &["PG", "SG"];
const PREFERRED_MARKETS: &[&str] = &["FR", "UK"];

/// Fixed-heuristic scorer. Not trained, not learned.
///
/// Algorithm:
/// 1. start at 0.55
/// 2. +0.10 preferred sector, +0.05 preferred position, +0.05 preferred market
/// 3. add uniform jitter in [-0.10, 0.20]
/// 4. clamp to [0, 1]
pub struct HeuristicFitScorer;

impl FitScorer for HeuristicFitScorer {
    fn score(&self, input: &FitInput<'_>, rng: &mut dyn RngCore) -> FitReport {
        let jitter = rng.gen_range(JITTER_MIN..=JITTER_MAX);
        let score = (base_score(input) + jitter).clamp(0.0, 1.0);

        FitReport {
            score,
            explanations: explanations_for(input.locale),
        }
    }
}

/// Score before jitter and clamping.
pub fn base_score(input: &FitInput<'_>) -> f64 {
    let sector = input.sector.trim().to_ascii_lowercase();
    let position = input.position.trim().to_ascii_uppercase();
    let market = input.market.trim().to_ascii_uppercase();

    let mut score = BASE_SCORE;
    if PREFERRED_SECTORS.contains(&sector.as_str()) {
        score += SECTOR_BONUS;
    }
    if PREFERRED_POSITIONS.contains(&position.as_str()) {
        score += POSITION_BONUS;
    }
    if PREFERRED_MARKETS.contains(&market.as_str()) {
        score += MARKET_BONUS;
    }
    score
}

pub fn explanations_for(locale: &str) -> Vec<FitExplanation> {
    copy_for(locale)
        .explanations
        .iter()
        .map(|e| FitExplanation {
            feature: e.feature.to_string(),
            impact: e.impact,
            note: e.note.to_string(),
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
