//! Offer Catalog: static commercial blocks for the pack.
//!
//! Pure lookups. Currency depends on market only; everything else is fixed.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Gbp,
    Eur,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferPackage {
    pub name: String,
    pub deliverables: Vec<String>,
    pub price_range: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub currency: Currency,
    pub packages: Vec<OfferPackage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementPlan {
    pub primary_kpis: Vec<String>,
    pub tracking_method: String,
    pub reporting: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedAsset {
    pub asset_type: String,
    pub title: String,
    pub why: String,
}

/// `UK` → GBP, `FR` → EUR, anything else → EUR.
pub fn currency_for_market(market: &str) -> Currency {
    match market.trim().to_ascii_uppercase().as_str() {
        "UK" => Currency::Gbp,
        "FR" => Currency::Eur,
        _ => Currency::Eur,
    }
}

type Tier = (&'static str, &'static [&'static str], &'static str);

const EUR_TIERS: [Tier; 3] = [
    ("Starter", &["1 Reel (30–45s)", "3 clips (10–15s)", "4 stories CTA"], "15–25k EUR"),
    ("Standard", &["1 Reel (30–45s)", "5 clips (10–15s)", "6 stories CTA"], "25–45k EUR"),
    ("Premium", &["2 Reels", "8 clips", "10 stories CTA", "1 appearance"], "45–80k EUR"),
];

const GBP_TIERS: [Tier; 3] = [
    ("Starter", &["1 Reel (30–45s)", "3 clips (10–15s)", "4 CTA stories"], "12–20k GBP"),
    ("Standard", &["1 Reel (30–45s)", "5 clips (10–15s)", "6 CTA stories"], "20–40k GBP"),
    ("Premium", &["2 Reels", "8 clips", "10 CTA stories", "1 appearance"], "40–70k GBP"),
];

pub fn offer_for_market(market: &str) -> Offer {
    let currency = currency_for_market(market);
    let tiers = match currency {
        Currency::Eur => &EUR_TIERS,
        Currency::Gbp => &GBP_TIERS,
    };

    Offer {
        currency,
        packages: tiers
            .iter()
            .map(|(name, deliverables, price_range)| OfferPackage {
                name: name.to_string(),
                deliverables: deliverables.iter().map(|d| d.to_string()).collect(),
                price_range: price_range.to_string(),
            })
            .collect(),
    }
}

pub fn measurement_plan() -> MeasurementPlan {
    MeasurementPlan {
        primary_kpis: ["Reach", "Saves", "CTR", "Qualified actions (code/link)"]
            .iter()
            .map(|k| k.to_string())
            .collect(),
        tracking_method: "Unique tracking link + code, weekly snapshot export".to_string(),
        reporting: "Weekly report + end-of-pilot summary with learnings".to_string(),
    }
}

pub fn recommended_assets() -> Vec<RecommendedAsset> {
    [
        ("reel_reference", "Premium hero reel reference", "Matches sector + premium tone."),
        ("story_sequence", "CTA story structure", "Optimized for measurable actions."),
        ("bts_pack", "Behind-the-scenes content pack", "Authenticity + engagement uplift."),
    ]
    .iter()
    .map(|(asset_type, title, why)| RecommendedAsset {
        asset_type: asset_type.to_string(),
        title: title.to_string(),
        why: why.to_string(),
    })
    .collect()
}
