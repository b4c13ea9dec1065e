//! Content Composer: the deterministic template pass.
//!
//! Always runs. Its output is what the pack falls back to whenever the
//! generative override is disabled or rejected.

use serde::{Deserialize, Serialize};

use crate::outreach::locale::{copy_for, CopyFacts};

/// Evidence ids `[0, TALKING_POINT_SPLIT)` back the first talking point,
/// the remainder back the second.
const TALKING_POINT_SPLIT: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailOutreach {
    pub subject: String,
    /// Plain text. Contains a first-name placeholder for the recipient.
    pub body: String,
}

/// A claim plus the ids of the selected evidence that back it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TalkingPoint {
    pub claim: String,
    pub evidence_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComposedCopy {
    pub email: EmailOutreach,
    pub one_pager_markdown: String,
    pub talking_points: Vec<TalkingPoint>,
}

pub fn compose(facts: &CopyFacts<'_>, locale: &str) -> ComposedCopy {
    let copy = copy_for(locale);

    let email = EmailOutreach {
        subject: (copy.subject)(facts),
        body: (copy.body)(facts),
    };
    let one_pager_markdown = (copy.one_pager)(facts);

    let evidence_ids: Vec<String> = facts.evidence.iter().map(|e| e.id.clone()).collect();
    let split = TALKING_POINT_SPLIT.min(evidence_ids.len());
    let (first, rest) = evidence_ids.split_at(split);

    let talking_points = vec![
        TalkingPoint {
            claim: copy.claims[0].to_string(),
            evidence_ids: first.to_vec(),
        },
        TalkingPoint {
            claim: copy.claims[1].to_string(),
            evidence_ids: rest.to_vec(),
        },
    ];

    ComposedCopy {
        email,
        one_pager_markdown,
        talking_points,
    }
}
