//! Generative Override: optional LLM rewrite of the email and one-pager.
//!
//! The outcome is always a value, never an error: either the model produced
//! three usable text fields (`Accepted`) or it did not (`Rejected`, with the
//! reason). Callers keep the template copy on rejection.

use std::sync::Arc;
use std::time::Duration;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::llm_client::prompts::GROUNDING_INSTRUCTION;
use crate::llm_client::{strip_json_fences, LlmError, TextGenerator};
use crate::outreach::composer::EmailOutreach;
use crate::outreach::locale::{copy_for, CopyFacts};
use crate::outreach::prompts::OVERRIDE_PROMPT_TEMPLATE;

pub const REQUIRED_KEYS: [&str; 3] = ["subject", "body", "one_pager_markdown"];

/// Replacement copy produced by the model.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCopy {
    pub email: EmailOutreach,
    pub one_pager_markdown: String,
}

/// Why the model output was discarded.
#[derive(Debug, Error)]
pub enum OverrideRejection {
    #[error("generator failed: {0}")]
    Generator(#[from] LlmError),

    #[error("generator timed out after {0:?}")]
    Timeout(Duration),

    #[error("generator returned an empty response")]
    Empty,

    #[error("response is not valid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("response JSON is not an object")]
    NotAnObject,

    #[error("response is missing key '{0}'")]
    MissingKey(&'static str),

    #[error("key '{0}' is not coercible to text")]
    WrongType(&'static str),
}

#[derive(Debug)]
pub enum OverrideOutcome {
    Accepted(GeneratedCopy),
    Rejected(OverrideRejection),
}

/// Chosen at assembler construction time from `GENERATION_MODE`.
#[derive(Clone)]
pub enum GenerationStrategy {
    TemplateOnly,
    Generative {
        generator: Arc<dyn TextGenerator>,
        timeout: Duration,
    },
}

impl GenerationStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            GenerationStrategy::TemplateOnly => "template",
            GenerationStrategy::Generative { .. } => "llm",
        }
    }
}

/// Asks the generator for replacement copy and validates the reply.
pub async fn request_override(
    generator: &dyn TextGenerator,
    timeout: Duration,
    facts: &CopyFacts<'_>,
    locale: &str,
) -> OverrideOutcome {
    let prompt = build_override_prompt(facts, locale);

    let raw = match tokio::time::timeout(timeout, generator.generate(&prompt)).await {
        Err(_) => return OverrideOutcome::Rejected(OverrideRejection::Timeout(timeout)),
        Ok(Err(e)) => return OverrideOutcome::Rejected(OverrideRejection::Generator(e)),
        Ok(Ok(raw)) => raw,
    };

    match parse_generated_copy(&raw) {
        Ok(copy) => OverrideOutcome::Accepted(copy),
        Err(rejection) => OverrideOutcome::Rejected(rejection),
    }
}

/// Validates raw model text: a JSON object holding the three required keys,
/// each a string, number or boolean.
pub fn parse_generated_copy(raw: &str) -> Result<GeneratedCopy, OverrideRejection> {
    let text = strip_json_fences(raw);
    if text.is_empty() {
        return Err(OverrideRejection::Empty);
    }

    let value: Value = serde_json::from_str(text).map_err(OverrideRejection::MalformedJson)?;
    let object = value.as_object().ok_or(OverrideRejection::NotAnObject)?;

    let subject = text_field(object, REQUIRED_KEYS[0])?;
    let body = text_field(object, REQUIRED_KEYS[1])?;
    let one_pager_markdown = text_field(object, REQUIRED_KEYS[2])?;

    Ok(GeneratedCopy {
        email: EmailOutreach { subject, body },
        one_pager_markdown,
    })
}

fn text_field(object: &Map<String, Value>, key: &'static str) -> Result<String, OverrideRejection> {
    match object.get(key) {
        None => Err(OverrideRejection::MissingKey(key)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(_) => Err(OverrideRejection::WrongType(key)),
    }
}

pub fn build_override_prompt(facts: &CopyFacts<'_>, locale: &str) -> String {
    let athlete = facts.athlete;
    let sponsor = facts.sponsor;

    let athlete_block = format!(
        "- name: {}\n- position: {}\n- level: {}\n- country: {}",
        athlete.full_name, athlete.position, athlete.level, athlete.country
    );
    let sponsor_block = format!(
        "- name: {}\n- sector: {}\n- market: {}\n- budget_range: {}",
        sponsor.name, sponsor.sector, sponsor.market, sponsor.budget_range
    );
    let evidence_block = if facts.evidence.is_empty() {
        "- (none)".to_string()
    } else {
        facts
            .evidence
            .iter()
            .map(|e| format!("- ({}) {}: {}", e.id, e.title, e.snippet))
            .collect::<Vec<_>>()
            .join("\n")
    };

    OVERRIDE_PROMPT_TEMPLATE
        .replace("{grounding_instruction}", GROUNDING_INSTRUCTION)
        .replace("{locale}", locale)
        .replace("{athlete_block}", &athlete_block)
        .replace("{sponsor_block}", &sponsor_block)
        .replace("{evidence_block}", &evidence_block)
        .replace("{style_hint}", copy_for(locale).style_hint)
}
