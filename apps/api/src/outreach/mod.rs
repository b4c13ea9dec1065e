// Outreach Pack Generation Engine
// Implements: entity lookup, fit scoring, evidence selection, template
// composition, optional generative override, offer catalog, assembly.
// All model calls go through llm_client.

pub mod assembler;
pub mod composer;
pub mod evidence;
pub mod fit_scoring;
pub mod generative;
pub mod handlers;
pub mod locale;
pub mod offer;
pub mod prompts;
pub mod store;

#[cfg(test)]
pub mod testing;
