use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// How outreach copy is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Deterministic locale templates only.
    Template,
    /// Templates first, then an optional LLM override of email + one-pager.
    Llm,
}

impl FromStr for GenerationMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "template" => Ok(GenerationMode::Template),
            "llm" => Ok(GenerationMode::Llm),
            other => bail!("GENERATION_MODE must be 'template' or 'llm', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub generation_mode: GenerationMode,
    /// Only "ollama" is supported; any other value keeps the template path.
    pub llm_provider: String,
    pub ollama_base_url: String,
    pub ollama_model: String,
    pub ollama_temperature: f32,
    pub llm_timeout_secs: u64,
    pub sender_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: parse_env("PORT", 8080u16).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            generation_mode: parse_env("GENERATION_MODE", GenerationMode::Template)?,
            llm_provider: env_or("LLM_PROVIDER", "ollama"),
            ollama_base_url: env_or("OLLAMA_BASE_URL", "http://127.0.0.1:11434"),
            ollama_model: env_or("OLLAMA_MODEL", "qwen2.5:7b"),
            ollama_temperature: parse_env("OLLAMA_TEMPERATURE", 0.4f32)
                .context("OLLAMA_TEMPERATURE must be a number")?,
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", 90u64)
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            sender_name: env_or("OUTREACH_SENDER_NAME", "Daniel"),
        })
    }

    /// True when the LLM override should be wired into the pack assembler.
    pub fn llm_override_enabled(&self) -> bool {
        self.generation_mode == GenerationMode::Llm
            && self.llm_provider.eq_ignore_ascii_case("ollama")
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Invalid value for {key} ('{raw}'): {e}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(mode: GenerationMode, provider: &str) -> Config {
        Config {
            database_url: "postgres://localhost/copilot".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            generation_mode: mode,
            llm_provider: provider.to_string(),
            ollama_base_url: "http://127.0.0.1:11434".to_string(),
            ollama_model: "qwen2.5:7b".to_string(),
            ollama_temperature: 0.4,
            llm_timeout_secs: 90,
            sender_name: "Daniel".to_string(),
        }
    }

    #[test]
    fn test_generation_mode_parses_case_insensitively() {
        assert_eq!("template".parse::<GenerationMode>().unwrap(), GenerationMode::Template);
        assert_eq!(" LLM ".parse::<GenerationMode>().unwrap(), GenerationMode::Llm);
    }

    #[test]
    fn test_generation_mode_rejects_unknown_value() {
        let err = "magic".parse::<GenerationMode>().unwrap_err();
        assert!(err.to_string().contains("magic"));
    }

    #[test]
    fn test_llm_override_requires_ollama_provider() {
        assert!(config_with(GenerationMode::Llm, "ollama").llm_override_enabled());
        assert!(!config_with(GenerationMode::Llm, "openai").llm_override_enabled());
        assert!(!config_with(GenerationMode::Template, "ollama").llm_override_enabled());
    }
}
