use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_GROQ_MODEL: &str = "llama-3.3-70b-versatile";

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub server_addr: String,
    pub api_prefix: String,

    // Groq chat completions
    pub groq_api_key: Option<String>,
    pub groq_api_url: String,
    pub groq_model: String,
    pub scheme_cache_ttl_secs: u64,

    // Rate limiting
    pub rate_protected_per_min: u32,
    pub rate_ai_per_min: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string()),
            database_url: require_env("DATABASE_URL")?,
            jwt_secret: require_env("JWT_SECRET")?,
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),

            // An empty key counts as missing so the AI routes report it clearly
            groq_api_key: env::var("GROQ_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            groq_api_url: env::var("GROQ_API_URL")
                .unwrap_or_else(|_| DEFAULT_GROQ_API_URL.to_string()),
            groq_model: env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_GROQ_MODEL.to_string()),
            scheme_cache_ttl_secs: parse_env("SCHEME_CACHE_TTL_SECS", 3600)?,

            rate_protected_per_min: parse_env("RATE_PROTECTED_PER_MIN", 1000)?,
            rate_ai_per_min: parse_env("RATE_AI_PER_MIN", 30)?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("{key} must be set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
impl Config {
    pub fn for_tests(jwt_secret: &str) -> Self {
        Self {
            database_url: "mysql://localhost/msme_test".to_string(),
            jwt_secret: jwt_secret.to_string(),
            server_addr: "127.0.0.1:0".to_string(),
            api_prefix: "/api".to_string(),
            groq_api_key: None,
            groq_api_url: DEFAULT_GROQ_API_URL.to_string(),
            groq_model: DEFAULT_GROQ_MODEL.to_string(),
            scheme_cache_ttl_secs: 60,
            rate_protected_per_min: 1000,
            rate_ai_per_min: 30,
        }
    }
}
