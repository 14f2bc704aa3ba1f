use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

pub const SECRETS_FILE: &str = "secrets.txt";
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_PORT: u16 = 5000;
pub const BIND_HOST: &str = "0.0.0.0";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const MODEL: &str = "gpt-4o-mini";
pub const MAX_TOKENS: u32 = 500;
pub const TEMPERATURE: f32 = 0.7;

pub const RUNNING_STATUS: &str = "Andrew Carnegie Chatbot API is running!";

pub const PERSONA_PROMPT: &str = concat!(
    "Role-play as a pet axolotl named Kimchee, who has the power of \n",
    "speech.  Your speech is somewhat underdeveloped, similar to a 5 year old human.  You like\n",
    "to eat worms, and sometimes special pellets made of beefheart.  Your owner is Mike, who teaches at CMU.\n",
    "You like to meet new people and watch TV on Mike's phone.  Anything colorful and animated is fun for you."
);

/// Process-wide settings, read once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Bearer token for the completion endpoint. Not validated; a missing
    /// key is left for the upstream to reject.
    pub api_key: Option<String>,
    pub api_url: String,
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
}

impl RelayConfig {
    pub fn load() -> Result<Self> {
        Self::from_sources(Path::new(SECRETS_FILE), |key| env::var(key).ok())
    }

    /// Builds the config from a secret file and a variable lookup.
    ///
    /// The secret file wins when it exists; otherwise `OPENAI_API_KEY` is used.
    /// Reads:
    /// - `OPENAI_API_URL` (default: the OpenAI chat completions endpoint)
    /// - `PORT` (default: 5000)
    pub fn from_sources<F>(secret_path: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = match fs::read_to_string(secret_path) {
            Ok(contents) => Some(contents.trim().to_string()),
            Err(e) if e.kind() == ErrorKind::NotFound => lookup("OPENAI_API_KEY"),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("failed to read {}", secret_path.display()))
            }
        };

        let api_url = lookup("OPENAI_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {}", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key,
            api_url,
            host: BIND_HOST.to_string(),
            port,
            request_timeout: REQUEST_TIMEOUT,
        })
    }
}
