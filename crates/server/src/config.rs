//! Server configuration

/// Server configuration loaded from environment variables
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Shared secret expected in the `Authorization` header
    pub api_secret: Option<String>,
    pub cors_origins: Vec<String>,
    pub rate_limit_rps: u32,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    /// Chat messages kept per user
    pub chat_history_limit: i64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let bind_address = std::env::var("BIND_ADDRESS").unwrap_or_else(|_| {
            let port = std::env::var("PORT").unwrap_or_else(|_| "4321".into());
            format!("0.0.0.0:{port}")
        });

        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "host=localhost user=postgres dbname=dentsim".into()),
            bind_address,
            api_secret: non_empty_var("API_SECRET"),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".into())
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
            rate_limit_rps: parse_var::<u32>("RATE_LIMIT_RPS", 100).max(1),
            gemini_api_key: non_empty_var("GEMINI_API_KEY"),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".into()),
            chat_history_limit: parse_var::<i64>("CHAT_HISTORY_LIMIT", 20).max(1),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn parse_var<T: std::str::FromStr + Copy>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(var = name, value = %raw, "Invalid value, using default");
            default
        }),
        Err(_) => default,
    }
}
