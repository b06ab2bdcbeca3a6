use std::env;

/// ClientConfig
///
/// Holds the client's entire configuration state. Immutable once loaded, so
/// every operation issued through a transport built from it sees the same
/// base URL, token, and timeout for the life of the process.
#[derive(Clone)]
pub struct ClientConfig {
    // Base URL of the storefront service, including any path prefix
    // (e.g. "https://shop.example.com/api"). Paths are appended verbatim.
    pub api_base_url: String,
    // Bearer token attached to every request when present. Absent for
    // anonymous flows such as login and register.
    pub api_token: Option<String>,
    // Whole-exchange timeout per request, in seconds.
    pub http_timeout_secs: u64,
    // Runtime environment marker. Controls log formatting at startup.
    pub env: Env,
}

/// Env
///
/// Defines the runtime context, used to switch between developer-friendly
/// output (pretty logs, localhost defaults) and production settings.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for ClientConfig {
    /// default
    ///
    /// Provides a safe, non-panicking ClientConfig primarily used for test
    /// setup, pointed at a localhost service with no token.
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".to_string(),
            api_token: None,
            http_timeout_secs: 30,
            env: Env::Local,
        }
    }
}

impl ClientConfig {
    /// load
    ///
    /// The canonical function for initializing the configuration at startup.
    /// It reads all parameters from environment variables and fails fast.
    ///
    /// # Panics
    /// Panics if the service URL is missing in production. Starting without
    /// it would only defer the failure to the first request.
    pub fn load() -> Self {
        let env_str = env::var("STOREFRONT_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        // The production URL is mandatory and must be explicitly set; local
        // development falls back to the conventional docker-compose address.
        let api_base_url = match env {
            Env::Production => env::var("STOREFRONT_API_URL")
                .expect("FATAL: STOREFRONT_API_URL must be set in production."),
            _ => env::var("STOREFRONT_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000/api".to_string()),
        };

        // An empty token would still send an Authorization header, so treat
        // it the same as unset.
        let api_token = env::var("STOREFRONT_API_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());

        let http_timeout_secs = env::var("STOREFRONT_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(30);

        Self {
            api_base_url,
            api_token,
            http_timeout_secs,
            env,
        }
    }
}
