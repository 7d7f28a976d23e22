use crate::features::FeatureSet;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level API configuration shared across services.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfigInner {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub client: ClientConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub cors: CorsConfig,
    pub security: SecurityConfig,
    pub uploads: UploadConfig,
    pub features: FeaturesConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(flatten, default)]
    inner: Arc<ApiConfigInner>,
}

impl Deref for ApiConfig {
    type Target = ApiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ApiConfig {
    fn deref_mut(&mut self) -> &mut ApiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Deployment environment.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }

    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application identity and locale settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub name: String,
    pub description: String,
    pub environment: Environment,
    pub debug: bool,
    pub locale: String,
    pub currency: String,
    pub timezone: String,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
    pub workers: usize,
    pub ssl: Option<SslConfig>,
}

/// TLS certificate/key paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SslConfig {
    pub cert: PathBuf,
    pub key: PathBuf,
}

/// The contract handed to web clients: where the API and the websocket live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub ws_url: String,
    pub timeout_ms: u64,
}

/// Document store connection configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub database: String,
    pub pool_min: u32,
    pub pool_max: u32,
}

/// Redis cache connection configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    pub url: String,
    pub max_connections: u32,
    pub default_ttl_seconds: u64,
    pub key_prefix: String,
}

/// Cross-origin resource sharing rules.
///
/// `origins`, `methods`, and `headers` are comma-separated lists; `*` means
/// "any". Stored as raw strings so a single env var can override each one.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub origins: String,
    pub credentials: bool,
    pub methods: String,
    pub headers: String,
}

impl CorsConfig {
    #[must_use]
    pub fn origins_list(&self) -> Vec<String> {
        split_csv(&self.origins)
    }

    #[must_use]
    pub fn methods_list(&self) -> Vec<String> {
        split_csv(&self.methods)
    }

    #[must_use]
    pub fn headers_list(&self) -> Vec<String> {
        split_csv(&self.headers)
    }

    #[must_use]
    pub fn allows_any_origin(&self) -> bool {
        self.origins_list().iter().any(|o| o == "*")
    }

    #[must_use]
    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        self.allows_any_origin() || self.origins_list().iter().any(|o| o == origin)
    }
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned).collect()
}

/// Optional API security knobs.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub jwt: JwtConfig,
    pub password: PasswordPolicy,
    pub rate_limit: RateLimitConfig,
}

/// JWT signing configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    pub secret: String,
    pub algorithm: String,
    pub issuer: String,
    pub access_ttl_minutes: i64,
    pub refresh_ttl_days: i64,
    pub clock_skew_seconds: u64,
}

/// Password strength requirements.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub max_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digit: bool,
    pub require_special: bool,
    pub special_characters: String,
}

/// Request rate limiting.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    pub enabled: bool,
    pub per_minute: u32,
    pub per_hour: u32,
}

/// File upload limits.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub max_bytes: u64,
    pub allowed_extensions: String,
}

impl UploadConfig {
    #[must_use]
    pub fn allowed_extensions_list(&self) -> Vec<String> {
        split_csv(&self.allowed_extensions)
    }
}

/// Optional capability toggles, sourced from the environment at startup and
/// read-only afterwards.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeaturesConfig {
    pub ai_chat: bool,
    pub voice_order: bool,
    pub subscriptions: bool,
    pub loyalty: bool,
    pub real_time: bool,
}

impl FeaturesConfig {
    /// Collapses the boolean toggles into a [`FeatureSet`].
    #[must_use]
    pub fn as_set(&self) -> FeatureSet {
        let mut set = FeatureSet::empty();
        set.set(FeatureSet::AI_CHAT, self.ai_chat);
        set.set(FeatureSet::VOICE_ORDER, self.voice_order);
        set.set(FeatureSet::SUBSCRIPTIONS, self.subscriptions);
        set.set(FeatureSet::LOYALTY, self.loyalty);
        set.set(FeatureSet::REAL_TIME, self.real_time);
        set
    }
}

// --- Default ---

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: "LocoBites".to_owned(),
            description: "Artisan Bakery & Custom Confections".to_owned(),
            environment: Environment::Development,
            debug: true,
            locale: "en-US".to_owned(),
            currency: "KES".to_owned(),
            timezone: "UTC".to_owned(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { address: IpAddr::V4(Ipv4Addr::UNSPECIFIED), port: 8000, workers: 4, ssl: None }
    }
}

impl Default for SslConfig {
    fn default() -> Self {
        Self { cert: PathBuf::from("cert.pem"), key: PathBuf::from("key.pem") }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api/v1".to_owned(),
            ws_url: "ws://localhost:8000/ws".to_owned(),
            timeout_ms: 30_000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_owned(),
            database: "locobites".to_owned(),
            pool_min: 1,
            pool_max: 10,
        }
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379/0".to_owned(),
            max_connections: 10,
            default_ttl_seconds: 300,
            key_prefix: "locobites:".to_owned(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            origins: "*".to_owned(),
            credentials: true,
            methods: "*".to_owned(),
            headers: "*".to_owned(),
        }
    }
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "dev-only-change-me".to_owned(),
            algorithm: "HS256".to_owned(),
            issuer: "locobites".to_owned(),
            access_ttl_minutes: 30,
            refresh_ttl_days: 7,
            clock_skew_seconds: 60,
        }
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 128,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_special: true,
            special_characters: "!@#$%^&*()_+-=[]{}|;:,.<>?".to_owned(),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self { enabled: true, per_minute: 60, per_hour: 1000 }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self { max_bytes: 10_485_760, allowed_extensions: "jpg,jpeg,png,gif,pdf,webp".to_owned() }
    }
}
