//! Ergonomic re-exports for downstream crates.

#[cfg(not(target_arch = "wasm32"))]
pub use crate::config::{ConfigError, load_config};
pub use crate::safe_nanoid;
pub use crate::security::headers::SECURITY_HEADERS;
pub use crate::security::token::{Claims, TokenError, TokenIssuer, TokenKind};
#[cfg(feature = "server")]
pub use crate::server::ApiState;
pub use lbites_domain::config::ApiConfig;
pub use lbites_domain::features::FeatureSet;
