use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use lbites_domain::config::JwtConfig;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// The two token flavors issued by the platform.
///
/// A refresh token must never be accepted where an access token is expected,
/// so the kind travels inside the signed claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Access => f.write_str("access"),
            Self::Refresh => f.write_str("refresh"),
        }
    }
}

/// Signed claims carried by every token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Customer or staff identifier.
    pub sub: String,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Unsupported JWT algorithm: {name}")]
    Algorithm { name: Cow<'static, str> },
    #[error("Failed to sign token: {source}")]
    Sign {
        #[source]
        source: jsonwebtoken::errors::Error,
    },
    #[error("Token rejected: {source}")]
    Verify {
        #[source]
        source: jsonwebtoken::errors::Error,
    },
    #[error("Token is a {found} token, expected {expected}")]
    WrongKind { expected: TokenKind, found: TokenKind },
}

/// Issues and verifies the platform's JWTs.
///
/// Built once from [`JwtConfig`] at startup; keys are derived from the shared
/// secret, so only HMAC algorithms are supported.
#[derive(Clone)]
pub struct TokenIssuer {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    access_ttl_secs: i64,
    refresh_ttl_secs: i64,
    leeway_secs: u64,
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("algorithm", &self.algorithm)
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    /// Builds an issuer from configuration.
    ///
    /// # Errors
    /// Returns [`TokenError::Algorithm`] if the configured algorithm is
    /// unknown or not an HMAC variant.
    pub fn new(cfg: &JwtConfig) -> Result<Self, TokenError> {
        let algorithm: Algorithm = cfg
            .algorithm
            .parse()
            .map_err(|_| TokenError::Algorithm { name: cfg.algorithm.clone().into() })?;

        if !matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            return Err(TokenError::Algorithm { name: cfg.algorithm.clone().into() });
        }

        Ok(Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(cfg.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(cfg.secret.as_bytes()),
            issuer: cfg.issuer.clone(),
            access_ttl_secs: cfg.access_ttl_minutes * 60,
            refresh_ttl_secs: cfg.refresh_ttl_days * 86_400,
            leeway_secs: cfg.clock_skew_seconds,
        })
    }

    /// Issues a short-lived access token for `subject`.
    ///
    /// # Errors
    /// Returns [`TokenError::Sign`] if encoding fails.
    pub fn issue_access(&self, subject: impl Into<String>) -> Result<String, TokenError> {
        self.issue(subject.into(), TokenKind::Access, self.access_ttl_secs)
    }

    /// Issues a long-lived refresh token for `subject`.
    ///
    /// # Errors
    /// Returns [`TokenError::Sign`] if encoding fails.
    pub fn issue_refresh(&self, subject: impl Into<String>) -> Result<String, TokenError> {
        self.issue(subject.into(), TokenKind::Refresh, self.refresh_ttl_secs)
    }

    fn issue(&self, sub: String, kind: TokenKind, ttl_secs: i64) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims =
            Claims { sub, kind, iss: self.issuer.clone(), iat: now, exp: now + ttl_secs };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|source| TokenError::Sign { source })
    }

    /// Verifies signature, expiry, issuer, and token kind.
    ///
    /// # Errors
    /// Returns [`TokenError::Verify`] for cryptographic/expiry failures and
    /// [`TokenError::WrongKind`] when a valid token of the other flavor is
    /// presented.
    pub fn verify(&self, token: &str, expected: TokenKind) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = self.leeway_secs;
        validation.set_issuer(&[&self.issuer]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|source| TokenError::Verify { source })?;

        if data.claims.kind != expected {
            return Err(TokenError::WrongKind { expected, found: data.claims.kind });
        }

        Ok(data.claims)
    }
}
