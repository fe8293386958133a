use chrono::Duration;
use chrono::Utc;
use thiserror::Error;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::TokenKind;

/// Token lifetimes applied at mint time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenLifetimes {
    pub access: Duration,
    pub refresh: Duration,
}

impl TokenLifetimes {
    pub fn from_hours(access_hours: i64, refresh_hours: i64) -> Self {
        Self {
            access: Duration::hours(access_hours),
            refresh: Duration::hours(refresh_hours),
        }
    }
}

impl Default for TokenLifetimes {
    fn default() -> Self {
        Self {
            access: Duration::hours(12),
            refresh: Duration::days(7),
        }
    }
}

/// Access token plus the refresh token that can mint its successors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Errors surfaced by [`TokenService`].
///
/// Expired, tampered and malformed tokens all collapse into `InvalidToken`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed: {0}")]
    Generation(String),
}

/// Mints and verifies stateless, signed access and refresh tokens.
///
/// Nothing is persisted: a token is valid exactly when its signature matches
/// the configured secret and its `exp` is still in the future.
pub struct TokenService {
    jwt_handler: JwtHandler,
    lifetimes: TokenLifetimes,
}

impl TokenService {
    pub fn new(secret: &[u8], lifetimes: TokenLifetimes) -> Self {
        Self {
            jwt_handler: JwtHandler::new(secret),
            lifetimes,
        }
    }

    /// Mint a short-lived access token for `subject`.
    pub fn issue_access_token(&self, subject: &str) -> Result<String, TokenError> {
        self.issue(subject, TokenKind::Access, self.lifetimes.access)
    }

    /// Mint a long-lived refresh token for `subject`.
    pub fn issue_refresh_token(&self, subject: &str) -> Result<String, TokenError> {
        self.issue(subject, TokenKind::Refresh, self.lifetimes.refresh)
    }

    pub fn issue_pair(&self, subject: &str) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            access_token: self.issue_access_token(subject)?,
            refresh_token: self.issue_refresh_token(subject)?,
        })
    }

    /// Verify signature and expiry of any token minted by this service.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed, wrongly signed, or expired
    pub fn verify_and_decode(&self, token: &str) -> Result<Claims, TokenError> {
        let claims: Claims = self.jwt_handler.decode(token).map_err(|e| {
            match &e {
                JwtError::TokenExpired => tracing::debug!("Rejected expired token"),
                JwtError::InvalidSignature => tracing::debug!("Rejected token with bad signature"),
                other => tracing::debug!(error = %other, "Rejected malformed token"),
            }
            TokenError::InvalidToken
        })?;

        if claims.is_expired(Utc::now().timestamp()) {
            tracing::debug!(exp = claims.exp, "Rejected token at expiry boundary");
            return Err(TokenError::InvalidToken);
        }

        Ok(claims)
    }

    /// Verify a token and require it to be an access token.
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_kind(token, TokenKind::Access)
    }

    /// Exchange a refresh token for a fresh access token.
    ///
    /// The refresh token is handed back unchanged: its own expiry is never
    /// extended and it is neither rotated nor revoked.
    ///
    /// # Errors
    /// * `InvalidToken` - Refresh token failed verification or is an access token
    /// * `Generation` - New access token could not be signed
    pub fn refresh(&self, refresh_token: &str) -> Result<TokenPair, TokenError> {
        let claims = self.verify_kind(refresh_token, TokenKind::Refresh)?;

        Ok(TokenPair {
            access_token: self.issue_access_token(&claims.sub)?,
            refresh_token: refresh_token.to_string(),
        })
    }

    fn verify_kind(&self, token: &str, expected: TokenKind) -> Result<Claims, TokenError> {
        let claims = self.verify_and_decode(token)?;
        if claims.kind != expected {
            tracing::debug!(expected = %expected, actual = %claims.kind, "Rejected token of wrong kind");
            return Err(TokenError::InvalidToken);
        }
        Ok(claims)
    }

    fn issue(
        &self,
        subject: &str,
        kind: TokenKind,
        lifetime: Duration,
    ) -> Result<String, TokenError> {
        let claims = Claims::new(subject, kind, Utc::now(), lifetime);
        self.jwt_handler
            .encode(&claims)
            .map_err(|e| TokenError::Generation(e.to_string()))
    }
}
