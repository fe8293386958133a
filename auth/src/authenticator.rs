use crate::jwt::Claims;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::TokenError;
use crate::token::TokenLifetimes;
use crate::token::TokenPair;
use crate::token::TokenService;

/// Argon2id digest with default parameters that no password matches.
///
/// Verified against when an account does not exist so that the rejection costs
/// the same as a wrong password.
const UNKNOWN_ACCOUNT_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Authentication coordinator combining password verification and token minting.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_service: TokenService,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Shared secret for token signing
    /// * `lifetimes` - Access and refresh token lifetimes
    pub fn new(jwt_secret: &[u8], lifetimes: TokenLifetimes) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_service: TokenService::new(jwt_secret, lifetimes),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and mint an access/refresh token pair for `subject`.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is unusable
    /// * `TokenError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<TokenPair, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_service.issue_pair(subject)?)
    }

    /// Reject a login for an account that does not exist.
    ///
    /// Runs a full password verification against a fixed digest before
    /// answering `InvalidCredentials`.
    pub fn reject_unknown(&self, password: &str) -> AuthenticationError {
        if let Err(e) = self.password_hasher.verify(password, UNKNOWN_ACCOUNT_HASH) {
            tracing::error!(error = %e, "Unknown-account digest rejected");
        }
        AuthenticationError::InvalidCredentials
    }

    /// Exchange a refresh token for a new access token.
    pub fn refresh(&self, refresh_token: &str) -> Result<TokenPair, TokenError> {
        self.token_service.refresh(refresh_token)
    }

    /// Validate a bearer access token.
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_service.verify_access_token(token)
    }

    pub fn token_service(&self) -> &TokenService {
        &self.token_service
    }
}
