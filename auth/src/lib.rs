//! Authentication primitives for the invoice service.
//!
//! - Password hashing (Argon2id)
//! - Typed JWT claims and HS256 signing
//! - Access/refresh token lifecycle
//!
//! Everything here is synchronous and stateless; the signing secret is passed in
//! explicitly at construction.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Token Lifecycle
//! ```
//! use auth::{TokenLifetimes, TokenService};
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", TokenLifetimes::default());
//! let pair = tokens.issue_pair("42").unwrap();
//!
//! let refreshed = tokens.refresh(&pair.refresh_token).unwrap();
//! assert_eq!(refreshed.refresh_token, pair.refresh_token);
//! assert_eq!(tokens.verify_access_token(&refreshed.access_token).unwrap().sub, "42");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod token;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::TokenKind;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::TokenError;
pub use token::TokenLifetimes;
pub use token::TokenPair;
pub use token::TokenService;
