use thiserror::Error;

/// Failures of the hashing primitive itself.
///
/// A wrong password is not an error; see [`super::PasswordHasher::verify`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}
