//! Argon2id password hashing in PHC string format.

mod errors;
mod hasher;

pub use errors::PasswordError;
pub use hasher::PasswordHasher;
