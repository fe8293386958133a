//! HS256 JSON Web Tokens: claim set, codec and error mapping.

mod claims;
mod errors;
mod handler;

pub use claims::Claims;
pub use claims::TokenKind;
pub use errors::JwtError;
pub use handler::JwtHandler;
