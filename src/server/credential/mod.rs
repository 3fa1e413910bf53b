//! Password hashing and signed session tokens.
//!
//! Passwords are stored as argon2id PHC strings. Sessions are stateless HS256 JWTs
//! carrying the username, an absolute expiry two hours after issue and an advisory
//! refresh point at ninety minutes.

pub mod claims;
pub mod password;
pub mod token;
