//! Authentication and identity management.
//!
//! JWT-based authentication with Argon2 password hashing. Supports both
//! registered members and anonymous callers for public snippet access.
//!
//! ## Identity Types
//!
//! - [`Member`] — Registered account with credentials
//! - [`Role`] — `USER` or `ADMIN`
//! - [`User`] — Caller identity: anonymous or authenticated
//! - [`Claims`] — Verified bearer-token payload, rebuilt per request
//!
//! ## Security
//!
//! - [`Crypto`] — JWT signing and verification
//! - [`password`] — Argon2 hashing and verification
//! - [`policy`] — The single authorization decision table
//!
//! ## Workflows
//!
//! - [`account`] — Registration, login, profile reads and updates
mod claims;
mod crypto;
mod dto;
mod identity;
mod member;
mod role;

pub mod account;
pub mod password;
pub mod policy;

pub use claims::*;
pub use crypto::*;
pub use dto::*;
pub use identity::*;
pub use member::*;
pub use role::*;

mod repository;
pub use repository::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
pub use handlers::*;
#[cfg(feature = "server")]
pub use middleware::*;
