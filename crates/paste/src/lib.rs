//! Snippet publication and retrieval.
//!
//! A snippet is published once under a slug derived from its title and
//! never mutated afterwards. Everything here is validation: the slug
//! pipeline, the markup-neutralizing escape, and the publication
//! workflow that stitches them to the policy table and the Record Store.
//!
//! ## Building Blocks
//!
//! - [`slug`] — Title → canonical collision-checked identifier
//! - [`escape`] — Markup-neutralizing content transform
//! - [`Paste`] / [`Draft`] / [`Language`] — Domain types
//!
//! ## Workflows
//!
//! - [`publish`] — Validation, attribution, and persistence
mod dto;
mod paste;

pub mod escape;
pub mod publish;
pub mod slug;

pub use dto::*;
pub use paste::*;

mod repository;
pub use repository::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
pub use handlers::*;
