//! Core types, error taxonomy, and configuration for codebin.
//!
//! This crate provides the foundational pieces shared by every other
//! crate in the workspace.
//!
//! ## Identity Types
//!
//! - [`ID`] — Typed wrapper over store-assigned numeric identifiers
//! - [`Unique`] — Trait for entities with a stable identity
//!
//! ## Cross-Cutting
//!
//! - [`Error`] — Failure taxonomy mapped to HTTP status codes at the edge
//! - [`Config`] — Process configuration resolved once at startup

mod config;
mod error;

pub use config::*;
pub use error::*;

use std::cmp::Ordering;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;

/// Unique identifier trait for domain entities.
pub trait Unique<T = Self> {
    fn id(&self) -> ID<T>;
}

/// Generic ID wrapper providing compile-time type safety over the
/// store-assigned numeric key. There is no constructor that invents an
/// identifier; values originate from the Record Store (or from verified
/// token claims) and travel through [`From<i64>`].
pub struct ID<T> {
    inner: i64,
    marker: PhantomData<T>,
}

impl<T> ID<T> {
    pub fn inner(&self) -> i64 {
        self.inner
    }
    /// Cast ID<T> to ID<U> while preserving the underlying key.
    /// Useful for converting between marker types.
    pub fn cast<U>(self) -> ID<U> {
        ID {
            inner: self.inner,
            marker: PhantomData,
        }
    }
}

impl<T> From<ID<T>> for i64 {
    fn from(id: ID<T>) -> Self {
        id.inner()
    }
}
impl<T> From<i64> for ID<T> {
    fn from(inner: i64) -> Self {
        Self {
            inner,
            marker: PhantomData,
        }
    }
}

impl<T> Copy for ID<T> {}
impl<T> Clone for ID<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Eq for ID<T> {}
impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Hash for ID<T> {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        self.inner.hash(state);
    }
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.inner).finish()
    }
}
impl<T> Display for ID<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.inner, f)
    }
}
