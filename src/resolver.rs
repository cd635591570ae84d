//! Creation resolver: turns a discriminator token into a freshly built variant.
//!
//! Two dispatch strategies share the same contract and error:
//!
//! - **Closed enums** implementing [`Discriminator`]. The token is parsed into
//!   the enum and the family's factory `match`es on it.
//! - **Lookup tables** ([`Resolver`]). Each token maps to a constructor
//!   function, called once per resolution.
//!
//! Either way an unrecognized token fails with
//! [`LessonError::UnknownVariant`] and nothing is constructed.

use tracing::{debug, warn};

use crate::error::{LessonError, Result};

// ============================================================================
// Closed-enum discriminators
// ============================================================================

/// A closed set of tokens selecting one variant of a capability family.
pub trait Discriminator: Sized + Copy + 'static {
    /// Family name, used in error messages.
    const FAMILY: &'static str;

    /// Every legal value, in display order.
    const ALL: &'static [Self];

    fn token(self) -> &'static str;
}

/// Parses `token` into a discriminator of family `D`.
pub fn parse<D: Discriminator>(token: &str) -> Result<D> {
    match D::ALL.iter().copied().find(|d| d.token() == token) {
        Some(discriminator) => {
            debug!(family = D::FAMILY, token, "resolved discriminator");
            Ok(discriminator)
        }
        None => {
            warn!(family = D::FAMILY, token, "unknown discriminator");
            Err(LessonError::unknown_variant(D::FAMILY, token))
        }
    }
}

/// Parses `token` and hands the discriminator to `make`.
///
/// `make` only runs for legal tokens.
pub fn resolve_with<D, T, F>(token: &str, make: F) -> Result<T>
where
    D: Discriminator,
    F: FnOnce(D) -> T,
{
    parse::<D>(token).map(make)
}

/// All legal tokens of family `D`.
pub fn tokens<D: Discriminator>() -> impl Iterator<Item = &'static str> {
    D::ALL.iter().map(|d| d.token())
}

// ============================================================================
// Lookup-table resolver
// ============================================================================

/// Ordered table of `(token, constructor)` pairs.
pub struct Resolver<T> {
    family: &'static str,
    entries: Vec<(&'static str, fn() -> T)>,
}

impl<T> Resolver<T> {
    pub fn new(family: &'static str) -> Self {
        Self {
            family,
            entries: Vec::new(),
        }
    }

    /// Adds a variant. A token may only be registered once.
    pub fn register(mut self, token: &'static str, constructor: fn() -> T) -> Result<Self> {
        if self.contains(token) {
            return Err(LessonError::DuplicateVariant {
                family: self.family,
                discriminator: token.to_string(),
            });
        }
        self.entries.push((token, constructor));
        Ok(self)
    }

    /// Builds a new instance of the variant registered under `token`.
    pub fn resolve(&self, token: &str) -> Result<T> {
        let constructor = self
            .entries
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, constructor)| constructor);

        match constructor {
            Some(constructor) => {
                debug!(family = self.family, token, "constructing variant");
                Ok(constructor())
            }
            None => {
                warn!(family = self.family, token, "unknown discriminator");
                Err(LessonError::unknown_variant(self.family, token))
            }
        }
    }

    /// Builds one instance of every variant, in registration order.
    pub fn resolve_all(&self) -> impl Iterator<Item = (&'static str, T)> + '_ {
        self.entries
            .iter()
            .map(|(token, constructor)| (*token, constructor()))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.iter().any(|(t, _)| *t == token)
    }

    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(token, _)| *token)
    }

    pub fn family(&self) -> &'static str {
        self.family
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
