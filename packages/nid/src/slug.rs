//! A string known to be a possible nid.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// An owned, validated nid.
///
/// A `Slug` is a possible nid under the policy that produced it: either the
/// output of normalization ([`Slug::from_text`], [`crate::Nid::slug`]) or a
/// candidate that passed validation ([`Slug::parse`] for the default policy,
/// [`crate::Nid::parse_slug`] for any other). A `Slug` does not remember its
/// policy, so validation only happens at those two entry points.
///
/// Serialization is a plain string. Deserializing does not validate: a
/// `Slug` read back from storage is trusted to have been written by this
/// crate. Run [`crate::Nid::validate`] on untrusted input.
///
/// Like the validator, a `Slug` may be empty.
///
/// # Examples
/// ```
/// use nid::{Slug, WITH_AAO};
///
/// let slug = Slug::from_text("Let's_Dance ");
/// assert_eq!(slug.as_str(), "lets-dance");
///
/// assert_eq!(Slug::parse("lets-dance").unwrap(), slug);
/// assert!(Slug::parse("Lets Dance").is_err());
///
/// let swedish = WITH_AAO.parse_slug("räksmörgås").unwrap();
/// assert!(Slug::parse(swedish.as_str()).is_err());
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    /// Normalize `text` under the default policy.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self(crate::case(text))
    }

    /// Validate `candidate` under the default policy.
    ///
    /// # Errors
    ///
    /// Returns `NidError::NotPossible` if the candidate is not a possible nid.
    pub fn parse(candidate: &str) -> Result<Self> {
        crate::DEFAULT.parse_slug(candidate)
    }

    /// Caller guarantees `value` is a possible nid under some policy.
    pub(crate) fn new_unchecked(value: String) -> Self {
        Self(value)
    }

    /// The slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the empty slug, which every preset accepts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unwrap into the inner `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}
