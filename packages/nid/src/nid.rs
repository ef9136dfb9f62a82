//! Normalization and validation under a single policy.

use regex::Regex;

use crate::config::NidBuilder;
use crate::error::{NidError, Result};
use crate::slug::Slug;
use crate::transliterate::Transliterations;

/// An immutable nid policy.
///
/// Holds the compiled patterns and tables that drive [`Nid::case`] and
/// [`Nid::possible`]. Build one with [`Nid::builder`]; the default and
/// å/ä/ö presets are available as [`crate::DEFAULT`] and [`crate::WITH_AAO`].
/// A `Nid` is `Send + Sync` and can be shared freely.
#[derive(Debug, Clone)]
pub struct Nid {
    valid_pattern: Regex,
    strip_pattern: Regex,
    squish_pattern: Regex,
    dash_pattern: Regex,
    separators: Transliterations,
    transliterations: Transliterations,
}

impl Default for Nid {
    fn default() -> Self {
        NidBuilder::default().build()
    }
}

impl Nid {
    /// Start building a policy from the defaults.
    #[must_use]
    pub fn builder() -> NidBuilder {
        NidBuilder::new()
    }

    pub(crate) fn from_parts(
        valid_pattern: Regex,
        strip_pattern: Regex,
        squish_pattern: Regex,
        dash_pattern: Regex,
        separators: Transliterations,
        transliterations: Transliterations,
    ) -> Self {
        Self {
            valid_pattern,
            strip_pattern,
            squish_pattern,
            dash_pattern,
            separators,
            transliterations,
        }
    }

    /// Pattern a possible nid must match.
    #[must_use]
    pub fn valid_pattern(&self) -> &Regex {
        &self.valid_pattern
    }

    /// Pattern whose matches are removed during normalization.
    #[must_use]
    pub fn strip_pattern(&self) -> &Regex {
        &self.strip_pattern
    }

    /// Table applied after whitespace is squished.
    #[must_use]
    pub fn transliterations(&self) -> &Transliterations {
        &self.transliterations
    }

    /// Normalize `text` into a nid.
    ///
    /// The steps always run in this order:
    /// 1. lower-case the input
    /// 2. turn dashes, underscores, en and em dashes into spaces
    /// 3. trim, then squish whitespace runs into one space
    /// 4. transliterate (spaces become dashes)
    /// 5. strip characters outside the alphabet
    /// 6. collapse dash runs and trim dashes from both ends
    ///
    /// The result is always a possible nid under the same policy, and
    /// normalizing it again returns it unchanged.
    ///
    /// # Examples
    /// ```
    /// use nid::Nid;
    ///
    /// let nid = Nid::default();
    /// assert_eq!(nid.case("Let's_Dance "), "lets-dance");
    /// assert_eq!(nid.case("Dürén Ibrahimović"), "duren-ibrahimovic");
    /// assert_eq!(nid.case(""), "");
    /// ```
    #[must_use]
    pub fn case(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let prepared = self.prepare(text);
        let squished = self.squish(&prepared);
        let transliterated = self.transliterations.replace(&squished);
        self.strip(&transliterated)
    }

    /// Check whether `candidate` is a possible nid.
    ///
    /// The empty string **is** possible: callers that need a non-empty nid
    /// have to check that themselves. Anything containing `--` is rejected
    /// before the validity pattern is consulted. The candidate is never
    /// normalized.
    ///
    /// # Examples
    /// ```
    /// use nid::Nid;
    ///
    /// let nid = Nid::default();
    /// assert!(nid.possible("lets-dance"));
    /// assert!(nid.possible(""));
    /// assert!(!nid.possible("a--b"));
    /// assert!(!nid.possible("FOO"));
    /// ```
    #[must_use]
    pub fn possible(&self, candidate: &str) -> bool {
        if candidate.contains("--") {
            return false;
        }

        self.valid_pattern.is_match(candidate)
    }

    /// Like [`Nid::possible`], reported as a `Result`.
    ///
    /// # Errors
    ///
    /// Returns `NidError::NotPossible` with the candidate if it is not a
    /// possible nid.
    pub fn validate(&self, candidate: &str) -> Result<()> {
        if self.possible(candidate) {
            Ok(())
        } else {
            Err(NidError::NotPossible(candidate.to_string()))
        }
    }

    /// Normalize `text` into a [`Slug`].
    #[must_use]
    pub fn slug(&self, text: &str) -> Slug {
        Slug::new_unchecked(self.case(text))
    }

    /// Validate `candidate` as a [`Slug`] under this policy.
    ///
    /// # Errors
    ///
    /// Returns `NidError::NotPossible` if the candidate is not a possible nid.
    pub fn parse_slug(&self, candidate: &str) -> Result<Slug> {
        self.validate(candidate)?;
        Ok(Slug::new_unchecked(candidate.to_string()))
    }

    fn prepare(&self, text: &str) -> String {
        self.separators
            .replace(&text.to_lowercase())
            .trim()
            .to_string()
    }

    fn squish(&self, text: &str) -> String {
        self.squish_pattern.replace_all(text, " ").into_owned()
    }

    fn strip(&self, text: &str) -> String {
        let stripped = self.strip_pattern.replace_all(text, "");
        let collapsed = self.dash_pattern.replace_all(&stripped, "-");
        collapsed.trim_matches('-').to_string()
    }
}
