//! Policy construction: the patterns and tables behind a [`Nid`].

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{NidError, Result};
use crate::nid::Nid;
use crate::transliterate::{Transliterations, SEPARATORS};

/// Valid nids under the default policy. Matches the empty string.
pub const VALID_PATTERN: &str = r"\A[0-9a-z-]*\z";

/// Characters removed under the default policy.
pub const STRIP_PATTERN: &str = r"[^0-9a-z-]";

/// Valid nids when å, ä and ö are allowed. Matches the empty string.
pub const AAO_VALID_PATTERN: &str = r"\A[0-9a-zåäö-]*\z";

/// Characters removed when å, ä and ö are allowed.
pub const AAO_STRIP_PATTERN: &str = r"[^0-9a-zåäö-]";

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static VALID: LazyLock<Regex> = LazyLock::new(|| Regex::new(VALID_PATTERN).expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static STRIP: LazyLock<Regex> = LazyLock::new(|| Regex::new(STRIP_PATTERN).expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static AAO_VALID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(AAO_VALID_PATTERN).expect("valid regex"));

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static AAO_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(AAO_STRIP_PATTERN).expect("valid regex"));

/// Any run of whitespace.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SQUISH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Any run of dashes.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("valid regex"));

/// Builder for a [`Nid`] policy.
///
/// Starts from the default (strict ASCII) policy. Options apply in the order
/// they are called and the last one touching a field wins. Options taking an
/// argument accept `None`, which leaves the field unchanged.
///
/// # Examples
/// ```
/// use nid::NidBuilder;
///
/// let nid = NidBuilder::new().allow_aao().build();
/// assert_eq!(nid.case("Fångarna på fortet"), "fångarna-på-fortet");
///
/// // `None` is ignored, so optional overrides can be passed straight through
/// let nid = NidBuilder::new().valid_pattern(None).build();
/// assert!(nid.possible("lets-dance"));
/// ```
#[derive(Debug, Clone)]
pub struct NidBuilder {
    valid_pattern: Regex,
    strip_pattern: Regex,
    squish_pattern: Regex,
    dash_pattern: Regex,
    separators: Transliterations,
    transliterations: Transliterations,
}

impl Default for NidBuilder {
    fn default() -> Self {
        Self {
            valid_pattern: VALID.clone(),
            strip_pattern: STRIP.clone(),
            squish_pattern: SQUISH.clone(),
            dash_pattern: DASHES.clone(),
            separators: Transliterations::new(SEPARATORS.iter().copied()),
            transliterations: Transliterations::ascii(),
        }
    }
}

impl NidBuilder {
    /// Start from the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pattern a candidate must match to be a possible nid.
    ///
    /// The pattern should be anchored at both ends (`\A ... \z`); it is
    /// used as given.
    #[must_use]
    pub fn valid_pattern(mut self, pattern: impl Into<Option<Regex>>) -> Self {
        match pattern.into() {
            Some(pattern) => self.valid_pattern = pattern,
            None => tracing::trace!(option = "valid_pattern", "Ignoring empty option"),
        }
        self
    }

    /// Compile and set the validity pattern. An empty string is ignored.
    ///
    /// # Errors
    ///
    /// Returns `NidError::InvalidPattern` if the pattern does not compile.
    pub fn valid_pattern_str(self, pattern: &str) -> Result<Self> {
        let compiled = compile(pattern)?;
        Ok(self.valid_pattern(compiled))
    }

    /// Set the pattern whose matches are deleted during normalization.
    ///
    /// It should match every character outside the alphabet of the
    /// validity pattern, or normalized output may not be a possible nid.
    #[must_use]
    pub fn strip_pattern(mut self, pattern: impl Into<Option<Regex>>) -> Self {
        match pattern.into() {
            Some(pattern) => self.strip_pattern = pattern,
            None => tracing::trace!(option = "strip_pattern", "Ignoring empty option"),
        }
        self
    }

    /// Compile and set the strip pattern. An empty string is ignored.
    ///
    /// # Errors
    ///
    /// Returns `NidError::InvalidPattern` if the pattern does not compile.
    pub fn strip_pattern_str(self, pattern: &str) -> Result<Self> {
        let compiled = compile(pattern)?;
        Ok(self.strip_pattern(compiled))
    }

    /// Replace the transliteration table. `None` and empty tables are ignored.
    ///
    /// The table sees lower-cased, squished text, so it should map spaces to
    /// dashes the way [`Transliterations::ascii`] does.
    #[must_use]
    pub fn transliterations(mut self, table: impl Into<Option<Transliterations>>) -> Self {
        match table.into() {
            Some(table) if !table.is_empty() => self.transliterations = table,
            _ => tracing::trace!(option = "transliterations", "Ignoring empty option"),
        }
        self
    }

    /// Add or override one entry of the current transliteration table.
    #[must_use]
    pub fn transliteration(mut self, from: char, to: impl Into<String>) -> Self {
        self.transliterations = self.transliterations.with(from, to);
        self
    }

    /// Allow å, ä and ö in nids, and spell æ and ø as ä and ö.
    #[must_use]
    pub fn allow_aao(self) -> Self {
        self.valid_pattern(AAO_VALID.clone())
            .strip_pattern(AAO_STRIP.clone())
            .transliterations(Transliterations::aao())
    }

    /// Finish the policy.
    #[must_use]
    pub fn build(self) -> Nid {
        tracing::debug!(
            valid_pattern = %self.valid_pattern.as_str(),
            strip_pattern = %self.strip_pattern.as_str(),
            transliterations = self.transliterations.len(),
            "Built nid policy"
        );
        Nid::from_parts(
            self.valid_pattern,
            self.strip_pattern,
            self.squish_pattern,
            self.dash_pattern,
            self.separators,
            self.transliterations,
        )
    }
}

/// Compile a caller-supplied pattern, treating an empty string as absent.
fn compile(pattern: &str) -> Result<Option<Regex>> {
    if pattern.is_empty() {
        return Ok(None);
    }
    Regex::new(pattern)
        .map(Some)
        .map_err(|source| NidError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patterns_accept_empty() {
        assert!(VALID.is_match(""));
        assert!(AAO_VALID.is_match(""));
    }

    #[test]
    fn test_default_patterns_are_anchored() {
        assert!(!VALID.is_match("foo bar"));
        assert!(!VALID.is_match("foo\n"));
        assert!(!AAO_VALID.is_match("räksmörgås!"));
    }

    #[test]
    fn test_strip_patterns_match_outside_alphabet() {
        assert_eq!(STRIP.replace_all("räksmörgås-1", ""), "rksmrgs-1");
        assert_eq!(AAO_STRIP.replace_all("räksmörgås-1!", ""), "räksmörgås-1");
    }

    #[test]
    fn test_none_options_are_ignored() {
        let nid = NidBuilder::new()
            .allow_aao()
            .valid_pattern(None)
            .strip_pattern(None)
            .transliterations(None)
            .build();
        assert!(nid.possible("räksmörgås"));
        assert_eq!(nid.case("Smørrebrød"), "smörrebröd");
    }

    #[test]
    fn test_empty_table_is_ignored() {
        let nid = NidBuilder::new()
            .transliterations(Transliterations::default())
            .build();
        assert_eq!(nid.case("Dürén"), "duren");
    }

    #[test]
    fn test_empty_pattern_string_is_ignored() {
        let nid = NidBuilder::new()
            .valid_pattern_str("")
            .and_then(|b| b.strip_pattern_str(""))
            .map(NidBuilder::build);
        let nid = nid.unwrap();
        assert!(nid.possible("foo-bar"));
        assert!(!nid.possible("FOO"));
    }

    #[test]
    fn test_invalid_pattern_string() {
        let err = NidBuilder::new().valid_pattern_str("[0-9").unwrap_err();
        assert!(matches!(err, NidError::InvalidPattern { ref pattern, .. } if pattern == "[0-9"));
    }

    #[test]
    fn test_options_apply_in_order() {
        let nid = NidBuilder::new()
            .allow_aao()
            .valid_pattern(VALID.clone())
            .build();
        assert!(!nid.possible("räksmörgås"));
        assert_eq!(nid.case("Räksmörgås"), "räksmörgås");
    }

    #[test]
    fn test_custom_strip_and_valid_patterns() {
        let nid = NidBuilder::new()
            .valid_pattern(Regex::new(r"\A[a-z-]*\z").unwrap())
            .strip_pattern(Regex::new(r"[^a-z-]").unwrap())
            .build();
        assert_eq!(nid.case("Route 66 west"), "route-west");
        assert!(!nid.possible("route-66"));
    }

    #[test]
    fn test_transliteration_entry() {
        let nid = NidBuilder::new().transliteration('ü', "ue").build();
        assert_eq!(nid.case("Müller"), "mueller");
        assert_eq!(nid.case("Dürén"), "dueren");
    }
}
