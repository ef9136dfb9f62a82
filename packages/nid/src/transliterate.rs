//! Character transliteration tables.
//!
//! A [`Transliterations`] table maps a single character to a replacement
//! string and is applied in one left-to-right pass. Keys are lower-case only:
//! input is always lower-cased before it reaches a table.

use std::collections::HashMap;

/// Separators that become a space before whitespace is squished.
pub const SEPARATORS: &[(char, &str)] = &[('-', " "), ('_', " "), ('–', " "), ('—', " ")];

/// Word separators that survive squishing and end up as dashes.
const WORD_SEPARATORS: &[(char, &str)] = &[(' ', "-"), ('_', "-")];

/// Latin-1 Supplement and Latin Extended-A letters with their ASCII
/// replacements.
pub const LATIN: &[(char, &str)] = &[
    ('×', "x"),
    ('ß', "ss"),
    ('à', "a"),
    ('á', "a"),
    ('â', "a"),
    ('ã', "a"),
    ('ä', "a"),
    ('å', "a"),
    ('æ', "a"),
    ('ç', "c"),
    ('è', "e"),
    ('é', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('ì', "i"),
    ('í', "i"),
    ('î', "i"),
    ('ï', "i"),
    ('ð', "d"),
    ('ñ', "n"),
    ('ò', "o"),
    ('ó', "o"),
    ('ô', "o"),
    ('õ', "o"),
    ('ö', "o"),
    ('ø', "o"),
    ('ù', "u"),
    ('ú', "u"),
    ('û', "u"),
    ('ü', "u"),
    ('ý', "y"),
    ('þ', "th"),
    ('ÿ', "y"),
    ('ā', "a"),
    ('ă', "a"),
    ('ą', "a"),
    ('ć', "c"),
    ('ĉ', "c"),
    ('ċ', "c"),
    ('č', "c"),
    ('ď', "d"),
    ('đ', "d"),
    ('ē', "e"),
    ('ĕ', "e"),
    ('ė', "e"),
    ('ę', "e"),
    ('ě', "e"),
    ('ĝ', "g"),
    ('ğ', "g"),
    ('ġ', "g"),
    ('ģ', "g"),
    ('ĥ', "h"),
    ('ħ', "h"),
    ('ĩ', "i"),
    ('ī', "i"),
    ('ĭ', "i"),
    ('į', "i"),
    ('ı', "i"),
    ('ĳ', "ij"),
    ('ĵ', "j"),
    ('ķ', "k"),
    ('ĸ', "k"),
    ('ĺ', "l"),
    ('ļ', "l"),
    ('ľ', "l"),
    ('ŀ', "l"),
    ('ł', "l"),
    ('ń', "n"),
    ('ņ', "n"),
    ('ň', "n"),
    ('ŉ', "'n"),
    ('ŋ', "ng"),
    ('ō', "o"),
    ('ŏ', "o"),
    ('ő', "o"),
    ('œ', "oe"),
    ('ŕ', "r"),
    ('ŗ', "r"),
    ('ř', "r"),
    ('ś', "s"),
    ('ŝ', "s"),
    ('ş', "s"),
    ('š', "s"),
    ('ţ', "t"),
    ('ť', "t"),
    ('ŧ', "t"),
    ('ũ', "u"),
    ('ū', "u"),
    ('ŭ', "u"),
    ('ů', "u"),
    ('ű', "u"),
    ('ų', "u"),
    ('ŵ', "w"),
    ('ŷ', "y"),
    ('ź', "z"),
    ('ż', "z"),
    ('ž', "z"),
    ('ſ', "s"),
    ('ǎ', "a"),
    ('ǐ', "i"),
    ('ǒ', "o"),
    ('ǔ', "u"),
    ('ș', "s"),
    ('ț', "t"),
];

/// Entries that replace their [`LATIN`] counterparts when å, ä and ö are
/// part of the alphabet. æ and ø follow their Swedish spelling.
pub const AAO_OVERRIDES: &[(char, &str)] = &[
    ('ä', "ä"),
    ('å', "å"),
    ('æ', "ä"),
    ('ö', "ö"),
    ('ø', "ö"),
];

/// A single-character replacement table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transliterations {
    map: HashMap<char, String>,
}

impl Transliterations {
    /// Build a table from `(character, replacement)` pairs.
    ///
    /// Later pairs win over earlier pairs for the same character.
    pub fn new<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        Self {
            map: pairs
                .into_iter()
                .map(|(from, to)| (from, to.into()))
                .collect(),
        }
    }

    /// The ASCII table used by the default policy.
    ///
    /// Besides the letters in [`LATIN`] it turns spaces and underscores into
    /// dashes.
    #[must_use]
    pub fn ascii() -> Self {
        Self::new(WORD_SEPARATORS.iter().chain(LATIN).copied())
    }

    /// The table used when å, ä and ö are allowed.
    ///
    /// # Examples
    /// ```
    /// use nid::Transliterations;
    ///
    /// let table = Transliterations::aao();
    /// assert_eq!(table.replace("smørrebrød"), "smörrebröd");
    /// assert_eq!(table.replace("crème brûlée"), "creme-brulee");
    /// ```
    #[must_use]
    pub fn aao() -> Self {
        Self::ascii().extend(AAO_OVERRIDES.iter().copied())
    }

    /// Add or override a single entry.
    #[must_use]
    pub fn with(mut self, from: char, to: impl Into<String>) -> Self {
        self.map.insert(from, to.into());
        self
    }

    /// Add or override several entries.
    #[must_use]
    pub fn extend<I, S>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        self.map
            .extend(pairs.into_iter().map(|(from, to)| (from, to.into())));
        self
    }

    /// Replacement for `c`, if the table has one.
    #[must_use]
    pub fn get(&self, c: char) -> Option<&str> {
        self.map.get(&c).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Replace every character that has an entry, in a single pass.
    ///
    /// Replacements are never rescanned, so `þ` becomes `th` even if the
    /// table also had an entry for `t`.
    #[must_use]
    pub fn replace(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match self.map.get(&c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
            }
        }
        out
    }
}

impl<S: Into<String>> FromIterator<(char, S)> for Transliterations {
    fn from_iter<I: IntoIterator<Item = (char, S)>>(iter: I) -> Self {
        Self::new(iter)
    }
}
