//! Serde-friendly policy settings.
//!
//! Lets a caller keep the nid policy in its own configuration file:
//!
//! ```yaml
//! preset: allow_aao
//! transliterations:
//!   ü: ue
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::NidBuilder;
use crate::error::{NidError, Result};
use crate::nid::Nid;

/// Starting point for a policy built from settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Digits, a-z and dashes.
    #[default]
    Strict,

    /// Like `Strict`, plus å, ä and ö.
    AllowAao,
}

/// A policy description that builds a [`Nid`].
///
/// Fields that are absent keep the preset's value. Transliterations are
/// merged into the preset's table, entry by entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NidSettings {
    pub preset: Preset,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_pattern: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strip_pattern: Option<String>,

    /// Single-character keys mapped to their replacement.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub transliterations: BTreeMap<String, String>,
}

impl NidSettings {
    /// Build the policy these settings describe.
    ///
    /// # Errors
    ///
    /// - `NidError::InvalidPattern` if a pattern does not compile
    /// - `NidError::InvalidTransliterationKey` if a key is not exactly one
    ///   character
    pub fn build(&self) -> Result<Nid> {
        let mut builder = match self.preset {
            Preset::Strict => NidBuilder::new(),
            Preset::AllowAao => NidBuilder::new().allow_aao(),
        };

        if let Some(pattern) = &self.valid_pattern {
            builder = builder.valid_pattern_str(pattern)?;
        }
        if let Some(pattern) = &self.strip_pattern {
            builder = builder.strip_pattern_str(pattern)?;
        }

        for (key, replacement) in &self.transliterations {
            let from = single_char(key)?;
            if from.is_uppercase() {
                tracing::warn!(
                    key = %key,
                    "Transliteration key is upper-case and never matches lower-cased input"
                );
            }
            builder = builder.transliteration(from, replacement.as_str());
        }

        tracing::debug!(
            preset = ?self.preset,
            overrides = self.transliterations.len(),
            "Resolved nid settings"
        );
        Ok(builder.build())
    }
}

fn single_char(key: &str) -> Result<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(NidError::InvalidTransliterationKey(key.to_string())),
    }
}
