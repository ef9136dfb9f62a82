//! nid - normalized, URL-safe identifiers (slugs/tags) from free text.
//!
//! A nid is lower-case digits and letters joined by single dashes. The
//! default policy allows `0-9`, `a-z` and `-`; the [`WITH_AAO`] policy adds
//! `å`, `ä` and `ö`.
//!
//! # Example
//!
//! ```
//! assert_eq!(nid::case("Let's_Dance "), "lets-dance");
//! assert!(nid::possible("lets-dance"));
//! assert!(!nid::possible("lets--dance"));
//!
//! assert_eq!(nid::WITH_AAO.case("Räksmörgås"), "räksmörgås");
//!
//! // The empty string is a possible nid
//! assert!(nid::possible(""));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: pattern constants and [`NidBuilder`]
//! - [`nid`]: the [`Nid`] policy, normalization and validation
//! - [`transliterate`]: character replacement tables
//! - [`slug`]: the validated [`Slug`] newtype
//! - [`settings`]: serde-friendly [`NidSettings`]
//! - [`error`]: error types and Result alias

use std::sync::LazyLock;

pub mod config;
pub mod error;
pub mod nid;
pub mod settings;
pub mod slug;
pub mod transliterate;

// Re-export commonly used items
pub use config::NidBuilder;
pub use error::{NidError, Result};
pub use nid::Nid;
pub use settings::{NidSettings, Preset};
pub use slug::Slug;
pub use transliterate::Transliterations;

/// The default policy, used by [`case`] and [`possible`].
pub static DEFAULT: LazyLock<Nid> = LazyLock::new(Nid::default);

/// Policy that allows å, ä and ö (and spells æ and ø as ä and ö).
pub static WITH_AAO: LazyLock<Nid> = LazyLock::new(|| Nid::builder().allow_aao().build());

/// Normalize `text` into a nid under the default policy.
#[must_use]
pub fn case(text: &str) -> String {
    DEFAULT.case(text)
}

/// Check whether `candidate` is a possible nid under the default policy.
///
/// Note that the empty string is possible.
#[must_use]
pub fn possible(candidate: &str) -> bool {
    DEFAULT.possible(candidate)
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }

    #[test]
    fn test_free_functions_use_default() {
        assert_eq!(case("Fångarna på fortet"), "fangarna-pa-fortet");
        assert!(!possible("fångarna-på-fortet"));
        assert_eq!(WITH_AAO.case("Fångarna på fortet"), "fångarna-på-fortet");
        assert!(WITH_AAO.possible("fångarna-på-fortet"));
    }

    #[test]
    fn test_presets_shared_across_threads() {
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|i| s.spawn(move || WITH_AAO.case(&format!("Tråd {i}"))))
                .collect();
            for (i, handle) in handles.into_iter().enumerate() {
                assert_eq!(handle.join().unwrap(), format!("tråd-{i}"));
            }
        });
    }
}
