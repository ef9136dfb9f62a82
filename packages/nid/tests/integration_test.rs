//! End-to-end tests for the public API.
//!
//! Exercises the free functions, both presets and a settings-built policy
//! the way a consumer crate would.

use nid::{Nid, NidSettings, Slug, WITH_AAO};
use pretty_assertions::assert_eq;

/// Install a test subscriber so builder logging is visible with RUST_LOG.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_case_default_policy() {
    for (input, want) in [
        ("", ""),
        ("foo bar bee", "foo-bar-bee"),
        ("kale8^79'0-", "kale8790"),
        ("Dürén Ibrahimović", "duren-ibrahimovic"),
        ("ÈÉËÊèéëê", "eeeeeeee"),
        ("Let's_Dance", "lets-dance"),
        ("Let's -- da-da-dance", "lets-da-da-dance"),
        ("  a   b   ", "a-b"),
        (" Fångarna     på  fortet   ", "fangarna-pa-fortet"),
        ("Łódź Straße", "lodz-strasse"),
    ] {
        assert_eq!(nid::case(input), want, "nid::case({input:?})");
    }
}

#[test]
fn test_case_aao_policy() {
    for (input, want) in [
        ("", ""),
        ("ABCDEFGHIJKLMNOPQRSTUVWXYZÅÄÖ", "abcdefghijklmnopqrstuvwxyzåäö"),
        ("ÅÄÖåäö", "åäöåäö"),
        ("ÆØæø", "äöäö"),
        ("ČĆÇčćç", "cccccc"),
        (" Fångarna     på  fortet   ", "fångarna-på-fortet"),
    ] {
        assert_eq!(WITH_AAO.case(input), want, "WITH_AAO.case({input:?})");
    }
}

#[test]
fn test_possible_default_policy() {
    for (input, want) in [
        ("", true),
        ("lets-dance", true),
        ("räksmörgås", false),
        ("dürén-ibrahimović", false),
        ("foo bar", false),
        ("foo/bar", false),
        ("foo\n", false),
        ("FOO", false),
        ("a--b", false),
    ] {
        assert_eq!(nid::possible(input), want, "nid::possible({input:?})");
    }
}

#[test]
fn test_possible_aao_policy() {
    for (input, want) in [
        ("", true),
        ("räksmörgås", true),
        ("dürén-ibrahimović", false),
        ("FOO", false),
        ("rä--ka", false),
    ] {
        assert_eq!(WITH_AAO.possible(input), want, "WITH_AAO.possible({input:?})");
    }
}

#[test]
fn test_separator_equivalence() {
    let want = nid::case("foo bar");
    assert_eq!(want, "foo-bar");
    assert_eq!(nid::case("foo-bar"), want);
    assert_eq!(nid::case("foo_bar"), want);
}

#[test]
fn test_normalized_output_round_trips_through_validator() {
    let inputs = [
        "Hello, World!",
        "  multiple   spaces\tand\ttabs ",
        "-_-_-",
        "emoji 🎉 party",
        "ÞÓRSMÖRK",
        "smörgåsbord & smørrebrød",
        "x × y",
        "naïve café — résumé",
    ];
    for policy in [&*nid::DEFAULT, &*WITH_AAO] {
        for input in inputs {
            let once = policy.case(input);
            assert!(policy.possible(&once), "{input:?} -> {once:?}");
            assert_eq!(policy.case(&once), once, "not idempotent for {input:?}");
        }
    }
}

#[test]
fn test_custom_policy_leaves_presets_untouched() {
    init_tracing();

    let custom = Nid::builder().allow_aao().transliteration('ü', "y").build();
    assert_eq!(custom.case("Über"), "yber");
    assert_eq!(WITH_AAO.case("Über"), "uber");
    assert_eq!(nid::case("Über"), "uber");
}

#[test]
fn test_settings_from_yaml() {
    init_tracing();

    let yaml = r"
preset: allow_aao
transliterations:
  ø: o
";
    let settings: NidSettings = serde_yaml_ng::from_str(yaml).expect("valid settings");
    let policy = settings.build().expect("valid policy");
    assert_eq!(policy.case("Søren Kierkegaard"), "soren-kierkegaard");
    assert_eq!(policy.case("Ærø"), "äro");
}

#[test]
fn test_slug_in_serialized_struct() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Tag {
        nid: Slug,
    }

    let tag = Tag {
        nid: Slug::from_text("Fångarna på fortet"),
    };
    let json = serde_json::to_string(&tag).expect("serializable");
    assert_eq!(json, r#"{"nid":"fangarna-pa-fortet"}"#);

    let tag = Tag {
        nid: WITH_AAO.slug("Fångarna på fortet"),
    };
    let json = serde_json::to_string(&tag).expect("serializable");
    assert_eq!(json, r#"{"nid":"fångarna-på-fortet"}"#);
    let back: Tag = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back.nid, tag.nid);
    assert!(WITH_AAO.validate(back.nid.as_str()).is_ok());
}
