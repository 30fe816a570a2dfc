//! Black-box tests for `LanguageRegistry` via the crate's public API.

use codechunk_lang::{LanguageRegistry, ParserStatus};
use rstest::*;

#[test]
fn registers_every_language_profile() {
    let registry = LanguageRegistry::new();
    assert!(registry.all_names().len() >= 35);
}

#[rstest]
#[case("rust")]
#[case("c++")]
#[case("c#")]
#[case("javascript")]
#[case("tsx")]
fn profile_lookup_is_case_insensitive(#[case] name: &str) {
    let registry = LanguageRegistry::new();
    assert!(registry.by_name(&name.to_uppercase()).is_some());
}

#[test]
fn rust_profile_has_expected_node_types() {
    let registry = LanguageRegistry::new();
    let rust = registry.by_name("rust").expect("rust registered");
    assert_eq!(rust.status, ParserStatus::TreeSitter);
    assert_eq!(rust.comment_prefix, Some("//"));
    assert!(rust.import_types.contains(&"use_declaration"));
    assert!(rust.container_types.contains(&"function_item"));
    assert!(rust.identifier_types.contains(&"metavariable"));
}

#[test]
fn python_profile_uses_indentation_block_delimiters() {
    let registry = LanguageRegistry::new();
    let python = registry.by_name("python").expect("python registered");
    assert_eq!(python.comment_prefix, Some("#"));
    assert_eq!(python.block_delimiters.start, Some(":"));
    assert_eq!(python.block_delimiters.end, None);
}

#[test]
fn unknown_language_name_returns_none() {
    let registry = LanguageRegistry::new();
    assert!(registry.by_name("not-a-real-language").is_none());
}

#[test]
fn plaintext_languages_have_no_grammar_dependency() {
    let registry = LanguageRegistry::new();
    for name in ["html", "css", "dockerfile", "makefile", "perl", "hcl"] {
        let profile = registry.by_name(name).expect("profile registered");
        assert_eq!(profile.status, ParserStatus::Plaintext);
    }
}
