//! Black-box tests for `LanguageDetector` via the crate's public API.

use std::path::Path;

use codechunk_lang::LanguageDetector;

#[test]
fn detects_common_languages_from_extension() {
    let detector = LanguageDetector::new();
    let cases = [
        ("main.rs", "rust"),
        ("script.py", "python"),
        ("app.js", "javascript"),
        ("component.tsx", "tsx"),
        ("index.ts", "typescript"),
        ("Main.java", "java"),
        ("main.go", "go"),
        ("lib.rb", "ruby"),
        ("index.php", "php"),
        ("App.swift", "swift"),
    ];

    for (path, expected) in cases {
        assert_eq!(
            detector.detect_name(Path::new(path)),
            Some(expected.to_string()),
            "path {path} should detect as {expected}"
        );
    }
}

#[test]
fn known_filenames_are_detected_without_an_extension() {
    let detector = LanguageDetector::new();
    assert_eq!(detector.detect_name(Path::new("Dockerfile")), Some("dockerfile".to_string()));
    assert_eq!(detector.detect_name(Path::new("Makefile")), Some("makefile".to_string()));
    assert_eq!(detector.detect_name(Path::new("Gemfile")), Some("ruby".to_string()));
}

#[test]
fn prefixed_known_filenames_still_resolve() {
    let detector = LanguageDetector::new();
    assert_eq!(
        detector.detect_name(Path::new("docker/Dockerfile.prod")),
        Some("dockerfile".to_string())
    );
}

#[test]
fn unsupported_files_fail_detection() {
    let detector = LanguageDetector::new();
    assert!(detector.detect(Path::new("notes.txt")).is_err());
    assert!(detector.detect_opt(Path::new("notes.txt")).is_none());
}

#[test]
fn matches_languages_respects_allow_list() {
    let detector = LanguageDetector::new();
    let allowed = vec!["rust".to_string(), "go".to_string()];
    assert!(detector.matches_languages(Path::new("main.rs"), &allowed));
    assert!(!detector.matches_languages(Path::new("main.py"), &allowed));
}

#[test]
fn registry_is_reachable_from_the_detector() {
    let detector = LanguageDetector::new();
    let profile = detector.registry().by_name("rust").expect("rust profile registered");
    assert_eq!(profile.name, "rust");
}
