use std::collections::HashSet;

use super::*;

#[test]
fn mailto_wraps_email() {
    assert_eq!(PROFILE.mailto(), "mailto:etaynaor@gmail.com");
}

#[test]
fn about_has_paragraphs() {
    assert!(!PROFILE.about.is_empty());
    assert!(PROFILE.about.iter().all(|p| !p.trim().is_empty()));
}

#[test]
fn capabilities_use_distinct_accents() {
    let accents: HashSet<_> = CAPABILITIES.iter().map(|c| c.accent.class()).collect();
    assert_eq!(accents.len(), CAPABILITIES.len());
}

#[test]
fn every_capability_has_bullets() {
    for capability in CAPABILITIES {
        assert!(!capability.bullets.is_empty(), "{}", capability.title);
    }
}
