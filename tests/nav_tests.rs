// Host-side tests for active navigation link bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod nav {
    include!("../src/core/nav.rs");
}

use nav::*;

fn portfolio_nav() -> NavIndex {
    NavIndex::new(
        ["#about", "#experience", "#projects"]
            .iter()
            .map(|s| s.to_string()),
    )
}

fn sighting(id: &str, top: f64, intersecting: bool) -> SectionSighting {
    SectionSighting {
        id: id.to_string(),
        top,
        intersecting,
    }
}

#[test]
fn fragment_id_strips_the_hash() {
    assert_eq!(fragment_id("#about"), Some("about"));
    assert_eq!(fragment_id("#projects"), Some("projects"));
    assert_eq!(fragment_id("#"), None);
    assert_eq!(fragment_id(""), None);
    assert_eq!(fragment_id("/resume.pdf"), None);
    assert_eq!(fragment_id("https://example.com/#about"), None);
}

#[test]
fn initial_section_prefers_the_url_fragment() {
    assert_eq!(initial_section("#projects", "about"), "projects");
}

#[test]
fn initial_section_falls_back_without_fragment() {
    assert_eq!(initial_section("", "about"), "about");
    assert_eq!(initial_section("#", "about"), "about");
}

#[test]
fn fragment_at_load_marks_only_its_link() {
    let mut nav = portfolio_nav();
    let marks = nav.activate(initial_section("#projects", "about"));
    assert_eq!(marks.as_slice(), &[false, false, true]);
    assert_eq!(nav.active(), Some("projects"));
}

#[test]
fn no_fragment_at_load_marks_about() {
    let mut nav = portfolio_nav();
    let marks = nav.activate(initial_section("", "about"));
    assert_eq!(marks.as_slice(), &[true, false, false]);
}

#[test]
fn switching_sections_clears_the_previous_link() {
    let mut nav = portfolio_nav();
    nav.activate("about");
    let marks = nav.activate("experience");
    assert_eq!(marks.as_slice(), &[false, true, false]);
    assert_eq!(nav.active(), Some("experience"));
}

#[test]
fn unknown_section_clears_every_link() {
    let mut nav = portfolio_nav();
    nav.activate("about");
    let marks = nav.activate("contact");
    assert!(marks.iter().all(|on| !on));
    assert_eq!(nav.active(), Some("contact"));
}

#[test]
fn duplicate_hrefs_mark_a_single_link() {
    let mut nav = NavIndex::new(
        ["#about", "#projects", "#projects"]
            .iter()
            .map(|s| s.to_string()),
    );
    let marks = nav.activate("projects");
    assert_eq!(marks.iter().filter(|on| **on).count(), 1);
    assert_eq!(nav.position("projects"), Some(1));
}

#[test]
fn empty_nav_produces_no_marks() {
    let mut nav = NavIndex::default();
    assert!(nav.activate("about").is_empty());
    assert_eq!(nav.position("about"), None);
}

#[test]
fn topmost_visible_ignores_non_intersecting() {
    let batch = [
        sighting("about", -400.0, false),
        sighting("experience", 180.0, true),
    ];
    assert_eq!(topmost_visible(&batch), Some("experience"));
}

#[test]
fn topmost_visible_picks_smallest_top() {
    let batch = [
        sighting("projects", 220.0, true),
        sighting("experience", -35.0, true),
        sighting("about", 90.0, true),
    ];
    assert_eq!(topmost_visible(&batch), Some("experience"));
}

#[test]
fn topmost_visible_equal_tops_keep_delivery_order() {
    let batch = [sighting("a", 100.0, true), sighting("b", 100.0, true)];
    assert_eq!(topmost_visible(&batch), Some("a"));
}

#[test]
fn topmost_visible_none_when_nothing_intersects() {
    assert_eq!(topmost_visible(&[]), None);
    assert_eq!(topmost_visible(&[sighting("about", 0.0, false)]), None);
    assert_eq!(topmost_visible(&[sighting("", 0.0, true)]), None);
}
