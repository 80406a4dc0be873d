//! Tests for the layer/chapter catalog and display context.

use codehouse_core::{Catalog, Chapter, DisplayContext, Layer, get_chapters, get_layers};
use codehouse_error::ConfigErrorKind;
use std::collections::HashSet;

#[test]
fn test_house_catalog_is_valid() {
    let house = Catalog::house();
    let rebuilt = Catalog::new(house.layers().clone(), house.chapters().clone());
    assert!(rebuilt.is_ok(), "House catalog should validate: {:?}", rebuilt.err());
}

#[test]
fn test_layer_ids_unique_and_non_empty() {
    let ids: Vec<&str> = get_layers().iter().map(|l| l.id().as_str()).collect();
    let unique: HashSet<&str> = ids.iter().copied().collect();

    assert_eq!(ids.len(), 7);
    assert_eq!(unique.len(), ids.len());
    assert!(ids.iter().all(|id| !id.is_empty()));
}

#[test]
fn test_chapter_presets_unique_and_resolve() {
    let layer_ids: HashSet<&str> = get_layers().iter().map(|l| l.id().as_str()).collect();
    let presets: HashSet<&str> = get_chapters()
        .iter()
        .map(|c| c.preset_key().as_str())
        .collect();

    assert_eq!(presets.len(), get_chapters().len());
    for chapter in get_chapters() {
        for id in chapter.layer_ids() {
            assert!(
                layer_ids.contains(id.as_str()),
                "Chapter {} references unknown layer {}",
                chapter.preset_key(),
                id
            );
        }
    }
}

#[test]
fn test_house_layer_order_and_defaults() {
    let layers = get_layers();
    assert_eq!(layers[0].id(), "environment-layer");
    assert_eq!(layers[6].id(), "systems-layer");
    assert_eq!(
        Catalog::shared().default_layer_ids(),
        vec!["environment-layer", "house-structure"]
    );
}

#[test]
fn test_base_is_default_chapter() {
    let catalog = Catalog::shared();
    let default = catalog.default_chapter().expect("house has a default chapter");
    assert_eq!(default.preset_key(), "base");
    assert!(catalog.is_default_chapter(default));

    let css = catalog.chapter("css-design").expect("css chapter exists");
    assert!(!catalog.is_default_chapter(css));
}

#[test]
fn test_shared_catalog_matches_fresh_build() {
    assert_eq!(Catalog::shared(), &Catalog::house());
}

#[test]
fn test_asset_filenames() {
    let names = Catalog::shared().asset_filenames();
    assert_eq!(names.len(), 7);
    assert!(names.contains(&"house-structure.svg".to_string()));
}

#[test]
fn test_rejects_duplicate_layer() {
    let err = Catalog::new(
        vec![Layer::new("a", "A", true), Layer::new("a", "Again", false)],
        vec![],
    )
    .expect_err("Duplicate ids should be rejected");
    assert_eq!(err.kind(), &ConfigErrorKind::DuplicateLayer("a".to_string()));
}

#[test]
fn test_rejects_empty_layer_id() {
    let err = Catalog::new(vec![Layer::new("", "Nameless", true)], vec![])
        .expect_err("Empty ids should be rejected");
    assert_eq!(err.kind(), &ConfigErrorKind::EmptyLayerId(0));
}

#[test]
fn test_rejects_duplicate_preset() {
    let err = Catalog::new(
        vec![Layer::new("a", "A", true)],
        vec![
            Chapter::new("One", "base", "", ["a"]),
            Chapter::new("Two", "base", "", ["a"]),
        ],
    )
    .expect_err("Duplicate presets should be rejected");
    assert_eq!(err.kind(), &ConfigErrorKind::DuplicatePreset("base".to_string()));
}

#[test]
fn test_rejects_dangling_layer_reference() {
    let err = Catalog::new(
        vec![Layer::new("a", "A", true)],
        vec![Chapter::new("Base", "base", "", ["a", "ghost"])],
    )
    .expect_err("Unknown layer references should be rejected");
    assert_eq!(
        err.kind(),
        &ConfigErrorKind::UnknownLayer {
            preset: "base".to_string(),
            layer: "ghost".to_string(),
        }
    );
}

#[test]
fn test_no_default_chapter_when_sets_differ() {
    let catalog = Catalog::new(
        vec![Layer::new("a", "A", true), Layer::new("b", "B", false)],
        vec![Chapter::new("Both", "both", "", ["a", "b"])],
    )
    .expect("Valid catalog");
    assert!(catalog.default_chapter().is_none());
}

#[test]
fn test_catalog_serializes() {
    let json = serde_json::to_value(Catalog::shared()).expect("Serializable");
    assert_eq!(json["layers"][0]["id"], "environment-layer");
    assert_eq!(json["chapters"][5]["preset_key"], "backend");
}

#[test]
fn test_display_defaults() {
    let ctx = DisplayContext::from_lookup(|_| None);
    assert_eq!(ctx.account_name(), "TortoiseWolfe");
    assert_eq!(ctx.project_name(), "The_House_that_Code_Built");
    assert_eq!(
        ctx.published_site_url(),
        "https://TortoiseWolfe.github.io/The_House_that_Code_Built"
    );
    assert_eq!(ctx, DisplayContext::default());
}

#[test]
fn test_display_explicit_url_wins() {
    let ctx = DisplayContext::from_lookup(|name| match name {
        "GITHUB_PAGES_URL" => Some("https://example.org/house/".to_string()),
        _ => None,
    });
    assert_eq!(ctx.published_site_url(), "https://example.org/house/");
    assert_eq!(ctx.base_href(), "https://example.org/house/");
}

#[test]
fn test_display_empty_values_fall_back() {
    let ctx = DisplayContext::from_lookup(|name| match name {
        "GITHUB_USERNAME" => Some(String::new()),
        "REPO_NAME" => Some("  ".to_string()),
        _ => None,
    });
    assert_eq!(ctx, DisplayContext::default());
}

#[test]
fn test_repository_url() {
    let ctx = DisplayContext::new("octo", "house", None);
    assert_eq!(ctx.repository_url(), "https://github.com/octo/house");
}
