//! Integration tests for service selection and requirements text.

use proposalforge::{
    build_service_text, CategoryState, Selection, ServiceCatalog, ServiceCategory,
};

fn seo_catalog() -> ServiceCatalog {
    ServiceCatalog::new(vec![ServiceCategory::new("SEO", ["Write blog", "Fix links"])])
}

#[test]
fn test_empty_selection_yields_empty_text() {
    let catalog = ServiceCatalog::builtin();
    assert_eq!(build_service_text(&catalog, &Selection::new()), "");
}

#[test]
fn test_select_all_lists_everything_once_in_order() {
    let catalog = ServiceCatalog::builtin();
    let text = build_service_text(&catalog, &Selection::select_all(&catalog));

    let mut expected = Vec::new();
    for (i, category) in catalog.categories.iter().enumerate() {
        if i > 0 {
            expected.push(String::new());
        }
        expected.push(format!("{}:", category.name));
        expected.extend(category.items.iter().map(|item| format!("- {}", item)));
    }

    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines, expected);
}

#[test]
fn test_toggle_category_twice_restores_full() {
    let catalog = ServiceCatalog::builtin();
    let category = &catalog.categories[0];
    let mut selection = Selection::select_all(&catalog);

    selection.toggle_category(category);
    assert_eq!(selection.category_state(category), CategoryState::Unselected);
    selection.toggle_category(category);
    assert_eq!(selection.category_state(category), CategoryState::Full);
}

#[test]
fn test_toggle_category_partial_fills() {
    let catalog = seo_catalog();
    let category = &catalog.categories[0];
    let mut selection = Selection::new();

    selection.toggle_item("Fix links");
    assert_eq!(selection.category_state(category), CategoryState::Partial);
    selection.toggle_category(category);
    assert_eq!(selection.category_state(category), CategoryState::Full);
}

#[test]
fn test_single_item_scenario() {
    let catalog = seo_catalog();
    let mut selection = Selection::new();
    selection.toggle_item("Write blog");

    assert_eq!(selection.len(), 1);
    assert!(selection.contains("Write blog"));
    assert_eq!(build_service_text(&catalog, &selection), "SEO:\n- Write blog");
}

#[test]
fn test_catalog_order_beats_selection_order() {
    let catalog = ServiceCatalog::new(vec![
        ServiceCategory::new("Web", ["Design", "Build"]),
        ServiceCategory::new("Ads", ["Search", "Social"]),
    ]);
    let selection: Selection = ["Social", "Build", "Design"].into_iter().collect();

    assert_eq!(
        build_service_text(&catalog, &selection),
        "Web:\n- Design\n- Build\n\nAds:\n- Social"
    );
}

#[test]
fn test_unknown_items_are_accepted_but_not_listed() {
    let catalog = seo_catalog();
    let mut selection = Selection::new();
    selection.toggle_item("Not in catalog");

    assert!(selection.contains("Not in catalog"));
    assert_eq!(build_service_text(&catalog, &selection), "");
}

#[test]
fn test_text_is_deterministic() {
    let catalog = ServiceCatalog::builtin();
    let selection = Selection::select_all(&catalog);
    assert_eq!(
        build_service_text(&catalog, &selection),
        build_service_text(&catalog, &selection.clone())
    );
}
