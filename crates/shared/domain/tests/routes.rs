use lbites_domain::routes::Route;
use std::collections::HashSet;

#[test]
fn templates_are_rooted_and_well_formed() {
    for route in Route::ALL {
        let template = route.template();
        assert!(!template.is_empty(), "{route:?} has an empty template");
        assert!(template.starts_with('/'), "{route:?} template {template} is not rooted");
        assert!(
            !template.chars().any(char::is_whitespace),
            "{route:?} template {template} contains whitespace"
        );
    }
}

#[test]
fn templates_are_pairwise_distinct() {
    let mut seen = HashSet::new();
    for route in Route::ALL {
        assert!(seen.insert(route.template()), "duplicate template {}", route.template());
    }
    assert_eq!(seen.len(), Route::ALL.len());
}

#[test]
fn parameterised_routes_expose_their_params() {
    assert_eq!(Route::OrderConfirmation.params().collect::<Vec<_>>(), ["orderId"]);
    assert_eq!(Route::TrackOrder.params().collect::<Vec<_>>(), ["orderId"]);
    assert_eq!(Route::Menu.param_count(), 0);
}

#[test]
fn fill_substitutes_positional_params() {
    assert_eq!(
        Route::OrderConfirmation.fill(&["ord_7F3k"]).as_deref(),
        Some("/order/confirmation/ord_7F3k")
    );
    assert_eq!(Route::TrackOrder.fill(&["ord_7F3k"]).as_deref(), Some("/track/ord_7F3k"));
    assert_eq!(Route::Home.fill(&[]).as_deref(), Some("/"));
}

#[test]
fn fill_rejects_arity_mismatch() {
    assert!(Route::TrackOrder.fill(&[]).is_none());
    assert!(Route::TrackOrder.fill(&["a", "b"]).is_none());
    assert!(Route::Menu.fill(&["extra"]).is_none());
}
