use lbites_domain::constants::{
    API_VERSION, CART, CATEGORY, CUSTOMER, MENU, ORDER, PRODUCT, SESSION, cache_key, cache_ttl,
    header, pagination, storage_key,
};

#[test]
fn constants_match_entity_strings() {
    assert_eq!(PRODUCT, "product");
    assert_eq!(CATEGORY, "category");
    assert_eq!(ORDER, "order");
    assert_eq!(CUSTOMER, "customer");
    assert_eq!(CART, "cart");
    assert_eq!(SESSION, "session");
    assert_eq!(MENU, "menu");
    assert_eq!(API_VERSION, "v1");
}

#[test]
fn cache_keys_are_prefixed_and_colon_delimited() {
    assert_eq!(cache_key::product_detail("42"), "product:detail:42");
    assert_eq!(cache_key::product_list(1, 20), "product:list:1:20");
    assert_eq!(cache_key::category_products("breads", 2), "category:breads:products:2");
    assert_eq!(cache_key::cart("cus_1"), "cart:cus_1");
    assert_eq!(cache_key::customer_orders("cus_1"), "customer:cus_1:orders");
}

#[test]
fn cache_ttls_are_increasing() {
    let ttls = [
        cache_ttl::MINUTE,
        cache_ttl::FIVE_MINUTES,
        cache_ttl::TEN_MINUTES,
        cache_ttl::THIRTY_MINUTES,
        cache_ttl::HOUR,
        cache_ttl::SIX_HOURS,
        cache_ttl::TWELVE_HOURS,
        cache_ttl::DAY,
        cache_ttl::WEEK,
        cache_ttl::MONTH,
    ];
    assert!(ttls.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn storage_keys_are_namespaced_and_distinct() {
    let mut seen = std::collections::HashSet::new();
    for key in storage_key::ALL {
        assert!(
            key.starts_with(storage_key::NAMESPACE),
            "storage key {key} escapes the {} namespace",
            storage_key::NAMESPACE
        );
        assert!(seen.insert(key), "duplicate storage key {key}");
    }
}

#[test]
fn header_names_are_lowercase_tokens() {
    for name in header::ALL {
        assert!(!name.is_empty());
        assert!(
            name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "header {name} is not a lowercase token"
        );
    }
}

#[test]
fn page_size_options_are_sorted_and_contain_default() {
    assert!(pagination::PAGE_SIZE_OPTIONS.windows(2).all(|w| w[0] < w[1]));
    assert!(pagination::PAGE_SIZE_OPTIONS.contains(&pagination::DEFAULT_PAGE_SIZE));
    assert!(pagination::PAGE_SIZE_OPTIONS.iter().all(|&s| s <= pagination::MAX_PAGE_SIZE));
}
