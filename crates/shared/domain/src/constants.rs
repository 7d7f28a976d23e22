//! Stable string constants shared across the platform.
//!
//! Entity names double as cache-key prefixes, so renaming one invalidates
//! every key built from it.

// Entity names / cache-key prefixes
pub const PRODUCT: &str = "product";
pub const CATEGORY: &str = "category";
pub const ORDER: &str = "order";
pub const CUSTOMER: &str = "customer";
pub const CART: &str = "cart";
pub const SESSION: &str = "session";
pub const MENU: &str = "menu";
pub const FEATURED: &str = "featured";
pub const BESTSELLERS: &str = "bestsellers";
pub const SEARCH: &str = "search";

// Feature flag names (wire form, see `features::FeatureSet`)
pub const AI_CHAT: &str = "ai_chat";
pub const VOICE_ORDER: &str = "voice_order";
pub const SUBSCRIPTIONS: &str = "subscriptions";
pub const LOYALTY: &str = "loyalty";
pub const REAL_TIME: &str = "real_time";

// OpenAPI tags
pub const SYSTEM_TAG: &str = "System";

/// Current API version segment.
pub const API_VERSION: &str = "v1";

/// Cache expiry presets, in seconds.
pub mod cache_ttl {
    pub const MINUTE: u64 = 60;
    pub const FIVE_MINUTES: u64 = 300;
    pub const TEN_MINUTES: u64 = 600;
    pub const THIRTY_MINUTES: u64 = 1_800;
    pub const HOUR: u64 = 3_600;
    pub const SIX_HOURS: u64 = 21_600;
    pub const TWELVE_HOURS: u64 = 43_200;
    pub const DAY: u64 = 86_400;
    pub const WEEK: u64 = 604_800;
    pub const MONTH: u64 = 2_592_000;
}

/// Cache key builders. Keys are colon-delimited, prefix first.
pub mod cache_key {
    #[must_use]
    pub fn product_detail(product_id: &str) -> String {
        format!("{}:detail:{product_id}", super::PRODUCT)
    }

    #[must_use]
    pub fn product_list(page: u32, limit: u32) -> String {
        format!("{}:list:{page}:{limit}", super::PRODUCT)
    }

    #[must_use]
    pub fn category_products(category_id: &str, page: u32) -> String {
        format!("{}:{category_id}:products:{page}", super::CATEGORY)
    }

    #[must_use]
    pub fn cart(customer_id: &str) -> String {
        format!("{}:{customer_id}", super::CART)
    }

    #[must_use]
    pub fn customer_orders(customer_id: &str) -> String {
        format!("{}:{customer_id}:orders", super::CUSTOMER)
    }
}

/// Keys under which web clients persist state locally.
///
/// Every key carries the `locco-bites` namespace so the storefront can be
/// hosted next to other apps without collisions.
pub mod storage_key {
    pub const NAMESPACE: &str = "locco-bites";

    pub const CART: &str = "locco-bites-cart";
    pub const USER: &str = "locco-bites-user";
    pub const PREFERENCES: &str = "locco-bites-preferences";
    pub const RECENT_ORDERS: &str = "locco-bites-recent-orders";

    pub const ALL: [&str; 4] = [CART, USER, PREFERENCES, RECENT_ORDERS];
}

/// Custom HTTP header names (lowercase, ready for `HeaderName::from_static`).
pub mod header {
    pub const REQUEST_ID: &str = "x-request-id";
    pub const API_KEY: &str = "x-api-key";
    pub const CLIENT_VERSION: &str = "x-client-version";
    pub const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
    pub const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

    pub const ALL: [&str; 5] =
        [REQUEST_ID, API_KEY, CLIENT_VERSION, RATE_LIMIT_REMAINING, RATE_LIMIT_RESET];
}

/// Paging defaults shared by catalog listings.
pub mod pagination {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_PAGE_SIZE: u32 = 12;
    pub const PAGE_SIZE_OPTIONS: [u32; 4] = [12, 24, 36, 48];
    pub const MAX_PAGE_SIZE: u32 = 100;
}

/// `strftime`-style format strings (chrono-compatible).
pub mod date_format {
    pub const DATE: &str = "%Y-%m-%d";
    pub const DATETIME: &str = "%Y-%m-%d %H:%M:%S";
    pub const TIME: &str = "%H:%M:%S";
    pub const HUMAN_READABLE: &str = "%B %d, %Y at %I:%M %p";
}

/// UI timing presets, in milliseconds.
pub mod duration_ms {
    pub const ANIMATION_FAST: u32 = 150;
    pub const ANIMATION_NORMAL: u32 = 300;
    pub const ANIMATION_SLOW: u32 = 500;

    pub const TOAST_SHORT: u32 = 2_000;
    pub const TOAST_MEDIUM: u32 = 4_000;
    pub const TOAST_LONG: u32 = 6_000;
}
