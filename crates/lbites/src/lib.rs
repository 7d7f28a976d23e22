//! Facade crate for the `LocoBites` platform modules.
//! Re-exports domain/kernel primitives and aggregates feature wiring.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `lbites` with the desired feature flags (`server`).
//! - Call [`features::runtime_features`] at startup to freeze the capability set.

pub use lbites_domain as domain;
pub use lbites_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use lbites_kernel::server::router::system_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    use lbites_domain::config::ApiConfig;
    use lbites_domain::features::FeatureSet;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }

    /// Collects the capability toggles the process was started with.
    ///
    /// The result is frozen into server state; flags cannot change after
    /// initialization.
    #[must_use]
    pub fn runtime_features(config: &ApiConfig) -> FeatureSet {
        config.features.as_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lbites_domain::config::ApiConfig;
    use lbites_domain::features::FeatureSet;

    #[test]
    fn runtime_features_default_empty() {
        let cfg = ApiConfig::default();
        assert_eq!(features::runtime_features(&cfg), FeatureSet::empty());
    }

    #[test]
    fn unknown_build_feature_is_disabled() {
        assert!(!features::is_enabled("time-travel"));
    }
}
