use axum::extract::FromRef;
use lbites_domain::config::ApiConfig;
use lbites_domain::features::FeatureSet;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug)]
pub struct ApiStateInner {
    pub config: ApiConfig,
    features: FeatureSet,
}

/// Shared application state.
///
/// The feature set is frozen here at construction time: toggles come from the
/// environment once, and stay read-only for the life of the process.
#[derive(Debug, Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let features = config.features.as_set();
        Self { inner: Arc::new(ApiStateInner { config, features }) }
    }

    /// The feature set captured at startup.
    #[must_use]
    pub fn features(&self) -> FeatureSet {
        self.inner.features
    }

    #[must_use]
    pub fn is_enabled(&self, flag: FeatureSet) -> bool {
        self.inner.features.contains(flag)
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<ApiState> for ApiConfig {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.config.clone()
    }
}

impl FromRef<ApiState> for FeatureSet {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.features
    }
}
