use crate::inspector::BucketInspector;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inspector: Arc<BucketInspector>,
}

impl AppState {
    pub fn new(inspector: Arc<BucketInspector>) -> Self {
        Self { inspector }
    }
}
