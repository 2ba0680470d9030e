//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AnalysisService, AuthService};
use crate::infrastructure::cache::AnalysisCache;

#[derive(Clone)]
pub struct AppState {
    pub analysis_service: AnalysisService,
    pub auth_service: Arc<AuthService>,
    pub cache: Arc<dyn AnalysisCache>,
}

impl AppState {
    pub fn new(
        analysis_service: AnalysisService,
        auth_service: Arc<AuthService>,
        cache: Arc<dyn AnalysisCache>,
    ) -> Self {
        Self {
            analysis_service,
            auth_service,
            cache,
        }
    }
}
