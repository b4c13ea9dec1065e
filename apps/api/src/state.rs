use std::sync::Arc;

use crate::outreach::assembler::PackAssembler;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Holds the store, the fit scorer and the generation strategy chosen at startup.
    pub assembler: Arc<PackAssembler>,
}
