use shortlink_core::{AdmissionGate, ShortlinkSettings, UrlStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    store: Arc<UrlStore>,
    gate: Arc<AdmissionGate>,
}

impl AppState {
    pub fn new(settings: &ShortlinkSettings) -> Self {
        Self {
            store: Arc::new(UrlStore::with_base_url(&settings.base_url)),
            gate: Arc::new(AdmissionGate::new(settings.max_concurrent_requests)),
        }
    }

    pub fn store(&self) -> &UrlStore {
        &self.store
    }

    pub fn gate(&self) -> &AdmissionGate {
        &self.gate
    }
}
