pub mod types;
pub mod validation;
pub mod store;
pub mod dynamo;
pub mod memory;
pub mod config;
pub mod responses;
pub mod users;

use std::sync::Arc;
use store::UserStore;

/// Shared application state
pub struct AppState {
    pub store: Box<dyn UserStore>,
}

impl AppState {
    pub fn new(store: impl UserStore + 'static) -> Arc<Self> {
        Arc::new(Self {
            store: Box::new(store),
        })
    }
}
