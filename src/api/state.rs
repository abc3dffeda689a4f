//! Application state shared across API handlers.

use crate::domain::ports::VenueProvider;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub venues: Arc<dyn VenueProvider>,
}

impl AppState {
    pub fn new(venues: Arc<dyn VenueProvider>) -> Self {
        Self { venues }
    }
}
