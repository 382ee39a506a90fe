// src/application/state.rs

use std::sync::Arc;

use crate::events::{EventBus, NoticeBoard};
use crate::services::WardrobeService;

/// Application state shared by every command.
/// Services are built once by `app::init_app` and passed here.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub notices: Arc<NoticeBoard>,
    pub wardrobe_service: Arc<WardrobeService>,
}
