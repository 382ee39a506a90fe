// src/events/handlers/mod.rs
//
// Event Handlers
//
// Handlers use closure-based subscription via EventBus::subscribe.
// EventHandler type is internal to the bus module and NOT exported.

pub mod notice_handler;

// Only export the registration function and the notice types
pub use notice_handler::{register_notice_handlers, Notice, NoticeBoard, NoticeKind};
