// src/events/handlers/notice_handler.rs
//
// Notice Handler - turns wardrobe events into transient user notices
//
// CRITICAL RULES:
// - Notices never block the action that produced them
// - No business logic; only translation into display text
// - Drained by the presentation layer after each command

use std::sync::{Arc, Mutex, PoisonError};

use crate::events::{
    ClassificationFellBack, EventBus, GarmentAdded, GarmentDeleted, GarmentWorn, ImageRejected,
    WardrobePersistFailed,
};

pub const ADDED_NOTICE: &str = "Added to wardrobe!";
pub const DELETED_NOTICE: &str = "Item deleted successfully";
pub const WORN_NOTICE: &str = "Marked as worn today";
/// Wearing the garment that was just suggested
pub const WORN_SUGGESTION_NOTICE: &str = "Nice! Enjoy your outfit.";

/// Shown when a wardrobe write fails
pub const SAVE_FAILED_NOTICE: &str = "Storage full or unavailable. Your changes are kept for this session only.";

/// Shown when the image could not be read
pub const IMAGE_FAILED_NOTICE: &str = "Failed to process image";

/// Shown when classification fell back to the default tags
pub const DEFAULT_TAGS_NOTICE: &str = "Couldn't recognize this item. Default tags were used.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Added,
    Deleted,
    Worn,
    SaveFailed,
    ImageFailed,
    DefaultTags,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Pending notices, oldest first
#[derive(Debug, Default)]
pub struct NoticeBoard {
    pending: Mutex<Vec<Notice>>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&self, kind: NoticeKind, message: impl Into<String>) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Notice {
                kind,
                message: message.into(),
            });
    }

    /// Take every pending notice
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.pending.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

// ============================================================================
// HANDLER REGISTRATION
// ============================================================================

/// Registers the notice handlers and returns the board they post to
pub fn register_notice_handlers(bus: &EventBus) -> Arc<NoticeBoard> {
    let board = Arc::new(NoticeBoard::new());

    let added_board = Arc::clone(&board);
    bus.subscribe::<GarmentAdded, _>(move |_| {
        added_board.post(NoticeKind::Added, ADDED_NOTICE);
    });

    let deleted_board = Arc::clone(&board);
    bus.subscribe::<GarmentDeleted, _>(move |_| {
        deleted_board.post(NoticeKind::Deleted, DELETED_NOTICE);
    });

    let worn_board = Arc::clone(&board);
    bus.subscribe::<GarmentWorn, _>(move |event| {
        let message = if event.cleared_suggestion {
            WORN_SUGGESTION_NOTICE
        } else {
            WORN_NOTICE
        };
        worn_board.post(NoticeKind::Worn, message);
    });

    let save_board = Arc::clone(&board);
    bus.subscribe::<WardrobePersistFailed, _>(move |event| {
        log::warn!("Wardrobe not saved: {}", event.reason);
        save_board.post(NoticeKind::SaveFailed, SAVE_FAILED_NOTICE);
    });

    let image_board = Arc::clone(&board);
    bus.subscribe::<ImageRejected, _>(move |event| {
        log::warn!("Image rejected: {}", event.reason);
        image_board.post(NoticeKind::ImageFailed, IMAGE_FAILED_NOTICE);
    });

    let classify_board = Arc::clone(&board);
    bus.subscribe::<ClassificationFellBack, _>(move |_| {
        classify_board.post(NoticeKind::DefaultTags, DEFAULT_TAGS_NOTICE);
    });

    log::debug!("Notice handlers registered");
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_events_post_notices() {
        let bus = EventBus::new();
        let board = register_notice_handlers(&bus);

        bus.emit(WardrobePersistFailed::new("quota exceeded".to_string()));
        bus.emit(ImageRejected::new("unreadable".to_string()));
        bus.emit(ClassificationFellBack::new());

        let notices = board.drain();
        assert_eq!(notices.len(), 3);
        assert_eq!(notices[0].kind, NoticeKind::SaveFailed);
        assert_eq!(notices[1].message, IMAGE_FAILED_NOTICE);
        assert_eq!(notices[2].kind, NoticeKind::DefaultTags);
        assert_eq!(notices[2].message, DEFAULT_TAGS_NOTICE);
        assert!(board.drain().is_empty());
    }

    #[test]
    fn test_wearing_suggestion_gets_its_own_notice() {
        let bus = EventBus::new();
        let board = register_notice_handlers(&bus);

        bus.emit(GarmentWorn::new("a".into(), chrono::Utc::now(), true));
        bus.emit(GarmentWorn::new("b".into(), chrono::Utc::now(), false));

        let messages: Vec<String> = board.drain().into_iter().map(|n| n.message).collect();
        assert_eq!(messages, vec![WORN_SUGGESTION_NOTICE, WORN_NOTICE]);
    }
}
