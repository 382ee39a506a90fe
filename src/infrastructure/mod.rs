// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Contains implementation details that support the domain
// but are not part of the domain itself.
//
// RULES:
// - Infrastructure serves the domain
// - Infrastructure never dictates domain behavior
// - Infrastructure is replaceable

pub mod clock;
pub mod image_payload;
pub mod random;

pub use clock::{Clock, FixedClock, SystemClock};
pub use image_payload::ImagePayload;
pub use random::{RandomSource, SequenceRandom, ThreadRandom};
