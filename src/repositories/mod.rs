// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO event emission
// - Explicit SQL only

pub mod wardrobe_repository;

pub use wardrobe_repository::{
    InMemoryWardrobeRepository, SqliteWardrobeRepository, WardrobeRepository,
};

#[cfg(test)]
pub use wardrobe_repository::MockWardrobeRepository;
