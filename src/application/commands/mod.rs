// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the presentation layer and services
// - Commands return DTOs, or a serialized ErrorResponse as the error
// - Commands NEVER contain business logic

pub mod suggestion_commands;
pub mod wardrobe_commands;

pub use suggestion_commands::*;
pub use wardrobe_commands::*;
