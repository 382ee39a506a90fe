// src/app/mod.rs
//
// Application bootstrap: configuration and wiring

pub mod bootstrap;
pub mod config;

pub use bootstrap::{assemble_state, init_app};
pub use config::AppConfig;
