//! # Schemaform Theme
//!
//! Process-wide light/dark theme preference.
//!
//! This crate provides:
//! - The `Theme` value and its CSS class / toggle caption
//! - A key-value store trait with in-memory and JSON-file implementations
//! - `ThemeService`: explicit initialization from a store, get/set/toggle
//!   with synchronous persistence, and change subscriptions

pub mod error;
pub mod service;
pub mod store;
pub mod theme;

pub use error::ThemeError;
pub use service::ThemeService;
pub use store::{FileStore, MemoryStore, ThemeStore};
pub use theme::{THEME_KEY, Theme};
