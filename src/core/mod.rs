//! Core module - application infrastructure around the rules engine
//!
//! - [`error`] - [`CoreError`] and [`CoreResult`]
//! - [`settings`] - [`Settings`] and their JSON persistence
//! - [`logging`] - `tracing` subscriber initialisation

pub mod error;
pub mod logging;
pub mod settings;

pub use error::{CoreError, CoreResult};
pub use logging::{init_logging, resolve_filter};
pub use settings::{load_settings, save_settings, settings_path, OutputFormat, Settings};
