//! Game module - the front end of the rules engine
//!
//! - [`session`] - [`GameSession`]: two-click move entry, undo, reset
//! - [`render`] - text board with selection markers
//! - [`command`] - parsing of interactive input lines

pub mod command;
pub mod render;
pub mod session;

pub use command::Command;
pub use render::{render_position, render_session, RenderOptions};
pub use session::{ClickOutcome, GameSession};
