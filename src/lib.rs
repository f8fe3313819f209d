//! Mousetoe - mouse-driven tic-tac-toe in the terminal.
//!
//! The game rules live in [`mousetoe_core`]; this crate adds everything
//! around them:
//!
//! - **Menu**: text menu that picks a game mode
//! - **TUI**: ratatui renderer that maps mouse clicks to board cells
//! - **Geometry**: click-to-cell translation
//! - **Config**: TOML settings and command-line flags

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod geometry;
pub mod logging;
pub mod menu;
pub mod tui;

pub use config::{AppConfig, ConfigError};
pub use geometry::BoardGeometry;
pub use menu::{MenuChoice, MenuError, run_menu};
