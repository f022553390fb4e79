//! Range slider TUI
//!
//! Terminal front-end for `rangeslider-core`:
//! - Two numeric fields bound to the lower and upper handles
//! - A mouse-draggable dual-handle slider widget
//! - Gap readout and status bar

pub mod app;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use theme::Theme;
