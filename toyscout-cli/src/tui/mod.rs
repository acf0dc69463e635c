//! Toyscout TUI - interactive search form with tabbed results
//!
//! A small two-mode interface:
//! - Input mode: type a query, Enter submits (blank input is ignored)
//! - Browse mode: cycle the four result tabs
//!
//! While a request is in flight the input field shows a spinner and
//! further submits are ignored. Failures surface in the status line
//! while the previous result card stays up.

pub mod app;
pub mod event;
pub mod terminal;
pub mod ui;

pub use app::{App, Mode};
pub use terminal::run;
