//! toyscout-core - toy lookup client and session state
//!
//! This crate provides:
//! - `ToyInfo` data model and presentation tabs
//! - Configuration loading with env overrides
//! - The chat-completions dispatcher with two-stage response decode
//! - The explicit search-session state machine
//!
//! ## Architecture
//!
//! ```text
//! query → ToyInfoClient → decode_envelope → decode_payload → ToyInfo
//!                                                               ↓
//!                          SearchSession { Idle | Loading | Displaying | Failed }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod toy;

pub use client::{decode_envelope, decode_payload, system_prompt, user_prompt, ToyInfoClient};
pub use config::{ApiConfig, ScoutConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL};
pub use error::{Result, ScoutError};
pub use session::{SearchSession, SearchState};
pub use toy::{InfoTab, ToyInfo};
