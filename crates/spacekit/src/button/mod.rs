//! The Space Kit button.
//!
//! This module provides:
//!
//! - [`ButtonConfig`]: Every option that affects how a button looks
//! - [`resolve`]: Validates a configuration and computes its [`StyleDescription`]
//! - [`InteractionState`]: The hover, focus and active overlays
//! - [`ConfigurationError`]: The configurations that are rejected
//!
//! The resolver is a pure function; see [`resolve`] for the layering rules.

mod config;
mod description;
mod error;
mod overlay;
mod resolve;

pub use config::{ButtonConfig, Padding, Size};
pub use description::{AppliedOverlay, ContentLayout, IconBox, Metrics, StyleDescription, Trigger};
pub use error::ConfigurationError;
pub use overlay::{InteractionState, ACTIVE_SHADOW, BASE_SHADOW, FOCUS_SHADOW, HOVER_SHADOW};
pub use resolve::resolve;
