//! # Space Kit
//!
//! Presentational building blocks: a styled button and a generic data
//! table, plus the palette and typography tokens they draw from.
//!
//! The interesting part is the button's style resolver. Given a
//! [`ButtonConfig`] it validates the combination of options and returns a
//! [`StyleDescription`] that separates structural declarations, the resting
//! style, and the hover/focus/active overlays with their triggers.
//! [`css::to_stylesheet`] turns that description into CSS text.
//!
//! ```rust
//! use spacekit::{css, resolve, ButtonConfig, Size};
//!
//! let config = ButtonConfig::new().size(Size::Small).children("Save");
//! let style = resolve(&config).unwrap();
//! let sheet = css::to_stylesheet(&style, "save-button");
//!
//! assert!(sheet.contains(".save-button:hover {"));
//! assert!(sheet.contains("min-width: 76px;"));
//! ```
//!
//! Resolution is synchronous and holds no state, so configurations can be
//! resolved from any number of threads.

pub mod button;
pub mod css;
pub mod palette;
pub mod style;
pub mod table;
pub mod typography;

pub use button::{resolve, ButtonConfig, ConfigurationError, Size, StyleDescription};
pub use palette::{Color, PaletteError};
pub use table::{Column, Table, TableModel};
