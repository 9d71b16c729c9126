//! # Space Kit catalog
//!
//! A browsable demo page for the Space Kit components. The catalog is
//! described in YAML: sections hold groups, groups hold button entries and
//! props that are layered over every entry. Each group is previewed on a
//! light and a dark surface, and the page ends with the table demo.
//!
//! ```rust
//! use spacekit_catalog::{render_page, Catalog};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let html = render_page(&catalog).unwrap();
//!
//! assert!(html.contains("<h2>Hidden Button</h2>"));
//! ```
//!
//! A button whose configuration the resolver rejects fails the whole page
//! with [`CatalogError::InvalidEntry`], naming where the entry lives.

mod error;
mod model;
mod page;

pub use error::CatalogError;
pub use model::{
    ButtonProps, Catalog, ColorMode, Entry, Group, PreparedButton, Section, TableDemo, User,
};
pub use page::{render_page, write_page};
