//! Style declarations and the cascade used to layer them.
//!
//! This module provides the core styling primitives:
//!
//! - [`Property`]: The CSS properties the components emit
//! - [`Declaration`]: A value plus its `!important` flag
//! - [`Declarations`]: An ordered block of declarations with an explicit merge rule
//!
//! Layering works like a stylesheet cascade restricted to a single element:
//! blocks are merged in a fixed order and later blocks win, except that an
//! important declaration can only be replaced by another important one.

mod declarations;
mod property;

pub use declarations::{Declaration, Declarations};
pub use property::Property;
