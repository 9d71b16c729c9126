//! Typography tokens.
//!
//! Static font definitions keyed by [`Size`]. The button resolver copies
//! these into its structural block; nothing here is computed.

use serde::Serialize;

use crate::button::Size;

/// Font attributes for one size step of the type scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyDefinition {
    pub font_family: &'static str,
    pub font_size: &'static str,
    pub font_weight: u16,
    pub line_height: &'static str,
}

const FONT_FAMILY: &str = "'Source Sans Pro', -apple-system, BlinkMacSystemFont, sans-serif";

/// Body text at small size.
pub const BASE_SMALL: TypographyDefinition = TypographyDefinition {
    font_family: FONT_FAMILY,
    font_size: "13px",
    font_weight: 400,
    line_height: "20px",
};

/// Body text at the default size.
pub const BASE_BASE: TypographyDefinition = TypographyDefinition {
    font_family: FONT_FAMILY,
    font_size: "15px",
    font_weight: 400,
    line_height: "23px",
};

/// Body text at large size.
pub const BASE_LARGE: TypographyDefinition = TypographyDefinition {
    font_family: FONT_FAMILY,
    font_size: "17px",
    font_weight: 400,
    line_height: "26px",
};

/// Returns the body text token for a button size.
pub fn base(size: Size) -> &'static TypographyDefinition {
    match size {
        Size::Small => &BASE_SMALL,
        Size::Default => &BASE_BASE,
        Size::Large => &BASE_LARGE,
    }
}
