//! CSS output for resolved button styles.
//!
//! A [`StyleDescription`] becomes one unconditional rule for the button,
//! rules for the content group and icon box, and one pseudo-class rule per
//! overlay that is triggered by interaction. Forced overlays are already
//! part of the unconditional rule and produce nothing extra.

use std::fmt::Write as _;

use crate::button::{ButtonConfig, StyleDescription};

/// Class of the flex wrapper around icon and text.
pub const CONTENT_CLASS: &str = "sk-content";

/// Class of the icon box.
pub const ICON_CLASS: &str = "sk-icon";

/// Renders the full stylesheet for one button.
///
/// `class` is escaped, so any string is accepted.
pub fn to_stylesheet(style: &StyleDescription, class: &str) -> String {
    let selector = class_selector(class);
    let mut out = String::new();

    write_rule(&mut out, &selector, &style.unconditional().to_css_body("  "));
    write_rule(
        &mut out,
        &format!("{} > .{}", selector, CONTENT_CLASS),
        &style.content.group_declarations().to_css_body("  "),
    );
    if let Some(icon) = &style.content.icon {
        write_rule(
            &mut out,
            &format!("{} .{}", selector, ICON_CLASS),
            &icon.declarations().to_css_body("  "),
        );
    }

    for overlay in style.interaction_rules() {
        write_rule(
            &mut out,
            &format!("{}{}", selector, overlay.state.pseudo_class()),
            &overlay.declarations.to_css_body("  "),
        );
    }

    out
}

/// A class name that is the same for equal configurations.
pub fn class_name_for(config: &ButtonConfig) -> String {
    let serialized = serde_json::to_vec(config).unwrap_or_default();
    format!("sk-button-{:016x}", fnv1a(&serialized))
}

fn class_selector(class: &str) -> String {
    let mut selector = String::from(".");
    // Writing into a String cannot fail.
    let _ = cssparser::serialize_identifier(class, &mut selector);
    selector
}

fn write_rule(out: &mut String, selector: &str, body: &str) {
    let _ = writeln!(out, "{} {{\n{}}}", selector, body);
}

fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
        (hash ^ u64::from(*byte)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}
