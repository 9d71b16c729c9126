//! The button style resolver.
//!
//! Resolution validates first and then builds the style in one pass:
//!
//! 1. Structural declarations (shape, sizing, typography, outline reset).
//! 2. Resting declarations (background, base shadow, the important
//!    disabled text color).
//! 3. Overlays in [`InteractionState::MERGE_ORDER`] (hover, focus, active).
//!    A forced overlay is merged into the resting block with
//!    [`Declarations::merge`]; any other overlay is recorded as an
//!    on-interaction rule. Disabled buttons get no overlays at all.
//!
//! Because merging is ordered, forced focus beats forced hover and forced
//! active beats forced focus on any shared property. Important declarations
//! (disabled text color, hidden focus color) are never replaced by later
//! plain ones.

use super::config::ButtonConfig;
use super::description::{
    AppliedOverlay, ContentLayout, IconBox, Metrics, StyleDescription, Trigger,
};
use super::error::ConfigurationError;
use super::overlay::{InteractionState, BASE_SHADOW};
use crate::palette::Color;
use crate::style::{Declarations, Property};
use crate::typography;

/// Weight used for button labels regardless of the size's body weight.
const LABEL_FONT_WEIGHT: &str = "600";

const CORNER_RADIUS: &str = "4px";

/// Resolves a configuration to its style.
///
/// # Errors
///
/// Returns a [`ConfigurationError`] for a FAB without an icon, a FAB with
/// children, or forced active and hover states together. Nothing is
/// computed for a rejected configuration.
///
/// # Example
///
/// ```rust
/// use spacekit::button::{resolve, ButtonConfig, InteractionState, Trigger};
/// use spacekit::style::Property;
///
/// let style = resolve(&ButtonConfig::new().children("Save").force_hover_state(true)).unwrap();
///
/// assert_eq!(style.resting.value(Property::Cursor), Some("pointer"));
/// let hover = style.overlay(InteractionState::Hover).unwrap();
/// assert_eq!(hover.trigger, Trigger::Forced);
/// ```
pub fn resolve(config: &ButtonConfig) -> Result<StyleDescription, ConfigurationError> {
    if let Err(err) = config.validate() {
        tracing::debug!(error = %err, "rejected button configuration");
        return Err(err);
    }

    let metrics = Metrics {
        icon_size: config.icon_size(),
        icon_only: config.is_icon_only(),
        min_width: config.min_width(),
        padding: config.padding(),
    };

    let structural = structural(config, &metrics);
    let mut resting = resting(config);
    let mut overlays = Vec::new();

    if !config.disabled {
        for state in InteractionState::MERGE_ORDER {
            let declarations = state.overlay(config);
            let trigger = if state.is_forced(config) {
                resting.merge(&declarations);
                Trigger::Forced
            } else {
                Trigger::OnInteraction
            };
            overlays.push(AppliedOverlay {
                state,
                trigger,
                declarations,
            });
        }
    }

    let content = ContentLayout {
        icon: config.icon.as_ref().map(|name| IconBox {
            name: name.clone(),
            size: metrics.icon_size,
            margin: if metrics.icon_only { "3px 0" } else { "0 4px 0" },
        }),
        text: config.children.clone(),
    };

    tracing::debug!(
        size = ?config.size,
        hidden = config.hidden,
        disabled = config.disabled,
        fab = config.fab,
        overlays = overlays.len(),
        "resolved button style"
    );

    Ok(StyleDescription {
        metrics,
        structural,
        resting,
        overlays,
        content,
    })
}

fn structural(config: &ButtonConfig, metrics: &Metrics) -> Declarations {
    let type_token = typography::base(config.size);
    Declarations::new()
        .set(Property::Appearance, "button")
        .set(
            Property::BorderRadius,
            if config.fab { "100%" } else { CORNER_RADIUS },
        )
        .set(Property::BorderWidth, "0")
        .set(Property::MinWidth, format!("{}px", metrics.min_width))
        .set(Property::Padding, metrics.padding.to_css())
        .set(Property::FontFamily, type_token.font_family)
        .set(Property::FontSize, type_token.font_size)
        .set(Property::LineHeight, type_token.line_height)
        .set(Property::FontWeight, LABEL_FONT_WEIGHT)
        .set(Property::Outline, "0")
}

fn resting(config: &ButtonConfig) -> Declarations {
    let background = if config.hidden {
        Color::TRANSPARENT
    } else if config.disabled {
        config.disabled_background()
    } else {
        config.resting_background()
    };

    let mut block = Declarations::new().set(Property::BackgroundColor, background.as_str());
    if !config.hidden {
        block = block.set(Property::BoxShadow, BASE_SHADOW);
    }
    if config.disabled {
        block = block.set_important(Property::Color, config.disabled_text().as_str());
    }
    block
}
