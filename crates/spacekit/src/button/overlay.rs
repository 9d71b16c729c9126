//! Interaction-state overlays.
//!
//! Each overlay is computed for every configuration; the resolver decides
//! whether it becomes a pseudo-class rule or is baked into the resting style.

use std::fmt;

use serde::Serialize;

use super::config::ButtonConfig;
use crate::style::{Declarations, Property};

/// Resting shadow; simulates the border.
pub const BASE_SHADOW: &str = "0 1px 4px 0 rgba(18, 21, 26, 0.08), inset 0 0 0 1px rgba(18, 21, 26, 0.2), inset 0 -1px 0 0 rgba(18, 21, 26, 0.05)";

/// Pressed-in shadow.
pub const ACTIVE_SHADOW: &str = "inset 0 0 0 1px rgba(18, 21, 26, 0.2), inset 0 -1px 0 0 rgba(18, 21, 26, 0.05), inset 0 2px 2px 0 rgba(18, 21, 26, 0.12)";

/// Lifted shadow.
pub const HOVER_SHADOW: &str = "0 5px 10px 0 rgba(18, 21, 26, 0.12), inset 0 0 0 1px rgba(18, 21, 26, 0.2), inset 0 -1px 0 0 rgba(18, 21, 26, 0.05)";

/// Focus ring.
pub const FOCUS_SHADOW: &str = "0 1px 4px 0 rgba(18, 21, 26, 0.08), 0 0 0 2px #bbdbff, inset 0 0 0 1px #2075d6, inset 0 -1px 0 0 rgba(18, 21, 26, 0.05)";

/// An interaction state that has its own overlay.
///
/// Variants are declared in merge order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionState {
    Hover,
    Focus,
    Active,
}

impl InteractionState {
    /// Merge order: later states win on shared properties.
    pub const MERGE_ORDER: [InteractionState; 3] = [
        InteractionState::Hover,
        InteractionState::Focus,
        InteractionState::Active,
    ];

    /// The CSS pseudo-class selecting this state.
    pub fn pseudo_class(self) -> &'static str {
        match self {
            InteractionState::Hover => ":hover",
            InteractionState::Focus => ":focus",
            InteractionState::Active => ":active",
        }
    }

    /// Whether the configuration pins this state on.
    pub fn is_forced(self, config: &ButtonConfig) -> bool {
        match self {
            InteractionState::Hover => config.force_hover_state,
            InteractionState::Focus => config.force_focus_state,
            InteractionState::Active => config.force_active_state,
        }
    }

    /// Computes this state's overlay for a configuration.
    pub fn overlay(self, config: &ButtonConfig) -> Declarations {
        match self {
            InteractionState::Hover => hover(config),
            InteractionState::Focus => focus(config),
            InteractionState::Active => active(config),
        }
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pseudo_class()[1..])
    }
}

fn active(config: &ButtonConfig) -> Declarations {
    let overlay = if config.hidden {
        Declarations::new().set(
            Property::BackgroundColor,
            config.hidden_active_background().as_str(),
        )
    } else {
        Declarations::new().set(Property::BoxShadow, ACTIVE_SHADOW)
    };
    overlay.set(Property::Outline, "0")
}

fn hover(config: &ButtonConfig) -> Declarations {
    let overlay = Declarations::new()
        .set(Property::BackgroundColor, config.hover_background().as_str())
        .set(Property::Cursor, "pointer");
    if config.hidden {
        overlay
    } else {
        overlay.set(Property::BoxShadow, HOVER_SHADOW)
    }
}

fn focus(config: &ButtonConfig) -> Declarations {
    let overlay = Declarations::new().set(Property::BoxShadow, FOCUS_SHADOW);
    if config.hidden {
        overlay.set_important(Property::Color, config.hidden_focused().as_str())
    } else {
        overlay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{blue, silver};

    #[test]
    fn test_active_solid() {
        let overlay = InteractionState::Active.overlay(&ButtonConfig::new());
        assert_eq!(overlay.value(Property::BoxShadow), Some(ACTIVE_SHADOW));
        assert_eq!(overlay.value(Property::Outline), Some("0"));
        assert!(!overlay.has(Property::BackgroundColor));
    }

    #[test]
    fn test_active_hidden() {
        let overlay = InteractionState::Active.overlay(&ButtonConfig::new().hidden(true));
        assert_eq!(
            overlay.value(Property::BackgroundColor),
            Some(silver::DARK.as_str())
        );
        assert!(!overlay.has(Property::BoxShadow));
        assert_eq!(overlay.value(Property::Outline), Some("0"));
    }

    #[test]
    fn test_hover_solid_and_hidden() {
        let solid = InteractionState::Hover.overlay(&ButtonConfig::new());
        assert_eq!(solid.value(Property::Cursor), Some("pointer"));
        assert_eq!(solid.value(Property::BoxShadow), Some(HOVER_SHADOW));

        let hidden = InteractionState::Hover.overlay(&ButtonConfig::new().hidden(true));
        assert_eq!(
            hidden.value(Property::BackgroundColor),
            Some(silver::BASE.as_str())
        );
        assert!(!hidden.has(Property::BoxShadow));
    }

    #[test]
    fn test_focus_hidden_forces_color() {
        let overlay = InteractionState::Focus.overlay(&ButtonConfig::new().hidden(true));
        let color = overlay.get(Property::Color).unwrap();
        assert_eq!(color.value, blue::BASE.as_str());
        assert!(color.important);
        assert_eq!(overlay.value(Property::BoxShadow), Some(FOCUS_SHADOW));
    }

    #[test]
    fn test_focus_solid_leaves_color() {
        let overlay = InteractionState::Focus.overlay(&ButtonConfig::new());
        assert!(!overlay.has(Property::Color));
    }

    #[test]
    fn test_state_names() {
        assert_eq!(InteractionState::Hover.to_string(), "hover");
        assert_eq!(InteractionState::Active.pseudo_class(), ":active");
    }
}
