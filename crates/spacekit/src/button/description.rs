//! The resolved style of a button.

use serde::Serialize;

use super::config::Padding;
use super::overlay::InteractionState;
use crate::style::{Declarations, Property};

/// How an overlay reaches the rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Trigger {
    /// Already merged into [`StyleDescription::resting`]; emit nothing extra.
    Forced,
    /// Emit as a conditional pseudo-class rule.
    OnInteraction,
}

/// An overlay that takes part in the output, in merge order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedOverlay {
    pub state: InteractionState,
    pub trigger: Trigger,
    pub declarations: Declarations,
}

/// Sizing values derived from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub icon_size: u16,
    pub icon_only: bool,
    pub min_width: u16,
    pub padding: Padding,
}

/// The square box the icon renders in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconBox {
    pub name: String,
    pub size: u16,
    pub margin: &'static str,
}

impl IconBox {
    pub fn declarations(&self) -> Declarations {
        let edge = format!("{}px", self.size);
        Declarations::new()
            .set(Property::Display, "inline-block")
            .set(Property::Width, edge.clone())
            .set(Property::Height, edge)
            .set(Property::Margin, self.margin)
    }
}

/// Layout of the button's content: an optional icon followed by optional
/// text, centered as one inline group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentLayout {
    pub icon: Option<IconBox>,
    pub text: Option<String>,
}

impl ContentLayout {
    /// Neither icon nor text; the button keeps icon-only sizing.
    pub fn is_empty(&self) -> bool {
        self.icon.is_none() && self.text.is_none()
    }

    /// Declarations for the wrapper around icon and text.
    pub fn group_declarations(&self) -> Declarations {
        Declarations::new()
            .set(Property::Display, "flex")
            .set(Property::AlignItems, "center")
            .set(Property::JustifyContent, "center")
    }
}

/// Output of [`resolve`](super::resolve).
///
/// `structural` never changes with interaction state. `resting` is the
/// unconditional style with every forced overlay already merged in.
/// `overlays` lists each overlay that was applied, so a renderer can emit
/// pseudo-class rules for the [`Trigger::OnInteraction`] ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleDescription {
    pub metrics: Metrics,
    pub structural: Declarations,
    pub resting: Declarations,
    pub overlays: Vec<AppliedOverlay>,
    pub content: ContentLayout,
}

impl StyleDescription {
    pub fn overlay(&self, state: InteractionState) -> Option<&AppliedOverlay> {
        self.overlays.iter().find(|o| o.state == state)
    }

    /// Overlays that must be emitted as pseudo-class rules.
    pub fn interaction_rules(&self) -> impl Iterator<Item = &AppliedOverlay> {
        self.overlays
            .iter()
            .filter(|o| o.trigger == Trigger::OnInteraction)
    }

    /// States baked into the resting style.
    pub fn forced_states(&self) -> Vec<InteractionState> {
        self.overlays
            .iter()
            .filter(|o| o.trigger == Trigger::Forced)
            .map(|o| o.state)
            .collect()
    }

    /// Structural and resting declarations combined, as the unconditional rule.
    pub fn unconditional(&self) -> Declarations {
        let mut block = self.structural.clone();
        block.merge(&self.resting);
        block
    }
}
