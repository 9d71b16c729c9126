//! Button configuration and the values derived from it.

use serde::{Deserialize, Serialize};

use super::error::ConfigurationError;
use crate::palette::{blue, grey, silver, Color};

/// Size of the button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    #[default]
    Default,
    Small,
    Large,
}

impl Size {
    /// All sizes, smallest first.
    pub const ALL: [Size; 3] = [Size::Small, Size::Default, Size::Large];
}

/// Inner spacing of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Padding {
    /// Same spacing on every side.
    Uniform(u16),
    /// Vertical then horizontal spacing.
    Axes { vertical: u16, horizontal: u16 },
}

impl Padding {
    /// CSS shorthand for this padding.
    pub fn to_css(self) -> String {
        match self {
            Padding::Uniform(all) => format!("{}px", all),
            Padding::Axes {
                vertical,
                horizontal,
            } => format!("{}px {}px", vertical, horizontal),
        }
    }
}

/// Everything that determines how a button looks.
///
/// Color overrides are optional; when absent the palette default listed on
/// each accessor is used. Configurations are plain data and can be built
/// fluently or deserialized from camelCase keys:
///
/// ```rust
/// use spacekit::button::{ButtonConfig, Size};
/// use spacekit::palette::indigo;
///
/// let config = ButtonConfig::new()
///     .size(Size::Large)
///     .children("Deploy")
///     .background_color(indigo::DARK)
///     .hover_background_color(indigo::DARKER);
///
/// assert_eq!(config.min_width(), 112);
/// assert!(!config.is_icon_only());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ButtonConfig {
    pub size: Size,
    pub disabled: bool,
    /// Floating action button; requires an icon and no children.
    pub fab: bool,
    /// Ghost variant with a transparent resting background.
    pub hidden: bool,
    pub force_hover_state: bool,
    pub force_active_state: bool,
    pub force_focus_state: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_text_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_active_background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_focused_color: Option<Color>,
    /// Name of the icon shown before the text, or on its own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Text content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<String>,
}

impl ButtonConfig {
    /// A default-sized, enabled, text-less button.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn fab(mut self, fab: bool) -> Self {
        self.fab = fab;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn force_hover_state(mut self, force: bool) -> Self {
        self.force_hover_state = force;
        self
    }

    pub fn force_active_state(mut self, force: bool) -> Self {
        self.force_active_state = force;
        self
    }

    pub fn force_focus_state(mut self, force: bool) -> Self {
        self.force_focus_state = force;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn hover_background_color(mut self, color: Color) -> Self {
        self.hover_background_color = Some(color);
        self
    }

    pub fn disabled_background_color(mut self, color: Color) -> Self {
        self.disabled_background_color = Some(color);
        self
    }

    pub fn disabled_text_color(mut self, color: Color) -> Self {
        self.disabled_text_color = Some(color);
        self
    }

    pub fn hidden_active_background_color(mut self, color: Color) -> Self {
        self.hidden_active_background_color = Some(color);
        self
    }

    pub fn hidden_focused_color(mut self, color: Color) -> Self {
        self.hidden_focused_color = Some(color);
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn children(mut self, children: impl Into<String>) -> Self {
        self.children = Some(children.into());
        self
    }

    /// Checks the invariants that cannot be expressed in the field types.
    ///
    /// Every other combination of fields is valid.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.fab {
            if self.icon.is_none() {
                return Err(ConfigurationError::FabRequiresIcon);
            }
            if self.children.is_some() {
                return Err(ConfigurationError::FabForbidsChildren);
            }
        }

        if self.force_active_state && self.force_hover_state {
            return Err(ConfigurationError::ConflictingForcedStates);
        }

        Ok(())
    }

    /// Background at rest. Defaults to `silver.light`.
    pub fn resting_background(&self) -> Color {
        self.background_color.clone().unwrap_or(silver::LIGHT)
    }

    /// Background while hovered. Defaults to `silver.base`.
    pub fn hover_background(&self) -> Color {
        self.hover_background_color.clone().unwrap_or(silver::BASE)
    }

    /// Background while disabled. Defaults to `silver.dark`.
    pub fn disabled_background(&self) -> Color {
        self.disabled_background_color
            .clone()
            .unwrap_or(silver::DARK)
    }

    /// Text color while disabled. Defaults to `grey.light`.
    pub fn disabled_text(&self) -> Color {
        self.disabled_text_color.clone().unwrap_or(grey::LIGHT)
    }

    /// Background of a hidden button while pressed. Defaults to `silver.dark`.
    pub fn hidden_active_background(&self) -> Color {
        self.hidden_active_background_color
            .clone()
            .unwrap_or(silver::DARK)
    }

    /// Text color of a hidden button while focused. Defaults to `blue.base`.
    pub fn hidden_focused(&self) -> Color {
        self.hidden_focused_color.clone().unwrap_or(blue::BASE)
    }

    /// Edge length of the square icon box, in pixels.
    pub fn icon_size(&self) -> u16 {
        match self.size {
            Size::Small => 12,
            Size::Default => 16,
            Size::Large => 24,
        }
    }

    /// True when there is no text content, whether or not an icon is set.
    pub fn is_icon_only(&self) -> bool {
        self.children.is_none()
    }

    /// Minimum width in pixels.
    pub fn min_width(&self) -> u16 {
        match (self.is_icon_only(), self.size) {
            (true, Size::Small) => 28,
            (true, Size::Default) => 36,
            (true, Size::Large) => 42,
            (false, Size::Small) => 76,
            (false, Size::Default) => 100,
            (false, Size::Large) => 112,
        }
    }

    pub fn padding(&self) -> Padding {
        match self.size {
            Size::Small => Padding::Axes {
                vertical: 5,
                horizontal: 8,
            },
            Size::Default => Padding::Uniform(7),
            Size::Large => Padding::Uniform(8),
        }
    }
}
