//! The catalog description.
//!
//! A catalog is a list of sections, each holding groups of button entries.
//! Every group is shown twice, once per [`ColorMode`], with the group's
//! props layered over each entry.

use serde::{Deserialize, Serialize};
use spacekit::button::{ButtonConfig, Size};
use spacekit::palette::{grey, Color};
use spacekit::table::{Column, Table, TableModel};

use crate::error::CatalogError;

const BUILTIN: &str = include_str!("../catalog/button.yaml");

/// The surface a group is previewed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    pub const ALL: [ColorMode; 2] = [ColorMode::Light, ColorMode::Dark];
}

/// The whole catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Catalog {
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default)]
    pub table_demo: Option<TableDemo>,
}

impl Catalog {
    /// Parses a catalog from YAML.
    pub fn from_yaml(source: &str) -> Result<Self, CatalogError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// The Space Kit button and table catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml(BUILTIN)
    }

    /// Number of buttons the catalog renders, across both surfaces.
    pub fn button_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| &s.groups)
            .map(|g| g.entries.iter().map(Entry::len).sum::<usize>() * ColorMode::ALL.len())
            .sum()
    }
}

/// A titled block of groups.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Section {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// A titled column of entries sharing the same props.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Group {
    pub title: String,
    /// Applied on both surfaces.
    #[serde(default)]
    pub button_props: ButtonProps,
    /// Applied on the dark surface, after `button_props`.
    #[serde(default)]
    pub dark_button_props: ButtonProps,
    pub entries: Vec<Entry>,
}

impl Group {
    /// The entries as they appear on one surface, with props applied.
    pub fn prepare(&self, mode: ColorMode) -> Vec<Vec<PreparedButton>> {
        self.entries
            .iter()
            .map(|entry| {
                entry
                    .configs()
                    .iter()
                    .map(|config| {
                        let mut button = PreparedButton {
                            config: config.clone(),
                            text_color: None,
                        };
                        self.button_props.apply(&mut button);
                        if mode == ColorMode::Dark {
                            self.dark_button_props.apply(&mut button);
                            button.config.disabled_background_color = Some(grey::DARK);
                        }
                        button
                    })
                    .collect()
            })
            .collect()
    }
}

/// One cell of a group: a single button, or several shown side by side.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Row(Vec<ButtonConfig>),
    Single(ButtonConfig),
}

impl Entry {
    pub fn configs(&self) -> &[ButtonConfig] {
        match self {
            Entry::Row(configs) => configs,
            Entry::Single(config) => std::slice::from_ref(config),
        }
    }

    pub fn len(&self) -> usize {
        self.configs().len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs().is_empty()
    }
}

/// A button configuration plus the inline text color the preview applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedButton {
    pub config: ButtonConfig,
    pub text_color: Option<Color>,
}

/// Options a group forces onto its entries. Set fields override the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ButtonProps {
    pub size: Option<Size>,
    pub disabled: Option<bool>,
    pub fab: Option<bool>,
    pub hidden: Option<bool>,
    pub background_color: Option<Color>,
    pub hover_background_color: Option<Color>,
    pub disabled_background_color: Option<Color>,
    pub disabled_text_color: Option<Color>,
    pub hidden_active_background_color: Option<Color>,
    pub hidden_focused_color: Option<Color>,
    pub icon: Option<String>,
    /// Inline text color for the button element.
    pub text_color: Option<Color>,
}

impl ButtonProps {
    pub fn apply(&self, button: &mut PreparedButton) {
        let source = self;
        let target = &mut button.config;

        macro_rules! override_if_set {
            ($($field:ident),+ $(,)?) => {
                $(
                    if let Some(value) = &source.$field {
                        target.$field = value.clone();
                    }
                )+
            };
        }

        override_if_set!(size, disabled, fab, hidden);

        macro_rules! override_option_if_set {
            ($($field:ident),+ $(,)?) => {
                $(
                    if source.$field.is_some() {
                        target.$field = source.$field.clone();
                    }
                )+
            };
        }

        override_option_if_set!(
            background_color,
            hover_background_color,
            disabled_background_color,
            disabled_text_color,
            hidden_active_background_color,
            hidden_focused_color,
            icon,
        );

        if source.text_color.is_some() {
            button.text_color = source.text_color.clone();
        }
    }
}

/// The users table shown at the end of the catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TableDemo {
    pub title: String,
    pub users: Vec<User>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct User {
    pub name: String,
    pub email: String,
    pub image: String,
    pub date_added: String,
}

impl User {
    /// First letter of each word of the name.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

impl TableDemo {
    pub fn table() -> Table<User> {
        Table::new()
            .column(Column::new(|user: &User, _, _| user.initials()))
            .column(
                Column::new(|user: &User, _, _| format!("{} <{}>", user.name, user.email))
                    .named("Description"),
            )
            .column(Column::new(|user: &User, _, _| user.date_added.clone()).named("Date Added"))
    }

    pub fn model(&self) -> TableModel {
        Self::table().cells(&self.users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacekit::palette::{blue, white};

    #[test]
    fn test_builtin_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.title, "Space Kit");
        assert_eq!(catalog.sections.len(), 4);
        assert_eq!(catalog.table_demo.as_ref().unwrap().users.len(), 2);
    }

    #[test]
    fn test_builtin_expands_aliases() {
        let catalog = Catalog::builtin().unwrap();
        let examples = &catalog.sections[1];
        assert_eq!(examples.groups[0].entries, examples.groups[1].entries);
        assert_eq!(examples.groups[0].entries.len(), 5);
    }

    #[test]
    fn test_builtin_button_count() {
        let catalog = Catalog::builtin().unwrap();
        // sizes 6, examples 15, secondary/icons 10 + 10 pairs, hidden 15; two surfaces
        assert_eq!(catalog.button_count(), (6 + 15 + 20 + 15) * 2);
    }

    #[test]
    fn test_props_override_entry() {
        let props = ButtonProps {
            icon: Some("ship".into()),
            text_color: Some(white::BASE),
            ..ButtonProps::default()
        };
        let mut button = PreparedButton {
            config: ButtonConfig::new().icon("rocket").children("Rest"),
            text_color: None,
        };
        props.apply(&mut button);
        assert_eq!(button.config.icon.as_deref(), Some("ship"));
        assert_eq!(button.config.children.as_deref(), Some("Rest"));
        assert_eq!(button.text_color, Some(white::BASE));
    }

    #[test]
    fn test_dark_surface_layers_props() {
        let group = Group {
            title: "Hidden".into(),
            button_props: ButtonProps {
                hidden: Some(true),
                hover_background_color: Some(blue::LIGHTEST),
                ..ButtonProps::default()
            },
            dark_button_props: ButtonProps {
                hover_background_color: Some(grey::DARK),
                ..ButtonProps::default()
            },
            entries: vec![Entry::Single(ButtonConfig::new().children("Rest"))],
        };

        let light = &group.prepare(ColorMode::Light)[0][0];
        assert!(light.config.hidden);
        assert_eq!(light.config.hover_background_color, Some(blue::LIGHTEST));
        assert_eq!(light.config.disabled_background_color, None);

        let dark = &group.prepare(ColorMode::Dark)[0][0];
        assert!(dark.config.hidden);
        assert_eq!(dark.config.hover_background_color, Some(grey::DARK));
        assert_eq!(dark.config.disabled_background_color, Some(grey::DARK));
    }

    #[test]
    fn test_row_entry() {
        let entry: Entry =
            serde_yaml::from_str("[{ icon: ship }, { fab: true, icon: ship }]").unwrap();
        assert_eq!(entry.len(), 2);
        assert!(entry.configs()[1].fab);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = Catalog::from_yaml("title: x\nsectionz: []\n");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_users_table() {
        let catalog = Catalog::builtin().unwrap();
        let model = catalog.table_demo.unwrap().model();
        assert_eq!(model.header()[0], None);
        assert_eq!(model.rows()[0][0], "AS");
        assert_eq!(model.rows()[1][1], "Sansa Stark <sans@stark.com>");
    }
}
