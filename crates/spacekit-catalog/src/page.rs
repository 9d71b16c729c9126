//! Static HTML page for a catalog.
//!
//! Every prepared button is resolved, gets a class derived from its
//! configuration, and contributes one stylesheet. Equal configurations share
//! a class, so their rules are emitted once.

use std::collections::BTreeMap;
use std::path::Path;

use minijinja::{context, Environment};
use serde::Serialize;
use spacekit::palette::{black, silver, white};
use spacekit::{css, resolve, ButtonConfig, StyleDescription};

use crate::error::CatalogError;
use crate::model::{Catalog, ColorMode, Group, PreparedButton, Section};

const TEMPLATE_NAME: &str = "page.html";

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{{ title }}</title>
<style>
{{ surface_css|safe }}
{{ stylesheet|safe }}
</style>
</head>
<body>
<h1>{{ title }}</h1>
{%- for section in sections %}
<section>
  <h2>{{ section.title }}</h2>
  {%- if section.description %}
  <p>{{ section.description }}</p>
  {%- endif %}
  {%- for group in section.groups %}
  <div class="sk-group">
    <h3>{{ group.title }}</h3>
    {%- for surface in group.surfaces %}
    <div class="sk-surface sk-surface-{{ surface.mode }}">
      {%- for row in surface.rows %}
      <div class="sk-row">
        {%- for button in row %}
        <button class="{{ button.class }}"{% if button.style %} style="{{ button.style }}"{% endif %}{% if button.disabled %} disabled{% endif %}><div class="sk-content">
          {%- if button.icon %}<span class="sk-icon" data-icon="{{ button.icon }}"></span>{% endif %}
          {%- if button.text %}<span>{{ button.text }}</span>{% endif -%}
        </div></button>
        {%- endfor %}
      </div>
      {%- endfor %}
    </div>
    {%- endfor %}
  </div>
  {%- endfor %}
</section>
{%- endfor %}
{%- if table %}
<section>
  <h2>{{ table.title }}</h2>
  {{ table.markup|safe }}
</section>
{%- endif %}
</body>
</html>
"#;

#[derive(Serialize)]
struct SectionView {
    title: String,
    description: String,
    groups: Vec<GroupView>,
}

#[derive(Serialize)]
struct GroupView {
    title: String,
    surfaces: Vec<SurfaceView>,
}

#[derive(Serialize)]
struct SurfaceView {
    mode: ColorMode,
    rows: Vec<Vec<ButtonView>>,
}

#[derive(Serialize)]
struct ButtonView {
    class: String,
    style: Option<String>,
    disabled: bool,
    icon: Option<String>,
    text: Option<String>,
}

#[derive(Serialize)]
struct TableView {
    title: String,
    markup: String,
}

struct Stylesheet {
    config: ButtonConfig,
    css: String,
}

/// Stylesheets keyed by class name.
type Stylesheets = BTreeMap<String, Stylesheet>;

/// Renders the whole catalog as one HTML document.
///
/// Fails on the first entry whose configuration is rejected.
pub fn render_page(catalog: &Catalog) -> Result<String, CatalogError> {
    let mut stylesheets = Stylesheets::new();
    let sections = catalog
        .sections
        .iter()
        .map(|section| section_view(section, &mut stylesheets))
        .collect::<Result<Vec<_>, _>>()?;

    let table = match &catalog.table_demo {
        Some(demo) => Some(TableView {
            title: demo.title.clone(),
            markup: demo.model().to_html()?,
        }),
        None => None,
    };

    tracing::debug!(
        sections = sections.len(),
        classes = stylesheets.len(),
        "rendering catalog page"
    );

    let stylesheet: String = stylesheets.into_values().map(|sheet| sheet.css).collect();

    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, TEMPLATE)?;
    let template = env.get_template(TEMPLATE_NAME)?;
    Ok(template.render(context! {
        title => &catalog.title,
        surface_css => surface_css(),
        stylesheet => stylesheet,
        sections => sections,
        table => table,
    })?)
}

/// Renders the catalog and writes it to `path`.
pub fn write_page(catalog: &Catalog, path: impl AsRef<Path>) -> Result<(), CatalogError> {
    let path = path.as_ref();
    let html = render_page(catalog)?;
    std::fs::write(path, html).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote catalog page");
    Ok(())
}

fn section_view(
    section: &Section,
    stylesheets: &mut Stylesheets,
) -> Result<SectionView, CatalogError> {
    let groups = section
        .groups
        .iter()
        .map(|group| group_view(section, group, stylesheets))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SectionView {
        title: section.title.clone(),
        description: section.description.clone(),
        groups,
    })
}

fn group_view(
    section: &Section,
    group: &Group,
    stylesheets: &mut Stylesheets,
) -> Result<GroupView, CatalogError> {
    let mut surfaces = Vec::with_capacity(ColorMode::ALL.len());
    for mode in ColorMode::ALL {
        let mut rows = Vec::with_capacity(group.entries.len());
        for (entry, buttons) in group.prepare(mode).iter().enumerate() {
            let row = buttons
                .iter()
                .map(|button| {
                    button_view(button, stylesheets).map_err(|source| {
                        tracing::warn!(
                            section = %section.title,
                            group = %group.title,
                            entry,
                            error = %source,
                            "rejected catalog entry"
                        );
                        CatalogError::InvalidEntry {
                            section: section.title.clone(),
                            group: group.title.clone(),
                            entry,
                            source,
                        }
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        surfaces.push(SurfaceView { mode, rows });
    }
    Ok(GroupView {
        title: group.title.clone(),
        surfaces,
    })
}

fn button_view(
    button: &PreparedButton,
    stylesheets: &mut Stylesheets,
) -> Result<ButtonView, spacekit::ConfigurationError> {
    let style = resolve(&button.config)?;
    let class = register(stylesheets, &button.config, &style);

    Ok(ButtonView {
        class,
        style: button
            .text_color
            .as_ref()
            .map(|color| format!("color: {}", color)),
        disabled: button.config.disabled,
        icon: style.content.icon.map(|icon| icon.name),
        text: style.content.text,
    })
}

/// Returns the class for `config`, adding its stylesheet on first use.
///
/// A different configuration already holding the hashed class name gets a
/// numbered variant instead of sharing rules.
fn register(
    stylesheets: &mut Stylesheets,
    config: &ButtonConfig,
    style: &StyleDescription,
) -> String {
    let base = css::class_name_for(config);
    let mut class = base.clone();
    let mut attempt = 1;
    loop {
        match stylesheets.get(&class) {
            Some(existing) if existing.config == *config => return class,
            Some(_) => {
                attempt += 1;
                tracing::warn!(class = %base, attempt, "class name collision");
                class = format!("{}-{}", base, attempt);
            }
            None => {
                let css = css::to_stylesheet(style, &class);
                stylesheets.insert(
                    class.clone(),
                    Stylesheet {
                        config: config.clone(),
                        css,
                    },
                );
                return class;
            }
        }
    }
}

fn surface_css() -> String {
    format!(
        ".sk-surface {{\n  padding: 16px;\n}}\n\
         .sk-surface-light {{\n  background: {};\n}}\n\
         .sk-surface-dark {{\n  background: {};\n  border: 1px solid {};\n}}\n",
        white::BASE,
        black::BASE,
        silver::DARK,
    )
}
