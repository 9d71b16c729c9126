//! HTML markup for table models.

use minijinja::{context, Environment};

use super::{TableError, TableModel};

const TEMPLATE_NAME: &str = "table.html";

const TEMPLATE: &str = r#"<table>
  <thead>
    <tr>{% for name in header %}<th>{% if name %}{{ name }}{% endif %}</th>{% endfor %}</tr>
  </thead>
  <tbody>
{%- for row in rows %}
    <tr>{% for cell in row %}<td>{{ cell }}</td>{% endfor %}</tr>
{%- endfor %}
  </tbody>
</table>"#;

pub(super) fn render(model: &TableModel) -> Result<String, TableError> {
    // The `.html` suffix turns on auto-escaping.
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, TEMPLATE)?;
    let template = env.get_template(TEMPLATE_NAME)?;
    Ok(template.render(context! {
        header => model.header(),
        rows => model.rows(),
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_structure() {
        let model = TableModel::new(
            vec![None, Some("Date Added".into())],
            vec![vec!["Aria".into(), "2019-05-25".into()]],
        )
        .unwrap();
        let html = model.to_html().unwrap();

        assert!(html.starts_with("<table>"));
        assert!(html.contains("<tr><th></th><th>Date Added</th></tr>"));
        assert!(html.contains("<tr><td>Aria</td><td>2019-05-25</td></tr>"));
        assert!(html.ends_with("</table>"));
    }

    #[test]
    fn test_cells_are_escaped() {
        let model = TableModel::new(
            vec![Some("<b>".into())],
            vec![vec!["Tom & Jerry <3".into()]],
        )
        .unwrap();
        let html = model.to_html().unwrap();
        assert!(html.contains("<th>&lt;b&gt;</th>"));
        assert!(html.contains("<td>Tom &amp; Jerry &lt;3</td>"));
    }

    #[test]
    fn test_one_tr_per_row() {
        let model = TableModel::new(
            vec![Some("n".into())],
            vec![vec!["1".into()], vec!["2".into()], vec!["3".into()]],
        )
        .unwrap();
        let html = model.to_html().unwrap();
        assert_eq!(html.matches("<tr>").count(), 4);
    }
}
