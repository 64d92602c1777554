//! Rendering of namespace views for the terminal.

use anyhow::Result;
use dotm_core::{Category, DotmNamespace};
use serde::Serialize;

use crate::OutputFormat;


/// Render every prefix of `ns`.
///
/// Text output starts with `prefix` and `history_prefix`, then one
/// `name<TAB>value` line per category.
pub fn render_namespace(ns: &DotmNamespace, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut lines = vec![
                format!("prefix\t{}", ns.prefix()),
                format!("history_prefix\t{}", ns.history_prefix()),
            ];
            lines.extend(ns.entries().map(|(c, value)| format!("{}\t{}", c, value)));
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(ns)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(ns)?.trim_end().to_string()),
    }
}


/// Render a single prefix.
pub fn render_category(ns: &DotmNamespace, category: Category, format: OutputFormat) -> Result<String> {
    let value = ns.get(category);
    match format {
        OutputFormat::Text => Ok(value.to_string()),
        OutputFormat::Json => Ok(serde_json::json!({ category.as_str(): value }).to_string()),
        OutputFormat::Yaml => {
            let map = std::collections::BTreeMap::from([(category.as_str(), value)]);
            Ok(serde_yaml::to_string(&map)?.trim_end().to_string())
        }
    }
}


#[derive(Serialize)]
struct CategoryRow {
    name: Category,
    scope: &'static str,
}

/// Render the category list with each category's scope.
pub fn render_categories(format: OutputFormat) -> Result<String> {
    let rows: Vec<CategoryRow> = Category::ALL
        .iter()
        .map(|c| CategoryRow {
            name: *c,
            scope: if c.is_history_scoped() { "history" } else { "live" },
        })
        .collect();
    match format {
        OutputFormat::Text => Ok(rows
            .iter()
            .map(|r| format!("{}\t{}", r.name, r.scope))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&rows)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&rows)?.trim_end().to_string()),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_lists_every_prefix() {
        let ns = DotmNamespace::new(Some("run42"));
        let out = render_namespace(&ns, OutputFormat::Text).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "prefix\tdotm");
        assert_eq!(lines[1], "history_prefix\trun42::dotm");
        assert_eq!(lines[2], "queue\tdotm::queue");
        assert_eq!(lines[12], "services_checks\trun42::dotm::checks::services");
    }

    #[test]
    fn json_matches_field_names() {
        let out = render_namespace(&DotmNamespace::live(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["history_prefix"], "dotm");
        assert_eq!(value["nodes_checks"], "dotm::checks::nodes");
        assert_eq!(value.as_object().unwrap().len(), 13);
    }

    #[test]
    fn yaml_contains_scoped_checks() {
        let out = render_namespace(&DotmNamespace::new(Some("h")), OutputFormat::Yaml).unwrap();
        let map: std::collections::BTreeMap<String, String> = serde_yaml::from_str(&out).unwrap();
        assert_eq!(map["checks"], "h::dotm::checks");
        assert_eq!(map["queue"], "dotm::queue");
    }

    #[test]
    fn single_category_text() {
        let ns = DotmNamespace::new(Some("run42"));
        let out = render_category(&ns, Category::NodesChecks, OutputFormat::Text).unwrap();
        assert_eq!(out, "run42::dotm::checks::nodes");
    }

    #[test]
    fn single_category_json() {
        let ns = DotmNamespace::live();
        let out = render_category(&ns, Category::State, OutputFormat::Json).unwrap();
        assert_eq!(out, r#"{"state":"dotm::state"}"#);
    }

    #[test]
    fn single_category_yaml() {
        let ns = DotmNamespace::new(Some("run42"));
        let out = render_category(&ns, Category::Resolver, OutputFormat::Yaml).unwrap();
        let map: std::collections::BTreeMap<String, String> = serde_yaml::from_str(&out).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["resolver"], "run42::dotm::resolver");
    }

    #[test]
    fn categories_json_shows_scope() {
        let out = render_categories(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), Category::ALL.len());
        assert_eq!(rows[0], serde_json::json!({ "name": "queue", "scope": "live" }));
        assert_eq!(rows[9], serde_json::json!({ "name": "nodes_checks", "scope": "history" }));
    }

    #[test]
    fn categories_yaml_shows_scope() {
        let out = render_categories(OutputFormat::Yaml).unwrap();
        let rows: Vec<std::collections::BTreeMap<String, String>> = serde_yaml::from_str(&out).unwrap();
        assert_eq!(rows.len(), Category::ALL.len());
        assert_eq!(rows[3]["name"], "state");
        assert_eq!(rows[3]["scope"], "live");
        assert_eq!(rows[10]["name"], "services_checks");
        assert_eq!(rows[10]["scope"], "history");
    }

    #[test]
    fn categories_text_shows_scope() {
        let out = render_categories(OutputFormat::Text).unwrap();
        assert!(out.starts_with("queue\tlive\n"));
        assert!(out.contains("resolver\thistory"));
        assert_eq!(out.lines().count(), Category::ALL.len());
    }
}
