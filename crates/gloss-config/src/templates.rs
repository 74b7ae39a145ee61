//! Configuration templates for `gloss init`.
//!
//! Templates are stored as complete TOML files. When written out, only the `[glossary]`
//! table stays active; every other setting is commented so that built-in defaults apply
//! until the user opts in.

/// Local configuration template.
const LOCAL_TEMPLATE: &str = include_str!("../templates/config.toml");

/// Global configuration template.
const GLOBAL_TEMPLATE: &str = include_str!("../templates/config-global.toml");

/// Tables left uncommented in generated files.
const ACTIVE_TABLES: &[&str] = &["glossary"];

/// Returns the local configuration written by `gloss init`.
pub fn local_template() -> String {
    render(LOCAL_TEMPLATE)
}

/// Returns the global configuration written by `gloss init --global`.
pub fn global_template() -> String {
    render(GLOBAL_TEMPLATE)
}

/// Comments out every setting outside [`ACTIVE_TABLES`].
///
/// Existing comments and blank lines pass through. Top-level keys, which precede any
/// table header, are commented as well.
fn render(template: &str) -> String {
    let mut out = String::with_capacity(template.len() + template.lines().count() * 2);
    let mut active = false;

    for line in template.lines() {
        if let Some(table) = table_name(line) {
            active = ACTIVE_TABLES.contains(&table);
        }
        if !active && !line.is_empty() && !line.starts_with('#') {
            out.push_str("# ");
        }
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Name of the table declared on `line`, if it is a `[table]` header.
fn table_name(line: &str) -> Option<&str> {
    line.trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .map(str::trim)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::parse::parse_config_str;

    #[test]
    fn stored_templates_are_valid_toml() {
        let templates = [
            ("config.toml", LOCAL_TEMPLATE),
            ("config-global.toml", GLOBAL_TEMPLATE),
        ];
        for (name, template) in templates {
            let result = parse_config_str(template, Path::new(name));
            assert!(result.is_ok(), "{name} failed to parse: {result:?}");
        }
    }

    #[test]
    fn rendered_template_keeps_only_glossary_active() {
        let config = parse_config_str(&local_template(), Path::new("config.toml")).unwrap();
        assert_eq!(
            config.glossary.and_then(|g| g.path).as_deref(),
            Some("glossary.json")
        );
        assert!(config.search.is_none());
        assert!(config.session.is_none());
        assert_eq!(config.root, None);
    }

    #[test]
    fn rendered_template_documents_every_table() {
        let rendered = local_template();
        assert!(rendered.contains("# [search]"));
        assert!(rendered.contains("# [session]"));
        assert!(rendered.contains("\n[glossary]\n"));
    }

    #[test]
    fn comments_and_blank_lines_pass_through() {
        let input = "# heading\n\n[search]\nlimit = 3\n";
        assert_eq!(render(input), "# heading\n\n# [search]\n# limit = 3\n");
    }

    #[test]
    fn activity_follows_table_headers() {
        let input = "[glossary]\npath = \"g.json\"\n[session]\ndebounce_ms = 10\n";
        assert_eq!(
            render(input),
            "[glossary]\npath = \"g.json\"\n# [session]\n# debounce_ms = 10\n"
        );
    }
}
