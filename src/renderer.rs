//! Field renderers.
//!
//! Each renderer turns a [`ColumnSet`] into one text fragment that is
//! substituted verbatim at a token location. Multi-line fragments put one
//! column per line; the first line carries no indentation since the token
//! already sits at the indented position in the template.

use crate::column::{ColumnDescriptor, ColumnKind, ColumnSet, InputType};

const PHP_ARRAY_INDENT: &str = "            ";
const HTML_INDENT: &str = "        ";

fn render_lines<F>(columns: &ColumnSet, indent: &str, render: F) -> String
where
    F: Fn(&ColumnDescriptor) -> String,
{
    columns
        .iter()
        .map(render)
        .collect::<Vec<_>>()
        .join(&format!("\n{indent}"))
}

/// Quoted, comma-joined names of the columns eligible for search.
///
/// # Arguments
/// * `columns` - Table columns
/// * `excludes` - Column names never offered for search (primary/system columns)
pub fn searchable_columns<S: AsRef<str>>(columns: &ColumnSet, excludes: &[S]) -> String {
    columns
        .iter()
        .filter(|c| !excludes.iter().any(|e| e.as_ref() == c.name))
        .map(|c| format!("'{}'", c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One rule expression per column: `'title' => 'required|string|max:255',`
pub fn validation_rules(columns: &ColumnSet) -> String {
    render_lines(columns, PHP_ARRAY_INDENT, |column| {
        format!("'{}' => '{}',", column.name, rules_for(column).join("|"))
    })
}

fn rules_for(column: &ColumnDescriptor) -> Vec<String> {
    let mut rules = vec![if column.nullable { "nullable" } else { "required" }.to_string()];
    match column.kind() {
        ColumnKind::String { max } => {
            rules.push("string".to_string());
            if let Some(max) = max {
                rules.push(format!("max:{max}"));
            }
        }
        ColumnKind::Text => rules.push("string".to_string()),
        ColumnKind::Integer => rules.push("integer".to_string()),
        ColumnKind::Decimal => rules.push("numeric".to_string()),
        ColumnKind::Boolean => rules.push("boolean".to_string()),
        ColumnKind::Date | ColumnKind::DateTime => rules.push("date".to_string()),
        ColumnKind::Time => rules.push("date_format:H:i:s".to_string()),
        ColumnKind::Json => rules.push("json".to_string()),
        ColumnKind::Other => {}
    }
    rules
}

/// Translation entries: `'title' => 'Title',`
pub fn lang_fields(columns: &ColumnSet) -> String {
    render_lines(columns, "    ", |column| {
        format!("'{}' => '{}',", column.name, column.label())
    })
}

/// Table header cells: `<th>Title</th>`
pub fn table_headers(columns: &ColumnSet) -> String {
    render_lines(columns, HTML_INDENT, |column| format!("<th>{}</th>", column.label()))
}

/// Table body cells reading from the loop variable `$item`.
pub fn table_fields(columns: &ColumnSet) -> String {
    render_lines(columns, HTML_INDENT, |column| {
        format!("<td>{{{{ $item->{} }}}}</td>", column.name)
    })
}

/// Detail rows reading from the module variable, e.g. `$blogPost`.
pub fn detail_fields(columns: &ColumnSet, variable: &str) -> String {
    render_lines(columns, HTML_INDENT, |column| {
        format!(
            "<tr><th>{}</th><td>{{{{ ${variable}->{} }}}}</td></tr>",
            column.label(),
            column.name
        )
    })
}

/// Labelled form controls for the create form.
pub fn form_create_fields(columns: &ColumnSet) -> String {
    render_lines(columns, HTML_INDENT, |column| {
        form_field(column, &format!("old('{}')", column.name))
    })
}

/// Labelled form controls for the edit form, bound to the module variable.
pub fn form_edit_fields(columns: &ColumnSet, variable: &str) -> String {
    render_lines(columns, HTML_INDENT, |column| {
        form_field(column, &format!("old('{0}', ${variable}->{0})", column.name))
    })
}

fn form_field(column: &ColumnDescriptor, value: &str) -> String {
    let name = &column.name;
    let required = if column.nullable { "" } else { " required" };
    let control = match column.kind().input_type() {
        InputType::Textarea => {
            format!("<textarea name=\"{name}\" id=\"{name}\"{required}>{{{{ {value} }}}}</textarea>")
        }
        InputType::Checkbox => format!(
            "<input type=\"checkbox\" name=\"{name}\" id=\"{name}\" value=\"1\" @checked({value})>"
        ),
        input => format!(
            "<input type=\"{input}\" name=\"{name}\" id=\"{name}\" value=\"{{{{ {value} }}}}\"{required}>"
        ),
    };
    format!(
        "<div class=\"field\"><label for=\"{name}\">{}</label>{control}</div>",
        column.label()
    )
}

/// Column definitions for the listing table view.
pub fn table_view_fields(columns: &ColumnSet) -> String {
    render_lines(columns, PHP_ARRAY_INDENT, |column| {
        format!("['field' => '{}', 'header' => '{}'],", column.name, column.label())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title() -> ColumnSet {
        ColumnSet::new(vec![ColumnDescriptor::new("title", "varchar(255)", false)]).unwrap()
    }

    #[test]
    fn test_rules_for_nullable_text() {
        let column = ColumnDescriptor::new("body", "text", true);
        assert_eq!(rules_for(&column), vec!["nullable", "string"]);
    }

    #[test]
    fn test_form_field_shapes() {
        assert_eq!(
            form_create_fields(&title()),
            "<div class=\"field\"><label for=\"title\">Title</label>\
             <input type=\"text\" name=\"title\" id=\"title\" value=\"{{ old('title') }}\" required></div>"
        );

        let flag = ColumnSet::new(vec![ColumnDescriptor::new("published", "boolean", false)])
            .unwrap();
        assert!(form_edit_fields(&flag, "post")
            .contains("<input type=\"checkbox\" name=\"published\" id=\"published\" value=\"1\" @checked(old('published', $post->published))>"));
    }
}
