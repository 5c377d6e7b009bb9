//! Naming conventions derived from a table name.

use std::path::{Path, PathBuf};

use cruet::Inflector;

/// Every spelling of a module name that templates can reference.
///
/// For the table `blog_posts`:
///
/// | field          | value       |
/// |----------------|-------------|
/// | `pascal`       | `BlogPost`  |
/// | `camel`        | `blogPost`  |
/// | `snake`        | `blog_post` |
/// | `kebab`        | `blog-post` |
/// | `lower_words`  | `blog post` |
/// | `title_words`  | `Blog Post` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleNames {
    pub table: String,
    pub pascal: String,
    pub camel: String,
    pub snake: String,
    pub kebab: String,
    pub lower_words: String,
    pub title_words: String,
}

impl ModuleNames {
    pub fn from_table(table: &str) -> Self {
        let singular = table.to_singular();
        let pascal = singular.to_pascal_case();
        let lower_words = singular.replace('_', " ").to_lowercase();

        Self {
            table: table.to_string(),
            camel: lcfirst(&pascal),
            snake: singular.to_snake_case(),
            kebab: singular.replace('_', "-"),
            title_words: ucwords(&lower_words),
            lower_words,
            pascal,
        }
    }

    /// Directory of the generated module inside the container directory.
    pub fn module_path<P: AsRef<Path>>(&self, container: P) -> PathBuf {
        container.as_ref().join(&self.pascal)
    }

    /// Route name prefix, e.g. `admin.blog-post`, or just `blog-post` without a prefix.
    pub fn route_url_prefix(&self, route_prefix: &str) -> String {
        if route_prefix.is_empty() {
            self.kebab.clone()
        } else {
            format!("{route_prefix}.{}", self.kebab)
        }
    }
}

/// Human-readable column label, e.g. `created_at` becomes `Created At`.
pub fn to_label(column: &str) -> String {
    column.to_title_case()
}

/// Quotes each value and joins them with commas: `'web','auth'`.
pub fn to_array_elements<S: AsRef<str>>(values: &[S]) -> String {
    values
        .iter()
        .map(|v| format!("'{}'", v.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

fn lcfirst(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn ucwords(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_names_from_table() {
        let names = ModuleNames::from_table("blog_posts");
        assert_eq!(names.pascal, "BlogPost");
        assert_eq!(names.camel, "blogPost");
        assert_eq!(names.snake, "blog_post");
        assert_eq!(names.kebab, "blog-post");
        assert_eq!(names.lower_words, "blog post");
        assert_eq!(names.title_words, "Blog Post");
    }

    #[test]
    fn test_single_word_table() {
        let names = ModuleNames::from_table("categories");
        assert_eq!(names.pascal, "Category");
        assert_eq!(names.camel, "category");
        assert_eq!(names.kebab, "category");
    }

    #[test]
    fn test_route_url_prefix() {
        let names = ModuleNames::from_table("blog_posts");
        assert_eq!(names.route_url_prefix(""), "blog-post");
        assert_eq!(names.route_url_prefix("admin"), "admin.blog-post");
    }

    #[test]
    fn test_to_label() {
        assert_eq!(to_label("created_at"), "Created At");
        assert_eq!(to_label("id"), "Id");
    }

    #[test]
    fn test_to_array_elements() {
        assert_eq!(to_array_elements(&["web", "auth"]), "'web','auth'");
        assert_eq!(to_array_elements::<&str>(&[]), "");
    }

    #[test]
    fn test_module_path() {
        let names = ModuleNames::from_table("blog_posts");
        assert_eq!(names.module_path("modules"), PathBuf::from("modules/BlogPost"));
    }
}
