use crudgen::error::{Error, Result};
use crudgen::prompt::Prompter;
use crudgen::schema::{choose_table, FileSchema, SchemaSource};
use std::cell::RefCell;
use tempfile::TempDir;

const SCHEMA: &str = r#"
blog_posts:
  - { name: id, type: bigint unsigned }
  - { name: title, type: varchar(255) }
  - { name: body, type: text, nullable: true }
  - { name: created_at, type: timestamp, nullable: true, default: null }
authors:
  - name: id
    type: integer
  - name: active
    type: boolean
    default: true
"#;

struct PickSecond {
    seen: RefCell<Vec<String>>,
}

impl Prompter for PickSecond {
    fn confirm(&self, _skip: bool, _prompt: String) -> Result<bool> {
        Ok(false)
    }

    fn select(&self, _prompt: String, items: &[String]) -> Result<usize> {
        self.seen.borrow_mut().extend(items.iter().cloned());
        Ok(1)
    }
}

#[test]
fn test_tables_and_columns_keep_declaration_order() {
    let schema = FileSchema::parse(SCHEMA).unwrap();
    assert_eq!(schema.list_tables().unwrap(), vec!["blog_posts", "authors"]);

    let columns = schema.list_columns("blog_posts").unwrap();
    assert_eq!(columns.names(), vec!["id", "title", "body", "created_at"]);
    let body = columns.get("body").unwrap();
    assert!(body.nullable);
    assert_eq!(body.sql_type, "text");

    let authors = schema.list_columns("authors").unwrap();
    assert_eq!(authors.get("active").unwrap().default, Some(serde_json::json!(true)));
}

#[test]
fn test_json_schema() {
    let schema =
        FileSchema::parse(r#"{"users": [{"name": "email", "type": "varchar(191)"}]}"#).unwrap();
    let columns = schema.list_columns("users").unwrap();
    assert_eq!(columns.len(), 1);
    assert!(!columns.get("email").unwrap().nullable);
}

#[test]
fn test_unknown_table() {
    let schema = FileSchema::parse(SCHEMA).unwrap();
    assert!(matches!(schema.list_columns("comments"), Err(Error::SchemaError(_))));
}

#[test]
fn test_duplicate_column() {
    let schema = FileSchema::parse("t:\n  - { name: a, type: int }\n  - { name: a, type: int }\n")
        .unwrap();
    assert!(matches!(schema.list_columns("t"), Err(Error::SchemaError(_))));
}

#[test]
fn test_load_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let result = FileSchema::load(temp_dir.path().join("schema.yml"));
    assert!(matches!(result, Err(Error::SchemaError(_))));
}

#[test]
fn test_choose_table() {
    let schema = FileSchema::parse(SCHEMA).unwrap();
    let prompter = PickSecond { seen: RefCell::new(Vec::new()) };

    assert_eq!(choose_table(&schema, &prompter).unwrap(), "authors");
    assert_eq!(*prompter.seen.borrow(), vec!["blog_posts", "authors"]);
}
