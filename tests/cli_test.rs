use clap::Parser;
use crudgen::cli::Args;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("crudgen")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["--table", "blog_posts"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.table.as_deref(), Some("blog_posts"));
    assert_eq!(parsed.template, None);
    assert_eq!(parsed.schema, PathBuf::from("schema.yml"));
    assert_eq!(parsed.config, None);
    assert!(!parsed.force);
    assert!(!parsed.verbose);
}

#[test]
fn test_no_args_selects_table_interactively() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();
    assert!(parsed.table.is_none());
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--table",
        "users",
        "--template",
        "admin",
        "--force",
        "--verbose",
        "--schema",
        "db/schema.json",
        "--config",
        "crudgen.yml",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.table.as_deref(), Some("users"));
    assert_eq!(parsed.template.as_deref(), Some("admin"));
    assert!(parsed.force);
    assert!(parsed.verbose);
    assert_eq!(parsed.schema, PathBuf::from("db/schema.json"));
    assert_eq!(parsed.config, Some(PathBuf::from("crudgen.yml")));
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-t", "users", "-f", "-v", "-s", "s.yml", "-c", "c.json"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.table.as_deref(), Some("users"));
    assert!(parsed.force);
    assert!(parsed.verbose);
    assert_eq!(parsed.schema, PathBuf::from("s.yml"));
    assert_eq!(parsed.config, Some(PathBuf::from("c.json")));
}

#[test]
fn test_positional_args_rejected() {
    let args = make_args(&["blog_posts"]);
    assert!(Args::try_parse_from(args).is_err());
}
