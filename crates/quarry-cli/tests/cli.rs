//! End-to-end tests driving `run` with parsed arguments.

use clap::Parser;
use insta::assert_snapshot;
use quarry_cli::cli::Cli;

const REFERENCE: &str = "2024-05-20T08:00:00Z";

fn run(args: &[&str]) -> String {
    let mut argv = vec!["quarry", "--reference", REFERENCE];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).unwrap();
    let mut buf = Vec::new();
    quarry_cli::run(&cli, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

fn ids(output: &str) -> Vec<u64> {
    output
        .lines()
        .filter_map(|line| line.strip_prefix("Id: "))
        .filter_map(|rest| rest.split(',').next())
        .filter_map(|id| id.parse().ok())
        .collect()
}

#[test]
fn list_prints_whole_catalog() {
    let output = run(&["list"]);
    assert_eq!(ids(&output), (1..=50).collect::<Vec<_>>());
}

#[test]
fn list_respects_size() {
    let output = run(&["list", "--size", "3"]);
    assert_eq!(ids(&output), vec![1, 2, 3]);
}

#[test]
fn regex_query() {
    let output = run(&["query", "--name-regex", "Entity [1-5]"]);
    assert_eq!(ids(&output), vec![1, 2, 3, 4, 5]);
}

#[test]
fn active_and_cheap_query() {
    let output = run(&["query", "--active", "--price-lt", "200"]);
    assert_eq!(
        ids(&output),
        vec![2, 4, 6, 8, 12, 14, 16, 18, 22, 24, 26, 28, 32, 34, 36, 38, 42, 44, 46, 48]
    );
}

#[test]
fn any_and_negate() {
    let output = run(&["query", "--any", "--id", "1", "--id-min", "4", "--negate", "--size", "6"]);
    assert_eq!(ids(&output), vec![2, 3]);
}

#[test]
fn first_match_only() {
    let output = run(&["query", "--inactive", "--price-gt", "400", "--first"]);
    assert_eq!(ids(&output), vec![5]);
}

#[test]
fn created_window() {
    let output = run(&[
        "query",
        "--created-after",
        "2024-05-20T07:00:00Z",
        "--created-before",
        "2024-05-20T09:00:00Z",
    ]);
    // Creation dates sit at least 10,000 s away from the reference.
    assert_eq!(ids(&output), Vec::<u64>::new());

    let output = run(&[
        "query",
        "--created-after",
        "2024-05-20T02:00:00Z",
        "--created-before",
        "2024-05-20T14:00:00Z",
    ]);
    assert_eq!(ids(&output), vec![1, 2]);
}

#[test]
fn invalid_regex_is_reported() {
    let cli = Cli::try_parse_from(["quarry", "query", "--name-regex", "Entity ("]).unwrap();
    let err = quarry_cli::run(&cli, &mut Vec::new()).unwrap_err();
    assert!(format!("{:#}", err).contains("invalid regex pattern"));
}

#[test]
fn json_output() {
    let output = run(&["query", "--id", "10", "--format", "json"]);
    assert_snapshot!(output, @r#"
    [
      {
        "id": 10,
        "name": "Entity 10",
        "description": "Description 10",
        "active": true,
        "created": "2024-05-19T04:13:20Z",
        "price": "460"
      }
    ]
    "#);
}

#[test]
fn json_first_without_match_is_null() {
    let output = run(&["query", "--id", "99", "--first", "--format", "json"]);
    assert_eq!(output, "null\n");
}
