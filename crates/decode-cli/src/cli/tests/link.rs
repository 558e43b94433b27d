//! Tests for check and shorten subcommands.

use super::parse;
use crate::cli::CliCommand;

#[test]
fn cli_parse_check() {
    match parse(&["decode", "check", "https://example.com/login"]) {
        CliCommand::Check { url, json } => {
            assert_eq!(url, "https://example.com/login");
            assert!(!json);
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_json() {
    match parse(&["decode", "check", "--json", "http://10.0.0.1/"]) {
        CliCommand::Check { url, json } => {
            assert_eq!(url, "http://10.0.0.1/");
            assert!(json);
        }
        _ => panic!("expected Check with --json"),
    }
}

#[test]
fn cli_parse_shorten() {
    match parse(&["decode", "shorten", "example.com/very/long"]) {
        CliCommand::Shorten { url } => assert_eq!(url, "example.com/very/long"),
        _ => panic!("expected Shorten"),
    }
}
