//! Tests for url, metadata, raw, resolve.

use super::{parse, parse_cli};
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_url() {
    match parse(&["catalog", "url", "3", "workflow"]) {
        CliCommand::Url {
            bucket_id,
            name,
            raw,
        } => {
            assert_eq!(bucket_id, 3);
            assert_eq!(name, "workflow");
            assert!(!raw);
        }
        _ => panic!("expected Url"),
    }
}

#[test]
fn cli_parse_url_raw() {
    match parse(&["catalog", "url", "3", "workflow", "--raw"]) {
        CliCommand::Url { raw, .. } => assert!(raw),
        _ => panic!("expected Url"),
    }
}

#[test]
fn cli_parse_metadata() {
    match parse(&["catalog", "metadata", "12", "cron-job"]) {
        CliCommand::Metadata { bucket_id, name } => {
            assert_eq!(bucket_id, 12);
            assert_eq!(name, "cron-job");
        }
        _ => panic!("expected Metadata"),
    }
}

#[test]
fn cli_parse_raw_negative_bucket() {
    match parse(&["catalog", "raw", "-1", "lib.groovy"]) {
        CliCommand::Raw { bucket_id, name } => {
            assert_eq!(bucket_id, -1);
            assert_eq!(name, "lib.groovy");
        }
        _ => panic!("expected Raw"),
    }
}

#[test]
fn cli_parse_resolve_defaults_to_resolving() {
    match parse(&["catalog", "resolve", "1", "wf"]) {
        CliCommand::Resolve {
            no_resolve_links, ..
        } => assert!(!no_resolve_links),
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_no_links() {
    match parse(&["catalog", "resolve", "1", "wf", "--no-resolve-links"]) {
        CliCommand::Resolve {
            bucket_id,
            name,
            no_resolve_links,
        } => {
            assert_eq!(bucket_id, 1);
            assert_eq!(name, "wf");
            assert!(no_resolve_links);
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_global_flags_after_subcommand() {
    let cli = parse_cli(&[
        "catalog",
        "raw",
        "1",
        "wf",
        "--catalog-url",
        "http://h/catalog",
        "--session-id",
        "abc",
    ]);
    assert_eq!(cli.catalog_url.as_deref(), Some("http://h/catalog"));
    assert_eq!(cli.session_id.as_deref(), Some("abc"));
    assert!(cli.config.is_none());
}

#[test]
fn cli_rejects_non_numeric_bucket() {
    assert!(Cli::try_parse_from(["catalog", "raw", "abc", "wf"]).is_err());
}

#[test]
fn cli_requires_subcommand() {
    assert!(Cli::try_parse_from(["catalog"]).is_err());
}
