//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;

use clap::Parser;
use finmate_core::{ReceiptExtractor, VisionClient};

use crate::cli::{Cli, Commands};
use crate::commands;

// ========== Argument Parsing Tests ==========

#[test]
fn test_parse_extract_with_file() {
    let cli = Cli::parse_from(["finmate", "extract", "--file", "seq.txt"]);
    match cli.command {
        Commands::Extract { file } => {
            assert_eq!(file.unwrap().to_str(), Some("seq.txt"));
        }
        _ => panic!("expected extract command"),
    }
}

#[test]
fn test_parse_extract_stdin_default() {
    let cli = Cli::parse_from(["finmate", "extract"]);
    match cli.command {
        Commands::Extract { file } => assert!(file.is_none()),
        _ => panic!("expected extract command"),
    }
}

#[test]
fn test_parse_scan_requires_file() {
    assert!(Cli::try_parse_from(["finmate", "scan"]).is_err());
}

#[test]
fn test_parse_global_verbose() {
    let cli = Cli::parse_from(["finmate", "extract", "--verbose"]);
    assert!(cli.verbose);
}

// ========== Extract Command Tests ==========

#[test]
fn test_cmd_extract_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "<s_store_name>INDOMARET<s_total><s_total_price>20.500</s_total>"
    )
    .unwrap();

    let result = commands::cmd_extract(Some(file.path()));
    assert!(result.is_ok());
}

#[test]
fn test_cmd_extract_missing_file() {
    let result = commands::cmd_extract(Some(std::path::Path::new("/nonexistent/seq.txt")));
    assert!(result.is_err());
}

// ========== Scan Command Tests ==========

fn mock_extractor() -> ReceiptExtractor {
    ReceiptExtractor::new(Some(VisionClient::mock()))
}

#[tokio::test]
async fn test_cmd_scan_missing_image() {
    // Backend is present, but the image file doesn't exist.
    let result =
        commands::cmd_scan_with(mock_extractor(), std::path::Path::new("/nonexistent/receipt.jpg"))
            .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_cmd_scan_without_backend() {
    let result = commands::cmd_scan_with(
        ReceiptExtractor::new(None),
        std::path::Path::new("receipt.jpg"),
    )
    .await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("No vision backend configured"));
}

#[tokio::test]
async fn test_cmd_scan_with_mock_backend() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"fake-jpeg-bytes").unwrap();

    let result = commands::cmd_scan_with(mock_extractor(), file.path()).await;
    assert!(result.is_ok());
}
