//! Command implementations for the FinMate CLI

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use finmate_core::{NewTransaction, ReceiptExtractor};

/// Run the pure extraction pipeline over a saved sequence and print the
/// result as pretty JSON.
pub fn cmd_extract(file: Option<&Path>) -> Result<()> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read sequence file {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read sequence from stdin")?;
            buf
        }
    };

    let extractor = ReceiptExtractor::new(None);
    let result = extractor.extract_sequence(&raw);

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Scan a receipt image with the env-configured vision backend and print
/// both the extraction result and the mapped transaction draft.
pub async fn cmd_scan(file: &Path) -> Result<()> {
    cmd_scan_with(ReceiptExtractor::from_env(), file).await
}

/// Scan with an already-constructed extractor (tests inject a mock here
/// instead of mutating the process environment).
pub async fn cmd_scan_with(extractor: ReceiptExtractor, file: &Path) -> Result<()> {
    if !extractor.has_vision() {
        bail!("No vision backend configured. Set VISION_HOST, or VISION_BACKEND=mock for a dry run.");
    }

    let image = std::fs::read(file)
        .with_context(|| format!("Failed to read image file {}", file.display()))?;
    info!(bytes = image.len(), file = %file.display(), "scanning receipt");

    let result = extractor.extract_image(&image).await;
    let today = chrono::Utc::now().date_naive();
    let draft = NewTransaction::from_receipt(&result, today);

    println!("{}", serde_json::to_string_pretty(&result)?);
    println!();
    println!("Transaction draft:");
    println!("{}", serde_json::to_string_pretty(&draft)?);

    if result.is_degraded() {
        bail!("Extraction degraded: {}", result.error.unwrap_or_default());
    }
    Ok(())
}
