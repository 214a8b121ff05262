use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use qbank_ingest::{ImportOutcome, import_file};
use qbank_persistence::{
    JsonlQuestionStore, MemoryQuestionStore, UploadStaging, sweep_stale,
};
use tracing::info;

use qbank_cli::config::QbankConfig;
use qbank_cli::upload::{UploadResponse, UploadService};

use crate::cli::{ImportArgs, InspectArgs, SweepArgs};

/// Stages `args.file`, runs it through the upload service, and returns the response.
pub fn run_import(args: &ImportArgs, config: &QbankConfig) -> Result<UploadResponse> {
    let bytes = fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let name = args
        .file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("invalid file name: {}", args.file.display()))?;

    let staging =
        UploadStaging::new(&config.staging_dir).with_max_bytes(config.max_upload_bytes);
    let staged = staging
        .stage(name, &bytes)
        .map_err(|e| anyhow!(e.user_message()))
        .context("upload rejected")?;

    let response = if args.dry_run {
        UploadService::new(MemoryQuestionStore::new()).handle(&staged)
    } else {
        let store_path = args.store.as_ref().unwrap_or(&config.store_path);
        UploadService::new(JsonlQuestionStore::open(store_path)).handle(&staged)
    };
    info!(status = response.status, dry_run = args.dry_run, "import finished");
    Ok(response)
}

/// Imports without staging or storing, for previewing a file.
pub fn run_inspect(args: &InspectArgs) -> Result<ImportOutcome> {
    import_file(&args.file).with_context(|| format!("failed to import {}", args.file.display()))
}

/// Removes stale staged uploads and returns the directory swept and the count.
pub fn run_sweep<'a>(args: &'a SweepArgs, config: &'a QbankConfig) -> Result<(&'a Path, usize)> {
    let dir = args.dir.as_deref().unwrap_or(&config.staging_dir);
    let max_age = args.max_age_hours.map_or_else(
        || config.stale_after(),
        |hours| Duration::from_secs(hours.saturating_mul(60 * 60)),
    );
    let removed = sweep_stale(dir, max_age)
        .map_err(|e| anyhow!(e.user_message()))
        .with_context(|| format!("failed to sweep {}", dir.display()))?;
    Ok((dir, removed))
}
