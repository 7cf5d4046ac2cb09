use std::path::Path;

use anyhow::{Context, Result};
use tape_core::{IngestOptions, quick_validate, strict_ingest};
use tape_ingest::{compute_file_hash, read_tape};
use tape_map::ColumnMapper;
use tape_model::TapeTable;
use tracing::{info, info_span};

use crate::cli::{IngestArgs, MapArgs, ValidateArgs};
use crate::config::TapeConfig;
use crate::output::{SummaryReport, write_cleaned_csv, write_record_batches, write_summary_json};
use crate::summary::{print_fields, print_mapping};
use crate::types::{IngestOutcome, ValidateResult};

pub fn run_fields() -> Result<()> {
    print_fields();
    Ok(())
}

pub fn run_map(args: &MapArgs, config: &TapeConfig) -> Result<()> {
    let table = load_tape(&args.file)?;
    let mapper = if args.ingest {
        ColumnMapper::ingestion()
    } else {
        ColumnMapper::validation()
    };
    let existing = config.mapping_override()?;
    let mapping = mapper.resolve(&table.headers, existing.as_ref());
    print_mapping(&args.file, mapper.fields(), &mapping, &table.headers);
    Ok(())
}

pub fn run_validate(args: &ValidateArgs, config: &TapeConfig) -> Result<ValidateResult> {
    let span = info_span!("validate", file = %args.file.display());
    let _guard = span.enter();

    let table = load_tape(&args.file)?;
    let source_sha256 = compute_file_hash(&args.file)
        .with_context(|| format!("hash {}", args.file.display()))?;
    let existing = config.mapping_override()?;
    let run = quick_validate(&table, existing.as_ref());

    let mut result = ValidateResult {
        source: args.file.clone(),
        source_sha256,
        run,
        summary_json: None,
        cleaned_csv: None,
    };

    if let Some(dir) = &args.output_dir {
        let report = summary_report(&result);
        result.summary_json = Some(write_summary_json(dir, &report)?);
        result.cleaned_csv = Some(write_cleaned_csv(
            dir,
            &table.headers,
            &result.run.cleaned_rows,
        )?);
        info!(output_dir = %dir.display(), "wrote validation outputs");
    }
    Ok(result)
}

pub fn summary_report(result: &ValidateResult) -> SummaryReport {
    SummaryReport::new(
        &result.source,
        result.source_sha256.clone(),
        result.run.mapping.clone(),
        result.run.summary.clone(),
    )
}

pub fn run_ingest(args: &IngestArgs, config: &TapeConfig) -> Result<IngestOutcome> {
    let span = info_span!("ingest", file = %args.file.display());
    let _guard = span.enter();

    let table = load_tape(&args.file)?;
    let mut options = IngestOptions::for_today().with_date_policy(config.ingest.date_policy);
    if let Some(mapping) = config.mapping_override()? {
        options = options.with_mapping_override(mapping);
    }

    let batch = match strict_ingest(&table, &options) {
        Ok(batch) => batch,
        Err(rejection) => {
            return Ok(IngestOutcome::Rejected {
                source: args.file.clone(),
                rejection,
            });
        }
    };

    let batch_size = args
        .batch_size
        .map_or(config.output.batch_size, |size| size as usize);
    let written = match &args.output_dir {
        Some(dir) => write_record_batches(dir, &batch.records, batch_size)?,
        None => Vec::new(),
    };
    Ok(IngestOutcome::Accepted {
        source: args.file.clone(),
        batch,
        written,
    })
}

fn load_tape(path: &Path) -> Result<TapeTable> {
    let table = read_tape(path).with_context(|| format!("load tape {}", path.display()))?;
    info!(
        columns = table.headers.len(),
        rows = table.row_count(),
        "tape loaded"
    );
    Ok(table)
}
