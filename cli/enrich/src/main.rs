//! gv-enrich CLI
//!
//! Enriches a GeoJSON country collection with country attribute records.

use clap::Parser;
use gv_cli_common::{format_number, format_percent, init_logging};

mod args;
mod run;

use args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    init_logging(args.log_level)?;

    let fail_on_unmatched = args.fail_on_unmatched;
    let summary = run::execute(args).await?;
    let report = &summary.report;

    eprintln!();
    eprintln!("Enrichment completed:");
    eprintln!("  Features:        {}", format_number(report.total as u64));
    eprintln!(
        "  Enriched:        {} ({})",
        format_number(report.enriched as u64),
        format_percent(report.coverage())
    );
    eprintln!("    by code:       {}", format_number(report.by_code as u64));
    eprintln!("    by name:       {}", format_number(report.by_name as u64));
    eprintln!(
        "  Unmatched:       {}",
        format_number(report.unmatched.len() as u64)
    );
    match &summary.output {
        Some(output) => eprintln!("  Output:          {output}"),
        None => eprintln!("  Output:          (dry run, nothing written)"),
    }

    if fail_on_unmatched && !report.is_complete() {
        std::process::exit(4);
    }

    Ok(())
}
