//! Main execution logic for gv-enrich CLI.

use anyhow::{anyhow, Result};
use gv_enrichment::{Enricher, EnrichmentOptions, EnrichmentReport};
use gv_source::{
    load_attribute_records, load_feature_collection, write_collection, DatasetLocation,
    OutputTarget, RetryConfig, SourceConfig,
};
use gv_types::SourceIds;
use tracing::{info, warn};

use crate::args::Cli;

/// Outcome of a run, for the summary printed by `main`.
#[derive(Debug)]
pub struct RunSummary {
    pub report: EnrichmentReport,
    /// Where the document went; `None` for a dry run
    pub output: Option<String>,
}

/// Execute the enrichment with the provided arguments.
pub async fn execute(args: Cli) -> Result<RunSummary> {
    let mut options = EnrichmentOptions::new().with_currency_policy(args.currency_policy.into());
    if let Some(year) = args.population_year {
        options = options.with_population_year(year);
    }
    options.validate().map_err(|e| anyhow!("{}", e))?;

    let source_config = SourceConfig::new()
        .with_timeout(args.timeout)
        .with_retry(RetryConfig::new().with_max_retries(args.max_retries));
    source_config.validate().map_err(|e| anyhow!("{}", e))?;

    let geojson = DatasetLocation::parse(&args.geojson)?;
    let data = DatasetLocation::parse(&args.data)?;
    let sources = SourceIds::new(geojson.to_string(), data.to_string());

    info!(geojson = %geojson, data = %data, "Loading datasets");

    let (collection, records) = tokio::try_join!(
        load_feature_collection(&geojson, &source_config),
        load_attribute_records(&data, &source_config),
    )?;

    let enricher = Enricher::new(records, options);
    let (collection, report) = enricher.enrich_collection(collection, &sources);

    for miss in &report.unmatched {
        warn!(
            position = miss.position,
            code = miss.code.as_deref().unwrap_or(""),
            name = miss.name.as_deref().unwrap_or(""),
            "Feature left unenriched"
        );
    }

    if args.dry_run {
        info!("Dry run, skipping output");
        return Ok(RunSummary {
            report,
            output: None,
        });
    }

    let target = OutputTarget::from_arg(args.output.as_deref());
    write_collection(&collection, &target, args.pretty).await?;

    let output = match target {
        OutputTarget::Stdout => "stdout".to_string(),
        OutputTarget::File(path) => path.display().to_string(),
    };

    Ok(RunSummary {
        report,
        output: Some(output),
    })
}
