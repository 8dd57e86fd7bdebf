use clap::Parser;
use pathway_filter::adapters::storage::LocalStorage;
use pathway_filter::domain::ports::LibrarySource;
use pathway_filter::output::{summary_lines, write_report};
use pathway_filter::utils::error::{ErrorCategory, ErrorSeverity};
use pathway_filter::utils::genes::collect_query_genes;
use pathway_filter::utils::{logger, validation::Validate};
use pathway_filter::{
    CliConfig, EnrichrClient, GmtFileSource, PathwayEngine, PathwayError, RunSettings, SourceKind,
};

fn exit_with(e: &PathwayError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    if e.category() == ErrorCategory::Network {
        eprintln!("💡 Run with --list-libraries to see the available libraries.");
    }

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

async fn run<S: LibrarySource>(
    source: S,
    settings: &RunSettings,
    list_only: bool,
) -> Result<(), PathwayError> {
    let engine = PathwayEngine::new(source);

    if list_only {
        for name in engine.available_libraries().await? {
            println!("{}", name);
        }
        return Ok(());
    }

    let genes = collect_query_genes(&settings.genes, settings.genes_file.as_deref())?;
    tracing::info!("Using {} query genes", genes.len());

    let report = engine
        .build_report(&genes, &settings.library, &settings.filter)
        .await?;

    if report.pathways.is_empty() {
        tracing::warn!("No pathways matching the criteria were found.");
    } else {
        println!("--- Results: Filtered Pathways ---");
        for line in summary_lines(&report.pathways, settings.summary_limit) {
            println!("{}", line);
        }
    }

    let storage = LocalStorage::new(settings.output_path.clone());
    for path in write_report(&storage, &report, &settings.formats).await? {
        println!("📁 Output saved to: {}", path);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting pathway-filter");
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    let result = match settings.source {
        SourceKind::Enrichr => {
            let client = EnrichrClient::with_settings(
                settings.enrichr_url.clone(),
                settings.timeout,
                settings.retry_attempts,
                settings.retry_delay,
            )?;
            run(client, &settings, cli.list_libraries).await
        }
        SourceKind::Gmt => {
            let dir = settings.gmt_dir.clone().unwrap_or_default();
            run(GmtFileSource::new(dir), &settings, cli.list_libraries).await
        }
    };

    if let Err(e) = result {
        exit_with(&e);
    }

    tracing::info!("✅ Done");
    Ok(())
}
