use crate::config::toml_config::TomlConfig;
use crate::config::{parse_formats, RunSettings};
use crate::utils::error::Result;
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "pathway-filter")]
#[command(about = "Fetch a gene set library and keep the pathways that overlap a gene list")]
pub struct CliConfig {
    /// Gene set library name, e.g. KEGG_2021_Human
    #[arg(short, long)]
    pub library: Option<String>,

    /// Query genes, comma separated
    #[arg(short, long, value_delimiter = ',')]
    pub genes: Vec<String>,

    /// File with query genes (one per line, or comma/whitespace separated)
    #[arg(long)]
    pub genes_file: Option<String>,

    /// Minimum number of query genes a pathway must contain
    #[arg(short = 'm', long)]
    pub min_genes: Option<usize>,

    /// Match gene symbols regardless of case
    #[arg(long)]
    pub case_insensitive: bool,

    /// Library source: enrichr or gmt
    #[arg(long)]
    pub source: Option<String>,

    /// Directory with <library>.gmt files (source = gmt)
    #[arg(long)]
    pub gmt_dir: Option<String>,

    #[arg(long)]
    pub enrichr_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    #[arg(long)]
    pub retries: Option<u32>,

    #[arg(short, long)]
    pub output_path: Option<String>,

    /// Output formats, comma separated (json, tsv)
    #[arg(long, value_delimiter = ',')]
    pub formats: Vec<String>,

    /// Number of pathways printed in the console summary
    #[arg(long)]
    pub summary_limit: Option<usize>,

    /// Print the available libraries and exit
    #[arg(long)]
    pub list_libraries: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl CliConfig {
    /// Loads the config file if one was given, then applies the flags on top.
    pub fn resolve(&self) -> Result<RunSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                RunSettings::from_toml(&TomlConfig::from_file(path)?)?
            }
            None => RunSettings::default(),
        };
        self.apply_to(&mut settings)?;
        Ok(settings)
    }

    pub fn apply_to(&self, settings: &mut RunSettings) -> Result<()> {
        if let Some(library) = &self.library {
            settings.library = library.clone();
        }
        if !self.genes.is_empty() {
            settings.genes = self.genes.clone();
        }
        if let Some(file) = &self.genes_file {
            settings.genes_file = Some(file.clone());
        }
        if let Some(min) = self.min_genes {
            settings.filter.min_genes_per_pathway = min;
        }
        if self.case_insensitive {
            settings.filter.case_insensitive = true;
        }
        if let Some(source) = &self.source {
            settings.source = source.parse()?;
        }
        if let Some(dir) = &self.gmt_dir {
            settings.gmt_dir = Some(dir.clone());
        }
        if let Some(url) = &self.enrichr_url {
            settings.enrichr_url = url.clone();
        }
        if let Some(secs) = self.timeout {
            settings.timeout = Duration::from_secs(secs);
        }
        if let Some(retries) = self.retries {
            settings.retry_attempts = retries;
        }
        if let Some(path) = &self.output_path {
            settings.output_path = path.clone();
        }
        if !self.formats.is_empty() {
            settings.formats = parse_formats(&self.formats)?;
        }
        if let Some(limit) = self.summary_limit {
            settings.summary_limit = limit;
        }
        Ok(())
    }
}
