#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::enrichr::DEFAULT_ENRICHR_URL;
use crate::domain::model::{FilterOptions, DEFAULT_LIBRARY, DEFAULT_MIN_GENES};
use crate::output::OutputFormat;
use crate::utils::error::{PathwayError, Result};
use crate::utils::validation::{self, Validate};
use std::str::FromStr;
use std::time::Duration;
use toml_config::TomlConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Enrichr,
    Gmt,
}

impl FromStr for SourceKind {
    type Err = PathwayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enrichr" => Ok(SourceKind::Enrichr),
            "gmt" => Ok(SourceKind::Gmt),
            other => Err(PathwayError::InvalidConfigValueError {
                field: "source".to_string(),
                value: other.to_string(),
                reason: "Valid sources: enrichr, gmt".to_string(),
            }),
        }
    }
}

/// Fully resolved settings for one run: CLI flags over TOML values over defaults.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub library: String,
    pub source: SourceKind,
    pub enrichr_url: String,
    pub gmt_dir: Option<String>,
    pub timeout: Duration,
    pub retry_attempts: u32,
    pub retry_delay: Duration,
    pub filter: FilterOptions,
    pub genes: Vec<String>,
    pub genes_file: Option<String>,
    pub output_path: String,
    pub formats: Vec<OutputFormat>,
    pub summary_limit: usize,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            library: DEFAULT_LIBRARY.to_string(),
            source: SourceKind::Enrichr,
            enrichr_url: DEFAULT_ENRICHR_URL.to_string(),
            gmt_dir: None,
            timeout: Duration::from_secs(60),
            retry_attempts: 3,
            retry_delay: Duration::from_secs(2),
            filter: FilterOptions::default(),
            genes: Vec::new(),
            genes_file: None,
            output_path: "./output".to_string(),
            formats: vec![OutputFormat::Json],
            summary_limit: 5,
        }
    }
}

impl RunSettings {
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        let mut settings = Self::default();
        settings.apply_toml(config)?;
        Ok(settings)
    }

    pub fn apply_toml(&mut self, config: &TomlConfig) -> Result<()> {
        let lib = &config.library;
        if let Some(name) = &lib.name {
            self.library = name.clone();
        }
        if let Some(source) = &lib.source {
            self.source = source.parse()?;
        }
        if let Some(url) = &lib.enrichr_url {
            self.enrichr_url = url.clone();
        }
        if let Some(dir) = &lib.gmt_dir {
            self.gmt_dir = Some(dir.clone());
        }
        if let Some(secs) = lib.timeout_seconds {
            self.timeout = Duration::from_secs(secs);
        }
        if let Some(attempts) = lib.retry_attempts {
            self.retry_attempts = attempts;
        }
        if let Some(secs) = lib.retry_delay_seconds {
            self.retry_delay = Duration::from_secs(secs);
        }

        if let Some(min) = config.filter.min_genes_per_pathway {
            self.filter.min_genes_per_pathway = min;
        }
        if let Some(ci) = config.filter.case_insensitive {
            self.filter.case_insensitive = ci;
        }

        if let Some(genes) = &config.query.genes {
            self.genes = genes.clone();
        }
        if let Some(file) = &config.query.genes_file {
            self.genes_file = Some(file.clone());
        }

        if let Some(path) = &config.output.output_path {
            self.output_path = path.clone();
        }
        if let Some(formats) = &config.output.formats {
            self.formats = parse_formats(formats)?;
        }
        if let Some(limit) = config.output.summary_limit {
            self.summary_limit = limit;
        }
        Ok(())
    }
}

pub fn parse_formats<S: AsRef<str>>(formats: &[S]) -> Result<Vec<OutputFormat>> {
    let mut parsed: Vec<OutputFormat> = Vec::with_capacity(formats.len());
    for format in formats {
        let format = format.as_ref().parse()?;
        if !parsed.contains(&format) {
            parsed.push(format);
        }
    }
    Ok(parsed)
}

impl Validate for RunSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_library_name("library", &self.library)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_range("retry_attempts", self.retry_attempts, 1, 10)?;
        validation::validate_range("timeout_seconds", self.timeout.as_secs(), 1, 3600)?;

        match self.source {
            SourceKind::Enrichr => validation::validate_url("enrichr_url", &self.enrichr_url)?,
            SourceKind::Gmt => {
                let dir = self.gmt_dir.as_deref().ok_or_else(|| PathwayError::ConfigError {
                    message: "gmt_dir is required when source is 'gmt'".to_string(),
                })?;
                validation::validate_path("gmt_dir", dir)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let settings = RunSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.library, "KEGG_2021_Human");
        assert_eq!(settings.filter.min_genes_per_pathway, DEFAULT_MIN_GENES);
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
[library]
name = "Reactome_2022"
source = "gmt"
gmt_dir = "./libraries"

[filter]
min_genes_per_pathway = 5

[output]
formats = ["tsv", "json", "tsv"]
"#,
        )
        .unwrap();

        let settings = RunSettings::from_toml(&config).unwrap();
        assert_eq!(settings.library, "Reactome_2022");
        assert_eq!(settings.source, SourceKind::Gmt);
        assert_eq!(settings.filter.min_genes_per_pathway, 5);
        assert_eq!(settings.formats, vec![OutputFormat::Tsv, OutputFormat::Json]);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_gmt_source_requires_dir() {
        let settings = RunSettings {
            source: SourceKind::Gmt,
            ..RunSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(PathwayError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_bad_values_rejected() {
        let settings = RunSettings {
            enrichr_url: "ftp://example.com".to_string(),
            ..RunSettings::default()
        };
        assert!(settings.validate().is_err());

        let settings = RunSettings {
            retry_attempts: 0,
            ..RunSettings::default()
        };
        assert!(settings.validate().is_err());

        assert!("ftp".parse::<SourceKind>().is_err());
        assert!(parse_formats(&["xml"]).is_err());
    }
}
