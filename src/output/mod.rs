use crate::domain::model::{FilteredPathways, PathwayReport};
use crate::domain::ports::Storage;
use crate::utils::error::{PathwayError, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Tsv,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Tsv => "tsv",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = PathwayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "tsv" => Ok(OutputFormat::Tsv),
            other => Err(PathwayError::InvalidConfigValueError {
                field: "formats".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: json, tsv".to_string(),
            }),
        }
    }
}

pub fn to_json(report: &PathwayReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// One row per pathway: `pathway, gene_count, genes` with genes `;`-joined.
pub fn to_tsv(pathways: &FilteredPathways) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .from_writer(Vec::new());

    writer.write_record(["pathway", "gene_count", "genes"])?;
    for (pathway, genes) in pathways {
        writer.write_record(&[pathway.clone(), genes.len().to_string(), genes.join(";")])?;
    }

    let bytes = writer.into_inner().map_err(|e| {
        PathwayError::IoError(std::io::Error::new(e.error().kind(), e.to_string()))
    })?;
    String::from_utf8(bytes).map_err(|e| PathwayError::InputError {
        message: format!("TSV output is not UTF-8: {}", e),
    })
}

/// Human readable lines for the first `limit` pathways.
pub fn summary_lines(pathways: &FilteredPathways, limit: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for (pathway, genes) in pathways.iter().take(limit) {
        lines.push(format!("Pathway: {}", pathway));
        lines.push(format!("  Matched Genes ({}): {}", genes.len(), genes.join(", ")));
    }
    if pathways.len() > limit {
        lines.push(format!("...and {} more pathways.", pathways.len() - limit));
    }
    lines
}

/// Writes the report in each format, named after the library. Returns the written paths.
pub async fn write_report<S: Storage>(
    storage: &S,
    report: &PathwayReport,
    formats: &[OutputFormat],
) -> Result<Vec<String>> {
    let mut written = Vec::with_capacity(formats.len());
    for format in formats {
        let contents = match format {
            OutputFormat::Json => to_json(report)?,
            OutputFormat::Tsv => to_tsv(&report.pathways)?,
        };
        let file_name = format!("{}_filtered.{}", report.library, format.extension());
        let path = storage.write_file(&file_name, contents.as_bytes()).await?;
        tracing::debug!("Wrote {} ({} bytes)", path, contents.len());
        written.push(path);
    }
    Ok(written)
}
