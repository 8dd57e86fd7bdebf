use crate::utils::error::{PathwayError, Result};
use std::path::Path;

/// Splits free text into gene symbols. Separators are commas, tabs, and any
/// whitespace; everything after `#` on a line is ignored.
pub fn parse_gene_list(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(|line| line.split(|c: char| c == ',' || c.is_whitespace()))
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn read_gene_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| PathwayError::InputError {
        message: format!("cannot read gene file {}: {}", path.display(), e),
    })?;
    Ok(parse_gene_list(&content))
}

/// Merges inline genes and an optional gene file, keeping first-seen order.
pub fn collect_query_genes(inline: &[String], file: Option<&str>) -> Result<Vec<String>> {
    let mut genes: Vec<String> = inline.iter().flat_map(|g| parse_gene_list(g)).collect();
    if let Some(path) = file {
        genes.extend(read_gene_file(path)?);
    }

    let mut seen = std::collections::HashSet::new();
    genes.retain(|g| seen.insert(g.clone()));

    if genes.is_empty() {
        return Err(PathwayError::InputError {
            message: "no query genes were supplied".to_string(),
        });
    }
    Ok(genes)
}
