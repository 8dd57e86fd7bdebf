use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pathway name → sorted, de-duplicated query genes found in that pathway.
pub type FilteredPathways = BTreeMap<String, Vec<String>>;

pub const DEFAULT_LIBRARY: &str = "KEGG_2021_Human";
pub const DEFAULT_MIN_GENES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneSetLibrary {
    pub name: String,
    pub pathways: BTreeMap<String, Vec<String>>,
}

impl GeneSetLibrary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pathways: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.pathways.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pathways.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub min_genes_per_pathway: usize,
    /// Compare symbols trimmed and upper-cased on both sides.
    pub case_insensitive: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            min_genes_per_pathway: DEFAULT_MIN_GENES,
            case_insensitive: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathwayReport {
    pub library: String,
    pub min_genes_per_pathway: usize,
    pub case_insensitive: bool,
    pub query_size: usize,
    pub total_pathways: usize,
    pub generated_at: DateTime<Utc>,
    pub pathways: FilteredPathways,
}

impl PathwayReport {
    pub fn retained(&self) -> usize {
        self.pathways.len()
    }
}
