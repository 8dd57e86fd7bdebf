use crate::core::filter::{filter_pathways, query_set};
use crate::domain::model::{FilterOptions, FilteredPathways, PathwayReport};
use crate::domain::ports::LibrarySource;
use crate::utils::error::Result;

pub struct PathwayEngine<S: LibrarySource> {
    source: S,
}

impl<S: LibrarySource> PathwayEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches `library_name` and filters it against the query genes.
    pub async fn fetch_and_filter<G: AsRef<str> + Sync>(
        &self,
        query_genes: &[G],
        library_name: &str,
        options: &FilterOptions,
    ) -> Result<FilteredPathways> {
        Ok(self
            .build_report(query_genes, library_name, options)
            .await?
            .pathways)
    }

    /// Like [`fetch_and_filter`](Self::fetch_and_filter), but a failed download
    /// is logged and yields an empty result.
    pub async fn get_filtered_pathways<G: AsRef<str> + Sync>(
        &self,
        query_genes: &[G],
        library_name: &str,
        options: &FilterOptions,
    ) -> FilteredPathways {
        match self.fetch_and_filter(query_genes, library_name, options).await {
            Ok(pathways) => pathways,
            Err(e) => {
                tracing::error!(
                    "Failed to download or access the gene set library '{}'. Error: {}",
                    library_name,
                    e
                );
                tracing::error!("💡 {}", e.recovery_suggestion());
                FilteredPathways::new()
            }
        }
    }

    pub async fn build_report<G: AsRef<str> + Sync>(
        &self,
        query_genes: &[G],
        library_name: &str,
        options: &FilterOptions,
    ) -> Result<PathwayReport> {
        tracing::info!("Starting pathway fetch for library: {}", library_name);

        tracing::info!("Downloading gene set library: {}...", library_name);
        let library = self.source.fetch_library(library_name).await?;
        tracing::info!("Successfully downloaded {} total pathways.", library.len());

        tracing::info!("Filtering pathways based on {} query genes...", query_genes.len());
        let pathways = filter_pathways(&library, query_genes, options);
        tracing::info!(
            "Filtering complete. Found {} pathways containing at least {} matched genes.",
            pathways.len(),
            options.min_genes_per_pathway
        );

        Ok(PathwayReport {
            library: library.name,
            min_genes_per_pathway: options.min_genes_per_pathway,
            case_insensitive: options.case_insensitive,
            query_size: query_set(query_genes, options.case_insensitive).len(),
            total_pathways: library.pathways.len(),
            generated_at: chrono::Utc::now(),
            pathways,
        })
    }

    pub async fn available_libraries(&self) -> Result<Vec<String>> {
        let names = self.source.list_libraries().await?;
        tracing::debug!("{} libraries available", names.len());
        Ok(names)
    }
}
