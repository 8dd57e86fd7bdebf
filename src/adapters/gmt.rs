use crate::adapters::library_text::parse_library;
use crate::domain::model::GeneSetLibrary;
use crate::domain::ports::LibrarySource;
use crate::utils::error::{PathwayError, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Offline source reading `<dir>/<library>.gmt`.
#[derive(Debug, Clone)]
pub struct GmtFileSource {
    dir: PathBuf,
}

impl GmtFileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn library_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.gmt", name))
    }
}

#[async_trait]
impl LibrarySource for GmtFileSource {
    async fn fetch_library(&self, name: &str) -> Result<GeneSetLibrary> {
        let path = self.library_path(name);
        tracing::debug!("Reading gene set library from {}", path.display());

        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| PathwayError::LibraryFetch {
                library: name.to_string(),
                message: format!("cannot read {}: {}", path.display(), e),
            })?;

        Ok(parse_library(name, &text))
    }

    async fn list_libraries(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("gmt") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_gmt_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("KEGG_2021_Human.gmt"),
            "Glycolysis\thttp://example.org\tHK1\tHK2\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("Reactome_2022.gmt"), "R\t\tX\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let source = GmtFileSource::new(dir.path());
        let lib = source.fetch_library("KEGG_2021_Human").await.unwrap();
        assert_eq!(lib.pathways["Glycolysis"], vec!["HK1", "HK2"]);

        let names = source.list_libraries().await.unwrap();
        assert_eq!(names, vec!["KEGG_2021_Human", "Reactome_2022"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_fetch_error() {
        let dir = TempDir::new().unwrap();
        let err = GmtFileSource::new(dir.path())
            .fetch_library("Missing")
            .await
            .unwrap_err();
        assert!(matches!(err, PathwayError::LibraryFetch { .. }));
    }
}
