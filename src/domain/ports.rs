use crate::domain::model::GeneSetLibrary;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Where gene set libraries come from: the Enrichr API or local GMT files.
#[async_trait]
pub trait LibrarySource: Send + Sync {
    async fn fetch_library(&self, name: &str) -> Result<GeneSetLibrary>;
    async fn list_libraries(&self) -> Result<Vec<String>>;
}
