pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod output;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{enrichr::EnrichrClient, gmt::GmtFileSource, storage::LocalStorage};
pub use config::{RunSettings, SourceKind};
pub use crate::core::{engine::PathwayEngine, filter::filter_pathways};
pub use domain::model::{FilterOptions, FilteredPathways, GeneSetLibrary, PathwayReport};
pub use utils::error::{PathwayError, Result};
